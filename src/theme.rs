//! Chart display colours.
//!
//! Registered once at startup with [`init`]; everything else reads
//! [`current`], which falls back to [`Theme::default`] when nothing was registered.

use std::sync::OnceLock;

use crate::config::Config;

static THEME: OnceLock<Theme> = OnceLock::new();

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub opened_color: String,
    pub closed_color: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            opened_color: "#67b7dc".to_string(),
            closed_color: "#6771dc".to_string(),
        }
    }
}

impl Theme {
    /// Default theme with any colours overridden by configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let defaults = Self::default();
        Self {
            opened_color: config
                .chart_opened_color
                .clone()
                .unwrap_or(defaults.opened_color),
            closed_color: config
                .chart_closed_color
                .clone()
                .unwrap_or(defaults.closed_color),
        }
    }
}

/// Register the process-wide theme. Returns `false` if one was already registered,
/// in which case the first registration stays in effect.
pub fn init(theme: Theme) -> bool {
    let registered = THEME.set(theme).is_ok();
    if !registered {
        tracing::warn!("Chart theme already initialized, ignoring second registration");
    }
    registered
}

#[must_use]
pub fn current() -> &'static Theme {
    static DEFAULT: OnceLock<Theme> = OnceLock::new();
    THEME
        .get()
        .unwrap_or_else(|| DEFAULT.get_or_init(Theme::default))
}
