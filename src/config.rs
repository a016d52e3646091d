use std::env;

use crate::sensor::normalize::NoDataRule;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Deployment {
    Local,
    Dev,
    Stage,
    Prod,
}

impl Deployment {
    #[must_use]
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "dev" | "development" => Self::Dev,
            "stage" | "staging" => Self::Stage,
            "prod" | "production" => Self::Prod,
            _ => Self::Local,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    // Sensor platform API
    pub sensor_api_base_url: String,
    pub sensor_api_timeout_seconds: u64,

    // API settings
    pub api_host: String,
    pub api_port: u16,
    pub base_path: String,

    // Caching
    pub rooms_cache_ttl_seconds: Option<u64>,
    pub query_session_idle_seconds: u64,

    // Charts
    pub no_data_rule: NoDataRule,
    pub chart_opened_color: Option<String>,
    pub chart_closed_color: Option<String>,

    // Application metadata
    pub deployment: Deployment,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Missing` if required environment variables are not set,
    /// and `ConfigError::Invalid` if a value cannot be understood.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            // Sensor platform API
            sensor_api_base_url: env::var("SENSOR_API_BASE_URL")
                .map_err(|_| ConfigError::Missing("SENSOR_API_BASE_URL"))?,
            sensor_api_timeout_seconds: env::var("SENSOR_API_TIMEOUT_SECONDS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .unwrap_or(30),

            // API settings
            api_host: env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            api_port: env::var("API_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .unwrap_or(3000),
            base_path: normalize_base_path(&env::var("DASHBOARD_BASE_PATH").unwrap_or_default()),

            // Caching
            rooms_cache_ttl_seconds: env::var("ROOMS_CACHE_TTL_SECONDS")
                .ok()
                .and_then(|s| s.parse().ok()),
            query_session_idle_seconds: env::var("QUERY_SESSION_IDLE_SECONDS")
                .unwrap_or_else(|_| "300".to_string())
                .parse()
                .unwrap_or(300),

            // Charts
            no_data_rule: parse_no_data_rule(
                &env::var("NO_DATA_RULE").unwrap_or_else(|_| "leading_hours".to_string()),
            )?,
            chart_opened_color: env::var("CHART_OPENED_COLOR").ok(),
            chart_closed_color: env::var("CHART_CLOSED_COLOR").ok(),

            // Application metadata
            deployment: Deployment::from_str(
                &env::var("DEPLOYMENT").unwrap_or_else(|_| "local".to_string()),
            ),
        })
    }

    /// Configuration pointing at `sensor_api_base_url` with every other
    /// setting at its default. Used by tests and tools that skip the environment.
    #[must_use]
    pub fn with_base_url(sensor_api_base_url: impl Into<String>) -> Self {
        Self {
            sensor_api_base_url: sensor_api_base_url.into(),
            sensor_api_timeout_seconds: 30,
            api_host: "0.0.0.0".to_string(),
            api_port: 3000,
            base_path: String::new(),
            rooms_cache_ttl_seconds: None,
            query_session_idle_seconds: 300,
            no_data_rule: NoDataRule::default(),
            chart_opened_color: None,
            chart_closed_color: None,
            deployment: Deployment::Local,
        }
    }

    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.api_host, self.api_port)
    }
}

/// Trim slashes so `"/itera-smart-building/"` becomes `"/itera-smart-building"`
/// and `"/"` becomes empty (no prefix).
fn normalize_base_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}

fn parse_no_data_rule(raw: &str) -> Result<NoDataRule, ConfigError> {
    match raw.to_lowercase().as_str() {
        "leading_hours" | "hours" => Ok(NoDataRule::LeadingHours),
        "total_minutes" | "minutes" => Ok(NoDataRule::TotalMinutes),
        _ => Err(ConfigError::Invalid {
            name: "NO_DATA_RULE",
            value: raw.to_string(),
        }),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deployment_accepts_long_and_short_names() {
        assert_eq!(Deployment::from_str("PROD"), Deployment::Prod);
        assert_eq!(Deployment::from_str("staging"), Deployment::Stage);
        assert_eq!(Deployment::from_str("development"), Deployment::Dev);
        assert_eq!(Deployment::from_str("anything"), Deployment::Local);
    }

    #[test]
    fn base_path_is_trimmed() {
        assert_eq!(normalize_base_path(""), "");
        assert_eq!(normalize_base_path("/"), "");
        assert_eq!(
            normalize_base_path("/itera-smart-building/"),
            "/itera-smart-building"
        );
        assert_eq!(normalize_base_path("dashboard"), "/dashboard");
    }

    #[test]
    fn no_data_rule_parses_known_names() {
        assert_eq!(
            parse_no_data_rule("leading_hours").unwrap(),
            NoDataRule::LeadingHours
        );
        assert_eq!(
            parse_no_data_rule("TOTAL_MINUTES").unwrap(),
            NoDataRule::TotalMinutes
        );
        assert!(matches!(
            parse_no_data_rule("seconds"),
            Err(ConfigError::Invalid { name: "NO_DATA_RULE", .. })
        ));
    }
}
