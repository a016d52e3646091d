use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Failures of the sensor platform client and the chart data normalizer.
///
/// None of these are retried or defaulted; the caller decides how to recover.
#[derive(Debug, thiserror::Error)]
pub enum SensorError {
    /// Network unreachable, timeout, or the body could not be read.
    #[error("Transport error: {message}")]
    Transport { message: String, timeout: bool },

    /// The upstream answered with a non-2xx status.
    #[error("Request failed: {status} {status_text}")]
    RequestFailed { status: u16, status_text: String },

    /// The body is not valid JSON of the expected shape, or a field inside it
    /// could not be parsed.
    #[error("Failed to parse response: {0}")]
    ParseFailed(String),

    /// A value outside its declared domain, e.g. an unknown door state.
    #[error("Data contract violation: {0}")]
    DataContractViolation(String),

    #[error("Invalid sensor API base URL: {0}")]
    InvalidBaseUrl(String),
}

impl From<reqwest::Error> for SensorError {
    fn from(e: reqwest::Error) -> Self {
        Self::Transport {
            timeout: e.is_timeout(),
            message: e.to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Sensor API error: {0}")]
    Sensor(#[from] SensorError),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Superseded by a newer query")]
    Superseded,

    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            Self::Sensor(e) => {
                tracing::error!("Sensor API error: {e}");
                let status = match e {
                    SensorError::Transport { timeout: true, .. } => StatusCode::GATEWAY_TIMEOUT,
                    SensorError::InvalidBaseUrl(_) => StatusCode::INTERNAL_SERVER_ERROR,
                    _ => StatusCode::BAD_GATEWAY,
                };
                (status, e.to_string())
            }
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            Self::Superseded => (StatusCode::CONFLICT, self.to_string()),
            Self::Config(e) => {
                tracing::error!("Config error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Configuration error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
