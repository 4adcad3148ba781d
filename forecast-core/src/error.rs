pub use reqwest::StatusCode;
use thiserror::Error;

/// Failures that can happen while talking to the upstream weather service.
///
/// Callers in the CLI treat every variant as ordinary control flow: the
/// message is shown to the user and the operation yields nothing.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("request to {endpoint} failed: {source}")]
    Request {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{endpoint} request failed with status {status}: {body}")]
    Status {
        endpoint: &'static str,
        status: StatusCode,
        body: String,
    },

    #[error("failed to parse {endpoint} response: {source}")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid client configuration: {0}")]
    InvalidConfig(String),
}

impl WeatherError {
    /// True for failures caused by the transport rather than by the payload.
    pub fn is_transport(&self) -> bool {
        matches!(self, WeatherError::Request { .. })
    }
}
