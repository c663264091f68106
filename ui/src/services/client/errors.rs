use thiserror::Error;

/// Failures of a single employee filter request.
///
/// The trigger collapses every variant into one "log and keep the current
/// list" outcome; the variants exist so the log line says what went wrong.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FilterError {
    /// The origin or endpoint path could not be turned into a request URL
    #[error("Invalid filter endpoint '{endpoint}': {message}")]
    InvalidEndpoint { endpoint: String, message: String },

    /// The request never produced a response (offline, CORS, aborted)
    #[error("Transport error: {message}")]
    Transport { message: String },

    /// The server answered with a non-success status
    #[error("Server responded with {status} {reason}")]
    Status { status: u16, reason: String },

    /// The body was not a JSON array of employee records
    #[error("Malformed employee payload: {message}")]
    MalformedPayload { message: String },
}

impl From<serde_json::Error> for FilterError {
    fn from(err: serde_json::Error) -> Self {
        FilterError::MalformedPayload {
            message: err.to_string(),
        }
    }
}

impl From<reqwest::Error> for FilterError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => FilterError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            },
            None => FilterError::Transport {
                message: err.to_string(),
            },
        }
    }
}

/// Result type for filter operations
pub type FilterResult<T> = Result<T, FilterError>;
