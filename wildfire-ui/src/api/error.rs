//! Client Error Types

use thiserror::Error;

/// Failure of a request to the WildFire server
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    /// Transport failure, the request never got a response
    #[error("Network error: {0}")]
    Network(String),

    /// Server answered with a non-2xx status
    #[error("Server error ({status}): {message}")]
    Status { status: u16, message: String },

    /// Response body did not have the expected shape
    #[error("Parse error: {0}")]
    Parse(String),

    /// Request body could not be encoded
    #[error("Request build error: {0}")]
    Encode(String),
}

/// Error body produced by the WildFire server
#[derive(Debug, serde::Deserialize)]
struct ServerErrorBody {
    error: String,
}

impl ClientError {
    /// Build a status error from a raw response body, preferring the
    /// server's own error message when the body carries one.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = match serde_json::from_str::<ServerErrorBody>(body) {
            Ok(ServerErrorBody { error }) => error,
            Err(_) if body.trim().is_empty() => "Unknown error".to_string(),
            Err(_) => body.trim().to_string(),
        };

        ClientError::Status { status, message }
    }
}
