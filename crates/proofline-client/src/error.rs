//! Errors returned by correction service clients.

use thiserror::Error;

/// Errors that can occur when talking to the correction service.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request could not be sent or no response was received.
    #[error("Network error: {0}")]
    Network(String),

    /// The service answered but signalled a failure.
    #[error("{0}")]
    Service(String),

    /// The response body did not match the expected shape.
    #[error("Invalid response: {0}")]
    Decode(String),
}

impl ClientError {
    /// True for transport-level failures.
    pub fn is_network(&self) -> bool {
        matches!(self, ClientError::Network(_))
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClientError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            ClientError::Service(format!("Service responded with {}", status))
        } else {
            ClientError::Network(err.to_string())
        }
    }
}
