//! Error types for the Lea SDK facade.

use thiserror::Error;

/// A specialized Result type for SDK operations.
pub type LeaResult<T> = Result<T, LeaError>;

/// The main error type for the Lea SDK facade.
#[derive(Error, Debug)]
pub enum LeaError {
    /// Error occurred during HTTP communication
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Error occurred during JSON serialization/deserialization
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error occurred during URL parsing
    #[error("invalid cluster URL: {0}")]
    Url(#[from] url::ParseError),

    /// The node returned an error status at the HTTP level
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error body from the node
        message: String,
    },

    /// Transaction building error
    #[error("transaction error: {0}")]
    Transaction(String),
}

impl LeaError {
    /// Creates a new transaction-building error.
    pub fn transaction<S: Into<String>>(msg: S) -> Self {
        Self::Transaction(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transaction_error_display() {
        let err = LeaError::transaction("missing signer");
        assert_eq!(err.to_string(), "transaction error: missing signer");
    }

    #[test]
    fn api_error_display() {
        let err = LeaError::Api {
            status: 503,
            message: "unavailable".to_string(),
        };
        assert!(err.to_string().contains("503"));
        assert!(err.to_string().contains("unavailable"));
    }
}
