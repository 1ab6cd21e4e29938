//! Error types for the quotes workspace.

use thiserror::Error;

/// Errors raised while retrieving or normalizing quote data.
#[derive(Error, Debug)]
pub enum DataError {
    /// The provider payload is structurally unusable (e.g. misaligned arrays).
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// The provider answered with an explicit error envelope.
    #[error("Provider error {code}: {description}")]
    Provider { code: String, description: String },

    /// A tabular row could not be normalized.
    #[error("Invalid row {row}: {reason}")]
    InvalidRow { row: usize, reason: String },

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Indicator calculation errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum IndicatorError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Empty input series")]
    EmptyInput,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_error_display() {
        let err = DataError::Provider {
            code: "Not Found".to_string(),
            description: "No data found, symbol may be delisted".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Provider error Not Found: No data found, symbol may be delisted"
        );
    }
}
