//! Error hierarchy for the wallet client.
//!
//! Every failure the gateway can produce is an [`AppError`]. Nested enums keep
//! the kinds stable so callers branch on the variant, never on message text.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type AppResult<T> = Result<T, AppError>;

/// Top-level error type returned by every gateway operation.
#[derive(Debug, Error)]
pub enum AppError {
    /// Parameters rejected locally; no request was sent.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The transport could not complete the round trip.
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// The remote service answered with status >= 400 and a valid error envelope.
    #[error("Remote API error: {0}")]
    Api(#[from] ApiError),

    /// The remote service answered with status >= 400 but the body was not an
    /// error envelope.
    #[error("Malformed error response (status {status_code}): {message}")]
    MalformedErrorResponse { status_code: u16, message: String },

    /// A success body did not match the expected response shape.
    #[error("Deserialization error: {0}")]
    Deserialization(String),

    /// A request payload could not be encoded.
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Local parameter validation failures.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("invalid coin type: {0}")]
    InvalidCoinType(u32),

    #[error("label cannot exceed {max} symbols (got {actual})")]
    LabelTooLong { max: usize, actual: usize },

    #[error("invalid address value")]
    InvalidAddress,

    #[error("invalid amount value: {0}")]
    InvalidAmount(f64),
}

/// Failures raised by a [`Transport`](crate::domain::Transport) implementation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to read response body: {0}")]
    Body(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err.to_string())
        } else if err.is_connect() {
            Self::Connection(err.to_string())
        } else if err.is_builder() {
            Self::InvalidRequest(err.to_string())
        } else if err.is_body() || err.is_decode() {
            Self::Body(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

/// Error envelope returned by the remote service.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("status {status_code}: {message}")]
pub struct ApiError {
    pub status_code: u16,
    pub message: String,
}

impl ApiError {
    #[must_use]
    pub fn new(status_code: u16, message: impl Into<String>) -> Self {
        Self {
            status_code,
            message: message.into(),
        }
    }

    /// The server's human-readable message, exactly as sent.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Configuration loading failures.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingVariable(String),

    #[error("Invalid value for {name}: {message}")]
    InvalidValue { name: String, message: String },
}

/// Returned when a currency code does not name a registered coin.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown currency code: {0}")]
pub struct UnknownCurrencyCode(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_converts_into_app_error() {
        let err: AppError = ValidationError::InvalidAddress.into();
        assert!(matches!(
            err,
            AppError::Validation(ValidationError::InvalidAddress)
        ));
    }

    #[test]
    fn test_api_error_keeps_exact_message() {
        let err = ApiError::new(400, "insufficient funds");
        assert_eq!(err.message(), "insufficient funds");
        assert_eq!(err.to_string(), "status 400: insufficient funds");

        let app: AppError = err.into();
        assert_eq!(
            app.to_string(),
            "Remote API error: status 400: insufficient funds"
        );
    }

    #[test]
    fn test_label_too_long_display() {
        let err = ValidationError::LabelTooLong {
            max: 128,
            actual: 129,
        };
        assert_eq!(err.to_string(), "label cannot exceed 128 symbols (got 129)");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidValue {
            name: "BITHUB_NETWORK".to_string(),
            message: "expected mainnet or testnet".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for BITHUB_NETWORK: expected mainnet or testnet"
        );
    }
}
