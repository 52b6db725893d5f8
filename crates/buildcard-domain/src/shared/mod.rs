use serde::{Deserialize, Serialize};

mod secret;
pub use secret::Secret;

/// Error codes for structured error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Data (4xxx)
    SerializationError = 4004,

    // Infrastructure (5xxx)
    NetworkError = 5002,
    ExternalServiceError = 5004,

    // Validation (6xxx)
    InvalidInput = 6002,
    MissingRequiredField = 6003,
}

impl ErrorCode {
    /// Get error code as integer
    pub fn code(&self) -> u16 {
        *self as u16
    }
}

/// Malformed or missing step input. Fatal, raised before any composition.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("required input `{0}` is not set")]
    Missing(String),

    #[error("input `{name}` is invalid: {reason}")]
    Invalid { name: String, reason: String },
}

impl ConfigError {
    pub fn invalid(name: impl Into<String>, reason: impl Into<String>) -> Self {
        ConfigError::Invalid {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Failure to hand the card over to the webhook.
#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    #[error("failed to serialize card: {0}")]
    Serialization(String),

    #[error("failed to send the request: {0}")]
    Transport(String),

    #[error("server error: {status}, response: {body}")]
    Rejected { status: u16, body: String },
}

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Delivery error: {0}")]
    Delivery(#[from] DeliveryError),
}

impl DomainError {
    /// Get error code
    pub fn code(&self) -> ErrorCode {
        match self {
            DomainError::Config(ConfigError::Missing(_)) => ErrorCode::MissingRequiredField,
            DomainError::Config(ConfigError::Invalid { .. }) => ErrorCode::InvalidInput,
            DomainError::Delivery(DeliveryError::Serialization(_)) => {
                ErrorCode::SerializationError
            }
            DomainError::Delivery(DeliveryError::Transport(_)) => ErrorCode::NetworkError,
            DomainError::Delivery(DeliveryError::Rejected { .. }) => {
                ErrorCode::ExternalServiceError
            }
        }
    }

    /// Format error with code
    pub fn format_with_code(&self) -> String {
        format!("[{}] {}", self.code().code(), self)
    }
}
