//! Error types for the wizard engine.

use thiserror::Error;

/// Comprehensive error type for all wizard operations.
#[derive(Error, Debug)]
pub enum RsvpError {
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Webhook delivery errors (transport failure or non-success status)
    #[error("Gateway error: {message}")]
    Gateway { message: String },
    /// Configuration errors (missing gateway, bad endpoint, ...)
    #[error("Configuration error: {message}")]
    Configuration { message: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> RsvpError {
        RsvpError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl RsvpError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a gateway error with a message.
    pub fn gateway(message: impl Into<String>) -> Self {
        Self::Gateway {
            message: message.into(),
        }
    }

    /// Creates a configuration error with a message.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

/// Result type alias for wizard operations
pub type Result<T> = std::result::Result<T, RsvpError>;
