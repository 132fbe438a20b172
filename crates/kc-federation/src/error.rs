//! Federation error types.
//!
//! ## NIST 800-53 Rev5: AU-2 (Event Logging)
//!
//! Error types carry enough context for audit logging without including
//! credential values.

use kc_spi::SpiError;
use thiserror::Error;

/// Errors that can occur during federation operations.
#[derive(Debug, Error)]
pub enum FederationError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// User not found in external system.
    #[error("User not found: {0}")]
    UserNotFound(String),

    /// Operation not supported by this provider.
    #[error("Operation not supported: {0}")]
    NotSupported(String),

    /// Provider is read-only.
    #[error("Provider is read-only: cannot {0}")]
    ReadOnly(String),

    /// Internal error.
    #[error("Internal federation error: {0}")]
    Internal(String),

    /// Error raised by the SPI layer (factory creation, component parsing).
    #[error(transparent)]
    Spi(#[from] SpiError),
}

impl FederationError {
    /// Creates a configuration error.
    #[must_use]
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Creates a user not found error.
    #[must_use]
    pub fn user_not_found(username: impl Into<String>) -> Self {
        Self::UserNotFound(username.into())
    }

    /// Creates a read-only error.
    #[must_use]
    pub fn read_only(operation: impl Into<String>) -> Self {
        Self::ReadOnly(operation.into())
    }

    /// Creates a not supported error.
    #[must_use]
    pub fn not_supported(operation: impl Into<String>) -> Self {
        Self::NotSupported(operation.into())
    }

    /// Checks if the caller asked for something this provider never does.
    ///
    /// Covers writes against a read-only store as well as unsupported
    /// operations. These are final for the request and must not be retried.
    #[must_use]
    pub const fn is_unsupported_operation(&self) -> bool {
        matches!(self, Self::NotSupported(_) | Self::ReadOnly(_))
    }

    /// Checks if this is a read-only error.
    #[must_use]
    pub const fn is_read_only(&self) -> bool {
        matches!(self, Self::ReadOnly(_))
    }

    /// Checks if this is a user not found error.
    #[must_use]
    pub const fn is_user_not_found(&self) -> bool {
        matches!(self, Self::UserNotFound(_))
    }
}

impl From<FederationError> for SpiError {
    fn from(err: FederationError) -> Self {
        match err {
            FederationError::Spi(inner) => inner,
            FederationError::Configuration(msg) => Self::Configuration(msg),
            other => Self::CreationFailed(other.to_string()),
        }
    }
}

/// Result type for federation operations.
pub type FederationResult<T> = Result<T, FederationError>;
