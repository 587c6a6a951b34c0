//! Error types for the secrets indirection layer.

use thiserror::Error;

/// Result type for secrets operations.
pub type Result<T> = std::result::Result<T, SecretsError>;

/// Errors that can occur while storing or resolving externalized secrets.
///
/// Not every error is equal here: existence-probe failures are recovered
/// locally by the manager (a failed probe means "treat as absent"), while
/// write failures and interrupted throttle waits always propagate to the
/// caller so the platform aborts the enclosing operation instead of
/// persisting a reference that cannot be resolved.
#[derive(Error, Debug)]
pub enum SecretsError {
    /// Secret not found in the backend.
    #[error("Secret not found: {key}")]
    NotFound { key: String },

    /// Backend-specific failure (network, auth, quota, ...).
    #[error("Backend error: {message}")]
    Backend { message: String },

    /// Configuration error. Raised at construction time, before any secret
    /// traffic is attempted.
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// The throttle wait between backend calls was interrupted. The backend
    /// call's effects may not be finalized; the current operation is aborted.
    #[error("Throttle wait interrupted: {message}")]
    Interrupted { message: String },

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl SecretsError {
    /// Create a not found error.
    pub fn not_found(key: impl Into<String>) -> Self {
        Self::NotFound { key: key.into() }
    }

    /// Create a backend error.
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend { message: message.into() }
    }

    /// Create a config error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config { message: message.into() }
    }

    /// Create an interrupted error.
    pub fn interrupted(message: impl Into<String>) -> Self {
        Self::Interrupted { message: message.into() }
    }
}
