//! # secretref
//!
//! A pluggable secrets indirection layer for platforms that would rather
//! not keep credentials in their own configuration database. Callers hand
//! it a field name and a plaintext value; it returns either the value
//! unchanged (inline mode) or an opaque `secret:<id>` reference to persist
//! instead, writing the real value to an external secret store. On read,
//! the same layer resolves the reference back.
//!
//! ## Architecture
//!
//! The layer is built around two seams:
//!
//! - [`SecretsManager`]: the capability the platform codes against
//!   (`store_value` / `resolve_value`). Implemented by [`DbSecretsManager`]
//!   (inline, no externalization) and [`ExternalSecretsManager`].
//! - [`SecretStore`]: the backend client contract
//!   (`store_secret` / `update_secret` / `get_secret`). The idempotent
//!   upsert, failure-tolerant existence probe and quota throttling are
//!   implemented once in [`ExternalSecretsManager`], generically over any
//!   store.
//!
//! ## Supported Backends
//!
//! - **AWS Secrets Manager** (`aws` feature)
//! - **AWS SSM Parameter Store** (`aws` feature)
//! - **In-memory**: development and testing
//!
//! ## Example
//!
//! ```rust,ignore
//! use secretref::{build_secrets_manager, SecretsConfig, SecretsProvider};
//!
//! let config = SecretsConfig::new(SecretsProvider::Aws)
//!     .with_parameter("region", "us-east-1");
//! let manager = build_secrets_manager(&config).await?;
//!
//! // Persist the returned reference instead of the password.
//! let reference = manager
//!     .store_value("password", "hunter2", "platform.mysql", true)
//!     .await?;
//!
//! // Later, on the read path:
//! let value = manager.resolve_value(&reference).await?;
//! ```
//!
//! ## Security Considerations
//!
//! - Secret values never appear in logs, errors, or Debug output
//! - Encryption at rest is the backend's job; this layer stores and
//!   references, it does not encrypt
//! - Secret values are not cached; every resolve hits the backend

pub mod aws;
pub mod config;
pub mod error;
pub mod manager;
pub mod memory;
pub mod reference;
pub mod store;
pub mod throttle;
pub mod types;

// Re-export main types
pub use aws::CredentialSource;
pub use config::{SecretsConfig, SecretsProvider};
pub use error::{Result, SecretsError};
pub use manager::{DbSecretsManager, ExternalSecretsManager, SecretsManager};
pub use memory::InMemorySecretStore;
pub use reference::{NULL_SECRET, SECRET_PREFIX};
pub use store::SecretStore;
pub use throttle::{QuotaThrottle, Throttle};
pub use types::SecretString;

#[cfg(feature = "aws")]
pub use aws::{AwsSecretsManagerStore, SsmSecretStore};

use std::sync::Arc;
use std::time::Duration;

use tracing::info;

/// Build the secrets manager selected by the configuration.
///
/// Fails fast with a [`SecretsError::Config`] for providers this build
/// cannot serve (AWS-family providers without the `aws` feature), before
/// any secret traffic is attempted. AWS-family managers get the default
/// inter-call delay of [`aws::DEFAULT_WAIT_BETWEEN_CALLS`]; construct
/// [`ExternalSecretsManager`] directly to override it.
pub async fn build_secrets_manager(config: &SecretsConfig) -> Result<Arc<dyn SecretsManager>> {
    info!(provider = %config.provider, "Building secrets manager");
    match config.provider {
        SecretsProvider::Db => Ok(Arc::new(DbSecretsManager::new())),

        SecretsProvider::InMemory => Ok(Arc::new(ExternalSecretsManager::new(
            InMemorySecretStore::new(),
            Duration::ZERO,
        ))),

        #[cfg(feature = "aws")]
        SecretsProvider::Aws => {
            let store = AwsSecretsManagerStore::new(config).await?;
            Ok(Arc::new(ExternalSecretsManager::new(store, aws::DEFAULT_WAIT_BETWEEN_CALLS)))
        }

        #[cfg(feature = "aws")]
        SecretsProvider::AwsSsm => {
            let store = SsmSecretStore::new(config).await?;
            Ok(Arc::new(ExternalSecretsManager::new(store, aws::DEFAULT_WAIT_BETWEEN_CALLS)))
        }

        #[cfg(not(feature = "aws"))]
        SecretsProvider::Aws | SecretsProvider::AwsSsm => Err(SecretsError::config(format!(
            "Provider '{}' requires the 'aws' feature",
            config.provider
        ))),
    }
}
