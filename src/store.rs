//! Backend client contract.

use async_trait::async_trait;

use crate::config::SecretsProvider;
use crate::error::Result;

/// Contract every concrete secret store fulfills.
///
/// Implementations are plain network clients (or in-memory fakes); the
/// existence probe, upsert algorithm and quota throttling live in
/// [`crate::manager::ExternalSecretsManager`], implemented once over any
/// type satisfying this trait.
///
/// Repeated calls with identical arguments must be safe. Any operation may
/// fail with an error: the manager tolerates `get_secret` failures during
/// its existence probe, but store/update failures always propagate.
///
/// # Example Implementation
///
/// ```rust,ignore
/// use secretref::{SecretStore, SecretsProvider, Result};
/// use async_trait::async_trait;
///
/// struct MyVaultStore { /* backend handle */ }
///
/// #[async_trait]
/// impl SecretStore for MyVaultStore {
///     async fn store_secret(&self, name: &str, value: &str) -> Result<()> {
///         // Create the entry in the backend
///         Ok(())
///     }
///
///     async fn update_secret(&self, name: &str, value: &str) -> Result<()> {
///         // Overwrite the existing entry
///         Ok(())
///     }
///
///     async fn get_secret(&self, name: &str) -> Result<String> {
///         Ok("secret-value".to_string())
///     }
///
///     fn provider(&self) -> SecretsProvider {
///         SecretsProvider::InMemory
///     }
/// }
/// ```
#[async_trait]
pub trait SecretStore: Send + Sync {
    /// Create a secret entry in the backend.
    ///
    /// Backends with separate create/update APIs may reject names that
    /// already exist; the manager's upsert algorithm probes first so this
    /// path is only taken for absent entries.
    async fn store_secret(&self, name: &str, value: &str) -> Result<()>;

    /// Overwrite an existing secret entry.
    async fn update_secret(&self, name: &str, value: &str) -> Result<()>;

    /// Retrieve a secret value by name.
    ///
    /// # Errors
    ///
    /// - [`crate::SecretsError::NotFound`] if the entry doesn't exist
    /// - [`crate::SecretsError::Backend`] on any other failure
    async fn get_secret(&self, name: &str) -> Result<String>;

    /// Which provider this store talks to.
    fn provider(&self) -> SecretsProvider;
}
