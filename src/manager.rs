//! Secrets manager capability and the external upsert protocol.
//!
//! [`SecretsManager`] is the capability the embedding platform codes
//! against: hand it a field name and a plaintext value, get back either the
//! inline value or an opaque `secret:` reference to persist instead.
//!
//! [`DbSecretsManager`] is the inline mode (values stay in the platform's
//! own database, nothing is externalized). [`ExternalSecretsManager`] wraps
//! any [`SecretStore`] with the store/exists/upsert protocol and quota
//! throttling, implemented once for all backends.
//!
//! # Example
//!
//! ```rust,ignore
//! use secretref::{ExternalSecretsManager, InMemorySecretStore, SecretsManager};
//! use std::time::Duration;
//!
//! let manager = ExternalSecretsManager::new(InMemorySecretStore::new(), Duration::ZERO);
//!
//! // Platform persists the returned reference instead of the password.
//! let reference = manager
//!     .store_value("password", "hunter2", "platform.mysql", true)
//!     .await?;
//! assert_eq!(reference, "secret:platform.mysql.password");
//!
//! // Read side resolves the reference back through the same layer.
//! let value = manager.resolve_value(&reference).await?;
//! assert_eq!(value.expose_secret(), "hunter2");
//! ```

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::config::SecretsProvider;
use crate::error::Result;
use crate::reference;
use crate::store::SecretStore;
use crate::throttle::{QuotaThrottle, Throttle};
use crate::types::SecretString;

/// Capability for converting raw field values into inline values or stored
/// references, and resolving them back.
#[async_trait]
pub trait SecretsManager: Send + Sync {
    /// Convert a field value into what the platform should persist.
    ///
    /// External implementations return a `secret:<id>` reference (writing
    /// the value to the backend when `store` is true); the inline
    /// implementation returns the value unchanged.
    async fn store_value(
        &self,
        field_name: &str,
        value: &str,
        secret_id: &str,
        store: bool,
    ) -> Result<String>;

    /// Resolve a persisted field value back to the real secret.
    ///
    /// Inline values pass through unchanged; references are looked up in
    /// the backend.
    async fn resolve_value(&self, value: &str) -> Result<SecretString>;

    /// Which provider backs this manager.
    fn provider(&self) -> SecretsProvider;
}

impl std::fmt::Debug for dyn SecretsManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretsManager").finish_non_exhaustive()
    }
}

/// Inline mode: secrets stay in the platform's own database.
///
/// `store_value` returns the value unchanged and performs no backend calls.
/// Values already externalized by a previous configuration still resolve as
/// inline strings here, so switching providers is an explicit migration,
/// not something this manager papers over.
#[derive(Debug, Clone, Default)]
pub struct DbSecretsManager;

impl DbSecretsManager {
    /// Create an inline secrets manager.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SecretsManager for DbSecretsManager {
    async fn store_value(
        &self,
        _field_name: &str,
        value: &str,
        _secret_id: &str,
        _store: bool,
    ) -> Result<String> {
        Ok(value.to_string())
    }

    async fn resolve_value(&self, value: &str) -> Result<SecretString> {
        Ok(SecretString::new(value))
    }

    fn provider(&self) -> SecretsProvider {
        SecretsProvider::Db
    }
}

/// External mode: values are written to a [`SecretStore`] and replaced with
/// references.
///
/// The upsert algorithm probes existence first, so the operation is
/// idempotent from the caller's perspective regardless of whether the
/// backend exposes separate create/update APIs. Every quota-consuming
/// backend call is followed by the configured throttle wait.
///
/// No internal locking: callers racing on the same secret id fall into the
/// probe-then-write window and the last writer wins. The platform derives a
/// distinct id per entity field, so this does not happen by design.
pub struct ExternalSecretsManager<S: SecretStore> {
    store: S,
    throttle: Arc<dyn Throttle>,
}

impl<S: SecretStore> ExternalSecretsManager<S> {
    /// Wrap a store with the given inter-call delay.
    pub fn new(store: S, delay: Duration) -> Self {
        Self::with_throttle(store, Arc::new(QuotaThrottle::new(delay)))
    }

    /// Wrap a store with an explicit throttle strategy.
    pub fn with_throttle(store: S, throttle: Arc<dyn Throttle>) -> Self {
        Self { store, throttle }
    }

    /// The wrapped backend store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Create the secret if absent, overwrite it otherwise.
    ///
    /// `None` writes the `"null"` sentinel: the backend never receives a
    /// true null, and a later existence check finds the entry even when it
    /// represents "explicitly empty". Write failures propagate.
    pub async fn upsert_secret(&self, name: &str, value: Option<&str>) -> Result<()> {
        let payload = value.unwrap_or(reference::NULL_SECRET);
        if self.exist_secret(name).await? {
            self.store.update_secret(name, payload).await?;
        } else {
            self.store.store_secret(name, payload).await?;
        }
        self.throttle.wait().await
    }

    /// Probe whether a secret exists in the backend.
    ///
    /// Any probe failure (not found, throttling, transient network error)
    /// reads as "does not exist": a failed probe must never block the
    /// upsert decision, at worst causing a spurious create the backend
    /// rejects or absorbs. The throttle wait applies on both the success
    /// and failure paths, since a failed probe still counts against the
    /// backend quota. A failed wait is the one thing that does propagate.
    pub async fn exist_secret(&self, name: &str) -> Result<bool> {
        let exists = match self.store.get_secret(name).await {
            Ok(_) => true,
            Err(error) => {
                debug!(name, %error, "Existence probe failed, treating secret as absent");
                false
            }
        };
        self.throttle.wait().await?;
        Ok(exists)
    }
}

#[async_trait]
impl<S: SecretStore> SecretsManager for ExternalSecretsManager<S> {
    async fn store_value(
        &self,
        field_name: &str,
        value: &str,
        secret_id: &str,
        store: bool,
    ) -> Result<String> {
        // Already-externalized values pass through untouched; re-wrapping
        // on repeated migrations would corrupt the reference.
        if reference::is_reference(value) {
            debug!(field_name, "Value is already a secret reference, passing through");
            return Ok(value.to_string());
        }

        // build_secret_id lowercases the field segment, so the derived key
        // is stable across caller casing.
        let field_secret_id = reference::build_secret_id([secret_id, field_name]);
        if store {
            self.upsert_secret(&field_secret_id, Some(value)).await?;
        }
        // The reference is returned whether or not the write was requested,
        // so read-side resolution is deterministic given field and id.
        Ok(reference::encode(&field_secret_id))
    }

    async fn resolve_value(&self, value: &str) -> Result<SecretString> {
        match reference::decode(value) {
            Some(secret_id) => {
                let resolved = self.store.get_secret(secret_id).await?;
                Ok(SecretString::new(resolved))
            }
            None => Ok(SecretString::new(value)),
        }
    }

    fn provider(&self) -> SecretsProvider {
        self.store.provider()
    }
}
