//! In-memory secret store for development and testing.
//!
//! Keeps secrets in a process-local map. Nothing is encrypted and nothing
//! survives a restart; use a real backend in production.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::config::SecretsProvider;
use crate::error::{Result, SecretsError};
use crate::store::SecretStore;

/// Process-local [`SecretStore`].
///
/// Mirrors the strict create/update split of real cloud backends:
/// `store_secret` rejects names that already exist and `update_secret`
/// rejects names that don't, so code exercised against this store sees the
/// same branch behavior the upsert algorithm handles in production.
#[derive(Debug, Default)]
pub struct InMemorySecretStore {
    entries: RwLock<HashMap<String, String>>,
}

impl InMemorySecretStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// True if no entries are stored.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl SecretStore for InMemorySecretStore {
    async fn store_secret(&self, name: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.write().await;
        if entries.contains_key(name) {
            return Err(SecretsError::backend(format!("Secret already exists: {}", name)));
        }
        entries.insert(name.to_string(), value.to_string());
        Ok(())
    }

    async fn update_secret(&self, name: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.write().await;
        match entries.get_mut(name) {
            Some(entry) => {
                *entry = value.to_string();
                Ok(())
            }
            None => Err(SecretsError::not_found(name)),
        }
    }

    async fn get_secret(&self, name: &str) -> Result<String> {
        self.entries
            .read()
            .await
            .get(name)
            .cloned()
            .ok_or_else(|| SecretsError::not_found(name))
    }

    fn provider(&self) -> SecretsProvider {
        SecretsProvider::InMemory
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_store_and_get() {
        let store = InMemorySecretStore::new();
        store.store_secret("svc.password", "hunter2").await.unwrap();
        assert_eq!(store.get_secret("svc.password").await.unwrap(), "hunter2");
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_store_rejects_existing() {
        let store = InMemorySecretStore::new();
        store.store_secret("svc.password", "v1").await.unwrap();

        let err = store.store_secret("svc.password", "v2").await.unwrap_err();
        assert!(matches!(err, SecretsError::Backend { .. }));
        // Original value untouched.
        assert_eq!(store.get_secret("svc.password").await.unwrap(), "v1");
    }

    #[tokio::test]
    async fn test_update_rejects_missing() {
        let store = InMemorySecretStore::new();
        let err = store.update_secret("svc.password", "v1").await.unwrap_err();
        assert!(matches!(err, SecretsError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_update_overwrites() {
        let store = InMemorySecretStore::new();
        store.store_secret("svc.password", "v1").await.unwrap();
        store.update_secret("svc.password", "v2").await.unwrap();
        assert_eq!(store.get_secret("svc.password").await.unwrap(), "v2");
    }

    #[tokio::test]
    async fn test_get_missing() {
        let store = InMemorySecretStore::new();
        let err = store.get_secret("absent").await.unwrap_err();
        assert!(matches!(err, SecretsError::NotFound { .. }));
        assert!(store.is_empty().await);
    }
}
