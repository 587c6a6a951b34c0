//! AWS Secrets Manager backed [`SecretStore`].

use async_trait::async_trait;
use aws_sdk_secretsmanager::Client;
use tracing::info;

use crate::config::{SecretsConfig, SecretsProvider};
use crate::error::{Result, SecretsError};
use crate::store::SecretStore;

use super::credentials::CredentialSource;
use super::sdk::load_sdk_config;

/// [`SecretStore`] over AWS Secrets Manager.
///
/// Create/update map onto the service's split API (`CreateSecret` /
/// `PutSecretValue`); the upsert logic deciding between them lives in
/// [`crate::ExternalSecretsManager`].
pub struct AwsSecretsManagerStore {
    client: Client,
}

impl std::fmt::Debug for AwsSecretsManagerStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AwsSecretsManagerStore").finish_non_exhaustive()
    }
}

impl AwsSecretsManagerStore {
    /// Initialize the client from configured parameters.
    ///
    /// Credential precedence follows [`CredentialSource::from_config`]; the
    /// client is built exactly once, here.
    pub async fn new(config: &SecretsConfig) -> Result<Self> {
        let source = CredentialSource::from_config(config);
        info!(credentials = ?source, "Initializing AWS Secrets Manager client");
        let sdk_config = load_sdk_config(&source).await;
        Ok(Self::from_client(Client::new(&sdk_config)))
    }

    /// Wrap an already-built client (shared SDK config, tests).
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SecretStore for AwsSecretsManagerStore {
    async fn store_secret(&self, name: &str, value: &str) -> Result<()> {
        self.client
            .create_secret()
            .name(name)
            .secret_string(value)
            .send()
            .await
            .map_err(|e| SecretsError::backend(format!("CreateSecret failed for '{}': {}", name, e)))?;
        Ok(())
    }

    async fn update_secret(&self, name: &str, value: &str) -> Result<()> {
        self.client
            .put_secret_value()
            .secret_id(name)
            .secret_string(value)
            .send()
            .await
            .map_err(|e| {
                SecretsError::backend(format!("PutSecretValue failed for '{}': {}", name, e))
            })?;
        Ok(())
    }

    async fn get_secret(&self, name: &str) -> Result<String> {
        let resp = self
            .client
            .get_secret_value()
            .secret_id(name)
            .send()
            .await
            .map_err(|e| {
                if e.as_service_error().is_some_and(|s| s.is_resource_not_found_exception()) {
                    SecretsError::not_found(name)
                } else {
                    SecretsError::backend(format!("GetSecretValue failed for '{}': {}", name, e))
                }
            })?;

        resp.secret_string()
            .map(str::to_string)
            .ok_or_else(|| SecretsError::not_found(name))
    }

    fn provider(&self) -> SecretsProvider {
        SecretsProvider::Aws
    }
}
