//! AWS SSM Parameter Store backed [`SecretStore`].
//!
//! Values are written as `SecureString` parameters, so the account's KMS
//! key encrypts them at rest and reads need `ssm:GetParameter` plus the
//! corresponding KMS permissions.

use async_trait::async_trait;
use aws_sdk_ssm::types::ParameterType;
use aws_sdk_ssm::Client;
use tracing::info;

use crate::config::{SecretsConfig, SecretsProvider};
use crate::error::{Result, SecretsError};
use crate::store::SecretStore;

use super::credentials::CredentialSource;
use super::sdk::load_sdk_config;

/// [`SecretStore`] over AWS SSM Parameter Store.
///
/// SSM has a single `PutParameter` API; the create/update split is carried
/// by the overwrite flag, so a create against an existing name still fails
/// the way the upsert algorithm expects.
pub struct SsmSecretStore {
    client: Client,
}

impl std::fmt::Debug for SsmSecretStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SsmSecretStore").finish_non_exhaustive()
    }
}

impl SsmSecretStore {
    /// Initialize the client from configured parameters.
    pub async fn new(config: &SecretsConfig) -> Result<Self> {
        let source = CredentialSource::from_config(config);
        info!(credentials = ?source, "Initializing AWS SSM Parameter Store client");
        let sdk_config = load_sdk_config(&source).await;
        Ok(Self::from_client(Client::new(&sdk_config)))
    }

    /// Wrap an already-built client (shared SDK config, tests).
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }

    async fn put_parameter(&self, name: &str, value: &str, overwrite: bool) -> Result<()> {
        self.client
            .put_parameter()
            .name(name)
            .value(value)
            .r#type(ParameterType::SecureString)
            .overwrite(overwrite)
            .send()
            .await
            .map_err(|e| SecretsError::backend(format!("PutParameter failed for '{}': {}", name, e)))?;
        Ok(())
    }
}

#[async_trait]
impl SecretStore for SsmSecretStore {
    async fn store_secret(&self, name: &str, value: &str) -> Result<()> {
        self.put_parameter(name, value, false).await
    }

    async fn update_secret(&self, name: &str, value: &str) -> Result<()> {
        self.put_parameter(name, value, true).await
    }

    async fn get_secret(&self, name: &str) -> Result<String> {
        let resp = self
            .client
            .get_parameter()
            .name(name)
            .with_decryption(true)
            .send()
            .await
            .map_err(|e| {
                if e.as_service_error().is_some_and(|s| s.is_parameter_not_found()) {
                    SecretsError::not_found(name)
                } else {
                    SecretsError::backend(format!("GetParameter failed for '{}': {}", name, e))
                }
            })?;

        resp.parameter
            .and_then(|p| p.value)
            .ok_or_else(|| SecretsError::not_found(name))
    }

    fn provider(&self) -> SecretsProvider {
        SecretsProvider::AwsSsm
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_ssm::config::BehaviorVersion;

    fn offline_store() -> SsmSecretStore {
        let conf =
            aws_sdk_ssm::Config::builder().behavior_version(BehaviorVersion::latest()).build();
        SsmSecretStore::from_client(Client::from_conf(conf))
    }

    #[test]
    fn test_provider_tag() {
        assert_eq!(offline_store().provider(), SecretsProvider::AwsSsm);
    }

    #[test]
    fn test_debug_hides_client() {
        let debug = format!("{:?}", offline_store());
        assert_eq!(debug, "SsmSecretStore { .. }");
    }
}
