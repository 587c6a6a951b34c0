//! Shared SDK configuration for the AWS-family stores.

use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_credential_types::Credentials;

use super::credentials::CredentialSource;

/// Provider name attached to statically configured credentials, visible in
/// SDK debug output and CloudTrail.
const STATIC_PROVIDER_NAME: &str = "secretref-config";

/// Build the shared SDK configuration for a resolved credential source.
///
/// Called once at store construction; both the Secrets Manager and the SSM
/// clients are created from the returned config.
pub async fn load_sdk_config(source: &CredentialSource) -> SdkConfig {
    match source {
        CredentialSource::DefaultChain { region } => {
            aws_config::defaults(BehaviorVersion::latest())
                .region(Region::new(region.clone()))
                .load()
                .await
        }
        CredentialSource::Static { access_key_id, secret_access_key, region } => {
            let credentials = Credentials::new(
                access_key_id.clone(),
                secret_access_key.expose_secret().to_string(),
                None,
                None,
                STATIC_PROVIDER_NAME,
            );
            aws_config::defaults(BehaviorVersion::latest())
                .region(Region::new(region.clone()))
                .credentials_provider(credentials)
                .load()
                .await
        }
        // Region and credentials both come from the SDK's own ambient
        // discovery (env, profile, IMDS).
        CredentialSource::Ambient => aws_config::load_defaults(BehaviorVersion::latest()).await,
    }
}
