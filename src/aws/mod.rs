//! AWS-family backends.
//!
//! Credential resolution is a pure decision over the configured parameters
//! and is always compiled; the SDK-backed stores (Secrets Manager, SSM
//! Parameter Store) are gated behind the `aws` feature so default builds
//! carry no cloud SDKs.

pub mod credentials;

#[cfg(feature = "aws")]
pub mod sdk;
#[cfg(feature = "aws")]
pub mod secrets_manager;
#[cfg(feature = "aws")]
pub mod ssm;

pub use credentials::CredentialSource;

#[cfg(feature = "aws")]
pub use secrets_manager::AwsSecretsManagerStore;
#[cfg(feature = "aws")]
pub use ssm::SsmSecretStore;

use std::time::Duration;

/// Default inter-call delay for AWS-family managers.
///
/// AWS throttles Secrets Manager and SSM per-second request rates; bulk
/// externalization passes stay under them with this spacing. Overridable
/// through [`crate::ExternalSecretsManager::new`].
pub const DEFAULT_WAIT_BETWEEN_CALLS: Duration = Duration::from_millis(100);
