//! Credential resolution for AWS-family backends.
//!
//! A pure decision over the construction-time parameter map: no SDK types,
//! no network. The concrete stores consume the resolved
//! [`CredentialSource`] when they initialize their client, exactly once.

use crate::config::{SecretsConfig, ACCESS_KEY_ID, REGION, SECRET_ACCESS_KEY};
use crate::types::SecretString;

/// How the backend client obtains its region and credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialSource {
    /// Explicit region, credentials discovered through the provider's
    /// default chain (environment, shared profile, instance role).
    DefaultChain { region: String },

    /// Explicit region and static keys from configuration.
    Static {
        access_key_id: String,
        secret_access_key: SecretString,
        region: String,
    },

    /// No explicit region configured: the client performs its own ambient
    /// region and credential discovery.
    Ambient,
}

impl CredentialSource {
    /// Resolve the credential source from configured parameters.
    ///
    /// Precedence, gated on whether a region was explicitly configured:
    /// - region present, both keys blank: default chain with that region
    /// - region present, any key non-blank: static keys with that region
    /// - no region: ambient discovery, regardless of keys
    pub fn from_config(config: &SecretsConfig) -> Self {
        let region = config.parameter(REGION);
        if region.trim().is_empty() {
            return Self::Ambient;
        }

        let access_key_id = config.parameter(ACCESS_KEY_ID);
        let secret_access_key = config.parameter(SECRET_ACCESS_KEY);
        if access_key_id.trim().is_empty() && secret_access_key.trim().is_empty() {
            Self::DefaultChain { region: region.to_string() }
        } else {
            Self::Static {
                access_key_id: access_key_id.to_string(),
                secret_access_key: SecretString::new(secret_access_key),
                region: region.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SecretsProvider;

    fn config() -> SecretsConfig {
        SecretsConfig::new(SecretsProvider::Aws)
    }

    #[test]
    fn test_region_only_selects_default_chain() {
        let config = config().with_parameter(REGION, "us-east-1");

        assert_eq!(
            CredentialSource::from_config(&config),
            CredentialSource::DefaultChain { region: "us-east-1".to_string() }
        );
    }

    #[test]
    fn test_region_and_keys_select_static() {
        let config = config()
            .with_parameter(REGION, "us-east-1")
            .with_parameter(ACCESS_KEY_ID, "AKIAEXAMPLE")
            .with_parameter(SECRET_ACCESS_KEY, "xxx");

        match CredentialSource::from_config(&config) {
            CredentialSource::Static { access_key_id, secret_access_key, region } => {
                assert_eq!(access_key_id, "AKIAEXAMPLE");
                assert_eq!(secret_access_key.expose_secret(), "xxx");
                assert_eq!(region, "us-east-1");
            }
            other => panic!("expected static credentials, got {:?}", other),
        }
    }

    #[test]
    fn test_no_region_selects_ambient() {
        assert_eq!(CredentialSource::from_config(&config()), CredentialSource::Ambient);
    }

    #[test]
    fn test_keys_without_region_still_ambient() {
        // Region gates everything: keys alone don't switch to static.
        let config = config()
            .with_parameter(ACCESS_KEY_ID, "AKIAEXAMPLE")
            .with_parameter(SECRET_ACCESS_KEY, "xxx");

        assert_eq!(CredentialSource::from_config(&config), CredentialSource::Ambient);
    }

    #[test]
    fn test_blank_region_is_absent() {
        let config = config().with_parameter(REGION, "   ");
        assert_eq!(CredentialSource::from_config(&config), CredentialSource::Ambient);
    }

    #[test]
    fn test_single_key_selects_static() {
        // Any non-blank key flips to static; the other key passes through
        // blank and the backend rejects it downstream.
        let config = config()
            .with_parameter(REGION, "us-east-1")
            .with_parameter(ACCESS_KEY_ID, "AKIAEXAMPLE");

        match CredentialSource::from_config(&config) {
            CredentialSource::Static { access_key_id, secret_access_key, .. } => {
                assert_eq!(access_key_id, "AKIAEXAMPLE");
                assert!(secret_access_key.is_empty());
            }
            other => panic!("expected static credentials, got {:?}", other),
        }
    }

    #[test]
    fn test_debug_never_leaks_secret_key() {
        let config = config()
            .with_parameter(REGION, "us-east-1")
            .with_parameter(ACCESS_KEY_ID, "AKIAEXAMPLE")
            .with_parameter(SECRET_ACCESS_KEY, "super-secret");

        let debug = format!("{:?}", CredentialSource::from_config(&config));
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("[REDACTED]"));
    }
}
