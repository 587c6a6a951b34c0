//! Secrets manager configuration.
//!
//! [`SecretsConfig`] selects which provider backs the indirection layer and
//! carries the provider-specific parameter map. It is constructed once at
//! startup (from the embedding platform's config file or from the
//! environment) and is immutable for the lifetime of the manager.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, SecretsError};

/// Parameter key for the AWS access key id.
pub const ACCESS_KEY_ID: &str = "accessKeyId";
/// Parameter key for the AWS secret access key.
pub const SECRET_ACCESS_KEY: &str = "secretAccessKey";
/// Parameter key for the AWS region.
pub const REGION: &str = "region";

/// Secrets manager provider selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SecretsProvider {
    /// Values stay inline in the platform's own database (no externalization).
    #[default]
    Db,
    /// AWS Secrets Manager.
    Aws,
    /// AWS SSM Parameter Store.
    AwsSsm,
    /// In-memory store for development and testing.
    InMemory,
}

impl SecretsProvider {
    /// Get the wire representation of this provider.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Db => "db",
            Self::Aws => "aws",
            Self::AwsSsm => "aws_ssm",
            Self::InMemory => "in_memory",
        }
    }

    /// True for providers that store values outside the platform database.
    pub fn is_external(&self) -> bool {
        !matches!(self, Self::Db)
    }
}

impl FromStr for SecretsProvider {
    type Err = SecretsError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "db" => Ok(Self::Db),
            "aws" => Ok(Self::Aws),
            "aws_ssm" => Ok(Self::AwsSsm),
            "in_memory" => Ok(Self::InMemory),
            _ => Err(SecretsError::config(format!("Unknown secrets provider: {}", s))),
        }
    }
}

impl fmt::Display for SecretsProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Immutable configuration for the secrets indirection layer.
///
/// `parameters` keys are provider-specific. For the AWS-family providers the
/// recognized keys are [`ACCESS_KEY_ID`], [`SECRET_ACCESS_KEY`] and
/// [`REGION`]; all optional, missing keys read as the empty string.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SecretsConfig {
    /// Which backend stores externalized values.
    pub provider: SecretsProvider,

    /// Provider-specific parameters.
    #[serde(default)]
    pub parameters: HashMap<String, String>,
}

impl SecretsConfig {
    /// Create a configuration with no parameters.
    pub fn new(provider: SecretsProvider) -> Self {
        Self { provider, parameters: HashMap::new() }
    }

    /// Add a parameter (builder style, for construction only).
    pub fn with_parameter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.insert(key.into(), value.into());
        self
    }

    /// Look up a parameter, defaulting to the empty string.
    ///
    /// Missing keys are indistinguishable from explicitly empty ones; the
    /// credential resolution logic treats both as "not configured".
    pub fn parameter(&self, key: &str) -> &str {
        self.parameters.get(key).map(String::as_str).unwrap_or("")
    }

    /// Create configuration from environment variables.
    ///
    /// Reads `SECRETREF_PROVIDER` (default `db`) plus `SECRETREF_REGION`,
    /// `SECRETREF_ACCESS_KEY_ID` and `SECRETREF_SECRET_ACCESS_KEY` for the
    /// AWS-family providers. Unset variables are simply absent from the
    /// parameter map.
    pub fn from_env() -> Result<Self> {
        let provider: SecretsProvider = std::env::var("SECRETREF_PROVIDER")
            .unwrap_or_else(|_| "db".to_string())
            .parse()?;

        let mut parameters = HashMap::new();
        for (var, key) in [
            ("SECRETREF_REGION", REGION),
            ("SECRETREF_ACCESS_KEY_ID", ACCESS_KEY_ID),
            ("SECRETREF_SECRET_ACCESS_KEY", SECRET_ACCESS_KEY),
        ] {
            if let Ok(value) = std::env::var(var) {
                parameters.insert(key.to_string(), value);
            }
        }

        Ok(Self { provider, parameters })
    }
}
