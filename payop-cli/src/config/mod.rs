//! Configuration module for the payop CLI.
//!
//! Handles loading configuration from a TOML file and environment
//! overrides, and turns it into the SDK's config types.

pub mod file;

use crate::config::file::FileConfig;
use payop_sdk::config::{Credentials, SessionConfig, TransportConfig};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("validation error: {0}")]
    ValidationError(String),
}

/// Credential values taken from the command line or environment. They win
/// over the file.
#[derive(Debug, Clone, Default)]
pub struct CredentialOverrides {
    pub public_key: Option<String>,
    pub secret_key: Option<String>,
    pub bearer_token: Option<String>,
}

/// Loaded configuration result containing all parts.
#[derive(Debug)]
pub struct LoadedConfig {
    pub credentials: Credentials,
    pub session: SessionConfig,
    pub transport: TransportConfig,
}

/// Configuration loader that handles the complete loading process.
pub struct ConfigLoader {
    config_path: std::path::PathBuf,
    overrides: CredentialOverrides,
}

impl ConfigLoader {
    /// Create a new config loader.
    pub fn new(config_path: impl AsRef<Path>, overrides: CredentialOverrides) -> Self {
        Self {
            config_path: config_path.as_ref().to_path_buf(),
            overrides,
        }
    }

    /// Load and process the configuration.
    ///
    /// This will:
    /// 1. Read the TOML file (a missing file means all defaults)
    /// 2. Apply credential overrides
    /// 3. Validate the configuration
    /// 4. Build the SDK configuration
    pub fn load(&self) -> Result<LoadedConfig, ConfigError> {
        let mut file_config = match std::fs::read_to_string(&self.config_path) {
            Ok(content) => toml::from_str(&content)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(
                    path = %self.config_path.display(),
                    "Config file not found, using defaults and environment"
                );
                FileConfig::default()
            }
            Err(e) => return Err(e.into()),
        };

        self.apply_overrides(&mut file_config);
        validate(&file_config)?;
        Ok(build_loaded_config(file_config))
    }

    fn apply_overrides(&self, config: &mut FileConfig) {
        let credentials = &mut config.credentials;
        if let Some(key) = &self.overrides.public_key {
            credentials.public_key = key.clone();
        }
        if let Some(key) = &self.overrides.secret_key {
            credentials.secret_key = key.clone();
        }
        if let Some(token) = &self.overrides.bearer_token {
            credentials.bearer_token = token.clone();
        }
    }
}

fn validate(config: &FileConfig) -> Result<(), ConfigError> {
    if config.credentials.public_key.is_empty() {
        return Err(ConfigError::ValidationError(
            "credentials.public_key is not set".to_owned(),
        ));
    }
    if config.credentials.secret_key.is_empty() {
        return Err(ConfigError::ValidationError(
            "credentials.secret_key is not set".to_owned(),
        ));
    }
    if config.gateway.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "gateway.timeout_secs must be greater than zero".to_owned(),
        ));
    }
    if config.credentials.bearer_token.is_empty() {
        tracing::warn!("credentials.bearer_token is not set, transaction lookups will fail");
    }
    Ok(())
}

fn build_loaded_config(file_config: FileConfig) -> LoadedConfig {
    let FileConfig {
        gateway,
        credentials,
        session,
    } = file_config;

    LoadedConfig {
        credentials: Credentials::new(
            credentials.public_key,
            credentials.secret_key,
            credentials.bearer_token,
        ),
        session: SessionConfig::default()
            .with_payment_method(session.payment_method)
            .with_currency(session.currency)
            .with_invoice_result_url(session.result_url)
            .with_invoice_fail_path(session.fail_path)
            .with_check_status_url(session.check_status_url),
        transport: TransportConfig::new(gateway.base_url)
            .with_timeout(Duration::from_secs(gateway.timeout_secs)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("payop-cli-{}-{name}.toml", std::process::id()));
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_builds_sdk_config() {
        let path = write_config(
            "load",
            r#"
[gateway]
base_url = "https://sandbox.example/v1"
timeout_secs = 5

[credentials]
public_key = "application-pub"
secret_key = "application-secret"
bearer_token = "jwt"

[session]
currency = "USD"
result_url = "https://shop.example/ok"
"#,
        );
        let loaded = ConfigLoader::new(&path, CredentialOverrides::default())
            .load()
            .unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(loaded.credentials.public_key(), "application-pub");
        assert_eq!(loaded.credentials.bearer_token(), "jwt");
        assert_eq!(loaded.session.currency, "USD");
        assert_eq!(loaded.session.invoice_result_url, "https://shop.example/ok");
        assert_eq!(loaded.session.payment_method, 381);
        assert_eq!(
            loaded.transport.base_url.as_str(),
            "https://sandbox.example/v1/"
        );
        assert_eq!(loaded.transport.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_overrides_win_over_file() {
        let path = write_config(
            "overrides",
            r#"
[credentials]
public_key = "file-pub"
secret_key = "file-secret"
"#,
        );
        let overrides = CredentialOverrides {
            secret_key: Some("env-secret".to_owned()),
            ..Default::default()
        };
        let loaded = ConfigLoader::new(&path, overrides).load().unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(loaded.credentials.public_key(), "file-pub");
        assert_eq!(loaded.credentials.secret_key(), "env-secret");
    }

    #[test]
    fn test_missing_file_uses_overrides() {
        let overrides = CredentialOverrides {
            public_key: Some("env-pub".to_owned()),
            secret_key: Some("env-secret".to_owned()),
            bearer_token: None,
        };
        let loaded = ConfigLoader::new("/nonexistent/payop.toml", overrides)
            .load()
            .unwrap();
        assert_eq!(loaded.credentials.public_key(), "env-pub");
        assert_eq!(loaded.session.currency, "EUR");
    }

    #[test]
    fn test_missing_secret_is_rejected() {
        let overrides = CredentialOverrides {
            public_key: Some("env-pub".to_owned()),
            ..Default::default()
        };
        let err = ConfigLoader::new("/nonexistent/payop.toml", overrides)
            .load()
            .unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let path = write_config(
            "timeout",
            r#"
[gateway]
timeout_secs = 0

[credentials]
public_key = "pub"
secret_key = "secret"
"#,
        );
        let err = ConfigLoader::new(&path, CredentialOverrides::default())
            .load()
            .unwrap_err();
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }
}
