//! TOML file configuration structures.
//!
//! These structs directly map to the `payop.toml` file format.

use payop_sdk::config::{DEFAULT_BASE_URL, DEFAULT_CURRENCY, DEFAULT_PAYMENT_METHOD};
use serde::{Deserialize, Serialize};
use url::Url;

/// Root configuration structure as read from the TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub gateway: GatewayConfig,
    #[serde(default)]
    pub credentials: CredentialsConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

/// Gateway endpoint section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// API root, e.g. `https://payop.com/v1/`.
    #[serde(default = "default_base_url")]
    pub base_url: Url,
    /// Whole-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_base_url() -> Url {
    Url::parse(DEFAULT_BASE_URL).expect("valid default base url")
}

fn default_timeout_secs() -> u64 {
    30
}

/// Merchant credentials. Any of these may instead come from the
/// environment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CredentialsConfig {
    #[serde(default)]
    pub public_key: String,
    #[serde(default)]
    pub secret_key: String,
    #[serde(default)]
    pub bearer_token: String,
}

/// Session defaults for invoices and checkouts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_payment_method")]
    pub payment_method: u32,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub result_url: String,
    #[serde(default)]
    pub fail_path: String,
    #[serde(default)]
    pub check_status_url: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            payment_method: default_payment_method(),
            currency: default_currency(),
            result_url: String::new(),
            fail_path: String::new(),
            check_status_url: String::new(),
        }
    }
}

fn default_payment_method() -> u32 {
    DEFAULT_PAYMENT_METHOD
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_owned()
}
