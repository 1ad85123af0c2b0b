//! HTTP transport configuration.

use std::time::Duration;

use url::Url;

/// Production API root. Request paths are joined onto it, so it must end
/// with `/`.
pub const DEFAULT_BASE_URL: &str = "https://payop.com/v1/";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings for the HTTP transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportConfig {
    pub base_url: Url,
    /// Whole-request timeout.
    pub timeout: Duration,
}

impl TransportConfig {
    /// Create a config for `base_url`, appending the trailing `/` that
    /// relative path joining needs.
    pub fn new(mut base_url: Url) -> Self {
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Self {
            base_url,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self::new(Url::parse(DEFAULT_BASE_URL).expect("valid default base url"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url() {
        let config = TransportConfig::default();
        assert_eq!(config.base_url.as_str(), DEFAULT_BASE_URL);
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_trailing_slash_is_added() {
        let config = TransportConfig::new(Url::parse("https://sandbox.example/api/v1").unwrap());
        assert_eq!(config.base_url.as_str(), "https://sandbox.example/api/v1/");
        assert_eq!(
            config.base_url.join("invoices/create").unwrap().as_str(),
            "https://sandbox.example/api/v1/invoices/create"
        );
    }
}
