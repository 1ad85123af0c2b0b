//! Session defaults applied to invoice and checkout requests.

use serde::{Deserialize, Serialize};

/// Payment method used when none is configured.
pub const DEFAULT_PAYMENT_METHOD: u32 = 381;

/// Currency used when none is configured.
pub const DEFAULT_CURRENCY: &str = "EUR";

/// Values read by the next invoice or checkout request.
///
/// Fields keep their value across calls until overwritten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub payment_method: u32,
    /// ISO 4217 code sent as `payCurrency` on checkout.
    pub currency: String,
    /// Sent as `resultUrl` on invoice creation.
    pub invoice_result_url: String,
    /// Sent as `failPath` on invoice creation.
    pub invoice_fail_path: String,
    /// Sent as `checkStatusUrl` on checkout.
    pub check_status_url: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            payment_method: DEFAULT_PAYMENT_METHOD,
            currency: DEFAULT_CURRENCY.to_owned(),
            invoice_result_url: String::new(),
            invoice_fail_path: String::new(),
            check_status_url: String::new(),
        }
    }
}

impl SessionConfig {
    pub fn with_payment_method(mut self, id: u32) -> Self {
        self.payment_method = id;
        self
    }

    pub fn with_currency(mut self, code: impl Into<String>) -> Self {
        self.currency = code.into();
        self
    }

    pub fn with_invoice_result_url(mut self, url: impl Into<String>) -> Self {
        self.invoice_result_url = url.into();
        self
    }

    pub fn with_invoice_fail_path(mut self, url: impl Into<String>) -> Self {
        self.invoice_fail_path = url.into();
        self
    }

    pub fn with_check_status_url(mut self, url: impl Into<String>) -> Self {
        self.check_status_url = url.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let session = SessionConfig::default();
        assert_eq!(session.payment_method, 381);
        assert_eq!(session.currency, "EUR");
        assert!(session.invoice_result_url.is_empty());
        assert!(session.invoice_fail_path.is_empty());
        assert!(session.check_status_url.is_empty());
    }

    #[test]
    fn test_builder_leaves_other_fields() {
        let session = SessionConfig::default()
            .with_currency("USD")
            .with_check_status_url("https://shop.example/status");
        assert_eq!(session.currency, "USD");
        assert_eq!(session.check_status_url, "https://shop.example/status");
        assert_eq!(session.payment_method, DEFAULT_PAYMENT_METHOD);
    }
}
