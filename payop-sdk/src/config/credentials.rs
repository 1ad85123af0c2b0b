//! Merchant credentials.

use std::fmt;

/// Keys issued by Payop for one merchant application.
///
/// Fixed at construction. `Debug` never prints the secret key or the
/// bearer token.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    public_key: String,
    secret_key: String,
    bearer_token: String,
}

impl Credentials {
    /// Create a new set of credentials.
    ///
    /// * `public_key` – the application public key, sent with every invoice.
    /// * `secret_key` – used only to sign orders, never sent.
    /// * `bearer_token` – JWT sent as `Authorization` on transaction lookups.
    pub fn new(
        public_key: impl Into<String>,
        secret_key: impl Into<String>,
        bearer_token: impl Into<String>,
    ) -> Self {
        Self {
            public_key: public_key.into(),
            secret_key: secret_key.into(),
            bearer_token: bearer_token.into(),
        }
    }

    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    pub fn secret_key(&self) -> &str {
        &self.secret_key
    }

    pub fn bearer_token(&self) -> &str {
        &self.bearer_token
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("public_key", &self.public_key)
            .field("secret_key", &"<redacted>")
            .field("bearer_token", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_secrets() {
        let credentials = Credentials::new("application-pub", "very-secret", "jwt-token");
        let debug = format!("{credentials:?}");
        assert!(debug.contains("application-pub"));
        assert!(!debug.contains("very-secret"));
        assert!(!debug.contains("jwt-token"));
    }
}
