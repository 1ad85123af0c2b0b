use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The paying customer.
///
/// Sent as `payer` when creating an invoice and as `customer` on checkout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payer {
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub extra_fields: Map<String, Value>,
}

/// Checkout uses the same shape as the invoice payer.
pub type Customer = Payer;

impl Payer {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            ..Default::default()
        }
    }
}
