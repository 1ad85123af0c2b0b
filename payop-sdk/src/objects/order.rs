//! Order types sent with invoice creation.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::signature::{self, SignatureError};

/// A monetary amount, kept exactly as the caller wrote it.
///
/// The gateway signs the textual amount, so `"5"` and `"5.00"` are different
/// amounts as far as the signature is concerned. No parsing, rounding or
/// normalisation ever happens here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Amount(String);

/// Accepts a JSON string or number and keeps its text.
impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Text {
            String(String),
            Number(serde_json::Number),
        }

        Ok(match Text::deserialize(deserializer)? {
            Text::String(s) => Self(s),
            Text::Number(n) => Self(n.to_string()),
        })
    }
}

impl Amount {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Amount {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for Amount {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<u64> for Amount {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl From<rust_decimal::Decimal> for Amount {
    fn from(value: rust_decimal::Decimal) -> Self {
        Self(value.to_string())
    }
}

/// A single line of an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: String,
    pub name: String,
    pub price: Amount,
}

/// The order an invoice is created for.
///
/// Only `id`, `amount` and `currency` are signed. Any additional fields in
/// `extra` are forwarded to the gateway untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub amount: Amount,
    /// ISO 4217 currency code.
    pub currency: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<OrderItem>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Order {
    pub fn new(id: impl Into<String>, amount: impl Into<Amount>, currency: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            amount: amount.into(),
            currency: currency.into(),
            items: Vec::new(),
            description: String::new(),
            extra: Map::new(),
        }
    }

    pub fn with_item(mut self, item: OrderItem) -> Self {
        self.items.push(item);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Compute the gateway signature for this order.
    ///
    /// Fails if `id`, `amount` or `currency` is blank.
    pub fn signature(&self, secret_key: &str) -> Result<String, SignatureError> {
        self.validate()?;
        let mut fields = Map::new();
        fields.insert("id".to_owned(), Value::String(self.id.clone()));
        fields.insert("amount".to_owned(), Value::String(self.amount.0.clone()));
        fields.insert("currency".to_owned(), Value::String(self.currency.clone()));
        signature::sign(&fields, secret_key)
    }

    fn validate(&self) -> Result<(), SignatureError> {
        for (name, value) in [
            ("id", self.id.as_str()),
            ("amount", self.amount.as_str()),
            ("currency", self.currency.as_str()),
        ] {
            if value.trim().is_empty() {
                return Err(SignatureError::MissingField(name));
            }
        }
        Ok(())
    }
}
