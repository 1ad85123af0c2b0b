//! Request and response types for the Payop API.

pub mod card;
pub mod checkout;
pub mod invoice;
pub mod order;
pub mod payer;

pub use card::Card;
pub use checkout::{CardTokenRequest, CheckoutRequest};
pub use invoice::{CreateInvoiceRequest, INVOICE_LANGUAGE};
pub use order::{Amount, Order, OrderItem};
pub use payer::{Customer, Payer};

use serde_json::Value;

/// Top-level field most responses wrap their payload in.
pub const DATA_FIELD: &str = "data";

/// A well-formed response that does not have the expected shape.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProtocolError {
    #[error("response is missing `{0}`")]
    MissingField(&'static str),
    #[error("response field `{field}` is not {expected}")]
    UnexpectedType {
        field: &'static str,
        expected: &'static str,
    },
}

/// Take the `data` payload out of a response body.
///
/// A present `data: null` is returned as [`Value::Null`]; only an absent
/// field (or a body that is not an object) is an error.
pub fn take_data(body: Value) -> Result<Value, ProtocolError> {
    match body {
        Value::Object(mut map) => map
            .remove(DATA_FIELD)
            .ok_or(ProtocolError::MissingField(DATA_FIELD)),
        _ => Err(ProtocolError::MissingField(DATA_FIELD)),
    }
}

/// Take `data` and require it to be a string, as returned by invoice
/// creation.
pub fn take_data_string(body: Value) -> Result<String, ProtocolError> {
    match take_data(body)? {
        Value::String(s) => Ok(s),
        _ => Err(ProtocolError::UnexpectedType {
            field: DATA_FIELD,
            expected: "a string",
        }),
    }
}
