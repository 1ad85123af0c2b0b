use serde::Serialize;
use serde_json::{Map, Value};

use super::order::Order;
use super::payer::Payer;

/// Language tag sent with every invoice.
pub const INVOICE_LANGUAGE: &str = "en";

/// Body of `POST invoices/create`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInvoiceRequest<'a> {
    pub public_key: &'a str,
    pub order: &'a Order,
    pub payer: &'a Payer,
    pub metadata: &'a Map<String, Value>,
    pub language: &'static str,
    pub payment_method: u32,
    pub result_url: &'a str,
    pub fail_path: &'a str,
    pub signature: String,
}
