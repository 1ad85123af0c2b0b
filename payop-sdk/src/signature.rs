//! Order signature required by the Payop invoice API.
//!
//! The gateway checks the integrity of the order it receives against a
//! signature computed by the merchant:
//!
//! ```text
//! signature = hex(SHA-256("{amount}:{currency}:{id}:{secret_key}"))
//! ```
//!
//! The values are taken from the order fields listed in [`SIGNED_FIELDS`],
//! ordered by field name (byte-wise ascending), then the secret key is
//! appended. The signature is never verified locally.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

/// Order fields that participate in the signature.
///
/// The order of this list does not matter: values are always concatenated
/// in ascending key order.
pub const SIGNED_FIELDS: [&str; 3] = ["id", "amount", "currency"];

/// Separator placed between the signed values and the secret key.
pub const SIGNATURE_SEPARATOR: &str = ":";

/// Errors produced while computing a signature.
///
/// These are caller contract violations and are raised before any request
/// leaves the client.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SignatureError {
    #[error("order field `{0}` is required for signing")]
    MissingField(&'static str),
    #[error("order field `{0}` must be a string or a number")]
    UnsupportedValue(&'static str),
}

/// Compute the order signature from a JSON object.
///
/// Only the keys in [`SIGNED_FIELDS`] are read; everything else in `order`
/// is ignored. String values are used verbatim and numbers use their JSON
/// text, so `"5"` and `"5.00"` sign differently.
pub fn sign(order: &Map<String, Value>, secret_key: &str) -> Result<String, SignatureError> {
    let mut fields = BTreeMap::new();
    for name in SIGNED_FIELDS {
        let value = match order.get(name) {
            None | Some(Value::Null) => return Err(SignatureError::MissingField(name)),
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            Some(_) => return Err(SignatureError::UnsupportedValue(name)),
        };
        fields.insert(name, value);
    }
    Ok(sign_values(fields.into_values(), secret_key))
}

/// Join `values` and the secret key with [`SIGNATURE_SEPARATOR`] and hash
/// the result.
///
/// `values` must already be in ascending key order.
fn sign_values(values: impl IntoIterator<Item = String>, secret_key: &str) -> String {
    let mut parts: Vec<String> = values.into_iter().collect();
    parts.push(secret_key.to_owned());
    let data = parts.join(SIGNATURE_SEPARATOR);
    let digest = ring::digest::digest(&ring::digest::SHA256, data.as_bytes());
    hex::encode(digest.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    const SECRET: &str = "application-a61e0463-e737-491c-8b71-bb157ab43bd6";

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected an object, got {other}"),
        }
    }

    fn sha256_hex(data: &str) -> String {
        hex::encode(ring::digest::digest(&ring::digest::SHA256, data.as_bytes()).as_ref())
    }

    #[test]
    fn test_known_signature() {
        let order = object(json!({"id": "test-order", "amount": "5", "currency": "EUR"}));
        let signature = sign(&order, SECRET).unwrap();

        assert_eq!(
            signature,
            sha256_hex("5:EUR:test-order:application-a61e0463-e737-491c-8b71-bb157ab43bd6")
        );
        assert_eq!(signature.len(), 64);
        assert!(
            signature
                .chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
        );
    }

    #[test]
    fn test_input_order_does_not_matter() {
        let a = object(json!({"currency": "EUR", "amount": "5", "id": "test-order"}));
        let b = object(json!({"id": "test-order", "amount": "5", "currency": "EUR"}));
        assert_eq!(sign(&a, SECRET).unwrap(), sign(&b, SECRET).unwrap());
    }

    #[test]
    fn test_unsigned_fields_are_ignored() {
        let plain = object(json!({"id": "test-order", "amount": "5", "currency": "EUR"}));
        let full = object(json!({
            "id": "test-order",
            "amount": "5",
            "currency": "EUR",
            "items": [{"id": "487", "name": "Item 1", "price": "2.0999999999999996"}],
            "description": "string",
        }));
        assert_eq!(sign(&plain, SECRET).unwrap(), sign(&full, SECRET).unwrap());
    }

    #[test]
    fn test_amount_is_not_reformatted() {
        let five = object(json!({"id": "o", "amount": "5", "currency": "EUR"}));
        let five_00 = object(json!({"id": "o", "amount": "5.00", "currency": "EUR"}));
        assert_ne!(sign(&five, SECRET).unwrap(), sign(&five_00, SECRET).unwrap());
        assert_eq!(
            sign(&five_00, SECRET).unwrap(),
            sha256_hex(&format!("5.00:EUR:o:{SECRET}"))
        );
    }

    #[test]
    fn test_numeric_amount() {
        let order = object(json!({"id": "o", "amount": 5, "currency": "EUR"}));
        assert_eq!(
            sign(&order, SECRET).unwrap(),
            sha256_hex(&format!("5:EUR:o:{SECRET}"))
        );
    }

    #[test]
    fn test_missing_field() {
        let order = object(json!({"id": "o", "currency": "EUR"}));
        assert_eq!(
            sign(&order, SECRET),
            Err(SignatureError::MissingField("amount"))
        );

        let order = object(json!({"id": null, "amount": "5", "currency": "EUR"}));
        assert_eq!(sign(&order, SECRET), Err(SignatureError::MissingField("id")));
    }

    #[test]
    fn test_unsupported_value() {
        let order = object(json!({"id": "o", "amount": "5", "currency": ["EUR"]}));
        assert_eq!(
            sign(&order, SECRET),
            Err(SignatureError::UnsupportedValue("currency"))
        );
    }

    #[test]
    fn test_secret_key_changes_signature() {
        let order = object(json!({"id": "o", "amount": "5", "currency": "EUR"}));
        assert_ne!(
            sign(&order, "secret-a").unwrap(),
            sign(&order, "secret-b").unwrap()
        );
    }

    proptest! {
        #[test]
        fn proptest_single_field_edit_changes_signature(
            id in "[a-zA-Z0-9-]{1,24}",
            amount in "[0-9]{1,6}(\\.[0-9]{1,2})?",
            currency in "[A-Z]{3}",
            secret in "[a-zA-Z0-9-]{1,48}",
            field in 0usize..3,
            suffix in "[a-zA-Z0-9.]{1,4}",
        ) {
            let original = object(json!({"id": id, "amount": amount, "currency": currency}));
            let mut edited = original.clone();
            let name = SIGNED_FIELDS[field];
            let value = edited[name].as_str().unwrap().to_owned();
            edited.insert(name.to_owned(), Value::String(format!("{value}{suffix}")));

            prop_assert_ne!(sign(&original, &secret).unwrap(), sign(&edited, &secret).unwrap());
        }

        #[test]
        fn proptest_signature_is_deterministic(
            id in "\\PC{1,24}",
            amount in "[0-9]{1,6}",
            currency in "[A-Z]{3}",
            secret in "\\PC{0,48}",
        ) {
            let order = object(json!({"id": id, "amount": amount, "currency": currency}));
            let expected = sha256_hex(&format!("{amount}:{currency}:{id}:{secret}"));
            prop_assert_eq!(sign(&order, &secret).unwrap(), expected);
        }
    }
}
