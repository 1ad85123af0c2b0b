//! Raw card details for tokenization.
//!
//! A [`Card`] is only ever passed through to the tokenization endpoint. Its
//! `Debug` output is masked so it cannot leak into logs.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// Card number, digits only.
    #[serde(deserialize_with = "digits")]
    pub pan: String,
    /// `MM/YY`.
    pub expiration_date: String,
    #[serde(deserialize_with = "digits")]
    pub cvv: String,
    pub holder_name: String,
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Card")
            .field("pan", &mask_pan(&self.pan))
            .field("expiration_date", &self.expiration_date)
            .field("cvv", &"***")
            .field("holder_name", &self.holder_name)
            .finish()
    }
}

/// Keep the BIN and the last four digits.
pub fn mask_pan(pan: &str) -> String {
    let len = pan.chars().count();
    if len <= 10 {
        return "*".repeat(len);
    }
    pan.chars()
        .enumerate()
        .map(|(i, c)| if i < 6 || i >= len - 4 { c } else { '*' })
        .collect()
}

/// Card numbers and CVVs are often written as JSON numbers.
fn digits<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Digits {
        Text(String),
        Number(u64),
    }

    Ok(match Digits::deserialize(deserializer)? {
        Digits::Text(s) => s,
        Digits::Number(n) => n.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn card() -> Card {
        serde_json::from_value(json!({
            "pan": 5555555555554444u64,
            "expirationDate": "12/20",
            "cvv": 322,
            "holderName": "Card Holder",
        }))
        .unwrap()
    }

    #[test]
    fn test_numeric_fields_are_accepted() {
        let card = card();
        assert_eq!(card.pan, "5555555555554444");
        assert_eq!(card.cvv, "322");
        assert_eq!(
            serde_json::to_value(&card).unwrap(),
            json!({
                "pan": "5555555555554444",
                "expirationDate": "12/20",
                "cvv": "322",
                "holderName": "Card Holder",
            })
        );
    }

    #[test]
    fn test_debug_is_masked() {
        let debug = format!("{:?}", card());
        assert!(debug.contains("555555******4444"));
        assert!(!debug.contains("5555555555554444"));
        assert!(!debug.contains("322"));
    }

    #[test]
    fn test_mask_short_pan() {
        assert_eq!(mask_pan("1234"), "****");
        assert_eq!(mask_pan(""), "");
    }
}
