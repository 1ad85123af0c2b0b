use serde::Serialize;

use super::card::Card;
use super::payer::Customer;

/// Body of `POST checkout/create`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest<'a> {
    pub invoice_identifier: &'a str,
    pub customer: &'a Customer,
    /// Empty when paying without a tokenized card.
    pub card_token: &'a str,
    pub pay_currency: &'a str,
    pub payment_method: u32,
    pub check_status_url: &'a str,
}

/// Body of `POST payment-tools/card-token/create`: the card fields with the
/// invoice identifier merged in.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardTokenRequest<'a> {
    #[serde(flatten)]
    pub card: &'a Card,
    pub invoice_identifier: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_card_token_request_is_flat() {
        let card = Card {
            pan: "5555555555554444".to_owned(),
            expiration_date: "12/20".to_owned(),
            cvv: "322".to_owned(),
            holder_name: "Card Holder".to_owned(),
        };
        let request = CardTokenRequest {
            card: &card,
            invoice_identifier: "inv-1",
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "pan": "5555555555554444",
                "expirationDate": "12/20",
                "cvv": "322",
                "holderName": "Card Holder",
                "invoiceIdentifier": "inv-1",
            })
        );
    }
}
