//! Client SDK for the Payop payment gateway.
//!
//! - [`signature`]: the order signature the gateway requires on invoices.
//! - [`objects`]: request bodies and response helpers.
//! - [`config`]: credentials, session defaults and transport settings.
//! - [`client`]: [`GatewayClient`](client::GatewayClient) and the
//!   [`Transport`](client::Transport) it sends requests through.
//!
//! A typical payment creates an invoice, tokenizes the card against it,
//! then checks out with the token:
//!
//! ```ignore
//! use payop_sdk::client::PayopClient;
//! use payop_sdk::config::Credentials;
//!
//! let mut client = PayopClient::new(Credentials::new(public_key, secret_key, jwt))?;
//! let invoice_id = client
//!     .set_invoice_result_url("https://shop.example/ok")
//!     .set_invoice_fail_path("https://shop.example/fail")
//!     .create_invoice(&order, &payer)
//!     .await?;
//! let token = client.create_card_token(&invoice_id, &card).await?;
//! let result = client
//!     .checkout(&invoice_id, &payer, token["token"].as_str())
//!     .await?;
//! ```

pub mod client;
pub mod config;
pub mod objects;
pub mod signature;
