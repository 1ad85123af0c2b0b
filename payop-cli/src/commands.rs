//! Subcommands and their execution.

use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use clap::Subcommand;
use payop_sdk::client::{GatewayClient, Transport};
use payop_sdk::objects::{Card, Customer, Order, Payer};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value, json};
use uuid::Uuid;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the signature for an order without contacting the gateway
    Sign {
        #[arg(long)]
        order_id: String,
        #[arg(long)]
        order_amount: String,
        #[arg(long)]
        order_currency: String,
    },
    /// Create an invoice and print its identifier
    CreateInvoice {
        /// JSON file with the order
        #[arg(long)]
        order: PathBuf,
        /// JSON file with the payer
        #[arg(long)]
        payer: PathBuf,
        /// JSON file with an object of metadata
        #[arg(long)]
        metadata: Option<PathBuf>,
    },
    /// Fetch an invoice
    GetInvoice { invoice_id: String },
    /// Check the transaction status of an invoice
    InvoiceStatus { invoice_id: String },
    /// Fetch a transaction (uses the bearer token)
    Transaction { transaction_id: String },
    /// Tokenize a card for an invoice
    CardToken {
        invoice_id: String,
        /// JSON file with the card
        #[arg(long)]
        card: PathBuf,
    },
    /// Pay an invoice
    Checkout {
        invoice_id: String,
        /// JSON file with the customer
        #[arg(long)]
        customer: PathBuf,
        #[arg(long)]
        card_token: Option<String>,
    },
    /// Run invoice creation, card tokenization, checkout, transaction
    /// lookup and status check in sequence
    Demo {
        #[arg(long)]
        order: PathBuf,
        #[arg(long)]
        customer: PathBuf,
        #[arg(long)]
        card: PathBuf,
        /// Replace the order id with a fresh UUID
        #[arg(long, default_value = "false")]
        new_order_id: bool,
    },
}

/// Execute `command` and return the JSON to print.
pub async fn run<T: Transport>(
    client: &GatewayClient<T>,
    command: Command,
) -> anyhow::Result<Value> {
    match command {
        Command::Sign {
            order_id,
            order_amount,
            order_currency,
        } => {
            let signature = Order::new(order_id, order_amount, order_currency)
                .signature(client.credentials().secret_key())?;
            Ok(json!({ "signature": signature }))
        }
        Command::CreateInvoice {
            order,
            payer,
            metadata,
        } => {
            let order: Order = read_json(&order)?;
            let payer: Payer = read_json(&payer)?;
            let metadata: Map<String, Value> = match metadata {
                Some(path) => read_json(&path)?,
                None => Map::new(),
            };
            let invoice_id = client
                .create_invoice_with_metadata(&order, &payer, &metadata)
                .await?;
            Ok(json!({ "invoiceId": invoice_id }))
        }
        Command::GetInvoice { invoice_id } => Ok(client.get_invoice(&invoice_id).await?),
        Command::InvoiceStatus { invoice_id } => {
            Ok(client.check_invoice_status(&invoice_id).await?)
        }
        Command::Transaction { transaction_id } => {
            Ok(client.get_transaction(&transaction_id).await?)
        }
        Command::CardToken { invoice_id, card } => {
            let card: Card = read_json(&card)?;
            Ok(client.create_card_token(&invoice_id, &card).await?)
        }
        Command::Checkout {
            invoice_id,
            customer,
            card_token,
        } => {
            let customer: Customer = read_json(&customer)?;
            Ok(client
                .checkout(&invoice_id, &customer, card_token.as_deref())
                .await?)
        }
        Command::Demo {
            order,
            customer,
            card,
            new_order_id,
        } => {
            let mut order: Order = read_json(&order)?;
            if new_order_id {
                order.id = Uuid::new_v4().to_string();
            }
            let customer: Customer = read_json(&customer)?;
            let card: Card = read_json(&card)?;
            demo(client, &order, &customer, &card).await
        }
    }
}

/// The full payment flow against one invoice.
async fn demo<T: Transport>(
    client: &GatewayClient<T>,
    order: &Order,
    customer: &Customer,
    card: &Card,
) -> anyhow::Result<Value> {
    let invoice_id = client.create_invoice(order, customer).await?;
    tracing::info!(%invoice_id, "Invoice created");

    let card_token = client.create_card_token(&invoice_id, card).await?;
    let Some(token) = card_token.get("token").and_then(Value::as_str) else {
        bail!("card token response has no `token`: {card_token}");
    };

    let checkout = client.checkout(&invoice_id, customer, Some(token)).await?;
    let Some(txid) = checkout.get("txid").and_then(Value::as_str) else {
        bail!("checkout response has no `txid`: {checkout}");
    };
    tracing::info!(%txid, "Checkout completed");

    let transaction = client.get_transaction(txid).await?;
    let status = client.check_invoice_status(&invoice_id).await?;

    Ok(json!({
        "invoiceId": invoice_id,
        "checkout": checkout,
        "transaction": transaction,
        "status": status,
    }))
}

fn read_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
}
