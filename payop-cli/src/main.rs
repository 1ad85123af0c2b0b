//! Payop command-line client.
//!
//! Runs single gateway operations, or the whole invoice → card token →
//! checkout flow, and prints the JSON results on stdout.

mod commands;
mod config;

use clap::{Args, Parser};
use commands::Command;
use config::{ConfigLoader, CredentialOverrides};
use payop_sdk::client::PayopClient;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Payop payment gateway client
#[derive(Parser, Debug)]
#[command(name = "payop")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, env = "PAYOP_CONFIG", default_value = "./payop.toml")]
    config: PathBuf,

    /// Override the application public key
    #[arg(long, env = "PAYOP_PUBLIC_KEY", hide_env_values = true)]
    public_key: Option<String>,

    /// Override the application secret key
    #[arg(long, env = "PAYOP_SECRET_KEY", hide_env_values = true)]
    secret_key: Option<String>,

    /// Override the bearer token used for transaction lookups
    #[arg(long, env = "PAYOP_BEARER_TOKEN", hide_env_values = true)]
    bearer_token: Option<String>,

    #[command(flatten)]
    session: SessionArgs,

    #[command(subcommand)]
    command: Command,
}

/// Session overrides, applied on top of the config file.
#[derive(Args, Debug)]
struct SessionArgs {
    #[arg(long, global = true)]
    payment_method: Option<u32>,

    #[arg(long, global = true)]
    currency: Option<String>,

    #[arg(long, global = true)]
    result_url: Option<String>,

    #[arg(long, global = true)]
    fail_path: Option<String>,

    #[arg(long, global = true)]
    check_status_url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let args = Cli::parse();

    let overrides = CredentialOverrides {
        public_key: args.public_key,
        secret_key: args.secret_key,
        bearer_token: args.bearer_token,
    };
    let loaded = ConfigLoader::new(&args.config, overrides)
        .load()
        .map_err(|e| {
            tracing::error!("Failed to load configuration: {}", e);
            e
        })?;
    tracing::debug!(base_url = %loaded.transport.base_url, "Configuration loaded");

    let mut client = PayopClient::with_config(loaded.credentials, &loaded.transport)?
        .with_session(loaded.session);
    apply_session_args(&mut client, args.session);

    let output = commands::run(&client, args.command).await.map_err(|e| {
        tracing::error!("Request failed: {:#}", e);
        e
    })?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn apply_session_args(client: &mut PayopClient, session: SessionArgs) {
    if let Some(id) = session.payment_method {
        client.set_payment_method(id);
    }
    if let Some(code) = session.currency {
        client.set_currency(code);
    }
    if let Some(url) = session.result_url {
        client.set_invoice_result_url(url);
    }
    if let Some(url) = session.fail_path {
        client.set_invoice_fail_path(url);
    }
    if let Some(url) = session.check_status_url {
        client.set_check_status_url(url);
    }
}

/// Initialize the tracing subscriber with environment-based filtering.
///
/// Logs go to stderr so stdout only carries results.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
