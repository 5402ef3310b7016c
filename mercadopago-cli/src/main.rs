//! MercadoPago CLI - runs single API calls from the command line
//!
//! Reads the SDK configuration from a TOML file (`--config`) or from the
//! environment (`MERCADOPAGO_ACCESS_TOKEN`, `MERCADOPAGO_BASE_URL`), sends one
//! request and prints the resource as wire JSON on stdout.
//!
//! ```text
//! mercadopago --sandbox order delete-transaction ORD01 PAY01
//! mercadopago point list-intents --start-date 2024-03-01 --end-date 2024-03-15
//! ```

#![allow(
    clippy::multiple_crate_versions,
    reason = "transitive dependencies from reqwest and tracing-subscriber"
)]

mod observability;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use mercadopago::{
    ApiResponse, MercadoPagoClient, MercadoPagoConfig, RequestOptions,
    resources::{PointDevicesRequest, PointPaymentIntentListRequest, PointPaymentIntentRequest},
    serialization,
};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::info;

use crate::observability::{LogFormat, init_observability};

#[derive(Debug, Parser)]
#[command(name = "mercadopago", about = "Run MercadoPago API calls", version)]
struct Cli {
    /// TOML configuration file; the environment is used when omitted
    #[arg(long, short = 'c', global = true, env = "MERCADOPAGO_CONFIG", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Send `X-Sandbox: true` with every request
    #[arg(long, global = true)]
    sandbox: bool,

    /// Log filter used when `RUST_LOG` is unset
    #[arg(long, global = true, default_value = "info", value_name = "DIRECTIVE")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// `/v1/orders` operations
    #[command(subcommand)]
    Order(OrderCommand),

    /// `/v1/payments` operations
    #[command(subcommand)]
    Payment(PaymentCommand),

    /// `/merchant_orders` operations
    #[command(subcommand)]
    MerchantOrder(MerchantOrderCommand),

    /// Point terminal operations
    #[command(subcommand)]
    Point(PointCommand),
}

#[derive(Debug, Subcommand)]
enum OrderCommand {
    /// Fetch an order
    Get {
        /// Order identifier
        order_id: String,
    },
    /// Remove a payment transaction from an order
    DeleteTransaction {
        /// Order identifier
        order_id: String,
        /// Transaction identifier
        transaction_id: String,
    },
}

#[derive(Debug, Subcommand)]
enum PaymentCommand {
    /// Fetch a payment
    Get {
        /// Payment identifier
        payment_id: i64,
    },
    /// Capture an authorized payment
    Capture {
        /// Payment identifier
        payment_id: i64,
        /// Partial amount; the whole payment is captured when omitted
        #[arg(long)]
        amount: Option<Decimal>,
    },
}

#[derive(Debug, Subcommand)]
enum MerchantOrderCommand {
    /// Fetch a merchant order
    Get {
        /// Merchant order identifier
        merchant_order_id: i64,
    },
}

#[derive(Debug, Subcommand)]
enum PointCommand {
    /// Create a payment intent on a terminal
    CreateIntent {
        /// Terminal identifier
        device_id: String,
        /// Amount in cents
        #[arg(long)]
        amount: i64,
        /// Description shown on the terminal
        #[arg(long)]
        description: Option<String>,
    },
    /// List payment intent events in a date range
    ListIntents {
        /// First day, `YYYY-MM-DD`
        #[arg(long)]
        start_date: NaiveDate,
        /// Last day, `YYYY-MM-DD`
        #[arg(long)]
        end_date: NaiveDate,
    },
    /// List terminals
    Devices {
        /// Only terminals of this store
        #[arg(long)]
        store_id: Option<String>,
        /// Only terminals of this point of sale
        #[arg(long)]
        pos_id: Option<i64>,
        /// Page size
        #[arg(long)]
        limit: Option<u32>,
        /// Page offset
        #[arg(long)]
        offset: Option<u32>,
    },
}

fn load_config(path: Option<&Path>) -> Result<MercadoPagoConfig> {
    let config = match path {
        Some(path) => MercadoPagoConfig::from_file(path)?,
        None => MercadoPagoConfig::from_env()?,
    };
    Ok(config)
}

fn request_options(sandbox: bool) -> RequestOptions {
    let options = RequestOptions::default();
    if sandbox { options.with_header("X-Sandbox", "true") } else { options }
}

/// Renders a response as wire JSON.
fn render<T: Serialize>(response: &ApiResponse<T>) -> Result<String> {
    let wire = serialization::serialize_to_json(&response.resource)
        .context("failed to serialize response")?;
    serde_json::to_string_pretty(&wire).context("failed to render JSON")
}

async fn run(cli: Cli) -> Result<String> {
    let config = load_config(cli.config.as_deref()).context("failed to load configuration")?;
    let client = MercadoPagoClient::new(config).context("failed to build client")?;
    let options = request_options(cli.sandbox);

    match cli.command {
        Command::Order(OrderCommand::Get { order_id }) => {
            render(&client.orders().get_with_options(&order_id, &options).await?)
        }
        Command::Order(OrderCommand::DeleteTransaction { order_id, transaction_id }) => {
            let response = client
                .orders()
                .delete_transaction_with_options(&order_id, &transaction_id, &options)
                .await?;
            info!(status = response.status_code(), "transaction deleted");
            Ok(format!("deleted (status {})", response.status_code()))
        }
        Command::Payment(PaymentCommand::Get { payment_id }) => {
            render(&client.payments().get_with_options(payment_id, &options).await?)
        }
        Command::Payment(PaymentCommand::Capture { payment_id, amount }) => {
            render(&client.payments().capture_with_options(payment_id, amount, &options).await?)
        }
        Command::MerchantOrder(MerchantOrderCommand::Get { merchant_order_id }) => render(
            &client.merchant_orders().get_with_options(merchant_order_id, &options).await?,
        ),
        Command::Point(PointCommand::CreateIntent { device_id, amount, description }) => {
            let request = PointPaymentIntentRequest {
                amount: Some(amount),
                description,
                ..Default::default()
            };
            render(
                &client
                    .point()
                    .create_payment_intent_with_options(&device_id, &request, &options)
                    .await?,
            )
        }
        Command::Point(PointCommand::ListIntents { start_date, end_date }) => {
            anyhow::ensure!(start_date <= end_date, "start date must not be after end date");
            let request = PointPaymentIntentListRequest::new(start_date, end_date);
            render(&client.point().get_payment_intent_list_with_options(&request, &options).await?)
        }
        Command::Point(PointCommand::Devices { store_id, pos_id, limit, offset }) => {
            let request = PointDevicesRequest { store_id, pos_id, limit, offset };
            render(&client.point().get_devices_with_options(&request, &options).await?)
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_observability(LogFormat::from_env(), &cli.log_level);

    let output = run(cli).await?;
    println!("{output}");
    Ok(())
}
