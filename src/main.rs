//! Payment Gateway demo CLI
//!
//! Thin driver over the library: builds a backend from a fixture file via the
//! registry, runs one lifecycle operation against it, and prints the
//! resulting transaction plus the backend's statistics snapshot as JSON.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- fixtures.csv --identity-id 125 --account-id 2
//! cargo run -- fixtures.csv --operation transfer --identity-id 125 --account-id 2 --amount 50.00
//! ```
//!
//! # Exit Codes
//!
//! - 0: Operation succeeded
//! - 1: Error (configuration problem or operation rejected by the backend)

use pay_gateway::cli;
use pay_gateway::gateway::{
    ConnectionParams, GatewayConfig, GatewayRegistry, OperationOptions, PaySystem,
};
use pay_gateway::types::{Account, PaymentError};
use std::process;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = cli::parse_args();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: cli::CliArgs) -> Result<(), PaymentError> {
    let registry = GatewayRegistry::with_defaults();
    let config = GatewayConfig::new(&args.backend)
        .with_setting("fixtures", args.fixtures.display().to_string());
    let gateway = registry.build(&config)?;

    // The fixture file's vault rows back the default session context.
    let session = gateway.start_session(&ConnectionParams::default(), None)?;

    let account = args.account();
    let amount = args.to_amount();
    let options = match &args.description {
        Some(description) => OperationOptions::with_description(description.clone()),
        None => OperationOptions::default(),
    };

    let transaction = match args.operation {
        cli::Operation::Charge => {
            let merchant = Account::new("merchant", "demo", "primary");
            gateway.charge(&session, &account, &merchant, amount, true, &options)?
        }
        cli::Operation::Transfer => {
            gateway.transfer(&session, &Account::empty(), &account, amount, &options)?
        }
    };

    print_json(&transaction)?;
    print_json(&gateway.statistics().snapshot())?;

    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), PaymentError> {
    let rendered = serde_json::to_string_pretty(value)
        .map_err(|e| PaymentError::configuration(format!("failed to render output: {}", e)))?;
    println!("{}", rendered);
    Ok(())
}
