use crate::types::{Account, Amount};
use clap::{Parser, ValueEnum};
use rust_decimal::Decimal;
use std::path::PathBuf;

/// Run payment operations against a configured backend
#[derive(Parser, Debug)]
#[command(name = "pay-gateway")]
#[command(about = "Run payment operations against a configured backend", long_about = None)]
pub struct CliArgs {
    /// Fixture CSV file configuring the backend
    #[arg(value_name = "FIXTURES", help = "Path to the fixture CSV file")]
    pub fixtures: PathBuf,

    /// Backend to build through the registry
    #[arg(
        long,
        value_name = "BACKEND",
        default_value = "mock",
        help = "Registered backend name"
    )]
    pub backend: String,

    /// Lifecycle operation to run
    #[arg(
        long,
        value_enum,
        value_name = "OPERATION",
        default_value = "charge",
        help = "Operation to run against the backend"
    )]
    pub operation: Operation,

    /// Identity namespace of the presented account
    #[arg(
        long,
        value_name = "IDENTITY",
        default_value = "customer",
        help = "Identity namespace of the account"
    )]
    pub identity: String,

    /// Identifier within the identity namespace
    #[arg(
        long = "identity-id",
        value_name = "ID",
        help = "Identifier within the identity namespace"
    )]
    pub identity_id: String,

    /// Account identifier within the identity
    #[arg(
        long = "account-id",
        value_name = "ID",
        help = "Account identifier within the identity"
    )]
    pub account_id: String,

    /// Operation amount
    #[arg(
        long,
        value_name = "AMOUNT",
        default_value = "100.00",
        help = "Operation amount as a decimal"
    )]
    pub amount: Decimal,

    /// Currency code for the amount
    #[arg(
        long,
        value_name = "CURRENCY",
        default_value = "usd",
        help = "ISO currency code"
    )]
    pub currency: String,

    /// Optional description stamped into the transaction
    #[arg(long, value_name = "TEXT", help = "Description stamped into the transaction")]
    pub description: Option<String>,
}

/// Operations the demo driver can run
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Operation {
    Charge,
    Transfer,
}

impl CliArgs {
    /// The presented account assembled from the identity arguments
    pub fn account(&self) -> Account {
        Account::new(
            self.identity.as_str(),
            self.identity_id.as_str(),
            self.account_id.as_str(),
        )
    }

    /// The operation amount with its currency tag
    pub fn to_amount(&self) -> Amount {
        Amount::new(self.currency.as_str(), self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    const BASE: &[&str] = &[
        "pay-gateway",
        "fixtures.csv",
        "--identity-id",
        "125",
        "--account-id",
        "2",
    ];

    fn with_extra<'a>(extra: &'a [&'a str]) -> Vec<&'a str> {
        BASE.iter().chain(extra.iter()).copied().collect()
    }

    #[test]
    fn test_defaults() {
        let parsed = CliArgs::try_parse_from(BASE).unwrap();
        assert_eq!(parsed.backend, "mock");
        assert_eq!(parsed.operation, Operation::Charge);
        assert_eq!(parsed.identity, "customer");
        assert_eq!(parsed.amount, dec!(100.00));
        assert_eq!(parsed.currency, "usd");
        assert_eq!(parsed.description, None);
    }

    #[rstest]
    #[case::charge(&["--operation", "charge"], Operation::Charge)]
    #[case::transfer(&["--operation", "transfer"], Operation::Transfer)]
    fn test_operation_parsing(#[case] extra: &[&str], #[case] expected: Operation) {
        let parsed = CliArgs::try_parse_from(with_extra(extra)).unwrap();
        assert_eq!(parsed.operation, expected);
    }

    #[test]
    fn test_account_assembly() {
        let parsed = CliArgs::try_parse_from(with_extra(&["--identity", "vendor"])).unwrap();
        assert_eq!(parsed.account(), Account::new("vendor", "125", "2"));
    }

    #[test]
    fn test_amount_assembly() {
        let parsed =
            CliArgs::try_parse_from(with_extra(&["--amount", "19.99", "--currency", "eur"]))
                .unwrap();
        assert_eq!(parsed.to_amount(), Amount::new("eur", dec!(19.99)));
    }

    #[rstest]
    #[case::missing_fixture(&["pay-gateway", "--identity-id", "125", "--account-id", "2"])]
    #[case::missing_identity_id(&["pay-gateway", "fixtures.csv", "--account-id", "2"])]
    #[case::invalid_operation(&[
        "pay-gateway", "fixtures.csv", "--identity-id", "125", "--account-id", "2",
        "--operation", "settle",
    ])]
    #[case::invalid_amount(&[
        "pay-gateway", "fixtures.csv", "--identity-id", "125", "--account-id", "2",
        "--amount", "lots",
    ])]
    fn test_parsing_errors(#[case] args: &[&str]) {
        assert!(CliArgs::try_parse_from(args).is_err());
    }
}
