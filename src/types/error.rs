//! Error types for the payment gateway core
//!
//! This module defines the shared failure taxonomy every backend maps into.
//! Errors are values, not unwound panics: validation failures are returned at
//! the point of detection so callers can branch on the kind without relying
//! on stack unwinding.
//!
//! # Error Categories
//!
//! - **Validation errors**: raised by a backend while classifying the
//!   presented account (unknown account, declined, bad number/CVC/expiration/
//!   address). These carry the offending account number and the operation
//!   name so a failure can be traced back to the fixture path that produced
//!   it.
//! - **Configuration errors**: malformed connection parameters, fixture
//!   files, or backend names.
//! - **Gateway transport errors**: typed translations of a transport-level
//!   (status code, body) failure pair; see `gateway::transport`.

use crate::types::Account;
use thiserror::Error;

/// Main error type for the payment gateway core
///
/// Every lifecycle operation returns this in its error position. Statistics
/// are recorded for the failing operation before the error is returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PaymentError {
    /// The session's resolver has no vault record for the presented account
    #[error("Unknown account {account} for {operation}")]
    UnknownAccount {
        /// The account that failed to resolve
        account: Account,
        /// Operation that was attempted
        operation: String,
    },

    /// The instrument was recognized and refused by the processor
    #[error("Card '{account_number}' declined during {operation}")]
    Declined {
        account_number: String,
        operation: String,
    },

    /// The account number is not a valid instrument number
    ///
    /// Raised both for checksum-failing numbers and for numbers matching no
    /// known instrument at all.
    #[error("Card number '{account_number}' is incorrect for {operation}")]
    InvalidCardNumber {
        account_number: String,
        operation: String,
    },

    /// The presented expiration date does not match the instrument
    #[error(
        "Invalid card expiration date {}/{} for {operation}",
        year.map(|y| y.to_string()).unwrap_or_else(|| "-".to_string()),
        month.map(|m| m.to_string()).unwrap_or_else(|| "-".to_string())
    )]
    InvalidExpirationDate {
        /// Expiration year as presented (unset when the account had none)
        year: Option<u16>,
        /// Expiration month as presented (unset when the account had none)
        month: Option<u8>,
        operation: String,
    },

    /// The presented card verification code does not match the instrument
    #[error("Invalid card verification code for {operation}")]
    InvalidCvc { operation: String },

    /// The presented billing address does not match the instrument
    #[error("Invalid address for card '{account_number}' during {operation}")]
    InvalidAddress {
        account_number: String,
        operation: String,
    },

    /// Malformed configuration: connection parameters, fixture files, or an
    /// unknown backend name
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Gateway rejected the request as malformed (HTTP 400)
    #[error("Gateway rejected the request{}", fmt_detail(message))]
    BadRequest { message: Option<String> },

    /// Gateway rejected the credentials (HTTP 401)
    #[error("Gateway authorization failed{}", fmt_detail(message))]
    Unauthorized { message: Option<String> },

    /// Gateway reported a card-level failure (HTTP 402)
    #[error("Gateway reported a card error{}", fmt_detail(message))]
    CardError { message: Option<String> },

    /// Gateway could not find the referenced resource (HTTP 404)
    #[error("Gateway resource not found{}", fmt_detail(message))]
    NotFound { message: Option<String> },

    /// Gateway is unavailable (HTTP 500/502/503/504)
    #[error("Gateway unavailable (status {status}){}", fmt_detail(message))]
    ServerUnavailable {
        status: u16,
        message: Option<String>,
    },

    /// Transport failure with a status outside the mapped set
    ///
    /// Carries the status only; the inner cause passes through untranslated.
    #[error("Unmapped gateway failure (status {status})")]
    Unmapped { status: u16 },
}

/// Render an optional gateway-supplied detail as a `: detail` suffix
fn fmt_detail(message: &Option<String>) -> String {
    message
        .as_deref()
        .map(|m| format!(": {}", m))
        .unwrap_or_default()
}

// Helper constructors for the validation kinds, which all carry an
// operation-name context.

impl PaymentError {
    /// Create an UnknownAccount error
    pub fn unknown_account(account: &Account, operation: &str) -> Self {
        PaymentError::UnknownAccount {
            account: account.clone(),
            operation: operation.to_string(),
        }
    }

    /// Create a Declined error
    pub fn declined(account_number: &str, operation: &str) -> Self {
        PaymentError::Declined {
            account_number: account_number.to_string(),
            operation: operation.to_string(),
        }
    }

    /// Create an InvalidCardNumber error
    pub fn invalid_card_number(account_number: &str, operation: &str) -> Self {
        PaymentError::InvalidCardNumber {
            account_number: account_number.to_string(),
            operation: operation.to_string(),
        }
    }

    /// Create an InvalidExpirationDate error from the presented expiration
    pub fn invalid_expiration_date(
        year: Option<u16>,
        month: Option<u8>,
        operation: &str,
    ) -> Self {
        PaymentError::InvalidExpirationDate {
            year,
            month,
            operation: operation.to_string(),
        }
    }

    /// Create an InvalidCvc error
    pub fn invalid_cvc(operation: &str) -> Self {
        PaymentError::InvalidCvc {
            operation: operation.to_string(),
        }
    }

    /// Create an InvalidAddress error
    pub fn invalid_address(account_number: &str, operation: &str) -> Self {
        PaymentError::InvalidAddress {
            account_number: account_number.to_string(),
            operation: operation.to_string(),
        }
    }

    /// Create a Configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        PaymentError::Configuration {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for PaymentError {
    fn from(error: std::io::Error) -> Self {
        PaymentError::Configuration {
            message: format!("I/O error: {}", error),
        }
    }
}

impl From<csv::Error> for PaymentError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());
        PaymentError::Configuration {
            message: match line {
                Some(line) => format!("CSV error at line {}: {}", line, error),
                None => format!("CSV error: {}", error),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::unknown_account(
        PaymentError::unknown_account(&Account::new("customer", "125", "2"), "MockGateway.charge"),
        "Unknown account Account(customer, 125, 2) for MockGateway.charge"
    )]
    #[case::unknown_empty_account(
        PaymentError::unknown_account(&Account::empty(), "MockGateway.transfer"),
        "Unknown account [EMPTY] for MockGateway.transfer"
    )]
    #[case::declined(
        PaymentError::declined("4000000000000002", "MockGateway.charge"),
        "Card '4000000000000002' declined during MockGateway.charge"
    )]
    #[case::invalid_card_number(
        PaymentError::invalid_card_number("4242424242424241", "MockGateway.charge"),
        "Card number '4242424242424241' is incorrect for MockGateway.charge"
    )]
    #[case::invalid_expiration(
        PaymentError::invalid_expiration_date(Some(2022), Some(9), "MockGateway.charge"),
        "Invalid card expiration date 2022/9 for MockGateway.charge"
    )]
    #[case::invalid_expiration_unset(
        PaymentError::invalid_expiration_date(None, None, "MockGateway.charge"),
        "Invalid card expiration date -/- for MockGateway.charge"
    )]
    #[case::invalid_cvc(
        PaymentError::invalid_cvc("MockGateway.charge"),
        "Invalid card verification code for MockGateway.charge"
    )]
    #[case::invalid_address(
        PaymentError::invalid_address("4242424242424242", "MockGateway.charge"),
        "Invalid address for card '4242424242424242' during MockGateway.charge"
    )]
    #[case::configuration(
        PaymentError::configuration("unknown pool 'credit-card-wrong'"),
        "Configuration error: unknown pool 'credit-card-wrong'"
    )]
    #[case::bad_request_with_detail(
        PaymentError::BadRequest { message: Some("missing amount".to_string()) },
        "Gateway rejected the request: missing amount"
    )]
    #[case::bad_request_without_detail(
        PaymentError::BadRequest { message: None },
        "Gateway rejected the request"
    )]
    #[case::server_unavailable(
        PaymentError::ServerUnavailable { status: 503, message: None },
        "Gateway unavailable (status 503)"
    )]
    #[case::unmapped(
        PaymentError::Unmapped { status: 418 },
        "Unmapped gateway failure (status 418)"
    )]
    fn test_error_display(#[case] error: PaymentError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing fixtures");
        let error: PaymentError = io_error.into();
        assert!(matches!(error, PaymentError::Configuration { .. }));
        assert!(error.to_string().contains("missing fixtures"));
    }

    #[test]
    fn test_helper_constructors_match_variants() {
        assert_eq!(
            PaymentError::invalid_cvc("op"),
            PaymentError::InvalidCvc {
                operation: "op".to_string()
            }
        );
        assert_eq!(
            PaymentError::declined("1", "op"),
            PaymentError::Declined {
                account_number: "1".to_string(),
                operation: "op".to_string()
            }
        );
    }
}
