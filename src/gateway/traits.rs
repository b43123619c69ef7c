//! The backend contract every payment gateway implements
//!
//! [`PaySystem`] is the uniform, dyn-compatible contract over interchangeable
//! payment backends: real processor clients and the mock simulation engine
//! alike. Callers hold a `Box<dyn PaySystem>` (usually built through the
//! registry), open a [`PaySession`](super::PaySession), and drive the five
//! lifecycle operations through it.
//!
//! Operations are synchronous: each call runs to completion or fails with a
//! typed [`PaymentError`]. Retries, timeouts, and cancellation belong to the
//! transport layer behind a real backend, not to this contract.

use crate::gateway::session::{ConnectionParams, PaySession, SessionContext};
use crate::gateway::statistics::PayStatistics;
use crate::types::{Account, Amount, PaymentError, Transaction};
use rust_decimal::Decimal;

/// Optional per-operation data
///
/// `description` is a human-readable note stamped into the resulting
/// transaction; `extra` is an opaque payload carried through untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OperationOptions {
    pub description: Option<String>,
    pub extra: Option<serde_json::Value>,
}

impl OperationOptions {
    /// Options carrying only a description
    pub fn with_description(description: impl Into<String>) -> Self {
        OperationOptions {
            description: Some(description.into()),
            extra: None,
        }
    }
}

/// Abstract payment gateway
///
/// Every backend owns its statistics counters and implements the session
/// factory plus the five lifecycle operations. All operations record
/// statistics for both success and failure before returning, and fail with an
/// unknown-account error before any instrument validation when the presented
/// account does not resolve.
pub trait PaySystem: Send + Sync {
    /// Processor name stamped into transactions produced by this backend
    fn name(&self) -> &str;

    /// Read-only access to this backend's statistics counters
    fn statistics(&self) -> &PayStatistics;

    /// Open a session against this backend
    ///
    /// `context` may supply request-scoped data (for the mock backend, how
    /// to resolve an account to its vault record); backends fall back to
    /// their own default context when it is omitted.
    ///
    /// # Errors
    ///
    /// Returns [`PaymentError::Configuration`] when the connection parameters
    /// are malformed for this backend.
    fn start_session(
        &self,
        params: &ConnectionParams,
        context: Option<SessionContext>,
    ) -> Result<PaySession, PaymentError>;

    /// Authorize (and optionally capture) `amount` against `from`'s
    /// instrument, crediting `to`
    ///
    /// # Errors
    ///
    /// Fails with an unknown-account error when `from` does not resolve, or
    /// with the backend's classification of the instrument (declined, bad
    /// number, bad expiration/CVC, bad address).
    fn charge(
        &self,
        session: &PaySession,
        from: &Account,
        to: &Account,
        amount: Amount,
        capture: bool,
        options: &OperationOptions,
    ) -> Result<Transaction, PaymentError>;

    /// Move funds into `to`'s account by validating its underlying instrument
    ///
    /// `from` may be the empty account for inbound/originating transfers.
    ///
    /// # Errors
    ///
    /// Fails with an unknown-account error when `to` does not resolve, or
    /// with the backend's classification of the instrument.
    fn transfer(
        &self,
        session: &PaySession,
        from: &Account,
        to: &Account,
        amount: Amount,
        options: &OperationOptions,
    ) -> Result<Transaction, PaymentError>;

    /// Cancel a prior uncaptured charge
    fn void(
        &self,
        session: &PaySession,
        charge: &Transaction,
        options: &OperationOptions,
    ) -> Result<bool, PaymentError>;

    /// Capture a prior authorization, optionally partial
    ///
    /// `amount` of `None` captures the full authorized amount.
    fn capture(
        &self,
        session: &PaySession,
        charge: &Transaction,
        amount: Option<Decimal>,
        options: &OperationOptions,
    ) -> Result<bool, PaymentError>;

    /// Reverse a prior captured charge, optionally partial
    ///
    /// `amount` of `None` refunds the full captured amount.
    fn refund(
        &self,
        session: &PaySession,
        charge: &Transaction,
        amount: Option<Decimal>,
        options: &OperationOptions,
    ) -> Result<bool, PaymentError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_options_default_is_empty() {
        let options = OperationOptions::default();
        assert_eq!(options.description, None);
        assert_eq!(options.extra, None);
    }

    #[test]
    fn test_operation_options_with_description() {
        let options = OperationOptions::with_description("monthly subscription");
        assert_eq!(options.description.as_deref(), Some("monthly subscription"));
        assert_eq!(options.extra, None);
    }

    #[test]
    fn test_pay_system_is_dyn_compatible() {
        // The registry hands out boxed trait objects; keep the trait usable
        // behind `dyn`.
        fn assert_dyn(_: Option<&dyn PaySystem>) {}
        assert_dyn(None);
    }
}
