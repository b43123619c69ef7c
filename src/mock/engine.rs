//! Mock simulation engine
//!
//! A deterministic [`PaySystem`] backend that reproduces the transaction
//! lifecycle and failure taxonomy of a real card/bank processor without any
//! network I/O. Presented accounts are classified against the configured
//! fixture pools; the pool precedence and per-pool checks below decide the
//! outcome, so an integration suite driving this backend sees exactly
//! reproducible accept/reject behavior.
//!
//! # Charge classification
//!
//! After resolving `from` through the session (unknown-account failure on a
//! miss), the instrument's account number is judged against the credit pools
//! in this order:
//!
//! 1. `credit-card-declined`: present means declined.
//! 2. `credit-card-luhn-error`: present means invalid card number.
//! 3. `credit-card-correct`: present means expiration year, then month, then
//!    verification code must match the fixture (expiration before CVC).
//! 4. `credit-card-correct-with-addr`: same checks, then the full billing
//!    address block must be equal.
//! 5. No pool matched: invalid card number.
//!
//! The first pool containing the number is authoritative; a number present
//! in several pools never falls through to a later one.
//!
//! # Transfer classification
//!
//! After resolving `to`, the debit pools are searched in order
//! (`debit-bank-correct`, `debit-card-correct`, `debit-card-correct-with-addr`)
//! for a record matching number + expiration + verification code. The
//! address-bearing pool additionally requires every billing field to differ
//! from the presented billing address. A successful transfer originates from
//! the empty account.
//!
//! Void, capture, and refund always succeed; the simulation does not model
//! post-authorization failures.

use crate::config::load_fixture_file;
use crate::gateway::{
    ConnectionParams, GatewayConfig, OperationOptions, PaySession, PayStatistics, PaySystem,
    SessionContext,
};
use crate::mock::fixtures::{FixturePools, PoolName};
use crate::mock::resolver::FixtureResolver;
use crate::types::{
    Account, AccountData, ActualAccountData, Amount, PaymentError, Transaction, TransactionKind,
    TransactionStatus,
};
use chrono::Utc;
use rust_decimal::Decimal;
use std::path::Path;
use std::sync::atomic::AtomicU64;
use std::sync::Arc;
use tracing::{debug, warn};

const BACKEND_NAME: &str = "mockpay";

const CHARGE_OP: &str = "MockGateway.charge";
const TRANSFER_OP: &str = "MockGateway.transfer";

/// The mock payment backend
///
/// Owns its fixture pools (read-only after construction), its statistics,
/// and the shared transaction-id counter for all of its sessions. A built-in
/// vault serves as the default session context; callers can override it by
/// passing their own [`SessionContext`] to `start_session`.
pub struct MockGateway {
    name: String,
    pools: FixturePools,
    vault: Arc<FixtureResolver>,
    stats: PayStatistics,
    next_id: Arc<AtomicU64>,
}

impl MockGateway {
    /// A mock backend over the given pools, with an empty built-in vault
    pub fn new(pools: FixturePools) -> Self {
        MockGateway::with_vault(pools, Vec::new())
    }

    /// A mock backend over the given pools and vault entries
    pub fn with_vault(pools: FixturePools, vault: Vec<ActualAccountData>) -> Self {
        MockGateway {
            name: BACKEND_NAME.to_string(),
            pools,
            vault: Arc::new(FixtureResolver::new(vault)),
            stats: PayStatistics::new(),
            next_id: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Registry factory: build a mock backend from its configuration
    ///
    /// Reads the `fixtures` setting as the path to a fixture CSV file.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the setting is missing or the
    /// fixture file fails to load.
    pub fn from_config(config: &GatewayConfig) -> Result<Box<dyn PaySystem>, PaymentError> {
        let path = config.setting("fixtures").ok_or_else(|| {
            PaymentError::configuration("mock backend requires a 'fixtures' setting")
        })?;
        let fixtures = load_fixture_file(Path::new(path))?;
        Ok(Box::new(MockGateway::with_vault(
            fixtures.pools,
            fixtures.vault,
        )))
    }

    /// Classify a charge against the credit pools
    fn authorize_charge(
        &self,
        session: &PaySession,
        from: &Account,
    ) -> Result<(), PaymentError> {
        let presented = session
            .fetch_account_data(from)
            .ok_or_else(|| PaymentError::unknown_account(from, CHARGE_OP))?;
        let number = presented.account_number();

        if self.pools.contains_number(PoolName::CreditCardDeclined, number) {
            return Err(PaymentError::declined(number, CHARGE_OP));
        }
        if self.pools.contains_number(PoolName::CreditCardLuhnError, number) {
            return Err(PaymentError::invalid_card_number(number, CHARGE_OP));
        }

        if let Some(fixture) = self.pools.find_by_number(PoolName::CreditCardCorrect, number) {
            return verify_card_details(fixture, &presented, CHARGE_OP);
        }

        if let Some(fixture) = self
            .pools
            .find_by_number(PoolName::CreditCardCorrectWithAddr, number)
        {
            verify_card_details(fixture, &presented, CHARGE_OP)?;
            if fixture.billing != presented.data.billing {
                return Err(PaymentError::invalid_address(number, CHARGE_OP));
            }
            return Ok(());
        }

        Err(PaymentError::invalid_card_number(number, CHARGE_OP))
    }

    /// Classify a transfer against the debit pools
    fn authorize_transfer(&self, session: &PaySession, to: &Account) -> Result<(), PaymentError> {
        let presented = session
            .fetch_account_data(to)
            .ok_or_else(|| PaymentError::unknown_account(to, TRANSFER_OP))?;
        let number = presented.account_number();
        let d = &presented.data;

        let matches_instrument = |record: &AccountData| {
            record.account_number == number
                && record.card_expiration_year == d.card_expiration_year
                && record.card_expiration_month == d.card_expiration_month
                && record.card_verification_code == d.card_verification_code
        };

        if self
            .pools
            .pool(PoolName::DebitBankCorrect)
            .iter()
            .any(|record| matches_instrument(record))
        {
            return Ok(());
        }

        if self
            .pools
            .pool(PoolName::DebitCardCorrect)
            .iter()
            .any(|record| matches_instrument(record))
        {
            return Ok(());
        }

        // For this pool, every billing field must differ from the presented
        // billing address.
        let with_addr = self
            .pools
            .pool(PoolName::DebitCardCorrectWithAddr)
            .iter()
            .any(|record| {
                matches_instrument(record)
                    && record.billing.address1 != d.billing.address1
                    && record.billing.address2 != d.billing.address2
                    && record.billing.country != d.billing.country
                    && record.billing.city != d.billing.city
                    && record.billing.postal_code != d.billing.postal_code
                    && record.billing.region != d.billing.region
                    && record.billing.email != d.billing.email
                    && record.billing.phone != d.billing.phone
            });
        if with_addr {
            return Ok(());
        }

        Err(PaymentError::invalid_card_number(number, TRANSFER_OP))
    }

    fn build_transaction(
        &self,
        session: &PaySession,
        kind: TransactionKind,
        from: Account,
        to: Account,
        amount: Amount,
        options: &OperationOptions,
    ) -> Transaction {
        let id = session.generate_transaction_id(kind);
        Transaction {
            id: id.clone(),
            kind,
            status: TransactionStatus::Success,
            from,
            to,
            processor: self.name.clone(),
            processor_tx_id: id,
            created: Utc::now(),
            amount,
            description: options.description.clone(),
            extra: options.extra.clone(),
        }
    }
}

/// Check the presented card details against a pool fixture
///
/// Expiration year, then month, then verification code; the failure carries
/// the presented values.
fn verify_card_details(
    fixture: &AccountData,
    presented: &ActualAccountData,
    operation: &str,
) -> Result<(), PaymentError> {
    let d = &presented.data;
    if fixture.card_expiration_year != d.card_expiration_year {
        return Err(PaymentError::invalid_expiration_date(
            d.card_expiration_year,
            d.card_expiration_month,
            operation,
        ));
    }
    if fixture.card_expiration_month != d.card_expiration_month {
        return Err(PaymentError::invalid_expiration_date(
            d.card_expiration_year,
            d.card_expiration_month,
            operation,
        ));
    }
    if fixture.card_verification_code != d.card_verification_code {
        return Err(PaymentError::invalid_cvc(operation));
    }
    Ok(())
}

impl PaySystem for MockGateway {
    fn name(&self) -> &str {
        &self.name
    }

    fn statistics(&self) -> &PayStatistics {
        &self.stats
    }

    /// Open a session; the mock backend accepts any connection parameters
    fn start_session(
        &self,
        _params: &ConnectionParams,
        context: Option<SessionContext>,
    ) -> Result<PaySession, PaymentError> {
        let context =
            context.unwrap_or_else(|| SessionContext::new(self.vault.clone()));
        Ok(PaySession::new(
            self.name.clone(),
            context,
            None,
            self.next_id.clone(),
        ))
    }

    fn charge(
        &self,
        session: &PaySession,
        from: &Account,
        to: &Account,
        amount: Amount,
        capture: bool,
        options: &OperationOptions,
    ) -> Result<Transaction, PaymentError> {
        self.stats.record_attempt(TransactionKind::Charge);

        if let Err(err) = self.authorize_charge(session, from) {
            self.stats.record_failure(TransactionKind::Charge);
            warn!(operation = "charge", error = %err, "operation rejected");
            return Err(err);
        }

        let transaction = self.build_transaction(
            session,
            TransactionKind::Charge,
            from.clone(),
            to.clone(),
            amount,
            options,
        );
        self.stats
            .record_success(TransactionKind::Charge, transaction.amount.value);
        debug!(id = %transaction.id, captured = capture, "charge authorized");
        Ok(transaction)
    }

    fn transfer(
        &self,
        session: &PaySession,
        _from: &Account,
        to: &Account,
        amount: Amount,
        options: &OperationOptions,
    ) -> Result<Transaction, PaymentError> {
        self.stats.record_attempt(TransactionKind::Transfer);

        if let Err(err) = self.authorize_transfer(session, to) {
            self.stats.record_failure(TransactionKind::Transfer);
            warn!(operation = "transfer", error = %err, "operation rejected");
            return Err(err);
        }

        // A successful transfer originates from the empty account.
        let transaction = self.build_transaction(
            session,
            TransactionKind::Transfer,
            Account::empty(),
            to.clone(),
            amount,
            options,
        );
        self.stats
            .record_success(TransactionKind::Transfer, transaction.amount.value);
        debug!(id = %transaction.id, "transfer accepted");
        Ok(transaction)
    }

    fn void(
        &self,
        _session: &PaySession,
        charge: &Transaction,
        _options: &OperationOptions,
    ) -> Result<bool, PaymentError> {
        self.stats.record_attempt(TransactionKind::Void);
        self.stats
            .record_success(TransactionKind::Void, charge.amount.value);
        debug!(charge = %charge.id, "void accepted");
        Ok(true)
    }

    fn capture(
        &self,
        _session: &PaySession,
        charge: &Transaction,
        amount: Option<Decimal>,
        _options: &OperationOptions,
    ) -> Result<bool, PaymentError> {
        self.stats.record_attempt(TransactionKind::Capture);
        self.stats.record_success(
            TransactionKind::Capture,
            amount.unwrap_or(charge.amount.value),
        );
        debug!(charge = %charge.id, partial = amount.is_some(), "capture accepted");
        Ok(true)
    }

    fn refund(
        &self,
        _session: &PaySession,
        charge: &Transaction,
        amount: Option<Decimal>,
        _options: &OperationOptions,
    ) -> Result<bool, PaymentError> {
        self.stats.record_attempt(TransactionKind::Refund);
        self.stats.record_success(
            TransactionKind::Refund,
            amount.unwrap_or(charge.amount.value),
        );
        debug!(charge = %charge.id, partial = amount.is_some(), "refund accepted");
        Ok(true)
    }
}
