//! Per-backend operation statistics
//!
//! Every [`PaySystem`](super::PaySystem) instance owns one [`PayStatistics`]:
//! attempt/success/failure counters and the cumulative successful volume for
//! each operation kind. Counters live for the backend instance's lifetime,
//! are updated with interlocked semantics from any number of concurrent
//! sessions, and are never reset automatically.
//!
//! There is no ambient or static state here; the struct is plain owned data
//! exposing atomic increments and a snapshot read.

use crate::types::TransactionKind;
use rust_decimal::Decimal;
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

/// Counters for a single operation kind
#[derive(Debug, Default)]
pub struct OperationStats {
    attempts: AtomicU64,
    successes: AtomicU64,
    failures: AtomicU64,
    /// Cumulative decimal value of successful operations (currency-blind)
    volume: Mutex<Decimal>,
}

impl OperationStats {
    fn record_attempt(&self) {
        self.attempts.fetch_add(1, Ordering::Relaxed);
    }

    fn record_success(&self, amount: Decimal) {
        // The success count and its volume update under the same call so a
        // snapshot never sees one without the other being at most one
        // in-flight call behind.
        self.successes.fetch_add(1, Ordering::Relaxed);
        let mut volume = self.volume.lock().unwrap_or_else(|e| e.into_inner());
        *volume += amount;
    }

    fn record_failure(&self) {
        self.failures.fetch_add(1, Ordering::Relaxed);
    }

    fn snapshot(&self) -> OperationSnapshot {
        OperationSnapshot {
            attempts: self.attempts.load(Ordering::Relaxed),
            successes: self.successes.load(Ordering::Relaxed),
            failures: self.failures.load(Ordering::Relaxed),
            volume: *self.volume.lock().unwrap_or_else(|e| e.into_inner()),
        }
    }
}

/// Statistics for one backend instance, one counter set per operation kind
#[derive(Debug, Default)]
pub struct PayStatistics {
    charge: OperationStats,
    capture: OperationStats,
    void: OperationStats,
    refund: OperationStats,
    transfer: OperationStats,
}

impl PayStatistics {
    pub fn new() -> Self {
        PayStatistics::default()
    }

    fn of(&self, kind: TransactionKind) -> &OperationStats {
        match kind {
            TransactionKind::Charge => &self.charge,
            TransactionKind::Capture => &self.capture,
            TransactionKind::Void => &self.void,
            TransactionKind::Refund => &self.refund,
            TransactionKind::Transfer => &self.transfer,
        }
    }

    /// Count an operation attempt
    pub fn record_attempt(&self, kind: TransactionKind) {
        self.of(kind).record_attempt();
    }

    /// Count an operation success and accumulate its amount
    pub fn record_success(&self, kind: TransactionKind, amount: Decimal) {
        self.of(kind).record_success(amount);
    }

    /// Count an operation failure
    pub fn record_failure(&self, kind: TransactionKind) {
        self.of(kind).record_failure();
    }

    /// Read a consistent-enough view of all counters
    ///
    /// Counters are monotonic; a snapshot taken while operations are in
    /// flight may be ahead/behind by those calls but never loses updates.
    pub fn snapshot(&self) -> StatisticsSnapshot {
        StatisticsSnapshot {
            charge: self.charge.snapshot(),
            capture: self.capture.snapshot(),
            void: self.void.snapshot(),
            refund: self.refund.snapshot(),
            transfer: self.transfer.snapshot(),
        }
    }
}

/// Point-in-time copy of one kind's counters
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperationSnapshot {
    pub attempts: u64,
    pub successes: u64,
    pub failures: u64,
    pub volume: Decimal,
}

/// Point-in-time copy of a backend's statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatisticsSnapshot {
    pub charge: OperationSnapshot,
    pub capture: OperationSnapshot,
    pub void: OperationSnapshot,
    pub refund: OperationSnapshot,
    pub transfer: OperationSnapshot,
}
