//! Transaction-related types for the payment gateway core
//!
//! This module defines the operation kinds, the transaction status, the
//! transaction identifier, and the immutable `Transaction` record returned by
//! gateway operations.

use crate::types::{Account, Amount};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Gateway operation kinds
///
/// Each variant names one of the five lifecycle operations a backend must
/// support. Kinds also key the per-backend statistics counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Authorize (and optionally capture) funds against an instrument
    Charge,
    /// Convert a prior authorization into a settled charge
    Capture,
    /// Cancel a prior uncaptured charge
    Void,
    /// Reverse a prior captured charge
    Refund,
    /// Move funds into an account's instrument
    Transfer,
}

impl TransactionKind {
    /// Short tag used inside generated transaction identifiers
    pub fn tag(&self) -> &'static str {
        match self {
            TransactionKind::Charge => "ch",
            TransactionKind::Capture => "cp",
            TransactionKind::Void => "vd",
            TransactionKind::Refund => "rf",
            TransactionKind::Transfer => "tr",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TransactionKind::Charge => "charge",
            TransactionKind::Capture => "capture",
            TransactionKind::Void => "void",
            TransactionKind::Refund => "refund",
            TransactionKind::Transfer => "transfer",
        };
        f.write_str(name)
    }
}

/// Outcome recorded on a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Success,
    Failure,
}

/// Backend-issued transaction identifier
///
/// Unique within the issuing backend instance; no ordering is guaranteed
/// across backends or instances.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransactionId(pub String);

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Immutable record of a gateway operation
///
/// Built only by backends as the return value of a lifecycle operation and
/// owned by the caller afterwards; never mutated. The processor transaction
/// id is whatever the backend reported for the operation (the mock backend
/// reuses its own generated id).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    pub kind: TransactionKind,
    pub status: TransactionStatus,
    pub from: Account,
    pub to: Account,
    /// Name of the backend that processed the operation
    pub processor: String,
    pub processor_tx_id: TransactionId,
    pub created: DateTime<Utc>,
    pub amount: Amount,
    pub description: Option<String>,
    /// Opaque caller-supplied payload, carried through untouched
    pub extra: Option<serde_json::Value>,
}
