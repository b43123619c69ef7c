//! Account-related types for the payment gateway core
//!
//! This module defines the account identity value (`Account`), the instrument
//! vault record (`AccountData`), the address block shared by billing and
//! shipping, and the resolved pairing of the two (`ActualAccountData`).
//!
//! `Account` is a pure identity vector: it says *which* payment method of
//! *which* party is meant, without carrying any instrument details. The
//! instrument details live in `AccountData` and are only reachable through a
//! session's resolver.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Account identity vector
///
/// Three-part identity: the identity namespace (e.g. "customer"), the id
/// within that namespace (e.g. customer number "125"), and the account id
/// within that identity (e.g. which of customer 125's payment methods).
///
/// Equality is structural over all three fields and null-safe: two accounts
/// are equal iff every field matches, unset fields included. The canonical
/// "no account" value is [`Account::empty`], used as the `from` side of
/// inbound transfers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Account {
    /// Identity namespace, e.g. "customer"
    pub identity: Option<String>,

    /// Identifier within the identity namespace
    pub identity_id: Option<String>,

    /// Account identifier scoped within the identity
    pub account_id: Option<String>,
}

impl Account {
    /// Create an account from its three identity parts
    pub fn new(
        identity: impl Into<String>,
        identity_id: impl Into<String>,
        account_id: impl Into<String>,
    ) -> Self {
        Account {
            identity: Some(identity.into()),
            identity_id: Some(identity_id.into()),
            account_id: Some(account_id.into()),
        }
    }

    /// The canonical empty instance: all three fields unset
    ///
    /// Represents "no account", e.g. the originating side of an inbound
    /// transfer.
    pub fn empty() -> Self {
        Account {
            identity: None,
            identity_id: None,
            account_id: None,
        }
    }

    /// True iff all three identity fields are unset
    pub fn is_empty(&self) -> bool {
        self.identity.is_none() && self.identity_id.is_none() && self.account_id.is_none()
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "[EMPTY]")
        } else {
            write!(
                f,
                "Account({}, {}, {})",
                self.identity.as_deref().unwrap_or(""),
                self.identity_id.as_deref().unwrap_or(""),
                self.account_id.as_deref().unwrap_or("")
            )
        }
    }
}

/// Classification of the underlying payment instrument
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    /// Credit card
    #[default]
    Credit,
    /// Debit card
    Debit,
    /// Bank account (routing + account number)
    Bank,
}

/// Postal/contact address block
///
/// Plain structural record with derived equality. Billing and shipping blocks
/// on [`AccountData`] both use this shape; each record owns its copy.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Address {
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub city: Option<String>,
    pub region: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

/// Instrument vault record
///
/// Holds the card or bank details underlying an [`Account`], plus the billing
/// and shipping address blocks. Built once (by the fixture parser or by a
/// caller assembling vault data) and treated as immutable afterwards; derived
/// values are exposed as methods rather than cached fields.
///
/// Card fields and bank fields are mutually exclusive in practice: a record
/// with a routing number is a bank instrument, anything else is a card (see
/// [`AccountData::is_card`]).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AccountData {
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,

    pub account_type: AccountType,

    /// Whether this instrument has completed at least one successful operation
    pub had_successful_transactions: bool,

    pub issuer_id: Option<String>,
    pub issuer_name: Option<String>,
    pub issuer_phone: Option<String>,
    pub issuer_email: Option<String>,
    pub issuer_uri: Option<String>,

    /// The instrument's account number; matching key for fixture pools
    pub account_number: String,
    pub routing_number: Option<String>,

    pub card_masked_name: Option<String>,
    pub card_holder: Option<String>,
    pub card_expiration_year: Option<u16>,
    pub card_expiration_month: Option<u8>,
    pub card_verification_code: Option<String>,

    pub billing: Address,
    pub shipping: Address,
}

impl AccountData {
    /// True iff this record describes a card instrument
    ///
    /// A record is a card exactly when no routing number is present
    /// (blank counts as absent).
    pub fn is_card(&self) -> bool {
        self.routing_number
            .as_deref()
            .is_none_or(|r| r.trim().is_empty())
    }

    /// Display title: the non-blank name parts joined by single spaces
    pub fn account_title(&self) -> String {
        [&self.first_name, &self.middle_name, &self.last_name]
            .into_iter()
            .filter_map(|part| part.as_deref())
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Card expiration as (year, month)
    ///
    /// Only meaningful when both parts are set; a record missing either has
    /// no expiration date.
    pub fn expiration(&self) -> Option<(u16, u8)> {
        match (self.card_expiration_year, self.card_expiration_month) {
            (Some(year), Some(month)) => Some((year, month)),
            _ => None,
        }
    }
}

/// An [`Account`] resolved to its current vault record
///
/// Produced by a session's resolver; the instrument's account number is the
/// vault record's `account_number`, which need not equal the identity
/// vector's `account_id`.
#[derive(Debug, Clone, PartialEq)]
pub struct ActualAccountData {
    pub account: Account,
    pub data: AccountData,
}

impl ActualAccountData {
    pub fn new(account: Account, data: AccountData) -> Self {
        ActualAccountData { account, data }
    }

    /// The instrument's account number (fixture-pool matching key)
    pub fn account_number(&self) -> &str {
        &self.data.account_number
    }
}
