//! CSV format handling for fixture files
//!
//! This module centralizes the fixture-file format concerns:
//! - `CsvFixtureRecord` structure for deserialization
//! - Conversion from raw CSV records to domain types
//!
//! One row describes one instrument record. The `pool` column names one of
//! the eight fixture pools, or `vault` for an entry the session resolver
//! serves (vault rows additionally carry the account identity columns).
//! All conversion functions are pure (no I/O) for easy testing.

use crate::mock::PoolName;
use crate::types::{Account, AccountData, AccountType, ActualAccountData, Address};
use serde::Deserialize;
use std::str::FromStr;

/// Section name routing a row into the resolver vault instead of a pool
pub const VAULT_SECTION: &str = "vault";

/// Raw fixture row as deserialized from CSV
///
/// Everything except `pool` is optional so fixture files only need the
/// columns they use; blanks count as absent.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct CsvFixtureRecord {
    pub pool: String,

    // Identity columns, only meaningful on vault rows
    pub identity: Option<String>,
    pub identity_id: Option<String>,
    pub account_id: Option<String>,

    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub account_type: Option<String>,
    pub had_successful_transactions: Option<String>,

    pub issuer_id: Option<String>,
    pub issuer_name: Option<String>,
    pub issuer_phone: Option<String>,
    pub issuer_email: Option<String>,
    pub issuer_uri: Option<String>,

    pub account_number: Option<String>,
    pub routing_number: Option<String>,
    pub card_masked_name: Option<String>,
    pub card_holder: Option<String>,
    pub card_exp_year: Option<String>,
    pub card_exp_month: Option<String>,
    pub card_cvc: Option<String>,

    pub billing_address1: Option<String>,
    pub billing_address2: Option<String>,
    pub billing_city: Option<String>,
    pub billing_region: Option<String>,
    pub billing_postal_code: Option<String>,
    pub billing_country: Option<String>,
    pub billing_phone: Option<String>,
    pub billing_email: Option<String>,

    pub shipping_address1: Option<String>,
    pub shipping_address2: Option<String>,
    pub shipping_city: Option<String>,
    pub shipping_region: Option<String>,
    pub shipping_postal_code: Option<String>,
    pub shipping_country: Option<String>,
    pub shipping_phone: Option<String>,
    pub shipping_email: Option<String>,
}

/// A converted fixture row: either a pool record or a vault entry
#[derive(Debug, Clone, PartialEq)]
pub enum FixtureEntry {
    Pool { pool: PoolName, data: AccountData },
    Vault(ActualAccountData),
}

/// Convert a raw CSV row to a fixture entry
///
/// This function:
/// - Requires a non-blank account number
/// - Parses the account type (default: credit) and numeric card fields
/// - Projects the billing/shipping columns into address blocks once, here
/// - Routes the row by its `pool` column into a pool or the vault
///
/// # Errors
///
/// Returns a message describing the offending field; the loader decorates it
/// with the line number.
pub fn convert_fixture_record(record: CsvFixtureRecord) -> Result<FixtureEntry, String> {
    let account_number = opt(record.account_number)
        .ok_or_else(|| "missing account-number".to_string())?;

    let account_type = match opt(record.account_type) {
        None => AccountType::default(),
        Some(value) => match value.to_lowercase().as_str() {
            "credit" => AccountType::Credit,
            "debit" => AccountType::Debit,
            "bank" => AccountType::Bank,
            _ => return Err(format!("invalid account-type '{}'", value)),
        },
    };

    let had_successful_transactions = match opt(record.had_successful_transactions) {
        None => false,
        Some(value) => value.parse::<bool>().map_err(|_| {
            format!("invalid had-successful-transactions '{}'", value)
        })?,
    };

    let data = AccountData {
        first_name: opt(record.first_name),
        middle_name: opt(record.middle_name),
        last_name: opt(record.last_name),
        account_type,
        had_successful_transactions,
        issuer_id: opt(record.issuer_id),
        issuer_name: opt(record.issuer_name),
        issuer_phone: opt(record.issuer_phone),
        issuer_email: opt(record.issuer_email),
        issuer_uri: opt(record.issuer_uri),
        account_number,
        routing_number: opt(record.routing_number),
        card_masked_name: opt(record.card_masked_name),
        card_holder: opt(record.card_holder),
        card_expiration_year: parse_field("card-exp-year", record.card_exp_year)?,
        card_expiration_month: parse_field("card-exp-month", record.card_exp_month)?,
        card_verification_code: opt(record.card_cvc),
        billing: Address {
            address1: opt(record.billing_address1),
            address2: opt(record.billing_address2),
            city: opt(record.billing_city),
            region: opt(record.billing_region),
            postal_code: opt(record.billing_postal_code),
            country: opt(record.billing_country),
            phone: opt(record.billing_phone),
            email: opt(record.billing_email),
        },
        shipping: Address {
            address1: opt(record.shipping_address1),
            address2: opt(record.shipping_address2),
            city: opt(record.shipping_city),
            region: opt(record.shipping_region),
            postal_code: opt(record.shipping_postal_code),
            country: opt(record.shipping_country),
            phone: opt(record.shipping_phone),
            email: opt(record.shipping_email),
        },
    };

    if record.pool == VAULT_SECTION {
        let identity = opt(record.identity).ok_or_else(|| "vault rows require identity".to_string())?;
        let identity_id =
            opt(record.identity_id).ok_or_else(|| "vault rows require identity-id".to_string())?;
        // The identity vector's account id defaults to the instrument number.
        let account_id = opt(record.account_id).unwrap_or_else(|| data.account_number.clone());
        Ok(FixtureEntry::Vault(ActualAccountData::new(
            Account::new(identity, identity_id, account_id),
            data,
        )))
    } else {
        let pool = PoolName::from_str(&record.pool)
            .map_err(|_| format!("unknown pool '{}'", record.pool))?;
        Ok(FixtureEntry::Pool { pool, data })
    }
}

/// Treat blank/whitespace values as absent
fn opt(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Parse an optional numeric column, naming the field on failure
fn parse_field<T: FromStr>(field: &str, value: Option<String>) -> Result<Option<T>, String> {
    match opt(value) {
        None => Ok(None),
        Some(raw) => raw
            .parse::<T>()
            .map(Some)
            .map_err(|_| format!("invalid {} '{}'", field, raw)),
    }
}
