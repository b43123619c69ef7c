//! Monetary amount type
//!
//! A currency-tagged decimal value. The core compares, copies, and
//! accumulates amounts; it never converts between currencies (currency
//! conversion is outside this crate).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A decimal value tagged with its ISO 4217 currency code
///
/// The currency code is kept as configured (conventionally lowercase, e.g.
/// "usd"); the core treats it as an opaque tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amount {
    pub currency: String,
    pub value: Decimal,
}

impl Amount {
    pub fn new(currency: impl Into<String>, value: Decimal) -> Self {
        Amount {
            currency: currency.into(),
            value,
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.currency)
    }
}
