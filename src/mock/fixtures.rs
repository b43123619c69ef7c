//! Fixture pools for the mock simulation engine
//!
//! The engine classifies presented accounts against eight named, ordered
//! pools of instrument records. Pools are populated once at configuration
//! time and read-only afterwards; the matching key everywhere is the
//! instrument's account number.

use crate::types::{AccountData, PaymentError};
use std::fmt;
use std::str::FromStr;

/// The eight configured fixture pools
///
/// Pool order in [`PoolName::ALL`] matches the charge algorithm's precedence
/// for the credit pools; an account number present in several pools is judged
/// by the first pool that contains it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PoolName {
    CreditCardCorrect,
    CreditCardDeclined,
    CreditCardLuhnError,
    CreditCardCvcError,
    CreditCardCorrectWithAddr,
    DebitBankCorrect,
    DebitCardCorrect,
    DebitCardCorrectWithAddr,
}

impl PoolName {
    pub const ALL: [PoolName; 8] = [
        PoolName::CreditCardCorrect,
        PoolName::CreditCardDeclined,
        PoolName::CreditCardLuhnError,
        PoolName::CreditCardCvcError,
        PoolName::CreditCardCorrectWithAddr,
        PoolName::DebitBankCorrect,
        PoolName::DebitCardCorrect,
        PoolName::DebitCardCorrectWithAddr,
    ];

    /// The configured section name for this pool
    pub fn as_str(&self) -> &'static str {
        match self {
            PoolName::CreditCardCorrect => "credit-card-correct",
            PoolName::CreditCardDeclined => "credit-card-declined",
            PoolName::CreditCardLuhnError => "credit-card-luhn-error",
            PoolName::CreditCardCvcError => "credit-card-cvc-error",
            PoolName::CreditCardCorrectWithAddr => "credit-card-correct-with-addr",
            PoolName::DebitBankCorrect => "debit-bank-correct",
            PoolName::DebitCardCorrect => "debit-card-correct",
            PoolName::DebitCardCorrectWithAddr => "debit-card-correct-with-addr",
        }
    }
}

impl fmt::Display for PoolName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PoolName {
    type Err = PaymentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PoolName::ALL
            .into_iter()
            .find(|pool| pool.as_str() == s)
            .ok_or_else(|| PaymentError::configuration(format!("unknown pool '{}'", s)))
    }
}

/// The eight ordered fixture pools, loaded once at backend construction
#[derive(Debug, Clone, Default)]
pub struct FixturePools {
    credit_card_correct: Vec<AccountData>,
    credit_card_declined: Vec<AccountData>,
    credit_card_luhn_error: Vec<AccountData>,
    credit_card_cvc_error: Vec<AccountData>,
    credit_card_correct_with_addr: Vec<AccountData>,
    debit_bank_correct: Vec<AccountData>,
    debit_card_correct: Vec<AccountData>,
    debit_card_correct_with_addr: Vec<AccountData>,
}

impl FixturePools {
    pub fn new() -> Self {
        FixturePools::default()
    }

    fn pool_mut(&mut self, name: PoolName) -> &mut Vec<AccountData> {
        match name {
            PoolName::CreditCardCorrect => &mut self.credit_card_correct,
            PoolName::CreditCardDeclined => &mut self.credit_card_declined,
            PoolName::CreditCardLuhnError => &mut self.credit_card_luhn_error,
            PoolName::CreditCardCvcError => &mut self.credit_card_cvc_error,
            PoolName::CreditCardCorrectWithAddr => &mut self.credit_card_correct_with_addr,
            PoolName::DebitBankCorrect => &mut self.debit_bank_correct,
            PoolName::DebitCardCorrect => &mut self.debit_card_correct,
            PoolName::DebitCardCorrectWithAddr => &mut self.debit_card_correct_with_addr,
        }
    }

    /// Append a record to a pool, preserving configured order
    pub fn push(&mut self, name: PoolName, data: AccountData) {
        self.pool_mut(name).push(data);
    }

    /// The records of one pool, in configured order
    pub fn pool(&self, name: PoolName) -> &[AccountData] {
        match name {
            PoolName::CreditCardCorrect => &self.credit_card_correct,
            PoolName::CreditCardDeclined => &self.credit_card_declined,
            PoolName::CreditCardLuhnError => &self.credit_card_luhn_error,
            PoolName::CreditCardCvcError => &self.credit_card_cvc_error,
            PoolName::CreditCardCorrectWithAddr => &self.credit_card_correct_with_addr,
            PoolName::DebitBankCorrect => &self.debit_bank_correct,
            PoolName::DebitCardCorrect => &self.debit_card_correct,
            PoolName::DebitCardCorrectWithAddr => &self.debit_card_correct_with_addr,
        }
    }

    /// True iff any record in the pool carries this account number
    pub fn contains_number(&self, name: PoolName, account_number: &str) -> bool {
        self.find_by_number(name, account_number).is_some()
    }

    /// First record in the pool carrying this account number
    pub fn find_by_number(&self, name: PoolName, account_number: &str) -> Option<&AccountData> {
        self.pool(name)
            .iter()
            .find(|record| record.account_number == account_number)
    }

    /// Pool sizes in [`PoolName::ALL`] order, for diagnostics
    pub fn sizes(&self) -> [(PoolName, usize); 8] {
        PoolName::ALL.map(|name| (name, self.pool(name).len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn card(number: &str) -> AccountData {
        AccountData {
            account_number: number.to_string(),
            ..AccountData::default()
        }
    }

    #[rstest]
    #[case(PoolName::CreditCardCorrect, "credit-card-correct")]
    #[case(PoolName::CreditCardDeclined, "credit-card-declined")]
    #[case(PoolName::CreditCardLuhnError, "credit-card-luhn-error")]
    #[case(PoolName::CreditCardCvcError, "credit-card-cvc-error")]
    #[case(PoolName::CreditCardCorrectWithAddr, "credit-card-correct-with-addr")]
    #[case(PoolName::DebitBankCorrect, "debit-bank-correct")]
    #[case(PoolName::DebitCardCorrect, "debit-card-correct")]
    #[case(PoolName::DebitCardCorrectWithAddr, "debit-card-correct-with-addr")]
    fn test_pool_names_round_trip(#[case] pool: PoolName, #[case] name: &str) {
        assert_eq!(pool.as_str(), name);
        assert_eq!(name.parse::<PoolName>().unwrap(), pool);
    }

    #[test]
    fn test_unknown_pool_name_is_a_configuration_error() {
        let result = "credit-card-wrong".parse::<PoolName>();
        assert!(matches!(
            result.unwrap_err(),
            PaymentError::Configuration { .. }
        ));
    }

    #[test]
    fn test_pools_start_empty() {
        let pools = FixturePools::new();
        for (_, size) in pools.sizes() {
            assert_eq!(size, 0);
        }
    }

    #[test]
    fn test_push_preserves_order_within_a_pool() {
        let mut pools = FixturePools::new();
        pools.push(PoolName::CreditCardCorrect, card("1111"));
        pools.push(PoolName::CreditCardCorrect, card("2222"));
        pools.push(PoolName::CreditCardCorrect, card("3333"));

        let numbers: Vec<_> = pools
            .pool(PoolName::CreditCardCorrect)
            .iter()
            .map(|r| r.account_number.as_str())
            .collect();
        assert_eq!(numbers, ["1111", "2222", "3333"]);
    }

    #[test]
    fn test_find_by_number_scopes_to_one_pool() {
        let mut pools = FixturePools::new();
        pools.push(PoolName::CreditCardDeclined, card("4000000000000002"));

        assert!(pools.contains_number(PoolName::CreditCardDeclined, "4000000000000002"));
        assert!(!pools.contains_number(PoolName::CreditCardCorrect, "4000000000000002"));
        assert!(pools
            .find_by_number(PoolName::CreditCardDeclined, "4242424242424242")
            .is_none());
    }

    #[test]
    fn test_find_by_number_returns_first_match() {
        let mut pools = FixturePools::new();
        let mut first = card("5555");
        first.first_name = Some("First".to_string());
        let mut second = card("5555");
        second.first_name = Some("Second".to_string());
        pools.push(PoolName::DebitCardCorrect, first);
        pools.push(PoolName::DebitCardCorrect, second);

        let found = pools
            .find_by_number(PoolName::DebitCardCorrect, "5555")
            .unwrap();
        assert_eq!(found.first_name.as_deref(), Some("First"));
    }
}
