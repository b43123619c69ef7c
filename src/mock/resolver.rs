//! Vault-backed account resolver for the mock engine
//!
//! Configured vault entries bind an account identity vector to an instrument
//! record; a [`FixtureResolver`] serves those entries through the
//! [`AccountResolver`] session interface.

use crate::gateway::AccountResolver;
use crate::types::{Account, ActualAccountData};
use std::collections::HashMap;

/// Resolver over configured vault entries
///
/// Built once from the fixture file's vault rows (or assembled by tests) and
/// read-only afterwards. Lookup is exact account equality over all three
/// identity fields.
#[derive(Debug, Clone, Default)]
pub struct FixtureResolver {
    entries: HashMap<Account, ActualAccountData>,
}

impl FixtureResolver {
    /// Build a resolver from vault entries, keyed by each entry's account
    ///
    /// Later entries for the same account replace earlier ones.
    pub fn new(entries: Vec<ActualAccountData>) -> Self {
        FixtureResolver {
            entries: entries
                .into_iter()
                .map(|entry| (entry.account.clone(), entry))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl AccountResolver for FixtureResolver {
    fn resolve(&self, account: &Account) -> Option<ActualAccountData> {
        self.entries.get(account).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AccountData;

    fn entry(account: Account, number: &str) -> ActualAccountData {
        ActualAccountData::new(
            account,
            AccountData {
                account_number: number.to_string(),
                ..AccountData::default()
            },
        )
    }

    #[test]
    fn test_resolves_known_account() {
        let account = Account::new("customer", "125", "2");
        let resolver = FixtureResolver::new(vec![entry(account.clone(), "4242424242424242")]);

        let resolved = resolver.resolve(&account).unwrap();
        assert_eq!(resolved.account_number(), "4242424242424242");
        assert_eq!(resolver.len(), 1);
    }

    #[test]
    fn test_misses_unknown_and_empty_accounts() {
        let resolver = FixtureResolver::new(vec![entry(
            Account::new("customer", "125", "2"),
            "4242424242424242",
        )]);

        assert!(resolver.resolve(&Account::new("customer", "125", "3")).is_none());
        assert!(resolver.resolve(&Account::new("vendor", "125", "2")).is_none());
        assert!(resolver.resolve(&Account::empty()).is_none());
    }

    #[test]
    fn test_later_entries_replace_earlier_ones() {
        let account = Account::new("customer", "125", "2");
        let resolver = FixtureResolver::new(vec![
            entry(account.clone(), "1111"),
            entry(account.clone(), "2222"),
        ]);

        assert_eq!(resolver.len(), 1);
        assert_eq!(resolver.resolve(&account).unwrap().account_number(), "2222");
    }

    #[test]
    fn test_empty_resolver_is_empty() {
        let resolver = FixtureResolver::new(Vec::new());
        assert!(resolver.is_empty());
    }
}
