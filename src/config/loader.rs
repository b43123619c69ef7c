//! Fixture-file loading
//!
//! Reads a fixture CSV file into a [`MockConfig`]: the eight fixture pools
//! plus the vault entries the session resolver serves. Unlike transaction
//! streams, configuration is strict: any malformed row aborts the load with
//! a configuration error carrying the line number.

use crate::config::csv_format::{convert_fixture_record, CsvFixtureRecord, FixtureEntry};
use crate::mock::FixturePools;
use crate::types::{ActualAccountData, PaymentError};
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::path::Path;
use tracing::debug;

/// Everything a mock backend is configured with
#[derive(Debug, Clone, Default)]
pub struct MockConfig {
    pub pools: FixturePools,
    pub vault: Vec<ActualAccountData>,
}

/// Load a fixture CSV file
///
/// The reader trims whitespace in every field and tolerates rows shorter
/// than the header (absent trailing columns count as blank).
///
/// # Errors
///
/// Returns [`PaymentError::Configuration`] when the file cannot be opened or
/// any row fails to parse or convert; row errors carry the 1-based line
/// number (the header is line 1).
pub fn load_fixture_file(path: &Path) -> Result<MockConfig, PaymentError> {
    let file = File::open(path).map_err(|e| {
        PaymentError::configuration(format!(
            "failed to open fixture file '{}': {}",
            path.display(),
            e
        ))
    })?;

    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(file);

    let mut config = MockConfig::default();
    for (index, row) in reader.deserialize::<CsvFixtureRecord>().enumerate() {
        let line = index + 2; // header occupies line 1
        let record =
            row.map_err(|e| PaymentError::configuration(format!("line {}: {}", line, e)))?;
        let entry = convert_fixture_record(record)
            .map_err(|e| PaymentError::configuration(format!("line {}: {}", line, e)))?;
        match entry {
            FixtureEntry::Pool { pool, data } => config.pools.push(pool, data),
            FixtureEntry::Vault(actual) => config.vault.push(actual),
        }
    }

    for (pool, size) in config.pools.sizes() {
        if size > 0 {
            debug!(pool = %pool, records = size, "fixture pool loaded");
        }
    }
    debug!(
        vault = config.vault.len(),
        path = %path.display(),
        "fixture file loaded"
    );

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::PoolName;
    use crate::types::Account;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper function to create a temporary fixture file for testing
    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    const HEADER: &str =
        "pool,identity,identity-id,account-number,card-exp-year,card-exp-month,card-cvc\n";

    #[test]
    fn test_load_populates_pools_and_vault() {
        let content = format!(
            "{}credit-card-correct,,,4242424242424242,2027,4,123\n\
             credit-card-declined,,,4000000000000002,2027,4,123\n\
             debit-bank-correct,,,000123456789,,,\n\
             vault,customer,125,4242424242424242,2027,4,123\n",
            HEADER
        );
        let file = create_temp_csv(&content);

        let config = load_fixture_file(file.path()).expect("fixture file should load");

        assert_eq!(config.pools.pool(PoolName::CreditCardCorrect).len(), 1);
        assert_eq!(config.pools.pool(PoolName::CreditCardDeclined).len(), 1);
        assert_eq!(config.pools.pool(PoolName::DebitBankCorrect).len(), 1);
        assert_eq!(config.pools.pool(PoolName::CreditCardCvcError).len(), 0);
        assert_eq!(config.vault.len(), 1);
        assert_eq!(
            config.vault[0].account,
            Account::new("customer", "125", "4242424242424242")
        );
    }

    #[test]
    fn test_load_preserves_pool_order() {
        let content = format!(
            "{}credit-card-correct,,,1111,2027,4,123\n\
             credit-card-correct,,,2222,2027,4,123\n",
            HEADER
        );
        let file = create_temp_csv(&content);

        let config = load_fixture_file(file.path()).unwrap();
        let numbers: Vec<_> = config
            .pools
            .pool(PoolName::CreditCardCorrect)
            .iter()
            .map(|r| r.account_number.as_str())
            .collect();
        assert_eq!(numbers, ["1111", "2222"]);
    }

    #[test]
    fn test_unknown_pool_reports_the_line_number() {
        let content = format!(
            "{}credit-card-correct,,,1111,2027,4,123\n\
             credit-card-wrong,,,2222,2027,4,123\n",
            HEADER
        );
        let file = create_temp_csv(&content);

        let error = load_fixture_file(file.path()).unwrap_err();
        let message = error.to_string();
        assert!(message.contains("line 3"));
        assert!(message.contains("unknown pool 'credit-card-wrong'"));
    }

    #[test]
    fn test_missing_account_number_aborts_the_load() {
        let content = format!("{}credit-card-correct,,,,2027,4,123\n", HEADER);
        let file = create_temp_csv(&content);

        let error = load_fixture_file(file.path()).unwrap_err();
        assert!(error.to_string().contains("missing account-number"));
    }

    #[test]
    fn test_missing_file_is_a_configuration_error() {
        let result = load_fixture_file(Path::new("nonexistent-fixtures.csv"));
        let error = result.unwrap_err();
        assert!(matches!(error, PaymentError::Configuration { .. }));
        assert!(error.to_string().contains("failed to open fixture file"));
    }

    #[test]
    fn test_empty_file_after_header_yields_empty_config() {
        let file = create_temp_csv(HEADER);

        let config = load_fixture_file(file.path()).unwrap();
        assert!(config.vault.is_empty());
        for (_, size) in config.pools.sizes() {
            assert_eq!(size, 0);
        }
    }

    #[test]
    fn test_fields_are_trimmed() {
        let content = format!(
            "{}  credit-card-correct  ,,,  4242424242424242  ,  2027  ,  4  ,  123  \n",
            HEADER
        );
        let file = create_temp_csv(&content);

        let config = load_fixture_file(file.path()).unwrap();
        let record = &config.pools.pool(PoolName::CreditCardCorrect)[0];
        assert_eq!(record.account_number, "4242424242424242");
        assert_eq!(record.expiration(), Some((2027, 4)));
    }
}
