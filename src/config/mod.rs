//! Configuration module
//!
//! Fixture-file parsing for the mock backend:
//! - `csv_format` - raw CSV record structure and pure conversion to domain types
//! - `loader` - strict file loading with line-numbered errors

pub mod csv_format;
pub mod loader;

pub use csv_format::{convert_fixture_record, CsvFixtureRecord, FixtureEntry};
pub use loader::{load_fixture_file, MockConfig};
