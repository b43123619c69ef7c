//! Payment Gateway Core Library
//! # Overview
//!
//! This library provides a payment-processing abstraction layer: charge,
//! capture, void, refund, and transfer operations against interchangeable
//! payment backends through one uniform contract, plus a deterministic mock
//! backend that reproduces the transaction lifecycle and failure taxonomy of
//! a real card/bank processor from configured fixtures.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Account, AccountData, Amount, Transaction,
//!   PaymentError)
//! - [`gateway`] - The backend contract and its supporting pieces:
//!   - [`gateway::traits`] - the PaySystem contract every backend implements
//!   - [`gateway::session`] - per-connection sessions, account resolution,
//!     credentials, transaction-id minting
//!   - [`gateway::statistics`] - per-backend atomic operation counters
//!   - [`gateway::registry`] - configuration-driven backend construction
//!   - [`gateway::transport`] - transport collaborator interface and gateway
//!     failure translation
//! - [`mock`] - The mock simulation engine and its fixture pools
//! - [`config`] - Fixture-file parsing for the mock backend
//! - [`cli`] - CLI argument parsing for the demo driver
//!
//! # Lifecycle Operations
//!
//! Every backend supports five operations:
//!
//! - **Charge**: authorize (and optionally capture) funds against an
//!   instrument
//! - **Capture**: convert a prior authorization into a settled charge
//! - **Void**: cancel a prior uncaptured charge
//! - **Refund**: reverse a prior captured charge
//! - **Transfer**: move funds into an account's instrument
//!
//! Callers obtain a backend (usually through the [`gateway::GatewayRegistry`]),
//! open a [`gateway::PaySession`], and drive operations through it; each
//! operation returns an immutable [`types::Transaction`] or a typed
//! [`types::PaymentError`], and updates the backend's statistics either way.

// Module declarations
pub mod cli;
pub mod config;
pub mod gateway;
pub mod mock;
pub mod types;

pub use config::{load_fixture_file, MockConfig};
pub use gateway::{
    AccountResolver, ConnectionParams, Credentials, GatewayConfig, GatewayRegistry,
    OperationOptions, PaySession, PayStatistics, PaySystem, SessionContext, StatisticsSnapshot,
};
pub use mock::{FixturePools, FixtureResolver, MockGateway, PoolName};
pub use types::{
    Account, AccountData, AccountType, ActualAccountData, Address, Amount, PaymentError,
    Transaction, TransactionId, TransactionKind, TransactionStatus,
};
