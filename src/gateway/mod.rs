//! Gateway abstraction module
//!
//! The uniform contract over payment backends and its supporting pieces:
//! - `traits` - the PaySystem backend contract and per-call options
//! - `session` - session layer: account resolution, credentials, id minting
//! - `statistics` - per-backend atomic operation counters
//! - `registry` - configuration-driven backend construction
//! - `transport` - transport collaborator interface and failure translation

pub mod registry;
pub mod session;
pub mod statistics;
pub mod traits;
pub mod transport;

pub use registry::{GatewayConfig, GatewayFactory, GatewayRegistry};
pub use session::{
    AccountResolver, ConnectionParams, Credentials, EmptyResolver, PaySession, SessionContext,
};
pub use statistics::{OperationSnapshot, PayStatistics, StatisticsSnapshot};
pub use traits::{OperationOptions, PaySystem};
pub use transport::{translate_failure, GatewayFailure, Transport};
