//! Mock simulation engine module
//!
//! A concrete backend that reproduces gateway accept/reject behavior from
//! configured fixtures, without network I/O:
//! - `fixtures` - the eight named fixture pools
//! - `resolver` - vault-backed session account resolution
//! - `engine` - the MockGateway backend itself

pub mod engine;
pub mod fixtures;
pub mod resolver;

pub use engine::MockGateway;
pub use fixtures::{FixturePools, PoolName};
pub use resolver::FixtureResolver;
