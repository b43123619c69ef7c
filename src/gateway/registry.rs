//! Backend registry
//!
//! Backends are chosen by configuration: a [`GatewayConfig`] names a backend
//! and carries its string settings, and the [`GatewayRegistry`] maps that
//! backend name to a factory producing a boxed [`PaySystem`]. No reflection,
//! no global state; callers own their registry instance.
//!
//! The registry's map is concurrent so factories can be registered through a
//! shared reference, e.g. by plugins setting themselves up behind an `Arc`.

use crate::gateway::traits::PaySystem;
use crate::mock::MockGateway;
use crate::types::PaymentError;
use dashmap::DashMap;
use std::collections::HashMap;
use std::sync::Arc;

/// Construction-time configuration for one backend instance
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GatewayConfig {
    /// Registered backend name, e.g. "mock"
    pub backend: String,
    /// Backend-specific settings, e.g. "fixtures" naming a fixture file path
    pub settings: HashMap<String, String>,
}

impl GatewayConfig {
    pub fn new(backend: impl Into<String>) -> Self {
        GatewayConfig {
            backend: backend.into(),
            settings: HashMap::new(),
        }
    }

    /// Add one setting, builder-style
    pub fn with_setting(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.settings.insert(key.into(), value.into());
        self
    }

    /// Look up a setting by key
    pub fn setting(&self, key: &str) -> Option<&str> {
        self.settings.get(key).map(String::as_str)
    }
}

/// Factory building a backend instance from its configuration
pub type GatewayFactory =
    Arc<dyn Fn(&GatewayConfig) -> Result<Box<dyn PaySystem>, PaymentError> + Send + Sync>;

/// Maps backend names to factories
pub struct GatewayRegistry {
    factories: DashMap<String, GatewayFactory>,
}

impl GatewayRegistry {
    /// An empty registry with no backends
    pub fn new() -> Self {
        GatewayRegistry {
            factories: DashMap::new(),
        }
    }

    /// A registry with the built-in backends registered
    ///
    /// Currently that is the mock simulation engine under the name "mock";
    /// its factory reads the `fixtures` setting as the path to a fixture CSV
    /// file.
    pub fn with_defaults() -> Self {
        let registry = GatewayRegistry::new();
        registry.register("mock", MockGateway::from_config);
        registry
    }

    /// Register (or replace) a backend factory under a name
    pub fn register<F>(&self, name: impl Into<String>, factory: F)
    where
        F: Fn(&GatewayConfig) -> Result<Box<dyn PaySystem>, PaymentError> + Send + Sync + 'static,
    {
        self.factories.insert(name.into(), Arc::new(factory));
    }

    /// True iff a factory is registered under `name`
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Build a backend instance for the named configuration
    ///
    /// # Errors
    ///
    /// Returns [`PaymentError::Configuration`] when no factory is registered
    /// under the configured backend name, or whatever error the factory
    /// itself reports.
    pub fn build(&self, config: &GatewayConfig) -> Result<Box<dyn PaySystem>, PaymentError> {
        // Clone the factory out so the map shard is not held while it runs.
        let factory = self
            .factories
            .get(&config.backend)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or_else(|| {
                PaymentError::configuration(format!("unknown backend '{}'", config.backend))
            })?;
        tracing::debug!(backend = %config.backend, "building gateway backend");
        (*factory)(config)
    }
}

impl Default for GatewayRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
