//! Engine registry mapping engine names to adapters

use super::traits::Engine;
use std::collections::HashMap;
use std::sync::Arc;

/// Name of the engine used when the selector is missing or unknown
pub const DEFAULT_ENGINE: &str = "google";

/// Dispatch table of all available engines
pub struct EngineRegistry {
    engines: HashMap<String, Arc<dyn Engine>>,
    default_engine: String,
}

impl EngineRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::with_default(DEFAULT_ENGINE)
    }

    /// Create a registry that resolves unknown selectors to `default_engine`
    pub fn with_default(default_engine: impl Into<String>) -> Self {
        Self {
            engines: HashMap::new(),
            default_engine: default_engine.into(),
        }
    }

    /// Register an engine under its lowercase name
    pub fn register(&mut self, engine: Arc<dyn Engine>) {
        let name = engine.name().to_lowercase();
        self.engines.insert(name, engine);
    }

    /// Get an engine by exact name
    pub fn get(&self, name: &str) -> Option<&Arc<dyn Engine>> {
        self.engines.get(name)
    }

    /// Resolve a caller-supplied selector, case-insensitively.
    ///
    /// Missing or unrecognized selectors resolve to the default engine.
    pub fn resolve(&self, selector: Option<&str>) -> Option<&Arc<dyn Engine>> {
        selector
            .map(|s| s.trim().to_lowercase())
            .and_then(|s| self.engines.get(&s))
            .or_else(|| self.engines.get(&self.default_engine))
    }

    /// Name of the fallback engine for unknown selectors
    pub fn default_engine(&self) -> &str {
        &self.default_engine
    }

    /// Get number of registered engines
    pub fn len(&self) -> usize {
        self.engines.len()
    }

    /// Check if registry is empty
    pub fn is_empty(&self) -> bool {
        self.engines.is_empty()
    }
}

impl Default for EngineRegistry {
    fn default() -> Self {
        Self::new()
    }
}
