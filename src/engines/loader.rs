//! Engine loader for initializing engines from configuration

use super::registry::EngineRegistry;
use super::traits::Engine;
use super::{bing, duckduckgo, google};
use crate::config::Settings;
use std::sync::Arc;
use tracing::info;

/// Loader for initializing engines from configuration
pub struct EngineLoader;

impl EngineLoader {
    /// Build the registry for every supported engine.
    ///
    /// Engines without credentials are still registered; they serve
    /// fallback results only.
    pub fn load(settings: &Settings) -> EngineRegistry {
        let mut registry = EngineRegistry::new();

        let engines: Vec<Arc<dyn Engine>> = vec![
            Arc::new(google::Google::new(&settings.engines.google)),
            Arc::new(duckduckgo::DuckDuckGo::new(&settings.engines.duckduckgo)),
            Arc::new(bing::Bing::new(&settings.engines.bing)),
        ];

        for engine in engines {
            let about = engine.about();
            let website = about.website.as_deref().unwrap_or("-");
            if engine.is_configured() || !about.require_api_key {
                info!("Loaded engine: {} ({})", engine.name(), website);
            } else {
                info!(
                    "Loaded engine: {} ({}), no API key configured, serving fallback results only",
                    engine.name(),
                    website
                );
            }
            registry.register(engine);
        }

        info!("Loaded {} engines", registry.len());
        registry
    }
}
