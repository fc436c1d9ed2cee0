//! Dispatching a query to exactly one engine

use super::models::{EngineSelector, SearchQuery};
use crate::engines::{EngineRegistry, FallbackReason, Outcome};
use crate::error::{SearchError, SearchResult};
use crate::network::HttpClient;
use crate::results::{fallback, FaviconService};
use futures::FutureExt;
use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tracing::{debug, error};

/// Selects an engine per request and guarantees a well-formed response
pub struct Dispatcher {
    client: HttpClient,
    registry: Arc<EngineRegistry>,
    favicons: FaviconService,
}

impl Dispatcher {
    pub fn new(client: HttpClient, registry: Arc<EngineRegistry>, favicons: FaviconService) -> Self {
        Self {
            client,
            registry,
            favicons,
        }
    }

    /// Handle one search request.
    ///
    /// Returns `BadRequest` for a blank query before any engine is touched.
    /// Upstream failures never surface here; engines turn them into fallback
    /// outcomes. `Internal` is only produced if an engine panics.
    pub async fn handle(&self, query: Option<&str>, engine: Option<&str>) -> SearchResult<Outcome> {
        let query = SearchQuery::parse(query)?;
        let selector = EngineSelector::new(engine);

        let Some(engine) = self.registry.resolve(selector.as_deref()) else {
            let name = self.registry.default_engine();
            debug!("No engine registered for '{}', serving fallback", name);
            return Ok(Outcome::Fallback {
                response: fallback::generate(name, query.as_str(), &self.favicons),
                reason: FallbackReason::Unconfigured,
            });
        };

        debug!("Dispatching '{}' to engine {}", query, engine.name());

        let fetch = engine.fetch(&self.client, &self.favicons, query.as_str());
        match AssertUnwindSafe(fetch).catch_unwind().await {
            Ok(outcome) => Ok(outcome),
            Err(panic) => {
                let message = panic_message(panic.as_ref());
                error!("Search error: engine {} failed: {}", engine.name(), message);
                Err(SearchError::Internal(message))
            }
        }
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "engine panicked".to_string()
    }
}
