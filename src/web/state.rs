//! Application state shared across handlers

use super::limiter::ClientLimiter;
use crate::config::Settings;
use crate::engines::EngineRegistry;
use crate::network::HttpClient;
use crate::results::FaviconService;
use crate::search::Dispatcher;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Global settings
    pub settings: Arc<Settings>,
    /// Search dispatcher
    pub dispatcher: Arc<Dispatcher>,
    /// Admission control for `/api/`, `None` when disabled
    pub limiter: Option<Arc<ClientLimiter>>,
}

impl AppState {
    /// Create new application state
    pub fn new(settings: Settings, registry: EngineRegistry, client: HttpClient) -> Self {
        let favicons = FaviconService::new(settings.search.favicon_service.clone());
        let dispatcher = Arc::new(Dispatcher::new(client, Arc::new(registry), favicons));
        let limiter = ClientLimiter::new(&settings.limiter, settings.server.real_ip_method)
            .map(Arc::new);

        Self {
            settings: Arc::new(settings),
            dispatcher,
            limiter,
        }
    }
}
