//! Engine traits and types

use crate::error::{SearchError, SearchResult};
use crate::network::HttpClient;
use crate::results::{fallback, normalize, FaviconService, RawItem, SearchResponse};
use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, warn};

/// HTTP request to be made by the engine
#[derive(Debug, Clone)]
pub struct EngineRequest {
    /// URL to request
    pub url: String,
    /// Request headers
    pub headers: HashMap<String, String>,
    /// Query parameters, in the order they are sent
    pub params: Vec<(String, String)>,
}

impl EngineRequest {
    /// Create a GET request
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: HashMap::new(),
            params: Vec::new(),
        }
    }

    /// Add a header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Add a query parameter
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Look up a query parameter by name
    pub fn param_value(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// HTTP response from engine request
#[derive(Debug)]
pub struct EngineResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body as text
    pub text: String,
}

impl EngineResponse {
    /// Parse response as JSON
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> SearchResult<T> {
        Ok(serde_json::from_str(&self.text)?)
    }

    /// Check if response is successful (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Fail on any non-2xx status
    pub fn error_for_status(&self) -> SearchResult<&Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(SearchError::Http {
                status: self.status,
            })
        }
    }
}

/// Why an engine served synthetic results instead of live ones
#[derive(Debug, Clone, PartialEq)]
pub enum FallbackReason {
    /// Credentials for the engine are not configured; no call was made
    Unconfigured,
    /// The upstream call or its normalization failed
    Upstream(SearchError),
}

/// What an engine produced for one query
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Real provider data, possibly zero results
    Live(SearchResponse),
    /// Synthetic results from the fallback generator
    Fallback {
        response: SearchResponse,
        reason: FallbackReason,
    },
}

impl Outcome {
    pub fn response(&self) -> &SearchResponse {
        match self {
            Outcome::Live(response) => response,
            Outcome::Fallback { response, .. } => response,
        }
    }

    pub fn into_search_response(self) -> SearchResponse {
        match self {
            Outcome::Live(response) => response,
            Outcome::Fallback { response, .. } => response,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Outcome::Fallback { .. })
    }

    /// Short label for logs and the `X-Search-Source` header
    pub fn source(&self) -> &'static str {
        if self.is_fallback() {
            "fallback"
        } else {
            "live"
        }
    }
}

/// Main engine trait that all search providers implement
#[async_trait]
pub trait Engine: Send + Sync {
    /// Engine name, also the value of `SearchResponse::engine`
    fn name(&self) -> &str;

    /// Short description of the engine
    fn about(&self) -> EngineAbout {
        EngineAbout::default()
    }

    /// Per-engine timeout override
    fn timeout(&self) -> Option<Duration> {
        None
    }

    /// Whether the credentials needed for a real call are present
    fn is_configured(&self) -> bool {
        true
    }

    /// Build the HTTP request for a search
    fn request(&self, query: &str) -> SearchResult<EngineRequest>;

    /// Map the HTTP response onto raw items
    fn response(&self, response: EngineResponse) -> SearchResult<Vec<RawItem>>;

    /// Issue a single upstream call and map its response
    async fn search(&self, client: &HttpClient, query: &str) -> SearchResult<Vec<RawItem>> {
        let request = self.request(query)?;
        let limit = self.timeout().unwrap_or_else(|| client.default_timeout());

        debug!("Searching engine {} with timeout {:?}", self.name(), limit);

        let response = client.execute_with_timeout(request, limit).await?;
        self.response(response)
    }

    /// Produce a response for `query`, absorbing every upstream failure.
    ///
    /// Unconfigured engines skip the network entirely. Failures are logged
    /// and replaced by the fallback set tagged with this engine's name.
    async fn fetch(&self, client: &HttpClient, favicons: &FaviconService, query: &str) -> Outcome {
        let name = self.name();

        if !self.is_configured() {
            debug!("Engine {} has no credentials, serving fallback", name);
            return Outcome::Fallback {
                response: fallback::generate(name, query, favicons),
                reason: FallbackReason::Unconfigured,
            };
        }

        match self.search(client, query).await {
            Ok(items) => {
                let results = normalize(items, favicons);
                debug!("Engine {} returned {} results", name, results.len());
                Outcome::Live(SearchResponse::new(name, query, results))
            }
            Err(e) => {
                warn!("{} search error: {}", name, e);
                Outcome::Fallback {
                    response: fallback::generate(name, query, favicons),
                    reason: FallbackReason::Upstream(e),
                }
            }
        }
    }
}

/// Engine metadata
#[derive(Debug, Clone, Default)]
pub struct EngineAbout {
    /// Website URL
    pub website: Option<String>,
    /// Whether an API key is required
    pub require_api_key: bool,
}

impl EngineAbout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn website(mut self, url: impl Into<String>) -> Self {
        self.website = Some(url.into());
        self
    }

    pub fn api_key_required(mut self, required: bool) -> Self {
        self.require_api_key = required;
        self
    }
}

/// Non-empty, trimmed credential value
pub(crate) fn credential(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
}

/// Convert an optional seconds value from settings into a timeout
pub(crate) fn timeout_from_secs(secs: Option<f64>) -> Option<Duration> {
    secs.filter(|s| *s > 0.0)
        .and_then(|s| Duration::try_from_secs_f64(s).ok())
}
