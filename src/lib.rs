//! search-proxy: one search endpoint in front of several search providers
//!
//! A query is dispatched to exactly one provider (Google, DuckDuckGo or Bing),
//! the provider's response is normalized into a common result schema, and a
//! deterministic fallback result set is served whenever the provider is
//! unconfigured or fails.

pub mod config;
pub mod engines;
pub mod error;
pub mod network;
pub mod results;
pub mod search;
pub mod web;

pub use config::Settings;
pub use engines::{Engine, Outcome};
pub use error::{SearchError, SearchResult};
pub use results::{ResultItem, SearchResponse};
pub use search::{Dispatcher, SearchQuery};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default timeout for upstream requests in seconds
pub const DEFAULT_TIMEOUT: u64 = 5;
