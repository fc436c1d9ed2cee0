//! Web server module
//!
//! Provides the HTTP API for search-proxy.

mod handlers;
mod limiter;
mod routes;
mod state;

pub use handlers::SEARCH_SOURCE_HEADER;
pub use limiter::{ClientLimiter, RATE_LIMITED_MESSAGE};
pub use routes::create_router;
pub use state::AppState;
