//! Search orchestration module
//!
//! Validates the request, picks one engine and returns its outcome.

mod dispatcher;
mod models;

pub use dispatcher::Dispatcher;
pub use models::*;
