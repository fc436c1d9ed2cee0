//! Search engine module
//!
//! Defines the Engine trait and the dispatch table of provider adapters.

mod loader;
mod registry;
mod traits;

// Engine implementations
pub mod bing;
pub mod duckduckgo;
pub mod google;

pub use loader::EngineLoader;
pub use registry::{EngineRegistry, DEFAULT_ENGINE};
pub use traits::{
    Engine, EngineAbout, EngineRequest, EngineResponse, FallbackReason, Outcome,
};
