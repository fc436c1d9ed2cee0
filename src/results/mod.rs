//! Result types, normalization and fallback generation
//!
//! Every response leaving the service is built from the types in this module,
//! whether it came from a live provider or from the fallback generator.

pub mod fallback;
mod normalizer;
mod types;

pub use normalizer::{normalize, normalize_item, parse_result_url, FaviconService, MAX_RESULTS};
pub use types::*;
