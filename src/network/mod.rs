//! HTTP networking module
//!
//! Provides the outbound client used by every engine adapter.

mod client;

pub use client::HttpClient;
