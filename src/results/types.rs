//! Result type definitions

use serde::{Deserialize, Serialize};

/// A single normalized search result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultItem {
    pub title: String,
    /// Always a valid absolute URL with a host
    pub url: String,
    pub description: String,
    pub favicon: String,
}

/// The response body of one search: one provider, one page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Engine that produced (or was asked to produce) the results
    pub engine: String,
    pub query: String,
    pub results: Vec<ResultItem>,
}

impl SearchResponse {
    pub fn new(engine: impl Into<String>, query: impl Into<String>, results: Vec<ResultItem>) -> Self {
        Self {
            engine: engine.into(),
            query: query.into(),
            results,
        }
    }

    /// A successful provider call that matched nothing
    pub fn empty(engine: impl Into<String>, query: impl Into<String>) -> Self {
        Self::new(engine, query, Vec::new())
    }
}

/// A provider item after field mapping, before validation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawItem {
    pub title: String,
    pub url: Option<String>,
    pub description: String,
}

impl RawItem {
    pub fn new(title: impl Into<String>, url: Option<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url,
            description: description.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_serializes_flat() {
        let response = SearchResponse::new(
            "google",
            "rust",
            vec![ResultItem {
                title: "Rust".into(),
                url: "https://www.rust-lang.org/".into(),
                description: "A language".into(),
                favicon: "https://icons.example/?d=www.rust-lang.org".into(),
            }],
        );

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["engine"], "google");
        assert_eq!(json["query"], "rust");
        assert_eq!(json["results"][0]["url"], "https://www.rust-lang.org/");
        assert_eq!(json["results"][0]["favicon"], "https://icons.example/?d=www.rust-lang.org");
        assert_eq!(json["results"][0].as_object().unwrap().len(), 4);
    }

    #[test]
    fn test_empty_response() {
        let response = SearchResponse::empty("bing", "nothing");
        assert!(response.results.is_empty());
        assert_eq!(response.engine, "bing");
    }
}
