//! Google Custom Search engine implementation

use super::traits::*;
use crate::config::GoogleSettings;
use crate::error::SearchResult;
use crate::results::{RawItem, MAX_RESULTS};
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
struct GoogleSearchResponse {
    #[serde(default)]
    items: Option<Vec<GoogleSearchItem>>,
}

#[derive(Debug, Deserialize)]
struct GoogleSearchItem {
    #[serde(default)]
    title: String,
    #[serde(default)]
    link: Option<String>,
    #[serde(default)]
    snippet: String,
}

/// Google web search through the Custom Search JSON API
pub struct Google {
    base_url: String,
    api_key: Option<String>,
    search_engine_id: Option<String>,
    timeout: Option<Duration>,
}

impl Google {
    pub fn new(settings: &GoogleSettings) -> Self {
        Self {
            base_url: settings.base_url.clone(),
            api_key: credential(&settings.api_key),
            search_engine_id: credential(&settings.search_engine_id),
            timeout: timeout_from_secs(settings.timeout),
        }
    }
}

impl Default for Google {
    fn default() -> Self {
        Self::new(&GoogleSettings::default())
    }
}

impl Engine for Google {
    fn name(&self) -> &str {
        "google"
    }

    fn about(&self) -> EngineAbout {
        EngineAbout::new()
            .website("https://www.google.com")
            .api_key_required(true)
    }

    fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some() && self.search_engine_id.is_some()
    }

    fn request(&self, query: &str) -> SearchResult<EngineRequest> {
        let request = EngineRequest::get(&self.base_url)
            .param("q", query)
            .param("key", self.api_key.clone().unwrap_or_default())
            .param("cx", self.search_engine_id.clone().unwrap_or_default())
            .param("num", MAX_RESULTS.to_string());

        Ok(request)
    }

    fn response(&self, response: EngineResponse) -> SearchResult<Vec<RawItem>> {
        response.error_for_status()?;

        let body: GoogleSearchResponse = response.json()?;
        let items = body
            .items
            .unwrap_or_default()
            .into_iter()
            .map(|item| RawItem::new(item.title, item.link, item.snippet))
            .collect();

        Ok(items)
    }
}
