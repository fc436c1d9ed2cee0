//! Bing Web Search engine implementation

use super::traits::*;
use crate::config::BingSettings;
use crate::error::SearchResult;
use crate::results::{RawItem, MAX_RESULTS};
use serde::Deserialize;
use std::time::Duration;

const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";

#[derive(Debug, Deserialize)]
struct BingSearchResponse {
    #[serde(rename = "webPages", default)]
    web_pages: Option<BingWebPages>,
}

#[derive(Debug, Deserialize)]
struct BingWebPages {
    #[serde(default)]
    value: Vec<BingWebPage>,
}

#[derive(Debug, Deserialize)]
struct BingWebPage {
    #[serde(default)]
    name: String,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    snippet: String,
}

/// Bing web search through the v7 Web Search API
pub struct Bing {
    base_url: String,
    api_key: Option<String>,
    timeout: Option<Duration>,
}

impl Bing {
    pub fn new(settings: &BingSettings) -> Self {
        Self {
            base_url: settings.base_url.clone(),
            api_key: credential(&settings.api_key),
            timeout: timeout_from_secs(settings.timeout),
        }
    }
}

impl Default for Bing {
    fn default() -> Self {
        Self::new(&BingSettings::default())
    }
}

impl Engine for Bing {
    fn name(&self) -> &str {
        "bing"
    }

    fn about(&self) -> EngineAbout {
        EngineAbout::new()
            .website("https://www.bing.com")
            .api_key_required(true)
    }

    fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    fn request(&self, query: &str) -> SearchResult<EngineRequest> {
        let request = EngineRequest::get(&self.base_url)
            .param("q", query)
            .param("count", MAX_RESULTS.to_string())
            .header(
                SUBSCRIPTION_KEY_HEADER,
                self.api_key.clone().unwrap_or_default(),
            );

        Ok(request)
    }

    fn response(&self, response: EngineResponse) -> SearchResult<Vec<RawItem>> {
        response.error_for_status()?;

        let body: BingSearchResponse = response.json()?;
        let items = body
            .web_pages
            .map(|pages| pages.value)
            .unwrap_or_default()
            .into_iter()
            .map(|page| RawItem::new(page.name, page.url, page.snippet))
            .collect();

        Ok(items)
    }
}
