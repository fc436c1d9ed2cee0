//! DuckDuckGo Instant Answer engine implementation

use super::traits::*;
use crate::config::DuckDuckGoSettings;
use crate::error::SearchResult;
use crate::results::RawItem;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
struct InstantAnswer {
    #[serde(rename = "RelatedTopics", default)]
    related_topics: Vec<RelatedTopic>,
}

/// Either a plain topic or a named group of topics; groups carry no `FirstURL`
#[derive(Debug, Deserialize)]
struct RelatedTopic {
    #[serde(rename = "FirstURL", default)]
    first_url: Option<String>,
    #[serde(rename = "Text", default)]
    text: Option<String>,
}

/// DuckDuckGo search via the keyless Instant Answer API
pub struct DuckDuckGo {
    base_url: String,
    timeout: Option<Duration>,
}

impl DuckDuckGo {
    pub fn new(settings: &DuckDuckGoSettings) -> Self {
        Self {
            base_url: settings.base_url.clone(),
            timeout: timeout_from_secs(settings.timeout),
        }
    }
}

impl Default for DuckDuckGo {
    fn default() -> Self {
        Self::new(&DuckDuckGoSettings::default())
    }
}

impl Engine for DuckDuckGo {
    fn name(&self) -> &str {
        "duckduckgo"
    }

    fn about(&self) -> EngineAbout {
        EngineAbout::new().website("https://duckduckgo.com")
    }

    fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    fn request(&self, query: &str) -> SearchResult<EngineRequest> {
        let request = EngineRequest::get(&self.base_url)
            .param("q", query)
            .param("format", "json")
            .param("no_html", "1");

        Ok(request)
    }

    fn response(&self, response: EngineResponse) -> SearchResult<Vec<RawItem>> {
        response.error_for_status()?;

        let body: InstantAnswer = response.json()?;
        let items = body
            .related_topics
            .into_iter()
            .filter(|topic| topic.first_url.as_deref().is_some_and(|u| !u.is_empty()))
            .map(|topic| {
                let text = topic.text.filter(|t| !t.is_empty());
                let title = text
                    .clone()
                    .or_else(|| topic.first_url.clone())
                    .unwrap_or_default();
                RawItem::new(title, topic.first_url, text.unwrap_or_default())
            })
            .collect();

        Ok(items)
    }
}
