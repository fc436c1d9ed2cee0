//! Mapping provider items onto the common result schema

use super::types::{RawItem, ResultItem};
use url::Url;

/// Upper bound on results per response, shared by every engine
pub const MAX_RESULTS: usize = 10;

/// Derives favicon URLs from result hostnames
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaviconService {
    base: String,
}

impl FaviconService {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    /// `base + hostname(url)`
    pub fn for_url(&self, url: &Url) -> Option<String> {
        url.host_str().map(|host| format!("{}{}", self.base, host))
    }
}

impl Default for FaviconService {
    fn default() -> Self {
        Self::new(crate::config::SearchSettings::default().favicon_service)
    }
}

/// Parse a candidate result URL, accepting only absolute URLs with a host
pub fn parse_result_url(raw: &str) -> Option<Url> {
    let url = Url::parse(raw.trim()).ok()?;
    url.host_str().filter(|h| !h.is_empty())?;
    Some(url)
}

/// Turn one raw item into a result, or `None` if it has no usable URL
pub fn normalize_item(item: RawItem, favicons: &FaviconService) -> Option<ResultItem> {
    let raw_url = item.url?;
    let url = parse_result_url(&raw_url)?;
    let favicon = favicons.for_url(&url)?;

    Some(ResultItem {
        title: item.title,
        url: raw_url.trim().to_string(),
        description: item.description,
        favicon,
    })
}

/// Normalize a provider's item list: drop unusable URLs, keep order, cap at [`MAX_RESULTS`]
pub fn normalize<I>(items: I, favicons: &FaviconService) -> Vec<ResultItem>
where
    I: IntoIterator<Item = RawItem>,
{
    items
        .into_iter()
        .filter_map(|item| normalize_item(item, favicons))
        .take(MAX_RESULTS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(url: Option<&str>) -> RawItem {
        RawItem::new("title", url.map(String::from), "desc")
    }

    #[test]
    fn test_favicon_from_hostname() {
        let favicons = FaviconService::default();
        let item = normalize_item(raw(Some("https://docs.rs/tokio/latest")), &favicons).unwrap();
        assert_eq!(
            item.favicon,
            "https://www.google.com/s2/favicons?sz=16&domain=docs.rs"
        );
        assert_eq!(item.url, "https://docs.rs/tokio/latest");
    }

    #[test]
    fn test_drops_unusable_urls() {
        let favicons = FaviconService::new("https://f/?d=");
        let items = vec![
            raw(None),
            raw(Some("")),
            raw(Some("/relative/path")),
            raw(Some("mailto:someone@example.com")),
            raw(Some("https://example.com/ok")),
        ];

        let results = normalize(items, &favicons);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].favicon, "https://f/?d=example.com");
    }

    #[test]
    fn test_truncates_to_max_results() {
        let favicons = FaviconService::default();
        let items = (0..25).map(|i| {
            RawItem::new(format!("r{i}"), Some(format!("https://site{i}.example/")), "")
        });

        let results = normalize(items, &favicons);
        assert_eq!(results.len(), MAX_RESULTS);
        assert_eq!(results[0].title, "r0");
        assert_eq!(results[9].title, "r9");
    }

    #[test]
    fn test_truncation_counts_only_kept_items() {
        let favicons = FaviconService::default();
        let mut items = vec![raw(None), raw(None)];
        items.extend((0..10).map(|i| raw(Some(&format!("https://e{i}.example/")))));

        assert_eq!(normalize(items, &favicons).len(), 10);
    }
}
