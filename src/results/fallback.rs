//! Synthetic results served when no provider data is available

use super::normalizer::{normalize_item, FaviconService};
use super::types::{RawItem, SearchResponse};
use urlencoding::encode;

/// Build the fixed three-item fallback response for `query`.
///
/// Pure and deterministic: identical inputs give identical output.
pub fn generate(engine: &str, query: &str, favicons: &FaviconService) -> SearchResponse {
    let encoded = encode(query);
    let article = query.split_whitespace().collect::<Vec<_>>().join("_");

    let items = [
        RawItem::new(
            format!("{query} - Wikipedia"),
            Some(format!("https://en.wikipedia.org/wiki/{}", encode(&article))),
            format!("Learn more about {query} on Wikipedia."),
        ),
        RawItem::new(
            format!("{query} - Stack Overflow"),
            Some(format!("https://stackoverflow.com/search?q={encoded}")),
            format!("Find {query} discussions and solutions on Stack Overflow."),
        ),
        RawItem::new(
            format!("{query} - GitHub"),
            Some(format!("https://github.com/search?q={encoded}")),
            format!("Explore {query} repositories on GitHub."),
        ),
    ];

    let results = items
        .into_iter()
        .filter_map(|item| normalize_item(item, favicons))
        .collect();

    SearchResponse::new(engine, query, results)
}
