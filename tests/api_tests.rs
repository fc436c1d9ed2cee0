//! HTTP surface tests driving the router directly

use axum::{
    body::Body,
    http::{HeaderMap, Request, StatusCode},
    Router,
};
use search_proxy::config::Settings;
use search_proxy::engines::{Engine, EngineLoader, EngineRegistry, EngineRequest, EngineResponse};
use search_proxy::network::HttpClient;
use search_proxy::results::{fallback, FaviconService, RawItem, MAX_RESULTS};
use search_proxy::SearchResult;
use std::sync::Arc;
use search_proxy::web::{create_router, AppState, RATE_LIMITED_MESSAGE, SEARCH_SOURCE_HEADER};
use serde_json::{json, Value};
use tokio_test::assert_ok;
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn settings() -> Settings {
    let mut settings = Settings::default();
    settings.server.static_dir = None;
    settings.limiter.enabled = false;
    settings
}

fn app(settings: Settings) -> Router {
    let client = HttpClient::with_settings(&settings.outgoing).unwrap();
    let registry = EngineLoader::load(&settings);
    create_router(AppState::new(settings, registry, client))
}

async fn get(app: Router, uri: &str) -> (StatusCode, HeaderMap, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = assert_ok!(app.oneshot(request).await);

    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, headers, serde_json::from_slice(&bytes).unwrap())
}

fn with_google_mock(server: &MockServer) -> Settings {
    let mut settings = settings();
    settings.engines.google.base_url = format!("{}/customsearch/v1", server.uri());
    settings.engines.google.api_key = Some("key".into());
    settings.engines.google.search_engine_id = Some("cx".into());
    settings
}

fn expected_fallback(engine: &str, query: &str) -> Value {
    serde_json::to_value(fallback::generate(engine, query, &FaviconService::default())).unwrap()
}

#[tokio::test]
async fn test_unconfigured_default_engine_serves_fallback() {
    let (status, headers, body) = get(app(settings()), "/api/search?q=rust%20programming").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["engine"], "google");
    assert_eq!(body["query"], "rust programming");
    assert_eq!(body, expected_fallback("google", "rust programming"));
    assert_eq!(headers[SEARCH_SOURCE_HEADER], "fallback");

    let results = body["results"].as_array().unwrap();
    assert_eq!(results.len(), 3);
    for item in results {
        assert!(item["title"].as_str().unwrap().contains("rust programming"));
        assert!(item["description"].as_str().unwrap().contains("rust programming"));
    }
}

#[tokio::test]
async fn test_empty_query_is_rejected_without_upstream_calls() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
        .expect(0)
        .mount(&server)
        .await;

    for uri in ["/api/search?q=", "/api/search", "/api/search?q=%20%20%09", "/api/search?engine=bing"] {
        let (status, _, body) = get(app(with_google_mock(&server)), uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body, json!({ "error": "Query parameter required" }));
    }
}

#[tokio::test]
async fn test_unknown_engine_behaves_like_google() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/customsearch/v1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{"title": "Serde", "link": "https://serde.rs/", "snippet": "Serialization"}]
        })))
        .expect(2)
        .mount(&server)
        .await;

    let (_, _, google) = get(app(with_google_mock(&server)), "/api/search?q=serde&engine=google").await;
    let (status, headers, unknown) =
        get(app(with_google_mock(&server)), "/api/search?q=serde&engine=altavista").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[SEARCH_SOURCE_HEADER], "live");
    assert_eq!(google, unknown);
    assert_eq!(unknown["results"][0]["url"], "https://serde.rs/");
}

#[tokio::test]
async fn test_engine_selector_is_case_insensitive() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"RelatedTopics": []})))
        .expect(1)
        .mount(&server)
        .await;

    let mut ddg = settings();
    ddg.engines.duckduckgo.base_url = format!("{}/", server.uri());

    let (status, _, body) = get(app(ddg), "/api/search?q=x&engine=DuckDuckGo").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"engine": "duckduckgo", "query": "x", "results": []}));

    let (_, _, body) = get(app(settings()), "/api/search?q=x&engine=BING").await;
    assert_eq!(body, expected_fallback("bing", "x"));
}

#[tokio::test]
async fn test_upstream_500_serves_tagged_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v7.0/search"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let mut settings = settings();
    settings.engines.bing.base_url = format!("{}/v7.0/search", server.uri());
    settings.engines.bing.api_key = Some("secret".into());

    let (status, headers, body) = get(app(settings), "/api/search?q=x&engine=bing").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[SEARCH_SOURCE_HEADER], "fallback");
    assert_eq!(body, expected_fallback("bing", "x"));
}

#[tokio::test]
async fn test_live_results_are_capped_and_valid() {
    let server = MockServer::start().await;
    let items: Vec<Value> = (0..14)
        .map(|i| json!({"title": format!("t{i}"), "link": format!("https://h{i}.example/p?x=1"), "snippet": "s"}))
        .chain([json!({"title": "broken", "link": "not a url", "snippet": "s"})])
        .collect();

    Mock::given(method("GET"))
        .and(path("/customsearch/v1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": items })))
        .mount(&server)
        .await;

    let (status, _, body) = get(app(with_google_mock(&server)), "/api/search?q=many").await;
    assert_eq!(status, StatusCode::OK);

    let results = body["results"].as_array().unwrap();
    assert_eq!(results.len(), MAX_RESULTS);
    for item in results {
        let url = url::Url::parse(item["url"].as_str().unwrap()).unwrap();
        assert_eq!(
            item["favicon"],
            format!(
                "https://www.google.com/s2/favicons?sz=16&domain={}",
                url.host_str().unwrap()
            )
        );
    }
}

#[tokio::test]
async fn test_zero_live_results_are_returned_as_is() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let (status, headers, body) = get(app(with_google_mock(&server)), "/api/search?q=nothing").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[SEARCH_SOURCE_HEADER], "live");
    assert_eq!(body, json!({"engine": "google", "query": "nothing", "results": []}));
}

#[tokio::test]
async fn test_health() {
    let (status, _, body) = get(app(settings()), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    let timestamp = body["timestamp"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
    assert!(timestamp.ends_with('Z'));
}

#[tokio::test]
async fn test_rate_limit_applies_to_api_only() {
    let mut settings = settings();
    settings.limiter.enabled = true;
    settings.limiter.max_requests = 2;
    let app = app(settings);

    for _ in 0..2 {
        let (status, _, _) = get(app.clone(), "/api/search?q=x&engine=bing").await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, _, body) = get(app.clone(), "/api/search?q=x&engine=bing").await;
    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(body, json!({ "error": RATE_LIMITED_MESSAGE }));

    let (status, _, _) = get(app, "/health").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_security_headers() {
    let (_, headers, _) = get(app(settings()), "/health").await;

    assert_eq!(headers["x-content-type-options"], "nosniff");
    assert_eq!(headers["x-frame-options"], "SAMEORIGIN");
}

#[tokio::test]
async fn test_repeated_query_parameter_uses_first_value() {
    let (status, headers, body) = get(app(settings()), "/api/search?q=a&q=b&engine=bing&engine=google").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[SEARCH_SOURCE_HEADER], "fallback");
    assert_eq!(body, expected_fallback("bing", "a"));
}

struct Exploding;

impl Engine for Exploding {
    fn name(&self) -> &str {
        "google"
    }

    fn request(&self, _query: &str) -> SearchResult<EngineRequest> {
        panic!("adapter bug")
    }

    fn response(&self, _response: EngineResponse) -> SearchResult<Vec<RawItem>> {
        Ok(Vec::new())
    }
}

#[tokio::test]
async fn test_adapter_panic_is_search_failed() {
    let settings = settings();
    let client = HttpClient::with_settings(&settings.outgoing).unwrap();
    let mut registry = EngineRegistry::new();
    registry.register(Arc::new(Exploding));
    let app = create_router(AppState::new(settings, registry, client));

    let (status, headers, body) = get(app, "/api/search?q=rust").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(headers.get(SEARCH_SOURCE_HEADER).is_none());
    assert_eq!(body, json!({ "error": "Search failed", "details": "adapter bug" }));
}
