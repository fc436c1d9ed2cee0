//! HTTP client for calling upstream search APIs

use crate::config::OutgoingSettings;
use crate::engines::{EngineRequest, EngineResponse};
use crate::error::{SearchError, SearchResult};
use reqwest::{Client, Response};
use std::time::Duration;
use tokio::time::timeout;

/// Accept header sent to the JSON search APIs
const ACCEPT_JSON: &str = "application/json,text/javascript,*/*;q=0.01";

/// HTTP client wrapper with search-proxy specific configuration
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    default_timeout: Duration,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> anyhow::Result<Self> {
        Self::with_settings(&OutgoingSettings::default())
    }

    /// Create a new HTTP client with custom settings
    pub fn with_settings(settings: &OutgoingSettings) -> anyhow::Result<Self> {
        let default_timeout = Duration::try_from_secs_f64(settings.request_timeout)
            .map_err(|e| anyhow::anyhow!("invalid outgoing.request_timeout: {}", e))?;

        let mut builder = Client::builder()
            .timeout(default_timeout)
            .pool_max_idle_per_host(settings.pool_maxsize)
            .user_agent(format!("search-proxy/{}", crate::VERSION))
            .gzip(true)
            .brotli(true);

        if !settings.verify_ssl {
            builder = builder.danger_accept_invalid_certs(true);
        }

        if let Some(ref proxy_url) = settings.proxies.all {
            builder = builder.proxy(reqwest::Proxy::all(proxy_url)?);
        } else {
            if let Some(ref http) = settings.proxies.http {
                builder = builder.proxy(reqwest::Proxy::http(http)?);
            }
            if let Some(ref https) = settings.proxies.https {
                builder = builder.proxy(reqwest::Proxy::https(https)?);
            }
        }

        Ok(Self {
            client: builder.build()?,
            default_timeout,
        })
    }

    /// Timeout applied when an engine has no override
    pub fn default_timeout(&self) -> Duration {
        self.default_timeout
    }

    /// Execute an engine request. One attempt, bounded by `limit` end to end
    /// (connect, headers and body).
    pub async fn execute_with_timeout(
        &self,
        request: EngineRequest,
        limit: Duration,
    ) -> SearchResult<EngineResponse> {
        let mut req_builder = self
            .client
            .get(&request.url)
            .timeout(limit)
            .header("Accept", ACCEPT_JSON);

        for (key, value) in &request.headers {
            req_builder = req_builder.header(key, value);
        }

        if !request.params.is_empty() {
            req_builder = req_builder.query(&request.params);
        }

        let call = async move {
            let response = req_builder.send().await?;
            let parsed = Self::parse_response(response).await?;
            Ok::<_, reqwest::Error>(parsed)
        };

        match timeout(limit, call).await {
            Ok(result) => result.map_err(|e| classify(e, limit)),
            Err(_) => Err(timed_out(limit)),
        }
    }

    async fn parse_response(response: Response) -> Result<EngineResponse, reqwest::Error> {
        let status = response.status().as_u16();
        let text = response.text().await?;

        Ok(EngineResponse { status, text })
    }
}

fn timed_out(limit: Duration) -> SearchError {
    SearchError::Timeout {
        timeout_ms: limit.as_millis() as u64,
    }
}

fn classify(error: reqwest::Error, limit: Duration) -> SearchError {
    if error.is_timeout() {
        timed_out(limit)
    } else {
        error.into()
    }
}
