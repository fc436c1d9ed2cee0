//! Settings structures for search-proxy configuration

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main settings structure, mirrors settings.yml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub outgoing: OutgoingSettings,
    pub limiter: LimiterSettings,
    pub search: SearchSettings,
    pub engines: EnginesSettings,
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = serde_yaml::from_str(&content)?;
        Ok(settings)
    }

    /// Merge with process environment variables
    pub fn merge_env(&mut self) {
        self.merge_env_from(|key| std::env::var(key).ok());
    }

    /// Merge values from an arbitrary variable lookup.
    ///
    /// Empty values are ignored so that `GOOGLE_API_KEY=` in a shell does not
    /// count as a configured credential.
    pub fn merge_env_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(val) = var("PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Some(val) = var("SEARCH_PROXY_BIND_ADDRESS") {
            self.server.bind_address = val;
        }
        if let Some(val) = var("SEARCH_PROXY_REQUEST_TIMEOUT") {
            if let Ok(timeout) = val.parse() {
                self.outgoing.request_timeout = timeout;
            }
        }
        if let Some(val) = var("GOOGLE_API_KEY") {
            self.engines.google.api_key = Some(val);
        }
        if let Some(val) = var("GOOGLE_SEARCH_ENGINE_ID") {
            self.engines.google.search_engine_id = Some(val);
        }
        if let Some(val) = var("BING_API_KEY") {
            self.engines.bing.api_key = Some(val);
        }
    }
}

/// Server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Server port
    pub port: u16,
    /// Bind address
    pub bind_address: String,
    /// Directory with the browser UI, served for non-API paths
    pub static_dir: Option<PathBuf>,
    /// Method to determine real IP
    pub real_ip_method: RealIpMethod,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            port: 3000,
            bind_address: "0.0.0.0".to_string(),
            static_dir: Some(PathBuf::from("public")),
            real_ip_method: RealIpMethod::default(),
        }
    }
}

/// Method to determine real client IP
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RealIpMethod {
    /// Use X-Forwarded-For header
    XForwardedFor,
    /// Use X-Real-IP header
    XRealIp,
    /// Use connection IP directly
    #[default]
    Connection,
}

/// Outgoing request settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutgoingSettings {
    /// Per-call upstream timeout in seconds
    pub request_timeout: f64,
    /// Pool max idle connections per host
    pub pool_maxsize: usize,
    /// Verify SSL certificates
    pub verify_ssl: bool,
    /// Proxy settings
    pub proxies: ProxySettings,
}

impl Default for OutgoingSettings {
    fn default() -> Self {
        Self {
            request_timeout: crate::DEFAULT_TIMEOUT as f64,
            pool_maxsize: 20,
            verify_ssl: true,
            proxies: ProxySettings::default(),
        }
    }
}

/// Proxy settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProxySettings {
    pub http: Option<String>,
    pub https: Option<String>,
    pub all: Option<String>,
}

/// Admission control in front of `/api/`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LimiterSettings {
    pub enabled: bool,
    /// Rolling window length in seconds
    pub window_secs: u64,
    /// Requests allowed per client address within one window
    pub max_requests: u32,
}

impl Default for LimiterSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            window_secs: 15 * 60,
            max_requests: 100,
        }
    }
}

/// Search behavior settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Prefix that a result hostname is appended to for its favicon
    pub favicon_service: String,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            favicon_service: "https://www.google.com/s2/favicons?sz=16&domain=".to_string(),
        }
    }
}

/// Per-provider settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EnginesSettings {
    pub google: GoogleSettings,
    pub duckduckgo: DuckDuckGoSettings,
    pub bing: BingSettings,
}

/// Google Custom Search settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GoogleSettings {
    pub base_url: String,
    pub api_key: Option<String>,
    /// Custom Search Engine ID (`cx`)
    pub search_engine_id: Option<String>,
    /// Overrides `outgoing.request_timeout`
    pub timeout: Option<f64>,
}

impl Default for GoogleSettings {
    fn default() -> Self {
        Self {
            base_url: "https://www.googleapis.com/customsearch/v1".to_string(),
            api_key: None,
            search_engine_id: None,
            timeout: None,
        }
    }
}

/// DuckDuckGo Instant Answer settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DuckDuckGoSettings {
    pub base_url: String,
    pub timeout: Option<f64>,
}

impl Default for DuckDuckGoSettings {
    fn default() -> Self {
        Self {
            base_url: "https://api.duckduckgo.com/".to_string(),
            timeout: None,
        }
    }
}

/// Bing Web Search settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BingSettings {
    pub base_url: String,
    pub api_key: Option<String>,
    pub timeout: Option<f64>,
}

impl Default for BingSettings {
    fn default() -> Self {
        Self {
            base_url: "https://api.bing.microsoft.com/v7.0/search".to_string(),
            api_key: None,
            timeout: None,
        }
    }
}
