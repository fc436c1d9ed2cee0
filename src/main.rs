//! search-proxy server entry point

use anyhow::Result;
use clap::Parser;
use search_proxy::{
    config,
    engines::EngineLoader,
    network::HttpClient,
    web::{create_router, AppState},
};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "search-proxy")]
#[command(about = "Search proxy with pluggable providers and fallback results")]
#[command(version)]
struct Cli {
    /// Path to settings.yml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Server port (overrides settings and PORT)
    #[arg(short, long)]
    port: Option<u16>,

    /// Bind address (overrides settings)
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("search_proxy=info,tower_http=info")),
        )
        .with_target(false)
        .init();

    info!("Starting search-proxy v{}", search_proxy::VERSION);

    // Load configuration
    let mut settings = config::load(cli.config.as_deref())?;
    if let Some(port) = cli.port {
        settings.server.port = port;
    }
    if let Some(bind) = cli.bind {
        settings.server.bind_address = bind;
    }

    // Initialize HTTP client
    let client = HttpClient::with_settings(&settings.outgoing)?;
    info!("HTTP client initialized");

    // Load engines
    let registry = EngineLoader::load(&settings);

    let addr = SocketAddr::new(settings.server.bind_address.parse()?, settings.server.port);

    let state = AppState::new(settings, registry, client);

    if let Some(limiter) = state.limiter.clone() {
        let period = Duration::from_secs(state.settings.limiter.window_secs.max(1));
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            loop {
                interval.tick().await;
                limiter.retain_recent();
            }
        });
    }

    let app = create_router(state);

    info!("Search proxy running on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
