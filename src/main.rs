mod avs;
mod config;
mod handlers;
mod models;
mod templates;
mod utils;

#[cfg(test)]
mod testing;

use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::ConsoleConfig;
use handlers::AppState;

#[derive(Parser, Debug)]
#[command(name = "avs-console")]
#[command(about = "Admin console for Aerospike Vector Search", long_about = None)]
struct Args {
    /// Host pro HTTP server
    #[arg(long, env = "AVS_CONSOLE_HOST", default_value = "127.0.0.1")]
    host: String,

    /// Port pro HTTP server
    #[arg(short, long, env = "AVS_CONSOLE_PORT", default_value = "3000")]
    port: u16,

    /// Base URL AVS backendu
    #[arg(long, env = "AVS_API_URL", default_value = config::DEFAULT_API_URL)]
    api_url: String,

    /// Timeout requestů na backend v sekundách
    #[arg(long, env = "AVS_API_TIMEOUT", default_value = "30")]
    timeout_secs: u64,

    /// Jak dlouho platí snapshot nodů a indexů (0 = vždy načíst znovu)
    #[arg(long, env = "AVS_CACHE_TTL", default_value = "5")]
    cache_ttl_secs: u64,

    /// Neotvírat prohlížeč automaticky
    #[arg(long)]
    no_browser: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Inicializuj logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "avs_console=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Parse CLI argumenty
    let args = Args::parse();

    tracing::info!("Starting AVS Console...");

    let config = ConsoleConfig::new(
        &args.api_url,
        args.timeout_secs,
        args.cache_ttl_secs,
        &args.host,
        args.port,
    )?;
    tracing::info!("Using AVS backend at {}", config.api_url);

    // Shared state
    let addr = config.listen_addr.clone();
    let state = Arc::new(AppState::new(config).context("Failed to create AVS client")?);

    let app = handlers::router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Server listening on http://{}", addr);

    // Otevři prohlížeč
    if !args.no_browser {
        let url = format!("http://{}", addr);
        if let Err(e) = utils::open_browser(&url) {
            tracing::warn!("Failed to open browser: {}", e);
            tracing::info!("Please open {} manually", url);
        }
    }

    // Spusť server
    tracing::info!("Server started successfully");
    axum::serve(listener, app).await?;

    Ok(())
}
