//! Nationality directory server binary
//!
//! Parses CLI arguments, wires the REST Countries fetcher into the directory
//! cache, and serves the HTTP API until shutdown.

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use natiodir::cache::DirectoryCache;
use natiodir::cli::{Cli, ServerConfig};
use natiodir::directory::RestCountriesClient;
use natiodir::http;

/// Initializes the tracing subscriber, honoring `RUST_LOG` when set
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "natiodir=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let cli = Cli::parse();
    let config = ServerConfig::from_cli(&cli)?;

    let fetcher = match &config.source_url {
        Some(url) => RestCountriesClient::with_url(url.clone()),
        None => RestCountriesClient::new(),
    };
    let cache = Arc::new(DirectoryCache::with_ttl(Arc::new(fetcher), config.ttl));

    let app = http::router(cache);
    let listener = tokio::net::TcpListener::bind(config.bind).await?;

    tracing::info!(addr = %config.bind, "nationality directory listening");
    axum::serve(listener, app).await?;

    Ok(())
}
