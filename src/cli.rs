//! Command-line interface for the nationality directory server
//!
//! Parses the bind address, optional upstream URL override, and cache TTL,
//! and validates them into a `ServerConfig` for startup.

use std::net::SocketAddr;

use chrono::Duration;
use clap::Parser;
use thiserror::Error;

/// Error types for CLI argument validation
#[derive(Debug, Error)]
pub enum CliError {
    /// The TTL must cover at least one hour
    #[error("Invalid TTL: {0} hours. The cache TTL must be at least 1 hour")]
    InvalidTtl(u64),

    /// The upstream override must be an absolute HTTP(S) URL
    #[error("Invalid source URL: '{0}'. Expected an http:// or https:// URL")]
    InvalidSourceUrl(String),
}

/// Nationality directory service - cached country and demonym lookups
#[derive(Parser, Debug)]
#[command(name = "natiodir")]
#[command(about = "Serve nationality lookups backed by a cached country directory")]
#[command(version)]
pub struct Cli {
    /// Address to bind the HTTP server to
    #[arg(long, default_value = "127.0.0.1:3000", value_name = "ADDR")]
    pub bind: SocketAddr,

    /// Override the upstream directory URL (mainly for testing and dev)
    #[arg(long, value_name = "URL")]
    pub source_url: Option<String>,

    /// Cache time-to-live in hours
    #[arg(long, default_value_t = 24, value_name = "HOURS")]
    pub ttl_hours: u64,
}

/// Validated configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address the HTTP server listens on
    pub bind: SocketAddr,
    /// Upstream directory URL override, if any
    pub source_url: Option<String>,
    /// How long fetched directory data stays fresh
    pub ttl: Duration,
}

impl ServerConfig {
    /// Validates parsed CLI arguments into a server configuration
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        if cli.ttl_hours == 0 {
            return Err(CliError::InvalidTtl(cli.ttl_hours));
        }

        if let Some(url) = &cli.source_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(CliError::InvalidSourceUrl(url.clone()));
            }
        }

        Ok(Self {
            bind: cli.bind,
            source_url: cli.source_url.clone(),
            ttl: Duration::hours(cli.ttl_hours as i64),
        })
    }
}
