//! nearval Server - HTTP API for approximate nearest-value lookups
//!
//! This binary loads a sorted integer dataset once at startup and serves
//! exact-or-nearest point queries over HTTP.

use server::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = ServerConfig::load()?;

    // Start server
    server::start_server(config).await?;

    Ok(())
}
