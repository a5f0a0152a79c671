//! nearval Server - HTTP API for approximate nearest-value lookups
//!
//! This crate wraps the pure [`lookup`] engine in a small HTTP service.
//! The dataset is loaded once at startup; afterwards every request is a
//! read-only point query against the shared engine.
//!
//! # Features
//!
//! - **Configuration**: environment variable and file-based configuration,
//!   with `.env` support for local development
//! - **Middleware**: request ID tracking, structured request logging,
//!   request timeouts
//! - **Error Handling**: typed error responses with stable error codes;
//!   a lookup miss is a 404, a malformed query a 400, never a 500
//! - **Graceful Shutdown**: SIGTERM / Ctrl+C handling for deployments
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use server::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::load()?;
//!     server::start_server(config).await?;
//!     Ok(())
//! }
//! ```
//!
//! # API Endpoints
//!
//! - `GET /` - API information
//! - `GET /health` - Liveness probe
//! - `GET /ready` - Readiness probe with engine statistics
//! - `GET /api/v1/values/{value}` - Exact-or-nearest lookup for an integer

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::start_server;
pub use state::ServerState;
