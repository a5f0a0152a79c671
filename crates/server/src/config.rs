use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::time::Duration;

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server bind address
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Path to the newline-delimited integer dataset served by the engine
    #[serde(default)]
    pub input_file: String,

    /// Tolerance divisor: a query's match window is `value / conformation`
    /// using truncating integer division. Must be positive.
    #[serde(default = "default_conformation")]
    pub conformation: i64,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Log level / env-filter directive
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            port: default_port(),
            input_file: String::new(),
            conformation: default_conformation(),
            timeout_secs: default_timeout_secs(),
            log_level: default_log_level(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables and config files.
    ///
    /// A local `.env` file is applied first, then an optional `nearval`
    /// config file, then `NEARVAL_*` environment variables on top.
    pub fn load() -> anyhow::Result<Self> {
        let _ = dotenvy::dotenv();

        let builder = config::Config::builder()
            .add_source(config::File::with_name("nearval").required(false))
            .add_source(config::Environment::with_prefix("NEARVAL"));

        let config: ServerConfig = builder.build()?.try_deserialize()?;
        config.validate()?;

        Ok(config)
    }

    /// Reject unserviceable configurations before any loading begins.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.input_file.trim().is_empty() {
            anyhow::bail!("input_file must point at the dataset to serve");
        }
        if self.conformation <= 0 {
            anyhow::bail!(
                "conformation must be a positive tolerance divisor, got {}",
                self.conformation
            );
        }
        Ok(())
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr_str = format!("{}:{}", self.bind_addr, self.port);
        Ok(addr_str.parse()?)
    }

    /// Get request timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn default_bind_addr() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_conformation() -> i64 {
    10
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = ServerConfig::default();
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.conformation, 10);
        assert_eq!(cfg.timeout_secs, 30);
        assert!(cfg.input_file.is_empty());
    }

    #[test]
    fn test_socket_addr() {
        let cfg = ServerConfig::default();
        let addr = cfg.socket_addr().unwrap();
        assert_eq!(addr.port(), 8080);
    }

    #[test]
    fn test_validate_requires_input_file() {
        let cfg = ServerConfig::default();
        assert!(cfg.validate().is_err());

        let cfg = ServerConfig {
            input_file: "values.txt".to_string(),
            ..ServerConfig::default()
        };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_non_positive_conformation() {
        for conformation in [0, -10] {
            let cfg = ServerConfig {
                input_file: "values.txt".to_string(),
                conformation,
                ..ServerConfig::default()
            };
            assert!(cfg.validate().is_err());
        }
    }
}
