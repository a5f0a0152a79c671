use crate::config::ServerConfig;
use crate::error::ServerResult;
use lookup::{Dataset, LookupEngine, ValueLookup};
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Lookup engine, behind its single capability trait. Immutable after
    /// startup, shared read-only across requests.
    pub engine: Arc<dyn ValueLookup + Send + Sync>,

    /// Number of values loaded at startup, for readiness reporting.
    pub dataset_len: usize,
}

impl ServerState {
    /// Create new server state.
    ///
    /// Loads the dataset from `config.input_file` and builds the engine.
    /// Any failure here (missing or malformed file, empty dataset, bad
    /// divisor) is fatal; no query serving begins.
    pub fn new(config: ServerConfig) -> ServerResult<Self> {
        let dataset = Dataset::from_path(&config.input_file)?;
        let dataset_len = dataset.len();

        let engine: Arc<dyn ValueLookup + Send + Sync> =
            Arc::new(LookupEngine::new(dataset, config.conformation)?);

        Ok(Self {
            config: Arc::new(config),
            engine,
            dataset_len,
        })
    }
}
