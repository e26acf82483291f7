use thiserror::Error;

use super::thread_pool::PoolError;

/// Startup failures. Nothing in a running tick can fail.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("grid dimensions must be positive and addressable, got {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("cell size must be at least 1 pixel")]
    InvalidCellSize,

    #[error("worker thread count must be at least 1")]
    NoWorkers,

    #[error("invalid simulation config: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error(transparent)]
    Pool(#[from] PoolError),
}
