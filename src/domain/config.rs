//! Startup configuration
//!
//! Everything here is fixed for the lifetime of a world. JSON uses camelCase
//! keys, same as the content bundles the JS side already ships.

#[cfg(not(target_arch = "wasm32"))]
use std::num::NonZeroUsize;
#[cfg(not(target_arch = "wasm32"))]
use std::thread;

use serde::{Deserialize, Serialize};

use crate::core::EngineError;

/// Host hardware concurrency, at least 1.
#[cfg(not(target_arch = "wasm32"))]
pub fn hardware_threads() -> usize {
    thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1)
}

/// In the browser, the size of the rayon pool started by `init_thread_pool`.
#[cfg(all(target_arch = "wasm32", feature = "parallel"))]
pub fn hardware_threads() -> usize {
    rayon::current_num_threads().max(1)
}

#[cfg(all(target_arch = "wasm32", not(feature = "parallel")))]
pub fn hardware_threads() -> usize {
    1
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimConfig {
    /// Grid columns
    pub width: u32,
    /// Grid rows
    pub height: u32,
    /// Pixels per cell edge in the extracted pixel buffer
    pub cell_size: u32,
    /// Worker count (= band count). `None` uses hardware concurrency.
    pub worker_threads: Option<usize>,
    pub seed: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        // 1280x720 window at 2px per cell
        Self {
            width: 640,
            height: 360,
            cell_size: 2,
            worker_threads: None,
            seed: 12345,
        }
    }
}

impl SimConfig {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn with_worker_threads(mut self, workers: usize) -> Self {
        self.worker_threads = Some(workers);
        self
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_cell_size(mut self, cell_size: u32) -> Self {
        self.cell_size = cell_size;
        self
    }

    /// Parse and validate a JSON config. Missing keys take defaults.
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        let bad_dims = EngineError::InvalidDimensions {
            width: self.width,
            height: self.height,
        };
        if self.width == 0 || self.height == 0 {
            return Err(bad_dims);
        }
        if self.cell_size == 0 {
            return Err(EngineError::InvalidCellSize);
        }
        // Pixel buffer must be addressable as usize and by u32 pixel coords.
        let pixel_w = self.width.checked_mul(self.cell_size);
        let pixel_h = self.height.checked_mul(self.cell_size);
        let pixels = match (pixel_w, pixel_h) {
            (Some(w), Some(h)) => (w as usize).checked_mul(h as usize),
            _ => None,
        };
        if pixels.is_none() {
            return Err(bad_dims);
        }
        if self.worker_threads == Some(0) {
            return Err(EngineError::NoWorkers);
        }
        Ok(())
    }

    /// Worker count actually used: configured value or hardware concurrency.
    pub fn resolved_worker_threads(&self) -> usize {
        self.worker_threads.unwrap_or_else(hardware_threads).max(1)
    }
}
