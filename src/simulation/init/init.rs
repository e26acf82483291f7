use std::sync::Arc;

use crate::behaviors::BehaviorRegistry;
use crate::core::random::stream_seed;
use crate::core::{EngineError, ThreadPool};
use crate::domain::SimConfig;
use crate::spatial::Grid;

use super::perf_stats::PerfStats;
use super::WorldCore;

/// Lane reserved for brush randomness, away from band and seam lanes.
const PLACEMENT_LANE: u32 = u32::MAX;

pub(super) fn create_world_core(config: SimConfig) -> Result<WorldCore, EngineError> {
    config.validate()?;

    let band_count = config.resolved_worker_threads();
    let pool = ThreadPool::new(band_count)?;

    log::info!(
        "world {}x{} (cell {}px), {} bands, seed {}",
        config.width,
        config.height,
        config.cell_size,
        band_count,
        config.seed
    );

    Ok(WorldCore {
        grid: Arc::new(Grid::new(config.width, config.height)),
        behaviors: Arc::new(BehaviorRegistry::new()),
        pool,
        band_count,
        tick: 0,
        rng_state: stream_seed(config.seed, 0, PLACEMENT_LANE),
        paused: false,
        pixels: Vec::new(),
        perf_enabled: false,
        perf_stats: PerfStats::default(),
        config,
    })
}
