//! World - parallel falling-sand simulation
//!
//! One tick:
//! 1. split the grid width into bands, one per worker
//! 2. enqueue one band job per band on the thread pool
//! 3. wait on the completion latch
//! 4. re-run the rules on the seam columns, single-threaded
//!
//! `step`, `place` and `clear` take `&mut self` and grid reads borrow
//! `&self`, so placement and rendering can never overlap a tick in flight.

use std::sync::Arc;

use crate::behaviors::BehaviorRegistry;
use crate::core::{EngineError, ThreadPool};
use crate::domain::{Material, SimConfig};
use crate::spatial::{band_boundaries, partition_columns, Band, Grid};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/band_job.rs"]
mod band_job;
#[path = "step/reconcile.rs"]
mod reconcile;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "render/render_extract.rs"]
mod render_extract;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use facade::World;
pub use perf_stats::PerfStats;

use perf_timer::PerfTimer;

/// The simulation world
pub struct WorldCore {
    config: SimConfig,
    grid: Arc<Grid>,
    behaviors: Arc<BehaviorRegistry>,
    pool: ThreadPool,
    band_count: usize,

    // State
    tick: u64,
    rng_state: u32,
    paused: bool,

    // Render output, reused between frames
    pixels: Vec<u32>,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl WorldCore {
    /// Create a world from a validated config. Fails on bad dimensions, zero
    /// workers, or when the worker threads cannot be started.
    pub fn new(config: SimConfig) -> Result<Self, EngineError> {
        init::create_world_core(config)
    }

    /// Default config with the given grid size.
    pub fn with_dimensions(width: u32, height: u32) -> Result<Self, EngineError> {
        Self::new(SimConfig::new(width, height))
    }

    pub fn from_config_json(json: &str) -> Result<Self, EngineError> {
        Self::new(SimConfig::from_json(json)?)
    }

    pub fn config(&self) -> &SimConfig { &self.config }

    pub fn width(&self) -> u32 { self.grid.width() }

    pub fn height(&self) -> u32 { self.grid.height() }

    pub fn tick(&self) -> u64 { self.tick }

    /// Number of bands (and worker threads).
    pub fn band_count(&self) -> usize { self.band_count }

    /// Read-only grid access for renderers.
    pub fn grid(&self) -> &Grid { &self.grid }

    /// This tick's band layout.
    pub fn bands(&self) -> Vec<Band> {
        partition_columns(self.grid.width(), self.band_count)
    }

    /// Internal band boundary columns, for debug overlays.
    pub fn band_boundaries(&self) -> Vec<u32> {
        band_boundaries(&self.bands())
    }

    pub fn particle_count(&self) -> usize { self.grid.particle_count() }

    pub fn count_material(&self, material: Material) -> usize { self.grid.count(material) }

    pub fn set_paused(&mut self, paused: bool) {
        settings::set_paused(self, paused);
    }

    pub fn is_paused(&self) -> bool {
        settings::is_paused(self)
    }

    /// Enable or disable per-tick perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Last tick's perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    /// Paint a disc of `material` centered on `(cx, cy)`.
    /// Returns the number of cells written.
    pub fn place(&mut self, material: Material, cx: i32, cy: i32, radius: i32) -> u32 {
        commands::place(self, material, cx, cy, radius)
    }

    /// Overwrite a single cell. False when out of bounds.
    pub fn set_cell(&mut self, x: u32, y: u32, material: Material) -> bool {
        commands::set_cell(self, x, y, material)
    }

    /// Reset every cell to Air and the tick counter to zero.
    pub fn clear(&mut self) {
        commands::clear(self)
    }

    /// Advance the simulation by one tick. Returns once the grid is stable.
    pub fn step(&mut self) {
        step::step(self);
    }

    /// Alias of `step` for frame loops that think in ticks.
    pub fn run_tick(&mut self) {
        self.step();
    }

    /// Fill and return the packed ABGR pixel buffer for the current grid.
    pub fn extract_pixels(&mut self) -> &[u32] {
        render_extract::extract_pixels(self)
    }

    pub fn pixel_width(&self) -> u32 {
        self.grid.width() * self.config.cell_size
    }

    pub fn pixel_height(&self) -> u32 {
        self.grid.height() * self.config.cell_size
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
