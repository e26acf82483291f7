use std::sync::Arc;

use crate::core::random::stream_seed;
use crate::core::{Latch, LatchGuard};
use crate::spatial::partition_columns;

use super::band_job::{BandJob, BandTotals};
use super::reconcile::reconcile_seams;
use super::{PerfTimer, WorldCore};

/// Random lane of the seam pass. Band `k` uses lane `k + 1`.
const SEAM_LANE: u32 = 0;

pub(super) fn step(world: &mut WorldCore) {
    if world.paused {
        return;
    }

    let perf_on = world.perf_enabled;
    let step_start = perf_on.then(PerfTimer::start);

    // === PARALLEL PASS: one job per band ===
    let bands = partition_columns(world.grid.width(), world.band_count);
    let latch = Arc::new(Latch::new(bands.len()));
    let totals = Arc::new(BandTotals::default());

    let parallel_start = perf_on.then(PerfTimer::start);
    for (k, band) in bands.iter().copied().enumerate() {
        let job = BandJob {
            grid: Arc::clone(&world.grid),
            behaviors: Arc::clone(&world.behaviors),
            band,
            rng_state: stream_seed(world.config.seed, world.tick, k as u32 + 1),
            totals: Arc::clone(&totals),
            _done: LatchGuard::new(Arc::clone(&latch)),
        };
        world.pool.enqueue(move || job.run());
    }

    // Barrier: nothing reads the grid until every band job has finished.
    latch.wait();
    let parallel_ms = parallel_start.map_or(0.0, |t| t.elapsed_ms());

    // === SEAM PASS: single-threaded ===
    let reconcile_start = perf_on.then(PerfTimer::start);
    let mut seam_rng = stream_seed(world.config.seed, world.tick, SEAM_LANE);
    let seams = reconcile_seams(&world.grid, &world.behaviors, &bands, &mut seam_rng);
    let reconcile_ms = reconcile_start.map_or(0.0, |t| t.elapsed_ms());

    let band_stats = totals.snapshot();
    log::trace!(
        "tick {}: {} bands, {} moved, {} seam columns, {} seam moves",
        world.tick,
        bands.len(),
        band_stats.moved,
        seams.columns,
        seams.stats.moved
    );

    if perf_on {
        let stats = &mut world.perf_stats;
        stats.reset();
        stats.tick = world.tick;
        stats.parallel_ms = parallel_ms;
        stats.reconcile_ms = reconcile_ms;
        stats.bands = bands.len() as u32;
        stats.seam_columns = seams.columns;
        stats.cells_evaluated = band_stats.evaluated.saturating_add(seams.stats.evaluated);
        stats.cells_moved = band_stats.moved.saturating_add(seams.stats.moved);
        stats.seam_moves = seams.stats.moved;
        stats.particle_count = world.grid.particle_count() as u32;
        if let Some(start) = step_start {
            stats.tick_ms = start.elapsed_ms();
        }
    }

    world.tick += 1;
}
