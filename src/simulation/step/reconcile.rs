use crate::behaviors::{BehaviorRegistry, ScanStats};
use crate::spatial::{seam_columns, Band, Grid};

#[derive(Clone, Copy, Debug, Default)]
pub(super) struct SeamReport {
    pub(super) columns: u32,
    pub(super) stats: ScanStats,
}

/// Re-run the rules on the column pair around every internal band boundary.
///
/// During the parallel pass a band cannot see past its own columns, so a
/// particle on a band edge whose only way out crosses the boundary stays put.
/// Here the whole grid is visible. Particles that already moved this tick
/// carry the updated marker and are left alone.
pub(super) fn reconcile_seams(grid: &Grid, behaviors: &BehaviorRegistry, bands: &[Band], rng_state: &mut u32) -> SeamReport {
    let seams = seam_columns(bands);
    if seams.is_empty() {
        return SeamReport::default();
    }

    let mut span = grid.view();
    let stats = behaviors.scan_columns(&mut span, seams.iter().copied(), rng_state);
    SeamReport {
        columns: seams.len() as u32,
        stats,
    }
}
