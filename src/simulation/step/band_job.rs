use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use crate::behaviors::{BehaviorRegistry, ScanStats};
use crate::core::LatchGuard;
use crate::spatial::{Band, Grid};

/// Counters summed across band jobs. Read only after the latch releases.
#[derive(Default)]
pub(super) struct BandTotals {
    evaluated: AtomicU32,
    moved: AtomicU32,
}

impl BandTotals {
    fn add(&self, stats: ScanStats) {
        self.evaluated.fetch_add(stats.evaluated, Ordering::Relaxed);
        self.moved.fetch_add(stats.moved, Ordering::Relaxed);
    }

    pub(super) fn snapshot(&self) -> ScanStats {
        ScanStats {
            evaluated: self.evaluated.load(Ordering::Relaxed),
            moved: self.moved.load(Ordering::Relaxed),
        }
    }
}

/// One band's work for one tick.
pub(super) struct BandJob {
    pub(super) grid: Arc<Grid>,
    pub(super) behaviors: Arc<BehaviorRegistry>,
    pub(super) band: Band,
    pub(super) rng_state: u32,
    pub(super) totals: Arc<BandTotals>,
    // Held only for its Drop: counts the tick latch down.
    pub(super) _done: LatchGuard,
}

impl BandJob {
    /// Lock the band's columns, clear their updated markers and scan them.
    ///
    /// The span is a local, so it is released before `self` (and with it the
    /// latch guard) is dropped, on both the normal and the unwinding path.
    pub(super) fn run(mut self) {
        if self.band.is_empty() {
            return;
        }
        let mut span = self.grid.lock_span(self.band.start, self.band.end);
        span.reset_updated();
        let stats = self
            .behaviors
            .scan_columns(&mut span, self.band.start..self.band.end, &mut self.rng_state);
        drop(span);
        self.totals.add(stats);
    }
}
