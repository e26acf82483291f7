use super::perf_stats::PerfStats;
use super::WorldCore;

pub(super) fn set_paused(world: &mut WorldCore, paused: bool) {
    if world.paused != paused {
        log::debug!("simulation {}", if paused { "paused" } else { "resumed" });
    }
    world.paused = paused;
}

pub(super) fn is_paused(world: &WorldCore) -> bool {
    world.paused
}

pub(super) fn enable_perf_metrics(world: &mut WorldCore, enabled: bool) {
    world.perf_enabled = enabled;
    if !enabled {
        world.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(world: &WorldCore) -> PerfStats {
    world.perf_stats.clone()
}
