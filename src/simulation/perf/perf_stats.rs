use wasm_bindgen::prelude::*;

/// Per-tick timings and counters, filled only while perf metrics are on.
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) tick: u64,
    pub(super) tick_ms: f64,
    pub(super) parallel_ms: f64,
    pub(super) reconcile_ms: f64,
    pub(super) bands: u32,
    pub(super) seam_columns: u32,
    pub(super) cells_evaluated: u32,
    pub(super) cells_moved: u32,
    pub(super) seam_moves: u32,
    pub(super) particle_count: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn tick(&self) -> u64 { self.tick }
    #[wasm_bindgen(getter)]
    pub fn tick_ms(&self) -> f64 { self.tick_ms }
    #[wasm_bindgen(getter)]
    pub fn parallel_ms(&self) -> f64 { self.parallel_ms }
    #[wasm_bindgen(getter)]
    pub fn reconcile_ms(&self) -> f64 { self.reconcile_ms }
    #[wasm_bindgen(getter)]
    pub fn bands(&self) -> u32 { self.bands }
    #[wasm_bindgen(getter)]
    pub fn seam_columns(&self) -> u32 { self.seam_columns }
    #[wasm_bindgen(getter)]
    pub fn cells_evaluated(&self) -> u32 { self.cells_evaluated }
    #[wasm_bindgen(getter)]
    pub fn cells_moved(&self) -> u32 { self.cells_moved }
    #[wasm_bindgen(getter)]
    pub fn seam_moves(&self) -> u32 { self.seam_moves }
    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { self.particle_count }
}
