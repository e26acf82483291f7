use wasm_bindgen::prelude::*;

use crate::core::EngineError;
use crate::domain::{Material, SimConfig};

use super::perf_stats::PerfStats;
use super::WorldCore;

fn to_js(err: EngineError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// JS-facing wrapper around `WorldCore`. Materials are passed as numeric ids
/// (see `mat_*` exports).
#[wasm_bindgen]
pub struct World {
    core: WorldCore,
}

#[wasm_bindgen]
impl World {
    /// Create a new world with given dimensions and default settings
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Result<World, JsValue> {
        let core = WorldCore::new(SimConfig::new(width, height)).map_err(to_js)?;
        Ok(Self { core })
    }

    /// Create a world from a JSON `SimConfig` (camelCase keys)
    #[wasm_bindgen(js_name = fromConfigJson)]
    pub fn from_config_json(json: &str) -> Result<World, JsValue> {
        let core = WorldCore::from_config_json(json).map_err(to_js)?;
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn tick(&self) -> u64 { self.core.tick() }

    #[wasm_bindgen(getter)]
    pub fn band_count(&self) -> u32 { self.core.band_count() as u32 }

    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { self.core.particle_count() as u32 }

    pub fn count_material(&self, material: u8) -> u32 {
        Material::from_id(material)
            .map(|m| self.core.count_material(m) as u32)
            .unwrap_or(0)
    }

    /// Material id at `(x, y)`, or 255 when out of bounds
    pub fn material_at(&self, x: i32, y: i32) -> u8 {
        self.core.grid().material(x, y).map(Material::id).unwrap_or(u8::MAX)
    }

    /// Paint a disc; unknown material ids write nothing. Returns cells written.
    pub fn place(&mut self, material: u8, cx: i32, cy: i32, radius: i32) -> u32 {
        match Material::from_id(material) {
            Some(m) => self.core.place(m, cx, cy, radius),
            None => 0,
        }
    }

    pub fn set_cell(&mut self, x: u32, y: u32, material: u8) -> bool {
        match Material::from_id(material) {
            Some(m) => self.core.set_cell(x, y, m),
            None => false,
        }
    }

    /// Clear all particles
    pub fn clear(&mut self) {
        self.core.clear();
    }

    /// Step the simulation forward one tick
    pub fn step(&mut self) {
        self.core.step();
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.core.set_paused(paused);
    }

    #[wasm_bindgen(getter)]
    pub fn paused(&self) -> bool { self.core.is_paused() }

    /// Enable or disable per-tick perf metrics
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Last tick perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    /// Internal band boundary columns (debug overlay)
    pub fn band_boundaries(&self) -> Vec<u32> {
        self.core.band_boundaries()
    }

    /// Refresh the pixel buffer and return a pointer into wasm memory.
    /// Length is `pixel_width * pixel_height` u32 values (ABGR).
    pub fn render_pixels(&mut self) -> *const u32 {
        self.core.extract_pixels().as_ptr()
    }

    #[wasm_bindgen(getter)]
    pub fn pixel_width(&self) -> u32 { self.core.pixel_width() }

    #[wasm_bindgen(getter)]
    pub fn pixel_height(&self) -> u32 { self.core.pixel_height() }

    pub fn config_json(&self) -> String {
        self.core.config().to_json()
    }
}

impl World {
    /// Native access to the wrapped core.
    pub fn core(&self) -> &WorldCore {
        &self.core
    }
}
