//! Powder Engine - parallel falling-sand simulation
//!
//! Architecture:
//! - core/        - thread pool, completion latch, random streams, errors
//! - domain/      - materials, cells, startup config
//! - spatial/     - column-locked grid and band partitioning
//! - systems/     - per-material movement rules
//! - simulation/  - tick driver, seam pass, placement, render extraction, JS facade

pub mod core;
pub mod domain;
pub mod spatial;
pub mod systems;
pub mod simulation;

pub mod world {
    pub use crate::simulation::*;
}

// Compatibility re-exports
pub use spatial::grid;
pub use domain::materials;
pub use systems::behaviors;

use wasm_bindgen::prelude::*;

// Rayon on wasm needs its worker pool started from JS first.
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"Powder engine initialized".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::{EngineError, ThreadPool};
pub use domain::{Cell, Material, SimConfig};
pub use simulation::{PerfStats, World, WorldCore};

// Export material ids for JS
#[wasm_bindgen]
pub fn mat_air() -> u8 { Material::Air.id() }
#[wasm_bindgen]
pub fn mat_sand() -> u8 { Material::Sand.id() }
#[wasm_bindgen]
pub fn mat_stone() -> u8 { Material::Stone.id() }
#[wasm_bindgen]
pub fn mat_water() -> u8 { Material::Water.id() }
#[wasm_bindgen]
pub fn mat_mud() -> u8 { Material::Mud.id() }
#[wasm_bindgen]
pub fn mat_poison() -> u8 { Material::Poison.id() }
