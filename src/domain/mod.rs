//! Domain - what the world is made of and how it is configured

pub mod config;
pub mod materials;

pub use config::{hardware_threads, SimConfig};
pub use materials::{abgr, Cell, Material, PlacementDensity, BG_COLOR, SOLID_BRUSH_RADIUS};
