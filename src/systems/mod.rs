//! Systems - per-material movement rules

pub mod behaviors;
