//! Spatial - grid storage and its partitioning into bands

pub mod bands;
pub mod grid;

pub use bands::{band_boundaries, partition_columns, seam_columns, Band};
pub use grid::{ColumnSpan, Grid, Intent};
