//! Grid - column-major cell storage with one lock per column
//!
//! Columns are the unit of ownership. A band task locks exactly the columns
//! of its band and nothing else, so parallel band updates never alias.
//! The seam pass and the renderer lock the full width.
//!
//! Instead of: one big Vec<Cell> shared by every worker  // aliased &mut
//! We have:    Box<[Mutex<Box<[Cell]>>]>                  // disjoint locks

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::domain::{Cell, Material};

mod accessors;
mod indexing;
mod span;

pub use span::{ColumnSpan, Intent};

type Column = Mutex<Box<[Cell]>>;

pub struct Grid {
    width: u32,
    height: u32,
    columns: Box<[Column]>,
}

impl Grid {
    /// All-Air grid. Dimensions are validated by `SimConfig`; a zero here
    /// just yields an empty grid.
    pub fn new(width: u32, height: u32) -> Self {
        let columns = (0..width)
            .map(|_| Mutex::new(vec![Cell::AIR; height as usize].into_boxed_slice()))
            .collect();
        Self {
            width,
            height,
            columns,
        }
    }

    // Cells are plain Copy data, so a column poisoned by a panicking band
    // task still holds valid cells.
    fn lock_column(&self, x: u32) -> MutexGuard<'_, Box<[Cell]>> {
        self.columns[x as usize]
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Lock columns `[start, end)` (clamped to the grid) for exclusive access.
    ///
    /// Locks are always taken left to right, so spans that overlap can
    /// never deadlock against each other.
    pub fn lock_span(&self, start: u32, end: u32) -> ColumnSpan<'_> {
        let end = end.min(self.width);
        let start = start.min(end);
        let columns = (start..end).map(|x| self.lock_column(x)).collect();
        ColumnSpan::new(start, self.height, columns)
    }

    /// Read/write view over the whole grid.
    pub fn view(&self) -> ColumnSpan<'_> {
        self.lock_span(0, self.width)
    }

    /// Reset every cell to Air.
    pub fn clear(&self) {
        for x in 0..self.width {
            self.lock_column(x).fill(Cell::AIR);
        }
    }

    /// Number of cells holding `material`.
    pub fn count(&self, material: Material) -> usize {
        (0..self.width)
            .map(|x| {
                self.lock_column(x)
                    .iter()
                    .filter(|c| c.material == material)
                    .count()
            })
            .sum()
    }

    /// Number of non-Air cells.
    pub fn particle_count(&self) -> usize {
        (0..self.width)
            .map(|x| self.lock_column(x).iter().filter(|c| !c.is_air()).count())
            .sum()
    }
}
