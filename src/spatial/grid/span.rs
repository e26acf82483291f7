//! ColumnSpan - a locked, contiguous run of grid columns
//!
//! The span is the only way rules see the grid during a tick. Anything
//! outside its columns (or outside the grid) reads as unavailable, which is
//! how band tasks stay inside their own band and how nothing leaves the grid.
//! All writes made by rules go through `apply`.

use std::sync::MutexGuard;

use crate::domain::{Cell, Material};

/// A state change proposed by a material rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    /// Copy the source cell to `to` (which must be Air) and clear the source.
    Move { from: (u32, u32), to: (u32, u32) },
    /// Clear both `from` and `target`.
    Consume { from: (u32, u32), target: (u32, u32) },
}

pub struct ColumnSpan<'a> {
    start: u32,
    height: u32,
    columns: Vec<MutexGuard<'a, Box<[Cell]>>>,
}

impl<'a> ColumnSpan<'a> {
    pub(super) fn new(start: u32, height: u32, columns: Vec<MutexGuard<'a, Box<[Cell]>>>) -> Self {
        Self {
            start,
            height,
            columns,
        }
    }

    #[inline]
    pub fn start(&self) -> u32 { self.start }

    #[inline]
    pub fn end(&self) -> u32 { self.start + self.columns.len() as u32 }

    #[inline]
    pub fn height(&self) -> u32 { self.height }

    #[inline]
    fn slot(&self, x: i32, y: i32) -> Option<(usize, usize)> {
        if y < 0 || y as u32 >= self.height || x < self.start as i32 {
            return None;
        }
        let col = (x - self.start as i32) as usize;
        if col >= self.columns.len() {
            return None;
        }
        Some((col, y as usize))
    }

    /// Cell at grid coordinate `(x, y)`, or None when the span cannot see it.
    #[inline]
    pub fn cell(&self, x: i32, y: i32) -> Option<&Cell> {
        let (col, row) = self.slot(x, y)?;
        Some(&self.columns[col][row])
    }

    #[inline]
    pub fn material(&self, x: i32, y: i32) -> Option<Material> {
        self.cell(x, y).map(|c| c.material)
    }

    /// True only for a visible Air cell. Unavailable is never Air.
    #[inline]
    pub fn is_air(&self, x: i32, y: i32) -> bool {
        self.material(x, y) == Some(Material::Air)
    }

    #[inline]
    fn cell_mut(&mut self, x: u32, y: u32) -> Option<&mut Cell> {
        let (col, row) = self.slot(x as i32, y as i32)?;
        Some(&mut self.columns[col][row])
    }

    /// Overwrite one cell. Returns false when the span cannot see it.
    pub fn put(&mut self, x: u32, y: u32, cell: Cell) -> bool {
        match self.cell_mut(x, y) {
            Some(slot) => {
                *slot = cell;
                true
            }
            None => false,
        }
    }

    /// Clear the per-tick `updated` marker on every cell in the span.
    pub fn reset_updated(&mut self) {
        for column in self.columns.iter_mut() {
            for cell in column.iter_mut() {
                cell.updated = false;
            }
        }
    }

    /// Apply a rule's intent. The moved particle is marked updated so it is
    /// not evaluated again this tick.
    ///
    /// Returns false (and writes nothing) if any cell involved is outside the
    /// span or a move's destination is not Air.
    pub fn apply(&mut self, intent: Intent) -> bool {
        match intent {
            Intent::Move { from: (fx, fy), to: (tx, ty) } => {
                let Some(&source) = self.cell(fx as i32, fy as i32) else {
                    return false;
                };
                if !self.is_air(tx as i32, ty as i32) {
                    return false;
                }
                let mut moved = source;
                moved.updated = true;
                self.put(tx, ty, moved);
                self.put(fx, fy, Cell::AIR);
                true
            }
            Intent::Consume { from: (fx, fy), target: (tx, ty) } => {
                if self.cell(fx as i32, fy as i32).is_none() || self.cell(tx as i32, ty as i32).is_none() {
                    return false;
                }
                self.put(tx, ty, Cell::AIR);
                self.put(fx, fy, Cell::AIR);
                true
            }
        }
    }

    pub fn count(&self, material: Material) -> usize {
        self.columns
            .iter()
            .map(|c| c.iter().filter(|cell| cell.material == material).count())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::{Cell, Material};
    use crate::spatial::grid::{Grid, Intent};

    #[test]
    fn cells_outside_span_are_unavailable() {
        let grid = Grid::new(6, 4);
        let span = grid.lock_span(2, 4);
        assert!(span.is_air(2, 0));
        assert!(span.is_air(3, 3));
        assert_eq!(span.cell(1, 0), None);
        assert_eq!(span.cell(4, 0), None);
        assert_eq!(span.cell(2, -1), None);
        assert_eq!(span.cell(2, 4), None);
        assert!(!span.is_air(-1, 0));
    }

    #[test]
    fn move_carries_color_and_marks_updated() {
        let grid = Grid::new(3, 3);
        let mut painted = Cell::new(Material::Sand);
        painted.color = 0xDEAD_BEEF;
        grid.set(1, 0, painted);

        let mut span = grid.view();
        assert!(span.apply(Intent::Move { from: (1, 0), to: (1, 1) }));
        let moved = *span.cell(1, 1).expect("in span");
        assert_eq!(moved.material, Material::Sand);
        assert_eq!(moved.color, 0xDEAD_BEEF);
        assert!(moved.is_updated());
        assert!(span.is_air(1, 0));
    }

    #[test]
    fn consume_clears_both_cells() {
        let grid = Grid::new(2, 3);
        grid.set(0, 1, Cell::new(Material::Poison));
        grid.set(0, 2, Cell::new(Material::Stone));
        let mut span = grid.view();
        assert!(span.apply(Intent::Consume { from: (0, 1), target: (0, 2) }));
        assert_eq!(span.count(Material::Air), 6);
    }

    #[test]
    fn apply_refuses_cells_outside_span() {
        let grid = Grid::new(4, 2);
        grid.set(1, 0, Cell::new(Material::Stone));
        let mut span = grid.lock_span(0, 2);
        assert!(!span.apply(Intent::Consume { from: (1, 0), target: (2, 0) }));
        assert_eq!(span.material(1, 0), Some(Material::Stone));
    }

    #[test]
    fn reset_updated_clears_markers() {
        let grid = Grid::new(1, 3);
        grid.set(0, 0, Cell::new(Material::Sand));
        let mut span = grid.view();
        span.apply(Intent::Move { from: (0, 0), to: (0, 1) });
        span.reset_updated();
        assert!(!span.cell(0, 1).expect("cell").is_updated());
    }
}
