use super::*;

// Single-cell accessors. Each call takes one column lock, so these are for
// placement, tests and debugging, not for the per-tick hot path.
impl Grid {
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        if !self.in_bounds(x, y) { return None; }
        Some(self.lock_column(x as u32)[y as usize])
    }

    #[inline]
    pub fn material(&self, x: i32, y: i32) -> Option<Material> {
        self.get(x, y).map(|c| c.material)
    }

    /// Overwrite one cell. Returns false when out of bounds.
    #[inline]
    pub fn set(&self, x: u32, y: u32, cell: Cell) -> bool {
        if x >= self.width || y >= self.height { return false; }
        self.lock_column(x)[y as usize] = cell;
        true
    }
}
