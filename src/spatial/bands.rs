//! Band partitioning - vertical strips of columns, one per worker
//!
//! Bands are recomputed every tick from the grid width and the fixed band
//! count. The last band absorbs the remainder; bands never overlap.

/// Half-open column range `[start, end)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Band {
    pub start: u32,
    pub end: u32,
}

impl Band {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// Split `[0, width)` into `count` bands of `width / count` columns.
///
/// When `count > width` the leading bands are empty and the last band
/// covers the whole grid.
pub fn partition_columns(width: u32, count: usize) -> Vec<Band> {
    let count = count.max(1);
    let band_width = (width as usize / count) as u32;
    (0..count)
        .map(|k| {
            let start = (k as u32).saturating_mul(band_width).min(width);
            let end = if k + 1 == count {
                width
            } else {
                start.saturating_add(band_width).min(width)
            };
            Band { start, end }
        })
        .collect()
}

/// Internal boundaries: start column of every non-empty band except the first
/// column of the grid. Sorted, no duplicates.
pub fn band_boundaries(bands: &[Band]) -> Vec<u32> {
    let mut out: Vec<u32> = bands
        .iter()
        .filter(|b| !b.is_empty() && b.start > 0)
        .map(|b| b.start)
        .collect();
    out.sort_unstable();
    out.dedup();
    out
}

/// Columns owned by the seam pass: one on each side of every boundary.
pub fn seam_columns(bands: &[Band]) -> Vec<u32> {
    let mut out = Vec::new();
    for b in band_boundaries(bands) {
        out.push(b - 1);
        out.push(b);
    }
    out.sort_unstable();
    out.dedup();
    out
}
