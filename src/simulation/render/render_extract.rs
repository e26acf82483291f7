#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::domain::{Cell, BG_COLOR};
use crate::spatial::ColumnSpan;

use super::WorldCore;

/// Fill the world's pixel buffer: each cell becomes a `cell_size` square,
/// Air shows the background.
///
/// Rows are independent, so they are filled in parallel with Rayon when the
/// feature is enabled. This is separate from the simulation worker pool.
pub(super) fn extract_pixels(world: &mut WorldCore) -> &[u32] {
    let cell_size = world.config.cell_size as usize;
    let pixel_w = world.grid.width() as usize * cell_size;
    let pixel_h = world.grid.height() as usize * cell_size;

    world.pixels.resize(pixel_w * pixel_h, BG_COLOR);
    if pixel_w == 0 {
        return &world.pixels;
    }

    let span = world.grid.view();

    #[cfg(feature = "parallel")]
    {
        world
            .pixels
            .par_chunks_mut(pixel_w)
            .enumerate()
            .for_each(|(py, row)| fill_row(&span, cell_size, py, row));
    }

    #[cfg(not(feature = "parallel"))]
    {
        world
            .pixels
            .chunks_mut(pixel_w)
            .enumerate()
            .for_each(|(py, row)| fill_row(&span, cell_size, py, row));
    }

    drop(span);
    &world.pixels
}

#[inline]
fn pixel_color(cell: Option<&Cell>) -> u32 {
    match cell {
        Some(c) if !c.is_air() => c.color,
        _ => BG_COLOR,
    }
}

fn fill_row(span: &ColumnSpan<'_>, cell_size: usize, py: usize, row: &mut [u32]) {
    let y = (py / cell_size) as i32;
    for (x, block) in row.chunks_mut(cell_size).enumerate() {
        block.fill(pixel_color(span.cell(x as i32, y)));
    }
}
