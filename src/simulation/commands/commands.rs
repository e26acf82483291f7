use crate::core::random::one_in;
use crate::domain::{Cell, Material, PlacementDensity};

use super::WorldCore;

pub(super) fn place(world: &mut WorldCore, material: Material, cx: i32, cy: i32, radius: i32) -> u32 {
    let radius = radius.max(0);
    let density = material.placement_density(radius);

    // Work in i64 and clip the disc's bounding box to the grid up front, so
    // huge radii or far-off centers cost nothing and cannot overflow.
    let (cx, cy, r) = (cx as i64, cy as i64, radius as i64);
    let r2 = r * r;
    let (width, height) = (world.grid.width() as i64, world.grid.height() as i64);
    let (x0, x1) = ((cx - r).max(0), (cx + r).min(width - 1));
    let (y0, y1) = ((cy - r).max(0), (cy + r).min(height - 1));

    let mut span = world.grid.view();
    let mut written = 0u32;
    for x in x0..=x1 {
        for y in y0..=y1 {
            let (dx, dy) = (x - cx, y - cy);
            if dx * dx + dy * dy > r2 {
                continue;
            }
            let hit = match density {
                PlacementDensity::Solid => true,
                PlacementDensity::OneIn(n) => one_in(&mut world.rng_state, n),
            };
            if hit && span.put(x as u32, y as u32, Cell::new(material)) {
                written += 1;
            }
        }
    }
    log::trace!("placed {written} {} cells around ({cx}, {cy}), r={r}", material.name());
    written
}

pub(super) fn set_cell(world: &mut WorldCore, x: u32, y: u32, material: Material) -> bool {
    world.grid.set(x, y, Cell::new(material))
}

pub(super) fn clear(world: &mut WorldCore) {
    world.grid.clear();
    world.tick = 0;
    log::debug!("world cleared");
}
