//! PoisonBehavior - falling poison that eats what it lands on
//!
//! Falls into Air. When the cell below holds anything else (solids, liquids,
//! other poison) both that cell and the poison are removed. Only when there
//! is no row below at all does it try a random diagonal into Air, and it
//! never consumes diagonally.

use super::{Behavior, UpdateContext};
use crate::domain::Material;
use crate::spatial::Intent;

pub struct PoisonBehavior;

impl PoisonBehavior {
    pub fn new() -> Self {
        Self
    }
}

impl Behavior for PoisonBehavior {
    fn update(&self, ctx: &mut UpdateContext) -> Option<Intent> {
        match ctx.material_at(0, 1) {
            Some(Material::Air) => Some(ctx.move_by(0, 1)),
            Some(_) => Some(Intent::Consume {
                from: (ctx.x, ctx.y),
                target: (ctx.x, ctx.y + 1),
            }),
            None => {
                let side = ctx.random_side();
                ctx.first_air(&[(side, 1)])
            }
        }
    }
}
