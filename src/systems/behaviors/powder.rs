//! PowderBehavior - sand
//!
//! Falls straight down when it can, otherwise slides diagonally down-left,
//! then down-right. Color travels with the grain.

use super::{Behavior, UpdateContext};
use crate::spatial::Intent;

const FALL_ORDER: [(i32, i32); 3] = [(0, 1), (-1, 1), (1, 1)];

pub struct PowderBehavior;

impl PowderBehavior {
    pub fn new() -> Self {
        Self
    }
}

impl Behavior for PowderBehavior {
    fn update(&self, ctx: &mut UpdateContext) -> Option<Intent> {
        ctx.first_air(&FALL_ORDER)
    }
}
