//! Behaviors - per-material movement rules
//!
//! Rules never write. Each one looks at the locked span around `(x, y)` and
//! returns at most one `Intent`; `scan_columns` applies it through the span's
//! single write path.
//!
//! Scan order is column by column, rows H-2 up to 0. A particle moved this
//! tick is marked updated and is skipped if the scan reaches it again.

mod liquid;
mod poison;
mod powder;

pub use liquid::LiquidBehavior;
pub use poison::PoisonBehavior;
pub use powder::PowderBehavior;

use crate::core::random::coin;
use crate::domain::Material;
use crate::spatial::{ColumnSpan, Intent};

/// Everything a rule may look at for one evaluation.
pub struct UpdateContext<'a, 'g> {
    pub view: &'a ColumnSpan<'g>,
    pub x: u32,
    pub y: u32,
    pub rng: &'a mut u32,
}

impl<'a, 'g> UpdateContext<'a, 'g> {
    #[inline]
    pub fn is_air_at(&self, dx: i32, dy: i32) -> bool {
        self.view.is_air(self.x as i32 + dx, self.y as i32 + dy)
    }

    #[inline]
    pub fn material_at(&self, dx: i32, dy: i32) -> Option<Material> {
        self.view.material(self.x as i32 + dx, self.y as i32 + dy)
    }

    /// Move intent to the offset `(dx, dy)`. Caller has checked it is Air.
    #[inline]
    pub fn move_by(&self, dx: i32, dy: i32) -> Intent {
        Intent::Move {
            from: (self.x, self.y),
            to: ((self.x as i32 + dx) as u32, (self.y as i32 + dy) as u32),
        }
    }

    /// Move to the first Air offset in `candidates`.
    #[inline]
    pub fn first_air(&self, candidates: &[(i32, i32)]) -> Option<Intent> {
        candidates
            .iter()
            .find(|&&(dx, dy)| self.is_air_at(dx, dy))
            .map(|&(dx, dy)| self.move_by(dx, dy))
    }

    /// Random lateral direction: -1 (left) or 1 (right).
    #[inline]
    pub fn random_side(&mut self) -> i32 {
        if coin(self.rng) { -1 } else { 1 }
    }
}

/// Behavior trait - each moving material implements this
pub trait Behavior {
    fn update(&self, ctx: &mut UpdateContext) -> Option<Intent>;
}

/// Per-scan counters, summed into the tick's perf stats.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScanStats {
    pub evaluated: u32,
    pub moved: u32,
}

impl ScanStats {
    pub fn merge(&mut self, other: ScanStats) {
        self.evaluated = self.evaluated.saturating_add(other.evaluated);
        self.moved = self.moved.saturating_add(other.moved);
    }
}

/// Behavior registry - dispatch by material
pub struct BehaviorRegistry {
    powder: PowderBehavior,
    liquid: LiquidBehavior,
    poison: PoisonBehavior,
}

impl BehaviorRegistry {
    pub fn new() -> Self {
        Self {
            powder: PowderBehavior::new(),
            liquid: LiquidBehavior::new(),
            poison: PoisonBehavior::new(),
        }
    }

    /// Dispatch to the rule for `material`. Stone and Mud are inert, Air is
    /// never evaluated.
    pub fn update(&self, material: Material, ctx: &mut UpdateContext) -> Option<Intent> {
        match material {
            Material::Sand => self.powder.update(ctx),
            Material::Water => self.liquid.update(ctx),
            Material::Poison => self.poison.update(ctx),
            Material::Stone | Material::Mud | Material::Air => None,
        }
    }

    /// Run one bottom-up pass over `columns` of `span`.
    ///
    /// Columns outside the span are skipped; neighbors outside it read as
    /// unavailable.
    pub fn scan_columns<I>(&self, span: &mut ColumnSpan<'_>, columns: I, rng: &mut u32) -> ScanStats
    where
        I: IntoIterator<Item = u32>,
    {
        let mut stats = ScanStats::default();
        let height = span.height();
        if height < 2 {
            return stats;
        }

        for x in columns {
            for y in (0..height - 1).rev() {
                let Some(&cell) = span.cell(x as i32, y as i32) else {
                    break;
                };
                if cell.is_air() || cell.is_updated() {
                    continue;
                }

                stats.evaluated += 1;
                let intent = {
                    let mut ctx = UpdateContext { view: &*span, x, y, rng: &mut *rng };
                    self.update(cell.material, &mut ctx)
                };
                if let Some(intent) = intent {
                    if span.apply(intent) {
                        stats.moved += 1;
                    }
                }
            }
        }
        stats
    }
}

impl Default for BehaviorRegistry {
    fn default() -> Self {
        Self::new()
    }
}
