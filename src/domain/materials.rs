//! Materials and cells
//!
//! Colors are packed ABGR (little-endian bytes [R, G, B, A]) so the pixel
//! buffer can go straight into a canvas ImageData.

use serde::{Deserialize, Serialize};

/// Pack an RGBA color into the engine's ABGR u32.
#[inline]
pub const fn abgr(r: u8, g: u8, b: u8, a: u8) -> u32 {
    ((a as u32) << 24) | ((b as u32) << 16) | ((g as u32) << 8) | (r as u32)
}

/// Background behind Air cells.
pub const BG_COLOR: u32 = abgr(25, 25, 25, 255);

/// Brushes up to this radius always paint every cell of the disc.
pub const SOLID_BRUSH_RADIUS: i32 = 2;

#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Material {
    #[default]
    Air = 0,
    Sand = 1,
    Stone = 2,
    Water = 3,
    Mud = 4,
    Poison = 5,
}

/// How densely a brush fills its disc.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlacementDensity {
    Solid,
    /// Each cell is painted with probability 1/n.
    OneIn(u32),
}

impl Material {
    pub const ALL: [Material; 6] = [
        Material::Air,
        Material::Sand,
        Material::Stone,
        Material::Water,
        Material::Mud,
        Material::Poison,
    ];

    #[inline]
    pub fn id(self) -> u8 {
        self as u8
    }

    pub fn from_id(id: u8) -> Option<Self> {
        Self::ALL.get(id as usize).copied()
    }

    #[inline]
    pub fn is_air(self) -> bool {
        self == Material::Air
    }

    pub fn name(self) -> &'static str {
        match self {
            Material::Air => "air",
            Material::Sand => "sand",
            Material::Stone => "stone",
            Material::Water => "water",
            Material::Mud => "mud",
            Material::Poison => "poison",
        }
    }

    pub fn base_color(self) -> u32 {
        match self {
            Material::Air => 0,
            Material::Sand => abgr(253, 238, 115, 255),
            Material::Stone => abgr(74, 74, 74, 255),
            Material::Water => abgr(15, 94, 156, 255),
            Material::Mud => abgr(130, 73, 23, 255),
            Material::Poison => abgr(0, 255, 8, 255),
        }
    }

    /// Brush density for this material at `radius`.
    ///
    /// Small brushes are always solid. Larger ones scatter granular and
    /// fluid materials into a textured blob; stone and the eraser stay solid.
    pub fn placement_density(self, radius: i32) -> PlacementDensity {
        if radius <= SOLID_BRUSH_RADIUS {
            return PlacementDensity::Solid;
        }
        match self {
            Material::Stone | Material::Air => PlacementDensity::Solid,
            Material::Sand => PlacementDensity::OneIn(40),
            Material::Water | Material::Mud | Material::Poison => PlacementDensity::OneIn(14),
        }
    }
}

/// One grid cell. `updated` marks a particle that already moved this tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    pub material: Material,
    pub color: u32,
    pub(crate) updated: bool,
}

impl Cell {
    pub const AIR: Cell = Cell {
        material: Material::Air,
        color: 0,
        updated: false,
    };

    pub fn new(material: Material) -> Self {
        Self {
            material,
            color: material.base_color(),
            updated: false,
        }
    }

    #[inline]
    pub fn is_air(&self) -> bool {
        self.material.is_air()
    }

    #[inline]
    pub fn is_updated(&self) -> bool {
        self.updated
    }
}
