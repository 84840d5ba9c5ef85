//! Curve sampling.

mod catmull_rom;
mod flat;

pub use catmull_rom::{
    catmull_rom_curve, catmull_rom_curve_with, CatmullRomOptions, DEFAULT_SUBDIVISIONS,
    LEGACY_SUBDIVISIONS,
};
pub use flat::{catmull_rom_curve_flat, points_from_flat, points_to_flat};
