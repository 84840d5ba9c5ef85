//! catrom - Catmull-Rom curves through 2D points
//!
//! Turns a polyline (a drawn stroke, a trajectory, a list of waypoints) into a
//! densely sampled smooth curve that still passes through every original point.
//! Uniform, centripetal and chordal parameterizations are all the same
//! algorithm with a different `alpha` exponent.

pub mod curves;
pub mod error;
pub mod primitives;

pub use curves::{catmull_rom_curve, catmull_rom_curve_with, CatmullRomOptions};
pub use error::CurveError;
pub use primitives::Point2;
