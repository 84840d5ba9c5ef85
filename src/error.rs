//! Error types for curve evaluation.

use thiserror::Error;

/// Errors that can occur while sampling a curve.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CurveError {
    /// The number of samples per segment must be at least one.
    #[error("invalid subdivision count: must be at least 1")]
    InvalidSubdivisions,

    /// The parameterization exponent is outside `[0, 1]` (or NaN).
    #[error("invalid alpha {alpha}: must lie in [0, 1]")]
    InvalidAlpha {
        /// The rejected exponent, widened to `f64`.
        alpha: f64,
    },

    /// Two consecutive points produce a zero or non-finite knot interval.
    #[error("coincident or non-finite control points starting at index {index}")]
    CoincidentPoints {
        /// Index of the first point of the offending pair.
        index: usize,
    },

    /// A flat coordinate buffer does not hold whole `(x, y)` pairs.
    #[error("flat coordinate buffer has odd length {len}")]
    OddCoordinateCount {
        /// Length of the rejected buffer.
        len: usize,
    },
}
