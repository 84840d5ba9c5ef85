//! Interleaved coordinate buffers.
//!
//! Some callers keep polylines as flat `[x0, y0, x1, y1, ...]` arrays (vertex
//! buffers, JSON coordinate lists). These helpers convert at the boundary so
//! the spline code only ever sees [`Point2`] values.

use super::catmull_rom::catmull_rom_curve;
use crate::error::CurveError;
use crate::primitives::Point2;
use num_traits::Float;

/// Converts a flat coordinate buffer into points.
///
/// # Errors
///
/// Returns [`CurveError::OddCoordinateCount`] if `coords` has odd length.
pub fn points_from_flat<F: Float>(coords: &[F]) -> Result<Vec<Point2<F>>, CurveError> {
    if coords.len() % 2 != 0 {
        return Err(CurveError::OddCoordinateCount { len: coords.len() });
    }

    Ok(coords
        .chunks_exact(2)
        .map(|xy| Point2::new(xy[0], xy[1]))
        .collect())
}

/// Flattens points into an interleaved coordinate buffer.
pub fn points_to_flat<F: Float>(points: &[Point2<F>]) -> Vec<F> {
    points.iter().flat_map(|p| [p.x, p.y]).collect()
}

/// Samples the Catmull-Rom spline through a flat coordinate buffer.
///
/// Equivalent to [`catmull_rom_curve`] with the input and output flattened.
///
/// # Example
///
/// ```
/// use catrom::curves::catmull_rom_curve_flat;
///
/// let coords = [0.0, 0.0, 1.0, 2.0, 3.0, 2.0, 4.0, 0.0];
/// let curve = catmull_rom_curve_flat(&coords, 4, 0.5).unwrap();
///
/// assert_eq!(curve.len(), 2 * 16);
/// assert_eq!(&curve[curve.len() - 2..], &[4.0, 0.0]);
/// ```
pub fn catmull_rom_curve_flat<F: Float>(
    coords: &[F],
    subdivisions: usize,
    alpha: F,
) -> Result<Vec<F>, CurveError> {
    let points = points_from_flat(coords)?;
    let curve = catmull_rom_curve(&points, subdivisions, alpha)?;
    Ok(points_to_flat(&curve))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_from_flat() {
        let points = points_from_flat(&[1.0_f64, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(points, vec![Point2::new(1.0, 2.0), Point2::new(3.0, 4.0)]);

        let empty: Vec<Point2<f64>> = points_from_flat(&[]).unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_odd_length() {
        assert_eq!(
            points_from_flat(&[1.0_f64, 2.0, 3.0]),
            Err(CurveError::OddCoordinateCount { len: 3 })
        );
        assert_eq!(
            catmull_rom_curve_flat(&[1.0_f64], 10, 0.0),
            Err(CurveError::OddCoordinateCount { len: 1 })
        );
    }

    #[test]
    fn test_to_flat() {
        let points = vec![Point2::new(1.0_f32, -1.0), Point2::new(0.5, 2.5)];
        assert_eq!(points_to_flat(&points), vec![1.0, -1.0, 0.5, 2.5]);
    }

    #[test]
    fn test_flat_matches_structured() {
        let coords = [0.0_f64, 0.0, 1.0, 1.0, 1.3, 0.1, 4.0, 2.0, 4.5, -1.0];
        let flat = catmull_rom_curve_flat(&coords, 6, 0.5).unwrap();

        let points = points_from_flat(&coords).unwrap();
        let structured = catmull_rom_curve(&points, 6, 0.5).unwrap();

        assert_eq!(flat.len(), structured.len() * 2);
        for (xy, p) in flat.chunks_exact(2).zip(&structured) {
            assert_relative_eq!(xy[0], p.x);
            assert_relative_eq!(xy[1], p.y);
        }
    }

    #[test]
    fn test_flat_errors_propagate() {
        let coords = [0.0_f64, 0.0, 1.0, 0.0, 2.0, 0.0, 3.0, 0.0];
        assert_eq!(
            catmull_rom_curve_flat(&coords, 0, 0.5),
            Err(CurveError::InvalidSubdivisions)
        );
    }
}
