use crate::error::{GeometryError, Result};
use crate::geometry::Quad;
use crate::math::{normalized_cross, within_tolerance, ParallelTest, Tolerances, TOLERANCE};

/// Returns whether edges `a` and `b` of `quad` are parallel under `tol`.
///
/// # Errors
///
/// Returns `GeometryError::DegenerateEdge` if either edge has zero length.
pub(crate) fn edges_parallel(quad: &Quad, a: usize, b: usize, tol: &Tolerances) -> Result<bool> {
    match tol.parallel_test {
        ParallelTest::CrossProduct => {
            let sine = normalized_cross(&quad.edge(a), &quad.edge(b)).ok_or_else(|| {
                let index = if quad.edge(a).norm() < TOLERANCE { a % 4 } else { b % 4 };
                GeometryError::DegenerateEdge { index }
            })?;
            Ok(within_tolerance(sine, 0.0, tol.parallel_sine))
        }
        ParallelTest::Slope => {
            let slopes = quad.edge_slopes();
            let (sa, sb) = (slopes[a % 4], slopes[b % 4]);
            if sa.is_nan() {
                return Err(GeometryError::DegenerateEdge { index: a % 4 }.into());
            }
            if sb.is_nan() {
                return Err(GeometryError::DegenerateEdge { index: b % 4 }.into());
            }
            // +inf and -inf are both vertical.
            Ok(match (sa.is_infinite(), sb.is_infinite()) {
                (true, true) => true,
                (false, false) => within_tolerance(sa, sb, tol.slope),
                _ => false,
            })
        }
    }
}

/// Returns the parallelism of the two opposite edge pairs `(0, 2)` and `(1, 3)`.
///
/// # Errors
///
/// Returns `GeometryError::DegenerateEdge` if any edge has zero length.
pub(crate) fn opposite_pairs_parallel(quad: &Quad, tol: &Tolerances) -> Result<(bool, bool)> {
    quad.check_edges()?;
    Ok((
        edges_parallel(quad, 0, 2, tol)?,
        edges_parallel(quad, 1, 3, tol)?,
    ))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::QuadraError;

    fn quad(coords: [(f64, f64); 4]) -> Quad {
        Quad::from_xy(coords).unwrap()
    }

    #[test]
    fn vertical_edges_are_parallel_in_both_modes() {
        let q = quad([(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
        for tol in [Tolerances::default(), Tolerances::legacy()] {
            assert_eq!(opposite_pairs_parallel(&q, &tol).unwrap(), (true, true));
        }
    }

    #[test]
    fn one_vertical_edge_is_not_parallel_to_a_steep_one() {
        // Edge 1 vertical, edge 3 almost vertical but leaning.
        let q = quad([(0.0, 0.0), (10.0, 0.0), (10.0, 100.0), (-5.0, 100.0)]);
        let (_, legacy) = opposite_pairs_parallel(&q, &Tolerances::legacy()).unwrap();
        assert!(!legacy);
    }

    #[test]
    fn near_vertical_slope_tolerance_is_meaningless() {
        // Both edges lean less than a degree apart, but their slopes differ by a lot.
        let q = quad([(0.0, 0.0), (100.0, 0.0), (101.0, 100.0), (0.0, 100.0)]);
        let tol_cross = Tolerances::default();
        let tol_slope = Tolerances::legacy();
        assert!(edges_parallel(&q, 1, 3, &tol_cross).unwrap());
        assert!(!edges_parallel(&q, 1, 3, &tol_slope).unwrap());
    }

    #[test]
    fn degenerate_edge_is_reported() {
        let q = quad([(0.0, 0.0), (0.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
        let err = opposite_pairs_parallel(&q, &Tolerances::default()).unwrap_err();
        assert_eq!(
            err,
            QuadraError::Geometry(GeometryError::DegenerateEdge { index: 0 })
        );
        assert!(edges_parallel(&q, 0, 2, &Tolerances::legacy()).is_err());
    }
}
