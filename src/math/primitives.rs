use super::{Point2, Vector2, TOLERANCE};

/// Returns the Euclidean distance between `a` and `b`.
#[must_use]
pub fn distance(a: &Point2, b: &Point2) -> f64 {
    nalgebra::distance(a, b)
}

/// Returns the angle at `curr` between the directions to `next` and `prev`, in degrees.
///
/// This is the magnitude of the difference of the two polar angles, so it
/// lies in `[0, 360)` and reads e.g. 270 rather than 90 depending on which
/// side of the negative x-axis the two directions fall. Use [`fold_angle`]
/// to get the geometric angle in `[0, 180]`.
#[must_use]
pub fn angle_at_vertex(prev: &Point2, curr: &Point2, next: &Point2) -> f64 {
    let to_next = next - curr;
    let to_prev = prev - curr;
    let diff = to_next.y.atan2(to_next.x) - to_prev.y.atan2(to_prev.x);
    diff.abs().to_degrees()
}

/// Folds a raw vertex angle from [`angle_at_vertex`] into `[0, 180]`.
#[must_use]
pub fn fold_angle(raw_deg: f64) -> f64 {
    let a = raw_deg.rem_euclid(360.0);
    if a > 180.0 {
        360.0 - a
    } else {
        a
    }
}

/// Returns the rise over run of the edge `curr -> next`.
///
/// Vertical edges give an infinite slope (signed by the direction of travel),
/// a zero-length edge gives NaN.
#[must_use]
pub fn edge_slope(curr: &Point2, next: &Point2) -> f64 {
    (next.y - curr.y) / (next.x - curr.x)
}

/// Returns `|sin θ|` for the angle θ between `d1` and `d2`.
///
/// Returns `None` if either vector has zero length.
#[must_use]
pub fn normalized_cross(d1: &Vector2, d2: &Vector2) -> Option<f64> {
    let n1 = d1.norm();
    let n2 = d2.norm();
    if n1 < TOLERANCE || n2 < TOLERANCE {
        return None;
    }
    Some(d1.perp(d2).abs() / (n1 * n2))
}

/// Returns `true` if `value` is within `tolerance` of `target`, boundary included.
///
/// The boundary carries a slack of [`TOLERANCE`] relative to the magnitudes
/// involved, so a value that lands on it after rounding still passes.
#[must_use]
pub fn within_tolerance(value: f64, target: f64, tolerance: f64) -> bool {
    let slack = TOLERANCE * target.abs().max(tolerance.abs()).max(1.0);
    (value - target).abs() <= tolerance + slack
}
