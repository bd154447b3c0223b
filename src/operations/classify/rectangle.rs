use crate::error::Result;
use crate::geometry::Quad;
use crate::math::{fold_angle, within_tolerance, Tolerances};

/// Tests whether every vertex angle of a quad is a right angle within tolerance.
///
/// Raw vertex angles are folded into `[0, 180]` first, so the reading of
/// 270° that a convex right-angled corner can produce still counts as 90°.
/// Vertex order must follow the outline; a self-intersecting order is
/// classified by its angles alone.
#[derive(Debug)]
pub struct IsRectangle<'a> {
    quad: &'a Quad,
    tolerances: Tolerances,
}

impl<'a> IsRectangle<'a> {
    /// Creates a new rectangle test with default tolerances.
    #[must_use]
    pub fn new(quad: &'a Quad) -> Self {
        Self {
            quad,
            tolerances: Tolerances::default(),
        }
    }

    /// Sets custom tolerances.
    #[must_use]
    pub fn with_tolerances(mut self, tolerances: Tolerances) -> Self {
        self.tolerances = tolerances;
        self
    }

    /// Executes the test.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DegenerateEdge` if any edge has zero length.
    pub fn execute(&self) -> Result<bool> {
        self.quad.check_edges()?;
        Ok(self
            .quad
            .interior_angles()
            .iter()
            .all(|&raw| within_tolerance(fold_angle(raw), 90.0, self.tolerances.angle_deg)))
    }
}

/// Returns `true` if `quad` is a rectangle under default tolerances.
///
/// Degenerate quads are not rectangles.
#[must_use]
pub fn is_rectangle(quad: &Quad) -> bool {
    matches!(IsRectangle::new(quad).execute(), Ok(true))
}
