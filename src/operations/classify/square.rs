use crate::error::Result;
use crate::geometry::Quad;
use crate::math::{within_tolerance, SideCheck, Tolerances};

use super::IsRectangle;

/// Tests whether a quad is a rectangle with equal sides within tolerance.
///
/// With [`SideCheck::ReferenceSide`] every side is compared against side
/// `0 -> 1`; with [`SideCheck::Spread`] the longest and shortest sides are
/// compared with each other.
#[derive(Debug)]
pub struct IsSquare<'a> {
    quad: &'a Quad,
    tolerances: Tolerances,
}

impl<'a> IsSquare<'a> {
    /// Creates a new square test with default tolerances.
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
        if !IsRectangle::new(self.quad)
            .with_tolerances(self.tolerances)
            .execute()?
        {
            return Ok(false);
        }

        let sides = self.quad.side_lengths();
        let tol = self.tolerances.side;
        Ok(match self.tolerances.side_check {
            SideCheck::ReferenceSide => sides.iter().all(|&s| within_tolerance(s, sides[0], tol)),
            SideCheck::Spread => {
                let max = sides.iter().copied().fold(f64::NEG_INFINITY, f64::max);
                let min = sides.iter().copied().fold(f64::INFINITY, f64::min);
                within_tolerance(max, min, tol)
            }
        })
    }
}

/// Returns `true` if `quad` is a square under default tolerances.
#[must_use]
pub fn is_square(quad: &Quad) -> bool {
    matches!(IsSquare::new(quad).execute(), Ok(true))
}
