use crate::error::Result;
use crate::geometry::Quad;
use crate::math::Tolerances;

use super::parallel::opposite_pairs_parallel;

/// Tests whether both pairs of opposite edges of a quad are parallel.
#[derive(Debug)]
pub struct IsParallelogram<'a> {
    quad: &'a Quad,
    tolerances: Tolerances,
}

impl<'a> IsParallelogram<'a> {
    /// Creates a new parallelogram test with default tolerances.
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
        let (first, second) = opposite_pairs_parallel(self.quad, &self.tolerances)?;
        Ok(first && second)
    }
}

/// Returns `true` if `quad` is a parallelogram under default tolerances.
#[must_use]
pub fn is_parallelogram(quad: &Quad) -> bool {
    matches!(IsParallelogram::new(quad).execute(), Ok(true))
}
