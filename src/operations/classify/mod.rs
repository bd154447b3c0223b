mod parallel;
mod parallelogram;
mod rectangle;
mod square;
mod trapezoid;

pub use parallelogram::{is_parallelogram, IsParallelogram};
pub use rectangle::{is_rectangle, IsRectangle};
pub use square::{is_square, IsSquare};
pub use trapezoid::{is_trapezoid, IsTrapezoid};

use crate::error::Result;
use crate::geometry::Quad;
use crate::math::Tolerances;

/// Result of running every classifier on one quad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct Classification {
    pub is_rectangle: bool,
    pub is_square: bool,
    pub is_parallelogram: bool,
    pub is_trapezoid: bool,
}

/// Runs all four classifiers on a quad with shared tolerances.
#[derive(Debug)]
pub struct ClassifyQuad<'a> {
    quad: &'a Quad,
    tolerances: Tolerances,
}

impl<'a> ClassifyQuad<'a> {
    /// Creates a new classification with default tolerances.
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

    /// Executes every classifier.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DegenerateEdge` if any edge has zero length.
    pub fn execute(&self) -> Result<Classification> {
        let tol = self.tolerances;
        let is_rectangle = IsRectangle::new(self.quad).with_tolerances(tol).execute()?;
        let is_square = is_rectangle && IsSquare::new(self.quad).with_tolerances(tol).execute()?;
        let (first, second) = parallel::opposite_pairs_parallel(self.quad, &tol)?;
        Ok(Classification {
            is_rectangle,
            is_square,
            is_parallelogram: first && second,
            is_trapezoid: first ^ second,
        })
    }
}
