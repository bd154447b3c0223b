use std::fmt;

use crate::error::Result;
use crate::geometry::Quad;
use crate::math::Tolerances;
use crate::operations::classify::{IsParallelogram, IsRectangle, IsSquare, IsTrapezoid};

/// The quadrilateral class a level asks the player to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeClass {
    /// Any four pairwise distinct points.
    AnyQuadrilateral,
    Rectangle,
    Square,
    Parallelogram,
    Trapezoid,
}

impl ShapeClass {
    /// Returns whether `quad` belongs to this class.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DegenerateEdge` if a shape-constrained class
    /// is tested on a quad with a zero-length edge.
    pub fn matches(self, quad: &Quad, tolerances: &Tolerances) -> Result<bool> {
        let tol = *tolerances;
        match self {
            Self::AnyQuadrilateral => Ok(quad.has_distinct_vertices()),
            Self::Rectangle => IsRectangle::new(quad).with_tolerances(tol).execute(),
            Self::Square => IsSquare::new(quad).with_tolerances(tol).execute(),
            Self::Parallelogram => IsParallelogram::new(quad).with_tolerances(tol).execute(),
            Self::Trapezoid => IsTrapezoid::new(quad).with_tolerances(tol).execute(),
        }
    }
}

impl fmt::Display for ShapeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::AnyQuadrilateral => "quadrilateral",
            Self::Rectangle => "rectangle",
            Self::Square => "square",
            Self::Parallelogram => "parallelogram",
            Self::Trapezoid => "trapezoid",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn any_quadrilateral_needs_distinct_points() {
        let tol = Tolerances::default();
        let ok = Quad::from_xy([(0.0, 0.0), (50.0, 10.0), (20.0, 90.0), (-30.0, 40.0)]).unwrap();
        assert!(ShapeClass::AnyQuadrilateral.matches(&ok, &tol).unwrap());

        let repeated = Quad::from_xy([(0.0, 0.0), (50.0, 10.0), (0.0, 0.0), (-30.0, 40.0)]).unwrap();
        assert!(!ShapeClass::AnyQuadrilateral.matches(&repeated, &tol).unwrap());
    }

    #[test]
    fn square_matches_every_parallelogram_class_but_trapezoid() {
        let tol = Tolerances::default();
        let q = Quad::from_xy([(100.0, 100.0), (300.0, 100.0), (300.0, 300.0), (100.0, 300.0)])
            .unwrap();
        assert!(ShapeClass::AnyQuadrilateral.matches(&q, &tol).unwrap());
        assert!(ShapeClass::Rectangle.matches(&q, &tol).unwrap());
        assert!(ShapeClass::Square.matches(&q, &tol).unwrap());
        assert!(ShapeClass::Parallelogram.matches(&q, &tol).unwrap());
        assert!(!ShapeClass::Trapezoid.matches(&q, &tol).unwrap());
    }

    #[test]
    fn display_names() {
        assert_eq!(ShapeClass::Trapezoid.to_string(), "trapezoid");
        assert_eq!(ShapeClass::AnyQuadrilateral.to_string(), "quadrilateral");
    }
}
