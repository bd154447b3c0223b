use crate::error::{Result, SessionError};
use crate::geometry::Quad;
use crate::math::{distance, Point2};

/// Radius around a placed point within which a pick selects it, in pixels.
pub const PICK_RADIUS: f64 = 20.0;

/// The points a player has placed for the current attempt, at most four.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sketch {
    points: Vec<Point2>,
}

impl Sketch {
    /// Creates an empty sketch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the placed points in order.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Returns `true` once four points are placed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.points.len() == 4
    }

    /// Appends a point.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::SketchFull` if four points are already placed.
    pub fn add(&mut self, point: Point2) -> Result<()> {
        if self.is_complete() {
            return Err(SessionError::SketchFull.into());
        }
        self.points.push(point);
        Ok(())
    }

    /// Returns the index of the first point strictly within [`PICK_RADIUS`] of `at`.
    #[must_use]
    pub fn nearest(&self, at: &Point2) -> Option<usize> {
        self.points
            .iter()
            .position(|p| distance(p, at) < PICK_RADIUS)
    }

    /// Moves the point at `index` to `to`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoSuchPoint` if `index` is out of range.
    pub fn move_point(&mut self, index: usize, to: Point2) -> Result<()> {
        let point = self
            .points
            .get_mut(index)
            .ok_or(SessionError::NoSuchPoint(index))?;
        *point = to;
        Ok(())
    }

    /// Removes the point picked at `at`, if any, and returns it.
    pub fn erase_near(&mut self, at: &Point2) -> Option<Point2> {
        let index = self.nearest(at)?;
        Some(self.points.remove(index))
    }

    /// Removes every point.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Builds the quad formed by the placed points.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidPointCount` unless exactly four points are placed.
    pub fn quad(&self) -> Result<Quad> {
        Quad::from_points(&self.points)
    }
}
