pub mod error;
pub mod geometry;
pub mod level;
pub mod math;
pub mod operations;
pub mod session;

pub use error::{QuadraError, Result};
pub use geometry::Quad;
pub use level::{level_at, level_count, Level, LevelCursor, Reward, ShapeClass};
pub use math::{Point2, Tolerances};
pub use operations::{Classification, ClassifyQuad};

/// Checks `points` against the level with the given 1-based id, using
/// default tolerances.
///
/// A quad with a collapsed edge is not classifiable and fails the level.
///
/// # Errors
///
/// Returns `GeometryError::InvalidPointCount` if `points.len() != 4`,
/// `GeometryError::NonFinite` for NaN or infinite coordinates, and
/// `LevelError::OutOfRange` for an unknown level id.
pub fn validate(level_id: u32, points: &[Point2]) -> Result<bool> {
    validate_with(level_id, points, &Tolerances::default())
}

/// Like [`validate`], with custom tolerances.
///
/// # Errors
///
/// Same as [`validate`].
pub fn validate_with(level_id: u32, points: &[Point2], tolerances: &Tolerances) -> Result<bool> {
    let quad = Quad::from_points(points)?;
    let level = level::level_by_id(level_id)?;
    let passed = match level.shape.matches(&quad, tolerances) {
        Ok(passed) => passed,
        Err(e) if e.is_degenerate() => {
            tracing::debug!(level = level_id, error = %e, "shape not classifiable");
            false
        }
        Err(e) => return Err(e),
    };
    tracing::debug!(level = level_id, shape = %level.shape, passed, "validated shape");
    Ok(passed)
}

/// Runs every classifier on `points` with default tolerances.
///
/// # Errors
///
/// Returns `GeometryError::InvalidPointCount` if `points.len() != 4`, and
/// `GeometryError::DegenerateEdge` if any edge has zero length.
pub fn classify(points: &[Point2]) -> Result<Classification> {
    let quad = Quad::from_points(points)?;
    ClassifyQuad::new(&quad).execute()
}
