use thiserror::Error;

/// Top-level error type for the Quadra classification engine.
#[derive(Debug, Error, PartialEq)]
pub enum QuadraError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Level(#[from] LevelError),

    #[error(transparent)]
    Session(#[from] SessionError),
}

/// Errors related to point sequences and their derived quantities.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("a quadrilateral needs exactly 4 points, got {count}")]
    InvalidPointCount { count: usize },

    #[error("edge {index} has zero length")]
    DegenerateEdge { index: usize },

    #[error("point {index} has a non-finite coordinate")]
    NonFinite { index: usize },
}

/// Errors related to the level catalog and progression.
#[derive(Debug, Error, PartialEq)]
pub enum LevelError {
    #[error("level {index} is out of range (catalog has {count} levels)")]
    OutOfRange { index: usize, count: usize },

    #[error("all levels are complete")]
    AllLevelsComplete,
}

/// Errors related to an in-progress game session.
#[derive(Debug, Error, PartialEq)]
pub enum SessionError {
    #[error("sketch already has 4 points")]
    SketchFull,

    #[error("no point at index {0}")]
    NoSuchPoint(usize),

    #[error("current level has not been cleared")]
    LevelNotCleared,

    #[error("game over")]
    GameOver,
}

/// Convenience type alias for results using [`QuadraError`].
pub type Result<T> = std::result::Result<T, QuadraError>;

impl QuadraError {
    /// Returns `true` if the error means the shape cannot be classified yet
    /// (as opposed to a malformed request).
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        matches!(
            self,
            Self::Geometry(GeometryError::DegenerateEdge { .. } | GeometryError::NonFinite { .. })
        )
    }
}
