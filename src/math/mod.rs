pub mod primitives;

pub use primitives::{
    angle_at_vertex, distance, edge_slope, fold_angle, normalized_cross, within_tolerance,
};

/// 2D point type, in canvas pixel space.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for degeneracy checks.
pub const TOLERANCE: f64 = 1e-10;

/// Allowed deviation of an interior angle from 90 degrees.
pub const ANGLE_TOLERANCE_DEG: f64 = 10.0;

/// Allowed deviation between side lengths, in pixels.
pub const SIDE_TOLERANCE: f64 = 10.0;

/// Allowed difference between two edge slopes (rise over run).
pub const SLOPE_TOLERANCE: f64 = 0.1;

/// Largest sine of the angle between two edges that still counts as parallel.
pub const PARALLEL_SINE_TOLERANCE: f64 = 0.1;

/// How two edges are tested for parallelism.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParallelTest {
    /// Normalized cross product of the edge directions. Has no singularity
    /// for vertical edges and does not depend on the coordinate frame.
    #[default]
    CrossProduct,
    /// Difference of rise-over-run slopes. Two vertical edges are parallel,
    /// one vertical edge is never parallel to a non-vertical one.
    Slope,
}

/// How the side lengths of a square candidate are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SideCheck {
    /// Every side within tolerance of the first side (`0 -> 1`).
    #[default]
    ReferenceSide,
    /// Longest minus shortest side within tolerance.
    Spread,
}

/// Tolerance policy used by the classifiers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerances {
    /// Maximum deviation from a right angle, in degrees.
    pub angle_deg: f64,
    /// Maximum difference between side lengths.
    pub side: f64,
    /// Maximum slope difference for [`ParallelTest::Slope`].
    pub slope: f64,
    /// Maximum sine between edges for [`ParallelTest::CrossProduct`].
    pub parallel_sine: f64,
    /// How opposite edges are tested for parallelism.
    pub parallel_test: ParallelTest,
    /// How side lengths of a square candidate are compared.
    pub side_check: SideCheck,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            angle_deg: ANGLE_TOLERANCE_DEG,
            side: SIDE_TOLERANCE,
            slope: SLOPE_TOLERANCE,
            parallel_sine: PARALLEL_SINE_TOLERANCE,
            parallel_test: ParallelTest::default(),
            side_check: SideCheck::default(),
        }
    }
}

impl Tolerances {
    /// Tolerances that reproduce the legacy slope comparison.
    #[must_use]
    pub fn legacy() -> Self {
        Self {
            parallel_test: ParallelTest::Slope,
            ..Self::default()
        }
    }

    /// Returns a copy using the given parallelism test.
    #[must_use]
    pub fn with_parallel_test(mut self, parallel_test: ParallelTest) -> Self {
        self.parallel_test = parallel_test;
        self
    }

    /// Returns a copy using the given side comparison.
    #[must_use]
    pub fn with_side_check(mut self, side_check: SideCheck) -> Self {
        self.side_check = side_check;
        self
    }
}
