use crate::error::{GeometryError, Result};
use crate::math::{angle_at_vertex, distance, edge_slope, Point2, Vector2, TOLERANCE};

/// Four vertices in the order they were placed, closed by the edge `3 -> 0`.
///
/// Construction only checks the vertex count and that coordinates are
/// finite. The quad may be concave, self-intersecting or contain repeated
/// points; derived quantities that need a non-degenerate edge check for it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    vertices: [Point2; 4],
}

impl Quad {
    /// Creates a quad from exactly four vertices.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::NonFinite` if any coordinate is NaN or infinite.
    pub fn new(vertices: [Point2; 4]) -> Result<Self> {
        if let Some(index) = vertices
            .iter()
            .position(|v| !v.x.is_finite() || !v.y.is_finite())
        {
            return Err(GeometryError::NonFinite { index }.into());
        }
        Ok(Self { vertices })
    }

    /// Creates a quad from a point sequence.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidPointCount` if `points.len() != 4`, or
    /// `GeometryError::NonFinite` if any coordinate is NaN or infinite.
    pub fn from_points(points: &[Point2]) -> Result<Self> {
        let vertices: [Point2; 4] = points.try_into().map_err(|_| {
            GeometryError::InvalidPointCount {
                count: points.len(),
            }
        })?;
        Self::new(vertices)
    }

    /// Creates a quad from `(x, y)` pairs.
    ///
    /// # Errors
    ///
    /// Same as [`Quad::new`].
    pub fn from_xy(coords: [(f64, f64); 4]) -> Result<Self> {
        Self::new(coords.map(|(x, y)| Point2::new(x, y)))
    }

    /// Returns the vertices in placement order.
    #[must_use]
    pub fn vertices(&self) -> &[Point2; 4] {
        &self.vertices
    }

    /// Returns the vertex at `index`, wrapping modulo 4.
    #[must_use]
    pub fn vertex(&self, index: usize) -> &Point2 {
        &self.vertices[index % 4]
    }

    /// Returns the direction vector of edge `index -> index + 1`.
    #[must_use]
    pub fn edge(&self, index: usize) -> Vector2 {
        self.vertex(index + 1) - self.vertex(index)
    }

    /// Returns the four edge direction vectors.
    #[must_use]
    pub fn edges(&self) -> [Vector2; 4] {
        std::array::from_fn(|i| self.edge(i))
    }

    /// Returns the length of each edge, starting with `0 -> 1`.
    #[must_use]
    pub fn side_lengths(&self) -> [f64; 4] {
        std::array::from_fn(|i| distance(self.vertex(i), self.vertex(i + 1)))
    }

    /// Returns the raw angle at each vertex, measured against its two
    /// neighbours (see [`angle_at_vertex`]).
    #[must_use]
    pub fn interior_angles(&self) -> [f64; 4] {
        std::array::from_fn(|i| {
            angle_at_vertex(self.vertex(i + 3), self.vertex(i), self.vertex(i + 1))
        })
    }

    /// Returns the slope of each edge, starting with `0 -> 1`.
    ///
    /// Vertical edges yield an infinite slope.
    #[must_use]
    pub fn edge_slopes(&self) -> [f64; 4] {
        std::array::from_fn(|i| edge_slope(self.vertex(i), self.vertex(i + 1)))
    }

    /// Checks that every edge has non-zero length.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DegenerateEdge` naming the first collapsed edge.
    pub fn check_edges(&self) -> Result<()> {
        match self.edges().iter().position(|e| e.norm() < TOLERANCE) {
            Some(index) => Err(GeometryError::DegenerateEdge { index }.into()),
            None => Ok(()),
        }
    }

    /// Returns `true` if no two vertices coincide.
    #[must_use]
    pub fn has_distinct_vertices(&self) -> bool {
        (0..4).all(|i| {
            (i + 1..4).all(|j| distance(&self.vertices[i], &self.vertices[j]) >= TOLERANCE)
        })
    }

    /// Signed area by the shoelace formula; positive for counter-clockwise order
    /// in a y-up frame.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        (0..4)
            .map(|i| {
                let a = self.vertex(i);
                let b = self.vertex(i + 1);
                a.x * b.y - b.x * a.y
            })
            .sum::<f64>()
            * 0.5
    }

    /// Returns this quad rotated by `angle` radians around `center`.
    #[must_use]
    pub fn rotated(&self, center: &Point2, angle: f64) -> Self {
        let rot = nalgebra::Rotation2::new(angle);
        Self {
            vertices: self.vertices.map(|v| center + rot * (v - center)),
        }
    }

    /// Returns this quad translated by `offset`.
    #[must_use]
    pub fn translated(&self, offset: &Vector2) -> Self {
        Self {
            vertices: self.vertices.map(|v| v + offset),
        }
    }
}

impl TryFrom<&[Point2]> for Quad {
    type Error = crate::error::QuadraError;

    fn try_from(points: &[Point2]) -> Result<Self> {
        Self::from_points(points)
    }
}
