//! Polygon face type.

use nalgebra::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A polygon face: a closed loop of vertex indices.
///
/// The loop may have any length. Edge `i` joins `vertices[i]` to
/// `vertices[(i + 1) % n]`, so a triangle `[a, b, c]` has the edges
/// `(a, b)`, `(b, c)` and `(c, a)`.
///
/// `normal` is a derived cache filled in by normal computation. Topology
/// passes carry it through unchanged or drop it.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Face {
    /// Vertex indices in loop order.
    pub vertices: Vec<u32>,

    /// Optional cached unit normal.
    pub normal: Option<Vector3<f64>>,
}

impl Face {
    /// Create a face from a vertex loop, without a normal.
    #[inline]
    #[must_use]
    pub const fn new(vertices: Vec<u32>) -> Self {
        Self {
            vertices,
            normal: None,
        }
    }

    /// Number of vertices (and edges) in the loop.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Check if the loop has no vertices.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Check if the loop references the given vertex.
    #[inline]
    #[must_use]
    pub fn contains(&self, vertex: u32) -> bool {
        self.vertices.contains(&vertex)
    }

    /// Iterate over the loop's edges as ordered `(from, to)` pairs.
    ///
    /// A face with a single vertex yields one self-edge; an empty face
    /// yields nothing.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_types::Face;
    ///
    /// let face = Face::new(vec![4, 7, 9]);
    /// let edges: Vec<_> = face.edges().collect();
    /// assert_eq!(edges, vec![(4, 7), (7, 9), (9, 4)]);
    /// ```
    pub fn edges(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Check whether any vertex index appears more than once in the loop.
    #[must_use]
    pub fn has_repeated_vertex(&self) -> bool {
        self.vertices
            .iter()
            .enumerate()
            .any(|(i, v)| self.vertices[i + 1..].contains(v))
    }
}

impl From<Vec<u32>> for Face {
    fn from(vertices: Vec<u32>) -> Self {
        Self::new(vertices)
    }
}

impl<const N: usize> From<[u32; N]> for Face {
    fn from(vertices: [u32; N]) -> Self {
        Self::new(vertices.to_vec())
    }
}
