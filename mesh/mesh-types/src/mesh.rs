//! Indexed polygon mesh.

use crate::{Face, MeshTopology, Vertex};
use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An indexed polygon mesh.
///
/// Vertices and faces are stored separately, with faces referencing
/// vertices by index. Repair passes treat a `PolyMesh` as an immutable
/// snapshot: they borrow it and return a newly allocated mesh, so earlier
/// results can be kept for diagnostics.
///
/// # Memory Layout
///
/// - `vertices`: `Vec<Vertex>` - Vertex positions
/// - `faces`: `Vec<Face>` - Polygon loops as vertex indices
///
/// # Example
///
/// ```
/// use mesh_types::{MeshTopology, PolyMesh};
///
/// let mesh = PolyMesh::from_positions(
///     &[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
///     vec![vec![0, 1, 2]],
/// );
///
/// assert_eq!(mesh.vertex_count(), 3);
/// assert_eq!(mesh.face_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PolyMesh {
    /// Vertex data.
    pub vertices: Vec<Vertex>,

    /// Polygon faces as loops of indices into the vertex array.
    pub faces: Vec<Face>,
}

impl PolyMesh {
    /// Create a new empty mesh.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vertices: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Create a mesh from vertices and faces.
    #[inline]
    #[must_use]
    pub const fn from_parts(vertices: Vec<Vertex>, faces: Vec<Face>) -> Self {
        Self { vertices, faces }
    }

    /// Create a mesh from coordinate triples and index loops.
    ///
    /// Indices are taken as given; nothing is validated here.
    #[must_use]
    pub fn from_positions(positions: &[[f64; 3]], loops: Vec<Vec<u32>>) -> Self {
        Self {
            vertices: positions.iter().map(|&p| Vertex::from(p)).collect(),
            faces: loops.into_iter().map(Face::new).collect(),
        }
    }

    /// Position of the vertex at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range. Callers validate indices before
    /// reading positions.
    #[inline]
    #[must_use]
    pub fn position(&self, index: u32) -> &Point3<f64> {
        &self.vertices[index as usize].position
    }

    /// Cross product of the first two edges of a face, `(v1 - v0) × (v2 - v0)`.
    ///
    /// Its magnitude is twice the area of the leading triangle. Returns
    /// `None` for loops shorter than 3.
    ///
    /// # Panics
    ///
    /// Panics if one of the first three entries is out of range.
    #[must_use]
    pub fn leading_cross(&self, face: &Face) -> Option<Vector3<f64>> {
        let [a, b, c] = match face.vertices.as_slice() {
            [a, b, c, ..] => [*a, *b, *c],
            _ => return None,
        };
        let v0 = self.position(a);
        let e1 = self.position(b) - v0;
        let e2 = self.position(c) - v0;
        Some(e1.cross(&e2))
    }

    /// Area of a face loop, fan-triangulated from its first vertex.
    ///
    /// Returns `0.0` for loops shorter than 3.
    ///
    /// # Panics
    ///
    /// Panics if any entry is out of range.
    #[must_use]
    pub fn fan_area(&self, face: &Face) -> f64 {
        let Some(&first) = face.vertices.first() else {
            return 0.0;
        };
        let v0 = self.position(first);

        face.vertices
            .windows(2)
            .skip(1)
            .map(|pair| {
                let e1 = self.position(pair[0]) - v0;
                let e2 = self.position(pair[1]) - v0;
                e1.cross(&e2).norm() * 0.5
            })
            .sum()
    }

    /// Find the first face index that is out of range for the vertex array.
    ///
    /// Returns `(face_index, vertex_index)` of the first offender.
    #[must_use]
    pub fn first_invalid_index(&self) -> Option<(usize, u32)> {
        let count = self.vertices.len();
        self.faces.iter().enumerate().find_map(|(face_idx, face)| {
            face.vertices
                .iter()
                .find(|&&v| v as usize >= count)
                .map(|&v| (face_idx, v))
        })
    }

    /// Sorted list of the vertex indices referenced by at least one face.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    // Truncation: mesh indices are u32, so vertex counts > 4B are unsupported by design
    pub fn referenced_vertices(&self) -> Vec<u32> {
        let mut used = vec![false; self.vertices.len()];
        for &v in self.faces.iter().flat_map(|f| f.vertices.iter()) {
            if let Some(slot) = used.get_mut(v as usize) {
                *slot = true;
            }
        }
        used.iter()
            .enumerate()
            .filter(|(_, &u)| u)
            .map(|(i, _)| i as u32)
            .collect()
    }
}

impl MeshTopology for PolyMesh {
    #[inline]
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    fn face_count(&self) -> usize {
        self.faces.len()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_square() -> PolyMesh {
        PolyMesh::from_positions(
            &[
                [0.0, 0.0, 0.0],
                [1.0, 0.0, 0.0],
                [1.0, 1.0, 0.0],
                [0.0, 1.0, 0.0],
            ],
            vec![vec![0, 1, 2, 3]],
        )
    }

    #[test]
    fn mesh_is_empty() {
        let mesh = PolyMesh::new();
        assert!(mesh.is_empty());

        let mut mesh2 = PolyMesh::new();
        mesh2.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
        assert!(mesh2.is_empty()); // no faces

        mesh2.faces.push(Face::from([0, 0, 0]));
        assert!(!mesh2.is_empty());
    }

    #[test]
    fn fan_area_of_square() {
        let mesh = unit_square();
        assert_relative_eq!(mesh.fan_area(&mesh.faces[0]), 1.0);
        assert_relative_eq!(mesh.fan_area(&Face::from([0, 1])), 0.0);
    }

    #[test]
    fn leading_cross_magnitude() {
        let mesh = unit_square();
        let cross = mesh.leading_cross(&mesh.faces[0]).unwrap();
        assert_relative_eq!(cross.norm(), 1.0);
        assert_relative_eq!(cross.z, 1.0);
        assert!(mesh.leading_cross(&Face::from([0, 1])).is_none());
    }

    #[test]
    fn invalid_index_detection() {
        let mut mesh = unit_square();
        assert_eq!(mesh.first_invalid_index(), None);

        mesh.faces.push(Face::from([0, 1, 9]));
        assert_eq!(mesh.first_invalid_index(), Some((1, 9)));
    }

    #[test]
    fn referenced_vertices_sorted() {
        let mut mesh = unit_square();
        mesh.vertices.push(Vertex::from_coords(5.0, 5.0, 5.0));
        mesh.faces[0] = Face::from([3, 1, 0]);
        assert_eq!(mesh.referenced_vertices(), vec![0, 1, 3]);
    }
}
