//! Edge-to-face index.
//!
//! Maps every unordered vertex pair that appears as a loop edge to the
//! faces containing it. The index is derived data: rebuild it whenever
//! face topology changes.

use hashbrown::HashMap;
use mesh_types::{Face, PolyMesh};

/// Canonical key of an unordered vertex pair, packed as `(min << 32) | max`.
pub type EdgeKey = u64;

/// Pack an unordered vertex pair into its canonical key.
///
/// # Example
///
/// ```
/// use mesh_manifold::edge_key;
///
/// assert_eq!(edge_key(3, 7), edge_key(7, 3));
/// assert_ne!(edge_key(3, 7), edge_key(3, 8));
/// ```
#[inline]
#[must_use]
pub fn edge_key(v0: u32, v1: u32) -> EdgeKey {
    let (lo, hi) = normalize_edge(v0, v1);
    (u64::from(lo) << 32) | u64::from(hi)
}

/// Normalize edge direction so v0 <= v1.
#[inline]
fn normalize_edge(v0: u32, v1: u32) -> (u32, u32) {
    if v0 <= v1 { (v0, v1) } else { (v1, v0) }
}

/// An edge and the faces incident to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    /// Smaller endpoint index.
    pub v0: u32,
    /// Larger endpoint index.
    pub v1: u32,
    /// Incident face indices, in the order the faces were visited.
    ///
    /// A face appears once per loop edge that maps to this key, so a
    /// two-vertex face contributes itself twice.
    pub faces: Vec<usize>,
}

impl Edge {
    /// Canonical key of this edge.
    #[inline]
    #[must_use]
    pub fn key(&self) -> EdgeKey {
        edge_key(self.v0, self.v1)
    }

    /// Number of incident faces.
    #[inline]
    #[must_use]
    pub fn fan_in(&self) -> usize {
        self.faces.len()
    }

    /// Edge with exactly one incident face.
    #[inline]
    #[must_use]
    pub fn is_boundary(&self) -> bool {
        self.faces.len() == 1
    }

    /// Edge with more than two incident faces.
    #[inline]
    #[must_use]
    pub fn is_non_manifold(&self) -> bool {
        self.faces.len() > 2
    }
}

/// Edge-to-face adjacency for a polygon mesh.
///
/// Edges are stored in first-seen order, so iteration is deterministic and
/// follows face order.
#[derive(Debug, Clone, Default)]
pub struct EdgeIndex {
    edges: Vec<Edge>,
    lookup: HashMap<EdgeKey, usize>,
}

impl EdgeIndex {
    /// Build the index over a mesh's faces.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_types::PolyMesh;
    /// use mesh_manifold::EdgeIndex;
    ///
    /// let mesh = PolyMesh::from_positions(
    ///     &[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [1.0, 1.0, 0.0]],
    ///     vec![vec![0, 1, 2], vec![1, 3, 2]],
    /// );
    /// let index = EdgeIndex::build(&mesh);
    ///
    /// assert_eq!(index.len(), 5);
    /// assert_eq!(index.faces_for_edge(2, 1), Some(&[0, 1][..]));
    /// ```
    #[must_use]
    pub fn build(mesh: &PolyMesh) -> Self {
        Self::from_faces(&mesh.faces)
    }

    /// Build the index from a face list.
    ///
    /// Single pass over every loop edge of every face. Degenerate loops
    /// still contribute their edges.
    #[must_use]
    pub fn from_faces(faces: &[Face]) -> Self {
        let mut index = Self::default();

        for (face_idx, face) in faces.iter().enumerate() {
            for (a, b) in face.edges() {
                index.insert(a, b, face_idx);
            }
        }

        index
    }

    fn insert(&mut self, a: u32, b: u32, face_idx: usize) {
        let key = edge_key(a, b);
        let slot = match self.lookup.get(&key) {
            Some(&slot) => slot,
            None => {
                let (v0, v1) = normalize_edge(a, b);
                self.edges.push(Edge {
                    v0,
                    v1,
                    faces: Vec::new(),
                });
                let slot = self.edges.len() - 1;
                self.lookup.insert(key, slot);
                slot
            }
        };
        self.edges[slot].faces.push(face_idx);
    }

    /// Look up an edge in either direction.
    #[must_use]
    pub fn edge(&self, v0: u32, v1: u32) -> Option<&Edge> {
        self.lookup
            .get(&edge_key(v0, v1))
            .map(|&slot| &self.edges[slot])
    }

    /// Get faces incident to an edge.
    ///
    /// Returns `None` if the edge doesn't exist in the mesh.
    #[must_use]
    pub fn faces_for_edge(&self, v0: u32, v1: u32) -> Option<&[usize]> {
        self.edge(v0, v1).map(|e| e.faces.as_slice())
    }

    /// All edges in first-seen order.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Get the total number of distinct edges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Check if the index has no edges.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Iterate over boundary edges (exactly one incident face).
    pub fn boundary_edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.iter().filter(|e| e.is_boundary())
    }

    /// Count boundary edges.
    #[must_use]
    pub fn boundary_edge_count(&self) -> usize {
        self.boundary_edges().count()
    }

    /// Count edges with more than two incident faces.
    #[must_use]
    pub fn non_manifold_edge_count(&self) -> usize {
        self.edges.iter().filter(|e| e.is_non_manifold()).count()
    }

    /// Check that no edge has more than two incident faces.
    #[must_use]
    pub fn is_manifold(&self) -> bool {
        self.edges.iter().all(|e| e.faces.len() <= 2)
    }

    /// Check that every edge has at least two incident faces.
    #[must_use]
    pub fn is_watertight(&self) -> bool {
        self.edges.iter().all(|e| e.faces.len() >= 2)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn faces(loops: &[&[u32]]) -> Vec<Face> {
        loops.iter().map(|l| Face::new(l.to_vec())).collect()
    }

    #[test]
    fn build_single_triangle() {
        let index = EdgeIndex::from_faces(&faces(&[&[0, 1, 2]]));

        assert_eq!(index.len(), 3);
        assert_eq!(index.boundary_edge_count(), 3);
        assert!(!index.is_watertight());
        assert!(index.is_manifold());
    }

    #[test]
    fn shared_edge_lists_both_faces() {
        let index = EdgeIndex::from_faces(&faces(&[&[0, 1, 2], &[1, 3, 2]]));

        assert_eq!(index.faces_for_edge(1, 2), Some(&[0, 1][..]));
        assert_eq!(index.faces_for_edge(0, 1), Some(&[0][..]));
        assert_eq!(index.boundary_edge_count(), 4);
    }

    #[test]
    fn quad_contributes_four_edges() {
        let index = EdgeIndex::from_faces(&faces(&[&[0, 1, 2, 3]]));
        assert_eq!(index.len(), 4);
        assert!(index.edge(3, 0).is_some());
        assert!(index.edge(0, 2).is_none());
    }

    #[test]
    fn non_manifold_fan_in() {
        let index = EdgeIndex::from_faces(&faces(&[&[0, 1, 2], &[0, 1, 3], &[1, 0, 4]]));

        let edge = index.edge(0, 1).unwrap();
        assert_eq!(edge.fan_in(), 3);
        assert!(edge.is_non_manifold());
        assert_eq!(index.non_manifold_edge_count(), 1);
        assert!(!index.is_manifold());
    }

    #[test]
    fn edge_direction_normalization() {
        let index = EdgeIndex::from_faces(&faces(&[&[5, 2, 9]]));

        assert_eq!(index.faces_for_edge(2, 5), index.faces_for_edge(5, 2));
        let edge = index.edge(9, 5).unwrap();
        assert_eq!((edge.v0, edge.v1), (5, 9));
        assert_eq!(edge.key(), edge_key(5, 9));
    }

    #[test]
    fn degenerate_loops_still_contribute() {
        // Two-vertex loop walks (0,1) then (1,0)
        let index = EdgeIndex::from_faces(&faces(&[&[0, 1]]));
        assert_eq!(index.len(), 1);
        assert_eq!(index.faces_for_edge(0, 1), Some(&[0, 0][..]));

        // Repeated vertex yields a self-edge
        let index = EdgeIndex::from_faces(&faces(&[&[0, 0, 0]]));
        assert_eq!(index.faces_for_edge(0, 0), Some(&[0, 0, 0][..]));
    }

    #[test]
    fn edges_in_first_seen_order() {
        let index = EdgeIndex::from_faces(&faces(&[&[0, 1, 2], &[2, 1, 3]]));
        let keys: Vec<_> = index.edges().iter().map(|e| (e.v0, e.v1)).collect();
        assert_eq!(keys, vec![(0, 1), (1, 2), (0, 2), (1, 3), (2, 3)]);
    }

    #[test]
    fn key_packing_is_distinct() {
        assert_eq!(edge_key(1, 0), 1);
        assert_eq!(edge_key(u32::MAX, 1), (1u64 << 32) | u64::from(u32::MAX));
    }

    #[test]
    fn nonexistent_edge() {
        let index = EdgeIndex::from_faces(&faces(&[&[0, 1, 2]]));
        assert!(index.faces_for_edge(0, 5).is_none());
        assert!(EdgeIndex::default().is_empty());
    }
}
