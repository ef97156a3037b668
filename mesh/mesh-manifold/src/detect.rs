//! Non-manifold edge detection.

use crate::edge_index::{Edge, EdgeIndex};

/// Collect every edge shared by more than two faces.
///
/// Edges with 0, 1 or 2 incident faces are manifold (boundary or interior)
/// and are skipped. The comparison is an exact count, so there is no
/// tolerance involved. Results follow the index's first-seen order.
///
/// # Example
///
/// ```
/// use mesh_types::PolyMesh;
/// use mesh_manifold::{EdgeIndex, find_non_manifold_edges};
///
/// // Three triangles hinged on the edge (0, 1)
/// let mesh = PolyMesh::from_positions(
///     &[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.5, 1.0, 0.0], [0.5, 0.0, 1.0], [0.5, -1.0, 0.0]],
///     vec![vec![0, 1, 2], vec![0, 1, 3], vec![0, 1, 4]],
/// );
/// let index = EdgeIndex::build(&mesh);
/// let edges = find_non_manifold_edges(&index);
///
/// assert_eq!(edges.len(), 1);
/// assert_eq!((edges[0].v0, edges[0].v1), (0, 1));
/// ```
#[must_use]
pub fn find_non_manifold_edges(index: &EdgeIndex) -> Vec<&Edge> {
    index
        .edges()
        .iter()
        .filter(|edge| edge.is_non_manifold())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mesh_types::Face;

    fn index_of(loops: &[&[u32]]) -> EdgeIndex {
        let faces: Vec<Face> = loops.iter().map(|l| Face::new(l.to_vec())).collect();
        EdgeIndex::from_faces(&faces)
    }

    #[test]
    fn manifold_mesh_has_none() {
        let index = index_of(&[&[0, 1, 2], &[1, 3, 2]]);
        assert!(find_non_manifold_edges(&index).is_empty());
    }

    #[test]
    fn exactly_two_faces_is_manifold() {
        let index = index_of(&[&[0, 1, 2], &[0, 1, 3]]);
        assert!(find_non_manifold_edges(&index).is_empty());
    }

    #[test]
    fn fan_in_three_and_four() {
        let index = index_of(&[
            &[0, 1, 2],
            &[0, 1, 3],
            &[0, 1, 4],
            &[5, 6, 7],
            &[5, 6, 8],
            &[5, 6, 9],
            &[6, 5, 10],
        ]);
        let edges = find_non_manifold_edges(&index);

        assert_eq!(edges.len(), 2);
        assert_eq!(edges[0].faces, vec![0, 1, 2]);
        assert_eq!(edges[1].faces, vec![3, 4, 5, 6]);
    }

    #[test]
    fn empty_index() {
        assert!(find_non_manifold_edges(&EdgeIndex::default()).is_empty());
    }
}
