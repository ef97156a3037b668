//! Face-connected component extraction.
//!
//! Two faces are connected when they share a loop edge. Components are
//! discovered by breadth-first search over the edge index, starting from the
//! lowest unvisited face, so the output order is deterministic.

use std::collections::VecDeque;

use mesh_types::PolyMesh;
use tracing::debug;

use crate::compact::compact_faces;
use crate::edge_index::EdgeIndex;
use crate::error::{RepairResult, check_indices};

/// Summary of a mesh's face-connected components.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentAnalysis {
    /// Number of components.
    pub component_count: usize,
    /// Face count of each component, in discovery order.
    pub face_counts: Vec<usize>,
}

impl ComponentAnalysis {
    /// Index of the component with the most faces.
    ///
    /// Ties go to the component discovered first.
    #[must_use]
    pub fn largest_component(&self) -> Option<usize> {
        self.face_counts
            .iter()
            .enumerate()
            .rev()
            .max_by_key(|(_, &count)| count)
            .map(|(idx, _)| idx)
    }

    /// Face count of the largest component, or 0 for an empty mesh.
    #[must_use]
    pub fn largest_component_size(&self) -> usize {
        self.face_counts.iter().copied().max().unwrap_or(0)
    }

    /// Check whether the mesh forms at most one component.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.component_count <= 1
    }
}

/// Group face indices into components, in BFS visitation order.
fn face_components(mesh: &PolyMesh, index: &EdgeIndex) -> Vec<Vec<usize>> {
    let mut visited = vec![false; mesh.faces.len()];
    let mut components = Vec::new();
    let mut queue = VecDeque::new();

    for seed in 0..mesh.faces.len() {
        if visited[seed] {
            continue;
        }

        let mut component = Vec::new();
        visited[seed] = true;
        queue.push_back(seed);

        while let Some(current) = queue.pop_front() {
            component.push(current);

            for (a, b) in mesh.faces[current].edges() {
                let Some(neighbors) = index.faces_for_edge(a, b) else {
                    continue;
                };
                for &neighbor in neighbors {
                    if neighbor != current && !visited[neighbor] {
                        visited[neighbor] = true;
                        queue.push_back(neighbor);
                    }
                }
            }
        }

        components.push(component);
    }

    components
}

/// Split a mesh into its face-connected components.
///
/// The edge index is rebuilt over `mesh`. Each component keeps only the
/// vertices its faces reference, renumbered `0..k` in ascending order of
/// their original index. Components are emitted in discovery order, and
/// faces within a component in visitation order.
///
/// # Errors
///
/// Returns [`RepairError::InvalidIndex`](crate::RepairError::InvalidIndex)
/// if a face references a vertex out of range.
///
/// # Example
///
/// ```
/// use mesh_types::PolyMesh;
/// use mesh_manifold::extract_components;
///
/// // Two triangles that share no edge
/// let mesh = PolyMesh::from_positions(
///     &[
///         [0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0],
///         [5.0, 0.0, 0.0], [6.0, 0.0, 0.0], [5.0, 1.0, 0.0],
///     ],
///     vec![vec![0, 1, 2], vec![3, 4, 5]],
/// );
/// let parts = extract_components(&mesh)?;
///
/// assert_eq!(parts.len(), 2);
/// assert_eq!(parts[1].faces[0].vertices, vec![0, 1, 2]);
/// # Ok::<(), mesh_manifold::RepairError>(())
/// ```
pub fn extract_components(mesh: &PolyMesh) -> RepairResult<Vec<PolyMesh>> {
    check_indices(mesh)?;

    let index = EdgeIndex::build(mesh);
    let groups = face_components(mesh, &index);
    debug!("Found {} connected components", groups.len());

    Ok(groups
        .iter()
        .map(|group| compact_faces(mesh, group.iter().map(|&f| &mesh.faces[f])))
        .collect())
}

/// Count components and their sizes without building the meshes.
///
/// Only topology is read, so out-of-range indices are harmless here.
#[must_use]
pub fn analyze_components(mesh: &PolyMesh) -> ComponentAnalysis {
    let index = EdgeIndex::build(mesh);
    let face_counts: Vec<usize> = face_components(mesh, &index)
        .iter()
        .map(Vec::len)
        .collect();

    ComponentAnalysis {
        component_count: face_counts.len(),
        face_counts,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use mesh_types::Vertex;

    fn two_islands() -> PolyMesh {
        PolyMesh::from_positions(
            &[
                [0.0, 0.0, 0.0],
                [1.0, 0.0, 0.0],
                [0.0, 1.0, 0.0],
                [1.0, 1.0, 0.0],
                [5.0, 0.0, 0.0],
                [6.0, 0.0, 0.0],
                [5.0, 1.0, 0.0],
            ],
            vec![vec![4, 5, 6], vec![0, 1, 2], vec![1, 3, 2]],
        )
    }

    #[test]
    fn discovery_order_follows_lowest_face() {
        let parts = extract_components(&two_islands()).unwrap();

        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].faces.len(), 1);
        assert_eq!(parts[0].vertices[0], Vertex::from_coords(5.0, 0.0, 0.0));
        assert_eq!(parts[1].faces.len(), 2);
        assert_eq!(parts[1].vertices.len(), 4);
        assert_eq!(parts[1].faces[1].vertices, vec![1, 3, 2]);
    }

    #[test]
    fn vertex_only_contact_is_not_connected() {
        // Two triangles touching at vertex 0
        let mesh = PolyMesh::from_positions(
            &[
                [0.0, 0.0, 0.0],
                [1.0, 0.0, 0.0],
                [0.0, 1.0, 0.0],
                [-1.0, 0.0, 0.0],
                [0.0, -1.0, 0.0],
            ],
            vec![vec![0, 1, 2], vec![0, 3, 4]],
        );
        assert_eq!(extract_components(&mesh).unwrap().len(), 2);
    }

    #[test]
    fn bfs_visits_neighbors_before_distant_faces() {
        // Strip of four triangles: 0-1, 1-2, 2-3 share edges
        let mesh = PolyMesh::from_positions(
            &[
                [0.0, 0.0, 0.0],
                [1.0, 0.0, 0.0],
                [0.0, 1.0, 0.0],
                [1.0, 1.0, 0.0],
                [0.0, 2.0, 0.0],
                [1.0, 2.0, 0.0],
            ],
            vec![vec![2, 3, 4], vec![0, 1, 2], vec![3, 5, 4], vec![1, 3, 2]],
        );
        let parts = extract_components(&mesh).unwrap();
        assert_eq!(parts.len(), 1);

        // Seed 0 reaches 3 via (2,3) and 2 via (3,4), in edge order; then 1 from 3
        let order: Vec<_> = parts[0].faces.iter().map(|f| f.vertices.clone()).collect();
        assert_eq!(order.len(), 4);
        assert_eq!(order[0], vec![2, 3, 4]);
        assert_eq!(order[1], vec![1, 3, 2]);
        assert_eq!(order[2], vec![3, 5, 4]);
        assert_eq!(order[3], vec![0, 1, 2]);
    }

    #[test]
    fn empty_mesh_has_no_components() {
        assert!(extract_components(&PolyMesh::new()).unwrap().is_empty());
        let analysis = analyze_components(&PolyMesh::new());
        assert_eq!(analysis.component_count, 0);
        assert!(analysis.largest_component().is_none());
        assert!(analysis.is_connected());
    }

    #[test]
    fn analysis_counts_faces() {
        let analysis = analyze_components(&two_islands());
        assert_eq!(analysis.component_count, 2);
        assert_eq!(analysis.face_counts, vec![1, 2]);
        assert_eq!(analysis.largest_component(), Some(1));
        assert_eq!(analysis.largest_component_size(), 2);
        assert!(!analysis.is_connected());
    }

    #[test]
    fn largest_component_tie_prefers_first() {
        let analysis = ComponentAnalysis {
            component_count: 3,
            face_counts: vec![2, 5, 5],
        };
        assert_eq!(analysis.largest_component(), Some(1));
    }
}
