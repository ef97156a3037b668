//! Greedy vertex welding.

use mesh_types::{Face, PolyMesh, Vertex};
use tracing::debug;

use crate::error::{RepairError, RepairResult, check_indices, check_tolerance};

/// Counts of what a weld pass merged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WeldReport {
    /// Input vertices folded into an earlier vertex.
    pub vertices_merged: usize,
}

/// Merge vertices closer than `threshold` to an earlier vertex.
///
/// Vertices are visited in index order. Each one joins the first previously
/// accepted vertex whose distance is strictly less than `threshold`;
/// otherwise it is accepted at the next output index and keeps its own
/// position. The scan is linear per vertex, so the pass is O(n²).
///
/// Faces are remapped and consecutive duplicate indices collapsed. The
/// pair formed by the last and first entry is not compared, and repeats
/// that are not adjacent are kept, so welding can leave degenerate loops
/// for a later cleanup pass. Cached normals are carried through.
///
/// # Errors
///
/// Returns [`RepairError::InvalidIndex`] for out-of-range face indices, or
/// [`RepairError::InvalidTolerance`] if `threshold` is negative or NaN.
///
/// # Example
///
/// ```
/// use mesh_types::PolyMesh;
/// use mesh_manifold::merge_close_vertices;
///
/// let mesh = PolyMesh::from_positions(
///     &[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [1.0001, 0.0, 0.0]],
///     vec![vec![0, 1, 2], vec![0, 3, 2]],
/// );
/// let welded = merge_close_vertices(&mesh, 0.001)?;
///
/// assert_eq!(welded.vertices.len(), 3);
/// assert_eq!(welded.faces[1].vertices, vec![0, 1, 2]);
/// # Ok::<(), mesh_manifold::RepairError>(())
/// ```
pub fn merge_close_vertices(mesh: &PolyMesh, threshold: f64) -> RepairResult<PolyMesh> {
    merge_close_vertices_with_report(mesh, threshold).map(|(welded, _)| welded)
}

/// Like [`merge_close_vertices`], also reporting how many vertices merged.
///
/// # Errors
///
/// Same as [`merge_close_vertices`].
pub fn merge_close_vertices_with_report(
    mesh: &PolyMesh,
    threshold: f64,
) -> RepairResult<(PolyMesh, WeldReport)> {
    check_tolerance("weld_threshold", threshold)?;
    check_indices(mesh)?;

    let mut accepted: Vec<Vertex> = Vec::new();
    let mut remap: Vec<u32> = Vec::with_capacity(mesh.vertices.len());

    for vertex in &mesh.vertices {
        let target = match accepted
            .iter()
            .position(|kept| kept.distance(vertex) < threshold)
        {
            Some(existing) => existing,
            None => {
                accepted.push(*vertex);
                accepted.len() - 1
            }
        };
        let target = u32::try_from(target).map_err(|_| RepairError::IndexOverflow {
            count: target + 1,
        })?;
        remap.push(target);
    }

    let faces = mesh
        .faces
        .iter()
        .map(|face| {
            let mut vertices = Vec::with_capacity(face.len());
            for &v in &face.vertices {
                let idx = remap[v as usize];
                if vertices.last() != Some(&idx) {
                    vertices.push(idx);
                }
            }
            Face {
                vertices,
                normal: face.normal,
            }
        })
        .collect();

    let report = WeldReport {
        vertices_merged: mesh.vertices.len() - accepted.len(),
    };
    if report.vertices_merged > 0 {
        debug!(
            "Welded {} vertices (threshold {})",
            report.vertices_merged, threshold
        );
    }

    Ok((PolyMesh::from_parts(accepted, faces), report))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn merges_within_threshold() {
        let mesh = PolyMesh::from_positions(
            &[[0.0, 0.0, 0.0], [0.0005, 0.0, 0.0], [1.0, 0.0, 0.0]],
            vec![vec![0, 1, 2]],
        );
        let (welded, report) = merge_close_vertices_with_report(&mesh, 0.001).unwrap();

        assert_eq!(welded.vertices.len(), 2);
        assert_eq!(welded.vertices[0], Vertex::from_coords(0.0, 0.0, 0.0));
        assert_eq!(welded.faces[0].vertices, vec![0, 1]);
        assert_eq!(report.vertices_merged, 1);
    }

    #[test]
    fn threshold_is_strict() {
        let mesh = PolyMesh::from_positions(
            &[[0.0, 0.0, 0.0], [0.5, 0.0, 0.0]],
            vec![vec![0, 1]],
        );
        assert_eq!(merge_close_vertices(&mesh, 0.5).unwrap().vertices.len(), 2);
        assert_eq!(merge_close_vertices(&mesh, 0.6).unwrap().vertices.len(), 1);
        assert_eq!(merge_close_vertices(&mesh, 0.0).unwrap().vertices.len(), 2);
    }

    #[test]
    fn joins_first_accepted_not_nearest() {
        // Vertex 2 is within range of both 0 and 1 but joins 0; 1 stays separate
        let mesh = PolyMesh::from_positions(
            &[[0.0, 0.0, 0.0], [0.8, 0.0, 0.0], [0.5, 0.0, 0.0]],
            vec![vec![0, 1, 2]],
        );
        let welded = merge_close_vertices(&mesh, 0.6).unwrap();
        assert_eq!(welded.vertices.len(), 2);
        assert_eq!(welded.faces[0].vertices, vec![0, 1, 0]);
    }

    #[test]
    fn wrap_around_duplicate_kept() {
        let mesh = PolyMesh::from_positions(
            &[
                [0.0, 0.0, 0.0],
                [1.0, 0.0, 0.0],
                [0.0, 1.0, 0.0],
                [0.0, 0.0, 0.0],
            ],
            vec![vec![0, 1, 2, 3]],
        );
        let welded = merge_close_vertices(&mesh, 1e-6).unwrap();
        assert_eq!(welded.faces[0].vertices, vec![0, 1, 2, 0]);
    }

    #[test]
    fn consecutive_runs_collapse() {
        let mesh = PolyMesh::from_positions(
            &[[0.0; 3], [0.0; 3], [0.0; 3], [1.0, 0.0, 0.0]],
            vec![vec![0, 1, 2, 3]],
        );
        let welded = merge_close_vertices(&mesh, 1e-6).unwrap();
        assert_eq!(welded.faces[0].vertices, vec![0, 1]);
    }

    #[test]
    fn rejects_nan_threshold() {
        let mesh = PolyMesh::from_positions(&[[0.0; 3]], vec![]);
        assert!(matches!(
            merge_close_vertices(&mesh, f64::NAN),
            Err(RepairError::InvalidTolerance { .. })
        ));
    }
}
