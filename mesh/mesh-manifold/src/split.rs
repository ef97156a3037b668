//! Vertex splitting along non-manifold edges.

use mesh_types::{PolyMesh, Vertex};
use tracing::debug;

use crate::edge_index::Edge;
use crate::error::{RepairError, RepairResult, check_indices};

/// Break every non-manifold edge by giving its excess faces private copies
/// of the edge's endpoints.
///
/// Edges are processed in the order given. The first two faces listed on
/// an edge keep the original endpoints. Every further face gets two fresh
/// vertices appended to the vertex array (a copy of `v0`, then of `v1`) and
/// records the remaps `v0 -> v0'` and `v1 -> v1'`. Once all edges are
/// processed each face applies its remaps in recording order, every remap
/// rewriting all occurrences of the old index in the loop.
///
/// Face count and face order are unchanged, and cached normals are carried
/// through. With no edges the result is a copy of the input.
///
/// Which faces keep an edge depends on face order: the two lowest face
/// indices win.
///
/// # Errors
///
/// Returns [`RepairError::InvalidIndex`] if a face or edge references a
/// vertex out of range, or [`RepairError::IndexOverflow`] if the duplicated vertices
/// no longer fit in `u32` indices.
///
/// # Example
///
/// ```
/// use mesh_types::PolyMesh;
/// use mesh_manifold::{EdgeIndex, find_non_manifold_edges, split_non_manifold_edges};
///
/// let mesh = PolyMesh::from_positions(
///     &[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.5, 1.0, 0.0], [0.5, 0.0, 1.0], [0.5, -1.0, 0.0]],
///     vec![vec![0, 1, 2], vec![0, 1, 3], vec![0, 1, 4]],
/// );
/// let index = EdgeIndex::build(&mesh);
/// let split = split_non_manifold_edges(&mesh, &find_non_manifold_edges(&index))?;
///
/// assert_eq!(split.vertices.len(), 7);
/// assert_eq!(split.faces[2].vertices, vec![5, 6, 4]);
/// # Ok::<(), mesh_manifold::RepairError>(())
/// ```
pub fn split_non_manifold_edges(mesh: &PolyMesh, edges: &[&Edge]) -> RepairResult<PolyMesh> {
    check_indices(mesh)?;

    let mut vertices = mesh.vertices.clone();
    let mut remaps: Vec<Vec<(u32, u32)>> = vec![Vec::new(); mesh.faces.len()];

    for edge in edges {
        for &face_idx in edge.faces.iter().skip(2) {
            let Some(face_remaps) = remaps.get_mut(face_idx) else {
                continue;
            };
            let d0 = push_copy(&mut vertices, edge.v0, face_idx)?;
            let d1 = push_copy(&mut vertices, edge.v1, face_idx)?;
            face_remaps.push((edge.v0, d0));
            face_remaps.push((edge.v1, d1));
        }
    }

    let duplicated = vertices.len() - mesh.vertices.len();
    if duplicated > 0 {
        debug!(
            "Duplicated {} vertices across {} non-manifold edges",
            duplicated,
            edges.len()
        );
    }

    let faces = mesh
        .faces
        .iter()
        .zip(remaps)
        .map(|(face, face_remaps)| {
            let mut face = face.clone();
            for (old, new) in face_remaps {
                for v in &mut face.vertices {
                    if *v == old {
                        *v = new;
                    }
                }
            }
            face
        })
        .collect();

    Ok(PolyMesh::from_parts(vertices, faces))
}

/// Append a copy of `source` and return its index.
fn push_copy(vertices: &mut Vec<Vertex>, source: u32, face: usize) -> RepairResult<u32> {
    let index = u32::try_from(vertices.len()).map_err(|_| RepairError::IndexOverflow {
        count: vertices.len() + 1,
    })?;
    let copy = *vertices
        .get(source as usize)
        .ok_or(RepairError::InvalidIndex {
            face,
            index: source,
            vertex_count: vertices.len(),
        })?;
    vertices.push(copy);
    Ok(index)
}
