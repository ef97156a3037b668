//! Merging of coplanar faces that share an edge.

use mesh_types::{Face, PolyMesh};
use tracing::info;

use crate::error::{RepairResult, check_indices, check_tolerance};
use crate::normals::face_normal;

/// Merge pairs of coplanar faces that share at least two vertices.
///
/// Faces are visited in order. For each face `i` not yet consumed, every
/// later unconsumed face `j` is tested: when `|n_i · n_j| > 1 - epsilon`
/// and the loops share two or more vertex indices, a new face is emitted
/// whose loop is `f_i` followed by the entries of `f_j` not already in it.
/// Both faces are marked consumed and the scan over `j` continues against
/// the original `f_i`, so one face can seed several merged faces. A face
/// that never merged is emitted unchanged.
///
/// Normals come from the first three vertices of each loop. Faces whose
/// normal is undefined never merge. Merged faces carry no normal.
///
/// # Errors
///
/// Returns [`RepairError::InvalidIndex`](crate::RepairError::InvalidIndex)
/// for out-of-range face indices, or
/// [`RepairError::InvalidTolerance`](crate::RepairError::InvalidTolerance)
/// for a negative or NaN epsilon.
///
/// # Example
///
/// ```
/// use mesh_types::PolyMesh;
/// use mesh_manifold::merge_coplanar_faces;
///
/// let mesh = PolyMesh::from_positions(
///     &[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 1.0, 0.0], [0.0, 1.0, 0.0]],
///     vec![vec![0, 1, 2], vec![0, 2, 3]],
/// );
/// let merged = merge_coplanar_faces(&mesh, 1e-5)?;
///
/// assert_eq!(merged.faces.len(), 1);
/// assert_eq!(merged.faces[0].vertices, vec![0, 1, 2, 3]);
/// # Ok::<(), mesh_manifold::RepairError>(())
/// ```
pub fn merge_coplanar_faces(mesh: &PolyMesh, epsilon: f64) -> RepairResult<PolyMesh> {
    check_tolerance("coplanar_epsilon", epsilon)?;
    check_indices(mesh)?;

    let normals: Vec<_> = mesh.faces.iter().map(|f| face_normal(mesh, f)).collect();
    let mut used = vec![false; mesh.faces.len()];
    let mut faces = Vec::with_capacity(mesh.faces.len());

    for (i, first) in mesh.faces.iter().enumerate() {
        if used[i] {
            continue;
        }
        let Some(n1) = normals[i] else {
            faces.push(first.clone());
            continue;
        };

        for (j, second) in mesh.faces.iter().enumerate().skip(i + 1) {
            if used[j] {
                continue;
            }
            let Some(n2) = normals[j] else {
                continue;
            };

            if n1.dot(&n2).abs() > 1.0 - epsilon && shared_vertex_count(first, second) >= 2 {
                faces.push(Face::new(loop_union(first, second)));
                used[i] = true;
                used[j] = true;
            }
        }

        if !used[i] {
            faces.push(first.clone());
        }
    }

    let merged = mesh.faces.len() - faces.len();
    info!(
        "Merged {} coplanar faces ({} -> {})",
        merged,
        mesh.faces.len(),
        faces.len()
    );

    Ok(PolyMesh::from_parts(mesh.vertices.clone(), faces))
}

/// Number of entries of `a` that also appear in `b`.
fn shared_vertex_count(a: &Face, b: &Face) -> usize {
    a.vertices.iter().filter(|&&v| b.contains(v)).count()
}

/// Order-preserving union of two loops, first occurrence wins.
// TODO: order the merged loop around the shared normal; the union is only a
// valid polygon when the shared edge sits at the end of `a` and start of `b`.
fn loop_union(a: &Face, b: &Face) -> Vec<u32> {
    let mut out: Vec<u32> = Vec::with_capacity(a.len() + b.len());
    for &v in a.vertices.iter().chain(&b.vertices) {
        if !out.contains(&v) {
            out.push(v);
        }
    }
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn square() -> PolyMesh {
        PolyMesh::from_positions(
            &[
                [0.0, 0.0, 0.0],
                [1.0, 0.0, 0.0],
                [1.0, 1.0, 0.0],
                [0.0, 1.0, 0.0],
            ],
            vec![vec![0, 1, 2], vec![0, 2, 3]],
        )
    }

    #[test]
    fn square_halves_merge() {
        let merged = merge_coplanar_faces(&square(), 1e-5).unwrap();
        assert_eq!(merged.faces, vec![Face::from([0, 1, 2, 3])]);
        assert_eq!(merged.vertices, square().vertices);
    }

    #[test]
    fn opposite_winding_still_merges() {
        let mut mesh = square();
        mesh.faces[1] = Face::from([0, 3, 2]);
        let merged = merge_coplanar_faces(&mesh, 1e-5).unwrap();
        assert_eq!(merged.faces.len(), 1);
        assert_eq!(merged.faces[0].vertices, vec![0, 1, 2, 3]);
    }

    #[test]
    fn folded_faces_do_not_merge() {
        let mut mesh = square();
        mesh.vertices[3].position.z = 1.0;
        let merged = merge_coplanar_faces(&mesh, 1e-5).unwrap();
        assert_eq!(merged.faces, mesh.faces);
    }

    #[test]
    fn single_shared_vertex_is_not_enough() {
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
        assert_eq!(merge_coplanar_faces(&mesh, 1e-5).unwrap().faces.len(), 2);
    }

    #[test]
    fn one_face_can_seed_several_merges() {
        // Fan of three coplanar triangles around vertex 0
        let mesh = PolyMesh::from_positions(
            &[
                [0.0, 0.0, 0.0],
                [1.0, 0.0, 0.0],
                [1.0, 1.0, 0.0],
                [0.0, 1.0, 0.0],
                [-1.0, 1.0, 0.0],
            ],
            vec![vec![0, 1, 2], vec![0, 2, 3], vec![0, 1, 2, 4]],
        );
        let merged = merge_coplanar_faces(&mesh, 1e-5).unwrap();
        assert_eq!(
            merged.faces,
            vec![Face::from([0, 1, 2, 3]), Face::from([0, 1, 2, 4])]
        );
    }

    #[test]
    fn undefined_normal_never_merges() {
        let mut mesh = square();
        mesh.faces.push(Face::from([0, 1]));
        let merged = merge_coplanar_faces(&mesh, 1e-5).unwrap();
        assert_eq!(merged.faces.len(), 2);
        assert_eq!(merged.faces[1].vertices, vec![0, 1]);
    }
}
