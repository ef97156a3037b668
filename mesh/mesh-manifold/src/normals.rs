//! Face normal computation.

use mesh_types::{Face, PolyMesh};
use nalgebra::Vector3;

use crate::error::{RepairResult, check_indices};

/// Unit normal of a face from its first three vertices.
///
/// Returns `None` for loops shorter than 3 or when the leading triangle
/// has zero area.
///
/// # Panics
///
/// Panics if one of the first three loop entries is out of range.
/// [`compute_normals`] checks indices before calling this.
#[must_use]
pub fn face_normal(mesh: &PolyMesh, face: &Face) -> Option<Vector3<f64>> {
    mesh.leading_cross(face)
        .and_then(|cross| cross.try_normalize(0.0))
}

/// Store a unit normal on every face.
///
/// The normal is `normalize((v1 - v0) × (v2 - v0))` over the first three
/// loop entries. Faces where that is undefined get `None`. This is the one
/// pass that updates its mesh in place, since normals are a cache over the
/// positions.
///
/// # Errors
///
/// Returns [`RepairError::InvalidIndex`](crate::RepairError::InvalidIndex)
/// if a face references a vertex out of range. The mesh is left untouched
/// in that case.
///
/// # Example
///
/// ```
/// use mesh_types::PolyMesh;
/// use mesh_manifold::compute_normals;
///
/// let mut mesh = PolyMesh::from_positions(
///     &[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
///     vec![vec![0, 1, 2]],
/// );
/// compute_normals(&mut mesh)?;
///
/// let n = mesh.faces[0].normal.unwrap();
/// assert!((n.z - 1.0).abs() < 1e-12);
/// # Ok::<(), mesh_manifold::RepairError>(())
/// ```
pub fn compute_normals(mesh: &mut PolyMesh) -> RepairResult<()> {
    check_indices(mesh)?;

    let normals: Vec<_> = mesh
        .faces
        .iter()
        .map(|face| face_normal(mesh, face))
        .collect();

    for (face, normal) in mesh.faces.iter_mut().zip(normals) {
        face.normal = normal;
    }

    Ok(())
}
