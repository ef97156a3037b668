//! Area-based degenerate face filter.

use mesh_types::{Face, PolyMesh};
use tracing::debug;

use crate::error::{RepairResult, check_indices, check_tolerance};

/// Drop faces with fewer than three vertices or a polygon area below
/// `area_threshold`.
///
/// Area is fan-triangulated from the first vertex:
/// `Σ 0.5·|(v_i - v_0) × (v_{i+1} - v_0)|`. The comparison is strict, so a
/// threshold of `0.0` only removes short loops. Vertices are left in place;
/// run [`clean_component`](crate::clean_component) to drop unused ones.
///
/// Returns the filtered mesh and the number of faces removed.
///
/// # Errors
///
/// Returns [`RepairError::InvalidIndex`](crate::RepairError::InvalidIndex)
/// for out-of-range face indices, or
/// [`RepairError::InvalidTolerance`](crate::RepairError::InvalidTolerance)
/// for a negative or NaN threshold.
///
/// # Example
///
/// ```
/// use mesh_types::PolyMesh;
/// use mesh_manifold::remove_degenerate_faces;
///
/// let mesh = PolyMesh::from_positions(
///     &[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [2.0, 0.0, 0.0]],
///     vec![vec![0, 1, 2], vec![0, 1, 3]],
/// );
/// let (filtered, removed) = remove_degenerate_faces(&mesh, 1e-9)?;
///
/// assert_eq!(removed, 1);
/// assert_eq!(filtered.vertices.len(), 4);
/// # Ok::<(), mesh_manifold::RepairError>(())
/// ```
pub fn remove_degenerate_faces(
    mesh: &PolyMesh,
    area_threshold: f64,
) -> RepairResult<(PolyMesh, usize)> {
    check_tolerance("degenerate_area_threshold", area_threshold)?;
    check_indices(mesh)?;

    let faces: Vec<Face> = mesh
        .faces
        .iter()
        .filter(|face| face.len() >= 3 && mesh.fan_area(face) >= area_threshold)
        .cloned()
        .collect();

    let removed = mesh.faces.len() - faces.len();
    if removed > 0 {
        debug!("Removed {} faces below area {}", removed, area_threshold);
    }

    Ok((PolyMesh::from_parts(mesh.vertices.clone(), faces), removed))
}
