//! Per-component cleanup of degenerate faces and unused vertices.

use mesh_types::{Face, PolyMesh};
use tracing::debug;

use crate::compact::compact_faces;
use crate::error::{RepairResult, check_indices, check_tolerance};

/// Counts of what a cleanup pass removed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CleanReport {
    /// Faces dropped as degenerate.
    pub faces_removed: usize,
    /// Vertices dropped because no surviving face referenced them.
    pub vertices_removed: usize,
}

/// Check whether a face is degenerate under the cleanup rule.
///
/// A face is degenerate when it has fewer than 3 vertices, repeats any
/// vertex index, or is a triangle whose cross-product magnitude
/// `|(v1 - v0) × (v2 - v0)|` is at most `area_tolerance`. Polygons with
/// more than three distinct vertices are never tested for area.
///
/// # Panics
///
/// Panics if a triangle references a vertex out of range. The pipeline
/// passes validate indices first; see [`PolyMesh::first_invalid_index`].
#[must_use]
pub fn is_degenerate_face(mesh: &PolyMesh, face: &Face, area_tolerance: f64) -> bool {
    if face.len() < 3 || face.has_repeated_vertex() {
        return true;
    }
    if face.len() == 3 {
        return mesh
            .leading_cross(face)
            .is_some_and(|cross| cross.norm() <= area_tolerance);
    }
    false
}

/// Drop degenerate faces and unreferenced vertices from a component.
///
/// Surviving faces keep their order. The remaining vertices are compacted
/// to `0..k` in ascending order of their original index. The input is not
/// modified.
///
/// # Errors
///
/// Returns [`RepairError::InvalidIndex`](crate::RepairError::InvalidIndex)
/// for out-of-range face indices, or
/// [`RepairError::InvalidTolerance`](crate::RepairError::InvalidTolerance)
/// if `area_tolerance` is negative or NaN.
///
/// # Example
///
/// ```
/// use mesh_types::PolyMesh;
/// use mesh_manifold::{DEFAULT_AREA_TOLERANCE, clean_component};
///
/// let mesh = PolyMesh::from_positions(
///     &[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [9.0, 9.0, 9.0]],
///     vec![vec![0, 1], vec![0, 0, 0], vec![0, 1, 2]],
/// );
/// let clean = clean_component(&mesh, DEFAULT_AREA_TOLERANCE)?;
///
/// assert_eq!(clean.faces.len(), 1);
/// assert_eq!(clean.vertices.len(), 3);
/// # Ok::<(), mesh_manifold::RepairError>(())
/// ```
pub fn clean_component(mesh: &PolyMesh, area_tolerance: f64) -> RepairResult<PolyMesh> {
    clean_component_with_report(mesh, area_tolerance).map(|(clean, _)| clean)
}

/// Like [`clean_component`], also reporting what was removed.
///
/// # Errors
///
/// Same as [`clean_component`].
pub fn clean_component_with_report(
    mesh: &PolyMesh,
    area_tolerance: f64,
) -> RepairResult<(PolyMesh, CleanReport)> {
    check_tolerance("area_tolerance", area_tolerance)?;
    check_indices(mesh)?;

    let kept: Vec<&Face> = mesh
        .faces
        .iter()
        .filter(|face| !is_degenerate_face(mesh, face, area_tolerance))
        .collect();

    let faces_removed = mesh.faces.len() - kept.len();
    let clean = compact_faces(mesh, kept);
    let report = CleanReport {
        faces_removed,
        vertices_removed: mesh.vertices.len() - clean.vertices.len(),
    };

    if faces_removed > 0 {
        debug!(
            "Removed {} degenerate faces and {} vertices",
            report.faces_removed, report.vertices_removed
        );
    }

    Ok((clean, report))
}
