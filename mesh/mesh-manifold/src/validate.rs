//! Mesh validation and health reporting.

use mesh_types::PolyMesh;

use crate::clean::is_degenerate_face;
use crate::components::analyze_components;
use crate::edge_index::EdgeIndex;
use crate::error::{RepairResult, check_indices};
use crate::params::DEFAULT_AREA_TOLERANCE;

/// Report of mesh validation results.
///
/// Counts the edge-topology problems the repair pipeline addresses, plus
/// the degenerate faces cleanup would drop.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MeshReport {
    /// Total number of vertices.
    pub vertex_count: usize,
    /// Total number of faces.
    pub face_count: usize,
    /// Number of distinct edges.
    pub edge_count: usize,

    /// Edges with exactly one incident face.
    pub boundary_edge_count: usize,
    /// Edges with more than two incident faces.
    pub non_manifold_edge_count: usize,
    /// Faces that component cleanup would remove.
    pub degenerate_face_count: usize,
    /// Number of face-connected components.
    pub component_count: usize,

    /// Whether every edge has at least two incident faces.
    pub is_watertight: bool,
    /// Whether no edge has more than two incident faces.
    pub is_manifold: bool,
}

impl MeshReport {
    /// Check if the mesh has any issues.
    ///
    /// Multiple components are not an issue on their own.
    #[must_use]
    pub fn has_issues(&self) -> bool {
        self.issue_count() > 0
    }

    /// Total number of problems found.
    #[must_use]
    pub fn issue_count(&self) -> usize {
        self.boundary_edge_count + self.non_manifold_edge_count + self.degenerate_face_count
    }
}

impl std::fmt::Display for MeshReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Mesh Report:")?;
        writeln!(f, "  Vertices: {}", self.vertex_count)?;
        writeln!(f, "  Faces: {}", self.face_count)?;
        writeln!(f, "  Edges: {}", self.edge_count)?;
        writeln!(f, "  Components: {}", self.component_count)?;
        writeln!(f)?;
        writeln!(f, "  Status:")?;
        writeln!(
            f,
            "    Watertight: {}",
            if self.is_watertight { "Yes" } else { "No" }
        )?;
        writeln!(
            f,
            "    Manifold: {}",
            if self.is_manifold { "Yes" } else { "No" }
        )?;

        if self.has_issues() {
            writeln!(f)?;
            writeln!(f, "  Issues:")?;
            if self.boundary_edge_count > 0 {
                writeln!(f, "    Boundary edges: {}", self.boundary_edge_count)?;
            }
            if self.non_manifold_edge_count > 0 {
                writeln!(
                    f,
                    "    Non-manifold edges: {}",
                    self.non_manifold_edge_count
                )?;
            }
            if self.degenerate_face_count > 0 {
                writeln!(f, "    Degenerate faces: {}", self.degenerate_face_count)?;
            }
        }

        Ok(())
    }
}

/// Validate a mesh and return a report of any issues.
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
/// use mesh_manifold::validate_mesh;
///
/// let mesh = PolyMesh::from_positions(
///     &[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
///     vec![vec![0, 1, 2]],
/// );
/// let report = validate_mesh(&mesh)?;
///
/// assert_eq!(report.face_count, 1);
/// assert_eq!(report.boundary_edge_count, 3); // Single triangle has 3 boundary edges
/// # Ok::<(), mesh_manifold::RepairError>(())
/// ```
pub fn validate_mesh(mesh: &PolyMesh) -> RepairResult<MeshReport> {
    check_indices(mesh)?;

    let index = EdgeIndex::build(mesh);
    let degenerate_face_count = mesh
        .faces
        .iter()
        .filter(|face| is_degenerate_face(mesh, face, DEFAULT_AREA_TOLERANCE))
        .count();

    Ok(MeshReport {
        vertex_count: mesh.vertices.len(),
        face_count: mesh.faces.len(),
        edge_count: index.len(),
        boundary_edge_count: index.boundary_edge_count(),
        non_manifold_edge_count: index.non_manifold_edge_count(),
        degenerate_face_count,
        component_count: analyze_components(mesh).component_count,
        is_watertight: index.is_watertight(),
        is_manifold: index.is_manifold(),
    })
}
