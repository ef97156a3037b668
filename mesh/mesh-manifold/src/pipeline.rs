//! Composed repair and cleanup pipelines.

use mesh_types::PolyMesh;
use rayon::prelude::*;
use tracing::{debug, info};

use crate::clean::{CleanReport, clean_component_with_report};
use crate::components::extract_components;
use crate::coplanar::merge_coplanar_faces;
use crate::degenerate::remove_degenerate_faces;
use crate::detect::find_non_manifold_edges;
use crate::edge_index::EdgeIndex;
use crate::error::{RepairResult, check_indices, check_tolerance};
use crate::normals::compute_normals;
use crate::params::{CleanupParams, RepairParams};
use crate::split::split_non_manifold_edges;
use crate::weld::merge_close_vertices_with_report;

/// Repair a mesh with default parameters.
///
/// See [`repair_with_params`].
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
/// use mesh_manifold::repair;
///
/// // Three triangles sharing the edge (0, 1)
/// let mesh = PolyMesh::from_positions(
///     &[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.5, 1.0, 0.0], [0.5, 0.0, 1.0], [0.5, -1.0, 0.0]],
///     vec![vec![0, 1, 2], vec![0, 1, 3], vec![0, 1, 4]],
/// );
/// let parts = repair(&mesh)?;
///
/// assert_eq!(parts.len(), 2);
/// assert_eq!(parts[0].faces.len(), 2);
/// assert_eq!(parts[1].faces.len(), 1);
/// # Ok::<(), mesh_manifold::RepairError>(())
/// ```
pub fn repair(mesh: &PolyMesh) -> RepairResult<Vec<PolyMesh>> {
    repair_with_params(mesh, &RepairParams::default())
}

/// Make a mesh edge-manifold and split it into cleaned components.
///
/// 1. Build the edge index and find edges with more than two faces
/// 2. If there are none, return the input unchanged as the only result
/// 3. Otherwise split those edges and extract face-connected components
/// 4. Clean every component with `params.area_tolerance`
///
/// When cleanup drops a face that was the only edge link inside a
/// component, the cleaned component is extracted again so that every
/// result stays face-connected. Components that clean down to no faces
/// are dropped. With `params.parallel` the cleanup runs on the rayon
/// pool; output order does not depend on it. The weld pre-pass and
/// normals are handled by [`run_pipeline`], not here.
///
/// # Errors
///
/// Returns [`RepairError::InvalidIndex`](crate::RepairError::InvalidIndex)
/// for out-of-range face indices and
/// [`RepairError::InvalidTolerance`](crate::RepairError::InvalidTolerance)
/// for a bad `area_tolerance`.
pub fn repair_with_params(mesh: &PolyMesh, params: &RepairParams) -> RepairResult<Vec<PolyMesh>> {
    repair_counted(mesh, params).map(|(components, _)| components)
}

/// Counters gathered while repairing.
#[derive(Debug, Default)]
struct RepairCounts {
    non_manifold_edges: usize,
    vertices_duplicated: usize,
    clean: CleanReport,
}

fn repair_counted(
    mesh: &PolyMesh,
    params: &RepairParams,
) -> RepairResult<(Vec<PolyMesh>, RepairCounts)> {
    check_tolerance("area_tolerance", params.area_tolerance)?;
    check_indices(mesh)?;

    let mut counts = RepairCounts::default();
    let index = EdgeIndex::build(mesh);
    let non_manifold = find_non_manifold_edges(&index);

    if non_manifold.is_empty() {
        debug!("No non-manifold edges found");
        return Ok((vec![mesh.clone()], counts));
    }

    info!("Found {} non-manifold edges", non_manifold.len());
    counts.non_manifold_edges = non_manifold.len();
    let split = split_non_manifold_edges(mesh, &non_manifold)?;
    counts.vertices_duplicated = split.vertices.len() - mesh.vertices.len();
    let components = extract_components(&split)?;

    let tolerance = params.area_tolerance;
    let cleaned: Vec<RepairResult<(Vec<PolyMesh>, CleanReport)>> = if params.parallel {
        components
            .par_iter()
            .map(|component| clean_and_resplit(component, tolerance))
            .collect()
    } else {
        components
            .iter()
            .map(|component| clean_and_resplit(component, tolerance))
            .collect()
    };

    let mut output = Vec::with_capacity(cleaned.len());
    for result in cleaned {
        let (pieces, report) = result?;
        counts.clean.faces_removed += report.faces_removed;
        counts.clean.vertices_removed += report.vertices_removed;
        output.extend(pieces);
    }

    Ok((output, counts))
}

/// Clean one extracted component, re-extracting it if faces were dropped.
///
/// An empty result means the whole component was degenerate.
fn clean_and_resplit(
    component: &PolyMesh,
    tolerance: f64,
) -> RepairResult<(Vec<PolyMesh>, CleanReport)> {
    let (cleaned, report) = clean_component_with_report(component, tolerance)?;
    let pieces = if report.faces_removed == 0 {
        vec![cleaned]
    } else {
        extract_components(&cleaned)?
    };
    Ok((pieces, report))
}

/// Result of [`run_pipeline`].
#[derive(Debug, Clone, Default)]
pub struct RepairOutput {
    /// Cleaned, edge-manifold, face-connected components.
    pub components: Vec<PolyMesh>,
    /// What the pipeline did.
    pub summary: RepairSummary,
}

/// Counters reported by [`run_pipeline`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepairSummary {
    /// Number of vertices before repair.
    pub initial_vertices: usize,
    /// Number of faces before repair.
    pub initial_faces: usize,
    /// Vertices across all output components.
    pub final_vertices: usize,
    /// Faces across all output components.
    pub final_faces: usize,
    /// Vertices merged by the weld pre-pass.
    pub vertices_welded: usize,
    /// Edges found with more than two incident faces.
    pub non_manifold_edges: usize,
    /// Vertices added by splitting non-manifold edges.
    pub vertices_duplicated: usize,
    /// Degenerate faces dropped during component cleanup.
    pub degenerate_faces_removed: usize,
    /// Number of output components.
    pub component_count: usize,
}

impl RepairSummary {
    /// Check if any repairs were performed.
    #[must_use]
    pub fn had_changes(&self) -> bool {
        self.vertices_welded > 0
            || self.non_manifold_edges > 0
            || self.degenerate_faces_removed > 0
            || self.final_vertices != self.initial_vertices
    }
}

impl std::fmt::Display for RepairSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Repair: {} components, {} verts ({} welded, {} duplicated), {} faces ({} degenerate), {} non-manifold edges",
            self.component_count,
            self.final_vertices,
            self.vertices_welded,
            self.vertices_duplicated,
            self.final_faces,
            self.degenerate_faces_removed,
            self.non_manifold_edges
        )
    }
}

/// Run the full repair pipeline.
///
/// 1. Weld close vertices, if `params.weld_threshold` is set
/// 2. [`repair_with_params`]
/// 3. Compute face normals on every component, if `params.compute_normals`
///
/// # Errors
///
/// Returns [`RepairError::InvalidIndex`](crate::RepairError::InvalidIndex)
/// for out-of-range face indices and
/// [`RepairError::InvalidTolerance`](crate::RepairError::InvalidTolerance)
/// for a bad tolerance.
///
/// # Example
///
/// ```
/// use mesh_types::PolyMesh;
/// use mesh_manifold::{RepairParams, run_pipeline};
///
/// let mesh = PolyMesh::from_positions(
///     &[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [9.0, 9.0, 9.0]],
///     vec![vec![0, 1, 2]],
/// );
/// let output = run_pipeline(&mesh, &RepairParams::default().with_compute_normals(true))?;
///
/// // Already manifold: passed through whole, unused vertex included
/// assert_eq!(output.components.len(), 1);
/// assert_eq!(output.summary.final_vertices, 4);
/// assert!(output.components[0].faces[0].normal.is_some());
/// # Ok::<(), mesh_manifold::RepairError>(())
/// ```
pub fn run_pipeline(mesh: &PolyMesh, params: &RepairParams) -> RepairResult<RepairOutput> {
    let initial_vertices = mesh.vertices.len();
    let initial_faces = mesh.faces.len();

    let (welded, vertices_welded) = match params.weld_threshold {
        Some(threshold) => {
            let (welded, report) = merge_close_vertices_with_report(mesh, threshold)?;
            (Some(welded), report.vertices_merged)
        }
        None => (None, 0),
    };
    let source = welded.as_ref().unwrap_or(mesh);

    let (mut components, counts) = repair_counted(source, params)?;

    if params.compute_normals {
        for component in &mut components {
            compute_normals(component)?;
        }
    }

    let summary = RepairSummary {
        initial_vertices,
        initial_faces,
        final_vertices: components.iter().map(|c| c.vertices.len()).sum(),
        final_faces: components.iter().map(|c| c.faces.len()).sum(),
        vertices_welded,
        non_manifold_edges: counts.non_manifold_edges,
        vertices_duplicated: counts.vertices_duplicated,
        degenerate_faces_removed: counts.clean.faces_removed,
        component_count: components.len(),
    };
    info!("{}", summary);

    Ok(RepairOutput {
        components,
        summary,
    })
}

/// Result of [`cleanup_mesh`].
#[derive(Debug, Clone, Default)]
pub struct CleanupOutput {
    /// The cleaned mesh.
    pub mesh: PolyMesh,
    /// What the chain did.
    pub summary: CleanupSummary,
}

/// Counters reported by [`cleanup_mesh`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanupSummary {
    /// Number of faces before cleanup.
    pub initial_faces: usize,
    /// Number of faces after cleanup.
    pub final_faces: usize,
    /// Faces removed by the area filter.
    pub degenerate_faces_removed: usize,
    /// Vertices merged by welding.
    pub vertices_merged: usize,
    /// Net face reduction from coplanar merging.
    pub coplanar_faces_merged: usize,
}

impl CleanupSummary {
    /// Check if the chain changed anything.
    #[must_use]
    pub fn had_changes(&self) -> bool {
        self.degenerate_faces_removed > 0 || self.vertices_merged > 0 || self.coplanar_faces_merged > 0
    }
}

impl std::fmt::Display for CleanupSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Cleanup: {} -> {} faces ({} degenerate, {} coplanar merged), {} vertices merged",
            self.initial_faces,
            self.final_faces,
            self.degenerate_faces_removed,
            self.coplanar_faces_merged,
            self.vertices_merged
        )
    }
}

/// Run the standalone cleanup chain on a whole mesh.
///
/// 1. [`remove_degenerate_faces`](crate::remove_degenerate_faces)
/// 2. [`merge_close_vertices`](crate::merge_close_vertices)
/// 3. [`merge_coplanar_faces`](crate::merge_coplanar_faces)
///
/// No manifold repair or component splitting happens here.
///
/// # Errors
///
/// Returns [`RepairError::InvalidIndex`](crate::RepairError::InvalidIndex)
/// for out-of-range face indices and
/// [`RepairError::InvalidTolerance`](crate::RepairError::InvalidTolerance)
/// for a bad tolerance.
pub fn cleanup_mesh(mesh: &PolyMesh, params: &CleanupParams) -> RepairResult<CleanupOutput> {
    let (filtered, degenerate_faces_removed) =
        remove_degenerate_faces(mesh, params.degenerate_area_threshold)?;
    let (welded, weld) = merge_close_vertices_with_report(&filtered, params.weld_threshold)?;
    let merged = merge_coplanar_faces(&welded, params.coplanar_epsilon)?;

    let summary = CleanupSummary {
        initial_faces: mesh.faces.len(),
        final_faces: merged.faces.len(),
        degenerate_faces_removed,
        vertices_merged: weld.vertices_merged,
        coplanar_faces_merged: welded.faces.len() - merged.faces.len(),
    };
    info!("{}", summary);

    Ok(CleanupOutput {
        mesh: merged,
        summary,
    })
}
