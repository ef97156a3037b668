//! Edge-manifold repair for polygon meshes.
//!
//! An edge shared by more than two faces makes a mesh non-manifold. This
//! crate finds such edges, gives the excess faces their own copies of the
//! edge's vertices, splits the result into face-connected components and
//! cleans each component of degenerate faces.
//!
//! Every pass borrows its input and returns a new mesh, except
//! [`compute_normals`], which fills a derived cache in place.
//!
//! This crate provides:
//! - Edge-to-face indexing and non-manifold detection
//! - Vertex splitting along non-manifold edges
//! - Connected component extraction with vertex compaction
//! - Degenerate face cleanup, vertex welding and coplanar merging
//! - Validation reports
//!
//! # Example
//!
//! ```
//! use mesh_types::PolyMesh;
//! use mesh_manifold::{RepairParams, run_pipeline, validate_mesh};
//!
//! // Three triangles hinged on one edge
//! let mesh = PolyMesh::from_positions(
//!     &[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.5, 1.0, 0.0], [0.5, 0.0, 1.0], [0.5, -1.0, 0.0]],
//!     vec![vec![0, 1, 2], vec![0, 1, 3], vec![0, 1, 4]],
//! );
//! assert!(!validate_mesh(&mesh)?.is_manifold);
//!
//! let output = run_pipeline(&mesh, &RepairParams::default())?;
//! for part in &output.components {
//!     assert!(validate_mesh(part)?.is_manifold);
//! }
//! println!("{}", output.summary);
//! # Ok::<(), mesh_manifold::RepairError>(())
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod clean;
mod compact;
mod components;
mod coplanar;
mod degenerate;
mod detect;
mod edge_index;
mod error;
mod normals;
mod params;
mod pipeline;
mod split;
mod validate;
mod weld;

pub use clean::{CleanReport, clean_component, clean_component_with_report, is_degenerate_face};
pub use components::{ComponentAnalysis, analyze_components, extract_components};
pub use coplanar::merge_coplanar_faces;
pub use degenerate::remove_degenerate_faces;
pub use detect::find_non_manifold_edges;
pub use edge_index::{Edge, EdgeIndex, EdgeKey, edge_key};
pub use error::{RepairError, RepairResult};
pub use normals::{compute_normals, face_normal};
pub use params::{
    CleanupParams, DEFAULT_AREA_TOLERANCE, DEFAULT_COPLANAR_EPSILON,
    DEFAULT_DEGENERATE_AREA_THRESHOLD, DEFAULT_WELD_THRESHOLD, RepairParams,
};
pub use pipeline::{
    CleanupOutput, CleanupSummary, RepairOutput, RepairSummary, cleanup_mesh, repair,
    repair_with_params, run_pipeline,
};
pub use split::split_non_manifold_edges;
pub use validate::{MeshReport, validate_mesh};
pub use weld::{WeldReport, merge_close_vertices, merge_close_vertices_with_report};
