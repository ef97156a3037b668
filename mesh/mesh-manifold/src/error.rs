//! Error types for manifold repair operations.

use mesh_types::PolyMesh;
use thiserror::Error;

/// Result type for repair operations.
pub type RepairResult<T> = Result<T, RepairError>;

/// Errors that can occur during manifold repair.
///
/// Only malformed input is an error. Degenerate faces are filtered and
/// counted, and non-manifold edges are what the passes exist to repair.
#[derive(Debug, Error)]
pub enum RepairError {
    /// A face references a vertex outside the mesh.
    #[error("face {face} references vertex {index} (mesh has {vertex_count} vertices)")]
    InvalidIndex {
        /// Index of the offending face.
        face: usize,
        /// The invalid vertex index.
        index: u32,
        /// Total number of vertices in the mesh.
        vertex_count: usize,
    },

    /// A tolerance was negative or NaN.
    #[error("invalid {name}: {value} (must be a non-negative number)")]
    InvalidTolerance {
        /// Name of the tolerance parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// Vertex duplication would exceed the `u32` index range.
    #[error("vertex count {count} exceeds the u32 index range")]
    IndexOverflow {
        /// Vertex count that could not be indexed.
        count: usize,
    },
}

/// Reject meshes whose faces reference vertices out of range.
pub(crate) fn check_indices(mesh: &PolyMesh) -> RepairResult<()> {
    match mesh.first_invalid_index() {
        Some((face, index)) => Err(RepairError::InvalidIndex {
            face,
            index,
            vertex_count: mesh.vertices.len(),
        }),
        None => Ok(()),
    }
}

/// Reject tolerances that are negative or NaN.
pub(crate) fn check_tolerance(name: &'static str, value: f64) -> RepairResult<()> {
    if value.is_nan() || value < 0.0 {
        return Err(RepairError::InvalidTolerance { name, value });
    }
    Ok(())
}
