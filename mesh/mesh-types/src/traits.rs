//! Traits for mesh types.

/// Trait for types that provide mesh topology information.
///
/// This trait defines the minimal interface for a polygon mesh structure,
/// allowing passes and reports to work with different mesh representations.
pub trait MeshTopology {
    /// Get the number of vertices.
    fn vertex_count(&self) -> usize;

    /// Get the number of faces.
    fn face_count(&self) -> usize;

    /// Check if the mesh is empty.
    fn is_empty(&self) -> bool {
        self.vertex_count() == 0 || self.face_count() == 0
    }
}
