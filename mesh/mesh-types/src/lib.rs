//! Polygon mesh types for edge-manifold repair.
//!
//! This crate provides the foundational types shared by the repair core,
//! the OBJ reader/writer and the command-line tool:
//!
//! - [`Vertex`] - A point in 3D space
//! - [`Face`] - A closed loop of vertex indices with an optional cached normal
//! - [`PolyMesh`] - A polygon mesh with indexed vertices
//!
//! # Indexing
//!
//! A vertex's index is its slot in [`PolyMesh::vertices`]. Indices are
//! `u32` and always 0-based in memory, whatever convention a file format
//! uses on disk.
//!
//! # Face loops
//!
//! A face with `n` vertices has `n` edges: edge `i` joins `vertices[i]` to
//! `vertices[(i + 1) % n]`. Faces of any length are representable; a face
//! needs at least 3 distinct vertices to be valid.
//!
//! # Example
//!
//! ```
//! use mesh_types::{Face, MeshTopology, PolyMesh, Vertex};
//!
//! let mut mesh = PolyMesh::new();
//! mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
//! mesh.vertices.push(Vertex::from_coords(1.0, 0.0, 0.0));
//! mesh.vertices.push(Vertex::from_coords(1.0, 1.0, 0.0));
//! mesh.vertices.push(Vertex::from_coords(0.0, 1.0, 0.0));
//! mesh.faces.push(Face::new(vec![0, 1, 2, 3]));
//!
//! assert_eq!(mesh.face_count(), 1);
//! assert_eq!(mesh.faces[0].edges().count(), 4);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod face;
mod mesh;
mod traits;
mod vertex;

pub use face::Face;
pub use mesh::PolyMesh;
pub use traits::MeshTopology;
pub use vertex::Vertex;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
