//! Mesh file I/O for the manifold repair tools.
//!
//! Loads and saves [`PolyMesh`](mesh_types::PolyMesh) values as Wavefront
//! OBJ. Faces keep their full polygon loops, so quads and n-gons survive a
//! round trip. Only positions and face loops are read; texture coordinates
//! and normals are skipped.
//!
//! # Example
//!
//! ```no_run
//! use mesh_io::{load_obj, save_components};
//!
//! // Load a mesh
//! let mesh = load_obj("model.obj").unwrap();
//!
//! // Write it back out as numbered parts
//! save_components(&[mesh], "out", "model").unwrap();
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod obj;

pub use error::{IoError, IoResult};
pub use obj::{load_obj, parse_obj, read_obj, save_components, save_obj, to_obj_string, write_obj};
