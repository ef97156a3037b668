//! Subcommand implementations.

pub mod clean;
pub mod info;
pub mod repair;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use mesh_types::PolyMesh;

/// Load an OBJ file, attaching the path to any error.
pub fn load_input(path: &Path) -> Result<PolyMesh> {
    mesh_io::load_obj(path).with_context(|| format!("failed to load {}", path.display()))
}

/// File stem of `path`, or `"mesh"` if it has none.
pub fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map_or_else(|| "mesh".to_string(), |s| s.to_string_lossy().into_owned())
}

/// Directory containing `path`, or the current directory.
pub fn parent_dir(path: &Path) -> PathBuf {
    path.parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf)
}
