//! `clean` subcommand.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use mesh_manifold::{
    CleanupParams, DEFAULT_COPLANAR_EPSILON, DEFAULT_DEGENERATE_AREA_THRESHOLD,
    DEFAULT_WELD_THRESHOLD, cleanup_mesh,
};
use mesh_types::MeshTopology;
use tracing::info;

use super::{file_stem, load_input, parent_dir};

/// Arguments for `clean`.
#[derive(Args)]
pub struct CleanArgs {
    /// Input OBJ file
    pub input: PathBuf,

    /// Output OBJ file (default: `<stem>_cleaned.obj` next to the input)
    pub output: Option<PathBuf>,

    /// Polygon area below which a face is removed
    #[arg(long, default_value_t = DEFAULT_DEGENERATE_AREA_THRESHOLD)]
    pub area_threshold: f64,

    /// Distance below which vertices are welded
    #[arg(long, default_value_t = DEFAULT_WELD_THRESHOLD)]
    pub weld: f64,

    /// Slack on the normal dot product for coplanar merging
    #[arg(long, default_value_t = DEFAULT_COPLANAR_EPSILON)]
    pub coplanar_epsilon: f64,
}

impl CleanArgs {
    fn output_path(&self) -> PathBuf {
        self.output.clone().unwrap_or_else(|| {
            parent_dir(&self.input).join(format!("{}_cleaned.obj", file_stem(&self.input)))
        })
    }
}

/// Run the cleanup chain and write the result.
pub fn execute(args: &CleanArgs) -> Result<()> {
    let mesh = load_input(&args.input)?;
    info!(
        "Original mesh: {} vertices, {} faces",
        mesh.vertex_count(),
        mesh.face_count()
    );

    let params = CleanupParams::default()
        .with_degenerate_area_threshold(args.area_threshold)
        .with_weld_threshold(args.weld)
        .with_coplanar_epsilon(args.coplanar_epsilon);
    let output = cleanup_mesh(&mesh, &params)
        .with_context(|| format!("failed to clean {}", args.input.display()))?;
    info!(
        "Cleaned mesh: {} vertices, {} faces",
        output.mesh.vertex_count(),
        output.mesh.face_count()
    );

    let path = args.output_path();
    mesh_io::save_obj(&output.mesh, &path)
        .with_context(|| format!("failed to write {}", path.display()))?;

    println!("{}", output.summary);
    println!("  {}", path.display());
    Ok(())
}
