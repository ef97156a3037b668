//! `repair` subcommand.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use mesh_manifold::{DEFAULT_AREA_TOLERANCE, RepairParams, run_pipeline};
use mesh_types::MeshTopology;
use tracing::info;

use super::{file_stem, load_input, parent_dir};

/// Arguments for `repair`.
#[derive(Args)]
pub struct RepairArgs {
    /// Input OBJ file
    pub input: PathBuf,

    /// Directory for the `<stem>_part<N>.obj` outputs (default: next to the input)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Weld vertices closer than this distance before repairing (default: no weld)
    #[arg(long)]
    pub weld: Option<f64>,

    /// Cross-product magnitude at or below which a triangle is dropped
    #[arg(long, default_value_t = DEFAULT_AREA_TOLERANCE)]
    pub area_tolerance: f64,

    /// Compute face normals on the output
    #[arg(long)]
    pub normals: bool,

    /// Clean components on a single thread
    #[arg(long)]
    pub sequential: bool,
}

impl RepairArgs {
    fn params(&self) -> RepairParams {
        let params = RepairParams::default()
            .with_area_tolerance(self.area_tolerance)
            .with_compute_normals(self.normals)
            .with_parallel(!self.sequential);

        match self.weld {
            Some(threshold) => params.with_weld_threshold(threshold),
            None => params.without_weld(),
        }
    }
}

/// Run the repair pipeline and write each component.
pub fn execute(args: &RepairArgs) -> Result<()> {
    let mesh = load_input(&args.input)?;
    info!(
        "Input mesh: {} vertices, {} faces",
        mesh.vertex_count(),
        mesh.face_count()
    );

    let output = run_pipeline(&mesh, &args.params())
        .with_context(|| format!("failed to repair {}", args.input.display()))?;

    let dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| parent_dir(&args.input));
    let paths = mesh_io::save_components(&output.components, &dir, &file_stem(&args.input))
        .with_context(|| format!("failed to write components to {}", dir.display()))?;

    println!("{}", output.summary);
    for path in &paths {
        println!("  {}", path.display());
    }

    Ok(())
}
