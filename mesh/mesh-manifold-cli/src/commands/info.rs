//! `info` subcommand.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use mesh_manifold::{analyze_components, validate_mesh};

use super::load_input;

/// Arguments for `info`.
#[derive(Args)]
pub struct InfoArgs {
    /// Input OBJ file
    pub input: PathBuf,
}

/// Print a validation report for the input mesh.
pub fn execute(args: &InfoArgs) -> Result<()> {
    let mesh = load_input(&args.input)?;
    let report = validate_mesh(&mesh)
        .with_context(|| format!("failed to validate {}", args.input.display()))?;

    println!("{}", args.input.display());
    print!("{report}");

    let components = analyze_components(&mesh);
    if components.is_connected() {
        return Ok(());
    }
    if let Some(largest) = components.largest_component() {
        println!(
            "  Largest component: #{} with {} faces",
            largest + 1,
            components.largest_component_size()
        );
    }

    Ok(())
}
