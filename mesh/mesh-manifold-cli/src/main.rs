//! Edge-manifold mesh repair tool.
//!
//! # Commands
//!
//! - `mesh-manifold repair <INPUT>` - Split non-manifold edges and write one OBJ per component
//! - `mesh-manifold clean <INPUT> [OUTPUT]` - Degenerate filter, weld and coplanar merge
//! - `mesh-manifold info <INPUT>` - Print a validation report

mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Repair polygon meshes whose edges are shared by more than two faces.
#[derive(Parser)]
#[command(name = "mesh-manifold")]
#[command(version, about = "Edge-manifold mesh repair", long_about = None)]
struct Cli {
    /// Log level
    #[arg(short, long, value_enum, default_value = "info", global = true)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Split non-manifold edges and save each connected component
    Repair(commands::repair::RepairArgs),
    /// Clean a mesh without splitting it
    Clean(commands::clean::CleanArgs),
    /// Print mesh statistics and issues
    Info(commands::info::InfoArgs),
}

#[derive(Clone, Copy, ValueEnum)]
enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Self::TRACE,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Info => Self::INFO,
            LogLevel::Warn => Self::WARN,
            LogLevel::Error => Self::ERROR,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::from(cli.log_level))
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Repair(args) => commands::repair::execute(&args),
        Commands::Clean(args) => commands::clean::execute(&args),
        Commands::Info(args) => commands::info::execute(&args),
    }
}
