//! Packcheck - Validate game content packs before packaging.

use anyhow::Context;
use clap::{Parser, Subcommand};
use packcheck_validator::{
    load_config, render_pack, render_run, ReportFormat, Validator, ValidatorConfig,
};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "packcheck")]
#[command(
    author,
    version,
    about = "Check pack manifests, icons and sound files before packaging"
)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (text, json)
    #[arg(long, global = true, default_value = "text")]
    format: String,

    /// JSON file overriding file names and icon size
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate every pack directory under a root
    Validate {
        /// Directory whose subdirectories are packs
        #[arg(long, default_value = ".")]
        root: PathBuf,
    },

    /// Validate a single pack directory
    Pack {
        /// Pack directory
        path: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();

    let format: ReportFormat = cli.format.parse()?;
    let config = match &cli.config {
        Some(path) => load_config(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => ValidatorConfig::default(),
    };
    let validator = Validator::new(config);

    let code = match cli.command {
        Commands::Validate { root } => {
            let report = validator.run(&root)?;
            print!("{}", render_run(&report, format)?);
            report.exit_code()
        }

        Commands::Pack { path } => {
            ensure_pack(&path)?;
            let report = validator.validate_pack(&path);
            print!("{}", render_pack(&report, format)?);
            report.exit_code()
        }
    };

    if code != 0 {
        info!("Validation failed");
        std::process::exit(code);
    }

    Ok(())
}

fn ensure_pack(path: &Path) -> packcheck_common::Result<()> {
    if path.is_dir() {
        Ok(())
    } else {
        Err(packcheck_common::Error::NotAPack(path.to_path_buf()))
    }
}
