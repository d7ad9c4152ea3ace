// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Colforge CLI

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colforge::cli::Reporter;
use colforge::{load_scene, ExportOptions, TreeExporter};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "colforge")]
#[command(about = "Colforge - scene to COL collision model exporter", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Export a scene description to a COL file
    Export {
        /// Input scene (JSON)
        scene: PathBuf,

        /// Output file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// COL format version (1, 2 or 3)
        #[arg(long = "col-version")]
        col_version: Option<u32>,

        /// Root collection to export
        #[arg(short, long)]
        collection: Option<String>,

        /// Only export selected objects
        #[arg(long)]
        only_selected: bool,

        /// Export options file (TOML)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Print the models a scene would export
    Inspect {
        /// Input scene (JSON)
        scene: PathBuf,

        /// COL format version (1, 2 or 3)
        #[arg(long = "col-version")]
        col_version: Option<u32>,

        /// Root collection to inspect
        #[arg(short, long)]
        collection: Option<String>,
    },

    /// Show version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match cli.command {
        Commands::Export {
            scene,
            output,
            col_version,
            collection,
            only_selected,
            config,
        } => {
            let mut options = load_options(config.as_deref())?;
            if let Some(version) = col_version {
                options.version = version;
            }
            if collection.is_some() {
                options.collection = collection;
            }
            if only_selected {
                options.only_selected = true;
            }
            if output.is_some() {
                options.file_name = output;
            }
            export_command(&scene, options)?;
        }
        Commands::Inspect {
            scene,
            col_version,
            collection,
        } => {
            let mut options = ExportOptions::load().context("Failed to load export options")?;
            if let Some(version) = col_version {
                options.version = version;
            }
            if collection.is_some() {
                options.collection = collection;
            }
            inspect_command(&scene, options)?;
        }
        Commands::Version => {
            println!("Colforge v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

fn load_options(config: Option<&Path>) -> Result<ExportOptions> {
    match config {
        Some(path) => {
            let mut options = ExportOptions::from_file(path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            options.apply_env();
            Ok(options)
        }
        None => ExportOptions::load().context("Failed to load export options"),
    }
}

fn export_command(scene_path: &Path, options: ExportOptions) -> Result<()> {
    if !scene_path.exists() {
        Reporter::report_error(&format!("Scene file not found: {}", scene_path.display()));
        std::process::exit(1);
    }

    let scene = load_scene(scene_path)
        .with_context(|| format!("Failed to load scene: {}", scene_path.display()))?;

    let target = options
        .file_name
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "memory".to_string());

    let exporter = TreeExporter::new(options);
    let start = std::time::Instant::now();
    let bytes = exporter.encode(&scene).context("Export failed")?;
    let duration = start.elapsed();

    if bytes.is_empty() {
        Reporter::report_warning("No collision data found in the selected collections");
    }

    match &exporter.options().file_name {
        Some(path) => {
            std::fs::write(path, &bytes)
                .with_context(|| format!("Failed to write {}", path.display()))?;
        }
        None => log::info!("no output file given; discarding {} bytes", bytes.len()),
    }

    Reporter::report_export(&target, bytes.len(), duration);
    Ok(())
}

fn inspect_command(scene_path: &Path, options: ExportOptions) -> Result<()> {
    let scene = load_scene(scene_path)
        .with_context(|| format!("Failed to load scene: {}", scene_path.display()))?;

    let models = TreeExporter::new(options)
        .build_models(&scene)
        .context("Failed to build collision models")?;

    if models.is_empty() {
        Reporter::report_warning("No collision data found in the selected collections");
    }
    for model in &models {
        Reporter::report_model(model);
    }
    Ok(())
}
