// MeshLit - OBJ meshes to array literals
// Copyright (C) 2025 MeshLit Contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published
// by the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.

mod commands;
mod output;
mod settings;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use commands::*;
use meshlit_config::Config;
use meshlit_observability::{init_tracing_with_config, LogConfig};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "meshlit")]
#[command(version, about = "Turn OBJ meshes into Java array literals")]
#[command(
    long_about = "MeshLit reads the vertex and face records of a Wavefront OBJ file and prints
them as Java array literals, ready to paste into source code."
)]
#[command(propagate_version = true)]
#[command(author = "MeshLit Contributors")]
#[command(arg_required_else_help = false)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable logging
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Colored output (always|auto|never)
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Configuration file [default: ./meshlit.toml if present]
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log format (pretty|compact|json)
    #[arg(long, global = true, value_name = "FORMAT")]
    log_format: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the face index array
    Faces(FacesCmd),

    /// Print vertex and face arrays with a summary
    Geometry(GeometryCmd),

    /// Print listings, the face array and per-face validation
    Debug(DebugCmd),

    /// Show mesh statistics
    Inspect(InspectCmd),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle color output
    match cli.color.as_str() {
        "never" => set_colors(false),
        "always" => set_colors(true),
        "auto" => {
            // Auto-detect based on terminal capabilities
        }
        _ => {
            output::error(&format!("Invalid color option: {}", cli.color));
            std::process::exit(1);
        }
    }

    if let Err(e) = run(cli).await {
        output::error(&format!("Error: {:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

async fn run(cli: Cli) -> Result<()> {
    match &cli.command {
        Some(Commands::Faces(cmd)) => cmd.execute(prepare(&cli).await?).await,
        Some(Commands::Geometry(cmd)) => cmd.execute(prepare(&cli).await?).await,
        Some(Commands::Debug(cmd)) => cmd.execute(prepare(&cli).await?).await,
        Some(Commands::Inspect(cmd)) => cmd.execute(prepare(&cli).await?).await,
        Some(Commands::Version) => {
            print_version();
            Ok(())
        }
        Some(Commands::Completions { shell }) => {
            generate_completions(*shell);
            Ok(())
        }
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    }
}

/// Resolve configuration and install logging for a mesh command
async fn prepare(cli: &Cli) -> Result<Config> {
    let settings = settings::load(cli.config.as_deref(), cli.log_format.as_deref()).await?;

    // Initialize structured logging
    if !cli.quiet {
        let log_config = settings::log_config(&settings.config, cli.verbose)?;
        init_logging(log_config);
    }
    settings.log_source();

    Ok(settings.config)
}

fn set_colors(enabled: bool) {
    console::set_colors_enabled(enabled);
    console::set_colors_enabled_stderr(enabled);
}

fn init_logging(config: LogConfig) {
    // A subscriber may already be installed when embedded; keep going without one
    init_tracing_with_config(config).ok();
}

fn print_version() {
    println!("meshlit {}", env!("CARGO_PKG_VERSION"));
    println!("rust-version: {}", env!("CARGO_PKG_RUST_VERSION"));
    println!("license: {}", env!("CARGO_PKG_LICENSE"));
}

fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "meshlit", &mut io::stdout());
}
