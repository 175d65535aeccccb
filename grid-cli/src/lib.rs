//! # Gridforge CLI
//!
//! Command-line host for the grid layout composer. Keeps a persisted grid in
//! a JSON file and prints generated layout code to stdout.
//!
//! ## Usage
//!
//! ```bash
//! gridforge init --columns 4 --rows 3 --gap 12
//! gridforge replay edits.json
//! gridforge generate --tech material-ui
//! GRIDFORGE_TECH=raw-css gridforge generate --format standalone
//! ```
//!
//! ## Architecture
//!
//! - `CliArgs` - Command-line arguments parsed with clap
//! - `commands` - One function per subcommand, writing to any `io::Write`
//! - `script` - Replay scripts driving a `GridEditor`

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]

pub mod commands;
pub mod script;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use grid_codegen::Technology;
use grid_core::CodeFormat;

/// Default state file when neither `--state` nor `GRIDFORGE_STATE` is set.
pub const DEFAULT_STATE_FILE: &str = "gridforge.json";

/// Command-line arguments for gridforge.
#[derive(Debug, Clone, Parser)]
#[command(name = "gridforge")]
#[command(about = "Compose CSS grid layouts and generate framework code")]
#[command(version)]
pub struct CliArgs {
    /// Persisted state file
    #[arg(long, global = true, env = "GRIDFORGE_STATE", default_value = DEFAULT_STATE_FILE)]
    pub state: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Gridforge subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Write a fresh, empty grid to the state file
    Init {
        /// Number of columns (0-12)
        #[arg(long, default_value_t = grid_core::config::DEFAULT_COLUMNS)]
        columns: u32,

        /// Number of rows (0-12)
        #[arg(long, default_value_t = grid_core::config::DEFAULT_ROWS)]
        rows: u32,

        /// Gap between cells in pixels (0-100)
        #[arg(long, default_value_t = grid_core::config::DEFAULT_GAP)]
        gap: u32,

        /// Overwrite an existing state file
        #[arg(long)]
        force: bool,
    },

    /// Print generated code for the persisted grid
    Generate {
        /// Target technology
        #[arg(long, env = "GRIDFORGE_TECH", default_value_t = Technology::default())]
        tech: Technology,

        /// Output format (embedded/jsx or standalone/html); defaults to the persisted choice
        #[arg(long, value_parser = grid_codegen::parse_format)]
        format: Option<CodeFormat>,

        /// Omit item borders
        #[arg(long)]
        no_borders: bool,

        /// Use utility classes where the technology supports it
        #[arg(long)]
        tailwind: bool,
    },

    /// Apply a JSON script of editor actions and save the result
    Replay {
        /// Script file
        script: PathBuf,

        /// Canvas container width in pixels
        #[arg(long, default_value_t = grid_core::geometry::DEFAULT_CONTAINER_WIDTH)]
        width: f32,

        /// Canvas container height in pixels
        #[arg(long, default_value_t = grid_core::geometry::DEFAULT_CONTAINER_HEIGHT)]
        height: f32,

        /// Create 2x2 items on empty-cell clicks, as on small screens
        #[arg(long)]
        compact: bool,

        /// Print the result without saving
        #[arg(long)]
        dry_run: bool,
    },

    /// Summarize the persisted grid
    Inspect {
        /// Print the raw persisted JSON instead
        #[arg(long)]
        json: bool,
    },
}
