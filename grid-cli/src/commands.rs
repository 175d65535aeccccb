//! Subcommand implementations.
//!
//! Each command loads the state file, does its work and writes human-readable
//! output to `out`. Logs go to stderr via tracing.

use std::io::Write;
use std::path::Path;

use anyhow::{bail, Context, Result};
use grid_codegen::{generate, GeneratorOptions, Technology};
use grid_core::{
    CodeFormat, FileStorage, GridConfig, GridEditor, GridState, PersistedState, StateStorage,
    ViewportClass,
};

use crate::{script, CliArgs, Command};

/// Run the parsed command line.
///
/// # Errors
///
/// Returns an error if the state file or script cannot be read or written.
pub fn run(args: &CliArgs, out: &mut impl Write) -> Result<()> {
    let storage = FileStorage::new(&args.state);
    match &args.command {
        Command::Init {
            columns,
            rows,
            gap,
            force,
        } => init(&storage, GridConfig::new(*columns, *rows, *gap), *force, out),
        Command::Generate {
            tech,
            format,
            no_borders,
            tailwind,
        } => {
            let persisted = storage.load_or_default();
            let mut options = GeneratorOptions::from(&persisted);
            if let Some(format) = format {
                options = options.with_format(*format);
            }
            if *no_borders {
                options = options.with_borders(false);
            }
            if *tailwind {
                options = options.with_utilities(true);
            }
            print_code(&persisted.grid_state, *tech, &options, out)
        }
        Command::Replay {
            script,
            width,
            height,
            compact,
            dry_run,
        } => {
            let viewport = if *compact {
                ViewportClass::Compact
            } else {
                ViewportClass::Regular
            };
            replay(&storage, script, (*width, *height), viewport, *dry_run, out)
        }
        Command::Inspect { json } => inspect(&storage, *json, out),
    }
}

/// Write an empty grid with `config` to the state file.
///
/// # Errors
///
/// Returns an error if the file exists and `force` is not set, or if it
/// cannot be written.
pub fn init(storage: &FileStorage, config: GridConfig, force: bool, out: &mut impl Write) -> Result<()> {
    let path = storage.path();
    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }

    let config = config.clamped_to_policy();
    let persisted = PersistedState::new(GridState::new(config));
    storage
        .save(&persisted)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    tracing::info!("Initialized grid at {}", path.display());
    writeln!(
        out,
        "Initialized {}x{} grid (gap {}px) at {}",
        config.columns,
        config.rows,
        config.gap,
        path.display()
    )?;
    Ok(())
}

/// Write generated code for `state`.
///
/// # Errors
///
/// Returns an error if `out` cannot be written.
pub fn print_code(
    state: &GridState,
    technology: Technology,
    options: &GeneratorOptions,
    out: &mut impl Write,
) -> Result<()> {
    tracing::debug!(
        "Generating {technology} ({}) for {} items",
        technology.effective_format(options.format),
        state.item_count()
    );
    let code = generate(state, technology, options);
    writeln!(out, "{code}")?;
    Ok(())
}

/// Apply a replay script to the persisted grid and save the result.
///
/// Output preferences stored alongside the grid are kept.
///
/// # Errors
///
/// Returns an error if the script cannot be read or parsed, or if the result
/// cannot be saved.
pub fn replay(
    storage: &FileStorage,
    script_path: &Path,
    container: (f32, f32),
    viewport: ViewportClass,
    dry_run: bool,
    out: &mut impl Write,
) -> Result<()> {
    let json = std::fs::read_to_string(script_path)
        .with_context(|| format!("Failed to read script {}", script_path.display()))?;
    let steps = script::parse(&json)
        .with_context(|| format!("Invalid replay script {}", script_path.display()))?;

    let mut persisted = storage.load_or_default();
    let mut editor = GridEditor::new(persisted.grid_state.clone()).with_viewport(viewport);
    editor.resize_container(container.0, container.1);

    let report = script::replay(&mut editor, &steps);
    writeln!(
        out,
        "Applied {} steps: {} controller events, {} grid changes, {} items",
        report.steps,
        report.events.len(),
        report.changes,
        editor.state().item_count()
    )?;

    persisted.grid_state = editor.state().clone();
    if dry_run {
        writeln!(out, "{}", persisted.to_json()?)?;
        return Ok(());
    }

    storage
        .save(&persisted)
        .with_context(|| format!("Failed to write {}", storage.path().display()))?;
    writeln!(out, "Saved {}", storage.path().display())?;
    Ok(())
}

/// Summarize the persisted grid.
///
/// # Errors
///
/// Returns an error if `out` cannot be written.
pub fn inspect(storage: &FileStorage, json: bool, out: &mut impl Write) -> Result<()> {
    let loaded = storage.load();
    if loaded.is_none() {
        tracing::warn!("No usable state at {}, showing defaults", storage.path().display());
    }
    let persisted = loaded.unwrap_or_default();

    if json {
        writeln!(out, "{}", persisted.to_json()?)?;
        return Ok(());
    }

    let state = &persisted.grid_state;
    let config = state.config;
    writeln!(
        out,
        "Grid: {} columns x {} rows, gap {}px",
        config.columns, config.rows, config.gap
    )?;
    writeln!(
        out,
        "Output: {}, borders {}, utility classes {}",
        persisted.code_format,
        on_off(persisted.with_styled_borders),
        on_off(persisted.with_tailwind)
    )?;
    writeln!(
        out,
        "Layout: {}",
        if state.is_empty() {
            "empty"
        } else if state.has_vertical_items() {
            "explicit placement"
        } else {
            "column flow"
        }
    )?;

    writeln!(
        out,
        "Items: {} ({})",
        state.item_count(),
        if state.is_consistent() { "valid" } else { "invalid" }
    )?;
    for (index, item) in state.sorted_items().into_iter().enumerate() {
        writeln!(
            out,
            "  Item {}: col {}-{}, row {}-{} ({}x{}) [{}]",
            index + 1,
            item.col_start,
            item.col_end() - 1,
            item.row_start,
            item.row_end() - 1,
            item.col_span,
            item.row_span,
            item.id
        )?;
    }

    if persisted.code_format == CodeFormat::Standalone {
        let html: Vec<_> = Technology::ALL
            .into_iter()
            .filter(|tech| tech.effective_format(CodeFormat::Standalone) == CodeFormat::Standalone)
            .map(Technology::slug)
            .collect();
        writeln!(out, "Standalone output available for: {}", html.join(", "))?;
    }
    Ok(())
}

fn on_off(flag: bool) -> &'static str {
    if flag {
        "on"
    } else {
        "off"
    }
}
