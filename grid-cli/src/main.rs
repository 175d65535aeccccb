//! Gridforge command-line entry point.

use anyhow::Result;
use clap::Parser;
use grid_cli::{commands, CliArgs};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<()> {
    init_tracing();

    let args = CliArgs::parse();
    tracing::debug!("Using state file {}", args.state.display());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    commands::run(&args, &mut out)
}

/// Logs go to stderr so generated code on stdout can be piped.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,grid_core=debug,grid_codegen=debug"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(true)
        .with_line_number(true);

    if std::env::var("RUST_LOG_FORMAT").as_deref() == Ok("json") {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer.json())
            .init();
    } else {
        tracing_subscriber::registry().with(filter).with(fmt_layer).init();
    }
}
