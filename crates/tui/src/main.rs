mod cli;
mod renderer;

use std::fs::File;
use std::io::{Write, stdout};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use techcal_core::html::render_board_html;
use techcal_core::layout_board;
use techcal_core::parsers::parse_schedule_with_view;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let config = cli.layout_config();
    let view = cli.view_override()?;
    let data = std::fs::read(&cli.schedule)
        .with_context(|| format!("reading {}", cli.schedule.display()))?;
    let board = parse_schedule_with_view(&data, view)
        .with_context(|| format!("parsing {}", cli.schedule.display()))?;
    info!(
        technicians = board.len(),
        work_orders = board.block_count(),
        "loaded {}",
        cli.schedule.display()
    );

    if cli.html {
        let layout = layout_board(&board, &config);
        let mut out = stdout().lock();
        writeln!(out, "{}", render_board_html(&board, Some(&layout), &config))?;
        return Ok(());
    }

    renderer::run_tui(&board, &config)
}

/// Logs go to `--log-file` when given. Without one, only `--html` runs log
/// (to stderr); the interactive UI stays silent.
fn init_logging(cli: &Cli) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));

    if let Some(path) = &cli.log_file {
        let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .with_target(false)
            .init();
    } else if cli.html {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    }
    Ok(())
}
