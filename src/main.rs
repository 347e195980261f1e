//! Binary entry point: parse flags, set up logging, open a fresh session and
//! drive the Ratatui event loop until the user exits.
use std::path::PathBuf;

use atr_conect::logging::init_logging;
use atr_conect::{run_app, App, Session};
use clap::Parser;
use tracing::info;

/// Command-line arguments for atr-conect.
#[derive(Parser, Debug)]
#[command(name = "atr-conect")]
#[command(about = "Connect independent artists with restaurants and bars in Buenos Aires")]
#[command(version)]
struct Args {
    /// Write log events to this file. Logging is off when unset.
    #[arg(long, env = "ATR_CONECT_LOG_FILE")]
    log_file: Option<PathBuf>,

    /// Log filter directives, e.g. `info` or `atr_conect=debug`.
    #[arg(long, default_value = "info", env = "ATR_CONECT_LOG")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.as_deref(), &args.log_level)?;
    info!("starting atr-conect");

    let session = Session::open()?;
    let mut app = App::new(session)?;
    run_app(&mut app)
}
