use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::Instant;

use canvas_snake::app::{self, Session};
use canvas_snake::error::AppError;
use canvas_snake::game::GameState;
use canvas_snake::terminal_runtime::{TerminalSession, install_panic_hook};
use clap::Parser;
use log::{LevelFilter, info};
use simplelog::{Config, WriteLogger};

/// Classic Snake on a 24x24 board. Arrows steer, Space restarts, Esc or q quits.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Seed for food placement, for a reproducible session.
    #[arg(long)]
    seed: Option<u64>,

    /// Write diagnostics to this file. Nothing is logged without it.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Verbosity of the log file.
    #[arg(long, default_value_t = LevelFilter::Info)]
    log_level: LevelFilter,
}

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path, cli.log_level)?;
    }

    install_panic_hook();

    let state = match cli.seed {
        Some(seed) => {
            info!("using food seed {seed}");
            GameState::new_with_seed(seed)
        }
        None => GameState::new(),
    };

    let mut terminal = TerminalSession::enter()?;
    let mut session = Session::new(state, Instant::now());
    app::run(&mut terminal, &mut session)
}

fn init_logging(path: &Path, level: LevelFilter) -> Result<(), AppError> {
    let file = File::create(path).map_err(|source| AppError::LogFile {
        path: path.to_path_buf(),
        source,
    })?;
    WriteLogger::init(level, Config::default(), file)?;
    Ok(())
}
