use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Host-side failures. The simulation itself cannot fail.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),

    #[error("cannot create log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("logger already initialized: {0}")]
    Logger(#[from] log::SetLoggerError),
}
