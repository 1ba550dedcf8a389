use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Config error: {0}")]
    Config(#[from] sm_config::ConfigError),

    #[error("{0}")]
    Client(#[from] sm_client::ClientError),

    #[error("{0}")]
    Board(#[from] sm_board::BoardError),

    #[error("{0}")]
    Core(#[from] sm_core::CoreError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("UUID parse error: {0}")]
    Uuid(#[from] uuid::Error),

    #[error("IO error writing {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unknown template: {0}")]
    UnknownTemplate(String),

    #[error("Usage error: {0}")]
    Usage(String),

    #[error("Logger error: {0}")]
    Logger(String),
}

pub type CliResult<T> = std::result::Result<T, CliError>;
