use solfund_client::ClientError;
use thiserror::Error;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Failed to read keypair {path}: {reason}")]
    Keypair { path: String, reason: String },

    #[error(transparent)]
    Client(#[from] ClientError),
}
