use kira_types::error::KeygenError;
use thiserror::Error;

/// Errors surfaced by the command-line front end.
#[derive(Debug, Error)]
#[allow(clippy::enum_variant_names)]
pub enum CliError {
    #[error("config error: {reason}")]
    ConfigError { reason: String },

    #[error("{0}")]
    Keygen(#[from] KeygenError),

    #[error("prompt error: {0}")]
    PromptError(String),

    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
