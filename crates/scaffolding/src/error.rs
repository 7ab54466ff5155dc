use model::error::ModelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("Failed to read settings file {path}: {source}")]
    SettingsRead {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown provider: {0}")]
    UnknownProvider(String),

    #[error("Invalid model: {0}")]
    Model(#[from] ModelError),
}
