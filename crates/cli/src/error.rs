use model::error::ModelError;
use scaffolding::error::ScaffoldError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read or write file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to load the model: {0}")]
    Model(#[from] ModelError),

    #[error("Scaffolding error: {0}")]
    Scaffold(#[from] ScaffoldError),

    #[error("Failed to serialize data to JSON: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
