use thiserror::Error;

/// Errors that can occur while loading or analyzing a dataset.
#[derive(Error, Debug)]
pub enum EdaError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Shape mismatch: {0}")]
    ShapeMismatch(String),

    #[error("Type mismatch: {0}")]
    TypeMismatch(String),

    #[error("Empty file: {0}")]
    EmptyFile(String),
}

impl From<toml::de::Error> for EdaError {
    fn from(e: toml::de::Error) -> Self {
        EdaError::Config(e.to_string())
    }
}
