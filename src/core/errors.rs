use thiserror::Error;

#[derive(Error, Debug)]
pub enum RepasoError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to load file: {0}")]
    FailedToLoadFile(String),

    #[error("No record with id: {0}")]
    UnknownRecord(String),

    #[error("RepasoError: {0}")]
    Custom(String),
}

impl From<std::io::Error> for RepasoError {
    fn from(error: std::io::Error) -> Self {
        RepasoError::Io(Box::new(error))
    }
}
