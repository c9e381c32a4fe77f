use thiserror::Error;

#[derive(Error, Debug)]
pub enum TallyError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No contestant named '{0}'")]
    NotFound(String),

    #[error("No contestants to export")]
    NothingToExport,
}

pub type TallyResult<T> = Result<T, TallyError>;
