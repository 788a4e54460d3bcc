use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SecsumError {
    #[error("Check dataset missing: {}", .0.display())]
    MissingDataset(PathBuf),

    #[error("Check records carry no `{0}` field")]
    MissingField(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Document error: {0}")]
    Document(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
