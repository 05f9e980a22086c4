use std::path::PathBuf;

use thiserror::Error;

pub type ExportResult<T> = Result<T, ExportError>;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("invalid figure: {0}")]
    InvalidFigure(String),

    #[error("failed to serialize chart document: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write `{}`: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
