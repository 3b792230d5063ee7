use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Missing input for dataset '{dataset}': {}", .path.display())]
    MissingInput { dataset: &'static str, path: PathBuf },

    #[error("Invalid input in {table}.{column}: {detail}")]
    InvalidInput {
        table: &'static str,
        column: String,
        detail: String,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PipelineError {
    pub fn invalid(table: &'static str, column: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::InvalidInput {
            table,
            column: column.into(),
            detail: detail.into(),
        }
    }

    pub fn is_missing_input(&self) -> bool {
        matches!(self, Self::MissingInput { .. })
    }
}

pub type PipelineResult<T> = Result<T, PipelineError>;
