use thiserror::Error;

#[derive(Debug, Error)]
pub enum CellCycleError {
    #[error("cell count must be between 1 and {max}, got {requested}")]
    InvalidCellCount { requested: usize, max: usize },

    #[error("failed to encode run summary: {0}")]
    Summary(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CellCycleError>;
