use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("row index {index} out of range for table with {len} rows")]
    RowOutOfRange { index: usize, len: usize },

    #[error("unknown scale type: {0:?}")]
    UnknownScaleType(String),

    #[error("renderer failure: {0}")]
    Render(String),
}
