use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FrameError {
    #[error("row index {index} is out of range for a frame with {rows} rows")]
    RowOutOfRange { index: usize, rows: usize },
    #[error("column not found: {0}")]
    UnknownColumn(String),
    #[error("entry not found: {0}")]
    UnknownEntry(String),
    #[error("malformed entry name: {0}")]
    MalformedEntry(String),
    #[error("duplicate column name: {0}")]
    DuplicateColumn(String),
    #[error("row {row} has {got} values, but the frame has {expected} columns")]
    ShapeMismatch {
        row: usize,
        expected: usize,
        got: usize,
    },
    #[error("values have {got} columns, but {expected} column names were given")]
    ColumnCountMismatch { expected: usize, got: usize },
}

pub type Result<T, E = FrameError> = core::result::Result<T, E>;
