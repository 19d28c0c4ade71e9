//! Error types for qrupdate

use thiserror::Error;

/// Errors that can occur during factorization updates and solves
#[derive(Debug, Error)]
pub enum QrUpdateError {
    /// Row index outside the valid range for the operation
    #[error("row index {index} is out of bounds for {bound} rows")]
    IndexOutOfBounds { index: usize, bound: usize },

    /// Matrix shape differs from what the operation requires
    #[error("dimension mismatch: expected ({expected_rows}, {expected_cols}), got ({actual_rows}, {actual_cols})")]
    DimensionMismatch {
        expected_rows: usize,
        expected_cols: usize,
        actual_rows: usize,
        actual_cols: usize,
    },

    /// Supplied row has the wrong number of entries
    #[error("row length mismatch: expected {expected} entries, got {actual}")]
    RowLengthMismatch { expected: usize, actual: usize },

    /// A square matrix was required
    #[error("matrix must be square, got ({nrows}, {ncols})")]
    NotSquare { nrows: usize, ncols: usize },

    /// Fewer rows than columns: least squares is not defined here
    #[error("system is under-determined: {nrows} rows < {ncols} columns")]
    UnderDetermined { nrows: usize, ncols: usize },

    /// Operation on a matrix with no rows or columns
    #[error("matrix is empty")]
    EmptyMatrix,

    /// Deleting would leave no rows in the factorization
    #[error("cannot remove a row from a factorization with {nrows} row(s)")]
    TooFewRows { nrows: usize },

    /// Near-zero diagonal encountered during back-substitution
    #[error("matrix is numerically singular at diagonal {index}")]
    SingularMatrix { index: usize },
}

/// Result type for qrupdate operations
pub type Result<T> = std::result::Result<T, QrUpdateError>;
