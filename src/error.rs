use thiserror::Error;

use crate::dims::Dims;

pub type MatrixResult<T> = Result<T, MatrixError>;

#[derive(Error, Debug)]
pub enum MatrixError {
    #[error("invalid dimension: {rows}x{cols} requested")]
    InvalidDimension { rows: i64, cols: i64 },

    #[error("index ({row}, {col}) out of range for a {dims} matrix")]
    IndexOutOfRange { row: usize, col: usize, dims: Dims },

    #[error("dimension mismatch: cannot {op} a {lhs} matrix and a {rhs} matrix")]
    DimensionMismatch {
        op: &'static str,
        lhs: Dims,
        rhs: Dims,
    },

    #[error("cannot parse `{token}` as a numeric value")]
    InvalidValue { token: String },

    #[error("input ended after {got} of {expected} values")]
    NotEnoughValues { expected: usize, got: usize },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
