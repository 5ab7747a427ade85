use std::fmt;

use crate::error::{MatrixError, MatrixResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rows(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cols(pub usize);

/// A matrix shape. Prints as `RxC`, which is also how shapes appear in
/// error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dims(pub Rows, pub Cols);

impl Dims {
    /// Validated construction from signed counts. Callers that parse user
    /// input land here, so a negative request surfaces as an error instead
    /// of wrapping around.
    pub fn from_signed(rows: i64, cols: i64) -> MatrixResult<Self> {
        if rows < 0 || cols < 0 {
            return Err(MatrixError::InvalidDimension { rows, cols });
        }
        Ok(Dims(Rows(rows as usize), Cols(cols as usize)))
    }

    pub fn rows(&self) -> usize {
        self.0 .0
    }

    pub fn cols(&self) -> usize {
        self.1 .0
    }

    /// Total number of cells in a matrix of this shape.
    pub fn count(&self) -> usize {
        self.rows() * self.cols()
    }

    pub fn is_square(&self) -> bool {
        self.rows() == self.cols()
    }
}

impl From<(usize, usize)> for Dims {
    fn from((r, c): (usize, usize)) -> Self {
        Dims(Rows(r), Cols(c))
    }
}

impl fmt::Display for Dims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows(), self.cols())
    }
}

pub trait HasDims {
    fn rows(&self) -> usize;
    fn cols(&self) -> usize;
    fn dims(&self) -> Dims;
}
