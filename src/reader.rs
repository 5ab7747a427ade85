use std::collections::VecDeque;
use std::io::BufRead;
use std::str::FromStr;

use crate::dense::DenseMatrix;
use crate::dims::Dims;
use crate::element::Element;
use crate::error::{MatrixError, MatrixResult};

/// Whitespace tokenizer over buffered input. Tokens may be spread across
/// any number of lines; tokens left over from one read feed the next.
pub struct TokenReader<B> {
    input: B,
    pending: VecDeque<String>,
}

impl<B: BufRead> TokenReader<B> {
    pub fn new(input: B) -> Self {
        Self {
            input,
            pending: VecDeque::new(),
        }
    }

    fn next_token(&mut self) -> MatrixResult<Option<String>> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
        Ok(self.pending.pop_front())
    }

    /// Read the next token and parse it.
    pub fn read_value<T: FromStr>(&mut self) -> MatrixResult<T> {
        match self.next_token()? {
            Some(token) => token
                .parse()
                .map_err(|_| MatrixError::InvalidValue { token }),
            None => Err(MatrixError::NotEnoughValues {
                expected: 1,
                got: 0,
            }),
        }
    }

    /// Read a shape as two signed counts; negative counts are rejected.
    pub fn read_dims(&mut self) -> MatrixResult<Dims> {
        let rows: i64 = self.read_value()?;
        let cols: i64 = self.read_value()?;
        Dims::from_signed(rows, cols)
    }

    /// Fill a freshly constructed matrix of the given shape with
    /// `rows * cols` values in row-major order.
    pub fn read_matrix<T>(&mut self, dims: Dims) -> MatrixResult<DenseMatrix<T>>
    where
        T: Element + FromStr,
    {
        let mut matrix = DenseMatrix::zeros(dims);
        let expected = dims.count();
        for n in 0..expected {
            let value = match self.read_value() {
                Ok(v) => v,
                Err(MatrixError::NotEnoughValues { .. }) => {
                    return Err(MatrixError::NotEnoughValues { expected, got: n })
                }
                Err(e) => return Err(e),
            };
            matrix[(n / dims.cols(), n % dims.cols())] = value;
        }
        Ok(matrix)
    }
}
