use std::fmt::Display;
use std::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Sub, SubAssign};

use itertools::Itertools;

use crate::dims::{Cols, Dims, HasDims, Rows};
use crate::element::Element;
use crate::error::{MatrixError, MatrixResult};

/// Default cell width for rendered output.
pub const CELL_WIDTH: usize = 6;

/// A dense matrix of elements of type `T`. Dimensions are fixed at
/// construction; cell (i, j) lives at offset `i * cols + j` of a flat
/// row-major buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenseMatrix<T: Element> {
    rows: usize,
    cols: usize,
    /// The elements of this matrix, row-major
    els: Vec<T>,
}

impl<T: Element> DenseMatrix<T> {
    /// Create a new matrix with all elements set to zero.
    pub fn zeros<D>(dims: D) -> Self
    where
        D: Into<Dims>,
    {
        let Dims(Rows(r), Cols(c)) = dims.into();
        Self {
            rows: r,
            cols: c,
            els: vec![T::zero(); r * c],
        }
    }

    pub fn zeros_like(m: &Self) -> Self {
        Self::zeros(m.dims())
    }

    pub fn ones<D>(dims: D) -> Self
    where
        D: Into<Dims>,
    {
        let Dims(Rows(r), Cols(c)) = dims.into();
        Self {
            rows: r,
            cols: c,
            els: vec![T::one(); r * c],
        }
    }

    pub fn ones_like(m: &Self) -> Self {
        Self::ones(m.dims())
    }

    /// Create a new matrix of the given size from a flat row-major slice
    pub fn from_flat<D>(data: &[T], dims: D) -> Self
    where
        D: Into<Dims>,
    {
        let Dims(Rows(r), Cols(c)) = dims.into();
        assert_eq!(data.len(), r * c, "Data size does not match matrix size");
        Self {
            rows: r,
            cols: c,
            els: data.to_vec(),
        }
    }

    /// Create a new matrix of the given size from a nested array
    pub fn from_nested<const R: usize, const C: usize>(data: &[[T; C]; R]) -> Self {
        let mut matrix = Self::zeros((R, C));
        for (i, row) in data.iter().enumerate() {
            for (j, el) in row.iter().enumerate() {
                matrix.els[i * C + j] = *el;
            }
        }
        matrix
    }

    /// Create a new matrix from a slice of equal-length rows. An empty
    /// slice yields the 0x0 matrix.
    pub fn from_vec(data: &[Vec<T>]) -> Self {
        let rows = data.len();
        let cols = data.first().map_or(0, Vec::len);
        let mut matrix = Self::zeros((rows, cols));
        for (i, row) in data.iter().enumerate() {
            assert_eq!(row.len(), cols, "Rows must all have the same length");
            for (j, el) in row.iter().enumerate() {
                matrix.els[i * cols + j] = *el;
            }
        }
        matrix
    }

    /// The n-by-n matrix with ones on the main diagonal.
    pub fn identity(n: usize) -> Self {
        let mut matrix = Self::zeros((n, n));
        for i in 0..n {
            matrix.els[i * n + i] = T::one();
        }
        matrix
    }

    pub fn identity_like(m: &Self) -> Self {
        let mut matrix = Self::zeros(m.dims());
        for i in 0..m.rows().min(m.cols()) {
            matrix.els[i * m.cols() + i] = T::one();
        }
        matrix
    }

    fn offset(&self, row: usize, col: usize) -> usize {
        assert!(row < self.rows && col < self.cols);
        row * self.cols + col
    }

    /// One row of the matrix, as a slice of the backing buffer.
    pub fn row(&self, i: usize) -> &[T] {
        &self.els[i * self.cols..(i + 1) * self.cols]
    }

    /// Bounds-checked element read.
    pub fn get(&self, row: usize, col: usize) -> MatrixResult<T> {
        if row >= self.rows || col >= self.cols {
            return Err(MatrixError::IndexOutOfRange {
                row,
                col,
                dims: self.dims(),
            });
        }
        Ok(self.els[row * self.cols + col])
    }

    /// Bounds-checked element write.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> MatrixResult<()> {
        if row >= self.rows || col >= self.cols {
            return Err(MatrixError::IndexOutOfRange {
                row,
                col,
                dims: self.dims(),
            });
        }
        self.els[row * self.cols + col] = value;
        Ok(())
    }

    /// Element-wise sum. The shapes must match exactly.
    pub fn try_add(&self, other: &Self) -> MatrixResult<Self> {
        if self.dims() != other.dims() {
            return Err(MatrixError::DimensionMismatch {
                op: "add",
                lhs: self.dims(),
                rhs: other.dims(),
            });
        }
        let mut out = Self::zeros_like(self);
        for (o, (a, b)) in out.els.iter_mut().zip(self.els.iter().zip(&other.els)) {
            *o = *a + *b;
        }
        Ok(out)
    }

    /// Element-wise difference. The shapes must match exactly.
    pub fn try_sub(&self, other: &Self) -> MatrixResult<Self> {
        if self.dims() != other.dims() {
            return Err(MatrixError::DimensionMismatch {
                op: "subtract",
                lhs: self.dims(),
                rhs: other.dims(),
            });
        }
        let mut out = Self::zeros_like(self);
        for (o, (a, b)) in out.els.iter_mut().zip(self.els.iter().zip(&other.els)) {
            *o = *a - *b;
        }
        Ok(out)
    }

    /// Standard matrix product. `self.cols` must equal `other.rows`; the
    /// result is `self.rows` by `other.cols`, each cell accumulated over
    /// the shared index in order.
    pub fn try_matmul(&self, other: &Self) -> MatrixResult<Self> {
        if self.cols != other.rows {
            return Err(MatrixError::DimensionMismatch {
                op: "multiply",
                lhs: self.dims(),
                rhs: other.dims(),
            });
        }
        let mut out = Self::zeros((self.rows, other.cols));
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut acc = T::zero();
                for k in 0..self.cols {
                    acc += self.els[i * self.cols + k] * other.els[k * other.cols + j];
                }
                out.els[i * other.cols + j] = acc;
            }
        }
        Ok(out)
    }

    pub fn transpose(&self) -> Self {
        let mut result = Self::zeros(Dims(Rows(self.cols()), Cols(self.rows())));
        for i in 0..self.rows() {
            for j in 0..self.cols() {
                result.els[j * result.cols + i] = self.els[i * self.cols + j];
            }
        }
        result
    }

    /// Every cell multiplied by a scalar; the shape is unchanged.
    pub fn scaled(&self, s: T) -> Self {
        let mut out = self.clone();
        for el in out.els.iter_mut() {
            *el = *el * s;
        }
        out
    }
}

impl<T: Element + Display> DenseMatrix<T> {
    /// Render as one line per row, cells right-aligned in `width` columns
    /// and separated by a single space.
    pub fn render(&self, width: usize) -> String {
        (0..self.rows)
            .map(|i| {
                self.row(i)
                    .iter()
                    .map(|el| format!("{:>width$}", el))
                    .join(" ")
            })
            .join("\n")
    }
}

impl<T: Element + Display> Display for DenseMatrix<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render(CELL_WIDTH))
    }
}

impl<T: Element> HasDims for DenseMatrix<T> {
    fn rows(&self) -> usize {
        self.rows
    }

    fn cols(&self) -> usize {
        self.cols
    }

    fn dims(&self) -> Dims {
        (self.rows, self.cols).into()
    }
}

pub struct DenseMatrixIterator<'a, T: Element> {
    matrix: &'a DenseMatrix<T>,
    row: usize,
}

impl<'a, T: Element> Iterator for DenseMatrixIterator<'a, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.row < self.matrix.rows() {
            let result = self.matrix.row(self.row);
            self.row += 1;
            Some(result.to_vec())
        } else {
            None
        }
    }
}

pub struct DenseMatrixIntoIterator<T: Element> {
    matrix: DenseMatrix<T>,
    row: usize,
}

impl<T: Element> Iterator for DenseMatrixIntoIterator<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.row < self.matrix.rows() {
            let result = self.matrix.row(self.row);
            self.row += 1;
            Some(result.to_vec())
        } else {
            None
        }
    }
}

impl<T: Element> IntoIterator for DenseMatrix<T> {
    type Item = Vec<T>;
    type IntoIter = DenseMatrixIntoIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        DenseMatrixIntoIterator {
            matrix: self,
            row: 0,
        }
    }
}

impl<'a, T: Element> IntoIterator for &'a DenseMatrix<T> {
    type Item = Vec<T>;
    type IntoIter = DenseMatrixIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        DenseMatrixIterator {
            matrix: self,
            row: 0,
        }
    }
}

impl<T: Element> Index<(usize, usize)> for DenseMatrix<T> {
    type Output = T;

    fn index(&self, (x, y): (usize, usize)) -> &Self::Output {
        &self.els[self.offset(x, y)]
    }
}

impl<T: Element> Index<usize> for DenseMatrix<T> {
    type Output = [T];

    fn index(&self, x: usize) -> &Self::Output {
        self.row(x)
    }
}

impl<T: Element> IndexMut<usize> for DenseMatrix<T> {
    fn index_mut(&mut self, x: usize) -> &mut Self::Output {
        let cols = self.cols;
        &mut self.els[x * cols..(x + 1) * cols]
    }
}

impl<T: Element> IndexMut<(usize, usize)> for DenseMatrix<T> {
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut Self::Output {
        let i = self.offset(x, y);
        &mut self.els[i]
    }
}

#[auto_impl_ops::auto_ops]
impl<T: Element> AddAssign<&DenseMatrix<T>> for DenseMatrix<T>
where
    for<'x> &'x T: Add<Output = T>,
{
    fn add_assign(&mut self, other: &Self) {
        assert_eq!(self.rows(), other.rows());
        assert_eq!(self.cols(), other.cols());
        for (a, b) in self.els.iter_mut().zip(&other.els) {
            *a += *b;
        }
    }
}

#[auto_impl_ops::auto_ops]
impl<T: Element> SubAssign<&DenseMatrix<T>> for DenseMatrix<T>
where
    for<'x> &'x T: Sub<Output = T>,
{
    fn sub_assign(&mut self, other: &Self) {
        assert_eq!(self.rows(), other.rows());
        assert_eq!(self.cols(), other.cols());
        for (a, b) in self.els.iter_mut().zip(&other.els) {
            *a = *a - *b;
        }
    }
}

#[auto_impl_ops::auto_ops]
impl<'a, T: Element> MulAssign<&'a DenseMatrix<T>> for DenseMatrix<T>
where
    T: Element + Sized + for<'x> MulAssign<&'x T>,
{
    fn mul_assign(&mut self, other: &DenseMatrix<T>) {
        assert_eq!(self.cols(), other.rows());
        let mut result = DenseMatrix::zeros((self.rows(), other.cols()));
        for i in 0..self.rows() {
            for j in 0..other.cols() {
                for k in 0..self.cols() {
                    result[(i, j)] += self[(i, k)] * other[(k, j)];
                }
            }
        }
        *self = result;
    }
}

#[auto_impl_ops::auto_ops]
impl<'a, T: Element> MulAssign<&'a T> for DenseMatrix<T>
where
    T: Element + Sized + for<'x> MulAssign<&'x T>,
{
    fn mul_assign(&mut self, other: &T) {
        for el in self.els.iter_mut() {
            *el *= other;
        }
    }
}

impl<T: Element> From<DenseMatrix<T>> for Vec<Vec<T>> {
    fn from(matrix: DenseMatrix<T>) -> Self {
        (0..matrix.rows).map(|i| matrix.row(i).to_vec()).collect()
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, Rng, SeedableRng};
    use test_case::test_case;

    use super::*;

    fn random_matrix(rng: &mut StdRng, rows: usize, cols: usize) -> DenseMatrix<f64> {
        let mut m = DenseMatrix::zeros((rows, cols));
        for i in 0..rows {
            for j in 0..cols {
                m[(i, j)] = rng.gen_range(-10.0..10.0);
            }
        }
        m
    }

    fn assert_close(a: &DenseMatrix<f64>, b: &DenseMatrix<f64>, eps: f64) {
        assert_eq!(a.dims(), b.dims());
        for i in 0..a.rows() {
            for j in 0..a.cols() {
                assert!(
                    (a[(i, j)] - b[(i, j)]).abs() < eps,
                    "cell ({}, {}): {} vs {}",
                    i,
                    j,
                    a[(i, j)],
                    b[(i, j)]
                );
            }
        }
    }

    #[test]
    fn zeros() {
        let matrix = DenseMatrix::<f64>::zeros((2, 2));

        assert_eq!(matrix[(0, 0)], 0.0);
        assert_eq!(matrix[(0, 1)], 0.0);
        assert_eq!(matrix[(1, 0)], 0.0);
        assert_eq!(matrix[(1, 1)], 0.0);
    }

    #[test]
    fn zeros_empty_shapes() {
        let none = DenseMatrix::<f64>::zeros((0, 0));
        assert_eq!(none.rows(), 0);
        assert_eq!(none.cols(), 0);

        let no_cols = DenseMatrix::<f64>::zeros((3, 0));
        assert_eq!(no_cols.rows(), 3);
        assert_eq!(no_cols.cols(), 0);
    }

    #[test]
    fn from_flat() {
        let matrix = DenseMatrix::from_flat(&[1.0, 2.0, 3.0, 4.0], (2, 2));
        assert_eq!(matrix[(0, 0)], 1.0);
        assert_eq!(matrix[(0, 1)], 2.0);
        assert_eq!(matrix[(1, 0)], 3.0);
        assert_eq!(matrix[(1, 1)], 4.0);
    }

    #[test]
    fn from_nested() {
        let matrix = DenseMatrix::from_nested(&[[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(matrix[(0, 0)], 1.0);
        assert_eq!(matrix[(0, 1)], 2.0);
        assert_eq!(matrix[(1, 0)], 3.0);
        assert_eq!(matrix[(1, 1)], 4.0);
    }

    #[test]
    fn from_vec() {
        let matrix = DenseMatrix::from_vec(&[vec![1.0, 2.0], vec![3.0, 4.0]]);
        let back: Vec<Vec<f64>> = matrix.into();
        assert_eq!(back, vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
    }

    #[test]
    fn identity() {
        let matrix = DenseMatrix::<f64>::identity(2);
        assert_eq!(matrix[(0, 0)], 1.0);
        assert_eq!(matrix[(0, 1)], 0.0);
        assert_eq!(matrix[(1, 0)], 0.0);
        assert_eq!(matrix[(1, 1)], 1.0);
    }

    #[test]
    fn indexing() {
        let mut matrix = DenseMatrix::<f64>::zeros((2, 2));
        matrix[(0, 0)] = 255.0;
        matrix[(0, 1)] = 128.0;
        matrix[(1, 0)] = 0.0;
        matrix[(1, 1)] = 128.0;
        assert_eq!(matrix[(0, 0)], 255.0);
        assert_eq!(matrix[(0, 1)], 128.0);
        assert_eq!(matrix[(1, 0)], 0.0);
        assert_eq!(matrix[(1, 1)], 128.0);
    }

    #[test]
    fn get_and_set_in_bounds() {
        let mut matrix = DenseMatrix::<f64>::zeros((2, 3));
        matrix.set(1, 2, 7.5).unwrap();
        assert_eq!(matrix.get(1, 2).unwrap(), 7.5);
    }

    #[test_case(2, 0 ; "column in range, row out")]
    #[test_case(0, 3 ; "row in range, column out")]
    #[test_case(5, 5 ; "both out")]
    fn get_out_of_range(row: usize, col: usize) {
        let matrix = DenseMatrix::<f64>::zeros((2, 3));
        let err = matrix.get(row, col).unwrap_err();
        assert!(matches!(err, MatrixError::IndexOutOfRange { .. }));
    }

    #[test]
    fn set_out_of_range() {
        let mut matrix = DenseMatrix::<f64>::zeros((2, 3));
        let err = matrix.set(2, 0, 1.0).unwrap_err();
        assert!(matches!(err, MatrixError::IndexOutOfRange { .. }));
    }

    #[test]
    fn transpose_2x2() {
        let matrix = DenseMatrix::from_flat(&[1.0, 2.0, 3.0, 4.0], (2, 2));
        let result = matrix.transpose();
        assert_eq!(result[(0, 0)], 1.0);
        assert_eq!(result[(0, 1)], 3.0);
        assert_eq!(result[(1, 0)], 2.0);
        assert_eq!(result[(1, 1)], 4.0);
    }

    #[test]
    fn transpose_3x2() {
        let matrix = DenseMatrix::from_flat(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], (3, 2));
        let result = matrix.transpose();
        assert_eq!(result[(0, 0)], 1.0);
        assert_eq!(result[(0, 1)], 3.0);
        assert_eq!(result[(0, 2)], 5.0);
        assert_eq!(result[(1, 0)], 2.0);
        assert_eq!(result[(1, 1)], 4.0);
        assert_eq!(result[(1, 2)], 6.0);
    }

    #[test]
    fn transpose_twice_is_original() {
        let mut rng = StdRng::seed_from_u64(7);
        let matrix = random_matrix(&mut rng, 4, 3);
        assert_eq!(matrix.transpose().transpose(), matrix);
    }

    #[test]
    fn add() {
        let matrix1 = DenseMatrix::from_flat(&[1.0, 2.0, 3.0, 4.0], (2, 2));
        let matrix2 = DenseMatrix::from_flat(&[5.0, 6.0, 7.0, 8.0], (2, 2));
        let result = matrix1.try_add(&matrix2).unwrap();
        assert_eq!(result[(0, 0)], 6.0);
        assert_eq!(result[(0, 1)], 8.0);
        assert_eq!(result[(1, 0)], 10.0);
        assert_eq!(result[(1, 1)], 12.0);
    }

    #[test]
    fn add_operator() {
        let matrix1 = DenseMatrix::from_flat(&[1.0, 2.0, 3.0, 4.0], (2, 2));
        let matrix2 = DenseMatrix::from_flat(&[5.0, 6.0, 7.0, 8.0], (2, 2));
        let result = matrix1 + matrix2;
        assert_eq!(result[(0, 0)], 6.0);
        assert_eq!(result[(0, 1)], 8.0);
        assert_eq!(result[(1, 0)], 10.0);
        assert_eq!(result[(1, 1)], 12.0);
    }

    #[test]
    fn sub() {
        let matrix1 = DenseMatrix::from_flat(&[1.0, 2.0, 3.0, 4.0], (2, 2));
        let matrix2 = DenseMatrix::from_flat(&[5.0, 6.0, 7.0, 8.0], (2, 2));
        let result = matrix2.try_sub(&matrix1).unwrap();
        assert_eq!(result[(0, 0)], 4.0);
        assert_eq!(result[(0, 1)], 4.0);
        assert_eq!(result[(1, 0)], 4.0);
        assert_eq!(result[(1, 1)], 4.0);
    }

    #[test]
    fn add_then_sub_round_trips() {
        let mut rng = StdRng::seed_from_u64(11);
        let a = random_matrix(&mut rng, 3, 5);
        let b = random_matrix(&mut rng, 3, 5);
        let round_trip = a.try_add(&b).unwrap().try_sub(&b).unwrap();
        assert_close(&round_trip, &a, 1e-9);
    }

    #[test_case(2, 3, 3, 2 ; "transposed shapes")]
    #[test_case(2, 2, 3, 3 ; "different square sizes")]
    #[test_case(1, 4, 4, 1 ; "row against column")]
    fn add_shape_mismatch(r1: usize, c1: usize, r2: usize, c2: usize) {
        let a = DenseMatrix::<f64>::zeros((r1, c1));
        let b = DenseMatrix::<f64>::zeros((r2, c2));
        let err = a.try_add(&b).unwrap_err();
        assert!(matches!(err, MatrixError::DimensionMismatch { op: "add", .. }));
        let err = a.try_sub(&b).unwrap_err();
        assert!(matches!(
            err,
            MatrixError::DimensionMismatch { op: "subtract", .. }
        ));
    }

    #[test]
    fn mul_matrix() {
        let matrix1 = DenseMatrix::from_flat(&[1.0, 2.0, 3.0, 4.0], (2, 2));
        let matrix2 = DenseMatrix::from_flat(&[5.0, 6.0, 7.0, 8.0], (2, 2));
        let result = matrix1.try_matmul(&matrix2).unwrap();
        assert_eq!(result[(0, 0)], 19.0);
        assert_eq!(result[(0, 1)], 22.0);
        assert_eq!(result[(1, 0)], 43.0);
        assert_eq!(result[(1, 1)], 50.0);
    }

    #[test]
    fn mul_operator() {
        let matrix1 = DenseMatrix::from_flat(&[1.0, 2.0, 3.0, 4.0], (2, 2));
        let matrix2 = DenseMatrix::from_flat(&[5.0, 6.0, 7.0, 8.0], (2, 2));
        let result = matrix1 * matrix2;
        assert_eq!(result[(0, 0)], 19.0);
        assert_eq!(result[(0, 1)], 22.0);
        assert_eq!(result[(1, 0)], 43.0);
        assert_eq!(result[(1, 1)], 50.0);
    }

    #[test]
    fn mul_rectangular() {
        let matrix1 = DenseMatrix::from_flat(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], (2, 3));
        let matrix2 = DenseMatrix::from_flat(&[7.0, 8.0, 9.0, 10.0, 11.0, 12.0], (3, 2));
        let result = matrix1.try_matmul(&matrix2).unwrap();
        assert_eq!(result.dims(), (2, 2).into());
        assert_eq!(result[(0, 0)], 58.0);
        assert_eq!(result[(0, 1)], 64.0);
        assert_eq!(result[(1, 0)], 139.0);
        assert_eq!(result[(1, 1)], 154.0);
    }

    #[test]
    fn mul_by_identity_yields_same() {
        let mut rng = StdRng::seed_from_u64(3);
        let matrix = random_matrix(&mut rng, 3, 4);
        let result = matrix.try_matmul(&DenseMatrix::identity(4)).unwrap();
        assert_eq!(result, matrix);
    }

    #[test]
    fn mul_by_identity_like_yields_same() {
        let matrix = DenseMatrix::from_flat(&[1.0, 2.0, 3.0, 4.0], (2, 2));
        let identity = DenseMatrix::identity_like(&matrix);
        let result = matrix.clone() * identity;
        assert_eq!(result, matrix);
    }

    #[test_case(2, 3, 2, 3 ; "same shape, inner dims differ")]
    #[test_case(2, 2, 3, 3 ; "unequal squares")]
    fn mul_shape_mismatch(r1: usize, c1: usize, r2: usize, c2: usize) {
        let a = DenseMatrix::<f64>::zeros((r1, c1));
        let b = DenseMatrix::<f64>::zeros((r2, c2));
        let err = a.try_matmul(&b).unwrap_err();
        assert!(matches!(
            err,
            MatrixError::DimensionMismatch { op: "multiply", .. }
        ));
    }

    #[test]
    fn mul_associative_within_tolerance() {
        let mut rng = StdRng::seed_from_u64(23);
        let a = random_matrix(&mut rng, 3, 4);
        let b = random_matrix(&mut rng, 4, 2);
        let c = random_matrix(&mut rng, 2, 5);
        let left = a.try_matmul(&b).unwrap().try_matmul(&c).unwrap();
        let right = a.try_matmul(&b.try_matmul(&c).unwrap()).unwrap();
        assert_close(&left, &right, 1e-6);
    }

    #[test]
    fn mul_scalar() {
        let matrix = DenseMatrix::from_flat(&[1.0, 2.0, 3.0, 4.0], (2, 2));
        let result = matrix.scaled(2.0);
        assert_eq!(result[(0, 0)], 2.0);
        assert_eq!(result[(0, 1)], 4.0);
        assert_eq!(result[(1, 0)], 6.0);
        assert_eq!(result[(1, 1)], 8.0);
    }

    #[test]
    fn mul_scalar_operator() {
        let matrix = DenseMatrix::from_flat(&[1.0, 2.0, 3.0, 4.0], (2, 2));
        let result = matrix * 2.0;
        assert_eq!(result[(1, 1)], 8.0);
    }

    #[test]
    fn mul_scalar_one_and_zero() {
        let mut rng = StdRng::seed_from_u64(17);
        let matrix = random_matrix(&mut rng, 2, 4);
        assert_eq!(matrix.scaled(1.0), matrix);
        assert_eq!(matrix.scaled(0.0), DenseMatrix::zeros_like(&matrix));
    }

    #[test]
    fn results_do_not_alias_inputs() {
        let a = DenseMatrix::from_flat(&[1.0, 2.0, 3.0, 4.0], (2, 2));
        let b = DenseMatrix::from_flat(&[5.0, 6.0, 7.0, 8.0], (2, 2));
        let mut sum = a.try_add(&b).unwrap();
        sum[(0, 0)] = -1.0;
        assert_eq!(a[(0, 0)], 1.0);
        assert_eq!(b[(0, 0)], 5.0);
    }

    #[test]
    fn row_iteration() {
        let matrix = DenseMatrix::from_flat(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], (3, 2));
        let rows: Vec<Vec<f64>> = (&matrix).into_iter().collect();
        assert_eq!(rows, vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]]);
    }

    #[test]
    fn render_aligns_cells() {
        let matrix = DenseMatrix::from_flat(&[1.0, 2.0, 30.0, 4.0], (2, 2));
        assert_eq!(matrix.render(6), "     1      2\n    30      4");
    }

    #[test]
    fn display_uses_default_width() {
        let matrix = DenseMatrix::from_flat(&[6.0, 8.0], (1, 2));
        assert_eq!(format!("{}", matrix), "     6      8");
    }
}
