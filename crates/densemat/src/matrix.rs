//! Dense row-major matrix storage.

use num_traits::{One, Zero};
use std::ops::{Index, IndexMut};

/// Simple 2D matrix backed by a row-major `Vec`.
///
/// Element `(i, j)` is stored at `data[i * ncols + j]` and accessed with
/// `m[[i, j]]`. Logical resizes reuse the backing allocation whenever its
/// capacity allows.
#[derive(Debug, Clone)]
pub struct Matrix<T> {
    data: Vec<T>,
    nrows: usize,
    ncols: usize,
}

impl<T: Clone> Matrix<T> {
    /// Create a new matrix from dimensions and initial value.
    pub fn from_elem(nrows: usize, ncols: usize, elem: T) -> Self {
        Self {
            data: vec![elem; nrows * ncols],
            nrows,
            ncols,
        }
    }

    /// Number of rows.
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns.
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Whether the matrix is square.
    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    /// Overwrite this matrix with the contents of `other`, taking its shape.
    ///
    /// Reuses the backing allocation when its capacity suffices.
    pub fn copy_from(&mut self, other: &Matrix<T>) {
        self.data.clear();
        self.data.extend_from_slice(&other.data);
        self.nrows = other.nrows;
        self.ncols = other.ncols;
    }
}

impl<T: Clone + Zero> Matrix<T> {
    /// Create a zeros matrix.
    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        Self {
            data: vec![T::zero(); nrows * ncols],
            nrows,
            ncols,
        }
    }

    /// Create a matrix from a function of the element position.
    pub fn from_fn(nrows: usize, ncols: usize, f: impl Fn(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(nrows * ncols);
        for i in 0..nrows {
            for j in 0..ncols {
                data.push(f(i, j));
            }
        }
        Self { data, nrows, ncols }
    }

    /// Resize to a new logical shape, discarding the previous contents.
    ///
    /// Every element of the reshaped matrix is zero. The backing allocation
    /// is reused when its capacity allows; positions are NOT preserved
    /// across the reshape.
    pub fn reshape(&mut self, nrows: usize, ncols: usize) {
        self.data.clear();
        self.data.resize(nrows * ncols, T::zero());
        self.nrows = nrows;
        self.ncols = ncols;
    }

    /// Change the row count, keeping the column count and existing rows.
    ///
    /// Rows are stored contiguously, so growing appends zero rows at the
    /// bottom and shrinking truncates bottom rows, without moving the
    /// surviving elements.
    pub fn resize_rows(&mut self, nrows: usize) {
        self.data.resize(nrows * self.ncols, T::zero());
        self.nrows = nrows;
    }

    /// Bulk copy of a rectangular block of `src` into this matrix.
    ///
    /// Copies the `num_rows` × `num_cols` block of `src` whose top-left
    /// corner is `(src_row, src_col)` to the position with top-left corner
    /// `(dst_row, dst_col)` in `self`.
    pub fn set_submatrix(
        &mut self,
        src: &Matrix<T>,
        src_row: usize,
        src_col: usize,
        dst_row: usize,
        dst_col: usize,
        num_rows: usize,
        num_cols: usize,
    ) {
        assert!(
            src_row + num_rows <= src.nrows && src_col + num_cols <= src.ncols,
            "set_submatrix: source block out of bounds"
        );
        assert!(
            dst_row + num_rows <= self.nrows && dst_col + num_cols <= self.ncols,
            "set_submatrix: destination block out of bounds"
        );
        for i in 0..num_rows {
            for j in 0..num_cols {
                self[[dst_row + i, dst_col + j]] = src[[src_row + i, src_col + j]].clone();
            }
        }
    }
}

impl<T: Clone + Zero + One> Matrix<T> {
    /// Create an identity matrix.
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m[[i, i]] = T::one();
        }
        m
    }

    /// Overwrite this matrix with the n × n identity, reshaping as needed.
    pub fn set_identity(&mut self, n: usize) {
        self.reshape(n, n);
        for i in 0..n {
            self[[i, i]] = T::one();
        }
    }
}

impl<T> Index<[usize; 2]> for Matrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, idx: [usize; 2]) -> &Self::Output {
        &self.data[idx[0] * self.ncols + idx[1]]
    }
}

impl<T> IndexMut<[usize; 2]> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, idx: [usize; 2]) -> &mut Self::Output {
        &mut self.data[idx[0] * self.ncols + idx[1]]
    }
}

/// Create a zeros matrix with given dimensions.
pub fn zeros<T: Clone + Zero>(nrows: usize, ncols: usize) -> Matrix<T> {
    Matrix::zeros(nrows, ncols)
}

/// Create an identity matrix.
pub fn eye<T: Clone + Zero + One>(n: usize) -> Matrix<T> {
    Matrix::identity(n)
}

/// Create a matrix from a 2D vector (row-major).
pub fn from_vec2d<T: Clone + Zero>(data: Vec<Vec<T>>) -> Matrix<T> {
    let nrows = data.len();
    let ncols = if nrows > 0 { data[0].len() } else { 0 };
    let mut m = zeros(nrows, ncols);
    for i in 0..nrows {
        assert_eq!(data[i].len(), ncols, "from_vec2d: ragged rows");
        for j in 0..ncols {
            m[[i, j]] = data[i][j].clone();
        }
    }
    m
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_basic() {
        let mut m = zeros::<f64>(3, 3);
        m[[0, 0]] = 1.0;
        m[[1, 1]] = 2.0;
        m[[2, 2]] = 3.0;

        assert_eq!(m[[0, 0]], 1.0);
        assert_eq!(m[[1, 1]], 2.0);
        assert_eq!(m[[2, 2]], 3.0);
        assert_eq!(m[[0, 1]], 0.0);
    }

    #[test]
    fn test_identity() {
        let m = eye::<f64>(3);
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(m[[i, j]], if i == j { 1.0 } else { 0.0 });
            }
        }
        assert!(m.is_square());
    }

    #[test]
    fn test_from_vec2d() {
        let m = from_vec2d(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        assert_eq!(m.nrows(), 2);
        assert_eq!(m.ncols(), 3);
        assert_eq!(m[[0, 2]], 3.0);
        assert_eq!(m[[1, 0]], 4.0);
        assert!(!m.is_square());
    }

    #[test]
    fn test_from_fn() {
        let m = Matrix::from_fn(2, 3, |i, j| (i * 3 + j) as f64);
        assert_eq!(m[[0, 0]], 0.0);
        assert_eq!(m[[1, 2]], 5.0);
    }

    #[test]
    fn test_reshape_discards_and_zeroes() {
        let mut m = from_vec2d(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        m.reshape(3, 2);
        assert_eq!(m.nrows(), 3);
        assert_eq!(m.ncols(), 2);
        for i in 0..3 {
            for j in 0..2 {
                assert_eq!(m[[i, j]], 0.0);
            }
        }
    }

    #[test]
    fn test_resize_rows_preserves_existing() {
        let mut m = from_vec2d(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        m.resize_rows(4);
        assert_eq!(m.nrows(), 4);
        assert_eq!(m[[0, 1]], 2.0);
        assert_eq!(m[[1, 0]], 3.0);
        assert_eq!(m[[2, 0]], 0.0);
        assert_eq!(m[[3, 1]], 0.0);

        m.resize_rows(1);
        assert_eq!(m.nrows(), 1);
        assert_eq!(m[[0, 0]], 1.0);
    }

    #[test]
    fn test_set_submatrix() {
        let src = from_vec2d(vec![
            vec![1.0, 2.0, 3.0],
            vec![4.0, 5.0, 6.0],
            vec![7.0, 8.0, 9.0],
        ]);
        let mut dst = zeros::<f64>(4, 4);
        dst.set_submatrix(&src, 1, 1, 0, 2, 2, 2);
        assert_eq!(dst[[0, 2]], 5.0);
        assert_eq!(dst[[0, 3]], 6.0);
        assert_eq!(dst[[1, 2]], 8.0);
        assert_eq!(dst[[1, 3]], 9.0);
        assert_eq!(dst[[0, 0]], 0.0);
    }

    #[test]
    #[should_panic(expected = "set_submatrix")]
    fn test_set_submatrix_out_of_bounds() {
        let src = zeros::<f64>(2, 2);
        let mut dst = zeros::<f64>(2, 2);
        dst.set_submatrix(&src, 0, 0, 1, 1, 2, 2);
    }

    #[test]
    fn test_copy_from() {
        let src = from_vec2d(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        let mut dst = zeros::<f64>(5, 5);
        dst.copy_from(&src);
        assert_eq!(dst.nrows(), 2);
        assert_eq!(dst.ncols(), 2);
        assert_eq!(dst[[1, 1]], 4.0);
    }

    #[test]
    fn test_set_identity_reuses() {
        let mut m = from_vec2d(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        m.set_identity(3);
        assert_eq!(m.nrows(), 3);
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(m[[i, j]], if i == j { 1.0 } else { 0.0 });
            }
        }
    }
}
