//! Incremental maintenance of a QR factorization under row insertion and
//! row deletion.
//!
//! Both operations rework an existing `(Q, R)` pair in place with a
//! sequence of plane rotations instead of re-decomposing, at
//! O(n²) to O(m·n) cost per call. The composed rotations of each call are
//! accumulated into an explicit orthogonal transform that callers can
//! inspect independently of `Q`.

use crate::error::{QrUpdateError, Result};
use crate::givens::GivensRotation;
use densemat::{Matrix, Scalar};

/// Update engine for a maintained QR factorization.
///
/// The engine itself is stateless between calls: it only owns scratch
/// buffers (grown to the largest dimensions seen) and the transform of
/// the most recent call. Each call either completes, leaving the caller's
/// `(Q, R)` pair satisfying `A' = Q'·R'` for the row-adjusted `A'`, or
/// fails before writing anything.
#[derive(Debug, Clone)]
pub struct QrUpdate<T> {
    /// Composed rotations of the last update call.
    u_tran: Matrix<T>,
    /// Staging buffer for the spliced/shrunk orthogonal factor.
    q_mod: Matrix<T>,
    /// Coordinates of a deleted row in the `Q` basis.
    q_row: Vec<T>,
}

impl<T: Scalar> QrUpdate<T> {
    /// Create an engine whose scratch grows on demand.
    pub fn new() -> Self {
        Self {
            u_tran: Matrix::zeros(0, 0),
            q_mod: Matrix::zeros(0, 0),
            q_row: Vec::new(),
        }
    }

    /// Create an engine with scratch preallocated for factorizations of
    /// up to `max_rows` rows.
    pub fn with_capacity(max_rows: usize) -> Self {
        let mut u_tran = Matrix::zeros(max_rows + 1, max_rows + 1);
        u_tran.reshape(0, 0);
        let mut q_mod = Matrix::zeros(max_rows + 1, max_rows + 1);
        q_mod.reshape(0, 0);
        Self {
            u_tran,
            q_mod,
            q_row: Vec::with_capacity(max_rows + 1),
        }
    }

    /// The orthogonal transform accumulated by the most recent update.
    ///
    /// After `add_row` this is the (m+1)×(m+1) rotation product `U` with
    /// `Q' = Qmod · Uᵗ`; after `delete_row` it is the m×m product that
    /// maps the deleted row's `Q` coordinates to the leading basis
    /// vector. Valid until the next call on this engine.
    pub fn u_tran(&self) -> &Matrix<T> {
        &self.u_tran
    }

    /// Insert `row` into the factorized system at `row_index`, adjusting
    /// `q` and `r` so that `Q'·R'` reconstructs the grown matrix.
    ///
    /// `r` must be the m×n upper-triangular factor (not re-validated) and
    /// grows to (m+1)×n; with `update_q` set, `q` must be the matching
    /// m×m orthogonal factor and grows to (m+1)×(m+1). Without
    /// `update_q`, `q` is neither read nor written and only the
    /// triangular factor and the transform are produced.
    ///
    /// `row_index` may be anywhere in `0..=m`; prepending and appending
    /// flow through the same splice.
    pub fn add_row(
        &mut self,
        q: &mut Matrix<T>,
        r: &mut Matrix<T>,
        row: &[T],
        row_index: usize,
        update_q: bool,
    ) -> Result<()> {
        let m = r.nrows();
        let n = r.ncols();

        if row.len() != n {
            return Err(QrUpdateError::RowLengthMismatch {
                expected: n,
                actual: row.len(),
            });
        }
        if row_index > m {
            return Err(QrUpdateError::IndexOutOfBounds {
                index: row_index,
                bound: m,
            });
        }
        if update_q {
            if !q.is_square() {
                return Err(QrUpdateError::NotSquare {
                    nrows: q.nrows(),
                    ncols: q.ncols(),
                });
            }
            if q.nrows() != m {
                return Err(QrUpdateError::DimensionMismatch {
                    expected_rows: m,
                    expected_cols: m,
                    actual_rows: q.nrows(),
                    actual_cols: q.ncols(),
                });
            }
        }

        let m1 = m + 1;
        self.u_tran.set_identity(m1);

        // Embed the incoming row above the triangle: R becomes the
        // (m+1)×n upper-Hessenberg matrix [row; R].
        r.resize_rows(m1);
        for i in (0..m).rev() {
            for j in 0..n {
                r[[i + 1, j]] = r[[i, j]];
            }
        }
        for (j, &v) in row.iter().enumerate() {
            r[[0, j]] = v;
        }

        if update_q {
            // Qmod: the old Q shifted right one column, a unit column in
            // front, and a unit row spliced in at the insertion index.
            self.q_mod.reshape(m1, m1);
            self.q_mod[[row_index, 0]] = T::one();
            for i in 0..row_index {
                for j in 0..m {
                    self.q_mod[[i, j + 1]] = q[[i, j]];
                }
            }
            for i in row_index..m {
                for j in 0..m {
                    self.q_mod[[i + 1, j + 1]] = q[[i, j]];
                }
            }
        }

        // One rotation per column folds the embedded row into the
        // triangle; the eliminated slot is written as an exact zero.
        for k in 0..n.min(m) {
            let (rot, merged) = GivensRotation::compute(r[[k, k]], r[[k + 1, k]]);
            r[[k, k]] = merged;
            r[[k + 1, k]] = T::zero();
            rot.rotate_rows(r, k, k + 1, k + 1);
            rot.rotate_rows(&mut self.u_tran, k, k + 1, 0);
            if update_q {
                rot.rotate_cols(&mut self.q_mod, k, k + 1);
            }
        }

        if update_q {
            q.copy_from(&self.q_mod);
        }
        Ok(())
    }

    /// Remove row `row_index` from the factorized system, adjusting `q`
    /// and `r` so that `Q'·R'` reconstructs the shrunk matrix.
    ///
    /// `q` must be the m×m orthogonal factor and `r` the m×n triangular
    /// factor. `q` supplies the deleted row's coordinates, so it is
    /// required even when `update_q` is false. With `update_q` set,
    /// `q` shrinks to (m−1)×(m−1); `r` always shrinks to (m−1)×n.
    pub fn delete_row(
        &mut self,
        q: &mut Matrix<T>,
        r: &mut Matrix<T>,
        row_index: usize,
        update_q: bool,
    ) -> Result<()> {
        let m = r.nrows();
        let n = r.ncols();

        if !q.is_square() {
            return Err(QrUpdateError::NotSquare {
                nrows: q.nrows(),
                ncols: q.ncols(),
            });
        }
        if q.nrows() != m {
            return Err(QrUpdateError::DimensionMismatch {
                expected_rows: m,
                expected_cols: m,
                actual_rows: q.nrows(),
                actual_cols: q.ncols(),
            });
        }
        if m <= 1 {
            return Err(QrUpdateError::TooFewRows { nrows: m });
        }
        if row_index >= m {
            return Err(QrUpdateError::IndexOutOfBounds {
                index: row_index,
                bound: m,
            });
        }

        let m1 = m - 1;
        self.u_tran.set_identity(m);

        self.q_row.clear();
        for j in 0..m {
            self.q_row.push(q[[row_index, j]]);
        }

        // Rotate the deleted row's coordinates onto the leading basis
        // vector, bottom-up. The same rotations turn R upper Hessenberg
        // and, applied to the columns of Q, make its leading column
        // canonical.
        for k in (0..m - 1).rev() {
            let (rot, merged) = GivensRotation::compute(self.q_row[k], self.q_row[k + 1]);
            self.q_row[k] = merged;
            self.q_row[k + 1] = T::zero();
            if k < n {
                rot.rotate_rows(r, k, k + 1, k);
            }
            rot.rotate_rows(&mut self.u_tran, k, k + 1, 0);
            if update_q {
                rot.rotate_cols(q, k, k + 1);
            }
        }

        // Dropping the leading row of the Hessenberg R restores the
        // triangle.
        for i in 0..m1 {
            for j in 0..n {
                r[[i, j]] = r[[i + 1, j]];
            }
        }
        r.resize_rows(m1);

        if update_q {
            // Drop the deleted row and the now-canonical leading column.
            self.q_mod.reshape(m1, m1);
            for i in 0..m {
                if i == row_index {
                    continue;
                }
                let di = if i < row_index { i } else { i - 1 };
                for j in 1..m {
                    self.q_mod[[di, j - 1]] = q[[i, j]];
                }
            }
            q.copy_from(&self.q_mod);
        }
        Ok(())
    }
}

impl<T: Scalar> Default for QrUpdate<T> {
    fn default() -> Self {
        Self::new()
    }
}
