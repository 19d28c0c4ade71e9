//! Adjustable least-squares solving over a maintained QR factorization.

use crate::error::{QrUpdateError, Result};
use crate::householder::HouseholderQr;
use crate::update::QrUpdate;
use densemat::{Matrix, Scalar};

/// Solver over a factorized system matrix.
pub trait LinearSolver<T: Scalar> {
    /// Factorize `a` as the system matrix of subsequent solves.
    fn set_a(&mut self, a: &Matrix<T>) -> Result<()>;

    /// Solve the least-squares problem `min ‖A·x − b‖` column by column.
    ///
    /// `b` has one row per row of the current `A` and may carry multiple
    /// right-hand sides; `x` is reshaped to n×k.
    fn solve(&self, b: &Matrix<T>, x: &mut Matrix<T>) -> Result<()>;
}

/// A linear solver whose system matrix can grow or shrink by one row at a
/// time without refactorizing.
pub trait AdjustableLinearSolver<T: Scalar>: LinearSolver<T> {
    /// Insert `row` into the system matrix at `row_index`.
    fn add_row_to_a(&mut self, row: &[T], row_index: usize) -> Result<()>;

    /// Remove row `row_index` from the system matrix.
    fn remove_row_from_a(&mut self, row_index: usize) -> Result<()>;
}

/// Options for the adjustable QR solver
#[derive(Debug, Clone, Copy)]
pub struct SolverOptions {
    /// A diagonal of `R` below this magnitude is reported as singular
    /// instead of being divided by.
    pub singular_tol: f64,
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self {
            singular_tol: 1e-13,
        }
    }
}

/// Adjustable least-squares solver backed by an explicit `(Q, R)` pair.
///
/// `set_a` runs a full Householder decomposition once; afterwards the
/// system matrix exists only through its factors, which row adjustments
/// rework in place. `solve` reads nothing but the maintained factors, so
/// there is no derived state to invalidate.
#[derive(Debug, Clone)]
pub struct AdjLinearSolverQr<T> {
    decomp: HouseholderQr<T>,
    update: QrUpdate<T>,
    q: Matrix<T>,
    r: Matrix<T>,
    options: SolverOptions,
}

impl<T: Scalar> AdjLinearSolverQr<T> {
    /// Create a solver with default options; call
    /// [`set_a`](LinearSolver::set_a) before solving.
    pub fn new() -> Self {
        Self::with_options(SolverOptions::default())
    }

    /// Create a solver with explicit options.
    pub fn with_options(options: SolverOptions) -> Self {
        Self {
            decomp: HouseholderQr::new(),
            update: QrUpdate::new(),
            q: Matrix::zeros(0, 0),
            r: Matrix::zeros(0, 0),
            options,
        }
    }

    /// The maintained orthogonal factor.
    pub fn q(&self) -> &Matrix<T> {
        &self.q
    }

    /// The maintained triangular factor.
    pub fn r(&self) -> &Matrix<T> {
        &self.r
    }

    /// Row count of the current system matrix.
    pub fn num_rows(&self) -> usize {
        self.q.nrows()
    }

    /// Column count of the current system matrix.
    pub fn num_cols(&self) -> usize {
        self.r.ncols()
    }

    /// Conditioning signal: the smallest diagonal magnitude of `R`
    /// relative to the largest, in [0, 1]. Zero for an unset solver.
    pub fn quality(&self) -> f64 {
        let n = self.r.ncols().min(self.r.nrows());
        if n == 0 {
            return 0.0;
        }
        let mut min = f64::INFINITY;
        let mut max = 0.0f64;
        for i in 0..n {
            let d = self.r[[i, i]].abs_val();
            min = min.min(d);
            max = max.max(d);
        }
        if max == 0.0 {
            0.0
        } else {
            min / max
        }
    }

    fn ensure_set(&self) -> Result<()> {
        if self.q.nrows() == 0 {
            return Err(QrUpdateError::EmptyMatrix);
        }
        Ok(())
    }
}

impl<T: Scalar> Default for AdjLinearSolverQr<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Scalar> LinearSolver<T> for AdjLinearSolverQr<T> {
    fn set_a(&mut self, a: &Matrix<T>) -> Result<()> {
        let m = a.nrows();
        let n = a.ncols();
        if m == 0 || n == 0 {
            return Err(QrUpdateError::EmptyMatrix);
        }
        if m < n {
            return Err(QrUpdateError::UnderDetermined { nrows: m, ncols: n });
        }
        self.decomp.decompose(a)?;
        self.decomp.q_into(&mut self.q);
        self.decomp.r_into(&mut self.r);
        Ok(())
    }

    fn solve(&self, b: &Matrix<T>, x: &mut Matrix<T>) -> Result<()> {
        self.ensure_set()?;
        let m = self.q.nrows();
        let n = self.r.ncols();
        if b.nrows() != m {
            return Err(QrUpdateError::DimensionMismatch {
                expected_rows: m,
                expected_cols: b.ncols(),
                actual_rows: b.nrows(),
                actual_cols: b.ncols(),
            });
        }

        // reject a degenerate triangle before writing any output
        for i in 0..n {
            if self.r[[i, i]].abs_val() < self.options.singular_tol {
                return Err(QrUpdateError::SingularMatrix { index: i });
            }
        }

        let k = b.ncols();
        x.reshape(n, k);
        let mut y = vec![T::zero(); n];

        for col in 0..k {
            // the first n entries of Qᵗ·b
            for (i, yi) in y.iter_mut().enumerate() {
                let mut sum = T::zero();
                for l in 0..m {
                    sum = sum + self.q[[l, i]] * b[[l, col]];
                }
                *yi = sum;
            }

            // back-substitution on the triangular block
            for i in (0..n).rev() {
                let mut sum = y[i];
                for j in (i + 1)..n {
                    sum = sum - self.r[[i, j]] * x[[j, col]];
                }
                x[[i, col]] = sum / self.r[[i, i]];
            }
        }

        Ok(())
    }
}

impl<T: Scalar> AdjustableLinearSolver<T> for AdjLinearSolverQr<T> {
    fn add_row_to_a(&mut self, row: &[T], row_index: usize) -> Result<()> {
        self.ensure_set()?;
        self.update
            .add_row(&mut self.q, &mut self.r, row, row_index, true)
    }

    fn remove_row_from_a(&mut self, row_index: usize) -> Result<()> {
        self.ensure_set()?;
        let m = self.q.nrows();
        let n = self.r.ncols();
        // shrinking below n rows would leave the next solve undefined
        if m <= n {
            return Err(QrUpdateError::UnderDetermined {
                nrows: m.saturating_sub(1),
                ncols: n,
            });
        }
        self.update.delete_row(&mut self.q, &mut self.r, row_index, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use densemat::from_vec2d;

    #[test]
    fn test_set_a_rejects_empty_and_wide() {
        let mut solver = AdjLinearSolverQr::<f64>::new();
        assert!(matches!(
            solver.set_a(&Matrix::zeros(0, 0)),
            Err(QrUpdateError::EmptyMatrix)
        ));
        assert!(matches!(
            solver.set_a(&Matrix::zeros(2, 3)),
            Err(QrUpdateError::UnderDetermined { nrows: 2, ncols: 3 })
        ));
    }

    #[test]
    fn test_solve_before_set_a_fails() {
        let solver = AdjLinearSolverQr::<f64>::new();
        let b = Matrix::zeros(3, 1);
        let mut x = Matrix::zeros(0, 0);
        assert!(matches!(
            solver.solve(&b, &mut x),
            Err(QrUpdateError::EmptyMatrix)
        ));
    }

    #[test]
    fn test_solve_square_exact() {
        let a = from_vec2d(vec![vec![2.0, 1.0], vec![1.0, 3.0]]);
        let b = from_vec2d(vec![vec![5.0], vec![10.0]]);
        let mut solver = AdjLinearSolverQr::new();
        solver.set_a(&a).unwrap();

        let mut x = Matrix::zeros(0, 0);
        solver.solve(&b, &mut x).unwrap();

        // A·[1, 3]ᵗ = [5, 10]ᵗ
        assert!((x[[0, 0]] - 1.0).abs() < 1e-12);
        assert!((x[[1, 0]] - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_solve_rhs_row_count_checked() {
        let a = from_vec2d(vec![vec![1.0], vec![1.0]]);
        let mut solver = AdjLinearSolverQr::new();
        solver.set_a(&a).unwrap();

        let b = Matrix::zeros(3, 1);
        let mut x = Matrix::zeros(0, 0);
        assert!(matches!(
            solver.solve(&b, &mut x),
            Err(QrUpdateError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_singular_detected() {
        let a = from_vec2d(vec![
            vec![1.0, 2.0],
            vec![2.0, 4.0],
            vec![3.0, 6.0],
        ]);
        let mut solver = AdjLinearSolverQr::new();
        solver.set_a(&a).unwrap();

        let b = Matrix::zeros(3, 1);
        let mut x = Matrix::zeros(0, 0);
        let err = solver.solve(&b, &mut x);
        assert!(matches!(err, Err(QrUpdateError::SingularMatrix { .. })));
    }

    #[test]
    fn test_remove_guard_keeps_overdetermined() {
        let a = from_vec2d(vec![vec![1.0, 0.0], vec![0.0, 1.0]]);
        let mut solver = AdjLinearSolverQr::new();
        solver.set_a(&a).unwrap();

        assert!(matches!(
            solver.remove_row_from_a(0),
            Err(QrUpdateError::UnderDetermined { .. })
        ));
        assert_eq!(solver.num_rows(), 2);
    }

    #[test]
    fn test_quality_degrades_with_conditioning() {
        let well = from_vec2d(vec![vec![1.0, 0.0], vec![0.0, 1.0], vec![0.0, 0.0]]);
        let mut solver = AdjLinearSolverQr::new();
        solver.set_a(&well).unwrap();
        let good = solver.quality();

        let skew = from_vec2d(vec![vec![1.0, 0.0], vec![0.0, 1e-6], vec![0.0, 0.0]]);
        solver.set_a(&skew).unwrap();
        let bad = solver.quality();

        assert!(good > 0.9);
        assert!(bad < 1e-5);
        assert!(AdjLinearSolverQr::<f64>::new().quality() == 0.0);
    }
}
