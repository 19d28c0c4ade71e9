//! Full QR decomposition via Householder reflections.
//!
//! This is the factorization provider consumed by the adjustable solver:
//! it produces the initial `(Q, R)` pair that the update engine then
//! maintains under row insertions and deletions.

use crate::error::{QrUpdateError, Result};
use densemat::{Matrix, Scalar};

/// QR decomposition `A = Q * R` with compact reflector storage.
///
/// Householder vectors are stored below the diagonal of the working
/// matrix, with the diagonal of `R` kept separately. `Q` is materialized
/// on demand as a full m×m orthogonal matrix, which is what the update
/// engine operates on.
#[derive(Debug, Clone)]
pub struct HouseholderQr<T> {
    /// Householder vectors below diagonal, R at and above it.
    qr: Matrix<T>,
    /// Diagonal of R.
    r_diag: Vec<T>,
}

impl<T: Scalar> HouseholderQr<T> {
    /// Create an empty decomposition; call [`decompose`](Self::decompose)
    /// before reading the factors.
    pub fn new() -> Self {
        Self {
            qr: Matrix::zeros(0, 0),
            r_diag: Vec::new(),
        }
    }

    /// Compute the QR decomposition of `a`.
    ///
    /// Scratch storage from a previous call is reused. Fails only on an
    /// empty input; rank deficiency surfaces later as a near-zero
    /// diagonal of `R`.
    pub fn decompose(&mut self, a: &Matrix<T>) -> Result<()> {
        let m = a.nrows();
        let n = a.ncols();
        if m == 0 || n == 0 {
            return Err(QrUpdateError::EmptyMatrix);
        }

        self.qr.copy_from(a);
        self.r_diag.clear();
        let qr = &mut self.qr;

        for k in 0..n.min(m) {
            // norm of column k at and below the diagonal
            let mut norm_sq = T::zero();
            for i in k..m {
                norm_sq = norm_sq + qr[[i, k]] * qr[[i, k]];
            }
            let mut norm = norm_sq.sqrt();

            if norm.abs_val() > T::epsilon() {
                // choose the sign that avoids cancellation
                if qr[[k, k]] > T::zero() {
                    norm = -norm;
                }

                for i in k..m {
                    let v = qr[[i, k]] / -norm;
                    qr[[i, k]] = v;
                }
                let v = qr[[k, k]] + T::one();
                qr[[k, k]] = v;

                // apply the reflector to the remaining columns
                for j in (k + 1)..n {
                    let mut s = T::zero();
                    for i in k..m {
                        s = s + qr[[i, k]] * qr[[i, j]];
                    }
                    s = -s / qr[[k, k]];
                    for i in k..m {
                        let v = qr[[i, j]] + s * qr[[i, k]];
                        qr[[i, j]] = v;
                    }
                }
            }

            self.r_diag.push(norm);
        }

        Ok(())
    }

    /// Write the full m×m orthogonal factor into `q`.
    pub fn q_into(&self, q: &mut Matrix<T>) {
        let m = self.qr.nrows();
        let n = self.qr.ncols();
        q.set_identity(m);

        for j in (0..n.min(m)).rev() {
            // columns whose norm fell below epsilon carry no reflector
            if self.r_diag[j].abs_val() <= T::epsilon() {
                continue;
            }
            for col in j..m {
                let mut s = T::zero();
                for i in j..m {
                    s = s + self.qr[[i, j]] * q[[i, col]];
                }
                s = -s / self.qr[[j, j]];
                for i in j..m {
                    let v = q[[i, col]] + s * self.qr[[i, j]];
                    q[[i, col]] = v;
                }
            }
        }
    }

    /// The full m×m orthogonal factor.
    pub fn q(&self) -> Matrix<T> {
        let mut q = Matrix::zeros(0, 0);
        self.q_into(&mut q);
        q
    }

    /// Write the m×n triangular factor into `r`; entries below the main
    /// diagonal are exact zeros.
    pub fn r_into(&self, r: &mut Matrix<T>) {
        let m = self.qr.nrows();
        let n = self.qr.ncols();
        r.reshape(m, n);
        for i in 0..n.min(m) {
            r[[i, i]] = self.r_diag[i];
            for j in (i + 1)..n {
                r[[i, j]] = self.qr[[i, j]];
            }
        }
    }

    /// The m×n upper-triangular factor.
    pub fn r(&self) -> Matrix<T> {
        let mut r = Matrix::zeros(0, 0);
        self.r_into(&mut r);
        r
    }
}

impl<T: Scalar> Default for HouseholderQr<T> {
    fn default() -> Self {
        Self::new()
    }
}
