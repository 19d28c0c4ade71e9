//! Plane (Givens) rotation primitive.

use densemat::{Matrix, Scalar};

/// Coefficients of a 2×2 plane rotation `[[c, s], [-s, c]]`.
///
/// Applied on the left to a row pair `(a, b)ᵗ` with coefficients from
/// [`GivensRotation::compute`], the rotation maps `(a, b)` to `(r, 0)`
/// while preserving the 2-norm of every affected column pair.
#[derive(Debug, Clone, Copy)]
pub struct GivensRotation<T> {
    pub c: T,
    pub s: T,
}

impl<T: Scalar> GivensRotation<T> {
    /// Compute the rotation zeroing `b` against `a`, and the merged value
    /// `r` with `|r| = sqrt(a² + b²)`.
    ///
    /// The computation scales by the larger-magnitude operand, so no
    /// intermediate overflows or divisions by zero occur for finite
    /// inputs; `b == 0` (including both operands zero) yields the
    /// identity rotation. The sign of `r` follows the dominant operand.
    pub fn compute(a: T, b: T) -> (Self, T) {
        if b.abs_sq() == 0.0 {
            return (
                Self {
                    c: T::one(),
                    s: T::zero(),
                },
                a,
            );
        }
        if a.abs() >= b.abs() {
            let t = b / a;
            let u = (T::one() + t * t).sqrt();
            let c = T::one() / u;
            (Self { c, s: c * t }, a * u)
        } else {
            let t = a / b;
            let u = (T::one() + t * t).sqrt();
            let s = T::one() / u;
            (Self { c: s * t, s }, b * u)
        }
    }

    /// Apply the rotation to the row pair `(top, bottom)` of `m`, touching
    /// only columns `from_col..`.
    pub fn rotate_rows(&self, m: &mut Matrix<T>, top: usize, bottom: usize, from_col: usize) {
        for j in from_col..m.ncols() {
            let x = m[[top, j]];
            let y = m[[bottom, j]];
            m[[top, j]] = self.c * x + self.s * y;
            m[[bottom, j]] = self.c * y - self.s * x;
        }
    }

    /// Apply the transposed rotation from the right to the column pair
    /// `(left, right)` of `m`.
    pub fn rotate_cols(&self, m: &mut Matrix<T>, left: usize, right: usize) {
        for i in 0..m.nrows() {
            let x = m[[i, left]];
            let y = m[[i, right]];
            m[[i, left]] = self.c * x + self.s * y;
            m[[i, right]] = self.c * y - self.s * x;
        }
    }

    /// Apply the rotation to a scalar pair.
    pub fn rotate_pair(&self, a: T, b: T) -> (T, T) {
        (self.c * a + self.s * b, self.c * b - self.s * a)
    }
}
