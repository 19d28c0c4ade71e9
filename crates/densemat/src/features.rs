//! Predicates over matrix structure and values.
//!
//! These checks are tolerance-based: they answer whether a matrix has a
//! property to within a caller-supplied absolute tolerance.

use crate::matrix::Matrix;
use crate::ops::mat_mul_trans_a;
use crate::scalar::Scalar;

/// Whether two matrices have the same shape and entrywise-close values.
///
/// Returns `false` if any compared pair involves a NaN.
pub fn is_identical<T: Scalar>(a: &Matrix<T>, b: &Matrix<T>, tol: f64) -> bool {
    if a.nrows() != b.nrows() || a.ncols() != b.ncols() {
        return false;
    }
    for i in 0..a.nrows() {
        for j in 0..a.ncols() {
            let diff = (a[[i, j]] - b[[i, j]]).abs_val();
            if !(diff <= tol) {
                return false;
            }
        }
    }
    true
}

/// Whether `q` is orthogonal: Qᵗ·Q = I to within `tol` entrywise.
pub fn is_orthogonal<T: Scalar>(q: &Matrix<T>, tol: f64) -> bool {
    if !q.is_square() {
        return false;
    }
    let prod = mat_mul_trans_a(q, q);
    for i in 0..prod.nrows() {
        for j in 0..prod.ncols() {
            let diff = if i == j {
                (prod[[i, j]] - T::one()).abs_val()
            } else {
                prod[[i, j]].abs_val()
            };
            if !(diff <= tol) {
                return false;
            }
        }
    }
    true
}

/// Whether every entry below the main diagonal is within `tol` of zero.
pub fn is_upper_triangular<T: Scalar>(r: &Matrix<T>, tol: f64) -> bool {
    for i in 1..r.nrows() {
        for j in 0..i.min(r.ncols()) {
            if !(r[[i, j]].abs_val() <= tol) {
                return false;
            }
        }
    }
    true
}

/// Whether the matrix contains any NaN value.
pub fn has_nan<T: Scalar>(m: &Matrix<T>) -> bool {
    for i in 0..m.nrows() {
        for j in 0..m.ncols() {
            if m[[i, j]].is_nan() {
                return true;
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::{eye, from_vec2d};

    #[test]
    fn test_is_identical() {
        let a = from_vec2d(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        let mut b = a.clone();
        assert!(is_identical(&a, &b, 0.0));

        b[[1, 0]] += 1e-9;
        assert!(is_identical(&a, &b, 1e-8));
        assert!(!is_identical(&a, &b, 1e-10));

        let c = from_vec2d(vec![vec![1.0, 2.0]]);
        assert!(!is_identical(&a, &c, 1.0));

        b[[0, 0]] = f64::NAN;
        assert!(!is_identical(&a, &b, 1.0));
    }

    #[test]
    fn test_is_orthogonal() {
        assert!(is_orthogonal(&eye::<f64>(4), 1e-12));

        let theta: f64 = 0.3;
        let rot = from_vec2d(vec![
            vec![theta.cos(), theta.sin()],
            vec![-theta.sin(), theta.cos()],
        ]);
        assert!(is_orthogonal(&rot, 1e-12));

        let skewed = from_vec2d(vec![vec![1.0, 0.5], vec![0.0, 1.0]]);
        assert!(!is_orthogonal(&skewed, 1e-6));

        let rect = from_vec2d(vec![vec![1.0, 0.0]]);
        assert!(!is_orthogonal(&rect, 1e-6));
    }

    #[test]
    fn test_is_upper_triangular() {
        let r = from_vec2d(vec![
            vec![1.0, 2.0, 3.0],
            vec![0.0, 4.0, 5.0],
            vec![0.0, 0.0, 6.0],
            vec![0.0, 0.0, 0.0],
        ]);
        assert!(is_upper_triangular(&r, 0.0));

        let mut broken = r.clone();
        broken[[2, 1]] = 1e-3;
        assert!(!is_upper_triangular(&broken, 1e-6));
        assert!(is_upper_triangular(&broken, 1e-2));
    }

    #[test]
    fn test_has_nan() {
        let mut m = eye::<f64>(2);
        assert!(!has_nan(&m));
        m[[0, 1]] = f64::NAN;
        assert!(has_nan(&m));
    }
}
