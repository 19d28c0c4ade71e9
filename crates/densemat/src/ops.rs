//! Arithmetic and structural operations on dense matrices.

use crate::matrix::{zeros, Matrix};
use crate::scalar::Scalar;
use num_traits::Zero;

/// Get a row as a vector.
pub fn get_row<T: Clone>(m: &Matrix<T>, i: usize) -> Vec<T> {
    (0..m.ncols()).map(|j| m[[i, j]].clone()).collect()
}

/// Get a column as a vector.
pub fn get_col<T: Clone>(m: &Matrix<T>, j: usize) -> Vec<T> {
    (0..m.nrows()).map(|i| m[[i, j]].clone()).collect()
}

/// Transpose the matrix.
pub fn transpose<T: Clone + Zero>(m: &Matrix<T>) -> Matrix<T> {
    let mut result = zeros(m.ncols(), m.nrows());
    for i in 0..m.nrows() {
        for j in 0..m.ncols() {
            result[[j, i]] = m[[i, j]].clone();
        }
    }
    result
}

/// Dot product of two vectors.
pub fn dot<T: Scalar>(a: &[T], b: &[T]) -> T {
    assert_eq!(a.len(), b.len(), "dot: length mismatch");
    a.iter()
        .zip(b.iter())
        .fold(T::zero(), |acc, (&x, &y)| acc + x * y)
}

/// Matrix multiplication: A * B.
pub fn mat_mul<T: Scalar>(a: &Matrix<T>, b: &Matrix<T>) -> Matrix<T> {
    let m = a.nrows();
    let k = a.ncols();
    let n = b.ncols();
    assert_eq!(b.nrows(), k, "mat_mul: inner dimension mismatch");

    let mut result = zeros(m, n);
    for i in 0..m {
        for j in 0..n {
            let mut sum = T::zero();
            for l in 0..k {
                sum = sum + a[[i, l]] * b[[l, j]];
            }
            result[[i, j]] = sum;
        }
    }
    result
}

/// Matrix multiplication with the first operand transposed: Aᵗ * B.
pub fn mat_mul_trans_a<T: Scalar>(a: &Matrix<T>, b: &Matrix<T>) -> Matrix<T> {
    let m = a.ncols();
    let k = a.nrows();
    let n = b.ncols();
    assert_eq!(b.nrows(), k, "mat_mul_trans_a: inner dimension mismatch");

    let mut result = zeros(m, n);
    for i in 0..m {
        for j in 0..n {
            let mut sum = T::zero();
            for l in 0..k {
                sum = sum + a[[l, i]] * b[[l, j]];
            }
            result[[i, j]] = sum;
        }
    }
    result
}

/// Matrix multiplication with the second operand transposed: A * Bᵗ.
pub fn mat_mul_trans_b<T: Scalar>(a: &Matrix<T>, b: &Matrix<T>) -> Matrix<T> {
    let m = a.nrows();
    let k = a.ncols();
    let n = b.nrows();
    assert_eq!(b.ncols(), k, "mat_mul_trans_b: inner dimension mismatch");

    let mut result = zeros(m, n);
    for i in 0..m {
        for j in 0..n {
            let mut sum = T::zero();
            for l in 0..k {
                sum = sum + a[[i, l]] * b[[j, l]];
            }
            result[[i, j]] = sum;
        }
    }
    result
}
