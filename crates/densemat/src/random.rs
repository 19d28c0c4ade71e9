//! Random matrix generation for tests and benchmarks.

use crate::matrix::Matrix;
use crate::scalar::Scalar;
use rand::Rng;

/// Generate a matrix with entries drawn uniformly from (-1, 1).
pub fn random_matrix<T: Scalar, R: Rng>(nrows: usize, ncols: usize, rng: &mut R) -> Matrix<T> {
    let mut m = Matrix::zeros(nrows, ncols);
    for i in 0..nrows {
        for j in 0..ncols {
            m[[i, j]] = T::from_f64(rng.random_range(-1.0..1.0));
        }
    }
    m
}

/// Generate a vector with entries drawn uniformly from (-1, 1).
pub fn random_vec<T: Scalar, R: Rng>(len: usize, rng: &mut R) -> Vec<T> {
    (0..len)
        .map(|_| T::from_f64(rng.random_range(-1.0..1.0)))
        .collect()
}
