//! Dense row-major matrix library
//!
//! This crate provides the dense-matrix foundation used by the
//! factorization crates:
//! - [`Matrix`]: row-major `Vec`-backed 2-D storage with in-place resizes
//!   and rectangular sub-block copies
//! - [`ops`]: multiplication (including the transpose-variant family),
//!   transposition, and row/column extraction
//! - [`features`]: tolerance-based structure checks (orthogonality,
//!   triangularity, entrywise identity)
//! - [`random`]: seeded random matrix generation
//! - [`Scalar`]: real-scalar abstraction over `f64` and `f32`
//!
//! # Example
//!
//! ```
//! use densemat::{from_vec2d, mat_mul};
//!
//! let a = from_vec2d(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
//! let b = from_vec2d(vec![vec![0.0, 1.0], vec![1.0, 0.0]]);
//!
//! let c = mat_mul(&a, &b);
//! assert_eq!(c[[0, 0]], 2.0);
//! assert_eq!(c[[1, 1]], 3.0);
//! ```

pub mod features;
pub mod matrix;
pub mod ops;
pub mod random;
pub mod scalar;

// Re-export main types
pub use features::{has_nan, is_identical, is_orthogonal, is_upper_triangular};
pub use matrix::{eye, from_vec2d, zeros, Matrix};
pub use ops::{
    dot, get_col, get_row, mat_mul, mat_mul_trans_a, mat_mul_trans_b, transpose,
};
pub use random::{random_matrix, random_vec};
pub use scalar::Scalar;
