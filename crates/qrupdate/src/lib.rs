//! Incremental QR factorization maintenance
//!
//! This crate keeps an orthogonal-triangular factorization `A = Q·R`
//! valid while rows are inserted into or deleted from `A`, without
//! re-decomposing:
//! - [`GivensRotation`]: the plane-rotation primitive
//! - [`HouseholderQr`]: the full decomposition producing the initial
//!   `(Q, R)` pair
//! - [`QrUpdate`]: the row insertion/deletion engine, O(n²) to O(m·n) per
//!   update instead of a full refactorization
//! - [`AdjLinearSolverQr`]: least-squares solving over a system matrix
//!   that grows and shrinks one row at a time
//!
//! # Example
//!
//! ```
//! use densemat::{from_vec2d, Matrix};
//! use qrupdate::{AdjLinearSolverQr, AdjustableLinearSolver, LinearSolver};
//!
//! let a = from_vec2d(vec![
//!     vec![1.0, 0.0],
//!     vec![0.0, 1.0],
//!     vec![1.0, 1.0],
//! ]);
//!
//! let mut solver = AdjLinearSolverQr::new();
//! solver.set_a(&a).unwrap();
//!
//! // grow the system by one row, then solve the 4-row least-squares
//! // problem against a matching right-hand side
//! solver.add_row_to_a(&[2.0, 1.0], 1).unwrap();
//!
//! let b = from_vec2d(vec![vec![1.0], vec![4.0], vec![2.0], vec![3.0]]);
//! let mut x = Matrix::zeros(0, 0);
//! solver.solve(&b, &mut x).unwrap();
//! assert_eq!(x.nrows(), 2);
//! ```

pub mod error;
pub mod givens;
pub mod householder;
pub mod solver;
pub mod update;

// Re-export main types
pub use error::{QrUpdateError, Result};
pub use givens::GivensRotation;
pub use householder::HouseholderQr;
pub use solver::{AdjLinearSolverQr, AdjustableLinearSolver, LinearSolver, SolverOptions};
pub use update::QrUpdate;
