//! Common scalar trait for dense matrix operations.
//!
//! This module provides a unified real-scalar trait so the matrix kernels
//! can be written once for `f64` and `f32`.

use num_traits::{Float, One, Zero};

/// Common scalar trait for dense matrix operations.
///
/// This trait defines the minimal requirements for scalar types used in
/// the matrix storage, factorization, and solver kernels.
pub trait Scalar:
    Clone
    + Copy
    + Zero
    + One
    + PartialOrd
    + std::ops::Add<Output = Self>
    + std::ops::Sub<Output = Self>
    + std::ops::Mul<Output = Self>
    + std::ops::Div<Output = Self>
    + std::ops::Neg<Output = Self>
    + Default
    + std::fmt::Debug
    + Send
    + Sync
    + 'static
{
    /// Absolute value.
    fn abs(self) -> Self;

    /// Square of the absolute value.
    fn abs_sq(self) -> f64;

    /// Absolute value as f64.
    fn abs_val(self) -> f64 {
        self.abs_sq().sqrt()
    }

    /// Square root of the value.
    fn sqrt(self) -> Self;

    /// Create from f64 value.
    fn from_f64(val: f64) -> Self;

    /// Check if value is NaN.
    fn is_nan(self) -> bool;

    /// Machine epsilon of the underlying representation.
    fn epsilon() -> f64;
}

impl Scalar for f64 {
    #[inline]
    fn abs(self) -> Self {
        Float::abs(self)
    }

    #[inline]
    fn abs_sq(self) -> f64 {
        self * self
    }

    #[inline]
    fn abs_val(self) -> f64 {
        Float::abs(self)
    }

    #[inline]
    fn sqrt(self) -> Self {
        Float::sqrt(self)
    }

    #[inline]
    fn from_f64(val: f64) -> Self {
        val
    }

    #[inline]
    fn is_nan(self) -> bool {
        Float::is_nan(self)
    }

    #[inline]
    fn epsilon() -> f64 {
        f64::EPSILON
    }
}

impl Scalar for f32 {
    #[inline]
    fn abs(self) -> Self {
        Float::abs(self)
    }

    #[inline]
    fn abs_sq(self) -> f64 {
        (self * self) as f64
    }

    #[inline]
    fn abs_val(self) -> f64 {
        Float::abs(self) as f64
    }

    #[inline]
    fn sqrt(self) -> Self {
        Float::sqrt(self)
    }

    #[inline]
    fn from_f64(val: f64) -> Self {
        val as f32
    }

    #[inline]
    fn is_nan(self) -> bool {
        Float::is_nan(self)
    }

    #[inline]
    fn epsilon() -> f64 {
        f32::EPSILON as f64
    }
}

/// Macro to generate f64 and f32 test variants from a generic test function.
///
/// # Example
///
/// ```ignore
/// fn test_operation_generic<T: Scalar>() {
///     // test implementation
/// }
///
/// densemat::scalar_tests!(test_operation, test_operation_generic);
/// // Generates:
/// // #[test] fn test_operation_f64() { test_operation_generic::<f64>(); }
/// // #[test] fn test_operation_f32() { test_operation_generic::<f32>(); }
/// ```
#[macro_export]
macro_rules! scalar_tests {
    ($name:ident, $test_fn:ident) => {
        paste::paste! {
            #[test]
            fn [<$name _f64>]() {
                $test_fn::<f64>();
            }

            #[test]
            fn [<$name _f32>]() {
                $test_fn::<f32>();
            }
        }
    };
}
