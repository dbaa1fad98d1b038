//! Scalar capability required by [`Quaternion`](crate::Quaternion).
//!
//! Any real field with value semantics qualifies: `f32`, `f64`, and other
//! `nalgebra::RealField` implementors that are `Copy`.

use nalgebra::{ComplexField, RealField};

/// Magnitude at or below which a divisor is treated as zero.
pub const DIVISION_EPSILON: f64 = 1e-15;

/// Scalar type a quaternion is built over.
///
/// Provides `+ - * /`, ordering, negation and square root through
/// [`RealField`]. Blanket-implemented, so it never needs a manual impl.
pub trait Scalar: RealField + Copy {
    /// [`DIVISION_EPSILON`] expressed in this scalar type.
    #[inline]
    fn division_epsilon() -> Self {
        nalgebra::convert(DIVISION_EPSILON)
    }

    /// Whether `magnitude` is too small to divide by.
    #[inline]
    fn is_negligible(magnitude: Self) -> bool {
        magnitude <= Self::division_epsilon()
    }

    /// Absolute value.
    #[inline]
    fn magnitude(self) -> Self {
        ComplexField::abs(self)
    }

    /// Square root.
    #[inline]
    fn square_root(self) -> Self {
        ComplexField::sqrt(self)
    }
}

impl<T: RealField + Copy> Scalar for T {}
