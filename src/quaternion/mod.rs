//! Quaternion value type generic over its scalar.
//!
//! A quaternion `t + ui + vj + wk` has a real part `t` and three imaginary
//! parts `u, v, w`. The multiplication rule (Hamilton product) follows from
//! `i² = j² = k² = ijk = -1` and does not commute.
//!
//! # Construction
//!
//! | Constructor                       | Result         |
//! | --------------------------------- | -------------- |
//! | `Quaternion::null()`              | `(0, 0, 0, 0)` |
//! | `Quaternion::from_real(x)`        | `(x, 0, 0, 0)` |
//! | `Quaternion::from_complex(x, y)`  | `(x, y, 0, 0)` |
//! | `Quaternion::new(t, u, v, w)`     | `(t, u, v, w)` |
//!
//! # Division
//!
//! Dividing by a quaternion or a scalar whose magnitude is at or below
//! [`DIVISION_EPSILON`](crate::scalar::DIVISION_EPSILON) is rejected with
//! [`QuaternionError::DivisionByZero`]. Every division path therefore returns
//! a [`QuaternionResult`], including the `/` operator.
//!
//! # Examples
//!
//! ```
//! use quaternion_algebra::Quaternion;
//!
//! let i = Quaternion::new(0.0, 1.0, 0.0, 0.0);
//! let j = Quaternion::new(0.0, 0.0, 1.0, 0.0);
//! let k = Quaternion::new(0.0, 0.0, 0.0, 1.0);
//!
//! assert_eq!(i * j, k);
//! assert_eq!(j * i, -k);
//! assert_eq!((k / k).unwrap(), Quaternion::identity());
//! ```

mod ops;
mod parse;

use std::fmt;

use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use tracing::debug;

use crate::error::{QuaternionError, QuaternionResult};
use crate::scalar::Scalar;

/// Double precision quaternion.
pub type Quaternion64 = Quaternion<f64>;

/// Single precision quaternion.
pub type Quaternion32 = Quaternion<f32>;

/// A quaternion `t + ui + vj + wk`.
///
/// Equality is exact and componentwise; use the `approx` traits for
/// tolerance-based comparison.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quaternion<T> {
    t: T,
    u: T,
    v: T,
    w: T,
}

impl<T: Scalar> Quaternion<T> {
    /// Create a quaternion from all four components.
    ///
    /// # Arguments
    /// * `t` - Real part
    /// * `u` - i component
    /// * `v` - j component
    /// * `w` - k component
    #[inline]
    pub fn new(t: T, u: T, v: T, w: T) -> Self {
        Self { t, u, v, w }
    }

    /// The null quaternion `0 + 0i + 0j + 0k`, the additive identity.
    #[inline]
    pub fn null() -> Self {
        Self::new(T::zero(), T::zero(), T::zero(), T::zero())
    }

    /// Embed a real number: `x + 0i + 0j + 0k`.
    #[inline]
    pub fn from_real(x: T) -> Self {
        Self::new(x, T::zero(), T::zero(), T::zero())
    }

    /// Embed a complex number: `x + yi + 0j + 0k`.
    #[inline]
    pub fn from_complex(x: T, y: T) -> Self {
        Self::new(x, y, T::zero(), T::zero())
    }

    /// The multiplicative identity `1 + 0i + 0j + 0k`.
    #[inline]
    pub fn identity() -> Self {
        Self::from_real(T::one())
    }

    /// Real part.
    #[inline]
    pub fn t(&self) -> T {
        self.t
    }

    /// i component.
    #[inline]
    pub fn u(&self) -> T {
        self.u
    }

    /// j component.
    #[inline]
    pub fn v(&self) -> T {
        self.v
    }

    /// k component.
    #[inline]
    pub fn w(&self) -> T {
        self.w
    }

    /// All components as `[t, u, v, w]`.
    #[inline]
    pub fn coords(&self) -> [T; 4] {
        [self.t, self.u, self.v, self.w]
    }

    /// Sum of the squared components.
    ///
    /// Computed directly, so it can overflow or underflow for extreme
    /// components; [`norm`](Self::norm) does not.
    #[inline]
    pub fn norm_squared(&self) -> T {
        self.t * self.t + self.u * self.u + self.v * self.v + self.w * self.w
    }

    /// Euclidean norm `sqrt(t² + u² + v² + w²)`.
    ///
    /// Components are scaled by the largest magnitude before squaring, so the
    /// norm is finite for finite input and zero only for the null quaternion.
    pub fn norm(&self) -> T {
        let scale = self.max_magnitude();
        if scale == T::zero() {
            return T::zero();
        }
        Self::new(self.t / scale, self.u / scale, self.v / scale, self.w / scale)
            .norm_squared()
            .square_root()
            * scale
    }

    fn max_magnitude(&self) -> T {
        self.t
            .magnitude()
            .max(self.u.magnitude())
            .max(self.v.magnitude())
            .max(self.w.magnitude())
    }

    /// Whether every component is exactly zero.
    #[inline]
    pub fn is_null(&self) -> bool {
        *self == Self::null()
    }

    /// Conjugate `t - ui - vj - wk`.
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self::new(self.t, -self.u, -self.v, -self.w)
    }

    /// Multiplicative inverse `conjugate / norm²`.
    ///
    /// `q * q.inverse()` and `q.inverse() * q` both equal the identity up to
    /// rounding.
    ///
    /// # Errors
    /// [`QuaternionError::DivisionByZero`] if the norm is at or below
    /// [`DIVISION_EPSILON`](crate::scalar::DIVISION_EPSILON).
    pub fn inverse(&self) -> QuaternionResult<Self> {
        Self::identity().try_div(self)
    }

    /// Quotient `self * rhs⁻¹`, computed in closed form as
    /// `self * conj(rhs) / |rhs|²`.
    ///
    /// For q1 = t1 + u1*i + v1*j + w1*k and q2 = t2 + u2*i + v2*j + w2*k,
    /// with d = |q2|²:
    /// q1 / q2 = (t1*t2 + u1*u2 + v1*v2 + w1*w2) / d +
    ///           (u1*t2 - t1*u2 - v1*w2 + w1*v2) / d * i +
    ///           (v1*t2 - t1*v2 - w1*u2 + u1*w2) / d * j +
    ///           (w1*t2 - t1*w2 - u1*v2 + v1*u2) / d * k
    ///
    /// `rhs` is scaled by its largest component first, so `d` stays in
    /// `[1, 4]` whatever the magnitude of the divisor.
    ///
    /// # Errors
    /// [`QuaternionError::DivisionByZero`] if `rhs` has a norm at or below
    /// [`DIVISION_EPSILON`](crate::scalar::DIVISION_EPSILON).
    pub fn try_div(&self, rhs: &Self) -> QuaternionResult<Self> {
        if T::is_negligible(rhs.norm()) {
            debug!("Rejected division by quaternion {}", rhs);
            return Err(QuaternionError::division_by_zero(rhs));
        }

        let scale = rhs.max_magnitude();
        let (t1, u1, v1, w1) = (self.t, self.u, self.v, self.w);
        let (t2, u2, v2, w2) = (rhs.t / scale, rhs.u / scale, rhs.v / scale, rhs.w / scale);
        let denom = t2 * t2 + u2 * u2 + v2 * v2 + w2 * w2;
        let finish = |x: T| x / denom / scale;

        Ok(Self::new(
            finish(t1 * t2 + u1 * u2 + v1 * v2 + w1 * w2),
            finish(u1 * t2 - t1 * u2 - v1 * w2 + w1 * v2),
            finish(v1 * t2 - t1 * v2 - w1 * u2 + u1 * w2),
            finish(w1 * t2 - t1 * w2 - u1 * v2 + v1 * u2),
        ))
    }

    /// In-place form of [`try_div`](Self::try_div). The receiver is left
    /// untouched on error.
    pub fn try_div_assign(&mut self, rhs: &Self) -> QuaternionResult<()> {
        *self = self.try_div(rhs)?;
        Ok(())
    }

    /// Divide every component by `x`.
    ///
    /// # Errors
    /// [`QuaternionError::DivisionByZero`] if `|x|` is at or below
    /// [`DIVISION_EPSILON`](crate::scalar::DIVISION_EPSILON).
    pub fn try_div_scalar(&self, x: T) -> QuaternionResult<Self> {
        if T::is_negligible(x.magnitude()) {
            debug!("Rejected division by scalar {}", x);
            return Err(QuaternionError::division_by_zero(x));
        }

        Ok(Self::new(self.t / x, self.u / x, self.v / x, self.w / x))
    }

    /// In-place form of [`try_div_scalar`](Self::try_div_scalar). The
    /// receiver is left untouched on error.
    pub fn try_div_assign_scalar(&mut self, x: T) -> QuaternionResult<()> {
        *self = self.try_div_scalar(x)?;
        Ok(())
    }
}

/// The multiplicative identity `1 + 0i + 0j + 0k`.
#[inline]
pub fn identity<T: Scalar>() -> Quaternion<T> {
    Quaternion::identity()
}

/// Norm of `q`; same as [`Quaternion::norm`].
#[inline]
pub fn norm<T: Scalar>(q: &Quaternion<T>) -> T {
    q.norm()
}

/// Conjugate of `q`; same as [`Quaternion::conjugate`].
#[inline]
pub fn conjugate<T: Scalar>(q: &Quaternion<T>) -> Quaternion<T> {
    q.conjugate()
}

/// Inverse of `q`; same as [`Quaternion::inverse`].
#[inline]
pub fn inverse<T: Scalar>(q: &Quaternion<T>) -> QuaternionResult<Quaternion<T>> {
    q.inverse()
}

impl<T: Scalar> Default for Quaternion<T> {
    fn default() -> Self {
        Self::null()
    }
}

// Renders as "t + ui + vj + wk" without folding signs, so a negative
// component shows up as "+ -2i". A requested precision applies per component.
impl<T: Scalar> fmt::Display for Quaternion<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(
                f,
                "{:.p$} + {:.p$}i + {:.p$}j + {:.p$}k",
                self.t, self.u, self.v, self.w
            ),
            None => write!(f, "{} + {}i + {}j + {}k", self.t, self.u, self.v, self.w),
        }
    }
}

impl<T: Scalar> From<T> for Quaternion<T> {
    fn from(x: T) -> Self {
        Self::from_real(x)
    }
}

impl<T: Scalar> From<(T, T)> for Quaternion<T> {
    fn from((x, y): (T, T)) -> Self {
        Self::from_complex(x, y)
    }
}

impl<T: Scalar> From<[T; 4]> for Quaternion<T> {
    fn from([t, u, v, w]: [T; 4]) -> Self {
        Self::new(t, u, v, w)
    }
}

impl<T: Scalar> From<Quaternion<T>> for [T; 4] {
    fn from(q: Quaternion<T>) -> Self {
        q.coords()
    }
}

// nalgebra stores [i, j, k, w]; its scalar part maps onto `t`.
impl<T: Scalar> From<nalgebra::Quaternion<T>> for Quaternion<T> {
    fn from(q: nalgebra::Quaternion<T>) -> Self {
        Self::new(q.coords[3], q.coords[0], q.coords[1], q.coords[2])
    }
}

impl<T: Scalar> From<Quaternion<T>> for nalgebra::Quaternion<T> {
    fn from(q: Quaternion<T>) -> Self {
        nalgebra::Quaternion::new(q.t, q.u, q.v, q.w)
    }
}

impl<T: Scalar> AbsDiffEq for Quaternion<T> {
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.t.abs_diff_eq(&other.t, epsilon)
            && self.u.abs_diff_eq(&other.u, epsilon)
            && self.v.abs_diff_eq(&other.v, epsilon)
            && self.w.abs_diff_eq(&other.w, epsilon)
    }
}

impl<T: Scalar> RelativeEq for Quaternion<T> {
    fn default_max_relative() -> T {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        self.t.relative_eq(&other.t, epsilon, max_relative)
            && self.u.relative_eq(&other.u, epsilon, max_relative)
            && self.v.relative_eq(&other.v, epsilon, max_relative)
            && self.w.relative_eq(&other.w, epsilon, max_relative)
    }
}

impl<T: Scalar> UlpsEq for Quaternion<T> {
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: T, max_ulps: u32) -> bool {
        self.t.ulps_eq(&other.t, epsilon, max_ulps)
            && self.u.ulps_eq(&other.u, epsilon, max_ulps)
            && self.v.ulps_eq(&other.v, epsilon, max_ulps)
            && self.w.ulps_eq(&other.w, epsilon, max_ulps)
    }
}

// ============================================================================
// Tests
// ============================================================================
