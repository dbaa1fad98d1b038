//! Operator implementations for [`Quaternion`].
//!
//! `+`, `-` and `*` are total and come in pure and compound-assignment
//! forms. `/` can fail, so its output is a [`QuaternionResult`] and there is
//! no `DivAssign`; use [`Quaternion::try_div_assign`] and
//! [`Quaternion::try_div_assign_scalar`] for the in-place forms.

use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

use super::Quaternion;
use crate::error::QuaternionResult;
use crate::scalar::Scalar;

impl<T: Scalar> Neg for Quaternion<T> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.t, -self.u, -self.v, -self.w)
    }
}

impl<T: Scalar> Add for Quaternion<T> {
    type Output = Self;

    fn add(mut self, other: Self) -> Self::Output {
        self += other;
        self
    }
}

impl<T: Scalar> AddAssign for Quaternion<T> {
    fn add_assign(&mut self, other: Self) {
        self.t += other.t;
        self.u += other.u;
        self.v += other.v;
        self.w += other.w;
    }
}

impl<T: Scalar> Sub for Quaternion<T> {
    type Output = Self;

    fn sub(mut self, other: Self) -> Self::Output {
        self -= other;
        self
    }
}

impl<T: Scalar> SubAssign for Quaternion<T> {
    fn sub_assign(&mut self, other: Self) {
        self.t -= other.t;
        self.u -= other.u;
        self.v -= other.v;
        self.w -= other.w;
    }
}

/// Hamilton product.
///
/// For q1 = t1 + u1*i + v1*j + w1*k and q2 = t2 + u2*i + v2*j + w2*k:
/// q1 * q2 = (t1*t2 - u1*u2 - v1*v2 - w1*w2) +
///           (t1*u2 + u1*t2 + v1*w2 - w1*v2)*i +
///           (t1*v2 - u1*w2 + v1*t2 + w1*u2)*j +
///           (t1*w2 + u1*v2 - v1*u2 + w1*t2)*k
impl<T: Scalar> Mul for Quaternion<T> {
    type Output = Self;

    fn mul(self, other: Self) -> Self::Output {
        let (t1, u1, v1, w1) = (self.t, self.u, self.v, self.w);
        let (t2, u2, v2, w2) = (other.t, other.u, other.v, other.w);

        Self::new(
            t1 * t2 - u1 * u2 - v1 * v2 - w1 * w2,
            t1 * u2 + u1 * t2 + v1 * w2 - w1 * v2,
            t1 * v2 - u1 * w2 + v1 * t2 + w1 * u2,
            t1 * w2 + u1 * v2 - v1 * u2 + w1 * t2,
        )
    }
}

impl<T: Scalar> MulAssign for Quaternion<T> {
    fn mul_assign(&mut self, other: Self) {
        *self = *self * other;
    }
}

impl<T: Scalar> Mul<T> for Quaternion<T> {
    type Output = Self;

    fn mul(mut self, x: T) -> Self::Output {
        self *= x;
        self
    }
}

impl<T: Scalar> MulAssign<T> for Quaternion<T> {
    fn mul_assign(&mut self, x: T) {
        self.t *= x;
        self.u *= x;
        self.v *= x;
        self.w *= x;
    }
}

impl<T: Scalar> Div for Quaternion<T> {
    type Output = QuaternionResult<Self>;

    fn div(self, other: Self) -> Self::Output {
        self.try_div(&other)
    }
}

impl<T: Scalar> Div<T> for Quaternion<T> {
    type Output = QuaternionResult<Self>;

    fn div(self, x: T) -> Self::Output {
        self.try_div_scalar(x)
    }
}

// Scalar on the left needs a concrete type for coherence.
macro_rules! impl_scalar_lhs_mul {
    ($($scalar:ty),*) => {
        $(
            impl Mul<Quaternion<$scalar>> for $scalar {
                type Output = Quaternion<$scalar>;

                fn mul(self, q: Quaternion<$scalar>) -> Self::Output {
                    q * self
                }
            }
        )*
    };
}

impl_scalar_lhs_mul!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QuaternionError;
    use crate::quaternion::Quaternion64;

    fn q(t: f64, u: f64, v: f64, w: f64) -> Quaternion64 {
        Quaternion::new(t, u, v, w)
    }

    #[test]
    fn test_neg() {
        assert_eq!(-q(1.0, -2.0, 3.0, -4.0), q(-1.0, 2.0, -3.0, 4.0));
    }

    #[test]
    fn test_add_and_sub() {
        let a = q(1.0, 2.0, 3.0, 4.0);
        let b = q(4.0, 3.0, 2.0, 1.0);
        assert_eq!(a + b, q(5.0, 5.0, 5.0, 5.0));
        assert_eq!(a - b, q(-3.0, -1.0, 1.0, 3.0));
        assert_eq!(a + Quaternion::null(), a);
    }

    #[test]
    fn test_compound_add_and_sub() {
        let mut a = q(1.0, 2.0, 3.0, 4.0);
        a += q(1.0, 1.0, 1.0, 1.0);
        assert_eq!(a, q(2.0, 3.0, 4.0, 5.0));
        a -= q(2.0, 3.0, 4.0, 5.0);
        assert!(a.is_null());
    }

    #[test]
    fn test_hamilton_product_scenario() {
        let a = q(1.0, 2.0, 3.0, 4.0);
        assert_eq!(a * a, q(-28.0, 4.0, 6.0, 8.0));
    }

    #[test]
    fn test_basis_products() {
        let one = Quaternion64::identity();
        let i = q(0.0, 1.0, 0.0, 0.0);
        let j = q(0.0, 0.0, 1.0, 0.0);
        let k = q(0.0, 0.0, 0.0, 1.0);

        assert_eq!(i * i, -one);
        assert_eq!(j * j, -one);
        assert_eq!(k * k, -one);
        assert_eq!(i * j * k, -one);

        assert_eq!(i * j, k);
        assert_eq!(j * k, i);
        assert_eq!(k * i, j);
        assert_eq!(j * i, -k);
        assert_eq!(k * j, -i);
        assert_eq!(i * k, -j);
    }

    #[test]
    fn test_mul_assign_matches_mul() {
        let a = q(1.0, -2.0, 0.5, 3.0);
        let b = q(-1.5, 4.0, 2.0, -0.25);
        let mut c = a;
        c *= b;
        assert_eq!(c, a * b);
    }

    #[test]
    fn test_scalar_mul_both_sides() {
        let a = q(1.0, 2.0, 3.0, 4.0);
        assert_eq!(a * 2.0, q(2.0, 4.0, 6.0, 8.0));
        assert_eq!(2.0 * a, a * 2.0);
        assert_eq!(
            0.5_f32 * Quaternion::new(2.0_f32, 4.0, 6.0, 8.0),
            Quaternion::new(1.0, 2.0, 3.0, 4.0)
        );

        let mut b = a;
        b *= -1.0;
        assert_eq!(b, -a);
    }

    #[test]
    fn test_div_operator_returns_result() {
        let a = q(1.0, 2.0, 3.0, 4.0);
        assert_eq!((a / 2.0).unwrap(), q(0.5, 1.0, 1.5, 2.0));
        assert_eq!((a / Quaternion::identity()).unwrap(), a);
        assert!(matches!(
            a / Quaternion::null(),
            Err(QuaternionError::DivisionByZero { .. })
        ));
        assert!(matches!(a / 0.0, Err(QuaternionError::DivisionByZero { .. })));
    }

    #[test]
    fn test_basis_division_undoes_right_product() {
        let one = Quaternion64::identity();
        let i = q(0.0, 1.0, 0.0, 0.0);
        let j = q(0.0, 0.0, 1.0, 0.0);
        let k = q(0.0, 0.0, 0.0, 1.0);

        assert_eq!(((i * j) / j).unwrap(), i);
        assert_eq!(((j * i) / i).unwrap(), j);
        assert_eq!((k / j).unwrap(), i);
        assert_eq!((one / i).unwrap(), -i);

        for x in [one, i, j, k, -i, -k] {
            for y in [one, i, j, k, -j] {
                assert_eq!(((x * y) / y).unwrap(), x);
            }
        }
    }
}
