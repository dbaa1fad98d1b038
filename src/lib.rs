//! # Quaternion Algebra
//!
//! A quaternion value type `t + ui + vj + wk`, generic over its scalar, with the
//! full algebra: addition, subtraction, the Hamilton product, checked division,
//! conjugation, inversion, norm and scalar scaling.
//!
//! ## Features
//!
//! - **One generic type**: `Quaternion<T>` works for any `nalgebra::RealField`
//!   scalar that is `Copy`; `Quaternion64` and `Quaternion32` are the usual
//!   instantiations
//! - **Operator overloading**: `+ - *` and unary `-` with compound-assignment forms,
//!   scalar multiplication on either side
//! - **Checked division**: dividing by a near-zero quaternion or scalar returns
//!   [`QuaternionError::DivisionByZero`] instead of producing infinities
//! - **Text round-trip**: `Display` renders `"t + ui + vj + wk"`, `FromStr` reads it back
//! - **Interop**: conversions to and from `nalgebra::Quaternion`, tolerance comparison
//!   through the `approx` traits, optional `serde` support
//!
//! ## Example
//!
//! ```
//! use quaternion_algebra::{Quaternion, QuaternionError};
//!
//! let q: Quaternion<f64> = Quaternion::new(1.0, 2.0, 3.0, 4.0);
//! assert_eq!(q * q, Quaternion::new(-28.0, 4.0, 6.0, 8.0));
//! assert_eq!(q.norm(), 30.0_f64.sqrt());
//! assert_eq!(q.to_string(), "1 + 2i + 3j + 4k");
//!
//! assert!(matches!(
//!     q / Quaternion::null(),
//!     Err(QuaternionError::DivisionByZero { .. })
//! ));
//! ```

pub mod error;
pub mod logger;
pub mod quaternion;
pub mod scalar;

pub use error::{QuaternionError, QuaternionResult};
pub use logger::{init_logger, init_logger_with_level};
pub use quaternion::{Quaternion, Quaternion32, Quaternion64};
pub use scalar::{DIVISION_EPSILON, Scalar};
