//! Second-order forward-mode automatic differentiation.
//!
//! A [`HessDual`] carries a scalar value together with its gradient and
//! Hessian over a fixed set of design variables. Arithmetic on
//! `HessDual`s propagates all three eagerly, so any expression built from
//! `+`, `-`, `*`, `/` and negation yields its exact first and second
//! derivatives.
//!
//! ```
//! use hessdual::HessDual64;
//!
//! let a = HessDual64::leaf(2.0, 2, 0, "a").unwrap();
//! let b = HessDual64::leaf(3.0, 2, 1, "b").unwrap();
//! let c = &a * &b;
//! assert_eq!(c.value(), 6.0);
//! assert_eq!(c.grad().as_slice(), &[3.0, 2.0]);
//! assert_eq!(c.hess()[(0, 1)], 1.0);
//! ```

pub mod api;
pub mod error;
pub mod float;
pub mod hess_dual;
mod traits;

#[cfg(feature = "serde")]
mod serde_support;

pub use api::{hessian, variables};
pub use error::{AdError, BinaryOp, Operands};
pub use float::Float;
pub use hess_dual::HessDual;

/// Type alias for augmented numbers over `f32`.
pub type HessDual32 = HessDual<f32>;
/// Type alias for augmented numbers over `f64`.
pub type HessDual64 = HessDual<f64>;
