//! Second-order forward-mode augmented numbers.
//!
//! [`HessDual<F>`] carries a value together with its gradient and Hessian
//! with respect to a fixed design space of `n` independent variables. Each
//! arithmetic operation propagates all three components eagerly, so the
//! result of an expression holds its exact first and second derivatives.
//!
//! The fallible `try_*` methods are the primary contract; the `std::ops`
//! overloads in [`crate::traits`] delegate to them.

use std::borrow::Cow;
use std::fmt::{self, Display};

use nalgebra::{DMatrix, DVector};

use crate::error::{AdError, BinaryOp, Operands};
use crate::Float;

/// Label given to values that were not named by the caller.
pub const DEFAULT_NAME: &str = "ADvar";

/// Augmented number: value, gradient and Hessian over an `n`-dimensional
/// design space.
///
/// Values are immutable once built. Every operation returns a fresh
/// `HessDual` and leaves its operands untouched.
#[derive(Clone, Debug, PartialEq)]
pub struct HessDual<F: Float> {
    value: F,
    grad: DVector<F>,
    hess: DMatrix<F>,
    index: Option<usize>,
    name: Cow<'static, str>,
}

impl<F: Float> HessDual<F> {
    /// Seed the design variable at slot `index` of an `n`-dimensional space.
    ///
    /// The gradient is one-hot at `index` and the Hessian is zero.
    ///
    /// ```
    /// use hessdual::HessDual64;
    ///
    /// let x = HessDual64::leaf(2.0, 3, 1, "x").unwrap();
    /// assert_eq!(x.grad().as_slice(), &[0.0, 1.0, 0.0]);
    /// assert!(x.hess().iter().all(|&h| h == 0.0));
    /// ```
    pub fn leaf(
        value: F,
        n: usize,
        index: usize,
        name: impl Into<Cow<'static, str>>,
    ) -> Result<Self, AdError> {
        if index >= n {
            tracing::debug!(index, space_dim = n, "rejecting out-of-range leaf seed");
            return Err(AdError::IndexOutOfRange {
                index,
                space_dim: n,
            });
        }
        let mut grad = DVector::zeros(n);
        grad[index] = F::one();
        Ok(HessDual {
            value,
            grad,
            hess: DMatrix::zeros(n, n),
            index: Some(index),
            name: name.into(),
        })
    }

    /// Zero-derivative value used as scratch storage for operator results.
    pub fn intermediate(value: F, n: usize) -> Self {
        HessDual {
            value,
            grad: DVector::zeros(n),
            hess: DMatrix::zeros(n, n),
            index: None,
            name: Cow::Borrowed(DEFAULT_NAME),
        }
    }

    /// A constant of the design space: zero gradient, zero curvature.
    #[inline]
    pub fn constant(value: F, n: usize) -> Self {
        Self::intermediate(value, n)
    }

    /// Relabel this value.
    pub fn with_name(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.name = name.into();
        self
    }

    /// Assemble an intermediate from already-computed components.
    ///
    /// Callers guarantee `grad.len() == hess.nrows() == hess.ncols()`.
    #[inline]
    pub(crate) fn from_parts(value: F, grad: DVector<F>, hess: DMatrix<F>) -> Self {
        debug_assert_eq!(grad.len(), hess.nrows());
        debug_assert_eq!(hess.nrows(), hess.ncols());
        HessDual {
            value,
            grad,
            hess,
            index: None,
            name: Cow::Borrowed(DEFAULT_NAME),
        }
    }

    // ── Accessors ──

    #[inline]
    pub fn value(&self) -> F {
        self.value
    }

    #[inline]
    pub fn grad(&self) -> &DVector<F> {
        &self.grad
    }

    #[inline]
    pub fn hess(&self) -> &DMatrix<F> {
        &self.hess
    }

    /// Number of design variables `n`.
    #[inline]
    pub fn space_dim(&self) -> usize {
        self.grad.len()
    }

    /// Seeded slot for leaves, `None` for intermediates.
    #[inline]
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.index.is_some()
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Consume into `(value, gradient, hessian)`.
    pub fn into_parts(self) -> (F, DVector<F>, DMatrix<F>) {
        (self.value, self.grad, self.hess)
    }

    fn check_dim(&self, rhs: &Self, op: BinaryOp) -> Result<(), AdError> {
        if self.space_dim() == rhs.space_dim() {
            return Ok(());
        }
        tracing::debug!(
            %op,
            lhs = self.space_dim(),
            rhs = rhs.space_dim(),
            "rejecting operands from different design spaces"
        );
        Err(AdError::DimensionMismatch {
            op,
            lhs: self.space_dim(),
            rhs: rhs.space_dim(),
        })
    }

    // ── Dual ⊕ Dual ──

    /// `-self`.
    pub fn negate(&self) -> Self {
        Self::from_parts(-self.value, -&self.grad, -&self.hess)
    }

    /// `self + rhs`. Derivatives of a sum are the sum of derivatives.
    pub fn try_add(&self, rhs: &Self) -> Result<Self, AdError> {
        self.check_dim(rhs, BinaryOp::Add)?;
        Ok(Self::from_parts(
            self.value + rhs.value,
            &self.grad + &rhs.grad,
            &self.hess + &rhs.hess,
        ))
    }

    /// `self - rhs`.
    pub fn try_sub(&self, rhs: &Self) -> Result<Self, AdError> {
        self.check_dim(rhs, BinaryOp::Sub)?;
        Ok(Self::from_parts(
            self.value - rhs.value,
            &self.grad - &rhs.grad,
            &self.hess - &rhs.hess,
        ))
    }

    /// `self * rhs` by the first- and second-order product rule:
    ///
    /// ```text
    /// ∇(ab)  = b∇a + a∇b
    /// ∇²(ab) = b∇²a + ∇b∇aᵀ + ∇a∇bᵀ + a∇²b
    /// ```
    pub fn try_mul(&self, rhs: &Self) -> Result<Self, AdError> {
        self.check_dim(rhs, BinaryOp::Mul)?;
        let (a, b) = (self.value, rhs.value);
        let cross = &self.grad * rhs.grad.transpose();
        let hess = &self.hess * b + (cross.transpose() + cross) + &rhs.hess * a;
        Ok(Self::from_parts(
            a * b,
            &self.grad * b + &rhs.grad * a,
            hess,
        ))
    }

    /// `self / rhs` by the first- and second-order quotient rule.
    ///
    /// With `top = b∇a - a∇b` and `bottom = b²`, the gradient is
    /// `top / bottom` and the Hessian is
    ///
    /// ```text
    /// (bottom·∂top - top·(2b∇b)ᵀ) / bottom²
    /// ∂top = (∇a∇bᵀ + b∇²a) - (∇b∇aᵀ + a∇²b)
    /// ```
    ///
    /// where `∂top` is the Jacobian of `top` (row `i`, column `j` holds
    /// `∂top_i/∂x_j`). Expanded, this is
    ///
    /// ```text
    /// (b∇²a - a∇²b)/b² - (∇a∇bᵀ + ∇b∇aᵀ)/b² + 2a∇b∇bᵀ/b³
    /// ```
    ///
    /// which is evaluated term by term through `inv = 1/b`, so neither `b⁴`
    /// nor `b²` is ever formed and every term is exactly symmetric.
    pub fn try_div(&self, rhs: &Self) -> Result<Self, AdError> {
        self.check_dim(rhs, BinaryOp::Div)?;
        if rhs.value == F::zero() {
            return Err(division_by_zero(Operands::Dual));
        }
        let (a, b) = (self.value, rhs.value);
        let inv = F::one() / b;
        let grad = (&self.grad * b - &rhs.grad * a) * inv * inv;

        let cross = &self.grad * rhs.grad.transpose();
        let curvature = &self.hess * b - &rhs.hess * a - (cross.transpose() + cross);
        let divisor = &rhs.grad * rhs.grad.transpose();
        let hess = curvature * inv * inv + divisor * ((a + a) * inv) * inv * inv;

        Ok(Self::from_parts(a * inv, grad, hess))
    }

    // ── Dual ⊕ scalar ──

    /// `self + c`: a constant shifts the value only.
    pub fn add_scalar(&self, c: F) -> Self {
        Self::from_parts(self.value + c, self.grad.clone(), self.hess.clone())
    }

    /// `self - c`.
    pub fn sub_scalar(&self, c: F) -> Self {
        Self::from_parts(self.value - c, self.grad.clone(), self.hess.clone())
    }

    /// `self * c`: every component scales by `c`.
    pub fn mul_scalar(&self, c: F) -> Self {
        Self::from_parts(self.value * c, &self.grad * c, &self.hess * c)
    }

    /// `self / c`: every component divides by `c`.
    pub fn try_div_scalar(&self, c: F) -> Result<Self, AdError> {
        if c == F::zero() {
            return Err(division_by_zero(Operands::DualScalar));
        }
        Ok(Self::from_parts(self.value / c, &self.grad / c, &self.hess / c))
    }

    // ── scalar ⊕ Dual ──

    /// `c + a`.
    pub fn scalar_add(c: F, a: &Self) -> Self {
        a.add_scalar(c)
    }

    /// `c - a`, evaluated as `(-a) + c`.
    pub fn scalar_sub(c: F, a: &Self) -> Self {
        a.negate().add_scalar(c)
    }

    /// `c * a`.
    pub fn scalar_mul(c: F, a: &Self) -> Self {
        a.mul_scalar(c)
    }

    /// `c / a`: the full quotient rule with a constant numerator.
    pub fn try_scalar_div(c: F, a: &Self) -> Result<Self, AdError> {
        if a.value == F::zero() {
            return Err(division_by_zero(Operands::ScalarDual));
        }
        Self::constant(c, a.space_dim()).try_div(a)
    }
}

fn division_by_zero(operands: Operands) -> AdError {
    tracing::debug!(%operands, "rejecting division by a zero divisor");
    AdError::DivisionByZero { operands }
}

impl<F: Float> Display for HessDual<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} (design space size: {})", self.name, self.space_dim())?;
        writeln!(f, "  value: {}", self.value)?;
        write!(f, "  grad: {}", self.grad.transpose())?;
        write!(f, "  hess: {}", self.hess)
    }
}
