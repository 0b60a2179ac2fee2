//! `std::ops` overloads for [`HessDual`].
//!
//! Each overload forwards to the fallible method of the same name and
//! panics with the [`AdError`] message when the operands violate its
//! preconditions. Use the `try_*` methods to handle those cases instead.

use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::error::AdError;
use crate::float::Float;
use crate::hess_dual::HessDual;

#[track_caller]
#[inline]
fn or_panic<F: Float>(result: Result<HessDual<F>, AdError>) -> HessDual<F> {
    match result {
        Ok(v) => v,
        Err(e) => panic!("{e}"),
    }
}

// ──────────────────────────────────────────────
//  HessDual<F> ⊕ HessDual<F>
// ──────────────────────────────────────────────

impl<F: Float> Neg for HessDual<F> {
    type Output = HessDual<F>;
    #[inline]
    fn neg(self) -> HessDual<F> {
        let (v, g, h) = self.into_parts();
        HessDual::from_parts(-v, -g, -h)
    }
}

impl<F: Float> Neg for &HessDual<F> {
    type Output = HessDual<F>;
    #[inline]
    fn neg(self) -> HessDual<F> {
        self.negate()
    }
}

macro_rules! impl_hess_dual_binop {
    ($Trait:ident, $method:ident, $try:ident, $op:tt) => {
        impl<F: Float> $Trait<&HessDual<F>> for &HessDual<F> {
            type Output = HessDual<F>;
            #[track_caller]
            #[inline]
            fn $method(self, rhs: &HessDual<F>) -> HessDual<F> {
                or_panic(self.$try(rhs))
            }
        }

        impl<F: Float> $Trait for HessDual<F> {
            type Output = HessDual<F>;
            #[track_caller]
            #[inline]
            fn $method(self, rhs: HessDual<F>) -> HessDual<F> {
                &self $op &rhs
            }
        }

        impl<F: Float> $Trait<&HessDual<F>> for HessDual<F> {
            type Output = HessDual<F>;
            #[track_caller]
            #[inline]
            fn $method(self, rhs: &HessDual<F>) -> HessDual<F> {
                &self $op rhs
            }
        }

        impl<F: Float> $Trait<HessDual<F>> for &HessDual<F> {
            type Output = HessDual<F>;
            #[track_caller]
            #[inline]
            fn $method(self, rhs: HessDual<F>) -> HessDual<F> {
                self $op &rhs
            }
        }
    };
}

impl_hess_dual_binop!(Add, add, try_add, +);
impl_hess_dual_binop!(Sub, sub, try_sub, -);
impl_hess_dual_binop!(Mul, mul, try_mul, *);
impl_hess_dual_binop!(Div, div, try_div, /);

// ──────────────────────────────────────────────
//  Mixed ops: HessDual<F> with primitive floats
// ──────────────────────────────────────────────

macro_rules! impl_hess_dual_scalar_ops {
    ($f:ty) => {
        impl Add<$f> for HessDual<$f> {
            type Output = HessDual<$f>;
            #[inline]
            fn add(self, rhs: $f) -> HessDual<$f> {
                let (v, g, h) = self.into_parts();
                HessDual::from_parts(v + rhs, g, h)
            }
        }

        impl Add<$f> for &HessDual<$f> {
            type Output = HessDual<$f>;
            #[inline]
            fn add(self, rhs: $f) -> HessDual<$f> {
                self.add_scalar(rhs)
            }
        }

        impl Add<HessDual<$f>> for $f {
            type Output = HessDual<$f>;
            #[inline]
            fn add(self, rhs: HessDual<$f>) -> HessDual<$f> {
                rhs + self
            }
        }

        impl Add<&HessDual<$f>> for $f {
            type Output = HessDual<$f>;
            #[inline]
            fn add(self, rhs: &HessDual<$f>) -> HessDual<$f> {
                HessDual::scalar_add(self, rhs)
            }
        }

        impl Sub<$f> for HessDual<$f> {
            type Output = HessDual<$f>;
            #[inline]
            fn sub(self, rhs: $f) -> HessDual<$f> {
                let (v, g, h) = self.into_parts();
                HessDual::from_parts(v - rhs, g, h)
            }
        }

        impl Sub<$f> for &HessDual<$f> {
            type Output = HessDual<$f>;
            #[inline]
            fn sub(self, rhs: $f) -> HessDual<$f> {
                self.sub_scalar(rhs)
            }
        }

        impl Sub<HessDual<$f>> for $f {
            type Output = HessDual<$f>;
            #[inline]
            fn sub(self, rhs: HessDual<$f>) -> HessDual<$f> {
                -rhs + self
            }
        }

        impl Sub<&HessDual<$f>> for $f {
            type Output = HessDual<$f>;
            #[inline]
            fn sub(self, rhs: &HessDual<$f>) -> HessDual<$f> {
                HessDual::scalar_sub(self, rhs)
            }
        }

        impl Mul<$f> for HessDual<$f> {
            type Output = HessDual<$f>;
            #[inline]
            fn mul(self, rhs: $f) -> HessDual<$f> {
                let (v, g, h) = self.into_parts();
                HessDual::from_parts(v * rhs, g * rhs, h * rhs)
            }
        }

        impl Mul<$f> for &HessDual<$f> {
            type Output = HessDual<$f>;
            #[inline]
            fn mul(self, rhs: $f) -> HessDual<$f> {
                self.mul_scalar(rhs)
            }
        }

        impl Mul<HessDual<$f>> for $f {
            type Output = HessDual<$f>;
            #[inline]
            fn mul(self, rhs: HessDual<$f>) -> HessDual<$f> {
                rhs * self
            }
        }

        impl Mul<&HessDual<$f>> for $f {
            type Output = HessDual<$f>;
            #[inline]
            fn mul(self, rhs: &HessDual<$f>) -> HessDual<$f> {
                HessDual::scalar_mul(self, rhs)
            }
        }

        impl Div<$f> for HessDual<$f> {
            type Output = HessDual<$f>;
            #[track_caller]
            #[inline]
            fn div(self, rhs: $f) -> HessDual<$f> {
                &self / rhs
            }
        }

        impl Div<$f> for &HessDual<$f> {
            type Output = HessDual<$f>;
            #[track_caller]
            #[inline]
            fn div(self, rhs: $f) -> HessDual<$f> {
                or_panic(self.try_div_scalar(rhs))
            }
        }

        impl Div<HessDual<$f>> for $f {
            type Output = HessDual<$f>;
            #[track_caller]
            #[inline]
            fn div(self, rhs: HessDual<$f>) -> HessDual<$f> {
                self / &rhs
            }
        }

        impl Div<&HessDual<$f>> for $f {
            type Output = HessDual<$f>;
            #[track_caller]
            #[inline]
            fn div(self, rhs: &HessDual<$f>) -> HessDual<$f> {
                or_panic(HessDual::try_scalar_div(self, rhs))
            }
        }
    };
}

impl_hess_dual_scalar_ops!(f32);
impl_hess_dual_scalar_ops!(f64);
