use nalgebra::{DMatrix, DVector};

use crate::error::AdError;
use crate::float::Float;
use crate::hess_dual::HessDual;

/// Seed one leaf per coordinate of `x`.
///
/// Leaf `i` has index `i` in a design space of dimension `x.len()` and is
/// named `x{i}`.
pub fn variables<F: Float>(x: &[F]) -> Result<Vec<HessDual<F>>, AdError> {
    let n = x.len();
    x.iter()
        .enumerate()
        .map(|(i, &xi)| HessDual::leaf(xi, n, i, format!("x{i}")))
        .collect()
}

/// Evaluate `f` at `x` and return `(f(x), ∇f(x), ∇²f(x))`.
///
/// `f` receives one leaf per coordinate of `x` and reports operator
/// failures through `Result`, so the first rejected operation aborts the
/// whole evaluation.
///
/// ```
/// use hessdual::{hessian, HessDual64};
///
/// // f(x, y) = x² y
/// let (val, grad, hess) = hessian(
///     |v: &[HessDual64]| v[0].try_mul(&v[0])?.try_mul(&v[1]),
///     &[3.0, 2.0],
/// )
/// .unwrap();
/// assert_eq!(val, 18.0);
/// assert_eq!(grad.as_slice(), &[12.0, 9.0]);
/// assert_eq!(hess[(0, 0)], 4.0);
/// assert_eq!(hess[(0, 1)], 6.0);
/// ```
pub fn hessian<F: Float>(
    f: impl FnOnce(&[HessDual<F>]) -> Result<HessDual<F>, AdError>,
    x: &[F],
) -> Result<(F, DVector<F>, DMatrix<F>), AdError> {
    let n = x.len();
    let span = tracing::debug_span!("hessian", space_dim = n);
    let _enter = span.enter();

    let inputs = variables(x)?;
    let output = f(&inputs)?;

    if output.space_dim() != n {
        tracing::debug!(
            output_dim = output.space_dim(),
            "objective returned a value from a different design space"
        );
        return Err(AdError::OutputSpaceMismatch {
            expected: n,
            found: output.space_dim(),
        });
    }

    Ok(output.into_parts())
}
