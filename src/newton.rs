//! Newton divided differences on a Leja sequence

use crate::error::*;
use crate::types::*;

#[cfg_attr(doc, katexit::katexit)]
/// Extend the Newton coefficients of `func` to cover all nodes in `leja`.
///
/// `coeffs` holds the divided differences of `func` on the leading
/// `coeffs.len()` nodes, in the radius-scaled Newton form
/// $$ P(z) = \sum_k a_k \prod_{j<k} \frac{z - L_j}{r}. $$
/// The running product in the triangular recurrence absorbs the $1/r^k$
/// normalization, so for a radius of the order of the spectral extent the
/// coefficients stay bounded at any practical order.
///
/// `radius` must be the same value on every extension of one coefficient
/// array; changing it invalidates all previously computed coefficients.
///
/// Returns the new total number of coefficients, or
/// [`DividedDifferenceUnderflow`](crate::error::PropagationError) once the
/// scaled product drops below 1e-200 and the recurrence loses all meaning.
pub fn extend_newton_coeffs<A, F>(
    coeffs: &mut Vec<A>,
    leja: &[A],
    radius: A::Real,
    func: F,
) -> Result<usize>
where
    A: Scalar,
    F: Fn(A) -> A,
{
    let n_leja = leja.len();
    if coeffs.len() >= n_leja {
        return Ok(coeffs.len());
    }
    if coeffs.is_empty() {
        coeffs.push(func(leja[0]));
    }
    let tiny = A::real(1e-200);
    let a0 = coeffs[0];
    for k in coeffs.len().max(1)..n_leja {
        let zk = leja[k];
        let mut d = A::one();
        let mut p = A::zero();
        for n in 1..k {
            let zd = zk - leja[n - 1];
            d = (d * zd).div_real(radius);
            p += coeffs[n] * d;
        }
        let zd = zk - leja[k - 1];
        d = (d * zd).div_real(radius);
        if d.abs() <= tiny {
            return Err(PropagationError::DividedDifferenceUnderflow { order: k });
        }
        coeffs.push((func(zk) - a0 - p) / d);
    }
    Ok(coeffs.len())
}

/// Evaluate the radius-scaled Newton polynomial at a scalar point.
pub fn newton_polynomial<A>(coeffs: &[A], leja: &[A], radius: A::Real, z: A) -> A
where
    A: Scalar,
{
    let mut acc = A::zero();
    let mut d = A::one();
    for (k, a) in coeffs.iter().enumerate() {
        if k > 0 {
            d = (d * (z - leja[k - 1])).div_real(radius);
        }
        acc += *a * d;
    }
    acc
}
