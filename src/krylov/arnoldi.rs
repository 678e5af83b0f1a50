//! Arnoldi iteration
//!
//! - [Arnoldi iteration - Wikipedia](https://en.wikipedia.org/wiki/Arnoldi_iteration)

use crate::{inner::*, norm::Norm, operator::LinearOperator, types::*};
use ndarray::*;

/// Build an orthonormal Krylov basis of `op` from `seed` and the Hessenberg
/// projection of `op * dt`, using single-pass modified Gram-Schmidt.
///
/// - `hess` must be at least `(m+1) x (m+1)`; it is zeroed, then filled so that
///   its leading block equals `Q* (H dt) Q`. The inner products are stored
///   dt-scaled, so the projection represents `H * dt`, not `H`.
/// - `basis` must hold at least `m+1` vectors shaped like `seed`; `seed` is
///   copied into `basis[0]` and is expected to be unit-norm.
/// - With `extended`, the `(m+1)`-th vector is orthogonalized and normalized as
///   well and its residual norm is recorded in `hess[(m, m-1)]`.
///
/// Returns the achieved dimension `m' <= m`. `m' < m` (or, for `m' == m`, a
/// recorded subdiagonal below `|dt| * norm_min`) signals that the Krylov
/// subspace is invariant: the residual in `basis[m']` is left unnormalized and
/// the iterate is exact within the subspace. Breakdown is a successful
/// short-circuit, not an error.
///
/// Reorthogonalization is not performed; callers needing tighter orthogonality
/// must use smaller Krylov dimensions.
///
/// Panics
/// -------
/// - if `hess` or `basis` is too small for the requested order (contract
///   violation)
pub fn arnoldi<A, S, O>(
    hess: &mut Array2<A>,
    basis: &mut [Array1<A>],
    seed: &ArrayBase<S, Ix1>,
    op: &O,
    dt: A,
    m: usize,
    extended: bool,
    norm_min: A::Real,
) -> usize
where
    A: Scalar,
    S: Data<Elem = A>,
    O: LinearOperator<Elem = A>,
{
    assert!(m >= 1);
    assert!(hess.nrows() > m && hess.ncols() > m);
    assert!(basis.len() > m);

    hess.fill(A::zero());
    basis[0].assign(seed);
    for j in 0..m {
        let (head, tail) = basis.split_at_mut(j + 1);
        let w = &mut tail[0];
        op.apply_to(&head[j], w);
        for i in 0..=j {
            let c = head[i].inner(w);
            hess[(i, j)] = dt * c;
            azip!((w in &mut *w, &q in &head[i]) *w = *w - c * q);
        }
        if j + 1 < m || extended {
            let h = w.norm_l2();
            hess[(j + 1, j)] = dt.mul_real(h);
            if h < norm_min {
                return j + 1;
            }
            azip!((w in &mut *w) *w = w.div_real(h));
        }
    }
    m
}
