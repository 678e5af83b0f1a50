//! Ritz values: eigenvalues of leading Hessenberg blocks

use lax::layout::MatrixLayout;
use ndarray::*;

use crate::error::*;
use crate::types::*;

/// Eigenvalues of the leading `k x k` block of a Hessenberg matrix.
///
/// Ordering within the result is whatever the underlying routine produces and
/// is not part of the contract; callers treat Ritz values as an unordered set.
pub fn ritz_values<A, S>(hess: &ArrayBase<S, Ix2>, k: usize) -> Result<Vec<A>>
where
    A: Scalar<Complex = A> + Lapack,
    S: Data<Elem = A>,
{
    let mut out = Vec::with_capacity(k);
    block_eigvals(hess, k, &mut out)?;
    Ok(out)
}

/// Concatenated eigenvalues of the leading `k x k` blocks for `k = 1..=m`.
///
/// Flat layout of length `m (m+1) / 2`; block `k` occupies positions
/// `(k-1)k/2 .. (k-1)k/2 + k`. The restart loop uses this as its Leja
/// candidate pool: the low-order blocks contribute interior spectral
/// estimates that a single m-th order block would miss.
pub fn accumulated_ritz_values<A, S>(hess: &ArrayBase<S, Ix2>, m: usize) -> Result<Vec<A>>
where
    A: Scalar<Complex = A> + Lapack,
    S: Data<Elem = A>,
{
    let mut out = Vec::with_capacity(m * (m + 1) / 2);
    for k in 1..=m {
        block_eigvals(hess, k, &mut out)?;
    }
    Ok(out)
}

fn block_eigvals<A, S>(hess: &ArrayBase<S, Ix2>, k: usize, out: &mut Vec<A>) -> Result<()>
where
    A: Scalar<Complex = A> + Lapack,
    S: Data<Elem = A>,
{
    assert!(k >= 1);
    assert!(hess.nrows() >= k && hess.ncols() >= k);
    match k {
        1 => out.push(hess[(0, 0)]),
        2 => {
            let (a, b) = (hess[(0, 0)], hess[(0, 1)]);
            let (c, d) = (hess[(1, 0)], hess[(1, 1)]);
            let disc = ((a - d) * (a - d) + (b * c).mul_real(A::real(4.0))).sqrt();
            out.push((a + d + disc).mul_real(A::real(0.5)));
            out.push((a + d - disc).mul_real(A::real(0.5)));
        }
        _ => {
            // stage the block column-major for *geev
            let mut buf = Vec::with_capacity(k * k);
            for j in 0..k {
                for i in 0..k {
                    buf.push(hess[(i, j)]);
                }
            }
            let layout = MatrixLayout::F {
                col: k as i32,
                lda: k as i32,
            };
            let (eigs, _) = A::eig(false, layout, &mut buf)?;
            out.extend(eigs);
        }
    }
    Ok(())
}
