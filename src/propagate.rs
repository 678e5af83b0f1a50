//! Restart loop driver

use ndarray::*;
use num_traits::{Float, One, Zero};
use std::mem::swap;

use crate::error::*;
use crate::krylov::arnoldi;
use crate::leja::extend_leja;
use crate::newton::extend_newton_coeffs;
use crate::norm::Norm;
use crate::operator::LinearOperator;
use crate::ritz::accumulated_ritz_values;
use crate::types::*;
use crate::workspace::Workspace;

/// Tolerances and bounds of the restart loop
#[derive(Debug, Clone, Copy)]
pub struct PropagationParams<R> {
    /// Threshold below which an Arnoldi residual or restart seed counts as an
    /// exact invariant-subspace result
    pub norm_min: R,
    /// Relative error target of the convergence test
    pub relerr: R,
    /// Hard bound on the number of restarts
    pub max_restarts: usize,
}

impl<R: Float> Default for PropagationParams<R> {
    fn default() -> Self {
        PropagationParams {
            norm_min: R::from(1e-14).unwrap(),
            relerr: R::from(1e-12).unwrap(),
            max_restarts: 50,
        }
    }
}

#[cfg_attr(doc, katexit::katexit)]
/// The propagator kernel $f(z) = e^{-iz}$
pub fn expi<A>(z: A) -> A
where
    A: Scalar<Complex = A>,
{
    let i = A::complex(0.0, 1.0);
    (-(i * z)).exp()
}

#[cfg_attr(doc, katexit::katexit)]
/// Overwrite `psi` with $e^{-i H\,dt}\,\psi$ using default tolerances.
///
/// `op` only needs to provide the matrix-vector product; see
/// [propagate_with] for a custom scalar function and explicit tolerances.
///
/// ```
/// use ndarray::*;
/// use newtonprop::*;
///
/// let h: Array2<c64> = from_diag(&[c64::new(1.0, 0.0), c64::new(2.0, 0.0)]);
/// let mut psi = array![c64::new(1.0, 0.0), c64::new(0.0, 0.0)];
/// let mut wrk = Workspace::new(&psi, 4);
/// propagate(&mut psi, &h, c64::new(0.5, 0.0), &mut wrk).unwrap();
///
/// // an eigenvector only picks up the phase e^{-i h dt}
/// let expected = c64::new(0.0, -0.5).exp();
/// assert_aclose!((psi[0] - expected).abs(), 0.0, 1e-12);
/// assert_aclose!(psi[1].abs(), 0.0, 1e-12);
/// ```
pub fn propagate<A, S, O>(
    psi: &mut ArrayBase<S, Ix1>,
    op: &O,
    dt: A,
    wrk: &mut Workspace<A>,
) -> Result<()>
where
    A: Scalar<Complex = A> + Lapack,
    S: DataMut<Elem = A>,
    O: LinearOperator<Elem = A>,
{
    propagate_with(psi, op, dt, wrk, expi, &PropagationParams::default())
}

#[cfg_attr(doc, katexit::katexit)]
/// Overwrite `psi` with $f(H\,dt)\,\psi$.
///
/// Restarted evaluation: each pass projects $H \cdot dt$ onto a Krylov
/// subspace of dimension at most `wrk.m_max()`, extends the global Leja node
/// sequence with the Ritz values of the projection, extends the Newton
/// divided differences of `func` on those nodes, and applies the new portion
/// of the Newton series
/// $$ P(z) = \sum_k a_k \prod_{j<k} \frac{z - L_j}{r} $$
/// to the current residual seed. The loop stops once the estimated
/// contribution of the last term, $\beta\,|a_\mathrm{last}|\,/\,(1+\lVert\psi\rVert)$,
/// drops below `params.relerr`.
///
/// `func` must be analytic on (a neighbourhood of) the spectrum of
/// $H \cdot dt$; it is evaluated once per Leja node, never in inner loops.
///
/// On success `psi` holds the result and the workspace diagnostics
/// ([restarts](Workspace::restarts), [n_leja](Workspace::n_leja),
/// [n_a](Workspace::n_a), [radius](Workspace::radius)) describe the run. On
/// error `psi` is left in an unspecified state; callers needing rollback must
/// copy it beforehand.
///
/// Panics
/// -------
/// - if `psi` is not shaped like the workspace prototype (contract violation)
pub fn propagate_with<A, S, O, F>(
    psi: &mut ArrayBase<S, Ix1>,
    op: &O,
    dt: A,
    wrk: &mut Workspace<A>,
    func: F,
    params: &PropagationParams<A::Real>,
) -> Result<()>
where
    A: Scalar<Complex = A> + Lapack,
    S: DataMut<Elem = A>,
    O: LinearOperator<Elem = A>,
    F: Fn(A) -> A,
{
    if dt == A::zero() {
        return Err(PropagationError::ZeroTimeStep);
    }
    assert_eq!(psi.len(), wrk.dim());
    wrk.reset();

    let mut beta = psi.norm_l2();
    if beta <= params.norm_min {
        return Ok(());
    }
    azip!((v in &mut wrk.seed, &p in &*psi) *v = p.div_real(beta));

    let mut m = wrk.m_max;
    let mut s = 0;

    loop {
        if beta <= params.norm_min {
            break;
        }
        m = arnoldi(
            &mut wrk.hess,
            &mut wrk.basis,
            &wrk.seed,
            op,
            dt,
            m,
            true,
            params.norm_min,
        );

        // Breakdown at the very first step of the first pass: the input is an
        // eigenvector with eigenvalue hess[(0,0)] and the result is exact.
        // The subdiagonal test distinguishes this from a caller-requested
        // Krylov dimension of one.
        if s == 0 && m == 1 && wrk.hess[(1, 0)].abs() < dt.abs() * params.norm_min {
            let fh = func(wrk.hess[(0, 0)]);
            psi.map_inplace(|p| *p = *p * fh);
            break;
        }

        let mut pool = accumulated_ritz_values(&wrk.hess, m)?;
        if s == 0 {
            let rho = pool
                .iter()
                .fold(A::Real::zero(), |acc, z| acc.max(z.abs()));
            wrk.radius = A::real(1.2) * rho;
        }

        let n_s = wrk.leja.len();
        extend_leja(&mut wrk.leja, &mut pool, m);
        let n_new = wrk.leja.len() - n_s;
        if n_new == 0 {
            return Err(PropagationError::StagnatedLeja);
        }
        extend_newton_coeffs(&mut wrk.coeffs, &wrk.leja, wrk.radius, &func)?;

        // Newton polynomial of the extended Hessenberg applied to beta * e1,
        // accumulated term by term in the Newton basis R_k
        let mp1 = m + 1;
        wrk.r_state.clear();
        wrk.r_state.resize(mp1, A::zero());
        wrk.r_next.clear();
        wrk.r_next.resize(mp1, A::zero());
        wrk.p_accum.clear();
        wrk.p_accum.resize(mp1, A::zero());
        wrk.r_state[0] = A::from_real(beta);
        wrk.p_accum[0] = wrk.coeffs[n_s] * wrk.r_state[0];
        for k in 0..n_new - 1 {
            newton_basis_step(
                &wrk.hess,
                mp1,
                wrk.leja[n_s + k],
                wrk.radius,
                &wrk.r_state,
                &mut wrk.r_next,
            );
            swap(&mut wrk.r_state, &mut wrk.r_next);
            let a = wrk.coeffs[n_s + k + 1];
            for (p, r) in wrk.p_accum.iter_mut().zip(&wrk.r_state) {
                *p += a * *r;
            }
        }

        // The row m+1 of P is the truncation residual; it belongs to the
        // restart seed below, not to the solution.
        if s == 0 {
            psi.fill(A::zero());
        }
        for i in 0..m {
            let c = wrk.p_accum[i];
            azip!((p in &mut *psi, &q in &wrk.basis[i]) *p = *p + c * q);
        }

        // One more Newton-basis step yields the residual seed of the next
        // restart, expressed in the extended basis.
        newton_basis_step(
            &wrk.hess,
            mp1,
            wrk.leja[n_s + n_new - 1],
            wrk.radius,
            &wrk.r_state,
            &mut wrk.r_next,
        );
        swap(&mut wrk.r_state, &mut wrk.r_next);
        let beta_new = Float::sqrt(wrk.r_state.iter().map(|x| x.square()).sum::<A::Real>());
        if beta_new > params.norm_min {
            for x in wrk.r_state.iter_mut() {
                *x = x.div_real(beta_new);
            }
            let r0 = wrk.r_state[0];
            azip!((v in &mut wrk.seed) *v = *v * r0);
            for i in 1..=m {
                let c = wrk.r_state[i];
                azip!((v in &mut wrk.seed, &q in &wrk.basis[i]) *v = *v + c * q);
            }
            // Gram-Schmidt drift leaves the reassembled seed slightly off
            // unit norm; renormalize and fold the factor into beta so that
            // beta * seed is preserved.
            let nv = wrk.seed.norm_l2();
            azip!((v in &mut wrk.seed) *v = v.div_real(nv));
            beta = beta_new * nv;
        } else {
            beta = A::Real::zero();
        }

        let last = wrk.coeffs[wrk.coeffs.len() - 1].abs();
        if beta * last / (A::Real::one() + psi.norm_l2()) < params.relerr {
            break;
        }
        s += 1;
        if s > params.max_restarts {
            return Err(PropagationError::NotConverged {
                max_restarts: params.max_restarts,
            });
        }
    }
    wrk.restarts = s.saturating_sub(1);
    Ok(())
}

/// `dst = (hess - z) src / radius` restricted to the leading `mp1` block
fn newton_basis_step<A: Scalar>(
    hess: &Array2<A>,
    mp1: usize,
    z: A,
    radius: A::Real,
    src: &[A],
    dst: &mut [A],
) {
    for i in 0..mp1 {
        let mut acc = A::zero();
        for j in i.saturating_sub(1)..mp1 {
            acc += hess[(i, j)] * src[j];
        }
        dst[i] = (acc - z * src[i]).div_real(radius);
    }
}
