//! Preallocated storage for the restart loop

use ndarray::*;
use num_traits::Zero;

use crate::types::*;

/// Storage for every call of the restart loop driver, allocated once per
/// problem shape.
///
/// Owns the Krylov basis vectors, the seed vector, the Hessenberg storage,
/// the global Leja and Newton-coefficient arrays and the small Newton-basis
/// scratch. A workspace is reusable across any number of propagations of the
/// same shape; it must never be shared between concurrent driver calls.
///
/// After a successful call the diagnostic accessors report the state of the
/// last propagation; the next call resets them.
#[derive(Debug, Clone)]
pub struct Workspace<A: Scalar> {
    pub(crate) m_max: usize,
    pub(crate) basis: Vec<Array1<A>>,
    pub(crate) seed: Array1<A>,
    pub(crate) hess: Array2<A>,
    pub(crate) leja: Vec<A>,
    pub(crate) coeffs: Vec<A>,
    pub(crate) r_state: Vec<A>,
    pub(crate) r_next: Vec<A>,
    pub(crate) p_accum: Vec<A>,
    pub(crate) radius: A::Real,
    pub(crate) restarts: usize,
}

impl<A: Scalar> Workspace<A> {
    /// Allocate a workspace for vectors shaped like `prototype` and a maximum
    /// Krylov dimension `m_max` per restart.
    ///
    /// A Krylov dimension of the full space is ill-posed (the basis would
    /// already span everything), so `m_max >= prototype.len()` is clamped to
    /// `prototype.len() - 1`, floored at the single Arnoldi step a
    /// one-dimensional problem needs for its short-circuit.
    ///
    /// Panics
    /// -------
    /// - if `prototype` is empty or `m_max == 0`
    pub fn new<S>(prototype: &ArrayBase<S, Ix1>, m_max: usize) -> Self
    where
        S: Data<Elem = A>,
    {
        let n = prototype.len();
        assert!(n > 0);
        assert!(m_max > 0);
        let m_max = if m_max >= n { (n - 1).max(1) } else { m_max };
        Workspace {
            m_max,
            basis: (0..=m_max).map(|_| Array1::zeros(n)).collect(),
            seed: Array1::zeros(n),
            hess: Array2::zeros((m_max + 1, m_max + 1)),
            leja: Vec::with_capacity(10 * m_max + 1),
            coeffs: Vec::with_capacity(10 * m_max + 1),
            r_state: Vec::with_capacity(m_max + 1),
            r_next: Vec::with_capacity(m_max + 1),
            p_accum: Vec::with_capacity(m_max + 1),
            radius: A::Real::zero(),
            restarts: 0,
        }
    }

    /// Length of the vectors this workspace is shaped for
    pub fn dim(&self) -> usize {
        self.seed.len()
    }

    /// Maximum Krylov dimension per restart (after clamping)
    pub fn m_max(&self) -> usize {
        self.m_max
    }

    /// Number of Leja nodes accumulated by the last call
    pub fn n_leja(&self) -> usize {
        self.leja.len()
    }

    /// Number of Newton coefficients accumulated by the last call
    pub fn n_a(&self) -> usize {
        self.coeffs.len()
    }

    /// Scaling radius fixed on the first restart of the last call
    pub fn radius(&self) -> A::Real {
        self.radius
    }

    /// Restart count recorded by the last call
    pub fn restarts(&self) -> usize {
        self.restarts
    }

    /// Leja nodes of the last call
    pub fn leja_nodes(&self) -> &[A] {
        &self.leja
    }

    /// Newton coefficients of the last call
    pub fn newton_coeffs(&self) -> &[A] {
        &self.coeffs
    }

    pub(crate) fn reset(&mut self) {
        self.leja.clear();
        self.coeffs.clear();
        self.radius = A::Real::zero();
        self.restarts = 0;
    }
}
