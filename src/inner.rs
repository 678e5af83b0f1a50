//! Inner product on complex vectors

use crate::types::*;
use ndarray::*;

/// Inner Product
///
/// Different from `Dot`, this takes the complex conjugate of `self` elements:
/// $\langle x, y \rangle = \sum_i \overline{x_i}\, y_i$, i.e. the product is
/// conjugate-linear in `self` and linear in `rhs`. The Arnoldi projection
/// relies on this convention; mixing it up silently transposes the Hessenberg
/// matrix.
pub trait InnerProduct {
    type Elem: Scalar;

    /// Inner product `(self.conjugate, rhs)`
    ///
    /// Panics
    /// -------
    /// - if the lengths mismatch (a programming fault, not a numerical error)
    fn inner<S>(&self, rhs: &ArrayBase<S, Ix1>) -> Self::Elem
    where
        S: Data<Elem = Self::Elem>;
}

impl<A, S> InnerProduct for ArrayBase<S, Ix1>
where
    A: Scalar,
    S: Data<Elem = A>,
{
    type Elem = A;

    fn inner<St: Data<Elem = A>>(&self, rhs: &ArrayBase<St, Ix1>) -> A {
        assert_eq!(self.len(), rhs.len(), "inner product length mismatch");
        self.iter()
            .zip(rhs.iter())
            .fold(A::zero(), |acc, (s, r)| acc + s.conj() * *r)
    }
}
