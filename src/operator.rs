//! Linear operator consumed by the Krylov engine
//!
//! The propagator never inspects the operator: a matrix-vector product is the
//! only capability required, so anything from a dense matrix to a matrix-free
//! stencil can drive the iteration.

use ndarray::linalg::general_mat_vec_mul;
use ndarray::*;

use crate::types::*;

pub trait LinearOperator {
    type Elem: Scalar;

    /// Apply operator into a caller-supplied buffer, `y <- H x`
    ///
    /// `x` and `y` must have the operator's shape; the restart loop calls this
    /// once per Krylov step with preallocated workspace vectors.
    fn apply_to<Si, So>(&self, x: &ArrayBase<Si, Ix1>, y: &mut ArrayBase<So, Ix1>)
    where
        Si: Data<Elem = Self::Elem>,
        So: DataMut<Elem = Self::Elem>;

    /// Apply operator out-of-place
    fn apply<S>(&self, x: &ArrayBase<S, Ix1>) -> Array1<Self::Elem>
    where
        S: Data<Elem = Self::Elem>,
    {
        let mut y = Array1::zeros(x.len());
        self.apply_to(x, &mut y);
        y
    }
}

impl<A, S> LinearOperator for ArrayBase<S, Ix2>
where
    A: Scalar + LinalgScalar,
    S: Data<Elem = A>,
{
    type Elem = A;

    fn apply_to<Si, So>(&self, x: &ArrayBase<Si, Ix1>, y: &mut ArrayBase<So, Ix1>)
    where
        Si: Data<Elem = A>,
        So: DataMut<Elem = A>,
    {
        general_mat_vec_mul(A::one(), self, x, A::zero(), y);
    }
}
