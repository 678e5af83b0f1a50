//! Generator functions for test vectors and matrices
//!
//! Deterministic tests pass a seeded RNG; anything else (`rand::thread_rng()`
//! included) works as well.

use ndarray::*;
use rand::prelude::*;

use crate::error::*;
use crate::types::*;

/// Generate a random array of the given shape
pub fn random_using<A, S, Sh, D, R>(sh: Sh, rng: &mut R) -> ArrayBase<S, D>
where
    A: Scalar,
    S: DataOwned<Elem = A>,
    D: Dimension,
    Sh: ShapeBuilder<Dim = D>,
    R: Rng,
{
    ArrayBase::from_shape_fn(sh, |_| A::rand(rng))
}

/// Generate a random Hermite matrix
///
/// The strict upper triangle is drawn at random and mirrored conjugated into
/// the lower one; the diagonal keeps only its real part.
pub fn random_hermite_using<A, S, R>(n: usize, rng: &mut R) -> ArrayBase<S, Ix2>
where
    A: Scalar,
    S: DataOwned<Elem = A> + DataMut,
    R: Rng,
{
    let mut a: ArrayBase<S, Ix2> = random_using((n, n), rng);
    for i in 0..n {
        a[(i, i)] = A::from_real(a[(i, i)].re());
        for j in 0..i {
            a[(i, j)] = a[(j, i)].conj();
        }
    }
    a
}

/// construct matrix from diag
pub fn from_diag<A: Scalar>(d: &[A]) -> Array2<A> {
    Array2::from_diag(&aview1(d))
}

/// stack vectors into matrix horizontally
pub fn hstack<A, S>(xs: &[ArrayBase<S, Ix1>]) -> Result<Array2<A>>
where
    A: Scalar,
    S: Data<Elem = A>,
{
    let views: Vec<_> = xs.iter().map(|x| x.view()).collect();
    stack(Axis(1), &views).map_err(Into::into)
}
