//! Closeness checks and assertions used throughout the test suites
//!
//! Each check returns the observed deviation: `Ok(dev)` when it is inside the
//! tolerance, `Err(dev)` otherwise, so the `assert_*` macros can report the
//! actual distance on failure.

use ndarray::*;

use crate::norm::*;
use crate::types::*;

/// check two values are close in terms of the relative tolerance
pub fn rclose<A: Scalar>(test: A, truth: A, rtol: A::Real) -> Result<A::Real, A::Real> {
    let dev = (test - truth).abs() / truth.abs();
    if dev < rtol {
        Ok(dev)
    } else {
        Err(dev)
    }
}

/// check two values are close in terms of the absolute tolerance
pub fn aclose<A: Scalar>(test: A, truth: A, atol: A::Real) -> Result<A::Real, A::Real> {
    let dev = (test - truth).abs();
    if dev < atol {
        Ok(dev)
    } else {
        Err(dev)
    }
}

/// check two arrays are close in maximum norm
pub fn close_max<A, S1, S2, D>(
    test: &ArrayBase<S1, D>,
    truth: &ArrayBase<S2, D>,
    atol: A::Real,
) -> Result<A::Real, A::Real>
where
    A: Scalar,
    S1: Data<Elem = A>,
    S2: Data<Elem = A>,
    D: Dimension,
{
    let dev = (test - truth).norm_max();
    if dev < atol {
        Ok(dev)
    } else {
        Err(dev)
    }
}

/// check two arrays are close in L2 norm, relative to the norm of `truth`
pub fn close_l2<A, S1, S2, D>(
    test: &ArrayBase<S1, D>,
    truth: &ArrayBase<S2, D>,
    rtol: A::Real,
) -> Result<A::Real, A::Real>
where
    A: Scalar,
    S1: Data<Elem = A>,
    S2: Data<Elem = A>,
    D: Dimension,
{
    let dev = (test - truth).norm_l2() / truth.norm_l2();
    if dev < rtol {
        Ok(dev)
    } else {
        Err(dev)
    }
}

/// Assert [rclose]; an optional message follows after `;`
#[macro_export]
macro_rules! assert_rclose {
    ($test:expr, $truth:expr, $tol:expr) => {
        $crate::rclose($test, $truth, $tol).unwrap();
    };
    ($test:expr, $truth:expr, $tol:expr; $comment:expr) => {
        $crate::rclose($test, $truth, $tol).expect($comment);
    };
}

/// Assert [aclose]; an optional message follows after `;`
#[macro_export]
macro_rules! assert_aclose {
    ($test:expr, $truth:expr, $tol:expr) => {
        $crate::aclose($test, $truth, $tol).unwrap();
    };
    ($test:expr, $truth:expr, $tol:expr; $comment:expr) => {
        $crate::aclose($test, $truth, $tol).expect($comment);
    };
}

/// Assert [close_max]; an optional message follows after `;`
#[macro_export]
macro_rules! assert_close_max {
    ($test:expr, $truth:expr, $tol:expr) => {
        $crate::close_max($test, $truth, $tol).unwrap();
    };
    ($test:expr, $truth:expr, $tol:expr; $comment:expr) => {
        $crate::close_max($test, $truth, $tol).expect($comment);
    };
}

/// Assert [close_l2]; an optional message follows after `;`
#[macro_export]
macro_rules! assert_close_l2 {
    ($test:expr, $truth:expr, $tol:expr) => {
        $crate::close_l2($test, $truth, $tol).unwrap();
    };
    ($test:expr, $truth:expr, $tol:expr; $comment:expr) => {
        $crate::close_l2($test, $truth, $tol).expect($comment);
    };
}
