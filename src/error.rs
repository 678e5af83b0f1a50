//! Define Errors

use ndarray::ShapeError;
use thiserror::Error;

pub type Result<T> = ::std::result::Result<T, PropagationError>;

/// Master Error type of this crate
#[derive(Debug, Error)]
pub enum PropagationError {
    /// The propagation step must be non-zero
    #[error("Time step dt = 0 is not a valid propagation step")]
    ZeroTimeStep,

    /// The running product of scaled node distances underflowed; the Newton
    /// coefficients are no longer numerically meaningful. Reduce the Krylov
    /// dimension or the time step.
    #[error("Divided-difference underflow while extending coefficient {order}")]
    DividedDifferenceUnderflow { order: usize },

    /// The restart loop did not reach the requested relative error
    #[error("No convergence within {max_restarts} restarts")]
    NotConverged { max_restarts: usize },

    /// Every Ritz candidate of the current restart coincides with an existing
    /// Leja node, so the Newton series cannot be extended
    #[error("Leja selection stagnated: no admissible candidate among the Ritz values")]
    StagnatedLeja,

    #[error(transparent)]
    Lapack(#[from] lax::error::Error),

    #[error(transparent)]
    Shape(#[from] ShapeError),
}
