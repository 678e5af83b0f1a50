//! Krylov subspace methods

pub mod arnoldi;

pub use arnoldi::arnoldi;
