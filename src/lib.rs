//! The `newtonprop` crate evaluates the action of an analytic matrix function on a vector,
//! $\Psi \leftarrow f(H \cdot dt)\,\Psi$, for operators $H$ that are too large to exponentiate
//! directly and are only available through a matrix-vector product.
//!
//! The default $f(z) = e^{-iz}$ makes this the quantum-mechanical propagator
//! $\Psi \leftarrow e^{-iH\,dt}\,\Psi$.
//!
//! Algorithm
//! -----------------------
//! A restarted Arnoldi iteration builds short Krylov bases of $H \cdot dt$; the Ritz values of
//! the projected Hessenberg matrices feed a greedily grown sequence of Leja interpolation
//! nodes, on which Newton divided differences of $f$ are accumulated. Each restart applies a
//! partial Newton polynomial of the Hessenberg matrix to the current residual seed and adds
//! the result to $\Psi$, until the estimated contribution of the last term drops below the
//! requested relative error.
//!
//! - [propagate](propagate/fn.propagate.html) / [propagate_with](propagate/fn.propagate_with.html):
//!   the restart loop driver
//! - [Workspace](workspace/struct.Workspace.html): preallocated storage making repeated calls
//!   allocation-free at the Krylov scale
//! - [arnoldi](krylov/arnoldi/fn.arnoldi.html): extended Arnoldi/modified Gram-Schmidt engine
//! - [accumulated_ritz_values](ritz/fn.accumulated_ritz_values.html): Hessenberg block spectra
//! - [extend_leja](leja/fn.extend_leja.html): greedy product-distance node selection
//! - [extend_newton_coeffs](newton/fn.extend_newton_coeffs.html): divided differences at a
//!   fixed scaling radius
//!
//! The lower-level operations are exposed for testing and for callers composing their own
//! restart policies; most users only need `propagate` and `Workspace`.
//!
//! Backend
//! -----------------------
//! Hessenberg spectra use LAPACK `*geev` through [`lax`]. Select a backend the usual way,
//! e.g. `--features=openblas-system`. The optional `blas` feature routes the dense
//! matrix-operator through BLAS `gemv`.

#![allow(
    clippy::module_inception,
    clippy::many_single_char_names,
    clippy::type_complexity,
    clippy::ptr_arg
)]
#![deny(rustdoc::broken_intra_doc_links, rustdoc::private_intra_doc_links)]

#[macro_use]
extern crate ndarray;

pub mod assert;
pub mod error;
pub mod generate;
pub mod inner;
pub mod krylov;
pub mod leja;
pub mod newton;
pub mod norm;
pub mod operator;
pub mod propagate;
pub mod ritz;
pub mod types;
pub mod workspace;

pub use crate::assert::*;
pub use crate::generate::*;
pub use crate::inner::*;
pub use crate::leja::*;
pub use crate::newton::*;
pub use crate::norm::*;
pub use crate::operator::*;
pub use crate::propagate::*;
pub use crate::ritz::*;
pub use crate::types::*;
pub use crate::workspace::*;
