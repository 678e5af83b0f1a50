//! Greedy selection of Leja interpolation nodes
//!
//! A Leja sequence orders interpolation nodes so that each new node maximizes
//! the product of distances to all previous ones. Interpolating on such a
//! sequence keeps the Newton divided differences well conditioned, which is
//! what lets the restart loop reuse one global node set across restarts.

use num_traits::{Float, One, Zero};

use crate::types::*;

#[cfg_attr(doc, katexit::katexit)]
/// Extend `leja` by up to `n_use` points drawn greedily from `candidates`.
///
/// At each step the candidate maximizing
/// $p(z) = \prod_j |z - L_j|^{1/(n + n_\mathrm{use})}$ over the nodes selected
/// so far is appended. The fixed exponent keeps `p` of order one: the raw
/// product has one factor per node and would leave double precision after a
/// few dozen restarts, while a monotone rescaling cannot change the argmax.
///
/// An empty sequence is bootstrapped with the candidate of largest absolute
/// value, anchoring the sequence near the outer spectral radius.
///
/// Selected candidates are consumed by swapping the last remaining candidate
/// into their slot. A candidate closer to an existing node than the working
/// precision can resolve (relative distance below `epsilon^(3/4)`) repeats
/// that node and is never selected: the divided difference such a node would
/// produce is a quotient of two rounding errors. The sequence therefore stays
/// duplicate-free; if only repeats remain, the extension stops short and the
/// caller observes fewer added points than requested.
///
/// Returns the new total length of `leja`.
pub fn extend_leja<A>(leja: &mut Vec<A>, candidates: &mut [A], n_use: usize) -> usize
where
    A: Scalar,
{
    let n_old = leja.len();
    let mut u = candidates.len();
    let mut added = 0;

    if n_old == 0 && u > 0 && n_use > 0 {
        let mut i_max = 0;
        let mut z_max = candidates[0].square();
        for (i, z) in candidates.iter().enumerate().skip(1) {
            let zz = z.square();
            if zz > z_max {
                z_max = zz;
                i_max = i;
            }
        }
        leja.push(candidates[i_max]);
        candidates.swap(i_max, u - 1);
        u -= 1;
        added += 1;
    }

    let ex = A::real(1.0 / (n_old + n_use) as f64);
    let resolution = Float::powf(A::Real::epsilon(), A::real(0.75));
    while added < n_use && u > 0 {
        let mut p_max = A::Real::zero();
        let mut i_max = None;
        for (i, z) in candidates[..u].iter().enumerate() {
            let mut p = A::Real::one();
            for node in leja.iter() {
                let zd = (*z - *node).abs();
                if zd <= (z.abs() + node.abs()) * resolution {
                    p = A::Real::zero();
                    break;
                }
                p = p * Float::powf(zd, ex);
            }
            if p > p_max {
                p_max = p;
                i_max = Some(i);
            }
        }
        match i_max {
            Some(i) => {
                leja.push(candidates[i]);
                candidates.swap(i, u - 1);
                u -= 1;
                added += 1;
            }
            None => break,
        }
    }
    leja.len()
}
