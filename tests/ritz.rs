use ndarray::*;
use newtonprop::*;

fn c(re: f64, im: f64) -> c64 {
    c64::new(re, im)
}

#[test]
fn single_entry() {
    let hess = array![[c(0.3, -0.7)]];
    let eigs = ritz_values(&hess, 1).unwrap();
    assert_eq!(eigs, vec![c(0.3, -0.7)]);
}

#[test]
fn two_by_two_closed_form() {
    // [[0, 1], [1, 0]] has eigenvalues +1 and -1
    let hess = array![[c(0.0, 0.0), c(1.0, 0.0)], [c(1.0, 0.0), c(0.0, 0.0)]];
    let mut eigs = ritz_values(&hess, 2).unwrap();
    eigs.sort_by(|a, b| a.re().partial_cmp(&b.re()).unwrap());
    assert_aclose!(eigs[0], c(-1.0, 0.0), 1e-14);
    assert_aclose!(eigs[1], c(1.0, 0.0), 1e-14);
}

#[test]
fn two_by_two_complex_trace_and_det() {
    let hess = array![[c(1.0, 0.5), c(0.3, -0.2)], [c(2.0, 0.0), c(-0.4, 1.0)]];
    let eigs = ritz_values(&hess, 2).unwrap();
    let trace = hess[(0, 0)] + hess[(1, 1)];
    let det = hess[(0, 0)] * hess[(1, 1)] - hess[(0, 1)] * hess[(1, 0)];
    assert_aclose!(eigs[0] + eigs[1], trace, 1e-13);
    assert_aclose!(eigs[0] * eigs[1], det, 1e-13);
}

#[test]
fn triangular_block_spectrum_is_its_diagonal() {
    // zero subdiagonal: a valid (if degenerate) Hessenberg matrix
    let hess = array![
        [c(1.0, 0.0), c(0.5, 0.1), c(-0.3, 0.0)],
        [c(0.0, 0.0), c(2.0, 0.0), c(0.7, -0.4)],
        [c(0.0, 0.0), c(0.0, 0.0), c(3.0, 0.0)],
    ];
    let mut eigs = ritz_values(&hess, 3).unwrap();
    eigs.sort_by(|a, b| a.re().partial_cmp(&b.re()).unwrap());
    assert_aclose!(eigs[0], c(1.0, 0.0), 1e-12);
    assert_aclose!(eigs[1], c(2.0, 0.0), 1e-12);
    assert_aclose!(eigs[2], c(3.0, 0.0), 1e-12);
}

#[test]
fn accumulated_layout_and_block_invariants() {
    let mut rng = rand_pcg::Mcg128Xsl64::new(0xcafef00dd15ea5e5);
    let full: Array2<c64> = random_using((4, 4), &mut rng);
    // project to Hessenberg form: zero below the first subdiagonal
    let mut hess = full;
    for i in 2..4 {
        for j in 0..i - 1 {
            hess[(i, j)] = c(0.0, 0.0);
        }
    }

    let m = 4;
    let pool = accumulated_ritz_values(&hess, m).unwrap();
    assert_eq!(pool.len(), m * (m + 1) / 2);

    // block k lives at offset (k-1)k/2 and sums to the trace of the leading
    // k x k block
    for k in 1..=m {
        let off = (k - 1) * k / 2;
        let sum: c64 = pool[off..off + k].iter().sum();
        let trace: c64 = (0..k).map(|i| hess[(i, i)]).sum();
        assert_aclose!(sum, trace, 1e-11);
    }

    // the leading 1x1 block is the first diagonal entry itself
    assert_aclose!(pool[0], hess[(0, 0)], 1e-15);
}
