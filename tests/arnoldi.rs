use ndarray::*;
use newtonprop::{krylov::arnoldi, *};

fn unit_random(n: usize, rng: &mut rand_pcg::Mcg128Xsl64) -> Array1<c64> {
    let mut v: Array1<c64> = random_using(n, rng);
    let nrm = v.norm_l2();
    v.map_inplace(|x| *x = x.div_real(nrm));
    v
}

fn run(
    n: usize,
    m: usize,
    dt: c64,
) -> (Array2<c64>, Vec<Array1<c64>>, usize, Array2<c64>) {
    let mut rng = rand_pcg::Mcg128Xsl64::new(0xcafef00dd15ea5e5);
    let a: Array2<c64> = random_using((n, n), &mut rng);
    let seed = unit_random(n, &mut rng);
    let mut hess = Array2::zeros((m + 1, m + 1));
    let mut basis = vec![Array1::zeros(n); m + 1];
    let m_ret = arnoldi(&mut hess, &mut basis, &seed, &a, dt, m, true, 1e-14);
    (hess, basis, m_ret, a)
}

#[test]
fn basis_is_orthonormal() {
    let (_, basis, m, _) = run(20, 6, c64::new(0.0, -1.0));
    assert_eq!(m, 6);
    for i in 0..=m {
        assert_aclose!(basis[i].norm_l2(), 1.0, 1e-10);
        for j in i + 1..=m {
            assert_aclose!(basis[i].inner(&basis[j]).abs(), 0.0, 1e-10);
        }
    }
}

// (A dt) Q_m = Q_{m+1} Htilde with Htilde the (m+1) x m leading block
#[test]
fn hessenberg_reconstructs_projection() {
    let dt = c64::new(0.4, -0.3);
    let (hess, basis, m, a) = run(16, 5, dt);
    assert_eq!(m, 5);
    let q_m = hstack(&basis[..m]).unwrap();
    let q_m1 = hstack(&basis[..m + 1]).unwrap();
    let htilde = hess.slice(s![..m + 1, ..m]).to_owned();
    let a_dt = a.mapv(|x| x * dt);
    let lhs = a_dt.dot(&q_m);
    let rhs = q_m1.dot(&htilde);
    assert_close_l2!(&lhs, &rhs, 1e-10);
}

#[test]
fn hessenberg_entries_are_dt_scaled_inner_products() {
    let dt = c64::new(0.0, 0.7);
    let (hess, basis, m, a) = run(12, 4, dt);
    for j in 0..m {
        let av = a.apply(&basis[j]);
        for i in 0..=j {
            assert_aclose!(hess[(i, j)], dt * basis[i].inner(&av), 1e-10);
        }
    }
}

#[test]
fn eigenvector_seed_breaks_down_immediately() {
    let d = [c64::new(1.0, 0.0), c64::new(2.0, 0.0), c64::new(3.0, 0.0)];
    let a = from_diag(&d);
    let mut seed: Array1<c64> = Array1::zeros(3);
    seed[0] = c64::new(1.0, 0.0);
    let dt = c64::new(1.0, 0.0);
    let mut hess = Array2::zeros((4, 4));
    let mut basis = vec![Array1::zeros(3); 4];
    let m = arnoldi(&mut hess, &mut basis, &seed, &a, dt, 3, true, 1e-14);
    assert_eq!(m, 1);
    assert_aclose!(hess[(0, 0)], d[0], 1e-14);
    // breakdown leaves the recorded residual below the threshold
    assert!(hess[(1, 0)].abs() < 1e-14);
}

// exhausting the space at the extension step is a breakdown with a full
// Hessenberg block: the projection then carries the exact spectrum
#[test]
fn full_space_extension_breaks_down() {
    let mut rng = rand_pcg::Mcg128Xsl64::new(0xcafef00dd15ea5e5);
    let a: Array2<c64> = random_using((3, 3), &mut rng);
    let seed = unit_random(3, &mut rng);
    let mut hess = Array2::zeros((4, 4));
    let mut basis = vec![Array1::zeros(3); 4];
    let m = arnoldi(&mut hess, &mut basis, &seed, &a, c64::new(1.0, 0.0), 3, true, 1e-10);
    assert_eq!(m, 3);
    assert!(hess[(3, 2)].abs() < 1e-10);

    let mut ritz = ritz_values(&hess, 3).unwrap();
    let mut eigs = eigvals_dense(&a);
    ritz.sort_by(|x, y| x.re().partial_cmp(&y.re()).unwrap());
    eigs.sort_by(|x, y| x.re().partial_cmp(&y.re()).unwrap());
    for (r, e) in ritz.iter().zip(&eigs) {
        assert_aclose!(*r, *e, 1e-8);
    }
}

fn eigvals_dense(a: &Array2<c64>) -> Vec<c64> {
    let n = a.nrows();
    let mut buf = Vec::with_capacity(n * n);
    for j in 0..n {
        for i in 0..n {
            buf.push(a[(i, j)]);
        }
    }
    let layout = lax::layout::MatrixLayout::F {
        col: n as i32,
        lda: n as i32,
    };
    let (eigs, _) = <c64 as lax::Lapack>::eig(false, layout, &mut buf).unwrap();
    eigs
}
