use newtonprop::*;

fn c(re: f64, im: f64) -> c64 {
    c64::new(re, im)
}

#[test]
fn bootstrap_picks_outermost() {
    let mut leja: Vec<c64> = Vec::new();
    let mut pool = vec![c(1.0, 0.0), c(-3.0, 0.0), c(2.0, 0.0)];
    let n = extend_leja(&mut leja, &mut pool, 1);
    assert_eq!(n, 1);
    assert_eq!(leja[0], c(-3.0, 0.0));
}

#[test]
fn greedy_product_distance_order() {
    let mut leja: Vec<c64> = Vec::new();
    let mut pool = vec![c(1.0, 0.0), c(-3.0, 0.0), c(2.0, 0.0)];
    let n = extend_leja(&mut leja, &mut pool, 3);
    assert_eq!(n, 3);
    // anchor at -3, then 2 (distance 5) beats 1 (distance 4), then 1
    assert_eq!(leja, vec![c(-3.0, 0.0), c(2.0, 0.0), c(1.0, 0.0)]);
}

#[test]
fn duplicates_are_never_selected() {
    let mut leja: Vec<c64> = Vec::new();
    let mut pool = vec![c(1.0, 0.0), c(1.0, 0.0), c(1.0, 0.0), c(2.0, 0.0)];
    let n = extend_leja(&mut leja, &mut pool, 4);
    assert_eq!(n, 2);
    assert_eq!(leja, vec![c(2.0, 0.0), c(1.0, 0.0)]);
}

// a candidate below the working-precision resolution of an existing node
// carries no interpolation information and must not be appended
#[test]
fn near_duplicates_are_rejected() {
    let mut leja = vec![c(1.5, 0.0)];
    let mut pool = vec![c(1.5 + 1e-14, 0.0)];
    let n = extend_leja(&mut leja, &mut pool, 1);
    assert_eq!(n, 1);
}

#[test]
fn resolvable_neighbours_are_kept() {
    let mut leja = vec![c(1.5, 0.0)];
    let mut pool = vec![c(1.5 + 1e-9, 0.0)];
    let n = extend_leja(&mut leja, &mut pool, 1);
    assert_eq!(n, 2);
}

#[test]
fn stops_when_pool_is_exhausted() {
    let mut leja: Vec<c64> = Vec::new();
    let mut pool = vec![c(0.0, 1.0), c(0.0, -2.0)];
    let n = extend_leja(&mut leja, &mut pool, 5);
    assert_eq!(n, 2);
}

#[test]
fn empty_pool_is_a_noop() {
    let mut leja = vec![c(1.0, 0.0)];
    let mut pool: Vec<c64> = Vec::new();
    let n = extend_leja(&mut leja, &mut pool, 3);
    assert_eq!(n, 1);
}

#[test]
fn extension_appends_without_reordering() {
    let mut leja: Vec<c64> = Vec::new();
    let mut pool = vec![c(-1.0, 0.0), c(4.0, 0.0)];
    extend_leja(&mut leja, &mut pool, 2);
    let head = leja.clone();

    let mut pool = vec![c(0.5, 0.5), c(-2.0, 1.0)];
    let n = extend_leja(&mut leja, &mut pool, 2);
    assert_eq!(n, 4);
    assert_eq!(&leja[..2], &head[..]);
}
