// Integration tests for the sparsification guarantees on larger, noisy curves

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sparsr::{BracketStrategy, SparsifyOptions, max_deviation, sparsify, sparsify_with};

/// Irregularly spaced, noisy samples of a smooth curve.
fn noisy_curve(seed: u64, n: usize) -> (Vec<f64>, Vec<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut x = Vec::with_capacity(n);
    let mut acc: f64 = 0.0;
    for _ in 0..n {
        acc += rng.gen_range(0.01..0.2);
        x.push(acc);
    }
    let y = x
        .iter()
        .map(|&v| (v * 0.8).sin() * 5.0 + 0.3 * v + rng.gen_range(-0.05..0.05))
        .collect();
    (x, y)
}

/// Densely sampled, noise-free curve.
fn smooth_curve(n: usize) -> (Vec<f64>, Vec<f64>) {
    let x: Vec<f64> = (0..n).map(|i| i as f64 * 0.05).collect();
    let y = x.iter().map(|&v| v.sin() + 0.1 * v * v).collect();
    (x, y)
}

#[test]
fn test_endpoints_always_retained() {
    for seed in 0..10 {
        let (x, y) = noisy_curve(seed, 50 + seed as usize * 7);
        for tol in [0.0, 0.01, 0.5, 10.0] {
            let (_, _, mask) = sparsify(&x, &y, tol).unwrap();
            assert!(mask[0], "seed {seed} tol {tol}");
            assert!(mask[mask.len() - 1], "seed {seed} tol {tol}");
        }
    }
}

#[test]
fn test_tolerance_guarantee_holds() {
    for seed in 0..10 {
        let (x, y) = noisy_curve(seed, 300);
        for tol in [0.0, 0.02, 0.1, 0.5, 2.0] {
            let (xs, ys, mask) = sparsify(&x, &y, tol).unwrap();
            let dev = max_deviation(&x, &y, &mask).unwrap();
            assert!(dev <= tol, "seed {seed} tol {tol}: deviation {dev}");

            // Retained samples are exactly the masked inputs, in order
            let expected: Vec<f64> = x
                .iter()
                .zip(&mask)
                .filter(|&(_, &k)| k)
                .map(|(&v, _)| v)
                .collect();
            assert_eq!(xs, expected);
            assert_eq!(xs.len(), ys.len());
        }
    }
}

#[test]
fn test_strategies_agree() {
    for seed in 0..10 {
        let (x, y) = noisy_curve(seed, 200);
        for tol in [0.0, 0.05, 0.3, f64::INFINITY] {
            let global = sparsify_with(&x, &y, &SparsifyOptions::with_tolerance(tol)).unwrap();
            let local = sparsify_with(
                &x,
                &y,
                &SparsifyOptions::with_tolerance(tol).strategy(BracketStrategy::Local),
            )
            .unwrap();
            assert_eq!(global, local, "seed {seed} tol {tol}");
        }
    }
}

#[test]
fn test_larger_tolerance_retains_fewer_on_smooth_curve() {
    let (x, y) = smooth_curve(400);

    let counts: Vec<usize> = [1e-5, 1e-4, 1e-3, 1e-2, 1e-1]
        .iter()
        .map(|&tol| sparsify(&x, &y, tol).unwrap().0.len())
        .collect();

    for pair in counts.windows(2) {
        assert!(pair[1] <= pair[0], "counts {counts:?}");
    }
    assert!(counts[0] > counts[4]);
}

#[test]
fn test_resparsify_is_fixed_point_on_piecewise_linear() {
    // Exact piecewise-linear curve: every retained kink is needed by itself
    let x: Vec<f64> = (0..61).map(|i| i as f64).collect();
    let y: Vec<f64> = x
        .iter()
        .map(|&v| match v {
            v if v <= 20.0 => v,
            v if v <= 40.0 => 20.0 - 2.0 * (v - 20.0),
            v => -20.0 + 0.5 * (v - 40.0),
        })
        .collect();

    let (xs, ys, _) = sparsify(&x, &y, 1e-9).unwrap();
    assert_eq!(xs, vec![0.0, 20.0, 40.0, 60.0]);

    let (xs2, ys2, mask2) = sparsify(&xs, &ys, 1e-9).unwrap();
    assert_eq!(xs2, xs);
    assert_eq!(ys2, ys);
    assert!(mask2.iter().all(|&k| k));
}

#[test]
fn test_resparsify_can_drop_anchor_guarding_gap() {
    // Index 2 is retained only to protect index 1; on the sparse output it is
    // within tolerance of the line through its neighbours and gets dropped.
    let x = [0.0, 1.0, 2.0, 3.0];
    let y = [0.0, 1.135, 2.09, 3.0];

    let (xs, ys, mask) = sparsify(&x, &y, 0.1).unwrap();
    assert_eq!(mask, vec![true, false, true, true]);

    let (_, _, mask2) = sparsify(&xs, &ys, 0.1).unwrap();
    assert_eq!(mask2, vec![true, false, true]);
}

#[test]
fn test_length_mismatch_produces_no_output() {
    let (x, mut y) = noisy_curve(3, 20);
    y.pop();
    assert!(sparsify(&x, &y, 0.1).is_err());
}
