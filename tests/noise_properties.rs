//! Property checks for the lattice noise functions.

use geonoise::noise::{fbm, noise1, noise2, noise3, Perlin};

/// Dense grid spanning several lattice cells, including negative ones.
fn grid(steps: i32, step: f64) -> impl Iterator<Item = f64> {
    (-steps..steps).map(move |i| f64::from(i) * step + 0.013)
}

#[test]
fn repeated_calls_are_bit_identical() {
    for x in grid(50, 0.37) {
        for y in grid(5, 1.1) {
            assert_eq!(noise1(x).to_bits(), noise1(x).to_bits());
            assert_eq!(noise2(x, y).to_bits(), noise2(x, y).to_bits());
            assert_eq!(noise3(x, y, x - y).to_bits(), noise3(x, y, x - y).to_bits());
        }
    }
}

#[test]
fn two_dimensional_noise_is_bounded() {
    for x in grid(200, 0.05) {
        for y in grid(40, 0.11) {
            let v = noise2(x, y);
            assert!(v.abs() <= 1.05, "noise2({x}, {y}) = {v}");
        }
    }
}

#[test]
fn three_dimensional_noise_is_bounded() {
    for x in grid(40, 0.09) {
        for y in grid(20, 0.17) {
            for z in grid(10, 0.23) {
                let v = noise3(x, y, z);
                assert!(v.abs() <= 1.1, "noise3({x}, {y}, {z}) = {v}");
            }
        }
    }
}

#[test]
fn one_dimensional_noise_is_bounded() {
    for x in grid(2000, 0.01) {
        let v = noise1(x);
        assert!(v.abs() <= 1.05, "noise1({x}) = {v}");
    }
}

#[test]
fn noise_is_not_constant() {
    let values: Vec<f64> = grid(100, 0.31).map(|x| noise2(x, 0.5 * x)).collect();
    let (lo, hi) = values
        .iter()
        .fold((f64::MAX, f64::MIN), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    assert!(hi - lo > 0.5, "spread {lo}..{hi} too small");
}

#[test]
fn continuous_across_lattice_boundaries() {
    let delta = 5e-4;
    for i in -8..8 {
        let x = f64::from(i);
        for y in [0.2, 1.7, -3.4] {
            let left = noise2(x - delta, y);
            let at = noise2(x, y);
            let right = noise2(x + delta, y);
            assert!((at - left).abs() < 0.01, "jump left of x={x}: {left} -> {at}");
            assert!((right - at).abs() < 0.01, "jump right of x={x}: {at} -> {right}");

            let up = noise3(x, y, 0.3 + delta);
            assert!((up - noise3(x, y, 0.3)).abs() < 0.01);
        }
        assert!((noise1(x + delta) - noise1(x)).abs() < 0.01);
    }
}

#[test]
fn lattice_points_reduce_to_corner_gradient() {
    // Fraction 0 and fade weight 0 leave only the corner gradient at offset 0.
    assert_eq!(noise1(0.0), 0.0);
    assert_eq!(noise1(1.0), 0.0);
    assert_eq!(noise2(3.0, -7.0), 0.0);
    assert_eq!(noise3(-2.0, 5.0, 11.0), 0.0);
}

#[test]
fn table_period_is_256_cells() {
    // Adding 256 perturbs the fraction by rounding only.
    for x in grid(20, 0.29) {
        assert!((noise1(x) - noise1(x + 256.0)).abs() < 1e-9);
        assert!((noise2(x, 0.7) - noise2(x + 256.0, 0.7)).abs() < 1e-9);
    }
}

#[test]
fn cells_beyond_i32_range_follow_table_period() {
    // 2^31 and 2^40 are multiples of 256, so the sample lands on the same cell.
    for far in [2_147_483_648.0, 1_099_511_627_776.0, -2_147_483_648.0 * 4.0] {
        for k in 0..6 {
            let x = k as f64 + 0.5;
            assert_eq!(noise1(far + x), noise1(x), "noise1 at {far} + {x}");
            assert_eq!(noise2(far + x, 0.3), noise2(x, 0.3), "noise2 at {far} + {x}");
            assert_eq!(noise2(0.3, far + x), noise2(0.3, x), "noise2 at y = {far} + {x}");
        }
    }
}

#[test]
fn nan_propagates() {
    assert!(noise1(f64::NAN).is_nan());
    assert!(noise2(f64::NAN, 0.5).is_nan());
    assert!(noise3(0.5, 0.5, f64::NAN).is_nan());
}

#[test]
fn threads_see_identical_values() {
    let expected: Vec<f64> = grid(100, 0.07).map(|x| noise3(x, 1.0 - x, 0.5)).collect();
    let handles: Vec<_> = (0..4)
        .map(|_| {
            std::thread::spawn(|| {
                grid(100, 0.07)
                    .map(|x| noise3(x, 1.0 - x, 0.5))
                    .collect::<Vec<f64>>()
            })
        })
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), expected);
    }
}

#[test]
fn fbm_octaves_add_detail_within_range() {
    for x in grid(100, 0.13) {
        let v = fbm(&Perlin, [x, 0.25 * x, 0.4], 6);
        assert!(v.abs() <= 1.1, "fbm at {x} = {v}");
    }
}
