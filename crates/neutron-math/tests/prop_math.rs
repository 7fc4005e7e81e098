// ─────────────────────────────────────────────────────────────────────
// SCPN Neutron Transport — Property-Based Tests (proptest) for neutron-math
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Property-based tests for neutron-math using proptest.
//!
//! Covers: linear interpolation bounds and exactness, vector helpers.

use neutron_math::interp::interp1d;
use neutron_math::vec3::{direction_cosines, from_polar, norm};
use proptest::prelude::*;

fn ascending_grid() -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
    (2usize..40).prop_flat_map(|n| {
        (
            prop::collection::vec(0.01f64..10.0, n),
            prop::collection::vec(0.0f64..100.0, n),
        )
            .prop_map(|(steps, ys)| {
                let mut x = 1e-3;
                let xs: Vec<f64> = steps
                    .iter()
                    .map(|s| {
                        x += s;
                        x
                    })
                    .collect();
                (xs, ys)
            })
    })
}

// ── Interpolation ────────────────────────────────────────────────────

proptest! {
    /// Every grid point returns its stored value exactly.
    #[test]
    fn interp_exact_at_nodes((xs, ys) in ascending_grid()) {
        for i in 0..xs.len() {
            prop_assert_eq!(interp1d(&xs, &ys, xs[i]), ys[i]);
        }
    }

    /// Between two nodes the result is the chord value.
    #[test]
    fn interp_matches_chord((xs, ys) in ascending_grid(), seg in 0usize..1000, t in 0.0f64..1.0) {
        let i = seg % (xs.len() - 1);
        let x = xs[i] + t * (xs[i + 1] - xs[i]);
        let expected = ys[i] + (x - xs[i]) / (xs[i + 1] - xs[i]) * (ys[i + 1] - ys[i]);
        let val = interp1d(&xs, &ys, x);
        prop_assert!((val - expected).abs() <= 1e-9 * expected.abs().max(1.0),
            "x={}, val={}, expected={}", x, val, expected);
    }

    /// Interpolated values stay within the range of the bracketing nodes.
    #[test]
    fn interp_bounded((xs, ys) in ascending_grid(), x in 0.0f64..500.0) {
        let lo = ys.iter().copied().fold(f64::INFINITY, f64::min);
        let hi = ys.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let val = interp1d(&xs, &ys, x);
        prop_assert!(val >= lo - 1e-9 && val <= hi + 1e-9);
    }
}

// ── Vectors ──────────────────────────────────────────────────────────

proptest! {
    /// Polar construction always yields a unit vector.
    #[test]
    fn polar_is_unit(mu in -1.0f64..=1.0, phi in 0.0f64..std::f64::consts::TAU) {
        prop_assert!((norm(from_polar(mu, phi)) - 1.0).abs() < 1e-12);
    }

    /// Direction cosines between distinct points are unit length.
    #[test]
    fn direction_cosines_unit(
        ax in -50.0f64..50.0, ay in -50.0f64..50.0, az in -50.0f64..50.0,
        dx in 0.1f64..20.0, dy in -20.0f64..20.0, dz in -20.0f64..20.0,
    ) {
        let d = direction_cosines([ax, ay, az], [ax + dx, ay + dy, az + dz]).unwrap();
        prop_assert!((norm(d) - 1.0).abs() < 1e-12);
    }
}
