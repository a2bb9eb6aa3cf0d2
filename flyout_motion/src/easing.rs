// Copyright 2026 the Flyout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easing curves mapping normalized time to normalized progress.
//!
//! All functions are pure and accept any input. Only `[0, 1]` is meaningful;
//! callers clamp elapsed-time ratios before easing (see [`clamp_unit`]).

/// Overshoot constant used by [`ease_out_back`].
pub const BACK_OVERSHOOT: f64 = 1.70158;

/// Cubic ease-out: `1 - (1 - t)^3`.
///
/// Monotonic on `[0, 1]`, starts at `0` and reaches exactly `1` at `t = 1`.
#[inline]
pub fn ease_out_cubic(t: f64) -> f64 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

/// Back ease-out: overshoots above `1` before settling at `1` when `t = 1`.
///
/// `1 + c3·(t - 1)^3 + c1·(t - 1)^2` with `c1 = 1.70158` and `c3 = c1 + 1`.
#[inline]
pub fn ease_out_back(t: f64) -> f64 {
    let c1 = BACK_OVERSHOOT;
    let c3 = c1 + 1.0;
    let p = t - 1.0;
    1.0 + c3 * p * p * p + c1 * p * p
}

/// Clamp `t` to `[0, 1]`. NaN maps to `0`.
#[inline]
pub fn clamp_unit(t: f64) -> f64 {
    if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) }
}

/// Linear interpolation between `a` and `b`.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cubic_endpoints_are_exact() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
    }

    #[test]
    fn cubic_is_monotonic_on_unit_interval() {
        let mut prev = ease_out_cubic(0.0);
        for i in 1..=1000 {
            let v = ease_out_cubic(f64::from(i) / 1000.0);
            assert!(v >= prev, "ease_out_cubic decreased at step {i}");
            prev = v;
        }
    }

    #[test]
    fn back_overshoots_then_settles() {
        assert!(ease_out_back(0.0).abs() < 1e-12);
        assert_eq!(ease_out_back(1.0), 1.0);
        let peak = (1..100)
            .map(|i| ease_out_back(f64::from(i) / 100.0))
            .fold(f64::MIN, f64::max);
        assert!(peak > 1.0, "back easing should overshoot, peak was {peak}");
    }

    #[test]
    fn clamp_unit_handles_out_of_range_and_nan() {
        assert_eq!(clamp_unit(-0.5), 0.0);
        assert_eq!(clamp_unit(1.5), 1.0);
        assert_eq!(clamp_unit(0.25), 0.25);
        assert_eq!(clamp_unit(f64::NAN), 0.0);
    }

    #[test]
    fn lerp_hits_endpoints() {
        assert_eq!(lerp(10.0, 100.0, 0.0), 10.0);
        assert_eq!(lerp(10.0, 100.0, 1.0), 100.0);
        assert_eq!(lerp(10.0, 100.0, 0.5), 55.0);
    }
}
