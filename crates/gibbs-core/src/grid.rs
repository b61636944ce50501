//! Periodic sample grids and circular geometry on [-π, π)
//!
//! All signals in this crate have period 2π, so every dense evaluation runs
//! over one period and every distance is measured around the circle. The
//! grid is endpoint-exclusive: -π is included, +π is not (they are the same
//! point of the circle).

use std::f64::consts::{PI, TAU};

/// Uniform grid of `points` samples covering one period [-π, π),
/// endpoint-exclusive.
///
/// Grid spacing is 2π/points. Callers sampling narrow features (jump zones
/// of width ~π/K) must keep the spacing well below the feature width.
pub fn periodic_grid(points: usize) -> Vec<f64> {
    (0..points)
        .map(|i| -PI + TAU * i as f64 / points as f64)
        .collect()
}

/// Wrap an angle into [-π, π).
pub fn wrap_to_pi(x: f64) -> f64 {
    (x + PI).rem_euclid(TAU) - PI
}

/// Shortest distance between two angles measured around the circle,
/// in [0, π].
///
/// Locations -π and +π are 0 apart, not 2π.
pub fn circular_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).abs().rem_euclid(TAU);
    if d > PI {
        TAU - d
    } else {
        d
    }
}
