//! Crossover estimator: where localized error starts to dominate
//!
//! Two error measures of the same square-wave truncation pull apart as N
//! grows: the global RMS error falls like 1/√N, while the pointwise Gibbs
//! overshoot fraction stays pinned near (2/π)·Si(π) − 1 ≈ 8.95% of the jump
//! height. The crossover harmonic is the first N where the localized
//! fraction exceeds the global RMS; from there on, the Gibbs ripple *is*
//! the error.

use crate::grid::periodic_grid;
use crate::overshoot::{peak_near_jump, OvershootConfig};
use crate::partial_sum::partial_sum;
use crate::signal::{Signal, SquareWave};

use serde::{Deserialize, Serialize};

/// Configuration for the crossover scan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrossoverConfig {
    /// Square-wave amplitude under test.
    pub amplitude: f64,
    /// Dense-grid size for the global RMS error.
    pub grid_points: usize,
    /// Window settings forwarded to the overshoot measurement.
    pub overshoot: OvershootConfig,
}

impl Default for CrossoverConfig {
    fn default() -> Self {
        Self {
            amplitude: 1.0,
            grid_points: 16384,
            overshoot: OvershootConfig::default(),
        }
    }
}

/// Smallest truncation order at which the pointwise overshoot fraction
/// strictly exceeds the global RMS error, for the square wave.
///
/// Scans n = 2..=`max_n`. The overshoot fraction is
/// (peak − amplitude)/jump height; the RMS error is taken over one period
/// on a dense grid. Returns `None` when no crossover occurs within the
/// bound, an expected outcome for small `max_n` rather than a failure.
pub fn estimate_crossover_harmonic(max_n: u32, config: &CrossoverConfig) -> Option<u32> {
    assert!(config.grid_points > 0, "grid_points must be positive");

    let square = SquareWave::new(config.amplitude);
    let jump_height = 2.0 * config.amplitude;
    let grid = periodic_grid(config.grid_points);
    let targets: Vec<f64> = grid.iter().map(|&x| square.target(x)).collect();

    for n in 2..=max_n {
        let sums = partial_sum(&square, n, &grid);
        let mean_sq = targets
            .iter()
            .zip(sums.iter())
            .map(|(&t, &s)| (t - s) * (t - s))
            .sum::<f64>()
            / grid.len() as f64;
        let rms = mean_sq.sqrt();

        // square waves always have a jump, so the peak always exists
        let peak = peak_near_jump(&square, n, &config.overshoot).unwrap_or(0.0);
        let fraction = (peak - config.amplitude) / jump_height;

        tracing::debug!("crossover scan: n={} rms={:.6} fraction={:.6}", n, rms, fraction);
        if fraction > rms {
            return Some(n);
        }
    }
    None
}
