//! Verification sweep: all invariants across a ladder of truncation orders
//!
//! Drives every analyzer over a list of N values and collects one row per
//! order: the numeric core of the classic verification table
//! (N, budget, Δ/double, overshoot, zone energy, verdict). Rows are
//! independent pure computations, so the sweep fans them out with rayon.
//!
//! Reporting and plotting layers consume these rows; nothing here formats
//! or prints.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::energy_concentration::{energy_concentration_fraction, ZoneConfig};
use crate::grid::periodic_grid;
use crate::overshoot::{peak_near_jump, OvershootConfig};
use crate::radius_budget::{
    cumulative_budget, doubling_deltas, has_true_jumps, radii, JumpClassifierConfig,
};
use crate::signal::Signal;
use crate::types::{AnalysisResult, SQUARE_BUDGET_INTERCEPT};

// ────────────────────────────────────────────────────────────────────────────
// Configuration
// ────────────────────────────────────────────────────────────────────────────

/// Configuration for a verification sweep.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepConfig {
    /// Truncation orders to verify, one row each.
    pub orders: Vec<u32>,
    /// Dense-grid size for the energy-concentration measurement.
    pub grid_points: usize,
    /// Jump-classifier settings.
    pub classifier: JumpClassifierConfig,
    /// Overshoot window settings.
    pub overshoot: OvershootConfig,
    /// Gibbs-zone geometry.
    pub zone: ZoneConfig,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            orders: vec![10, 25, 50, 100, 200, 500, 1000, 2000],
            grid_points: 16384,
            classifier: JumpClassifierConfig::default(),
            overshoot: OvershootConfig::default(),
            zone: ZoneConfig::default(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Result types
// ────────────────────────────────────────────────────────────────────────────

/// One verification row: every invariant measured at a single order N.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepRow {
    /// Truncation order.
    pub n: u32,
    /// Total radius budget at this order (last cumulative sum).
    pub budget: f64,
    /// Mean of all doubling deltas; 0.0 when the order is too small to
    /// produce any (undetermined).
    pub mean_delta: f64,
    /// Peak partial-sum value near the primary jump; `None` for jump-free
    /// signals.
    pub overshoot: Option<f64>,
    /// Fraction of squared error inside the Gibbs zones.
    pub energy_fraction: f64,
    /// Jump-classifier verdict.
    pub detected: bool,
    /// Jump-classifier score.
    pub score: f64,
}

// ────────────────────────────────────────────────────────────────────────────
// Sweep
// ────────────────────────────────────────────────────────────────────────────

/// Run every analyzer at every configured order, in parallel.
///
/// Rows come back in the order of `config.orders`. Fails if the classifier
/// configuration is invalid (non-positive plateau).
pub fn verification_sweep(
    signal: &dyn Signal,
    config: &SweepConfig,
) -> AnalysisResult<Vec<SweepRow>> {
    config
        .orders
        .par_iter()
        .map(|&n| sweep_row(signal, n, config))
        .collect()
}

fn sweep_row(signal: &dyn Signal, n: u32, config: &SweepConfig) -> AnalysisResult<SweepRow> {
    let r = radii(signal, n);
    let budget = cumulative_budget(&r).last().copied().unwrap_or(0.0);

    let deltas = doubling_deltas(&r, config.classifier.min_doubling_n);
    let mean_delta = if deltas.is_empty() {
        0.0
    } else {
        deltas.iter().sum::<f64>() / deltas.len() as f64
    };

    let verdict = has_true_jumps(&r, &config.classifier)?;
    let peak = peak_near_jump(signal, n, &config.overshoot);

    let grid = periodic_grid(config.grid_points);
    let energy_fraction = energy_concentration_fraction(signal, n, &grid, &config.zone);

    tracing::debug!(
        "sweep row: signal={} n={} budget={:.4} delta={:.4} detected={}",
        signal.name(),
        n,
        budget,
        mean_delta,
        verdict.detected
    );

    Ok(SweepRow {
        n,
        budget,
        mean_delta,
        overshoot: peak,
        energy_fraction,
        detected: verdict.detected,
        score: verdict.score,
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Growth curves
// ────────────────────────────────────────────────────────────────────────────

/// Logarithmically spaced truncation orders 10^`min_exp`..10^`max_exp`,
/// rounded to integers, deduplicated, ascending. The usual sampling for
/// budget-growth curves.
pub fn log_spaced_orders(min_exp: f64, max_exp: f64, count: usize) -> Vec<u32> {
    assert!(min_exp <= max_exp, "exponent range must be ascending");
    if count == 0 {
        return Vec::new();
    }
    let mut orders: Vec<u32> = (0..count)
        .map(|i| {
            let t = if count == 1 {
                0.0
            } else {
                i as f64 / (count - 1) as f64
            };
            let exp = min_exp + (max_exp - min_exp) * t;
            10f64.powf(exp).round().max(1.0) as u32
        })
        .collect();
    orders.dedup();
    orders
}

/// Final radius budget of `signal` at each order: the measured growth
/// curve that plotting layers draw against [`theoretical_budget`].
pub fn budget_growth_curve(signal: &dyn Signal, orders: &[u32]) -> Vec<(u32, f64)> {
    orders
        .iter()
        .map(|&n| {
            let total: f64 = radii(signal, n).iter().sum();
            (n, total)
        })
        .collect()
}

/// Fitted square-wave growth law (2/π)·ln N + 1.250.
///
/// The intercept is empirical (it matches (2/π)(2·ln 2 + γ) to four
/// decimals); the slope is the exact logarithmic divergence rate.
pub fn theoretical_budget(n: u32) -> f64 {
    std::f64::consts::FRAC_2_PI * f64::from(n).ln() + SQUARE_BUDGET_INTERCEPT
}
