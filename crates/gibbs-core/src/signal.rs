//! Signal definitions: closed-form targets, harmonic laws, jump sets
//!
//! Every signal here is periodic with period 2π, odd, and expanded as a pure
//! sine series Σ c_k·sin(k·x). A signal variant supplies three things:
//!
//! - the exact **target** value at any real x,
//! - the **harmonic law** c_k up to a truncation order N,
//! - the **jump set**: locations and heights of its discontinuities.
//!
//! The square wave and sawtooth carry true jumps and exhibit the Gibbs
//! phenomenon; the triangle wave is the continuous control whose harmonic
//! budget must converge instead of growing.
//!
//! ## Example
//!
//! ```rust
//! use gibbs_core::signal::{Signal, SquareWave, TriangleWave};
//!
//! let square = SquareWave::new(1.0);
//! assert_eq!(square.target(0.5), 1.0);
//! assert_eq!(square.jumps().len(), 2);
//!
//! // harmonics 1, 3, 5 with c_k = 4/(pi k)
//! let h = square.harmonics(3);
//! assert_eq!(h[2].k, 5);
//!
//! let triangle = TriangleWave::default();
//! assert!(triangle.jumps().is_empty());
//! ```

use std::f64::consts::{FRAC_2_PI, PI};

use serde::{Deserialize, Serialize};

use crate::grid::wrap_to_pi;

// ────────────────────────────────────────────────────────────────────────────
// Data model
// ────────────────────────────────────────────────────────────────────────────

/// One term of a sine series: coefficient of sin(k·x).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Harmonic {
    /// Harmonic index k ≥ 1.
    pub k: u32,
    /// Signed series coefficient c_k.
    pub coefficient: f64,
}

/// A jump discontinuity of the target function.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Jump {
    /// Position on the circle, in [-π, π]. ±π name the same point.
    pub location: f64,
    /// Total step |f(x⁺) − f(x⁻)| across the discontinuity.
    pub height: f64,
}

/// Which harmonic indices a signal's series actually uses.
///
/// The zone-width normalization of the energy-concentration analyzer depends
/// on this: an order-N truncation spans K(N) = 2N+1 effective harmonics when
/// only odd k appear, but K(N) = N when every k appears.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HarmonicBandwidth {
    /// k = 1, 3, 5, …, 2N−1 (square, triangle).
    OddOnly,
    /// k = 1, 2, 3, …, N (sawtooth).
    Full,
}

impl HarmonicBandwidth {
    /// Effective harmonic count K(N) of an order-N truncation.
    pub fn effective_count(self, n: u32) -> u32 {
        match self {
            HarmonicBandwidth::OddOnly => 2 * n + 1,
            HarmonicBandwidth::Full => n,
        }
    }
}

/// A 2π-periodic target signal with a known sine-series expansion.
///
/// Implementations are pure value objects: every method is deterministic and
/// side-effect-free, so analyzers may evaluate them from multiple threads.
pub trait Signal: std::fmt::Debug + Send + Sync {
    /// Short lowercase identifier ("square", "sawtooth", "triangle").
    fn name(&self) -> &'static str;

    /// Peak amplitude A of the target.
    fn amplitude(&self) -> f64;

    /// Harmonic-index structure of the series.
    fn bandwidth(&self) -> HarmonicBandwidth;

    /// Exact target value at any real x (periodic extension).
    fn target(&self, x: f64) -> f64;

    /// The first N terms of the series, ordered by k.
    fn harmonics(&self, n: u32) -> Vec<Harmonic>;

    /// Jump discontinuities within one period, ordered by location.
    fn jumps(&self) -> &[Jump];

    /// The jump used for overshoot measurements: the first of the set.
    fn primary_jump(&self) -> Option<&Jump> {
        self.jumps().first()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Square wave
// ────────────────────────────────────────────────────────────────────────────

/// Ideal square wave A·sign(sin x), with sign(0) = +1.
///
/// Jumps of height 2A at x = 0 and x = ±π. Series uses odd harmonics only,
/// c_k = 4A/(πk) for k = 1, 3, …, 2N−1.
#[derive(Debug, Clone)]
pub struct SquareWave {
    amplitude: f64,
    jumps: [Jump; 2],
}

impl SquareWave {
    pub fn new(amplitude: f64) -> Self {
        let height = 2.0 * amplitude;
        Self {
            amplitude,
            jumps: [
                Jump { location: 0.0, height },
                Jump { location: PI, height },
            ],
        }
    }
}

impl Default for SquareWave {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl Signal for SquareWave {
    fn name(&self) -> &'static str {
        "square"
    }

    fn amplitude(&self) -> f64 {
        self.amplitude
    }

    fn bandwidth(&self) -> HarmonicBandwidth {
        HarmonicBandwidth::OddOnly
    }

    /// Ties resolve positive: sin(x) = 0 yields +A.
    fn target(&self, x: f64) -> f64 {
        if x.sin() >= 0.0 {
            self.amplitude
        } else {
            -self.amplitude
        }
    }

    fn harmonics(&self, n: u32) -> Vec<Harmonic> {
        let a = self.amplitude;
        (0..n)
            .map(|j| {
                let k = 2 * j + 1;
                Harmonic {
                    k,
                    coefficient: 4.0 * a / (PI * k as f64),
                }
            })
            .collect()
    }

    fn jumps(&self) -> &[Jump] {
        &self.jumps
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Sawtooth
// ────────────────────────────────────────────────────────────────────────────

/// Sawtooth A·x/π on the wrapped domain [-π, π).
///
/// One jump of height 2A at x = ±π (the wrap seam). Series uses every
/// harmonic, c_k = (2A/π)·(−1)^(k+1)/k for k = 1..=N.
#[derive(Debug, Clone)]
pub struct Sawtooth {
    amplitude: f64,
    jumps: [Jump; 1],
}

impl Sawtooth {
    pub fn new(amplitude: f64) -> Self {
        Self {
            amplitude,
            jumps: [Jump {
                location: PI,
                height: 2.0 * amplitude,
            }],
        }
    }
}

impl Default for Sawtooth {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl Signal for Sawtooth {
    fn name(&self) -> &'static str {
        "sawtooth"
    }

    fn amplitude(&self) -> f64 {
        self.amplitude
    }

    fn bandwidth(&self) -> HarmonicBandwidth {
        HarmonicBandwidth::Full
    }

    fn target(&self, x: f64) -> f64 {
        self.amplitude * wrap_to_pi(x) / PI
    }

    fn harmonics(&self, n: u32) -> Vec<Harmonic> {
        let scale = 2.0 * self.amplitude / PI;
        (1..=n)
            .map(|k| {
                let sign = if k % 2 == 1 { 1.0 } else { -1.0 };
                Harmonic {
                    k,
                    coefficient: scale * sign / k as f64,
                }
            })
            .collect()
    }

    fn jumps(&self) -> &[Jump] {
        &self.jumps
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Triangle wave
// ────────────────────────────────────────────────────────────────────────────

/// Triangle wave (2A/π)·arcsin(sin x): continuous, no jumps.
///
/// c_k = (8A/π²)·(−1)^((k−1)/2)/k² over odd k. Its radius budget converges,
/// which is what the jump classifier must report.
#[derive(Debug, Clone)]
pub struct TriangleWave {
    amplitude: f64,
}

impl TriangleWave {
    pub fn new(amplitude: f64) -> Self {
        Self { amplitude }
    }
}

impl Default for TriangleWave {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl Signal for TriangleWave {
    fn name(&self) -> &'static str {
        "triangle"
    }

    fn amplitude(&self) -> f64 {
        self.amplitude
    }

    fn bandwidth(&self) -> HarmonicBandwidth {
        HarmonicBandwidth::OddOnly
    }

    fn target(&self, x: f64) -> f64 {
        FRAC_2_PI * self.amplitude * x.sin().asin()
    }

    fn harmonics(&self, n: u32) -> Vec<Harmonic> {
        let scale = 8.0 * self.amplitude / (PI * PI);
        (0..n)
            .map(|j| {
                let k = 2 * j + 1;
                let sign = if j % 2 == 0 { 1.0 } else { -1.0 };
                Harmonic {
                    k,
                    coefficient: scale * sign / (k as f64 * k as f64),
                }
            })
            .collect()
    }

    fn jumps(&self) -> &[Jump] {
        &[]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPSILON: f64 = 1e-12;

    // ── square wave ──────────────────────────────────────────────────────

    #[test]
    fn test_square_target_sign_convention() {
        let sq = SquareWave::new(1.0);
        // sin(0) = 0 is a tie, resolved positive
        assert_eq!(sq.target(0.0), 1.0);
        assert_eq!(sq.target(0.5), 1.0);
        assert_eq!(sq.target(PI / 2.0), 1.0);
        assert_eq!(sq.target(-0.5), -1.0);
        assert_eq!(sq.target(PI + 0.5), -1.0);
        // periodic extension
        assert_eq!(sq.target(0.5 + 2.0 * PI), 1.0);
    }

    #[test]
    fn test_square_harmonic_law() {
        let sq = SquareWave::new(2.0);
        let h = sq.harmonics(4);
        let ks: Vec<u32> = h.iter().map(|t| t.k).collect();
        assert_eq!(ks, vec![1, 3, 5, 7]);
        for t in &h {
            assert_relative_eq!(
                t.coefficient,
                4.0 * 2.0 / (PI * t.k as f64),
                epsilon = EPSILON
            );
        }
    }

    #[test]
    fn test_square_jumps() {
        let sq = SquareWave::new(1.5);
        let j = sq.jumps();
        assert_eq!(j.len(), 2);
        assert_relative_eq!(j[0].location, 0.0, epsilon = EPSILON);
        assert_relative_eq!(j[1].location, PI, epsilon = EPSILON);
        assert_relative_eq!(j[0].height, 3.0, epsilon = EPSILON);
        assert_eq!(sq.primary_jump().map(|j| j.location), Some(0.0));
    }

    // ── sawtooth ─────────────────────────────────────────────────────────

    #[test]
    fn test_sawtooth_target_and_wrap() {
        let saw = Sawtooth::new(1.0);
        assert_relative_eq!(saw.target(0.0), 0.0, epsilon = EPSILON);
        assert_relative_eq!(saw.target(PI / 2.0), 0.5, epsilon = EPSILON);
        // just left of the seam the target approaches +A
        assert_relative_eq!(saw.target(PI - 1e-6), 1.0 - 1e-6 / PI, epsilon = 1e-9);
        // at the seam the wrapped domain restarts at -A
        assert_relative_eq!(saw.target(PI), -1.0, epsilon = EPSILON);
        assert_relative_eq!(saw.target(-PI), -1.0, epsilon = EPSILON);
    }

    #[test]
    fn test_sawtooth_harmonic_law_alternates() {
        let saw = Sawtooth::new(1.0);
        let h = saw.harmonics(5);
        let ks: Vec<u32> = h.iter().map(|t| t.k).collect();
        assert_eq!(ks, vec![1, 2, 3, 4, 5]);
        for t in &h {
            let expected = FRAC_2_PI * if t.k % 2 == 1 { 1.0 } else { -1.0 } / t.k as f64;
            assert_relative_eq!(t.coefficient, expected, epsilon = EPSILON);
        }
        assert!(h[0].coefficient > 0.0);
        assert!(h[1].coefficient < 0.0);
    }

    #[test]
    fn test_sawtooth_single_seam_jump() {
        let saw = Sawtooth::new(2.0);
        let j = saw.jumps();
        assert_eq!(j.len(), 1);
        assert_relative_eq!(j[0].location, PI, epsilon = EPSILON);
        assert_relative_eq!(j[0].height, 4.0, epsilon = EPSILON);
    }

    // ── triangle ─────────────────────────────────────────────────────────

    #[test]
    fn test_triangle_target_shape() {
        let tri = TriangleWave::new(1.0);
        assert_relative_eq!(tri.target(0.0), 0.0, epsilon = EPSILON);
        assert_relative_eq!(tri.target(PI / 2.0), 1.0, epsilon = EPSILON);
        assert_relative_eq!(tri.target(PI), 0.0, epsilon = 1e-7);
        // linear ramp between the extrema
        assert_relative_eq!(tri.target(PI / 4.0), 0.5, epsilon = EPSILON);
        assert_relative_eq!(tri.target(-PI / 2.0), -1.0, epsilon = EPSILON);
    }

    #[test]
    fn test_triangle_harmonic_law_quadratic_decay() {
        let tri = TriangleWave::new(1.0);
        let h = tri.harmonics(4);
        let ks: Vec<u32> = h.iter().map(|t| t.k).collect();
        assert_eq!(ks, vec![1, 3, 5, 7]);
        let scale = 8.0 / (PI * PI);
        assert_relative_eq!(h[0].coefficient, scale, epsilon = EPSILON);
        assert_relative_eq!(h[1].coefficient, -scale / 9.0, epsilon = EPSILON);
        assert_relative_eq!(h[2].coefficient, scale / 25.0, epsilon = EPSILON);
        assert_relative_eq!(h[3].coefficient, -scale / 49.0, epsilon = EPSILON);
    }

    #[test]
    fn test_triangle_has_no_jumps() {
        let tri = TriangleWave::default();
        assert!(tri.jumps().is_empty());
        assert!(tri.primary_jump().is_none());
    }

    // ── shared structure ─────────────────────────────────────────────────

    #[test]
    fn test_effective_count() {
        assert_eq!(HarmonicBandwidth::OddOnly.effective_count(10), 21);
        assert_eq!(HarmonicBandwidth::Full.effective_count(10), 10);
    }

    #[test]
    fn test_zero_order_yields_no_harmonics() {
        assert!(SquareWave::default().harmonics(0).is_empty());
        assert!(Sawtooth::default().harmonics(0).is_empty());
        assert!(TriangleWave::default().harmonics(0).is_empty());
    }

    #[test]
    fn test_signals_are_object_safe() {
        let signals: Vec<Box<dyn Signal>> = vec![
            Box::new(SquareWave::default()),
            Box::new(Sawtooth::default()),
            Box::new(TriangleWave::default()),
        ];
        let names: Vec<&str> = signals.iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["square", "sawtooth", "triangle"]);
    }
}
