//! Interpolation primitives shared by the flip scroller and edge effects.

use serde::{Deserialize, Serialize};

/// Linear interpolation toward `target`; `fraction` 0 is `self`, 1 is
/// `target`.
pub trait Lerp {
    fn lerp(&self, target: &Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        *self + (*target - *self) * fraction
    }
}

/// Easing curves applied to a linear time fraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Easing {
    /// Linear interpolation (no easing). Page flips use this.
    #[default]
    LinearEasing,
    /// Quadratic deceleration, `1 - (1 - t)^2`. Edge glows recede with this.
    Decelerate,
    /// Material standard curve, `cubic-bezier(0.4, 0, 0.2, 1)`.
    FastOutSlowInEasing,
}

impl Easing {
    /// Maps a linear time fraction to eased progress. Inputs outside
    /// `[0, 1]` are clamped.
    pub fn transform(&self, fraction: f32) -> f32 {
        let fraction = fraction.clamp(0.0, 1.0);
        match self {
            Easing::LinearEasing => fraction,
            Easing::Decelerate => {
                let inverse = 1.0 - fraction;
                1.0 - inverse * inverse
            }
            Easing::FastOutSlowInEasing => cubic_bezier(0.4, 0.0, 0.2, 1.0, fraction),
        }
    }
}

/// Solves the curve for `fraction` on x and returns the matching y.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, fraction: f32) -> f32 {
    if fraction <= 0.0 {
        return 0.0;
    }
    if fraction >= 1.0 {
        return 1.0;
    }

    let cx = 3.0 * x1;
    let bx = 3.0 * (x2 - x1) - cx;
    let ax = 1.0 - cx - bx;

    let cy = 3.0 * y1;
    let by = 3.0 * (y2 - y1) - cy;
    let ay = 1.0 - cy - by;

    fn sample_curve(a: f32, b: f32, c: f32, t: f32) -> f32 {
        ((a * t + b) * t + c) * t
    }

    // Bisection on x; the curves used here are monotonic in x so this always
    // converges inside [0, 1].
    let mut low = 0.0f32;
    let mut high = 1.0f32;
    let mut t = fraction;
    for _ in 0..24 {
        let x = sample_curve(ax, bx, cx, t);
        let delta = x - fraction;
        if delta.abs() < 1e-6 {
            break;
        }
        if delta > 0.0 {
            high = t;
        } else {
            low = t;
        }
        t = 0.5 * (low + high);
    }

    sample_curve(ay, by, cy, t)
}
