//! Timing curves for keyframe intervals

use serde::{Deserialize, Serialize};
use crate::math::{solve_timing_curve, Vec2};

/// Easing function types, each a cubic-bezier timing curve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// Linear interpolation
    #[default]
    Linear,
    /// Slow start, accelerate
    EaseIn,
    /// Fast start, decelerate
    EaseOut,
}

impl Easing {
    /// Inner control points of the timing curve
    pub fn control_points(&self) -> (Vec2, Vec2) {
        match self {
            Easing::Linear => (Vec2::new(0.0, 0.0), Vec2::new(1.0, 1.0)),
            Easing::EaseIn => (Vec2::new(0.42, 0.0), Vec2::new(1.0, 1.0)),
            Easing::EaseOut => (Vec2::new(0.0, 0.0), Vec2::new(0.58, 1.0)),
        }
    }
}

/// Apply easing function to a value t in range [0, 1]
pub fn ease(t: f32, easing: Easing) -> f32 {
    let t = t.clamp(0.0, 1.0);

    match easing {
        Easing::Linear => t,
        _ => {
            let (p1, p2) = easing.control_points();
            solve_timing_curve(p1, p2, t)
        }
    }
}
