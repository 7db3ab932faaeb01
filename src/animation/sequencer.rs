//! Builds the tree's animation descriptors from sampled geometry

use crate::geometry::{clamp_bending, left_aligned_pair, PathPair};
use super::easing::Easing;
use super::keyframes::KeyframeAnimation;

/// Upper bound for a single bending transition, in seconds
pub const MAX_TRANSITION_DURATION: f32 = 0.25;

/// Total wiggle duration, in seconds
pub const WIGGLE_DURATION: f32 = 0.5;

/// Wiggle samples as multiples of the starting bending.
/// The second swing extreme is repeated to hold it for a beat.
pub const WIGGLE_MULTIPLIERS: [f32; 10] = [1.0, -0.8, -0.8, 0.8, -0.4, 0.35, -0.2, 0.1, -0.05, 0.0];

pub const WIGGLE_KEY_TIMES: [f32; 9] = [0.0, 0.2, 0.3, 0.5, 0.7, 0.8, 0.9, 0.95, 1.0];

pub const WIGGLE_TIMING: [Easing; 8] = [
    Easing::EaseIn,
    Easing::EaseOut,
    Easing::EaseIn,
    Easing::EaseOut,
    Easing::EaseIn,
    Easing::EaseOut,
    Easing::EaseIn,
    Easing::EaseOut,
];

/// Requested transition duration limited to [`MAX_TRANSITION_DURATION`].
/// Non-finite requests count as zero.
pub fn transition_duration(requested: f32) -> f32 {
    if requested.is_nan() {
        return 0.0;
    }
    requested.min(MAX_TRANSITION_DURATION)
}

/// Bending values the wiggle passes through, starting from `bending`
pub fn wiggle_bendings(bending: f32) -> Vec<f32> {
    let bending = clamp_bending(bending);
    WIGGLE_MULTIPLIERS.iter().map(|m| m * bending).collect()
}

/// Damped oscillation from `bending` back to rest, as one descriptor
/// animating leaf and trunk together
pub fn wiggle_animation(bending: f32, height: f32) -> KeyframeAnimation<PathPair> {
    let values = wiggle_bendings(bending)
        .into_iter()
        .map(|b| left_aligned_pair(b, height))
        .collect();

    KeyframeAnimation::new(values, WIGGLE_DURATION)
        .with_key_times(WIGGLE_KEY_TIMES.to_vec())
        .with_timing(WIGGLE_TIMING.to_vec())
}

/// The pair the wiggle settles on
pub fn wiggle_rest_pair(height: f32) -> PathPair {
    left_aligned_pair(0.0, height)
}

/// Two-endpoint transition, interpolated natively by the compositor
pub fn transition_animation(from: PathPair, to: PathPair, duration: f32) -> KeyframeAnimation<PathPair> {
    KeyframeAnimation::between(from, to, transition_duration(duration))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_duration_is_capped() {
        assert_eq!(transition_duration(1.0), 0.25);
        assert_eq!(transition_duration(0.1), 0.1);
        assert_eq!(transition_duration(f32::INFINITY), 0.25);
        assert_eq!(transition_duration(f32::NAN), 0.0);
    }

    #[test]
    fn test_wiggle_bendings_keep_held_beat() {
        let bendings = wiggle_bendings(0.5);
        assert_eq!(bendings.len(), 10);
        assert_eq!(bendings[0], 0.5);
        assert_eq!(bendings[1], bendings[2]);
        assert_eq!(bendings[1], -0.4);
        assert_eq!(bendings[9], 0.0);
    }

    #[test]
    fn test_wiggle_bendings_are_clamped() {
        assert_eq!(wiggle_bendings(4.0)[0], 1.0);
    }

    #[test]
    fn test_wiggle_descriptor() {
        let anim = wiggle_animation(1.0, 200.0);
        assert_eq!(anim.values.len(), 10);
        assert_eq!(anim.key_times, WIGGLE_KEY_TIMES.to_vec());
        assert_eq!(anim.timing.len(), 8);
        assert_eq!(anim.duration, WIGGLE_DURATION);
        assert_eq!(anim.values[0], left_aligned_pair(1.0, 200.0));
        assert_eq!(anim.values[9], wiggle_rest_pair(200.0));
    }

    #[test]
    fn test_wiggle_ends_at_rest() {
        let anim = wiggle_animation(-0.7, 120.0);
        assert_eq!(anim.sample(WIGGLE_DURATION), Some(wiggle_rest_pair(120.0)));
        assert_eq!(anim.sample(0.0), Some(left_aligned_pair(-0.7, 120.0)));
    }

    #[test]
    fn test_transition_descriptor() {
        let from = left_aligned_pair(0.0, 100.0);
        let to = left_aligned_pair(0.3, 100.0);
        let anim = transition_animation(from.clone(), to.clone(), 1.0);

        assert_eq!(anim.duration, 0.25);
        assert_eq!(anim.sample(0.0), Some(from));
        assert_eq!(anim.sample(0.25), Some(to));
    }
}
