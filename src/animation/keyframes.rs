//! Keyframe animation descriptors
//!
//! A descriptor is plain data: values, relative key times, one timing curve
//! per interval and a duration. Sampling it at an elapsed time gives the
//! interpolated value the compositor should display.

use crate::geometry::PathPair;
use super::easing::{ease, Easing};

/// Values that can be blended between two keyframes
pub trait Interpolate: Clone {
    fn interpolate(&self, other: &Self, t: f32) -> Self;
}

impl Interpolate for PathPair {
    fn interpolate(&self, other: &Self, t: f32) -> Self {
        self.lerp(other, t)
    }
}

/// Timed sequence of values with per-interval easing
#[derive(Debug, Clone)]
pub struct KeyframeAnimation<T> {
    /// Keyframe values, at least one
    pub values: Vec<T>,
    /// Relative key times in [0, 1], one per value when valid
    pub key_times: Vec<f32>,
    /// Timing curve per interval; missing entries are linear
    pub timing: Vec<Easing>,
    /// Total duration in seconds
    pub duration: f32,
}

impl<T: Interpolate> KeyframeAnimation<T> {
    /// Evenly paced, linear keyframes
    pub fn new(values: Vec<T>, duration: f32) -> Self {
        Self {
            values,
            key_times: Vec::new(),
            timing: Vec::new(),
            duration,
        }
    }

    /// Two-keyframe animation
    pub fn between(from: T, to: T, duration: f32) -> Self {
        Self::new(vec![from, to], duration)
    }

    pub fn with_key_times(mut self, key_times: Vec<f32>) -> Self {
        self.key_times = key_times;
        self
    }

    pub fn with_timing(mut self, timing: Vec<Easing>) -> Self {
        self.timing = timing;
        self
    }

    /// Number of intervals between keyframes
    pub fn interval_count(&self) -> usize {
        self.values.len().saturating_sub(1)
    }

    /// Key times actually used for sampling.
    ///
    /// Explicit key times are used only when there is one per value and they
    /// are non-decreasing inside [0, 1]. Otherwise frames are paced evenly.
    pub fn effective_key_times(&self) -> Vec<f32> {
        let n = self.values.len();
        let valid = self.key_times.len() == n
            && self.key_times.iter().all(|t| (0.0..=1.0).contains(t))
            && self.key_times.windows(2).all(|w| w[0] <= w[1]);

        if valid {
            return self.key_times.clone();
        }

        let intervals = self.interval_count().max(1) as f32;
        (0..n).map(|i| i as f32 / intervals).collect()
    }

    /// Whether the animation has run its full duration at `elapsed`
    pub fn is_finished(&self, elapsed: f32) -> bool {
        elapsed >= self.duration
    }

    /// Progress in [0, 1] at `elapsed` seconds
    pub fn progress(&self, elapsed: f32) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (elapsed / self.duration).clamp(0.0, 1.0)
    }

    /// Interpolated value at `elapsed` seconds, `None` if there are no values.
    /// Holds the first value before the start and the last past the end.
    pub fn sample(&self, elapsed: f32) -> Option<T> {
        let first = self.values.first()?;
        let last = self.values.last()?;
        if self.values.len() == 1 {
            return Some(first.clone());
        }

        let progress = self.progress(elapsed);
        let key_times = self.effective_key_times();

        for (i, window) in key_times.windows(2).enumerate() {
            let (start, end) = (window[0], window[1]);
            if progress > end {
                continue;
            }

            let span = end - start;
            let local = if span > 0.0 { (progress - start) / span } else { 1.0 };
            let easing = self.timing.get(i).copied().unwrap_or(Easing::Linear);
            let t = ease(local, easing);

            // exact keyframe values at interval ends
            return Some(if t <= 0.0 {
                self.values[i].clone()
            } else if t >= 1.0 {
                self.values[i + 1].clone()
            } else {
                self.values[i].interpolate(&self.values[i + 1], t)
            });
        }

        Some(last.clone())
    }
}
