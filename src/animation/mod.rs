//! Animation module for bending transitions and the wiggle
//!
//! Descriptors are built from sampled geometry, then run by a frame-driven
//! compositor that owns the committed path pair.

mod compositor;
mod easing;
mod keyframes;
mod sequencer;

pub use compositor::{AnimationKey, Completion, Compositor};
pub use easing::{ease, Easing};
pub use keyframes::{Interpolate, KeyframeAnimation};
pub use sequencer::{
    transition_animation, transition_duration, wiggle_animation, wiggle_bendings,
    wiggle_rest_pair, MAX_TRANSITION_DURATION, WIGGLE_DURATION, WIGGLE_KEY_TIMES,
    WIGGLE_MULTIPLIERS, WIGGLE_TIMING,
};
