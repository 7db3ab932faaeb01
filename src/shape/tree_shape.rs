//! Bending state for one tree: current bending, reference height and the
//! compositor that shows the leaf and trunk outlines.

use crate::animation::{
    transition_animation, transition_duration, wiggle_animation, wiggle_rest_pair, AnimationKey,
    Completion, Compositor,
};
use crate::data::TreeConfig;
use crate::geometry::{clamp_bending, left_aligned_pair, PathPair};
use crate::log;

/// Wiggle state, derived from the running sessions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WiggleState {
    Idle,
    Running,
}

/// A bendable tree silhouette.
///
/// All mutation goes through this type so the leaf and trunk are always
/// committed and animated as one pair.
pub struct TreeShape {
    /// Always within [-1, 1]
    bending: f32,
    height: f32,
    compositor: Compositor,
}

impl TreeShape {
    /// Set up a tree of `height` at `bending`, committing its paths
    pub fn new(height: f32, bending: f32) -> Self {
        let bending = clamp_bending(bending);
        Self {
            bending,
            height,
            compositor: Compositor::new(left_aligned_pair(bending, height)),
        }
    }

    pub fn from_config(config: &TreeConfig) -> Self {
        Self::new(config.height, config.bending)
    }

    pub fn bending(&self) -> f32 {
        self.bending
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Change the bending, clamped to [-1, 1].
    ///
    /// Without animation the new paths are committed at once. With animation
    /// the shape moves from what is currently shown to the target over
    /// `min(duration, 0.25)` seconds; a running transition is superseded.
    /// A non-positive duration commits immediately.
    pub fn set_bending(&mut self, value: f32, animated: bool, duration: f32) {
        self.bending = clamp_bending(value);
        let target = left_aligned_pair(self.bending, self.height);
        let duration = transition_duration(duration);

        if !animated || duration <= 0.0 {
            self.compositor.commit(target);
            return;
        }

        let from = self.compositor.presentation();
        self.compositor.commit(target.clone());
        self.compositor.add(
            AnimationKey::BendingTransition,
            transition_animation(from, target, duration),
            None,
        );
    }

    /// Update the reference height. Paths follow on the next recompute.
    pub fn set_height(&mut self, height: f32) {
        if !height.is_finite() {
            log::warn(&format!("ignoring non-finite tree height {}", height));
            return;
        }
        self.height = height;
    }

    /// Regenerate and commit the paths for the current bending and height.
    ///
    /// Does nothing while any animation is running. Returns whether the
    /// paths were committed.
    pub fn recompute_paths(&mut self) -> bool {
        if self.compositor.is_animating() {
            return false;
        }
        self.compositor.commit(left_aligned_pair(self.bending, self.height));
        true
    }

    /// New height followed by a recompute
    pub fn resize(&mut self, height: f32) -> bool {
        self.set_height(height);
        self.recompute_paths()
    }

    /// Start the damped wiggle from the current bending back to rest.
    ///
    /// Ignored while a wiggle is running; the ignored call's completion is
    /// dropped. The rest paths are committed up front; the stored bending is
    /// left as is. `completion` runs once when the wiggle finishes on its
    /// own. Returns whether a wiggle was started.
    pub fn start_wiggle(&mut self, completion: Option<Completion>) -> bool {
        if self.compositor.contains(AnimationKey::Wiggle) {
            log::debug("wiggle already running, start ignored");
            return false;
        }

        let animation = wiggle_animation(self.bending, self.height);
        self.compositor.commit(wiggle_rest_pair(self.height));
        self.compositor.add(AnimationKey::Wiggle, animation, completion);

        log::debug("wiggle started");
        true
    }

    /// Cut the wiggle immediately. Its completion does not run.
    /// Returns whether one was running.
    pub fn stop_wiggle(&mut self) -> bool {
        let stopped = self.compositor.remove(AnimationKey::Wiggle);
        if stopped {
            log::debug("wiggle stopped");
        }
        stopped
    }

    pub fn wiggle_state(&self) -> WiggleState {
        if self.compositor.contains(AnimationKey::Wiggle) {
            WiggleState::Running
        } else {
            WiggleState::Idle
        }
    }

    pub fn is_wiggling(&self) -> bool {
        self.wiggle_state() == WiggleState::Running
    }

    pub fn is_animating(&self) -> bool {
        self.compositor.is_animating()
    }

    /// Duration of the running bending transition, if any
    pub fn transition_duration(&self) -> Option<f32> {
        self.compositor.duration_of(AnimationKey::BendingTransition)
    }

    /// Advance animations by `dt` seconds
    pub fn tick(&mut self, dt: f32) -> usize {
        self.compositor.tick(dt)
    }

    /// Committed paths
    pub fn committed(&self) -> &PathPair {
        self.compositor.model()
    }

    /// Paths to draw this frame
    pub fn presentation(&self) -> PathPair {
        self.compositor.presentation()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use crate::animation::WIGGLE_DURATION;

    fn counted() -> (Rc<Cell<u32>>, Completion) {
        let count = Rc::new(Cell::new(0));
        let inner = count.clone();
        (count, Box::new(move || inner.set(inner.get() + 1)))
    }

    #[test]
    fn test_setup_commits_paths() {
        let tree = TreeShape::new(200.0, 0.4);
        assert_eq!(tree.bending(), 0.4);
        assert_eq!(tree.committed(), &left_aligned_pair(0.4, 200.0));
        assert!(!tree.is_animating());
    }

    #[test]
    fn test_setup_clamps_bending() {
        assert_eq!(TreeShape::new(100.0, -3.0).bending(), -1.0);
    }

    #[test]
    fn test_set_bending_immediate_is_idempotent() {
        let mut tree = TreeShape::new(200.0, 0.0);
        tree.set_bending(0.5, false, 0.0);
        let first = tree.committed().clone();
        tree.set_bending(0.5, false, 0.0);

        assert_eq!(tree.committed(), &first);
        assert_eq!(tree.presentation(), first);
        assert!(!tree.is_animating());
    }

    #[test]
    fn test_set_bending_clamps() {
        let mut over = TreeShape::new(200.0, 0.0);
        let mut max = TreeShape::new(200.0, 0.0);
        over.set_bending(2.0, false, 0.0);
        max.set_bending(1.0, false, 0.0);

        assert_eq!(over.bending(), 1.0);
        assert_eq!(over.committed(), max.committed());
    }

    #[test]
    fn test_animated_duration_is_capped() {
        let mut tree = TreeShape::new(200.0, 0.0);
        tree.set_bending(0.3, true, 1.0);
        assert_eq!(tree.transition_duration(), Some(0.25));
    }

    #[test]
    fn test_animated_transition_moves_from_shown_to_target() {
        let mut tree = TreeShape::new(200.0, 0.0);
        let start = tree.presentation();
        tree.set_bending(-0.6, true, 0.2);

        assert_eq!(tree.presentation(), start);
        tree.tick(0.1);
        let mid = tree.presentation();
        assert_ne!(mid, start);

        tree.tick(0.1);
        assert!(!tree.is_animating());
        assert_eq!(tree.presentation(), left_aligned_pair(-0.6, 200.0));
    }

    #[test]
    fn test_second_transition_supersedes_first() {
        let mut tree = TreeShape::new(200.0, 0.0);
        tree.set_bending(1.0, true, 0.25);
        tree.tick(0.1);
        tree.set_bending(-1.0, true, 0.1);

        assert_eq!(tree.transition_duration(), Some(0.1));
        tree.tick(0.1);
        assert!(!tree.is_animating());
        assert_eq!(tree.presentation(), left_aligned_pair(-1.0, 200.0));
    }

    #[test]
    fn test_non_positive_duration_commits_immediately() {
        let mut tree = TreeShape::new(200.0, 0.0);
        tree.set_bending(0.7, true, 0.0);
        assert!(!tree.is_animating());
        assert_eq!(tree.presentation(), left_aligned_pair(0.7, 200.0));

        tree.set_bending(0.2, true, -1.0);
        assert!(!tree.is_animating());
        assert_eq!(tree.presentation(), left_aligned_pair(0.2, 200.0));
    }

    #[test]
    fn test_recompute_after_resize() {
        let mut tree = TreeShape::new(200.0, 0.5);
        tree.set_height(100.0);
        assert_eq!(tree.committed(), &left_aligned_pair(0.5, 200.0));

        assert!(tree.recompute_paths());
        assert_eq!(tree.committed(), &left_aligned_pair(0.5, 100.0));
    }

    #[test]
    fn test_recompute_skipped_while_animating() {
        let mut tree = TreeShape::new(200.0, 0.8);
        tree.start_wiggle(None);
        let committed = tree.committed().clone();

        assert!(!tree.resize(50.0));
        assert_eq!(tree.committed(), &committed);
        assert_eq!(tree.height(), 50.0);
    }

    #[test]
    fn test_non_finite_height_ignored() {
        let mut tree = TreeShape::new(200.0, 0.0);
        tree.set_height(f32::NAN);
        assert_eq!(tree.height(), 200.0);
    }

    #[test]
    fn test_wiggle_commits_rest_and_completes_once() {
        let mut tree = TreeShape::new(200.0, 1.0);
        let (count, completion) = counted();

        assert!(tree.start_wiggle(Some(completion)));
        assert_eq!(tree.wiggle_state(), WiggleState::Running);
        assert_eq!(tree.committed(), &left_aligned_pair(0.0, 200.0));
        assert_eq!(tree.presentation(), left_aligned_pair(1.0, 200.0));
        assert_eq!(tree.bending(), 1.0);

        tree.tick(WIGGLE_DURATION / 2.0);
        assert_eq!(count.get(), 0);

        tree.tick(WIGGLE_DURATION);
        assert_eq!(count.get(), 1);
        assert_eq!(tree.wiggle_state(), WiggleState::Idle);
        assert_eq!(tree.presentation(), left_aligned_pair(0.0, 200.0));
    }

    #[test]
    fn test_double_start_runs_one_wiggle() {
        let mut tree = TreeShape::new(200.0, 0.6);
        let (first, first_done) = counted();
        let (second, second_done) = counted();

        assert!(tree.start_wiggle(Some(first_done)));
        tree.tick(0.1);
        assert!(!tree.start_wiggle(Some(second_done)));

        assert_eq!(tree.tick(1.0), 1);
        assert_eq!(first.get(), 1);
        assert_eq!(second.get(), 0);
    }

    #[test]
    fn test_second_start_does_not_restart() {
        let mut tree = TreeShape::new(200.0, 0.6);
        tree.start_wiggle(None);
        tree.tick(0.3);
        tree.start_wiggle(None);

        // the first wiggle still ends on schedule
        tree.tick(0.25);
        assert!(!tree.is_wiggling());
    }

    #[test]
    fn test_stop_wiggle_cuts_without_completion() {
        let mut tree = TreeShape::new(200.0, -0.9);
        let (count, completion) = counted();
        tree.start_wiggle(Some(completion));
        tree.tick(0.1);

        assert!(tree.stop_wiggle());
        assert!(!tree.is_wiggling());
        assert_eq!(tree.presentation(), left_aligned_pair(0.0, 200.0));

        tree.tick(1.0);
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn test_stop_when_idle_is_harmless() {
        let mut tree = TreeShape::new(200.0, 0.3);
        let before = tree.committed().clone();

        assert!(!tree.stop_wiggle());
        assert_eq!(tree.bending(), 0.3);
        assert_eq!(tree.committed(), &before);
        assert_eq!(tree.wiggle_state(), WiggleState::Idle);
    }

    #[test]
    fn test_wiggle_keeps_stored_bending() {
        let mut tree = TreeShape::new(200.0, 0.8);
        tree.start_wiggle(None);
        tree.tick(1.0);

        assert_eq!(tree.bending(), 0.8);
        assert_eq!(tree.committed(), &left_aligned_pair(0.0, 200.0));

        // a later recompute follows the stored bending
        assert!(tree.recompute_paths());
        assert_eq!(tree.committed(), &left_aligned_pair(0.8, 200.0));
    }

    #[test]
    fn test_wiggle_finishes_after_long_uptime() {
        let mut tree = TreeShape::new(200.0, 0.5);
        let (count, completion) = counted();
        tree.tick(600_000.0);

        tree.start_wiggle(Some(completion));
        for _ in 0..60 {
            tree.tick(1.0 / 60.0);
        }

        assert!(!tree.is_wiggling());
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_wiggle_can_restart_after_completion() {
        let mut tree = TreeShape::new(200.0, 0.5);
        tree.start_wiggle(None);
        tree.tick(1.0);
        assert!(tree.start_wiggle(None));
    }
}
