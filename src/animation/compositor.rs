//! Frame-driven compositor for the tree's path pair
//!
//! Holds the committed (model) value plus keyed animation sessions, and
//! turns them into the presentation value for the current frame. The host
//! advances every session once per frame with [`Compositor::tick`].

use crate::geometry::PathPair;
use crate::log;
use super::keyframes::KeyframeAnimation;

/// Fixed session keys. A session added under a key replaces any prior
/// session with the same key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationKey {
    BendingTransition,
    Wiggle,
}

impl AnimationKey {
    pub const fn as_str(&self) -> &'static str {
        match self {
            AnimationKey::BendingTransition => "bendingTransition",
            AnimationKey::Wiggle => "wiggle",
        }
    }
}

/// Callback run once when a session finishes on its own
pub type Completion = Box<dyn FnOnce()>;

struct Session {
    key: AnimationKey,
    animation: KeyframeAnimation<PathPair>,
    /// Seconds since the session started
    elapsed: f32,
    completion: Option<Completion>,
}

impl Session {
    fn is_finished(&self) -> bool {
        self.animation.is_finished(self.elapsed)
    }
}

/// Model value and running sessions
pub struct Compositor {
    model: PathPair,
    sessions: Vec<Session>,
}

impl Compositor {
    pub fn new(model: PathPair) -> Self {
        Self {
            model,
            sessions: Vec::new(),
        }
    }

    /// Replace the model value. Takes effect immediately, with no implicit
    /// transition; running sessions keep overriding it until they end.
    pub fn commit(&mut self, pair: PathPair) {
        self.model = pair;
    }

    /// Committed value, shown whenever no session is running
    pub fn model(&self) -> &PathPair {
        &self.model
    }

    /// Seconds the session under `key` has been running
    pub fn elapsed_of(&self, key: AnimationKey) -> Option<f32> {
        self.sessions.iter().find(|s| s.key == key).map(|s| s.elapsed)
    }

    /// Start a session now, replacing any session under `key`.
    ///
    /// A replaced session is dropped without running its completion.
    pub fn add(
        &mut self,
        key: AnimationKey,
        animation: KeyframeAnimation<PathPair>,
        completion: Option<Completion>,
    ) {
        if self.remove(key) {
            log::debug(&format!("animation '{}' superseded", key.as_str()));
        }

        self.sessions.push(Session {
            key,
            animation,
            elapsed: 0.0,
            completion,
        });
    }

    /// Drop the session under `key` without running its completion.
    /// Returns whether one was running.
    pub fn remove(&mut self, key: AnimationKey) -> bool {
        let before = self.sessions.len();
        self.sessions.retain(|s| s.key != key);
        self.sessions.len() != before
    }

    pub fn contains(&self, key: AnimationKey) -> bool {
        self.sessions.iter().any(|s| s.key == key)
    }

    pub fn is_animating(&self) -> bool {
        !self.sessions.is_empty()
    }

    /// Duration of the session under `key`, if running
    pub fn duration_of(&self, key: AnimationKey) -> Option<f32> {
        self.sessions
            .iter()
            .find(|s| s.key == key)
            .map(|s| s.animation.duration)
    }

    /// Value to draw this frame. The most recently added session wins.
    pub fn presentation(&self) -> PathPair {
        self.sessions
            .iter()
            .rev()
            .find_map(|s| s.animation.sample(s.elapsed))
            .unwrap_or_else(|| self.model.clone())
    }

    /// Advance every session by `dt` seconds, retire finished sessions and run
    /// their completions. Returns how many sessions finished.
    ///
    /// Completions run after bookkeeping, so the compositor is already in
    /// its post-frame state when they fire.
    pub fn tick(&mut self, dt: f32) -> usize {
        if dt.is_finite() && dt > 0.0 {
            for session in &mut self.sessions {
                session.elapsed += dt;
            }
        }

        let (finished, running): (Vec<Session>, Vec<Session>) = std::mem::take(&mut self.sessions)
            .into_iter()
            .partition(Session::is_finished);
        self.sessions = running;

        let count = finished.len();
        for session in finished {
            if let Some(completion) = session.completion {
                log::debug(&format!("animation '{}' completed", session.key.as_str()));
                completion();
            }
        }

        count
    }
}
