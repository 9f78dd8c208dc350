//! One-shot scroll reveal bookkeeping.
//!
//! Targets are registered once; the first intersecting notification for a
//! target reveals it and removes it from observation. Later notifications
//! (scrolling away and back, duplicate entries in one batch) are ignored.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

/// Added to every observed element up front.
pub const PENDING_CLASS: &str = "animate-on-scroll";

/// Added once the element has been seen.
pub const VISIBLE_CLASS: &str = "is-visible";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RevealId(pub usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Watching,
    Revealed,
}

#[derive(Clone, Debug, Default)]
pub struct RevealTracker {
    targets: Vec<Phase>,
}

impl RevealTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start watching a new target.
    pub fn register(&mut self) -> RevealId {
        self.targets.push(Phase::Watching);
        RevealId(self.targets.len() - 1)
    }

    /// Feed one intersection notification.
    ///
    /// Returns `true` exactly once per target: the caller should add
    /// [`VISIBLE_CLASS`] and stop observing it.
    pub fn observe(&mut self, id: RevealId, is_intersecting: bool) -> bool {
        let Some(phase) = self.targets.get_mut(id.0) else {
            log::debug!("intersection for unknown reveal target {}", id.0);
            return false;
        };
        if !is_intersecting || *phase == Phase::Revealed {
            return false;
        }
        *phase = Phase::Revealed;
        true
    }

    #[must_use]
    pub fn is_revealed(&self, id: RevealId) -> bool {
        self.targets.get(id.0) == Some(&Phase::Revealed)
    }

    /// Targets still waiting to be seen.
    #[must_use]
    pub fn watching(&self) -> usize {
        self.targets.iter().filter(|p| **p == Phase::Watching).count()
    }
}
