//! Action Space
//!
//! Discrete actions identified by index.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Index of a discrete action
pub type Action = usize;

/// Discrete action space of fixed size
///
/// Actions are the indices `0..size`. The size is supplied by the
/// environment collaborator once per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionSpace {
    size: usize,
}

impl ActionSpace {
    /// Create an action space with `size` actions
    pub fn new(size: usize) -> Self {
        Self { size }
    }

    /// Number of actions
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether `action` is a member of this space
    pub fn contains(&self, action: Action) -> bool {
        action < self.size
    }

    /// Draw a uniformly random action
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Action {
        rng.gen_range(0..self.size)
    }

    /// Iterate over all actions in index order
    pub fn iter(&self) -> impl Iterator<Item = Action> {
        0..self.size
    }
}
