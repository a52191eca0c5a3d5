//! Action Selection
//!
//! Epsilon-greedy policy over the Q-table.

use rand::Rng;

use crate::algorithms::QTable;
use crate::core::{Action, ActionSpace, DiscreteState};

/// Epsilon-greedy action selector
///
/// Explores with probability equal to the current exploration rate and
/// otherwise exploits the best-known action for the state. All randomness
/// comes from the injected rng, so a seeded generator makes every selection
/// in a run reproducible.
#[derive(Debug, Clone, Copy)]
pub struct EpsilonGreedy {
    action_space: ActionSpace,
}

impl EpsilonGreedy {
    pub fn new(action_space: ActionSpace) -> Self {
        Self { action_space }
    }

    /// Pick an action for `state` under the given exploration rate
    pub fn select<R: Rng>(
        &self,
        table: &QTable,
        state: &DiscreteState,
        exploration_rate: f64,
        rng: &mut R,
    ) -> Action {
        if rng.gen::<f64>() < exploration_rate {
            self.action_space.sample(rng)
        } else {
            table.best_action(state)
        }
    }
}
