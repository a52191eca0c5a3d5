//! Q-table
//!
//! Tabular action-value store with the Q-learning update rule. Rows are
//! allocated lazily on first write; an entry that was never written reads
//! as zero, the initial value for every state-action pair.

use std::collections::HashMap;

use crate::core::{Action, ActionSpace, DiscreteState};
use crate::error::{GridqError, Result};

/// Q-values indexed by (discrete state, action)
///
/// `update` is the only mutator; every other operation is read-only.
#[derive(Debug, Clone)]
pub struct QTable {
    values: HashMap<DiscreteState, Vec<f64>>,
    num_actions: usize,
}

impl QTable {
    /// Create an empty table for the given action space
    pub fn new(action_space: ActionSpace) -> Self {
        Self {
            values: HashMap::new(),
            num_actions: action_space.size(),
        }
    }

    /// Q-value for a state-action pair, zero if never written
    pub fn get(&self, state: &DiscreteState, action: Action) -> f64 {
        self.values
            .get(state)
            .and_then(|row| row.get(action))
            .copied()
            .unwrap_or(0.0)
    }

    /// Maximum Q-value over all actions for a state
    pub fn best_value(&self, state: &DiscreteState) -> f64 {
        self.values.get(state).map_or(0.0, |row| {
            row.iter().copied().fold(f64::NEG_INFINITY, f64::max)
        })
    }

    /// Action with the highest Q-value for a state
    ///
    /// Ties break to the lowest action index, so the choice is
    /// deterministic for a given table.
    pub fn best_action(&self, state: &DiscreteState) -> Action {
        match self.values.get(state) {
            Some(row) => {
                let mut best = 0;
                for (action, &q) in row.iter().enumerate().skip(1) {
                    if q > row[best] {
                        best = action;
                    }
                }
                best
            }
            None => 0,
        }
    }

    /// Apply the Q-learning update for one observed transition
    ///
    /// `new = old + learning_rate * (reward + discount * best_value(next) - old)`
    ///
    /// Writes the moved estimate at `(state, action)` and returns it. A
    /// non-finite result means the reward/discount configuration diverged;
    /// the update fails with `NumericDegenerate` instead of storing it.
    pub fn update(
        &mut self,
        state: &DiscreteState,
        action: Action,
        reward: f64,
        next_state: &DiscreteState,
        learning_rate: f64,
        discount_factor: f64,
    ) -> Result<f64> {
        let best_next = self.best_value(next_state);
        let target = reward + discount_factor * best_next;

        let num_actions = self.num_actions;
        let row = self
            .values
            .entry(state.clone())
            .or_insert_with(|| vec![0.0; num_actions]);

        let old = row[action];
        let new = old + learning_rate * (target - old);
        if !new.is_finite() {
            return Err(GridqError::NumericDegenerate {
                state: state.indices().to_vec(),
                action,
                value: new,
            });
        }
        row[action] = new;
        Ok(new)
    }

    /// Number of states with at least one written entry
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
