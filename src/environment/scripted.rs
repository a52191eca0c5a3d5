//! Scripted Environment
//!
//! Deterministic stand-in for a real simulation: a fixed observation space
//! and a per-episode survival script. Episode `i` survives
//! `episode_lengths[i]` steps before signalling done; the last script entry
//! repeats for every later episode.

use crate::core::{Action, ActionSpace, DimensionBounds, Observation};
use crate::environment::{Environment, StepResult};
use crate::error::{GridqError, Result};

/// Environment that follows a fixed survival script
#[derive(Debug, Clone)]
pub struct ScriptedEnvironment {
    bounds: Vec<DimensionBounds>,
    actions: ActionSpace,
    episode_lengths: Vec<usize>,
    reward_per_step: f64,
    episode: usize,
    steps_remaining: usize,
}

impl ScriptedEnvironment {
    /// Create a scripted environment
    ///
    /// Panics if the script is empty; a fixture without a script has no
    /// defined behavior.
    pub fn new(
        bounds: Vec<DimensionBounds>,
        num_actions: usize,
        episode_lengths: Vec<usize>,
    ) -> Self {
        assert!(
            !episode_lengths.is_empty(),
            "episode script must not be empty"
        );
        Self {
            bounds,
            actions: ActionSpace::new(num_actions),
            episode_lengths,
            reward_per_step: 1.0,
            episode: 0,
            steps_remaining: 0,
        }
    }

    /// Override the constant per-step reward (default 1.0)
    pub fn with_reward(mut self, reward: f64) -> Self {
        self.reward_per_step = reward;
        self
    }

    /// Episodes started so far
    pub fn episodes_started(&self) -> usize {
        self.episode
    }

    // Every observation sits at the center of the bounds; the script, not
    // the observation stream, decides how episodes end.
    fn observation(&self) -> Observation {
        self.bounds.iter().map(|b| b.low + b.width() / 2.0).collect()
    }
}

impl Environment for ScriptedEnvironment {
    fn reset(&mut self) -> Result<Observation> {
        let index = self.episode.min(self.episode_lengths.len() - 1);
        self.steps_remaining = self.episode_lengths[index];
        self.episode += 1;
        Ok(self.observation())
    }

    fn step(&mut self, action: Action) -> Result<StepResult> {
        if !self.actions.contains(action) {
            return Err(GridqError::Environment(format!(
                "action {action} outside the action space"
            )));
        }
        if self.steps_remaining == 0 {
            return Err(GridqError::Environment(
                "step called on a finished episode".into(),
            ));
        }

        self.steps_remaining -= 1;
        Ok(StepResult {
            observation: self.observation(),
            reward: self.reward_per_step,
            done: self.steps_remaining == 0,
        })
    }

    fn observation_bounds(&self) -> Vec<DimensionBounds> {
        self.bounds.clone()
    }

    fn action_space(&self) -> ActionSpace {
        self.actions
    }
}
