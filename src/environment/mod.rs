//! Environment Interface
//!
//! Gym-like collaborator contract consumed by the training loop. Any
//! simulation or test double implementing `Environment` is interchangeable
//! from the trainer's point of view.

pub mod scripted;

pub use scripted::ScriptedEnvironment;

use crate::core::{Action, ActionSpace, DimensionBounds, Observation};
use crate::error::Result;

/// Result of taking a step in the environment
#[derive(Debug, Clone)]
pub struct StepResult {
    /// New observation after the action
    pub observation: Observation,
    /// Reward signal for the step
    pub reward: f64,
    /// Whether the episode is done
    pub done: bool,
}

/// A controllable environment the agent trains against
///
/// `reset` and `step` are fallible: any failure they surface is fatal for
/// the current training run, since a half-executed step cannot be replayed.
pub trait Environment {
    /// Start a new episode and return the initial observation
    fn reset(&mut self) -> Result<Observation>;

    /// Advance one timestep
    fn step(&mut self, action: Action) -> Result<StepResult>;

    /// Per-dimension observation bounds, fixed for the lifetime of a run
    fn observation_bounds(&self) -> Vec<DimensionBounds>;

    /// The discrete action space
    fn action_space(&self) -> ActionSpace;
}
