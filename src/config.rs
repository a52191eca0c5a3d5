//! Agent Configuration
//!
//! Configuration structs for the learning agent components. Defaults
//! reproduce the classic cart-pole setup: four observation dimensions
//! bucketed as (1, 1, 6, 3), a 0.98 discount factor, and a run that counts
//! as solved after a long streak of surviving episodes.

use serde::{Deserialize, Serialize};

use crate::core::DimensionBounds;
use crate::error::{GridqError, Result};

/// Main agent configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AgentConfig {
    /// State discretization configuration
    pub discretizer: DiscretizerConfig,
    /// Exploration and learning-rate schedule configuration
    pub schedule: ScheduleConfig,
    /// Training loop configuration
    pub training: TrainingConfig,
}

impl AgentConfig {
    /// Validate all sections, failing before any episode can start
    pub fn validate(&self) -> Result<()> {
        self.discretizer.validate()?;
        self.schedule.validate()?;
        self.training.validate()
    }
}

/// State discretization configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscretizerConfig {
    /// Bucket count per observation dimension
    pub buckets: Vec<usize>,
    /// Replacements for the bounds reported by the environment, keyed by
    /// dimension index
    pub bound_overrides: Vec<(usize, DimensionBounds)>,
}

impl Default for DiscretizerConfig {
    fn default() -> Self {
        Self {
            buckets: vec![1, 1, 6, 3],
            bound_overrides: vec![
                (1, DimensionBounds::new(-1.0, 1.0)),
                (3, DimensionBounds::new(-50f64.to_radians(), 50f64.to_radians())),
            ],
        }
    }
}

impl DiscretizerConfig {
    /// Check bucket counts; bounds are validated when the discretizer is
    /// built against the environment
    pub fn validate(&self) -> Result<()> {
        for (dimension, &count) in self.buckets.iter().enumerate() {
            if count == 0 {
                return Err(GridqError::ZeroBuckets { dimension });
            }
        }
        Ok(())
    }
}

/// Schedule configuration
///
/// The floors guarantee the agent never fully stops exploring or learning.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// Minimum exploration rate
    pub min_exploration_rate: f64,
    /// Minimum learning rate
    pub min_learning_rate: f64,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            min_exploration_rate: 0.01,
            min_learning_rate: 0.1,
        }
    }
}

impl ScheduleConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.min_exploration_rate.is_finite()
            || self.min_exploration_rate <= 0.0
            || self.min_exploration_rate > 1.0
        {
            return Err(GridqError::Config(format!(
                "min_exploration_rate must be in (0, 1], got {}",
                self.min_exploration_rate
            )));
        }
        if !self.min_learning_rate.is_finite()
            || self.min_learning_rate <= 0.0
            || self.min_learning_rate > 0.5
        {
            return Err(GridqError::Config(format!(
                "min_learning_rate must be in (0, 0.5], got {}",
                self.min_learning_rate
            )));
        }
        Ok(())
    }
}

/// Training loop configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TrainingConfig {
    /// Maximum number of episodes before giving up
    pub max_episodes: usize,
    /// Step bound for a single episode
    pub max_steps_per_episode: usize,
    /// Discount factor (gamma) applied to future value estimates
    pub discount_factor: f64,
    /// Step count at which an episode counts toward the success streak
    pub success_step_threshold: usize,
    /// Consecutive successes required before training stops as converged
    pub success_streak_target: usize,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            max_episodes: 1000,
            max_steps_per_episode: 250,
            discount_factor: 0.98,
            success_step_threshold: 199,
            success_streak_target: 100,
        }
    }
}

impl TrainingConfig {
    pub fn validate(&self) -> Result<()> {
        if self.max_episodes == 0 {
            return Err(GridqError::Config("max_episodes must be at least 1".into()));
        }
        if self.max_steps_per_episode == 0 {
            return Err(GridqError::Config(
                "max_steps_per_episode must be at least 1".into(),
            ));
        }
        if !self.discount_factor.is_finite()
            || self.discount_factor < 0.0
            || self.discount_factor >= 1.0
        {
            return Err(GridqError::Config(format!(
                "discount_factor must be in [0, 1), got {}",
                self.discount_factor
            )));
        }
        Ok(())
    }
}
