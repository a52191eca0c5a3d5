//! Decay Schedules
//!
//! Time-decaying exploration and learning rates. Early episodes favor
//! exploration and large updates; later episodes favor exploitation and
//! fine-tuning.

use crate::config::ScheduleConfig;

/// Episodes over which the logarithmic decay runs before floors take over
const DECAY_SCALE: f64 = 25.0;

/// Ceiling for the exploration rate
const MAX_EXPLORATION_RATE: f64 = 1.0;

/// Ceiling for the learning rate
const MAX_LEARNING_RATE: f64 = 0.5;

/// Exploration and learning rates as pure functions of the episode index
///
/// Both rates decay as `1 - log10((t + 1) / 25)` and are clamped between
/// their configured floor and a fixed ceiling. They are non-increasing in
/// `t` until the floor is reached and flat afterwards.
#[derive(Debug, Clone, Copy)]
pub struct Schedules {
    min_exploration_rate: f64,
    min_learning_rate: f64,
}

impl Schedules {
    pub fn new(config: &ScheduleConfig) -> Self {
        Self {
            min_exploration_rate: config.min_exploration_rate,
            min_learning_rate: config.min_learning_rate,
        }
    }

    fn decay(t: usize) -> f64 {
        1.0 - ((t as f64 + 1.0) / DECAY_SCALE).log10()
    }

    /// Exploration rate for episode `t`
    pub fn exploration_rate(&self, t: usize) -> f64 {
        Self::decay(t).clamp(self.min_exploration_rate, MAX_EXPLORATION_RATE)
    }

    /// Learning rate for episode `t`
    pub fn learning_rate(&self, t: usize) -> f64 {
        Self::decay(t).clamp(self.min_learning_rate, MAX_LEARNING_RATE)
    }
}
