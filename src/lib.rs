//! gridq — tabular Q-learning over bucketed observations
//!
//! Learns a control policy for a continuous-state, discrete-action
//! environment by discretizing observations into a fixed bucket grid and
//! applying temporal-difference updates to a Q-table. The environment is a
//! collaborator behind the [`Environment`] trait; the trainer drives it
//! episode by episode until a streak of successful episodes signals
//! convergence or the episode budget runs out.

pub mod algorithms;
pub mod config;
pub mod core;
pub mod environment;
pub mod error;
pub mod schedule;
pub mod training;

pub use crate::algorithms::{EpsilonGreedy, QTable};
pub use crate::config::{AgentConfig, DiscretizerConfig, ScheduleConfig, TrainingConfig};
pub use crate::core::{
    Action, ActionSpace, DimensionBounds, DiscreteState, Observation, StateDiscretizer,
};
pub use crate::environment::{Environment, ScriptedEnvironment, StepResult};
pub use crate::error::{GridqError, Result};
pub use crate::schedule::Schedules;
pub use crate::training::{EpisodeOutcome, TerminationCause, Trainer, TrainingReport};
