//! Core abstractions
//!
//! Fundamental types for observations, discrete states, and actions.

pub mod action;
pub mod state;

pub use action::{Action, ActionSpace};
pub use state::{DimensionBounds, DiscreteState, Observation, StateDiscretizer};
