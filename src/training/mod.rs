//! Training Infrastructure
//!
//! The episodic training loop and its run bookkeeping.

pub mod trainer;

pub use trainer::{EpisodeOutcome, TerminationCause, Trainer, TrainingReport};
