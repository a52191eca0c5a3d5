//! Observation Space
//!
//! Continuous observations and their mapping onto a fixed bucket grid.
//! The discretizer is the only component that touches raw observations;
//! everything downstream works with `DiscreteState` keys.

use serde::{Deserialize, Serialize};

use crate::config::DiscretizerConfig;
use crate::error::{GridqError, Result};

/// A continuous observation: one scalar per state dimension
pub type Observation = Vec<f64>;

/// Value range for one observation dimension
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DimensionBounds {
    /// Lower bound
    pub low: f64,
    /// Upper bound
    pub high: f64,
}

impl DimensionBounds {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Width of the range
    pub fn width(&self) -> f64 {
        self.high - self.low
    }
}

/// Discrete state: one bucket index per observation dimension
///
/// Used as the Q-table key. Each component is in `[0, buckets[i] - 1]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiscreteState(Vec<usize>);

impl DiscreteState {
    /// Bucket index per dimension
    pub fn indices(&self) -> &[usize] {
        &self.0
    }
}

impl From<Vec<usize>> for DiscreteState {
    fn from(indices: Vec<usize>) -> Self {
        Self(indices)
    }
}

/// Precomputed mapping for a single dimension
#[derive(Debug, Clone, Copy)]
struct DimensionScale {
    bounds: DimensionBounds,
    buckets: usize,
    scale: f64,
    offset: f64,
}

/// Maps continuous observations onto a fixed bucket grid
///
/// Built once per run from the environment's reported bounds and the
/// discretizer configuration. Construction validates every dimension, so
/// `discretize` itself never divides or fails on numeric grounds.
#[derive(Debug, Clone)]
pub struct StateDiscretizer {
    dimensions: Vec<DimensionScale>,
}

impl StateDiscretizer {
    /// Build a discretizer from environment bounds and configuration
    ///
    /// Configured overrides replace the environment-reported bounds for
    /// their dimensions before validation. Fails on dimension-count
    /// mismatch, zero bucket counts, and degenerate or non-finite bounds.
    pub fn new(env_bounds: Vec<DimensionBounds>, config: &DiscretizerConfig) -> Result<Self> {
        if env_bounds.len() != config.buckets.len() {
            return Err(GridqError::Config(format!(
                "environment reports {} observation dimensions, bucket counts cover {}",
                env_bounds.len(),
                config.buckets.len()
            )));
        }

        let mut bounds = env_bounds;
        for (dimension, replacement) in &config.bound_overrides {
            let slot =
                bounds
                    .get_mut(*dimension)
                    .ok_or_else(|| GridqError::OverrideOutOfRange {
                        dimension: *dimension,
                        dimensions: config.buckets.len(),
                    })?;
            *slot = *replacement;
        }

        let mut dimensions = Vec::with_capacity(bounds.len());
        for (dimension, (range, &buckets)) in bounds.iter().zip(&config.buckets).enumerate() {
            if buckets == 0 {
                return Err(GridqError::ZeroBuckets { dimension });
            }
            if !range.low.is_finite() || !range.high.is_finite() || range.low >= range.high {
                return Err(GridqError::DegenerateBounds {
                    dimension,
                    low: range.low,
                    high: range.high,
                });
            }
            let scale = (buckets - 1) as f64 / range.width();
            let offset = scale * range.low;
            dimensions.push(DimensionScale {
                bounds: *range,
                buckets,
                scale,
                offset,
            });
        }

        Ok(Self { dimensions })
    }

    /// Number of observation dimensions
    pub fn num_dimensions(&self) -> usize {
        self.dimensions.len()
    }

    /// Map a continuous observation to its grid cell
    ///
    /// Values at or below the lower bound land in bucket 0, values at or
    /// above the upper bound in the last bucket; in between the value maps
    /// linearly onto `[0, buckets - 1]`. Pure and deterministic. The only
    /// error is an observation whose dimension count no longer matches the
    /// bounds the run was configured with.
    pub fn discretize(&self, observation: &[f64]) -> Result<DiscreteState> {
        if observation.len() != self.dimensions.len() {
            return Err(GridqError::DimensionMismatch {
                expected: self.dimensions.len(),
                actual: observation.len(),
            });
        }

        let indices = self
            .dimensions
            .iter()
            .zip(observation)
            .map(|(dim, &value)| {
                if value <= dim.bounds.low {
                    0
                } else if value >= dim.bounds.high {
                    dim.buckets - 1
                } else {
                    (dim.scale * value - dim.offset).round() as usize
                }
            })
            .collect();

        Ok(DiscreteState(indices))
    }
}
