//! Configuration for the kinemap engines.

use serde::{Deserialize, Serialize};

/// Main configuration: one map per modality plus the association layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Map configuration for modality A (e.g. hand positions).
    pub som_a: SomConfig,

    /// Map configuration for modality B (e.g. joint angles).
    pub som_b: SomConfig,

    /// Hebbian association layer configuration.
    pub hebbian: HebbianConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            som_a: SomConfig::default(),
            som_b: SomConfig::default(),
            hebbian: HebbianConfig::default(),
        }
    }
}

/// Weight initialization policy for a new map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeightInit {
    /// Draw each weight from a per-dimension normal distribution matched
    /// to the training-set mean and standard deviation.
    SampleStatistics,
    /// Copy randomly chosen training samples as initial weight vectors.
    FromSamples,
}

/// Order in which training samples are presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SampleOrder {
    /// Draw a uniformly random sample each iteration.
    Random,
    /// Cycle through the training set in its stored order.
    Sequential,
}

/// Self-organizing map configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SomConfig {
    /// Number of grid rows.
    /// Default: 10.
    pub nr_rows: usize,

    /// Number of grid columns.
    /// Default: 10.
    pub nr_cols: usize,

    /// Dimensionality of the input vectors and node weights.
    /// Default: 3 (one Cartesian or joint-space triple per sample).
    pub input_dim: usize,

    /// Initial neighborhood spread.
    /// Default: 1.0.
    pub initial_sigma: f64,

    /// Final neighborhood spread.
    /// Default: 0.2.
    pub final_sigma: f64,

    /// Initial learning rate.
    /// Default: 0.5.
    pub initial_learning_rate: f64,

    /// Final learning rate.
    /// Default: 0.01.
    pub final_learning_rate: f64,

    /// Weight initialization policy.
    /// Default: [`WeightInit::SampleStatistics`].
    pub weight_init: WeightInit,

    /// Sample presentation order during training.
    /// Default: [`SampleOrder::Random`].
    pub order: SampleOrder,

    /// Random seed for reproducibility.
    /// Default: None (random).
    pub seed: Option<u64>,
}

impl Default for SomConfig {
    fn default() -> Self {
        Self {
            nr_rows: 10,
            nr_cols: 10,
            input_dim: 3,
            initial_sigma: 1.0,
            final_sigma: 0.2,
            initial_learning_rate: 0.5,
            final_learning_rate: 0.01,
            weight_init: WeightInit::SampleStatistics,
            order: SampleOrder::Random,
            seed: None,
        }
    }
}

impl SomConfig {
    /// Returns the total number of nodes in the grid.
    #[inline]
    pub fn total_nodes(&self) -> usize {
        self.nr_rows * self.nr_cols
    }
}

/// Hebbian association layer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HebbianConfig {
    /// Accumulation gain applied to each co-occurrence.
    /// Default: 0.1.
    pub eta: f64,
}

impl Default for HebbianConfig {
    fn default() -> Self {
        Self { eta: 0.1 }
    }
}
