//! Self-organizing map for a single sensory modality.

use crate::config::{SomConfig, WeightInit};
use crate::error::{KinemapError, Result};
use crate::som::Node;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// A self-organizing map over one stream of vector samples.
///
/// The map is a rectangular grid of nodes in row-major order. It retains
/// its training set so winner and activation queries over the original
/// stream, and the Hebbian correlation pass, can run after training.
/// Weights are mutated only by [`SomTrainer::train`](crate::SomTrainer);
/// every query here takes `&self`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Som {
    /// Number of grid rows.
    pub nr_rows: usize,
    /// Number of grid columns.
    pub nr_cols: usize,
    /// Input dimensionality; every node weight vector has this length.
    pub input_dim: usize,
    /// The nodes in the grid (row-major order).
    pub nodes: Vec<Node>,
    samples: Vec<Vec<f64>>,
    initial_weights: Vec<Vec<f64>>,
}

impl Som {
    /// Creates a new map and takes ownership of its training set.
    ///
    /// Every sample is validated against `config.input_dim` before any
    /// node is built. Initialization is deterministic given `config.seed`.
    pub fn new(config: &SomConfig, samples: Vec<Vec<f64>>) -> Result<Self> {
        if config.nr_rows == 0 || config.nr_cols == 0 {
            return Err(KinemapError::Config(
                "grid must have at least one row and one column".to_string(),
            ));
        }
        if config.input_dim == 0 {
            return Err(KinemapError::Config(
                "input dimensionality must be at least 1".to_string(),
            ));
        }
        if samples.is_empty() {
            return Err(KinemapError::EmptyInput(
                "training set has no samples".to_string(),
            ));
        }
        for sample in &samples {
            if sample.len() != config.input_dim {
                return Err(KinemapError::DimensionMismatch {
                    expected: config.input_dim,
                    actual: sample.len(),
                });
            }
        }

        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };

        let total = config.nr_rows * config.nr_cols;
        let nodes: Vec<Node> = match config.weight_init {
            WeightInit::SampleStatistics => {
                let (means, stds) = sample_statistics(&samples, config.input_dim);
                (0..total)
                    .map(|i| {
                        let row = i / config.nr_cols;
                        let col = i % config.nr_cols;
                        Node::from_statistics(row, col, &means, &stds, &mut rng)
                    })
                    .collect()
            }
            WeightInit::FromSamples => (0..total)
                .map(|i| {
                    let row = i / config.nr_cols;
                    let col = i % config.nr_cols;
                    let pick = rng.gen_range(0..samples.len());
                    Node::with_weights(row, col, samples[pick].clone())
                })
                .collect(),
        };

        let initial_weights = nodes.iter().map(|n| n.weights.clone()).collect();

        Ok(Self {
            nr_rows: config.nr_rows,
            nr_cols: config.nr_cols,
            input_dim: config.input_dim,
            nodes,
            samples,
            initial_weights,
        })
    }

    /// Returns the grid shape as `(nr_rows, nr_cols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.nr_rows, self.nr_cols)
    }

    /// Returns the total number of nodes.
    #[inline]
    pub fn total_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the retained training set.
    #[inline]
    pub fn samples(&self) -> &[Vec<f64>] {
        &self.samples
    }

    /// Gets a node by its 2D position.
    #[inline]
    pub fn get_at(&self, row: usize, col: usize) -> Option<&Node> {
        if row < self.nr_rows && col < self.nr_cols {
            Some(&self.nodes[row * self.nr_cols + col])
        } else {
            None
        }
    }

    /// Converts a 1D node index to 2D grid coordinates.
    #[inline]
    pub fn index_to_coords(&self, index: usize) -> (usize, usize) {
        (index / self.nr_cols, index % self.nr_cols)
    }

    /// Converts 2D grid coordinates to a 1D node index.
    #[inline]
    pub fn coords_to_index(&self, row: usize, col: usize) -> usize {
        row * self.nr_cols + col
    }

    /// Finds the winner node for a sample: the grid coordinate whose
    /// weight vector is nearest in Euclidean distance.
    ///
    /// Ties break to the lowest row, then the lowest column.
    pub fn winner(&self, sample: &[f64]) -> Result<(usize, usize)> {
        self.check_dim(sample)?;

        let mut best_idx = 0;
        let mut best_dist = f64::INFINITY;
        for (idx, node) in self.nodes.iter().enumerate() {
            let dist = node.distance_squared(sample);
            if dist < best_dist {
                best_dist = dist;
                best_idx = idx;
            }
        }

        Ok(self.index_to_coords(best_idx))
    }

    /// Returns the row-major grid of Euclidean distances from a sample to
    /// every node's weight vector.
    ///
    /// The node returned by [`winner`](Self::winner) is always the argmin
    /// of this grid.
    pub fn activate(&self, sample: &[f64]) -> Result<Vec<f64>> {
        self.check_dim(sample)?;
        Ok(self.nodes.iter().map(|n| n.distance(sample)).collect())
    }

    /// Returns the row-major grid of win counts over a sample set.
    ///
    /// A node with a zero count never won and is considered inactivated.
    /// The counts always sum to `samples.len()`.
    pub fn activation_response(&self, samples: &[Vec<f64>]) -> Result<Vec<usize>> {
        for sample in samples {
            self.check_dim(sample)?;
        }

        let winners: Vec<usize> = samples
            .par_iter()
            .map(|s| {
                self.winner(s)
                    .map(|(row, col)| self.coords_to_index(row, col))
            })
            .collect::<Result<Vec<_>>>()?;

        let mut counts = vec![0usize; self.total_nodes()];
        for idx in winners {
            counts[idx] += 1;
        }
        Ok(counts)
    }

    /// Returns the mean Euclidean distance from each sample to its
    /// winner's weight vector, a standard map-quality diagnostic.
    pub fn quantization_error(&self, samples: &[Vec<f64>]) -> Result<f64> {
        if samples.is_empty() {
            return Err(KinemapError::EmptyInput(
                "quantization error over an empty sample set".to_string(),
            ));
        }
        for sample in samples {
            self.check_dim(sample)?;
        }

        let distances: Vec<f64> = samples
            .par_iter()
            .map(|s| {
                self.winner(s)
                    .map(|(row, col)| self.nodes[self.coords_to_index(row, col)].distance(s))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(distances.iter().sum::<f64>() / samples.len() as f64)
    }

    /// Returns the current node weights in row-major order.
    pub fn weights(&self) -> Vec<Vec<f64>> {
        self.nodes.iter().map(|n| n.weights.clone()).collect()
    }

    /// Returns the weights the grid was initialized with, in row-major
    /// order.
    pub fn initial_weights(&self) -> &[Vec<f64>] {
        &self.initial_weights
    }

    /// Computes the Gaussian neighborhood attenuation of a node relative
    /// to the winner at the given spread.
    pub fn neighborhood(&self, winner: (usize, usize), node_idx: usize, sigma: f64) -> f64 {
        let node = &self.nodes[node_idx];
        let dr = winner.0 as f64 - node.row as f64;
        let dc = winner.1 as f64 - node.col as f64;
        let grid_dist_sq = dr * dr + dc * dc;

        if sigma <= 0.0 {
            return if grid_dist_sq == 0.0 { 1.0 } else { 0.0 };
        }

        (-grid_dist_sq / (2.0 * sigma * sigma)).exp()
    }

    /// Pulls every node toward a sample, attenuated by the Gaussian
    /// neighborhood centered at the winner.
    pub fn update(&mut self, sample: &[f64], winner: (usize, usize), learning_rate: f64, sigma: f64) {
        let sigma_sq = sigma * sigma;

        for node in &mut self.nodes {
            let dr = winner.0 as f64 - node.row as f64;
            let dc = winner.1 as f64 - node.col as f64;
            let grid_dist_sq = dr * dr + dc * dc;

            let influence = if sigma <= 0.0 {
                if grid_dist_sq == 0.0 {
                    1.0
                } else {
                    0.0
                }
            } else {
                (-grid_dist_sq / (2.0 * sigma_sq)).exp()
            };
            node.update(sample, learning_rate, influence);
        }
    }

    #[inline]
    fn check_dim(&self, sample: &[f64]) -> Result<()> {
        if sample.len() != self.input_dim {
            return Err(KinemapError::DimensionMismatch {
                expected: self.input_dim,
                actual: sample.len(),
            });
        }
        Ok(())
    }
}

/// Per-dimension mean and standard deviation over a sample set.
fn sample_statistics(samples: &[Vec<f64>], dim: usize) -> (Vec<f64>, Vec<f64>) {
    let n = samples.len() as f64;
    let mut means = vec![0.0; dim];
    for sample in samples {
        for (m, v) in means.iter_mut().zip(sample.iter()) {
            *m += v;
        }
    }
    for m in &mut means {
        *m /= n;
    }

    let mut stds = vec![0.0; dim];
    for sample in samples {
        for ((s, v), m) in stds.iter_mut().zip(sample.iter()).zip(means.iter()) {
            *s += (v - m) * (v - m);
        }
    }
    for s in &mut stds {
        *s = (*s / n).sqrt();
    }

    (means, stds)
}
