//! Grid node representation for the self-organizing map.

use rand::Rng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};

/// A single node in the self-organizing map grid.
///
/// Each node has a fixed position on the 2D grid and a weight vector in
/// input space that competitive learning pulls toward the samples it wins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    /// Row position on the grid.
    pub row: usize,
    /// Column position on the grid.
    pub col: usize,
    /// Weight vector in input space.
    pub weights: Vec<f64>,
}

impl Node {
    /// Creates a node with weights drawn from per-dimension normal
    /// distributions matched to the training-set statistics.
    pub fn from_statistics<R: Rng>(
        row: usize,
        col: usize,
        means: &[f64],
        stds: &[f64],
        rng: &mut R,
    ) -> Self {
        let weights: Vec<f64> = means
            .iter()
            .zip(stds.iter())
            .map(|(&mean, &std)| {
                let std = if std.is_finite() && std > 0.0 { std } else { 0.0 };
                match Normal::new(mean, std) {
                    Ok(normal) => normal.sample(rng),
                    Err(_) => mean,
                }
            })
            .collect();

        Self { row, col, weights }
    }

    /// Creates a node with the given weight vector.
    pub fn with_weights(row: usize, col: usize, weights: Vec<f64>) -> Self {
        Self { row, col, weights }
    }

    /// Computes the Euclidean distance between this node's weights and an
    /// input vector.
    pub fn distance(&self, input: &[f64]) -> f64 {
        self.distance_squared(input).sqrt()
    }

    /// Computes the squared Euclidean distance (faster, avoids sqrt).
    #[inline]
    pub fn distance_squared(&self, input: &[f64]) -> f64 {
        debug_assert_eq!(
            self.weights.len(),
            input.len(),
            "Weight and input dimensions must match"
        );

        self.weights
            .iter()
            .zip(input.iter())
            .map(|(w, i)| (w - i).powi(2))
            .sum()
    }

    /// Pulls the weight vector toward an input.
    ///
    /// `learning_rate` is the current global rate and `influence` the
    /// neighborhood attenuation (1.0 at the winner, falling off with grid
    /// distance).
    pub fn update(&mut self, input: &[f64], learning_rate: f64, influence: f64) {
        let step = learning_rate * influence;

        for (w, i) in self.weights.iter_mut().zip(input.iter()) {
            *w += step * (i - *w);
        }
    }
}
