//! Online competitive-learning loop with decaying schedules.

use crate::config::{SampleOrder, SomConfig};
use crate::error::{KinemapError, Result};
use crate::som::Som;
use log::info;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Runs the online training loop for one map.
///
/// The trainer owns the iteration schedules and the sample-draw RNG; the
/// map owns the grid and the neighborhood update. Training is sequential
/// and fully deterministic for a seeded configuration.
pub struct SomTrainer {
    config: SomConfig,
    rng: ChaCha8Rng,
}

impl SomTrainer {
    /// Creates a new trainer with the given configuration.
    pub fn new(config: SomConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };

        Self { config, rng }
    }

    /// Computes the learning rate at a given iteration of an `epochs`-long
    /// run.
    #[inline]
    pub fn learning_rate(&self, iteration: usize, epochs: usize) -> f64 {
        decay(
            self.config.initial_learning_rate,
            self.config.final_learning_rate,
            iteration,
            epochs,
        )
    }

    /// Computes the neighborhood spread at a given iteration of an
    /// `epochs`-long run.
    #[inline]
    pub fn sigma(&self, iteration: usize, epochs: usize) -> f64 {
        decay(
            self.config.initial_sigma,
            self.config.final_sigma,
            iteration,
            epochs,
        )
    }

    /// Runs `epochs` training iterations over the map's retained samples.
    ///
    /// Each iteration draws one sample (random or sequential per the
    /// configured order), finds the winner, and pulls every node toward
    /// the sample under the current Gaussian neighborhood. Learning rate
    /// and spread decay geometrically from their initial to their final
    /// configured values.
    pub fn train(&mut self, som: &mut Som, epochs: usize) -> Result<()> {
        if som.shape() != (self.config.nr_rows, self.config.nr_cols) {
            return Err(KinemapError::Config(format!(
                "trainer configured for a {}x{} grid, map is {}x{}",
                self.config.nr_rows, self.config.nr_cols, som.nr_rows, som.nr_cols
            )));
        }
        if som.input_dim != self.config.input_dim {
            return Err(KinemapError::Config(format!(
                "trainer configured for input dimension {}, map has {}",
                self.config.input_dim, som.input_dim
            )));
        }

        let nr_samples = som.samples().len();
        info!(
            "Training SOM: {} iterations over {} samples on a {}x{} grid",
            epochs, nr_samples, som.nr_rows, som.nr_cols
        );

        for iteration in 0..epochs {
            let idx = match self.config.order {
                SampleOrder::Random => self.rng.gen_range(0..nr_samples),
                SampleOrder::Sequential => iteration % nr_samples,
            };
            let sample = som.samples()[idx].clone();

            let winner = som.winner(&sample)?;
            let lr = self.learning_rate(iteration, epochs);
            let sigma = self.sigma(iteration, epochs);
            som.update(&sample, winner, lr, sigma);

            if iteration % 1000 == 0 || iteration + 1 == epochs {
                info!(
                    "Iteration {}/{}: lr={:.4}, sigma={:.3}",
                    iteration, epochs, lr, sigma
                );
            }
        }

        Ok(())
    }
}

/// Geometric interpolation from `initial` at iteration 0 toward `final_value`
/// at the last iteration.
///
/// Monotonic non-increasing, and strictly positive at every iteration for a
/// positive `initial`: the endpoint is clamped into `(0, initial]` so a
/// misconfigured schedule cannot freeze the map mid-run or grow over time.
fn decay(initial: f64, final_value: f64, iteration: usize, total: usize) -> f64 {
    if initial <= 0.0 {
        return 0.0;
    }
    if total == 0 {
        return initial;
    }

    let floor = final_value.clamp(f64::MIN_POSITIVE, initial);
    let t = iteration as f64 / total as f64;
    initial * (floor / initial).powf(t)
}
