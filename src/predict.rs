//! Cross-modal prediction through the association tensor.

use crate::error::{KinemapError, Result};
use crate::hebbian::AssociationTensor;
use crate::som::Som;

/// Predicts a configuration in one modality from an observation in the
/// other.
///
/// Borrows the association tensor and both trained maps; owns nothing.
/// Any number of predictors can share the same tensor concurrently.
pub struct CrossModalPredictor<'a> {
    tensor: &'a AssociationTensor,
    som_a: &'a Som,
    som_b: &'a Som,
}

impl<'a> CrossModalPredictor<'a> {
    /// Creates a predictor, rejecting a tensor whose shape disagrees with
    /// either map's grid.
    pub fn new(tensor: &'a AssociationTensor, som_a: &'a Som, som_b: &'a Som) -> Result<Self> {
        let (rows_a, cols_a, rows_b, cols_b) = tensor.shape();
        if (rows_a, cols_a) != som_a.shape() || (rows_b, cols_b) != som_b.shape() {
            return Err(KinemapError::Config(format!(
                "tensor shape {}x{}x{}x{} does not match map grids {}x{} and {}x{}",
                rows_a, cols_a, rows_b, cols_b,
                som_a.nr_rows, som_a.nr_cols, som_b.nr_rows, som_b.nr_cols
            )));
        }

        Ok(Self {
            tensor,
            som_a,
            som_b,
        })
    }

    /// Returns the B-side grid coordinate most strongly associated with
    /// the winner of `sample_a` in map A.
    ///
    /// Fails with [`NoAssociation`](KinemapError::NoAssociation) when the
    /// winner's plane holds no accumulated co-occurrence at all, so a
    /// missing signal is never mistaken for a prediction.
    pub fn predict_winner(&self, sample_a: &[f64]) -> Result<(usize, usize)> {
        let (row_a, col_a) = self.som_a.winner(sample_a)?;
        self.tensor
            .strongest(row_a, col_a)
            .ok_or(KinemapError::NoAssociation {
                row: row_a,
                col: col_a,
            })
    }

    /// Predicts the modality-B configuration for an observation in
    /// modality A: the weight vector of the most strongly associated
    /// B node.
    pub fn predict(&self, sample_a: &[f64]) -> Result<Vec<f64>> {
        let (row_b, col_b) = self.predict_winner(sample_a)?;
        let idx = self.som_b.coords_to_index(row_b, col_b);
        Ok(self.som_b.nodes[idx].weights.clone())
    }

    /// Mean squared error of predictions against true modality-B vectors
    /// over a paired evaluation set, averaged per component.
    pub fn mean_squared_error(
        &self,
        samples_a: &[Vec<f64>],
        samples_b: &[Vec<f64>],
    ) -> Result<f64> {
        if samples_a.len() != samples_b.len() {
            return Err(KinemapError::LengthMismatch {
                left: samples_a.len(),
                right: samples_b.len(),
            });
        }
        if samples_a.is_empty() {
            return Err(KinemapError::EmptyInput(
                "evaluation over an empty sample set".to_string(),
            ));
        }

        let mut total = 0.0;
        let mut components = 0usize;
        for (sample_a, sample_b) in samples_a.iter().zip(samples_b.iter()) {
            let predicted = self.predict(sample_a)?;
            if sample_b.len() != predicted.len() {
                return Err(KinemapError::DimensionMismatch {
                    expected: predicted.len(),
                    actual: sample_b.len(),
                });
            }

            total += predicted
                .iter()
                .zip(sample_b.iter())
                .map(|(p, t)| (p - t) * (p - t))
                .sum::<f64>();
            components += predicted.len();
        }

        Ok(total / components as f64)
    }
}
