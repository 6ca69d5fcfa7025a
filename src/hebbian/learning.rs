//! Hebbian correlation of co-occurring winners across two trained maps.

use crate::config::HebbianConfig;
use crate::error::{KinemapError, Result};
use crate::hebbian::AssociationTensor;
use crate::som::Som;
use log::info;

/// Builds the association tensor from a single pass over the paired
/// training sets of two fully trained maps.
///
/// The two retained sequences must represent the same events in the same
/// order; unequal lengths fail with
/// [`LengthMismatch`](KinemapError::LengthMismatch) before anything is
/// accumulated. For each pair, the winners' own activation distances are
/// squashed and their product, scaled by `config.eta`, reinforces the
/// tensor cell linking the two winners.
pub fn hebbian_learning(
    som_a: &Som,
    som_b: &Som,
    config: &HebbianConfig,
) -> Result<AssociationTensor> {
    let len_a = som_a.samples().len();
    let len_b = som_b.samples().len();
    if len_a != len_b {
        return Err(KinemapError::LengthMismatch {
            left: len_a,
            right: len_b,
        });
    }

    let (rows_a, cols_a) = som_a.shape();
    let (rows_b, cols_b) = som_b.shape();
    let mut tensor = AssociationTensor::zeros(rows_a, cols_a, rows_b, cols_b);

    info!(
        "Correlating {} sample pairs across {}x{} and {}x{} maps",
        len_a, rows_a, cols_a, rows_b, cols_b
    );

    for (sample_a, sample_b) in som_a.samples().iter().zip(som_b.samples().iter()) {
        let act_a = som_a.activate(sample_a)?;
        let act_b = som_b.activate(sample_b)?;
        let (row_a, col_a) = som_a.winner(sample_a)?;
        let (row_b, col_b) = som_b.winner(sample_b)?;

        let fire_a = squash(act_a[som_a.coords_to_index(row_a, col_a)]);
        let fire_b = squash(act_b[som_b.coords_to_index(row_b, col_b)]);

        tensor.accumulate(row_a, col_a, row_b, col_b, config.eta * fire_a * fire_b);
    }

    Ok(tensor)
}

/// Squashes an activation distance into `(0.5, 1.0]`.
///
/// A winner sitting exactly on its sample fires at 1.0; the value falls
/// toward 0.5 as the match degrades, so a pair of tight matches reinforces
/// its tensor cell harder than a pair of loose ones.
fn squash(activation: f64) -> f64 {
    1.0 / (1.0 + activation.tanh())
}
