//! Integration tests for the kinemap cross-modal mapping pipeline.

use kinemap::{
    hebbian_learning, CrossModalPredictor, HebbianConfig, KinemapError, Som, SomConfig,
    SomTrainer,
};

/// Evenly spaced scalar samples covering `[0, scale]`.
fn scalar_stream(n: usize, scale: f64) -> Vec<Vec<f64>> {
    (0..n)
        .map(|i| vec![scale * i as f64 / (n - 1) as f64])
        .collect()
}

fn small_config(input_dim: usize, seed: u64) -> SomConfig {
    SomConfig {
        nr_rows: 3,
        nr_cols: 3,
        input_dim,
        initial_sigma: 1.0,
        final_sigma: 0.2,
        initial_learning_rate: 0.5,
        final_learning_rate: 0.01,
        seed: Some(seed),
        ..Default::default()
    }
}

fn trained_som(config: &SomConfig, samples: Vec<Vec<f64>>, epochs: usize) -> Som {
    let mut som = Som::new(config, samples).unwrap();
    let mut trainer = SomTrainer::new(config.clone());
    trainer.train(&mut som, epochs).unwrap();
    som
}

#[test]
fn test_round_trip_prediction_on_correlated_streams() {
    // Two synthetically correlated scalar streams: B = 2 * A.
    let samples_a = scalar_stream(61, 1.0);
    let samples_b = scalar_stream(61, 2.0);

    let config_a = small_config(1, 42);
    let config_b = small_config(1, 7);
    let som_a = trained_som(&config_a, samples_a, 1000);
    let som_b = trained_som(&config_b, samples_b, 1000);

    let tensor = hebbian_learning(&som_a, &som_b, &HebbianConfig::default()).unwrap();
    let predictor = CrossModalPredictor::new(&tensor, &som_a, &som_b).unwrap();

    // Held-out observation in modality A; expect roughly the doubled value.
    let held_out = 0.5;
    let predicted = predictor.predict(&[held_out]).unwrap();
    let expected = 2.0 * held_out;

    assert_eq!(predicted.len(), 1);
    let relative_error = (predicted[0] - expected).abs() / expected;
    assert!(
        relative_error < 0.2,
        "predicted {:.3}, expected {:.3} (relative error {:.3})",
        predicted[0],
        expected,
        relative_error
    );
}

#[test]
fn test_aggregate_mse_on_training_pairs() {
    let samples_a = scalar_stream(61, 1.0);
    let samples_b = scalar_stream(61, 2.0);

    let som_a = trained_som(&small_config(1, 42), samples_a.clone(), 1000);
    let som_b = trained_som(&small_config(1, 7), samples_b.clone(), 1000);

    let tensor = hebbian_learning(&som_a, &som_b, &HebbianConfig::default()).unwrap();
    let predictor = CrossModalPredictor::new(&tensor, &som_a, &som_b).unwrap();

    let mse = predictor
        .mean_squared_error(&samples_a, &samples_b)
        .unwrap();

    // Nine nodes quantize B values spread over [0, 2]; predictions land on
    // node weights, so per-sample error stays well under one inter-node gap.
    assert!(mse < 0.25, "aggregate MSE too large: {mse}");
}

#[test]
fn test_tensor_nonnegative_and_aligned_with_winners() {
    let som_a = trained_som(&small_config(1, 3), scalar_stream(40, 1.0), 600);
    let som_b = trained_som(&small_config(1, 4), scalar_stream(40, 2.0), 600);

    let tensor = hebbian_learning(&som_a, &som_b, &HebbianConfig::default()).unwrap();
    let wins_a = som_a.activation_response(som_a.samples()).unwrap();

    assert_eq!(wins_a.iter().sum::<usize>(), som_a.samples().len());

    let (rows_a, cols_a, _, _) = tensor.shape();
    for row_a in 0..rows_a {
        for col_a in 0..cols_a {
            let plane = tensor.plane(row_a, col_a);
            assert!(plane.iter().all(|&v| v >= 0.0));

            // A plane carries association exactly when its A node ever won.
            let won = wins_a[som_a.coords_to_index(row_a, col_a)] > 0;
            assert_eq!(plane.iter().sum::<f64>() > 0.0, won);
        }
    }
}

#[test]
fn test_length_mismatch_is_surfaced() {
    let som_a = trained_som(&small_config(1, 1), scalar_stream(10, 1.0), 100);
    let som_b = trained_som(&small_config(1, 2), scalar_stream(11, 2.0), 100);

    let result = hebbian_learning(&som_a, &som_b, &HebbianConfig::default());
    assert!(matches!(
        result,
        Err(KinemapError::LengthMismatch {
            left: 10,
            right: 11
        })
    ));
}

#[test]
fn test_dimension_mismatch_on_prediction() {
    let samples_3d: Vec<Vec<f64>> = (0..20)
        .map(|i| vec![i as f64 * 0.05, i as f64 * 0.1, i as f64 * 0.15])
        .collect();

    let som_a = trained_som(&small_config(3, 5), samples_3d.clone(), 200);
    let som_b = trained_som(&small_config(3, 6), samples_3d, 200);

    let tensor = hebbian_learning(&som_a, &som_b, &HebbianConfig::default()).unwrap();
    let predictor = CrossModalPredictor::new(&tensor, &som_a, &som_b).unwrap();

    let result = predictor.predict(&[0.1, 0.2]);
    assert!(matches!(
        result,
        Err(KinemapError::DimensionMismatch {
            expected: 3,
            actual: 2
        })
    ));
}

#[test]
fn test_initial_and_final_weights_are_reportable() {
    let config = small_config(1, 9);
    let som = trained_som(&config, scalar_stream(30, 1.0), 500);

    let initial = som.initial_weights();
    let final_weights = som.weights();

    assert_eq!(initial.len(), config.total_nodes());
    assert_eq!(final_weights.len(), config.total_nodes());
    assert_ne!(initial, &final_weights[..]);
}

#[test]
fn test_training_reduces_quantization_error() {
    // Two well-separated clusters in 2D.
    let mut samples = Vec::new();
    for i in 0..20 {
        let jitter = i as f64 * 0.002;
        samples.push(vec![0.1 + jitter, 0.1 - jitter]);
        samples.push(vec![0.9 - jitter, 0.9 + jitter]);
    }

    let config = small_config(2, 11);
    let untrained = Som::new(&config, samples.clone()).unwrap();
    let trained = trained_som(&config, samples, 800);

    let before = untrained.quantization_error(untrained.samples()).unwrap();
    let after = trained.quantization_error(trained.samples()).unwrap();

    assert!(after < before, "expected {after} < {before}");
}

#[test]
fn test_whole_pipeline_is_deterministic() {
    let run = || {
        let som_a = trained_som(&small_config(1, 42), scalar_stream(40, 1.0), 400);
        let som_b = trained_som(&small_config(1, 7), scalar_stream(40, 2.0), 400);
        let tensor = hebbian_learning(&som_a, &som_b, &HebbianConfig::default()).unwrap();
        let predictor = CrossModalPredictor::new(&tensor, &som_a, &som_b).unwrap();
        predictor.predict(&[0.25]).unwrap()
    };

    assert_eq!(run(), run());
}
