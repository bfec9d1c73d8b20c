// tests/loss_tests.rs
//! Tests for the loss module

use ndarray::Array1;
use qtsa::loss::{square_loss, LossFunction, SquareLoss};

#[test]
fn test_square_loss_zero_for_exact_predictions() {
    let targets = Array1::from_vec(vec![1.0, 2.0, 3.0]);
    let predictions = Array1::from_vec(vec![1.0, 2.0, 3.0]);

    assert_eq!(square_loss(&targets, &predictions), 0.0);
}

#[test]
fn test_square_loss_is_half_mean_squared_error() {
    let targets = Array1::from_vec(vec![0.0, 0.0]);
    let predictions = Array1::from_vec(vec![1.0, 1.0]);

    // 0.5 * mean([1, 1]) = 0.5
    assert!((square_loss(&targets, &predictions) - 0.5).abs() < 1e-12);
}

#[test]
fn test_square_loss_mixed_residuals() {
    let targets = Array1::from_vec(vec![1.0, 0.0, 2.0, 0.5]);
    let predictions = Array1::from_vec(vec![0.5, 0.5, 2.0, 0.0]);

    // squared residuals: 0.25, 0.25, 0, 0.25
    let expected = 0.5 * (0.25 + 0.25 + 0.0 + 0.25) / 4.0;
    assert!((square_loss(&targets, &predictions) - expected).abs() < 1e-12);
}

#[test]
fn test_gradients_zero_for_exact_predictions() {
    let targets = Array1::from_vec(vec![0.2, 0.4, 0.6]);
    let gradients = SquareLoss.calculate_gradients(&targets.clone(), &targets);

    for &g in gradients.iter() {
        assert_eq!(g, 0.0);
    }
}

#[test]
fn test_gradients_scale_with_residual() {
    // d/dp [0.5 * mean((t - p)^2)] = (p - t) / n
    let targets = Array1::from_vec(vec![1.0, 3.0]);
    let predictions = Array1::from_vec(vec![2.0, 1.0]);

    let gradients = SquareLoss.calculate_gradients(&predictions, &targets);

    assert!((gradients[0] - 0.5).abs() < 1e-12);
    assert!((gradients[1] + 1.0).abs() < 1e-12);
}

#[test]
#[should_panic(expected = "dimensions must match")]
fn test_square_loss_rejects_mismatched_lengths() {
    let targets = Array1::from_vec(vec![1.0, 2.0]);
    let predictions = Array1::from_vec(vec![1.0]);

    square_loss(&targets, &predictions);
}

#[test]
#[should_panic(expected = "at least one target")]
fn test_square_loss_rejects_empty_sequences() {
    let empty = Array1::<f64>::from_vec(vec![]);

    square_loss(&empty, &empty);
}
