//! Loss functions for regression models

use ndarray::Array1;

/// Trait for loss functions
pub trait LossFunction {
    /// Type of input for loss calculation
    type Input;

    /// Calculate the loss between predictions and targets
    fn calculate_loss(&self, predictions: &Self::Input, targets: &Self::Input) -> f64;

    /// Calculate gradients of the loss with respect to predictions
    fn calculate_gradients(&self, predictions: &Self::Input, targets: &Self::Input) -> Self::Input;
}

/// Half mean squared error: `0.5 * mean((t - p)^2)`
#[derive(Debug, Clone, Copy)]
pub struct SquareLoss;

impl LossFunction for SquareLoss {
    type Input = Array1<f64>;

    fn calculate_loss(&self, predictions: &Self::Input, targets: &Self::Input) -> f64 {
        assert_eq!(
            predictions.len(),
            targets.len(),
            "Prediction and target dimensions must match"
        );
        assert!(
            !targets.is_empty(),
            "Loss requires at least one target value"
        );

        let diff = targets - predictions;
        let squared_diff = diff.mapv(|d| d * d);
        0.5 * squared_diff.sum() / targets.len() as f64
    }

    fn calculate_gradients(&self, predictions: &Self::Input, targets: &Self::Input) -> Self::Input {
        assert_eq!(
            predictions.len(),
            targets.len(),
            "Prediction and target dimensions must match"
        );

        let diff = predictions - targets;
        diff / predictions.len() as f64
    }
}

/// Helper with the argument order used in the workshop notebooks: targets
/// first, predictions second. Panics when the sequences are empty or differ
/// in length.
pub fn square_loss(targets: &Array1<f64>, predictions: &Array1<f64>) -> f64 {
    SquareLoss.calculate_loss(predictions, targets)
}
