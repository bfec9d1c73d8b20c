// demos/regression_pipeline.rs
//! Example walking through the data-preparation pipeline
//!
//! This example samples a target signal over its domain, reshapes the series
//! into windowed (X, y) pairs with a temporal train/validation split, and
//! runs a naive last-value predictor through the loss and callback to show
//! how a training loop consumes the pieces.

use ndarray::Array1;
use qtsa::callback::RegressionCallback;
use qtsa::loss::square_loss;
use qtsa::target::Target;
use qtsa::windowing::split_train_val;

fn main() {
    println!("Time Series Regression Pipeline Example");
    println!("=======================================\n");

    // Sample a target signal over its domain
    let mut target = Target::SineTrend;
    let (xs, series) = target.sample_uniform(120);
    println!(
        "Sampled {} points of \"{}\" over [{:.1}, {:.1})",
        series.len(),
        target.name(),
        xs[0],
        target.domain().1
    );

    // Reshape the flat series into supervised pairs and split temporally
    let window_size = 8;
    let horizon = 1;
    let split = split_train_val(&series, window_size, 1, horizon, 0.7).unwrap();
    println!(
        "Windowed into {} training pairs and {} validation pairs\n",
        split.x_train.nrows(),
        split.x_val.nrows()
    );

    // Walk the training pairs with a last-value predictor, handing each
    // objective value to the callback as a fitting loop would
    let mut callback = RegressionCallback::new(20);
    for (window, actual) in split.x_train.rows().into_iter().zip(split.y_train.rows()) {
        let prediction = Array1::from_elem(actual.len(), window[window.len() - 1]);
        let objective = square_loss(&actual.to_owned(), &prediction);

        if let Some((start, end, batch_min)) = callback.record(objective) {
            println!("  steps [{}, {}): best objective {:.6}", start, end, batch_min);
        }
    }

    if let Some((position, value)) = callback.min_objective() {
        println!("\nBest training objective {:.6} at step {}", value, position);
    }

    // Score the held-out suffix with the same predictor
    let mut total = 0.0;
    for (window, actual) in split.x_val.rows().into_iter().zip(split.y_val.rows()) {
        let prediction = Array1::from_elem(actual.len(), window[window.len() - 1]);
        total += square_loss(&actual.to_owned(), &prediction);
    }
    println!(
        "Mean validation objective: {:.6}",
        total / split.x_val.nrows() as f64
    );
}
