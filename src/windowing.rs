//! Sliding-window reshaping of flat time series
//!
//! Converts an equidistant series into supervised-learning examples: sliding
//! windows, aligned (X, y) pairs with a prediction horizon, and a temporal
//! train/validation split. Everything here is deterministic; the resulting
//! arrays go straight to a regressor.

use ndarray::{s, Array1, Array2};
use thiserror::Error;

/// Errors for invalid windowing parameters.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WindowError {
    /// The requested window size was zero.
    #[error("window size must be positive")]
    EmptyWindow,
    /// The requested step between window starts was zero.
    #[error("step between windows must be positive")]
    ZeroStep,
}

/// Windowed (X, y) pairs partitioned into a training prefix and a validation
/// suffix, both in temporal order.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainValSplit {
    pub x_train: Array2<f64>,
    pub y_train: Array2<f64>,
    pub x_val: Array2<f64>,
    pub y_val: Array2<f64>,
}

/// Converts a flat series into sliding windows of `window_size` contiguous
/// elements, one window per row, starting at offsets `0, step, 2·step, …`.
///
/// X coordinates are ignored, so points are assumed equidistant. A series
/// shorter than the window yields a matrix with zero rows.
pub fn make_windows(
    series: &Array1<f64>,
    window_size: usize,
    step: usize,
) -> Result<Array2<f64>, WindowError> {
    if window_size == 0 {
        return Err(WindowError::EmptyWindow);
    }
    if step == 0 {
        return Err(WindowError::ZeroStep);
    }

    let len = series.len();
    if len < window_size {
        return Ok(Array2::zeros((0, window_size)));
    }

    let count = (len - window_size) / step + 1;
    let mut windows = Array2::zeros((count, window_size));

    for row in 0..count {
        let start = row * step;
        windows
            .row_mut(row)
            .assign(&series.slice(s![start..start + window_size]));
    }

    Ok(windows)
}

/// Converts a flat series into row-aligned X and y windows: each source
/// window of `window_size + horizon` elements contributes its leading
/// `window_size` elements to X and its trailing `horizon` elements to y.
///
/// A horizon of zero produces zero-width y rows.
pub fn make_xy(
    series: &Array1<f64>,
    window_size: usize,
    step: usize,
    horizon: usize,
) -> Result<(Array2<f64>, Array2<f64>), WindowError> {
    let full = make_windows(series, window_size + horizon, step)?;

    let x = full.slice(s![.., ..window_size]).to_owned();
    let y = full.slice(s![.., window_size..]).to_owned();

    Ok((x, y))
}

/// Splits windowed (X, y) pairs into a training prefix and a validation
/// suffix by temporal order.
///
/// The training share is `round(total · split_fraction)` pairs, rounded
/// half-to-even; `split_fraction` is expected in `[0, 1]`.
///
/// No gap is reserved between the partitions: validation windows that start
/// within `window_size + horizon - 1` positions of the boundary reuse source
/// elements already seen by training windows, so metrics on the leading
/// validation pairs leak training data.
pub fn split_train_val(
    series: &Array1<f64>,
    window_size: usize,
    step: usize,
    horizon: usize,
    split_fraction: f64,
) -> Result<TrainValSplit, WindowError> {
    let (x, y) = make_xy(series, window_size, step, horizon)?;

    let total = x.nrows();
    let train_count = ((total as f64 * split_fraction).round_ties_even() as usize).min(total);

    Ok(TrainValSplit {
        x_train: x.slice(s![..train_count, ..]).to_owned(),
        y_train: y.slice(s![..train_count, ..]).to_owned(),
        x_val: x.slice(s![train_count.., ..]).to_owned(),
        y_val: y.slice(s![train_count.., ..]).to_owned(),
    })
}
