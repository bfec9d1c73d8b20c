//! Target functions for regression experiments
//!
//! Each target is a one-dimensional signal with a declared input domain and
//! output range, used as ground truth when fitting a regressor. Synthetic
//! variants evaluate a closed-form formula; the series-backed variant
//! interpolates stored observations.

use ndarray::Array1;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::PI;

pub mod beer;

pub use beer::BEER_SALES;

/// Noise magnitude reported by `noise_level` and applied by the jittered
/// variant: uniform draws in `[0, EPSILON)`.
pub const EPSILON: f64 = 0.1;

const JITTER_X_MIN: f64 = -6.0;
const JITTER_X_MAX: f64 = 6.0;
const JITTER_BREAKS: [f64; 3] = [-3.0, 0.0, 3.0];
const JITTER_SCALES: [f64; 4] = [0.2, 0.8, 0.4, 0.7];

/// The closed set of target signals used by the workshop.
///
/// Every variant answers `domain`, `range`, `noise_level` and `name`, and
/// evaluates scalar or vectorized input through `evaluate` and
/// `evaluate_array`. Smooth variants apply their formula to any input, even
/// outside the declared domain; `Jittered` and `Series` return `0.0` for
/// out-of-domain input.
#[derive(Debug, Clone)]
pub enum Target {
    /// Linear ramp `x / 2π` on `[-2π, 2π]`.
    Ramp,
    /// `sin(x)/2 + 0.5` on `[-2π, 2π]`.
    Sine,
    /// `(sin(5x) + 0.5·sin(8x))/4 + 0.5` on `[-2π, 2π]`.
    TwoSines,
    /// Degree-5 polynomial `-(8x - 4x² + 0.2x³ - 0.1x⁵)/70 + 0.1` on `[-0.9π, 1.1π]`.
    Quintic,
    /// Degree-3 polynomial `0.3 - 0.5x - x² + 2x³` on `[-0.5, 1]`.
    Cubic,
    /// `intercept + slope·x` on a caller-chosen domain.
    Line {
        slope: f64,
        intercept: f64,
        x_min: f64,
        x_max: f64,
    },
    /// Trigonometric signal with a linear trend,
    /// `0.5 + 0.09x + 0.09·sin(3x) + 0.15·cos(6x)` on `[-4, 4]`.
    SineTrend,
    /// Piecewise-constant base levels with fresh uniform noise per evaluated
    /// point, on `[-6, 6]`.
    Jittered { rng: StdRng },
    /// Stored observations on `[0, L-1]`, linearly interpolated between
    /// integer indices.
    Series {
        data: Array1<f64>,
        y_min: f64,
        y_max: f64,
    },
}

impl Target {
    /// Creates a line target. The workshop's usual parameters are slope 0.1
    /// and intercept 0.5 on `[-2, 2]`.
    pub fn line(slope: f64, intercept: f64, x_min: f64, x_max: f64) -> Self {
        Target::Line {
            slope,
            intercept,
            x_min,
            x_max,
        }
    }

    /// Creates a jittered target with its own seeded generator, so equal
    /// seeds reproduce equal noise sequences.
    pub fn jittered(seed: u64) -> Self {
        Target::Jittered {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Creates a series-backed target from stored observations.
    ///
    /// The reported output range is the min/max of the data.
    pub fn series(data: Array1<f64>) -> Self {
        assert!(
            !data.is_empty(),
            "Series target requires at least one observation"
        );

        let y_min = data.fold(f64::INFINITY, |acc, &v| acc.min(v));
        let y_max = data.fold(f64::NEG_INFINITY, |acc, &v| acc.max(v));

        Target::Series { data, y_min, y_max }
    }

    /// Creates a series-backed target over the embedded beer sales data,
    /// restricted to the half-open observation range `[from..to)`.
    ///
    /// An omitted `from` defaults to the first observation; an omitted `to`
    /// defaults to `L - 1`, so the default window ends one observation before
    /// the end of the series. Panics when the bounds are out of order or fall
    /// outside the data.
    pub fn beer_sales(from: Option<usize>, to: Option<usize>) -> Self {
        let from = from.unwrap_or(0);
        let to = to.unwrap_or(BEER_SALES.len() - 1);
        assert!(
            from < to && to <= BEER_SALES.len(),
            "Beer sales bounds must be ordered and within the data"
        );

        Target::series(Array1::from_vec(BEER_SALES[from..to].to_vec()))
    }

    /// Short label for plot titles and reports.
    pub fn name(&self) -> &'static str {
        match self {
            Target::Ramp => "ramp",
            Target::Sine => "sine",
            Target::TwoSines => "two-sines",
            Target::Quintic => "quintic",
            Target::Cubic => "cubic",
            Target::Line { .. } => "line",
            Target::SineTrend => "sine-trend",
            Target::Jittered { .. } => "jittered",
            Target::Series { .. } => "series",
        }
    }

    /// The declared input domain `(x_min, x_max)`.
    pub fn domain(&self) -> (f64, f64) {
        match self {
            Target::Ramp | Target::Sine | Target::TwoSines => (-2.0 * PI, 2.0 * PI),
            Target::Quintic => (-0.9 * PI, 1.1 * PI),
            Target::Cubic => (-0.5, 1.0),
            Target::Line { x_min, x_max, .. } => (*x_min, *x_max),
            Target::SineTrend => (-4.0, 4.0),
            Target::Jittered { .. } => (JITTER_X_MIN, JITTER_X_MAX),
            Target::Series { data, .. } => (0.0, data.len().saturating_sub(1) as f64),
        }
    }

    /// The declared output range `(y_min, y_max)`.
    ///
    /// Informational: smooth variants may leave this range when evaluated
    /// outside their domain.
    pub fn range(&self) -> (f64, f64) {
        match self {
            Target::Series { y_min, y_max, .. } => (*y_min, *y_max),
            _ => (0.0, 1.0),
        }
    }

    /// The noise magnitude associated with this target.
    pub fn noise_level(&self) -> f64 {
        EPSILON
    }

    /// Evaluates the target at a single point.
    ///
    /// Takes `&mut self` because the jittered variant advances its generator;
    /// every other variant is a pure function of `x`.
    pub fn evaluate(&mut self, x: f64) -> f64 {
        match self {
            Target::Ramp => x / (2.0 * PI),
            Target::Sine => x.sin() / 2.0 + 0.5,
            Target::TwoSines => ((5.0 * x).sin() + 0.5 * (8.0 * x).sin()) / 4.0 + 0.5,
            Target::Quintic => {
                -(8.0 * x - 4.0 * x.powi(2) + 0.2 * x.powi(3) - 0.1 * x.powi(5)) / 70.0 + 0.1
            }
            Target::Cubic => 0.3 - 0.5 * x - x.powi(2) + 2.0 * x.powi(3),
            Target::Line {
                slope, intercept, ..
            } => *intercept + *slope * x,
            Target::SineTrend => 0.5 + 0.09 * x + 0.09 * (3.0 * x).sin() + 0.15 * (6.0 * x).cos(),
            Target::Jittered { rng } => jittered_point(x, rng),
            Target::Series { data, .. } => interpolate(data, x),
        }
    }

    /// Evaluates the target element-wise over an ordered sequence.
    ///
    /// Each element is evaluated independently; the jittered variant draws
    /// fresh noise for every element.
    pub fn evaluate_array(&mut self, inputs: &Array1<f64>) -> Array1<f64> {
        let outputs: Vec<f64> = inputs.iter().map(|&x| self.evaluate(x)).collect();
        Array1::from_vec(outputs)
    }

    /// Samples the target over its domain on the endpoint-exclusive grid
    /// `x_min + i·(x_max - x_min)/samples`, returning the grid and the
    /// evaluations.
    pub fn sample_uniform(&mut self, samples: usize) -> (Array1<f64>, Array1<f64>) {
        let (x_min, x_max) = self.domain();
        let step = (x_max - x_min) / samples as f64;

        let grid: Vec<f64> = (0..samples).map(|i| x_min + i as f64 * step).collect();
        let xs = Array1::from_vec(grid);
        let ys = self.evaluate_array(&xs);

        (xs, ys)
    }
}

/// Piecewise base level for `x`, plus a fresh uniform draw in `[0, EPSILON)`.
/// Input below the domain or at/above its upper bound maps to `0.0`.
fn jittered_point(x: f64, rng: &mut StdRng) -> f64 {
    let base = if x < JITTER_X_MIN {
        return 0.0;
    } else if x < JITTER_BREAKS[0] {
        JITTER_SCALES[0]
    } else if x < JITTER_BREAKS[1] {
        JITTER_SCALES[1]
    } else if x < JITTER_BREAKS[2] {
        JITTER_SCALES[2]
    } else if x < JITTER_X_MAX {
        JITTER_SCALES[3]
    } else {
        return 0.0;
    };

    base + EPSILON * rng.gen::<f64>()
}

/// Linear interpolation between the integer-indexed observations bracketing
/// `x`; `0.0` outside `[0, L-1]`, and the final observation at `x == L-1`.
fn interpolate(data: &Array1<f64>, x: f64) -> f64 {
    if data.is_empty() {
        return 0.0;
    }

    let last = (data.len() - 1) as f64;
    if x < 0.0 || x > last {
        return 0.0;
    }

    let lower = x.floor() as usize;
    if lower >= data.len() - 1 {
        return data[data.len() - 1];
    }

    let fraction = x - lower as f64;
    data[lower] + fraction * (data[lower + 1] - data[lower])
}
