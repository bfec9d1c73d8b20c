//! Callback support for regressor training loops

/// Records objective-function values observed while a regressor is fitted.
///
/// The training loop hands one objective value to `record` after each
/// optimization step. The accumulated history backs the progress queries and
/// is handed to an external plotting layer through `values`; nothing is drawn
/// or printed from inside this type.
#[derive(Debug, Clone)]
pub struct RegressionCallback {
    objective_values: Vec<f64>,
    log_interval: usize,
}

impl RegressionCallback {
    /// Creates a callback with an empty history.
    ///
    /// `log_interval` controls how often `record` emits a batch summary; an
    /// interval of zero disables summaries.
    pub fn new(log_interval: usize) -> Self {
        RegressionCallback {
            objective_values: Vec::new(),
            log_interval,
        }
    }

    /// Appends one observed objective value.
    ///
    /// Whenever the history length reaches a multiple of `log_interval`, the
    /// half-open index range of the just-completed batch and the minimum
    /// value inside it are returned so the caller can report progress.
    pub fn record(&mut self, objective: f64) -> Option<(usize, usize, f64)> {
        self.objective_values.push(objective);

        let recorded = self.objective_values.len();
        if self.log_interval == 0 || recorded % self.log_interval != 0 {
            return None;
        }

        let start = recorded - self.log_interval;
        let batch_min = self.objective_values[start..]
            .iter()
            .fold(f64::INFINITY, |acc, &v| acc.min(v));

        Some((start, recorded, batch_min))
    }

    /// Returns the position and value of the first occurrence of the minimum
    /// objective, or `None` when nothing has been recorded yet.
    pub fn min_objective(&self) -> Option<(usize, f64)> {
        let min = self
            .objective_values
            .iter()
            .fold(f64::INFINITY, |acc, &v| acc.min(v));

        self.objective_values
            .iter()
            .position(|&v| v == min)
            .map(|index| (index, min))
    }

    /// Clears the recorded history.
    pub fn reset(&mut self) {
        self.objective_values = Vec::new();
    }

    /// The recorded objective values in arrival order.
    pub fn values(&self) -> &[f64] {
        &self.objective_values
    }

    /// Number of recorded values.
    pub fn len(&self) -> usize {
        self.objective_values.len()
    }

    /// Whether the history is empty.
    pub fn is_empty(&self) -> bool {
        self.objective_values.is_empty()
    }

    /// The configured summary interval.
    pub fn log_interval(&self) -> usize {
        self.log_interval
    }
}

impl Default for RegressionCallback {
    fn default() -> Self {
        RegressionCallback::new(50)
    }
}
