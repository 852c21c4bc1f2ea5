use ndarray::ArrayView1;

use super::LossFn;

/// Mean absolute error, the average distance between predictions and targets.
#[derive(Default, Clone, Copy)]
pub struct Mae;

impl Mae {
    /// Returns a new `Mae`.
    pub fn new() -> Self {
        Self
    }
}

impl LossFn for Mae {
    fn loss(&self, y_pred: ArrayView1<f64>, y: ArrayView1<f64>) -> f64 {
        (&y - &y_pred).mapv(f64::abs).mean().unwrap_or_default()
    }
}
