use ndarray::ArrayView1;

pub trait LossFn {
    /// Measures how far `y_pred` is from `y`. Both views must have the same length.
    fn loss(&self, y_pred: ArrayView1<f64>, y: ArrayView1<f64>) -> f64;
}
