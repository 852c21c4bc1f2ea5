use crate::model::Thetas;

/// Raw gradient accumulators of one iteration, summed over every sample and *not* divided by
/// the amount of samples.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Gradient {
    /// `Σ (pred_i - y_i)`
    pub bias: f64,
    /// `Σ (pred_i - y_i) * x_i`
    pub slope: f64,
}

impl Gradient {
    pub fn new(bias: f64, slope: f64) -> Self {
        Self { bias, slope }
    }

    /// Accumulates the gradient of `thetas` over the paired samples, in sample order.
    ///
    /// `x` and `y` are expected to have the same length, extra elements of the longer one are
    /// ignored.
    pub fn accumulate(thetas: Thetas, x: &[f64], y: &[f64]) -> Self {
        x.iter().zip(y).fold(Self::default(), |acc, (&x, &y)| {
            let residual = thetas.evaluate(x) - y;
            Self {
                bias: acc.bias + residual,
                slope: acc.slope + residual * x,
            }
        })
    }
}
