mod loss_fn;
mod mae;
mod mse;

pub use loss_fn::LossFn;
pub use mae::Mae;
pub use mse::Mse;

use ndarray::{Array1, ArrayView1};

use crate::{
    error::{check_paired, Result},
    model::Thetas,
};

/// Mean squared error of the line `thetas` over the paired samples `(x, y)`.
///
/// # Errors
/// `SizeMismatch` if `x` and `y` differ in length and `EmptyInput` if they are empty.
pub fn loss(thetas: Thetas, x: &[f64], y: &[f64]) -> Result<f64> {
    check_paired("x", "y", x, y)?;

    let y_pred: Array1<f64> = x.iter().map(|&x| thetas.evaluate(x)).collect();
    Ok(Mse::new().loss(y_pred.view(), ArrayView1::from(y)))
}
