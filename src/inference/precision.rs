use ndarray::{Array1, ArrayView1};

use crate::{
    error::{check_paired, Result},
    loss::{LossFn, Mae},
    model::Coefficients,
};

use super::{Estimate, Predictor};

/// Mean absolute error of the model over its own training samples.
///
/// Every sample is predicted with the samples themselves as normalization reference, with the
/// same clamping as [`super::predict`].
///
/// # Returns
/// `Estimate::Default` when there are no coefficients, otherwise the mean absolute error in
/// price units.
pub fn precision(coefficients: &Coefficients, km: &[f64], price: &[f64]) -> Result<Estimate> {
    let Coefficients::Available(thetas) = *coefficients else {
        return Ok(Estimate::Default);
    };

    check_paired("km", "price", km, price)?;
    let predictor = Predictor::new(thetas, km, price)?;

    let predicted = km
        .iter()
        .map(|&km| predictor.predict(km))
        .collect::<Result<Array1<f64>>>()?;

    let mae = Mae::new().loss(predicted.view(), ArrayView1::from(price));
    Ok(Estimate::Fitted(mae))
}
