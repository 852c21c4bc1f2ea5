use crate::{
    error::Result,
    model::{Coefficients, Thetas},
    normalization::Bounds,
};

use super::Estimate;

/// Maps raw mileages to raw prices with trained coefficients and the bounds of the samples the
/// coefficients were trained on.
#[derive(Debug, Clone, Copy)]
pub struct Predictor {
    thetas: Thetas,
    km: Bounds,
    price: Bounds,
}

impl Predictor {
    /// Returns a new `Predictor`.
    ///
    /// # Arguments
    /// * `thetas` - Coefficients in normalized space.
    /// * `reference_km` - The un-normalized mileages the model was trained on.
    /// * `reference_price` - The un-normalized prices the model was trained on.
    pub fn new(thetas: Thetas, reference_km: &[f64], reference_price: &[f64]) -> Result<Self> {
        Ok(Self {
            thetas,
            km: Bounds::of("km", reference_km)?,
            price: Bounds::of("price", reference_price)?,
        })
    }

    /// Predicts the price of a car, never below 0.
    pub fn predict(&self, km: f64) -> Result<f64> {
        let x = self.km.normalize(km)?;
        let price = self.price.denormalize(self.thetas.evaluate(x));
        Ok(price.max(0.0))
    }
}

/// Predicts the price for `km`.
///
/// # Arguments
/// * `coefficients` - The trained coefficients, if any.
/// * `reference_km`, `reference_price` - The un-normalized training samples, their bounds are
///   used to normalize `km` and to denormalize the result.
/// * `km` - The mileage to predict a price for.
///
/// # Returns
/// `Estimate::Default` without looking at the samples when there are no coefficients, otherwise
/// the clamped prediction. Fails if a reference list is empty or `reference_km` is constant.
pub fn predict(
    coefficients: &Coefficients,
    reference_km: &[f64],
    reference_price: &[f64],
    km: f64,
) -> Result<Estimate> {
    let Coefficients::Available(thetas) = *coefficients else {
        return Ok(Estimate::Default);
    };

    let predictor = Predictor::new(thetas, reference_km, reference_price)?;
    predictor.predict(km).map(Estimate::Fitted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RegressionErr;

    const KM: [f64; 3] = [0.0, 50_000.0, 100_000.0];
    const PRICE: [f64; 3] = [8_000.0, 6_000.0, 4_000.0];

    #[test]
    fn unavailable_coefficients_predict_zero() {
        let estimate = predict(&Coefficients::Unavailable, &KM, &PRICE, 50_000.0).unwrap();
        assert_eq!(estimate, Estimate::Default);
        assert_eq!(estimate.value(), 0.0);
    }

    #[test]
    fn unavailable_coefficients_ignore_the_samples() {
        let estimate = predict(&Coefficients::Unavailable, &[], &[], 1.0).unwrap();
        assert!(estimate.is_default());
    }

    #[test]
    fn prediction_goes_through_both_scales() {
        // price falls linearly from 1 (8000) to 0 (4000) on the normalized scale
        let coefficients: Coefficients = Thetas::new(1.0, -1.0).into();

        let estimate = predict(&coefficients, &KM, &PRICE, 25_000.0).unwrap();

        assert_eq!(estimate, Estimate::Fitted(7_000.0));
    }

    #[test]
    fn negative_prices_are_clamped() {
        let coefficients: Coefficients = Thetas::new(1.0, -1.0).into();

        // normalized: 1 - 4 = -3, raw: -3 * 4000 + 4000 = -8000
        let estimate = predict(&coefficients, &KM, &PRICE, 400_000.0).unwrap();

        assert_eq!(estimate, Estimate::Fitted(0.0));
    }

    #[test]
    fn constant_reference_mileage_is_an_error() {
        let coefficients: Coefficients = Thetas::new(1.0, -1.0).into();
        let err = predict(&coefficients, &[10.0, 10.0], &PRICE[..2], 10.0).unwrap_err();

        assert_eq!(
            err,
            RegressionErr::DegenerateRange {
                what: "km",
                value: 10.0
            }
        );
    }
}
