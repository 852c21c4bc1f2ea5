use crate::error::{RegressionErr, Result};

/// The `(min, max)` pair of a reference list of samples.
///
/// Bounds are cheap to compute and are always derived from the list at hand, they are never
/// kept around between calls that could be made with different data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    what: &'static str,
    min: f64,
    max: f64,
}

impl Bounds {
    /// Computes the bounds of `values`.
    ///
    /// # Arguments
    /// * `what` - A name for the list, used in error messages.
    /// * `values` - The reference list.
    ///
    /// # Returns
    /// The bounds, `EmptyInput` if there are no values or `InvalidInput` if one of them is NaN
    /// or infinite.
    pub fn of(what: &'static str, values: &[f64]) -> Result<Self> {
        let (&first, rest) = values
            .split_first()
            .ok_or(RegressionErr::EmptyInput { what })?;

        if values.iter().any(|v| !v.is_finite()) {
            return Err(RegressionErr::InvalidInput("reference values must be finite"));
        }

        let (min, max) = rest
            .iter()
            .fold((first, first), |(min, max), &v| (min.min(v), max.max(v)));

        Ok(Self { what, min, max })
    }

    /// Returns `max - min`.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Maps `value` onto the `[0, 1]` scale of these bounds. Values outside the reference list
    /// land outside `[0, 1]`.
    ///
    /// # Returns
    /// The normalized value or `DegenerateRange` if `min == max`.
    pub fn normalize(&self, value: f64) -> Result<f64> {
        let span = self.span();

        if span == 0.0 {
            return Err(RegressionErr::DegenerateRange {
                what: self.what,
                value: self.min,
            });
        }

        Ok((value - self.min) / span)
    }

    /// Maps a normalized value back onto the original scale. Always defined, a degenerate
    /// range maps everything to `min`.
    pub fn denormalize(&self, value: f64) -> f64 {
        value * self.span() + self.min
    }
}

/// Rescales every element of `values` to `[0, 1]`, the minimum going to 0 and the maximum to 1.
///
/// # Errors
/// `EmptyInput` on an empty list, `InvalidInput` if it holds NaN or an infinity and
/// `DegenerateRange` if all values are identical.
pub fn normalize_list(values: &[f64]) -> Result<Vec<f64>> {
    let bounds = Bounds::of("values", values)?;
    values.iter().map(|&v| bounds.normalize(v)).collect()
}

/// Normalizes a single `value` using the bounds of `values`, which need not contain it.
pub fn normalize_value(values: &[f64], value: f64) -> Result<f64> {
    Bounds::of("values", values)?.normalize(value)
}

/// Inverse of [`normalize_value`], `value * (max - min) + min` with the bounds of `values`.
pub fn denormalize_value(values: &[f64], value: f64) -> Result<f64> {
    Ok(Bounds::of("values", values)?.denormalize(value))
}
