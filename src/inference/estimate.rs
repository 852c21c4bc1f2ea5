/// A number produced by the model, or the default used when there is no model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Estimate {
    /// Computed from trained coefficients.
    Fitted(f64),
    /// No coefficients were available, the value is 0.
    Default,
}

impl Estimate {
    pub fn value(&self) -> f64 {
        match *self {
            Estimate::Fitted(value) => value,
            Estimate::Default => 0.0,
        }
    }

    pub fn is_default(&self) -> bool {
        matches!(self, Estimate::Default)
    }
}
