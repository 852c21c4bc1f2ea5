use serde::{Deserialize, Serialize};

/// The coefficients of the line `price = theta1 * km + theta0`, both expressed in the
/// normalized coordinate space the model was trained in.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thetas {
    /// Intercept.
    pub theta0: f64,
    /// Slope.
    pub theta1: f64,
}

impl Thetas {
    pub fn new(theta0: f64, theta1: f64) -> Self {
        Self { theta0, theta1 }
    }

    /// Evaluates the line at a normalized mileage.
    #[inline]
    pub fn evaluate(&self, x: f64) -> f64 {
        self.theta1 * x + self.theta0
    }
}

/// The coefficients as handed over by a store, which may not have any yet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Coefficients {
    /// No model has been trained, predictions fall back to defaults.
    Unavailable,
    Available(Thetas),
}

impl Coefficients {
    pub fn thetas(&self) -> Option<Thetas> {
        match *self {
            Coefficients::Unavailable => None,
            Coefficients::Available(thetas) => Some(thetas),
        }
    }
}

impl From<Thetas> for Coefficients {
    fn from(thetas: Thetas) -> Self {
        Self::Available(thetas)
    }
}

impl From<Option<Thetas>> for Coefficients {
    fn from(thetas: Option<Thetas>) -> Self {
        thetas.map_or(Self::Unavailable, Self::Available)
    }
}
