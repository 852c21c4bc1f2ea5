//! Single-variable linear regression trained by gradient descent with an adaptive learning rate.
//!
//! Prices are fitted against mileages on a normalized `[0, 1]` scale. The fitted coefficients
//! only make sense together with the bounds of the samples they were trained on, which is why
//! prediction and precision always take the raw training samples as reference.

pub mod config;
pub mod data;
pub mod error;
pub mod inference;
pub mod loss;
pub mod model;
pub mod normalization;
pub mod optimization;
pub mod training;

pub use config::TrainingConfig;
pub use error::{RegressionErr, Result};
pub use inference::{precision, predict, Estimate};
pub use loss::loss;
pub use model::{Coefficients, Thetas};
pub use normalization::{denormalize_value, normalize_list, normalize_value};
pub use training::{train, Fit, Trainer, TrainingHistory};
