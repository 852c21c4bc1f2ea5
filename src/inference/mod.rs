mod estimate;
mod precision;
mod predictor;

pub use estimate::Estimate;
pub use precision::precision;
pub use predictor::{predict, Predictor};
