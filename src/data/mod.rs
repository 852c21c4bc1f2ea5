mod dataset;
mod error;
mod store;
mod table;

pub use dataset::{Dataset, DEFAULT_DATASET_PATH};
pub use error::{DataErr, Result};
pub use store::{ThetaStore, DEFAULT_THETAS_PATH};
