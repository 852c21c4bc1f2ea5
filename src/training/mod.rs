mod history;
mod trainer;

pub use history::{IterationRecord, TrainingHistory};
pub use trainer::{train, Fit, Trainer};
