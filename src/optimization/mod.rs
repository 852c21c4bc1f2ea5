mod adaptive;
mod gradient;
mod optimizer;

pub use adaptive::{
    AdaptiveStepController, LossHistory, StepDecision, GROWTH_FACTOR, SHRINK_FACTOR,
};
pub use gradient::Gradient;
pub use optimizer::Optimizer;
