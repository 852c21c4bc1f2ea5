use super::{Gradient, StepDecision};
use crate::model::Thetas;

/// Defines the strategy for updating the coefficients based on the accumulated gradient.
pub trait Optimizer {
    /// Takes a step in the opposite direction of `grad`.
    ///
    /// # Arguments
    /// * `thetas` - The coefficients to update.
    /// * `grad` - The raw gradient sums of the current iteration.
    fn update_params(&mut self, thetas: &mut Thetas, grad: &Gradient);

    /// Reacts to the loss measured right after `update_params`.
    ///
    /// # Arguments
    /// * `loss` - The loss of the updated coefficients.
    /// * `thetas` - The coefficients that were just updated.
    /// * `grad` - The same gradient given to `update_params`.
    fn observe(&mut self, loss: f64, thetas: &mut Thetas, grad: &Gradient) -> StepDecision;
}
