use std::num::NonZeroUsize;

use log::debug;

use super::{Gradient, Optimizer};
use crate::{
    error::{RegressionErr, Result},
    model::Thetas,
};

/// Factor applied to the learning rate after the loss went down.
pub const GROWTH_FACTOR: f64 = 1.05;
/// Factor applied to the learning rate after the loss stalled or went up.
pub const SHRINK_FACTOR: f64 = 0.5;

/// The losses of a training run, one per iteration, oldest first.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct LossHistory {
    losses: Vec<f64>,
}

impl LossHistory {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            losses: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, loss: f64) {
        self.losses.push(loss);
    }

    /// Returns `(previous, newest)` once there are at least two losses.
    pub fn last_two(&self) -> Option<(f64, f64)> {
        match self.losses.as_slice() {
            [.., previous, newest] => Some((*previous, *newest)),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.losses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.losses.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.losses
    }
}

/// What the controller did with the last update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDecision {
    /// Not enough history to compare against, nothing changed.
    Warmup,
    /// The loss improved, the update is kept and the learning rate grows.
    Accept,
    /// The loss did not improve, the update is undone and the learning rate is halved.
    Rollback,
}

/// Gradient descent with a crude line search on the learning rate.
///
/// After every update the newest loss is compared with the previous one. On improvement the
/// learning rate is multiplied by [`GROWTH_FACTOR`]. Otherwise the update is undone by adding
/// back the same gradient it was taken with, scaled by the learning rate *before* shrinking,
/// and the learning rate is multiplied by [`SHRINK_FACTOR`].
///
/// One controller lives for exactly one training run.
#[derive(Debug, Clone)]
pub struct AdaptiveStepController {
    learning_rate: f64,
    samples: NonZeroUsize,
    history: LossHistory,
}

impl AdaptiveStepController {
    /// Creates a new `AdaptiveStepController`.
    ///
    /// # Arguments
    /// * `learning_rate` - The initial step length, must be positive and finite.
    /// * `samples` - The amount of samples the gradients are summed over.
    ///
    /// # Returns
    /// The controller or `InvalidInput` on a bad learning rate.
    pub fn new(learning_rate: f64, samples: NonZeroUsize) -> Result<Self> {
        if !(learning_rate.is_finite() && learning_rate > 0.0) {
            return Err(RegressionErr::InvalidInput(
                "the learning rate must be positive and finite",
            ));
        }

        Ok(Self {
            learning_rate,
            samples,
            history: LossHistory::default(),
        })
    }

    /// Same as `new`, reserving room for `iterations` losses.
    pub fn with_capacity(
        learning_rate: f64,
        samples: NonZeroUsize,
        iterations: usize,
    ) -> Result<Self> {
        let mut controller = Self::new(learning_rate, samples)?;
        controller.history = LossHistory::with_capacity(iterations);
        Ok(controller)
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    pub fn history(&self) -> &LossHistory {
        &self.history
    }

    /// Moves `thetas` by `sign * (g / n) * learning_rate` on both coefficients.
    fn shift(&self, thetas: &mut Thetas, grad: &Gradient, sign: f64) {
        let n = self.samples.get() as f64;
        let lr = self.learning_rate;

        thetas.theta0 += sign * (grad.bias / n * lr);
        thetas.theta1 += sign * (grad.slope / n * lr);
    }
}

impl Optimizer for AdaptiveStepController {
    fn update_params(&mut self, thetas: &mut Thetas, grad: &Gradient) {
        self.shift(thetas, grad, -1.0);
    }

    fn observe(&mut self, loss: f64, thetas: &mut Thetas, grad: &Gradient) -> StepDecision {
        self.history.push(loss);

        let Some((previous, newest)) = self.history.last_two() else {
            return StepDecision::Warmup;
        };

        if newest >= previous {
            self.shift(thetas, grad, 1.0);
            self.learning_rate *= SHRINK_FACTOR;
            debug!(
                "loss went from {previous} to {newest}, rolled back and shrunk learning rate to {}",
                self.learning_rate
            );
            StepDecision::Rollback
        } else {
            self.learning_rate *= GROWTH_FACTOR;
            StepDecision::Accept
        }
    }
}
