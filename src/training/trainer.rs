use std::num::NonZeroUsize;

use log::{debug, info};

use super::{IterationRecord, TrainingHistory};
use crate::{
    config::TrainingConfig,
    error::{check_paired, RegressionErr, Result},
    loss,
    model::Thetas,
    optimization::{AdaptiveStepController, Gradient, Optimizer, StepDecision},
};

/// The outcome of a training run.
#[derive(Debug, Clone, PartialEq)]
pub struct Fit {
    /// The final coefficients, in normalized space.
    ///
    /// These are the coefficients left after the last controller decision. If the last step was
    /// rolled back they differ from the last history record, which holds the step as taken.
    pub thetas: Thetas,
    /// The per-iteration trace, only present if it was requested.
    pub history: Option<TrainingHistory>,
}

/// Fits a line to normalized samples by full-batch gradient descent.
///
/// Every call to `fit` starts from zeroed coefficients and from the configured learning rate, no
/// state is carried between runs.
#[derive(Debug, Clone)]
pub struct Trainer {
    config: TrainingConfig,
    record_history: bool,
}

impl Trainer {
    /// Returns a new `Trainer`.
    ///
    /// # Arguments
    /// * `config` - The iteration count and initial learning rate.
    pub fn new(config: TrainingConfig) -> Self {
        Self {
            config,
            record_history: false,
        }
    }

    /// Whether `fit` should also return the per-iteration history.
    pub fn record_history(mut self, record: bool) -> Self {
        self.record_history = record;
        self
    }

    /// Runs the configured amount of iterations over the paired samples.
    ///
    /// Each iteration accumulates the gradient with the current coefficients, takes a step,
    /// measures the loss and lets the step controller accept or undo the step.
    ///
    /// # Arguments
    /// * `x` - Normalized mileages.
    /// * `y` - Normalized prices, paired by index with `x`.
    ///
    /// # Returns
    /// The final coefficients, or an error if the samples are empty, unpaired or the learning
    /// rate is invalid. No iteration runs in that case.
    pub fn fit(&self, x: &[f64], y: &[f64]) -> Result<Fit> {
        let n = check_paired("km", "price", x, y)?;
        let samples = NonZeroUsize::new(n).ok_or(RegressionErr::EmptyInput { what: "km" })?;
        let iterations = self.config.iterations.get();

        let mut controller =
            AdaptiveStepController::with_capacity(self.config.learning_rate, samples, iterations)?;
        let mut history = self
            .record_history
            .then(|| TrainingHistory::with_capacity(iterations));
        let mut thetas = Thetas::default();
        let mut rollbacks = 0;

        info!(
            "training on {n} samples for {iterations} iterations, learning rate {}",
            self.config.learning_rate
        );

        for i in 0..iterations {
            let grad = Gradient::accumulate(thetas, x, y);
            controller.update_params(&mut thetas, &grad);

            let loss = loss::loss(thetas, x, y)?;
            if let Some(history) = history.as_mut() {
                history.push(IterationRecord {
                    theta0: thetas.theta0,
                    theta1: thetas.theta1,
                    loss,
                });
            }

            if controller.observe(loss, &mut thetas, &grad) == StepDecision::Rollback {
                rollbacks += 1;
                debug!("iteration {i}: step rolled back");
            }
        }

        info!(
            "training done, theta0 = {}, theta1 = {}, {rollbacks} rollback(s), final learning rate {}",
            thetas.theta0,
            thetas.theta1,
            controller.learning_rate()
        );

        Ok(Fit { thetas, history })
    }
}

/// Fits a line to normalized samples, see [`Trainer::fit`].
pub fn train(x: &[f64], y: &[f64], iterations: NonZeroUsize, learning_rate: f64) -> Result<Thetas> {
    let config = TrainingConfig::new(iterations, learning_rate)?;
    Trainer::new(config).fit(x, y).map(|fit| fit.thetas)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalization::normalize_list;

    fn iterations(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn fits_the_identity_line() {
        let x = normalize_list(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        let y = normalize_list(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();

        let thetas = train(&x, &y, iterations(500), 0.5).unwrap();

        assert!(thetas.theta0.abs() < 1e-3, "theta0 = {}", thetas.theta0);
        assert!((thetas.theta1 - 1.0).abs() < 1e-3, "theta1 = {}", thetas.theta1);
        assert!(loss::loss(thetas, &x, &y).unwrap() < 1e-6);
    }

    #[test]
    fn fits_a_decreasing_line() {
        let x = [0.0, 0.25, 0.5, 0.75, 1.0];
        let y = [1.0, 0.75, 0.5, 0.25, 0.0];

        let thetas = train(&x, &y, iterations(500), 0.5).unwrap();

        assert!((thetas.theta0 - 1.0).abs() < 1e-3, "theta0 = {}", thetas.theta0);
        assert!((thetas.theta1 + 1.0).abs() < 1e-3, "theta1 = {}", thetas.theta1);
    }

    #[test]
    fn history_has_one_record_per_iteration() {
        let x = [0.0, 0.5, 1.0];
        let y = [0.2, 0.4, 1.0];
        let config = TrainingConfig::new(iterations(37), 0.5).unwrap();

        let fit = Trainer::new(config).record_history(true).fit(&x, &y).unwrap();
        let history = fit.history.unwrap();

        assert_eq!(history.len(), 37);
        assert!(history.losses().all(|l| l >= 0.0));
    }

    #[test]
    fn history_is_absent_unless_requested() {
        let fit = Trainer::new(TrainingConfig::default())
            .fit(&[0.0, 1.0], &[0.0, 1.0])
            .unwrap();
        assert!(fit.history.is_none());
    }

    #[test]
    fn first_record_is_a_plain_gradient_step() {
        let x = [0.0, 1.0];
        let y = [1.0, 1.0];
        let config = TrainingConfig::new(iterations(1), 0.5).unwrap();

        let fit = Trainer::new(config).record_history(true).fit(&x, &y).unwrap();
        let record = fit.history.unwrap().records()[0];

        // from zero: g0 = -2, g1 = -1, so theta0 = 0.5 and theta1 = 0.25
        assert_eq!(record.theta0, 0.5);
        assert_eq!(record.theta1, 0.25);
        assert_eq!(fit.thetas, Thetas::new(0.5, 0.25));
    }

    #[test]
    fn a_final_rollback_is_not_part_of_the_history() {
        let x = [0.0, 1.0];
        let y = [1.0, 1.0];
        let config = TrainingConfig::new(iterations(2), 10.0).unwrap();

        let fit = Trainer::new(config).record_history(true).fit(&x, &y).unwrap();
        let history = fit.history.unwrap();
        let records = history.records();

        // the first step overshoots to (10, 5), the second one to (-105, -65) and is undone
        assert_eq!((records[0].theta0, records[0].theta1), (10.0, 5.0));
        assert_eq!((records[1].theta0, records[1].theta1), (-105.0, -65.0));
        assert!(records[1].loss > records[0].loss);
        assert_eq!(fit.thetas, Thetas::new(10.0, 5.0));
    }

    #[test]
    fn runs_are_independent() {
        let x = [0.0, 0.3, 0.6, 1.0];
        let y = [0.1, 0.5, 0.4, 1.0];
        let trainer = Trainer::new(TrainingConfig::new(iterations(50), 0.8).unwrap());

        let first = trainer.fit(&x, &y).unwrap();
        let second = trainer.fit(&x, &y).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn empty_samples_are_rejected() {
        assert_eq!(
            train(&[], &[], iterations(10), 0.5).unwrap_err(),
            RegressionErr::EmptyInput { what: "km" }
        );
    }

    #[test]
    fn unpaired_samples_are_rejected() {
        assert!(matches!(
            train(&[0.0, 1.0], &[0.0], iterations(10), 0.5),
            Err(RegressionErr::SizeMismatch { .. })
        ));
    }

    #[test]
    fn invalid_learning_rate_is_rejected() {
        assert!(matches!(
            train(&[0.0, 1.0], &[0.0, 1.0], iterations(10), 0.0),
            Err(RegressionErr::InvalidInput(_))
        ));
    }
}
