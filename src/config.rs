use std::{fs, num::NonZeroUsize, path::Path};

use serde::{Deserialize, Serialize};

use crate::error::{RegressionErr, Result};

/// Iterations used when nothing else is configured.
pub const DEFAULT_ITERATIONS: NonZeroUsize = match NonZeroUsize::new(500) {
    Some(n) => n,
    None => unreachable!(),
};

/// Initial learning rate used when nothing else is configured.
pub const DEFAULT_LEARNING_RATE: f64 = 0.5;

/// Immutable bounds for a training run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrainingConfig {
    pub iterations: NonZeroUsize,
    pub learning_rate: f64,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            learning_rate: DEFAULT_LEARNING_RATE,
        }
    }
}

impl TrainingConfig {
    /// Creates a new training configuration.
    ///
    /// # Args
    /// * `iterations` - Amount of gradient descent iterations, there is no early exit.
    /// * `learning_rate` - The initial learning rate of every run.
    ///
    /// # Returns
    /// A `TrainingConfig` or `InvalidInput` if the learning rate isn't positive and finite.
    pub fn new(iterations: NonZeroUsize, learning_rate: f64) -> Result<Self> {
        let config = Self {
            iterations,
            learning_rate,
        };

        config.validate()?;
        Ok(config)
    }

    /// Reads a configuration from a JSON file. Missing fields take their default value.
    ///
    /// # Errors
    /// Returns a human-readable string if the file cannot be read, parsed or holds invalid values.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> std::result::Result<Self, String> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| format!("cannot read '{}': {e}", path.display()))?;

        Self::from_json_str(&content)
    }

    /// Parses a configuration from a JSON string. Missing fields take their default value.
    pub fn from_json_str(content: &str) -> std::result::Result<Self, String> {
        let config: Self =
            serde_json::from_str(content).map_err(|e| format!("invalid JSON: {e}"))?;

        config.validate().map_err(|e| e.to_string())?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.learning_rate.is_finite() && self.learning_rate > 0.0) {
            return Err(RegressionErr::InvalidInput(
                "the learning rate must be positive and finite",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = TrainingConfig::default();
        assert_eq!(config.iterations.get(), 500);
        assert_eq!(config.learning_rate, 0.5);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = TrainingConfig::from_json_str(r#"{ "iterations": 42 }"#).unwrap();
        assert_eq!(config.iterations.get(), 42);
        assert_eq!(config.learning_rate, DEFAULT_LEARNING_RATE);
    }

    #[test]
    fn zero_iterations_do_not_parse() {
        assert!(TrainingConfig::from_json_str(r#"{ "iterations": 0 }"#).is_err());
    }

    #[test]
    fn negative_learning_rate_is_invalid() {
        let err = TrainingConfig::from_json_str(r#"{ "learning_rate": -1.0 }"#).unwrap_err();
        assert!(err.contains("learning rate"), "{err}");
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(TrainingConfig::from_json_str(r#"{ "epochs": 3 }"#).is_err());
    }
}
