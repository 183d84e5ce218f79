//! Validator configuration.
//!
//! Sample count, seed and tolerance are explicit values rather than
//! module-level constants, so each run states what it was asked to do.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ValidationError};

/// Default number of draws per validation run.
pub const DEFAULT_SAMPLE_COUNT: usize = 100_000;

/// Default relative tolerance on the sample mean.
pub const DEFAULT_TOLERANCE: f64 = 0.05;

/// Parameters for a [`DistributionValidator`](crate::validator::DistributionValidator) run.
///
/// # Examples
/// ```
/// use u_distval::config::ValidatorConfig;
/// let config = ValidatorConfig::default().with_sample_count(5_000).with_seed(42);
/// assert_eq!(config.sample_count, 5_000);
/// assert_eq!(config.seed, Some(42));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Number of samples to draw. Must be positive.
    pub sample_count: usize,
    /// Fixed seed for reproducible runs; `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Relative tolerance on |sample_mean − theoretical_mean| / |theoretical_mean|.
    pub tolerance: f64,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            sample_count: DEFAULT_SAMPLE_COUNT,
            seed: None,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl ValidatorConfig {
    pub fn with_sample_count(mut self, sample_count: usize) -> Self {
        self.sample_count = sample_count;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Checks that the sample count is positive and the tolerance is a
    /// finite non-negative number.
    pub fn validate(&self) -> Result<()> {
        if self.sample_count == 0 {
            return Err(ValidationError::InvalidParameter(
                "sample count must be positive".into(),
            ));
        }
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(ValidationError::InvalidParameter(format!(
                "tolerance must be finite and >= 0, got {}",
                self.tolerance
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let c = ValidatorConfig::default();
        assert_eq!(c.sample_count, 100_000);
        assert_eq!(c.seed, None);
        assert_eq!(c.tolerance, 0.05);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_zero_samples_rejected() {
        let c = ValidatorConfig::default().with_sample_count(0);
        assert!(matches!(
            c.validate(),
            Err(ValidationError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_bad_tolerance_rejected() {
        assert!(ValidatorConfig::default().with_tolerance(-0.1).validate().is_err());
        assert!(ValidatorConfig::default().with_tolerance(f64::NAN).validate().is_err());
    }

    #[test]
    fn test_deserialize_partial() {
        let c: ValidatorConfig = serde_json::from_str(r#"{"sample_count": 5000, "seed": 7}"#).unwrap();
        assert_eq!(c.sample_count, 5000);
        assert_eq!(c.seed, Some(7));
        assert_eq!(c.tolerance, DEFAULT_TOLERANCE);
    }
}
