//! Theoretical-vs-empirical distribution validation.
//!
//! Draws samples from a [`DistributionSpec`], compares the sample mean and
//! population variance with the closed-form moments, and evaluates
//! threshold probabilities both analytically and by counting.
//!
//! # Examples
//! ```
//! use u_distval::distributions::DistributionSpec;
//! use u_distval::random::create_rng;
//! use u_distval::validator::{compute_statistics, evaluate_threshold, generate_samples, Direction};
//!
//! let spec = DistributionSpec::uniform(15.0, 25.0).unwrap();
//! let mut rng = create_rng(42);
//! let samples = generate_samples(&spec, 5_000, &mut rng).unwrap();
//!
//! let report = compute_statistics(&spec, &samples);
//! assert_eq!(report.theoretical_mean, 20.0);
//!
//! let p = evaluate_threshold(&spec, &samples, 17.0, Direction::LessThan).unwrap();
//! assert_eq!(p.theoretical_probability, 0.2);
//! assert!((p.empirical_probability - 0.2).abs() < 0.03);
//! ```

use log::{debug, warn};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::ValidatorConfig;
use crate::distributions::DistributionSpec;
use crate::error::{Result, ValidationError};
use crate::random;
use crate::stats;

// ============================================================================
// Samples
// ============================================================================

/// An immutable, non-empty sequence of finite draws.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SampleSet {
    values: Vec<f64>,
}

impl SampleSet {
    /// Wraps caller-supplied values.
    ///
    /// # Errors
    /// Returns `Err` if `values` is empty or contains NaN/Inf.
    pub fn new(values: Vec<f64>) -> Result<Self> {
        if values.is_empty() {
            return Err(ValidationError::InvalidParameter(
                "sample set must not be empty".into(),
            ));
        }
        if let Some(bad) = values.iter().find(|x| !x.is_finite()) {
            return Err(ValidationError::InvalidParameter(format!(
                "sample set contains non-finite value {bad}"
            )));
        }
        Ok(Self { values })
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false`; kept for the `len`/`is_empty` pair.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn mean(&self) -> f64 {
        stats::mean(&self.values).unwrap_or(f64::NAN)
    }

    /// Population variance (denominator `n`).
    pub fn variance(&self) -> f64 {
        stats::population_variance(&self.values).unwrap_or(f64::NAN)
    }
}

impl AsRef<[f64]> for SampleSet {
    fn as_ref(&self) -> &[f64] {
        &self.values
    }
}

/// Draws `n` independent values from `spec`.
///
/// # Errors
/// Returns `Err` if `n == 0`.
pub fn generate_samples<R: Rng + ?Sized>(
    spec: &DistributionSpec,
    n: usize,
    rng: &mut R,
) -> Result<SampleSet> {
    if n == 0 {
        return Err(ValidationError::InvalidParameter(
            "sample count must be positive".into(),
        ));
    }
    debug!("drawing {n} samples from {} distribution", spec.family());
    SampleSet::new((0..n).map(|_| spec.sample(rng)).collect())
}

// ============================================================================
// Statistics
// ============================================================================

/// Closed-form moments next to their sample estimates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StatisticsReport {
    pub theoretical_mean: f64,
    pub theoretical_variance: f64,
    pub sample_mean: f64,
    /// Population (biased, `/n`) variance of the samples.
    pub sample_variance: f64,
}

impl StatisticsReport {
    pub fn mean_error(&self) -> f64 {
        (self.sample_mean - self.theoretical_mean).abs()
    }

    pub fn variance_error(&self) -> f64 {
        (self.sample_variance - self.theoretical_variance).abs()
    }

    /// |sample_mean − theoretical_mean| / |theoretical_mean|.
    ///
    /// Falls back to the absolute error when the theoretical mean is zero.
    pub fn relative_mean_error(&self) -> f64 {
        relative(self.mean_error(), self.theoretical_mean)
    }

    pub fn relative_variance_error(&self) -> f64 {
        relative(self.variance_error(), self.theoretical_variance)
    }

    /// Whether the relative mean error is strictly below `tolerance`.
    pub fn mean_within(&self, tolerance: f64) -> bool {
        self.relative_mean_error() < tolerance
    }
}

fn relative(err: f64, reference: f64) -> f64 {
    if reference == 0.0 {
        err
    } else {
        err / reference.abs()
    }
}

/// Compares the moments of `spec` with those of `samples`.
pub fn compute_statistics(spec: &DistributionSpec, samples: &SampleSet) -> StatisticsReport {
    StatisticsReport {
        theoretical_mean: spec.mean(),
        theoretical_variance: spec.variance(),
        sample_mean: samples.mean(),
        sample_variance: samples.variance(),
    }
}

// ============================================================================
// Threshold probabilities
// ============================================================================

/// Side of the threshold being measured. Both comparisons are strict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// P(X < t)
    LessThan,
    /// P(X > t)
    GreaterThan,
}

impl Direction {
    pub fn holds(self, x: f64, threshold: f64) -> bool {
        match self {
            Direction::LessThan => x < threshold,
            Direction::GreaterThan => x > threshold,
        }
    }
}

/// A threshold probability question, e.g. "P(X > 5)".
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdQuery {
    pub threshold: f64,
    pub direction: Direction,
}

impl ThresholdQuery {
    pub fn less_than(threshold: f64) -> Self {
        Self {
            threshold,
            direction: Direction::LessThan,
        }
    }

    pub fn greater_than(threshold: f64) -> Self {
        Self {
            threshold,
            direction: Direction::GreaterThan,
        }
    }
}

/// Analytical and counted answers to a [`ThresholdQuery`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ThresholdReport {
    pub query: ThresholdQuery,
    pub theoretical_probability: f64,
    pub empirical_probability: f64,
}

impl ThresholdReport {
    pub fn absolute_error(&self) -> f64 {
        (self.empirical_probability - self.theoretical_probability).abs()
    }
}

/// Evaluates P(X < t) or P(X > t) in closed form and as a sample fraction.
///
/// The closed form is the CDF (less than) or survival function (greater
/// than), clamped to `[0, 1]` outside the support.
///
/// # Errors
/// Returns `Err` if `threshold` is not finite.
pub fn evaluate_threshold(
    spec: &DistributionSpec,
    samples: &SampleSet,
    threshold: f64,
    direction: Direction,
) -> Result<ThresholdReport> {
    if !threshold.is_finite() {
        return Err(ValidationError::InvalidParameter(format!(
            "threshold must be finite, got {threshold}"
        )));
    }
    let theoretical_probability = match direction {
        Direction::LessThan => spec.cdf(threshold),
        Direction::GreaterThan => spec.sf(threshold),
    }
    .clamp(0.0, 1.0);
    let empirical_probability =
        stats::proportion(samples.values(), |x| direction.holds(x, threshold)).unwrap_or(0.0);

    Ok(ThresholdReport {
        query: ThresholdQuery {
            threshold,
            direction,
        },
        theoretical_probability,
        empirical_probability,
    })
}

// ============================================================================
// Validator
// ============================================================================

/// Result of one [`DistributionValidator::validate`] run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationReport {
    pub spec: DistributionSpec,
    pub sample_count: usize,
    pub statistics: StatisticsReport,
    pub threshold: Option<ThresholdReport>,
}

impl ValidationReport {
    /// Whether the sample mean landed within `tolerance` of theory.
    pub fn is_consistent(&self, tolerance: f64) -> bool {
        self.statistics.mean_within(tolerance)
    }
}

/// Runs generate → compare → (optionally) threshold in one call.
///
/// # Examples
/// ```
/// use u_distval::config::ValidatorConfig;
/// use u_distval::distributions::DistributionSpec;
/// use u_distval::validator::{DistributionValidator, ThresholdQuery};
///
/// let config = ValidatorConfig::default().with_sample_count(1_000).with_seed(7);
/// let validator = DistributionValidator::new(config).unwrap();
/// let spec = DistributionSpec::exponential(0.3).unwrap();
/// let report = validator.validate(&spec, Some(ThresholdQuery::greater_than(5.0))).unwrap();
/// let t = report.threshold.unwrap();
/// assert!((t.theoretical_probability - (-1.5_f64).exp()).abs() < 1e-15);
/// ```
#[derive(Debug, Clone)]
pub struct DistributionValidator {
    config: ValidatorConfig,
}

impl DistributionValidator {
    /// # Errors
    /// Returns `Err` if the config has a zero sample count or a bad tolerance.
    pub fn new(config: ValidatorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validates `spec` with a generator built from the config seed.
    pub fn validate(
        &self,
        spec: &DistributionSpec,
        query: Option<ThresholdQuery>,
    ) -> Result<ValidationReport> {
        let mut rng = random::rng_for(self.config.seed);
        self.validate_with_rng(spec, query, &mut rng)
    }

    /// Validates `spec` drawing from a caller-supplied generator.
    pub fn validate_with_rng<R: Rng + ?Sized>(
        &self,
        spec: &DistributionSpec,
        query: Option<ThresholdQuery>,
        rng: &mut R,
    ) -> Result<ValidationReport> {
        let samples = generate_samples(spec, self.config.sample_count, rng)?;
        let statistics = compute_statistics(spec, &samples);
        let threshold = query
            .map(|q| evaluate_threshold(spec, &samples, q.threshold, q.direction))
            .transpose()?;

        debug!(
            "{}: mean {:.4} vs {:.4}, variance {:.4} vs {:.4}",
            spec.family(),
            statistics.sample_mean,
            statistics.theoretical_mean,
            statistics.sample_variance,
            statistics.theoretical_variance,
        );
        if !statistics.mean_within(self.config.tolerance) {
            warn!(
                "{}: relative mean error {:.4} exceeds tolerance {} with n={}",
                spec.family(),
                statistics.relative_mean_error(),
                self.config.tolerance,
                samples.len(),
            );
        }

        Ok(ValidationReport {
            spec: *spec,
            sample_count: samples.len(),
            statistics,
            threshold,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
