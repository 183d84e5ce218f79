//! Ready-made validation scenarios.
//!
//! Two textbook checks (moments of an exponential and a uniform) and two
//! applied ones: the time to ride a mountain-bike segment, uniform on
//! 15–25 minutes, and a service time, exponential with rate 0.3 per minute.

use crate::config::ValidatorConfig;
use crate::distributions::DistributionSpec;
use crate::error::Result;
use crate::validator::{DistributionValidator, ThresholdQuery, ValidationReport};

/// A distribution, a sample count and an optional threshold question.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub name: &'static str,
    pub spec: DistributionSpec,
    pub sample_count: usize,
    pub query: Option<ThresholdQuery>,
}

impl Scenario {
    /// Exponential with λ = 0.5 (mean 2), 100 000 draws.
    pub fn exponential_moments() -> Result<Self> {
        Ok(Self {
            name: "exponential-moments",
            spec: DistributionSpec::exponential(0.5)?,
            sample_count: 100_000,
            query: None,
        })
    }

    /// Uniform on [2, 8], 100 000 draws.
    pub fn uniform_moments() -> Result<Self> {
        Ok(Self {
            name: "uniform-moments",
            spec: DistributionSpec::uniform(2.0, 8.0)?,
            sample_count: 100_000,
            query: None,
        })
    }

    /// Segment time uniform on [15, 25] minutes; P(T < 17) = 0.2.
    pub fn segment_time() -> Result<Self> {
        Ok(Self {
            name: "segment-time",
            spec: DistributionSpec::uniform(15.0, 25.0)?,
            sample_count: 5_000,
            query: Some(ThresholdQuery::less_than(17.0)),
        })
    }

    /// Service time exponential with λ = 0.3; P(T > 5) = e^(−1.5).
    pub fn service_time() -> Result<Self> {
        Ok(Self {
            name: "service-time",
            spec: DistributionSpec::exponential(0.3)?,
            sample_count: 1_000,
            query: Some(ThresholdQuery::greater_than(5.0)),
        })
    }

    /// All four scenarios in presentation order.
    pub fn all() -> Result<Vec<Self>> {
        Ok(vec![
            Self::exponential_moments()?,
            Self::uniform_moments()?,
            Self::segment_time()?,
            Self::service_time()?,
        ])
    }

    /// Config for this scenario, carrying over seed and tolerance from `base`.
    pub fn config(&self, base: &ValidatorConfig) -> ValidatorConfig {
        base.clone().with_sample_count(self.sample_count)
    }

    /// Runs the scenario through a [`DistributionValidator`].
    ///
    /// # Examples
    /// ```
    /// use u_distval::config::ValidatorConfig;
    /// use u_distval::scenarios::Scenario;
    /// let report = Scenario::segment_time()
    ///     .unwrap()
    ///     .run(&ValidatorConfig::default().with_seed(42))
    ///     .unwrap();
    /// assert_eq!(report.threshold.unwrap().theoretical_probability, 0.2);
    /// ```
    pub fn run(&self, base: &ValidatorConfig) -> Result<ValidationReport> {
        DistributionValidator::new(self.config(base))?.validate(&self.spec, self.query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> ValidatorConfig {
        ValidatorConfig::default().with_seed(2024)
    }

    #[test]
    fn test_all_scenarios_build() {
        let all = Scenario::all().unwrap();
        let names: Vec<_> = all.iter().map(|s| s.name).collect();
        assert_eq!(
            names,
            ["exponential-moments", "uniform-moments", "segment-time", "service-time"]
        );
    }

    #[test]
    fn test_config_overrides_sample_count_only() {
        let s = Scenario::service_time().unwrap();
        let c = s.config(&seeded().with_tolerance(0.1));
        assert_eq!(c.sample_count, 1_000);
        assert_eq!(c.seed, Some(2024));
        assert_eq!(c.tolerance, 0.1);
    }

    #[test]
    fn test_moment_scenarios_converge() {
        for s in [
            Scenario::exponential_moments().unwrap(),
            Scenario::uniform_moments().unwrap(),
        ] {
            let r = s.run(&seeded()).unwrap();
            assert_eq!(r.sample_count, 100_000);
            assert!(r.is_consistent(0.05), "{}: {:?}", s.name, r.statistics);
            assert!(r.statistics.relative_variance_error() < 0.1);
        }
    }

    #[test]
    fn test_segment_time() {
        let r = Scenario::segment_time().unwrap().run(&seeded()).unwrap();
        assert_eq!(r.statistics.theoretical_mean, 20.0);
        let t = r.threshold.unwrap();
        assert_eq!(t.theoretical_probability, 0.2);
        assert!(t.absolute_error() < 0.03);
    }

    #[test]
    fn test_service_time() {
        let r = Scenario::service_time().unwrap().run(&seeded()).unwrap();
        assert!((r.statistics.theoretical_mean - 10.0 / 3.0).abs() < 1e-12);
        let t = r.threshold.unwrap();
        assert!((t.theoretical_probability - 0.2231).abs() < 1e-4);
        // n = 1000: standard error ≈ 0.013.
        assert!(t.absolute_error() < 0.07);
    }
}
