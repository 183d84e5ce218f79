//! Probability distributions.
//!
//! Continuous distributions with analytical moments (mean, variance),
//! density, CDF/survival/inverse-CDF evaluation, and inverse-transform
//! sampling.
//!
//! # Supported Distributions
//!
//! | Distribution | Parameters | Mean | Variance |
//! |---|---|---|---|
//! | [`Exponential`] | λ (rate) | 1/λ | 1/λ² |
//! | [`Uniform`] | a, b | (a+b)/2 | (b−a)²/12 |
//!
//! [`DistributionSpec`] is the tagged variant over both families; every
//! operation on it is a single `match`.

use rand::Rng;
use serde::Serialize;

use crate::error::{Result, ValidationError};

// ============================================================================
// Exponential Distribution
// ============================================================================

/// Exponential distribution with rate λ (scale 1/λ).
///
/// # Mathematical Definition
/// - PDF: f(x) = λ·e^(−λx) for x ≥ 0
/// - CDF: F(x) = 1 − e^(−λx)
/// - Survival: S(x) = e^(−λx)
/// - Mean: 1/λ
/// - Variance: 1/λ²
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Exponential {
    rate: f64,
}

impl Exponential {
    /// Creates a new exponential distribution with rate `rate`.
    ///
    /// # Errors
    /// Returns `Err` if `rate` is not finite, `rate <= 0`, or the rate is
    /// so small that the variance 1/λ² overflows.
    ///
    /// # Examples
    /// ```
    /// use u_distval::distributions::Exponential;
    /// let e = Exponential::new(0.5).unwrap();
    /// assert_eq!(e.mean(), 2.0);
    /// assert!(Exponential::new(0.0).is_err());
    /// ```
    pub fn new(rate: f64) -> Result<Self> {
        if !rate.is_finite() || rate <= 0.0 {
            return Err(ValidationError::InvalidParameter(format!(
                "Exponential requires a finite rate > 0, got rate={rate}"
            )));
        }
        if !(1.0 / (rate * rate)).is_finite() {
            return Err(ValidationError::InvalidParameter(format!(
                "Exponential rate={rate} is too small: variance overflows"
            )));
        }
        Ok(Self { rate })
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Scale parameter 1/λ.
    pub fn scale(&self) -> f64 {
        1.0 / self.rate
    }

    pub fn mean(&self) -> f64 {
        1.0 / self.rate
    }

    pub fn variance(&self) -> f64 {
        1.0 / (self.rate * self.rate)
    }

    pub fn std_dev(&self) -> f64 {
        self.scale()
    }

    /// PDF: f(x) = λ·e^(−λx) for x ≥ 0, 0 otherwise.
    pub fn pdf(&self, x: f64) -> f64 {
        if x < 0.0 {
            0.0
        } else {
            self.rate * (-self.rate * x).exp()
        }
    }

    /// CDF: F(x) = 1 − e^(−λx), 0 for x < 0.
    pub fn cdf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            0.0
        } else {
            -(-self.rate * x).exp_m1()
        }
    }

    /// Survival function S(x) = P(X > x) = e^(−λx), 1 for x < 0.
    pub fn sf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            1.0
        } else {
            (-self.rate * x).exp()
        }
    }

    /// Inverse CDF: x = −ln(1−p)/λ.
    ///
    /// Returns `None` if `p` is outside `[0, 1]`; `p = 1` maps to `+∞`.
    pub fn quantile(&self, p: f64) -> Option<f64> {
        if !(0.0..=1.0).contains(&p) {
            return None;
        }
        Some(-(-p).ln_1p() / self.rate)
    }

    /// Draws one value by inverse transform of a uniform `[0, 1)` variate.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let u: f64 = rng.random();
        -(-u).ln_1p() / self.rate
    }
}

// ============================================================================
// Uniform Distribution
// ============================================================================

/// Continuous uniform distribution on `[min, max]`.
///
/// # Mathematical Definition
/// - PDF: f(x) = 1/(max−min) for x ∈ [min, max]
/// - CDF: F(x) = (x−min)/(max−min)
/// - Mean: (min+max)/2
/// - Variance: (max−min)²/12
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Uniform {
    min: f64,
    max: f64,
}

impl Uniform {
    /// Creates a new uniform distribution on `[min, max]`.
    ///
    /// # Errors
    /// Returns `Err` if `min >= max`, either parameter is not finite, or
    /// the width is too large (variance overflows) or too small (density
    /// overflows) to represent.
    pub fn new(min: f64, max: f64) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() || min >= max {
            return Err(ValidationError::InvalidParameter(format!(
                "Uniform requires finite min < max, got min={min}, max={max}"
            )));
        }
        let range = max - min;
        if !(range * range / 12.0).is_finite() || !(1.0 / range).is_finite() {
            return Err(ValidationError::InvalidParameter(format!(
                "Uniform width {range} is out of range for min={min}, max={max}"
            )));
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Width of the support, `max − min`.
    pub fn range(&self) -> f64 {
        self.max - self.min
    }

    pub fn mean(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    pub fn variance(&self) -> f64 {
        let range = self.range();
        range * range / 12.0
    }

    pub fn std_dev(&self) -> f64 {
        self.variance().sqrt()
    }

    /// PDF: f(x) = 1/(max−min) for x ∈ [min, max], 0 otherwise.
    pub fn pdf(&self, x: f64) -> f64 {
        if x >= self.min && x <= self.max {
            1.0 / self.range()
        } else {
            0.0
        }
    }

    /// CDF: F(x) = (x−min)/(max−min), clamped to [0, 1].
    pub fn cdf(&self, x: f64) -> f64 {
        if x <= self.min {
            0.0
        } else if x >= self.max {
            1.0
        } else {
            (x - self.min) / self.range()
        }
    }

    /// Survival function S(x) = 1 − F(x), clamped to [0, 1].
    pub fn sf(&self, x: f64) -> f64 {
        if x <= self.min {
            1.0
        } else if x >= self.max {
            0.0
        } else {
            (self.max - x) / self.range()
        }
    }

    /// Inverse CDF (quantile function): x = min + p·(max−min).
    ///
    /// Returns `None` if `p` is outside `[0, 1]`.
    pub fn quantile(&self, p: f64) -> Option<f64> {
        if !(0.0..=1.0).contains(&p) {
            return None;
        }
        Some(self.min + p * self.range())
    }

    /// Draws one value in `[min, max]`.
    ///
    /// `min + u·(max−min)` can round up to `max` when the width is small
    /// next to `|min|`, so the upper end is closed.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let u: f64 = rng.random();
        (self.min + u * self.range()).min(self.max)
    }
}

// ============================================================================
// Distribution Spec
// ============================================================================

/// A validated distribution family with its parameters.
///
/// # Examples
/// ```
/// use u_distval::distributions::DistributionSpec;
/// let spec = DistributionSpec::uniform(2.0, 8.0).unwrap();
/// assert_eq!(spec.mean(), 5.0);
/// assert_eq!(spec.variance(), 3.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "family", rename_all = "snake_case")]
pub enum DistributionSpec {
    Exponential(Exponential),
    Uniform(Uniform),
}

impl DistributionSpec {
    /// Exponential family with rate λ.
    pub fn exponential(rate: f64) -> Result<Self> {
        Exponential::new(rate).map(Self::Exponential)
    }

    /// Uniform family on `[min, max]`.
    pub fn uniform(min: f64, max: f64) -> Result<Self> {
        Uniform::new(min, max).map(Self::Uniform)
    }

    /// Lowercase family name, e.g. `"exponential"`.
    pub fn family(&self) -> &'static str {
        match self {
            Self::Exponential(_) => "exponential",
            Self::Uniform(_) => "uniform",
        }
    }

    pub fn mean(&self) -> f64 {
        match self {
            Self::Exponential(d) => d.mean(),
            Self::Uniform(d) => d.mean(),
        }
    }

    pub fn variance(&self) -> f64 {
        match self {
            Self::Exponential(d) => d.variance(),
            Self::Uniform(d) => d.variance(),
        }
    }

    pub fn std_dev(&self) -> f64 {
        match self {
            Self::Exponential(d) => d.std_dev(),
            Self::Uniform(d) => d.std_dev(),
        }
    }

    pub fn pdf(&self, x: f64) -> f64 {
        match self {
            Self::Exponential(d) => d.pdf(x),
            Self::Uniform(d) => d.pdf(x),
        }
    }

    /// P(X ≤ x).
    pub fn cdf(&self, x: f64) -> f64 {
        match self {
            Self::Exponential(d) => d.cdf(x),
            Self::Uniform(d) => d.cdf(x),
        }
    }

    /// P(X > x).
    pub fn sf(&self, x: f64) -> f64 {
        match self {
            Self::Exponential(d) => d.sf(x),
            Self::Uniform(d) => d.sf(x),
        }
    }

    pub fn quantile(&self, p: f64) -> Option<f64> {
        match self {
            Self::Exponential(d) => d.quantile(p),
            Self::Uniform(d) => d.quantile(p),
        }
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        match self {
            Self::Exponential(d) => d.sample(rng),
            Self::Uniform(d) => d.sample(rng),
        }
    }
}

impl From<Exponential> for DistributionSpec {
    fn from(d: Exponential) -> Self {
        Self::Exponential(d)
    }
}

impl From<Uniform> for DistributionSpec {
    fn from(d: Uniform) -> Self {
        Self::Uniform(d)
    }
}

// ============================================================================
// Tests
// ============================================================================
