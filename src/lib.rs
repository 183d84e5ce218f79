//! # u-distval
//!
//! Theoretical-vs-empirical validation of probability distributions.
//!
//! Draws samples from an exponential or continuous-uniform distribution,
//! compares the sample mean and variance with their closed forms, and
//! evaluates threshold probabilities both analytically and by counting.
//!
//! ## Modules
//!
//! - [`distributions`] — `Exponential`, `Uniform` and the `DistributionSpec` variant
//! - [`validator`] — sample generation, moment comparison, threshold probabilities
//! - [`stats`] — numerically stable mean and population variance
//! - [`histogram`] — density histogram and PDF curve data for plotting
//! - [`scenarios`] — preset validation runs
//! - [`config`], [`random`], [`error`] — run parameters, RNG construction, errors
//!
//! ## Conventions
//!
//! - **Population variance**: sample variance divides by `n`, not `n − 1`.
//! - **Strict thresholds**: empirical probabilities count `x < t` or `x > t`.
//! - **Reproducibility**: a fixed seed gives the same samples on the same platform.
//!
//! ```
//! use u_distval::distributions::DistributionSpec;
//! use u_distval::random::create_rng;
//! use u_distval::validator::{compute_statistics, generate_samples};
//!
//! let spec = DistributionSpec::exponential(0.5).unwrap();
//! let samples = generate_samples(&spec, 10_000, &mut create_rng(42)).unwrap();
//! let report = compute_statistics(&spec, &samples);
//! assert!(report.relative_mean_error() < 0.05);
//! ```

pub mod config;
pub mod distributions;
pub mod error;
pub mod histogram;
pub mod random;
pub mod scenarios;
pub mod stats;
pub mod validator;

pub use distributions::DistributionSpec;
pub use error::{Result, ValidationError};
pub use validator::{
    compute_statistics, evaluate_threshold, generate_samples, Direction, DistributionValidator,
    SampleSet, StatisticsReport, ThresholdQuery, ThresholdReport, ValidationReport,
};
