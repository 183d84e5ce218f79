//! Histogram and density-curve data for visual inspection.
//!
//! Rendering is left to the caller. This module only produces the numbers
//! a plot of "sample histogram vs. theoretical PDF" needs: equal-width
//! bins normalized to unit area, and an evenly spaced PDF curve.

use serde::Serialize;

use crate::distributions::DistributionSpec;
use crate::error::{Result, ValidationError};
use crate::stats;

/// Equal-width histogram normalized so the bars integrate to 1.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram {
    edges: Vec<f64>,
    densities: Vec<f64>,
}

impl Histogram {
    /// Bins `data` into `bins` equal-width intervals over `[min, max]`.
    ///
    /// Each bin is half-open except the last, which includes `max`.
    /// Density of bin i is `count_i / (n · width)`.
    ///
    /// # Errors
    /// Returns `Err` if `bins == 0`, `data` is empty, or `data` contains
    /// non-finite values.
    ///
    /// # Examples
    /// ```
    /// use u_distval::histogram::Histogram;
    /// let h = Histogram::density(&[0.0, 1.0, 1.5, 2.0], 2).unwrap();
    /// assert_eq!(h.edges(), &[0.0, 1.0, 2.0]);
    /// assert_eq!(h.densities(), &[0.25, 0.75]);
    /// ```
    pub fn density(data: &[f64], bins: usize) -> Result<Self> {
        if bins == 0 {
            return Err(ValidationError::InvalidParameter(
                "histogram needs at least one bin".into(),
            ));
        }
        let (lo, hi) = match (stats::min(data), stats::max(data)) {
            (Some(lo), Some(hi)) if lo.is_finite() && hi.is_finite() => (lo, hi),
            _ => {
                return Err(ValidationError::InvalidParameter(
                    "histogram needs non-empty finite data".into(),
                ))
            }
        };
        // Degenerate data gets a unit-width window centered on the value.
        let (lo, hi) = if lo == hi { (lo - 0.5, hi + 0.5) } else { (lo, hi) };
        let width = (hi - lo) / bins as f64;

        let mut counts = vec![0_u64; bins];
        for &x in data {
            let idx = (((x - lo) / width) as usize).min(bins - 1);
            counts[idx] += 1;
        }

        let n = data.len() as f64;
        let edges = (0..=bins).map(|i| lo + i as f64 * width).collect();
        let densities = counts.iter().map(|&c| c as f64 / (n * width)).collect();
        Ok(Self { edges, densities })
    }

    /// Bin edges; `bins + 1` values.
    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    /// Per-bin density; `bins` values.
    pub fn densities(&self) -> &[f64] {
        &self.densities
    }

    pub fn bin_count(&self) -> usize {
        self.densities.len()
    }

    /// Sum of density × width over all bins.
    pub fn area(&self) -> f64 {
        self.edges
            .windows(2)
            .zip(&self.densities)
            .map(|(w, d)| (w[1] - w[0]) * d)
            .sum()
    }
}

/// Evaluates the theoretical PDF at `points` evenly spaced x values over
/// `[lo, hi]`, endpoints included.
///
/// # Errors
/// Returns `Err` if `points < 2` or `lo >= hi` or either bound is not finite.
///
/// # Examples
/// ```
/// use u_distval::distributions::DistributionSpec;
/// use u_distval::histogram::density_curve;
/// let spec = DistributionSpec::uniform(2.0, 8.0).unwrap();
/// let curve = density_curve(&spec, 1.0, 9.0, 3).unwrap();
/// assert_eq!(curve[0], (1.0, 0.0));
/// assert_eq!(curve[1].0, 5.0);
/// assert!((curve[1].1 - 1.0 / 6.0).abs() < 1e-15);
/// ```
pub fn density_curve(
    spec: &DistributionSpec,
    lo: f64,
    hi: f64,
    points: usize,
) -> Result<Vec<(f64, f64)>> {
    if points < 2 {
        return Err(ValidationError::InvalidParameter(format!(
            "density curve needs at least 2 points, got {points}"
        )));
    }
    if !lo.is_finite() || !hi.is_finite() || lo >= hi {
        return Err(ValidationError::InvalidParameter(format!(
            "density curve needs finite lo < hi, got lo={lo}, hi={hi}"
        )));
    }
    let step = (hi - lo) / (points - 1) as f64;
    Ok((0..points)
        .map(|i| {
            let x = if i == points - 1 { hi } else { lo + i as f64 * step };
            (x, spec.pdf(x))
        })
        .collect())
}
