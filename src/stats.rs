//! Descriptive statistics over drawn samples.
//!
//! All functions in this module handle edge cases explicitly and use
//! numerically stable algorithms to avoid catastrophic cancellation.
//!
//! # Algorithms
//!
//! - **Mean**: Kahan-Neumaier compensated summation for O(ε) error
//!   independent of n, falling back to Welford's running mean when the
//!   sum itself overflows.
//! - **Variance**: Welford's online algorithm.
//!   Reference: Welford (1962), "Note on a Method for Calculating
//!   Corrected Sums of Squares and Products", *Technometrics* 4(3).
//!
//! # Estimator convention
//!
//! Sample-vs-theory comparisons use the **population** variance
//! (denominator `n`), i.e. the biased estimator.

/// Computes the arithmetic mean using Kahan compensated summation.
///
/// If the compensated sum overflows (e.g. many values near `f64::MAX`),
/// the result comes from Welford's running mean, which never forms the
/// full sum.
///
/// # Complexity
/// Time: O(n), Space: O(1)
///
/// # Returns
/// - `None` if `data` is empty or contains any NaN/Inf.
///
/// # Examples
/// ```
/// use u_distval::stats::mean;
/// let v = [1.0, 2.0, 3.0, 4.0, 5.0];
/// assert!((mean(&v).unwrap() - 3.0).abs() < 1e-15);
/// ```
pub fn mean(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    if !data.iter().all(|x| x.is_finite()) {
        return None;
    }
    let sum = kahan_sum(data);
    if sum.is_finite() {
        Some(sum / data.len() as f64)
    } else {
        accumulate(data)?.mean()
    }
}

/// Computes the population variance using Welford's online algorithm.
///
/// Returns the **population** variance (denominator `n`). This is the
/// estimator used for every sample-vs-theory comparison in this crate.
///
/// # Returns
/// - `None` if `data` is empty or contains NaN/Inf.
///
/// # Examples
/// ```
/// use u_distval::stats::population_variance;
/// let v = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
/// assert!((population_variance(&v).unwrap() - 4.0).abs() < 1e-10);
/// ```
pub fn population_variance(data: &[f64]) -> Option<f64> {
    accumulate(data)?.population_variance()
}

fn accumulate(data: &[f64]) -> Option<WelfordAccumulator> {
    if data.is_empty() || !data.iter().all(|x| x.is_finite()) {
        return None;
    }
    let mut acc = WelfordAccumulator::new();
    for &x in data {
        acc.update(x);
    }
    Some(acc)
}

/// Returns the minimum value in the slice.
///
/// # Returns
/// - `None` if `data` is empty or contains NaN.
///
/// # Examples
/// ```
/// use u_distval::stats::min;
/// assert_eq!(min(&[3.0, 1.0, 4.0, 1.0, 5.0]), Some(1.0));
/// ```
pub fn min(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    data.iter().copied().try_fold(f64::INFINITY, |acc, x| {
        if x.is_nan() {
            None
        } else {
            Some(acc.min(x))
        }
    })
}

/// Returns the maximum value in the slice.
///
/// # Returns
/// - `None` if `data` is empty or contains NaN.
pub fn max(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    data.iter().copied().try_fold(f64::NEG_INFINITY, |acc, x| {
        if x.is_nan() {
            None
        } else {
            Some(acc.max(x))
        }
    })
}

/// Fraction of elements satisfying `pred`, i.e. `count / n`.
///
/// # Returns
/// - `None` if `data` is empty.
///
/// # Examples
/// ```
/// use u_distval::stats::proportion;
/// let v = [1.0, 2.0, 3.0, 4.0];
/// assert_eq!(proportion(&v, |x| x > 2.5), Some(0.5));
/// ```
pub fn proportion<F>(data: &[f64], pred: F) -> Option<f64>
where
    F: Fn(f64) -> bool,
{
    if data.is_empty() {
        return None;
    }
    let hits = data.iter().filter(|&&x| pred(x)).count();
    Some(hits as f64 / data.len() as f64)
}

/// Neumaier's improved Kahan summation.
///
/// Handles the case where the addend is larger in magnitude than the
/// running sum.
///
/// Reference: Neumaier (1974), "Rundungsfehleranalyse einiger Verfahren
/// zur Summation endlicher Summen", *ZAMM* 54(1), pp. 39–51.
///
/// # Complexity
/// Time: O(n), Space: O(1)
pub fn kahan_sum(data: &[f64]) -> f64 {
    let mut sum = 0.0_f64;
    let mut c = 0.0_f64;
    for &x in data {
        let t = sum + x;
        if sum.abs() >= x.abs() {
            c += (sum - t) + x;
        } else {
            c += (x - t) + sum;
        }
        sum = t;
    }
    sum + c
}

// ---------------------------------------------------------------------------
// Welford online accumulator
// ---------------------------------------------------------------------------

/// Streaming accumulator for mean and variance.
///
/// Single pass, O(1) memory. Maintains the running mean and the sum of
/// squared deviations M₂.
///
/// # Examples
/// ```
/// use u_distval::stats::WelfordAccumulator;
/// let mut acc = WelfordAccumulator::new();
/// for &x in &[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0] {
///     acc.update(x);
/// }
/// assert!((acc.mean().unwrap() - 5.0).abs() < 1e-15);
/// assert!((acc.population_variance().unwrap() - 4.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Default)]
pub struct WelfordAccumulator {
    count: u64,
    mean_acc: f64,
    m2: f64,
}

impl WelfordAccumulator {
    /// Creates a new empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds a new sample into the accumulator.
    pub fn update(&mut self, value: f64) {
        self.count += 1;
        if self.count == 1 {
            self.mean_acc = value;
            return;
        }
        let delta = value - self.mean_acc;
        self.mean_acc += delta / self.count as f64;
        self.m2 += delta * (value - self.mean_acc);
    }

    /// Returns the running mean, or `None` if no samples have been added.
    pub fn mean(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.mean_acc)
        }
    }

    /// Returns the population variance (n denominator), or `None` if no
    /// samples have been added.
    pub fn population_variance(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.m2 / self.count as f64)
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // --- mean ---

    #[test]
    fn test_mean_basic() {
        assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0, 5.0]), Some(3.0));
    }

    #[test]
    fn test_mean_single() {
        assert_eq!(mean(&[42.0]), Some(42.0));
    }

    #[test]
    fn test_mean_empty() {
        assert_eq!(mean(&[]), None);
    }

    #[test]
    fn test_mean_nan() {
        assert_eq!(mean(&[1.0, f64::NAN, 3.0]), None);
    }

    #[test]
    fn test_mean_inf() {
        assert_eq!(mean(&[1.0, f64::INFINITY, 3.0]), None);
    }

    #[test]
    fn test_mean_sum_overflow_falls_back() {
        // The sum exceeds f64::MAX even though every value is finite.
        let v = [1e308; 10];
        assert_eq!(mean(&v), Some(1e308));
        assert_eq!(population_variance(&v), Some(0.0));
    }

    // --- variance ---

    #[test]
    fn test_population_variance_divides_by_n() {
        let v = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        // Squared deviations sum to 32; n − 1 would give 32/7.
        assert!((population_variance(&v).unwrap() - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_population_variance_single_is_zero() {
        assert_eq!(population_variance(&[3.5]), Some(0.0));
    }

    #[test]
    fn test_population_variance_empty_or_nan() {
        assert_eq!(population_variance(&[]), None);
        assert_eq!(population_variance(&[1.0, f64::NAN]), None);
    }

    #[test]
    fn test_variance_large_offset() {
        // Naive E[X²] − E[X]² loses every digit here.
        let v: Vec<f64> = [4.0, 7.0, 13.0, 16.0].iter().map(|x| x + 1e9).collect();
        assert!((population_variance(&v).unwrap() - 22.5).abs() < 1e-6);
    }

    // --- min / max ---

    #[test]
    fn test_min_max() {
        let v = [3.0, -1.0, 4.0, 1.0, 5.0];
        assert_eq!(min(&v), Some(-1.0));
        assert_eq!(max(&v), Some(5.0));
    }

    #[test]
    fn test_min_max_empty() {
        assert_eq!(min(&[]), None);
        assert_eq!(max(&[]), None);
    }

    #[test]
    fn test_min_max_nan() {
        assert_eq!(min(&[1.0, f64::NAN]), None);
        assert_eq!(max(&[1.0, f64::NAN]), None);
    }

    // --- proportion ---

    #[test]
    fn test_proportion_strict() {
        let v = [1.0, 2.0, 2.0, 3.0];
        assert_eq!(proportion(&v, |x| x < 2.0), Some(0.25));
        assert_eq!(proportion(&v, |x| x > 2.0), Some(0.25));
    }

    #[test]
    fn test_proportion_empty() {
        assert_eq!(proportion(&[], |_| true), None);
    }

    // --- kahan ---

    #[test]
    fn test_kahan_sum_precision() {
        // 1.0 followed by many tiny values that a naive sum drops.
        let mut v = vec![1.0];
        v.extend(std::iter::repeat(1e-16).take(10_000));
        let s = kahan_sum(&v);
        assert!((s - (1.0 + 1e-12)).abs() < 1e-15);
    }

    // --- Welford ---

    #[test]
    fn test_welford_empty() {
        let acc = WelfordAccumulator::new();
        assert_eq!(acc.mean(), None);
        assert_eq!(acc.population_variance(), None);
    }

    #[test]
    fn test_welford_streaming() {
        let mut acc = WelfordAccumulator::new();
        for x in 1..=7 {
            acc.update(x as f64);
        }
        assert!((acc.mean().unwrap() - 4.0).abs() < 1e-12);
        assert!((acc.population_variance().unwrap() - 4.0).abs() < 1e-12);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn finite_vec(min_len: usize, max_len: usize) -> impl Strategy<Value = Vec<f64>> {
        proptest::collection::vec(-1e6_f64..1e6, min_len..=max_len)
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn population_variance_non_negative(data in finite_vec(1, 100)) {
            let var = population_variance(&data).unwrap();
            prop_assert!(var >= 0.0, "variance must be >= 0, got {}", var);
        }

        #[test]
        fn population_variance_matches_two_pass(data in finite_vec(1, 100)) {
            let n = data.len() as f64;
            let m = data.iter().sum::<f64>() / n;
            let two_pass = data.iter().map(|x| (x - m) * (x - m)).sum::<f64>() / n;
            let var = population_variance(&data).unwrap();
            prop_assert!((var - two_pass).abs() < 1e-6 * two_pass.max(1.0));
        }

        #[test]
        fn mean_within_min_max(data in finite_vec(1, 100)) {
            let m = mean(&data).unwrap();
            prop_assert!(m >= min(&data).unwrap() - 1e-9);
            prop_assert!(m <= max(&data).unwrap() + 1e-9);
        }

        #[test]
        fn proportion_complements(data in finite_vec(1, 100), t in -1e6_f64..1e6) {
            let below = proportion(&data, |x| x < t).unwrap();
            let at_or_above = proportion(&data, |x| x >= t).unwrap();
            prop_assert!((below + at_or_above - 1.0).abs() < 1e-12);
        }
    }
}
