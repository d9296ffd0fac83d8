//! Filtering, aggregation and ranking for variety trial data.
//!
//! The pipeline is a single linear pass over an in-memory trial table:
//! [`filter`] → [`aggregate`] → [`recommend`]. [`pipeline::run`] drives all
//! three and [`chart`] turns the results into chart-ready series. Nothing in
//! this crate holds state between calls.

pub mod aggregate;
pub mod chart;
pub mod filter;
pub mod models;
pub mod pipeline;
pub mod recommend;

/// Descriptive statistics over plain `f64` slices.
pub mod stats {
    /// Arithmetic mean. `None` for an empty slice.
    pub fn mean(values: &[f64]) -> Option<f64> {
        if values.is_empty() {
            return None;
        }
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }

    /// Sample standard deviation (n − 1 denominator).
    ///
    /// `None` when fewer than two values exist. A single observation has no
    /// spread estimate; it is reported as missing rather than zero.
    pub fn sample_sd(values: &[f64]) -> Option<f64> {
        if values.len() < 2 {
            return None;
        }
        let m = mean(values)?;
        let sum_sq: f64 = values.iter().map(|v| (v - m).powi(2)).sum();
        Some((sum_sq / (values.len() - 1) as f64).sqrt())
    }

    /// Quantile of already-sorted values using linear interpolation between
    /// closest ranks. `q` is clamped to `[0, 1]`.
    pub fn quantile_sorted(sorted: &[f64], q: f64) -> Option<f64> {
        if sorted.is_empty() {
            return None;
        }
        let h = (sorted.len() - 1) as f64 * q.clamp(0.0, 1.0);
        let lo = h.floor() as usize;
        let hi = h.ceil() as usize;
        Some(sorted[lo] + (h - lo as f64) * (sorted[hi] - sorted[lo]))
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_mean() {
            assert_eq!(mean(&[2400.0, 2300.0, 2350.0]), Some(2350.0));
            assert_eq!(mean(&[]), None);
        }

        #[test]
        fn test_sample_sd() {
            let sd = sample_sd(&[2650.0, 2700.0, 2750.0]).unwrap();
            assert!((sd - 50.0).abs() < 1e-9);

            let sd = sample_sd(&[2400.0, 2300.0]).unwrap();
            assert!((sd - 70.710678).abs() < 1e-5);
        }

        #[test]
        fn test_sample_sd_single_value_is_missing() {
            assert_eq!(sample_sd(&[2600.0]), None);
            assert_eq!(sample_sd(&[]), None);
        }

        #[test]
        fn test_sample_sd_identical_values_is_zero() {
            assert_eq!(sample_sd(&[5.0, 5.0, 5.0]), Some(0.0));
        }

        #[test]
        fn test_quantile_sorted() {
            let values = [1.0, 2.0, 3.0, 4.0];
            assert_eq!(quantile_sorted(&values, 0.0), Some(1.0));
            assert_eq!(quantile_sorted(&values, 0.25), Some(1.75));
            assert_eq!(quantile_sorted(&values, 0.5), Some(2.5));
            assert_eq!(quantile_sorted(&values, 1.0), Some(4.0));
            assert_eq!(quantile_sorted(&[7.0], 0.75), Some(7.0));
            assert_eq!(quantile_sorted(&[], 0.5), None);
        }
    }
}
