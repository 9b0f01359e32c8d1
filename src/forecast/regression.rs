//! Ordinary least squares trend line
//!
//! Fits `y = intercept + slope * x` over a set of points. A set with no
//! spread in `x` (a single month, for instance) has no defined slope; it is
//! fitted as a flat line through the mean of `y`.

use serde::{Deserialize, Serialize};

use crate::error::{ExpenseError, ExpenseResult};

/// Below this, the explanatory variable is treated as having no variance
const VARIANCE_EPSILON: f64 = 1e-10;

/// A fitted linear trend
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearTrend {
    /// Value of the line at x = 0
    intercept: f64,
    /// Change in y per unit of x
    slope: f64,
    /// Number of points the line was fitted on
    n_observations: usize,
    /// Coefficient of determination on the training points
    r_squared: f64,
}

impl LinearTrend {
    /// Fit a trend line to `(x, y)` points
    ///
    /// # Errors
    ///
    /// Returns `InsufficientData` when `points` is empty.
    pub fn fit(points: &[(f64, f64)]) -> ExpenseResult<Self> {
        if points.is_empty() {
            return Err(ExpenseError::InsufficientData);
        }

        let n = points.len() as f64;
        let mean_x = points.iter().map(|&(x, _)| x).sum::<f64>() / n;
        let mean_y = points.iter().map(|&(_, y)| y).sum::<f64>() / n;

        // Centered sums keep the fit stable for large totals
        let sxx: f64 = points.iter().map(|&(x, _)| (x - mean_x).powi(2)).sum();
        let sxy: f64 = points
            .iter()
            .map(|&(x, y)| (x - mean_x) * (y - mean_y))
            .sum();

        let slope = if sxx < VARIANCE_EPSILON { 0.0 } else { sxy / sxx };
        let intercept = mean_y - slope * mean_x;

        let ss_tot: f64 = points.iter().map(|&(_, y)| (y - mean_y).powi(2)).sum();
        let ss_res: f64 = points
            .iter()
            .map(|&(x, y)| (y - (intercept + slope * x)).powi(2))
            .sum();
        let r_squared = if ss_tot > VARIANCE_EPSILON {
            1.0 - ss_res / ss_tot
        } else {
            1.0
        };

        Ok(Self {
            intercept,
            slope,
            n_observations: points.len(),
            r_squared,
        })
    }

    /// Evaluate the line at `x`
    pub fn predict_at(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }

    /// Get the intercept
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Get the slope
    pub fn slope(&self) -> f64 {
        self.slope
    }

    /// Get the number of fitted points
    pub fn n_observations(&self) -> usize {
        self.n_observations
    }

    /// Get R-squared on the training points
    pub fn r_squared(&self) -> f64 {
        self.r_squared
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_line() {
        let points: Vec<(f64, f64)> = (1..=6).map(|x| (x as f64, 10.0 + 2.0 * x as f64)).collect();
        let trend = LinearTrend::fit(&points).unwrap();

        assert!((trend.slope() - 2.0).abs() < 1e-10);
        assert!((trend.intercept() - 10.0).abs() < 1e-10);
        assert!((trend.r_squared() - 1.0).abs() < 1e-10);
        assert!((trend.predict_at(7.0) - 24.0).abs() < 1e-10);
    }

    #[test]
    fn test_two_points() {
        let trend = LinearTrend::fit(&[(1.0, 100.0), (2.0, 200.0)]).unwrap();
        assert!((trend.predict_at(3.0) - 300.0).abs() < 1e-9);
        assert_eq!(trend.n_observations(), 2);
    }

    #[test]
    fn test_single_point_is_flat() {
        let trend = LinearTrend::fit(&[(12.0, 450.0)]).unwrap();
        assert_eq!(trend.slope(), 0.0);
        assert_eq!(trend.intercept(), 450.0);
        assert_eq!(trend.predict_at(1.0), 450.0);
        assert!(trend.predict_at(1.0).is_finite());
    }

    #[test]
    fn test_noisy_points_least_squares() {
        // y = 1 + x with residuals +1, -1, -1, +1
        let points = [(0.0, 2.0), (1.0, 1.0), (2.0, 2.0), (3.0, 5.0)];
        let trend = LinearTrend::fit(&points).unwrap();

        assert!((trend.slope() - 1.0).abs() < 1e-10);
        assert!((trend.intercept() - 1.0).abs() < 1e-10);
        assert!(trend.r_squared() < 1.0);
        assert!(trend.r_squared() > 0.0);
    }

    #[test]
    fn test_empty_is_insufficient() {
        assert!(matches!(
            LinearTrend::fit(&[]),
            Err(ExpenseError::InsufficientData)
        ));
    }
}
