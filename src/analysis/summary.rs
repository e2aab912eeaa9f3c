use statrs::statistics::{Data, Median};

use crate::data::model::{Point, Sample};
use crate::error::{AnalysisError, Result};

/// Descriptive statistics over the full, unfiltered sample.
///
/// Besides the global extremes it keeps the boundary points: `y_max` is the
/// peak of the distribution and `x_max` the last entry, `y_min` the trough
/// and `x_min` the first entry. Putting peak and endpoint side by side shows
/// how far the tail is from the top of the distribution.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub mean: f64,
    pub median: f64,
    /// Population standard deviation (divides by n).
    pub std_dev: f64,
    pub y_max: Point,
    pub x_max: Point,
    pub y_min: Point,
    pub x_min: Point,
}

impl Summary {
    pub fn from_sample(sample: &Sample) -> Result<Self> {
        let (Some(y_max), Some(x_max), Some(y_min), Some(x_min)) =
            (sample.argmax(), sample.last(), sample.argmin(), sample.first())
        else {
            return Err(AnalysisError::EmptySample);
        };

        let mean = exact_mean(sample.values());
        let values = sample.as_f64();
        let std_dev = population_std_dev(&values, mean);
        let median = Data::new(values).median();

        Ok(Summary {
            mean,
            median,
            std_dev,
            y_max,
            x_max,
            y_min,
            x_min,
        })
    }
}

/// Integer sum divided once, so integral data gets the correctly rounded
/// mean instead of accumulating error from an incremental update.
fn exact_mean(values: &[i64]) -> f64 {
    let sum: i128 = values.iter().map(|&v| i128::from(v)).sum();
    sum as f64 / values.len() as f64
}

/// Two-pass population standard deviation around a known mean.
fn population_std_dev(values: &[f64], mean: f64) -> f64 {
    let squares: f64 = values.iter().map(|&v| (v - mean).powi(2)).sum();
    (squares / values.len() as f64).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn skewed_sample() {
        let summary = Summary::from_sample(&Sample::from(vec![1, 2, 3, 4, 100])).unwrap();
        assert!(close(summary.mean, 22.0));
        assert!(close(summary.median, 3.0));
        // Deviations: -21, -20, -19, -18, 78 → variance 1522.
        assert!(close(summary.std_dev, 1522f64.sqrt()));
        assert_eq!(summary.y_max, Point::new(4, 100));
        assert_eq!(summary.x_max, Point::new(4, 100));
        assert_eq!(summary.y_min, Point::new(0, 1));
        assert_eq!(summary.x_min, Point::new(0, 1));
    }

    #[test]
    fn peak_differs_from_boundaries() {
        let summary = Summary::from_sample(&Sample::from(vec![0, 12, 40, 7, 2, 1])).unwrap();
        assert_eq!(summary.y_max, Point::new(2, 40));
        assert_eq!(summary.x_max, Point::new(5, 1));
        assert_eq!(summary.y_min, Point::new(0, 0));
        assert_eq!(summary.x_min, Point::new(0, 0));
        assert!(close(summary.median, 4.5));
    }

    #[test]
    fn single_value() {
        let summary = Summary::from_sample(&Sample::from(vec![-5])).unwrap();
        assert!(close(summary.mean, -5.0));
        assert!(close(summary.std_dev, 0.0));
    }

    #[test]
    fn mean_of_integer_counts_is_exact() {
        let values: Vec<i64> = (1..=2000).map(|i| 1000 / i).collect();
        let summary = Summary::from_sample(&Sample::from(values)).unwrap();
        assert_eq!(summary.mean, 3.5345);
        assert!((summary.std_dev - 28.40869250335186).abs() < 1e-12);
    }

    #[test]
    fn empty_sample_is_an_error() {
        assert!(matches!(
            Summary::from_sample(&Sample::default()),
            Err(AnalysisError::EmptySample)
        ));
    }
}
