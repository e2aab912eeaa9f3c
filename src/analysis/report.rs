use std::fmt;

use super::summary::Summary;

/// The lines printed to stdout after a successful analysis, in order.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub ks_distance: f64,
    pub summary: Summary,
}

// Floats use `{:?}` so whole numbers keep their decimal point (`22.0`).
impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = &self.summary;
        writeln!(f, "KS Distance: {:?}", self.ks_distance)?;
        writeln!(f, "Mean: {:?}", s.mean)?;
        writeln!(f, "Median: {:?}", s.median)?;
        writeln!(f, "Standard Deviation: {:?}", s.std_dev)?;
        writeln!(f, "y-max: {}, x-max: {}", s.y_max, s.x_max)?;
        writeln!(f, "y-min: {}, x-min: {}", s.y_min, s.x_min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{Point, Sample};

    #[test]
    fn renders_lines_in_order() {
        let report = Report {
            ks_distance: 0.125,
            summary: Summary::from_sample(&Sample::from(vec![1, 2, 3, 4, 100])).unwrap(),
        };
        let text = report.to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "KS Distance: 0.125");
        assert_eq!(lines[1], "Mean: 22.0");
        assert_eq!(lines[2], "Median: 3.0");
        assert!(lines[3].starts_with("Standard Deviation: 39.01"));
        assert_eq!(lines[4], "y-max: (4, 100), x-max: (4, 100)");
        assert_eq!(lines[5], "y-min: (0, 1), x-min: (0, 1)");
    }

    #[test]
    fn mean_line_has_no_rounding_noise() {
        let values: Vec<i64> = (1..=2000).map(|i| 1000 / i).collect();
        let report = Report {
            ks_distance: 0.1,
            summary: Summary::from_sample(&Sample::from(values)).unwrap(),
        };
        assert!(report.to_string().contains("\nMean: 3.5345\n"));
    }

    #[test]
    fn boundary_points_are_reported_separately() {
        let summary = Summary {
            mean: 1.0,
            median: 1.0,
            std_dev: 0.0,
            y_max: Point::new(2, 9),
            x_max: Point::new(7, 3),
            y_min: Point::new(5, -1),
            x_min: Point::new(0, 4),
        };
        let text = Report { ks_distance: 0.5, summary }.to_string();
        assert!(text.contains("y-max: (2, 9), x-max: (7, 3)\n"));
        assert!(text.contains("y-min: (5, -1), x-min: (0, 4)\n"));
    }
}
