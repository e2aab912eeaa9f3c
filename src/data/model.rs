use std::fmt;

// ---------------------------------------------------------------------------
// Point – one (index, value) pair of a sample
// ---------------------------------------------------------------------------

/// A value together with its position in the sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub index: usize,
    pub value: i64,
}

impl Point {
    pub fn new(index: usize, value: i64) -> Self {
        Point { index, value }
    }

    /// Plot coordinates: index on x, value on y.
    pub fn as_plot_point(&self) -> [f64; 2] {
        [self.index as f64, self.value as f64]
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.index, self.value)
    }
}

// ---------------------------------------------------------------------------
// Sample – the ordered counts read from a file
// ---------------------------------------------------------------------------

/// Ordered integers read from a count file. The position of a value is
/// meaningful (it is the x axis of the scatter plot), so the order is never
/// changed after construction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Sample {
    values: Vec<i64>,
}

impl Sample {
    pub fn new(values: Vec<i64>) -> Self {
        Sample { values }
    }

    pub fn values(&self) -> &[i64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Values as `f64`, for the statistics routines.
    pub fn as_f64(&self) -> Vec<f64> {
        self.values.iter().map(|&v| v as f64).collect()
    }

    /// First occurrence of the largest value.
    pub fn argmax(&self) -> Option<Point> {
        // `max_by_key` keeps the last of equal maxima, so fold by hand.
        self.points().fold(None, |best: Option<Point>, p| match best {
            Some(b) if b.value >= p.value => Some(b),
            _ => Some(p),
        })
    }

    /// First occurrence of the smallest value.
    pub fn argmin(&self) -> Option<Point> {
        self.points().fold(None, |best: Option<Point>, p| match best {
            Some(b) if b.value <= p.value => Some(b),
            _ => Some(p),
        })
    }

    pub fn first(&self) -> Option<Point> {
        self.values.first().map(|&v| Point::new(0, v))
    }

    pub fn last(&self) -> Option<Point> {
        self.values
            .last()
            .map(|&v| Point::new(self.values.len() - 1, v))
    }

    /// Iterate `(index, value)` pairs in file order.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.values
            .iter()
            .enumerate()
            .map(|(i, &v)| Point::new(i, v))
    }
}

impl From<Vec<i64>> for Sample {
    fn from(values: Vec<i64>) -> Self {
        Sample::new(values)
    }
}
