use super::model::Sample;

// ---------------------------------------------------------------------------
// Positivity filter
// ---------------------------------------------------------------------------

/// Keep only strictly positive values, in their original order.
///
/// A power law is only defined on positive support, so zeros and negative
/// counts are dropped without an error. The caller still reports statistics
/// over the unfiltered sample.
pub fn filter_to_positive(sample: &Sample) -> Vec<i64> {
    let kept: Vec<i64> = sample.values().iter().copied().filter(|&v| v > 0).collect();

    let dropped = sample.len() - kept.len();
    if dropped > 0 {
        log::debug!("Dropped {dropped} non-positive values before fitting");
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(vec![-3, 0, 1, 2, 5], vec![1, 2, 5])]
    #[case(vec![4, -1, 3, 0, 2], vec![4, 3, 2])]
    #[case(vec![0, -1, -7], vec![])]
    #[case(vec![], vec![])]
    fn keeps_positive_values_in_order(#[case] input: Vec<i64>, #[case] expected: Vec<i64>) {
        assert_eq!(filter_to_positive(&Sample::from(input)), expected);
    }
}
