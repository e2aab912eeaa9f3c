use std::io::{self, Write};

use statrs::distribution::{ContinuousCDF, Pareto};

use crate::error::FitError;

// ---------------------------------------------------------------------------
// Options and result
// ---------------------------------------------------------------------------

/// Knobs for [`fit_power_law`].
#[derive(Debug, Clone, Copy)]
pub struct FitOptions {
    /// Write cutoff-scan progress to stdout while fitting.
    pub progress: bool,
}

impl Default for FitOptions {
    fn default() -> Self {
        Self { progress: true }
    }
}

/// A continuous power law `p(x) ∝ x^-alpha` for `x >= xmin`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerLawFit {
    /// Scaling exponent.
    pub alpha: f64,
    /// Lower cutoff; values below it are outside the fitted range.
    pub xmin: f64,
    /// Standard error of `alpha`.
    pub sigma: f64,
    /// Number of values `>= xmin`.
    pub n_tail: usize,
    /// Kolmogorov–Smirnov distance between the model and the tail's
    /// empirical CDF.
    pub ks_distance: f64,
}

impl PowerLawFit {
    /// The fitted model as a Pareto distribution (scale = xmin,
    /// shape = alpha − 1).
    pub fn distribution(&self) -> Option<Pareto> {
        Pareto::new(self.xmin, self.alpha - 1.0).ok()
    }
}

// ---------------------------------------------------------------------------
// Fitting
// ---------------------------------------------------------------------------

/// Fit a power law to strictly positive data, choosing the cutoff that
/// minimises the KS distance. Progress goes straight to stdout when
/// enabled; wrap the call in [`super::quiet::suppress_stdout`] to hide it.
pub fn fit_power_law(data: &[i64], options: FitOptions) -> Result<PowerLawFit, FitError> {
    if options.progress {
        fit_power_law_with_progress(data, &mut io::stdout())
    } else {
        fit_power_law_with_progress(data, &mut io::sink())
    }
}

/// Same as [`fit_power_law`] but with an explicit progress sink.
pub fn fit_power_law_with_progress(
    data: &[i64],
    progress: &mut dyn Write,
) -> Result<PowerLawFit, FitError> {
    if data.is_empty() {
        return Err(FitError::EmptySample);
    }

    let mut sorted: Vec<f64> = data.iter().map(|&v| v as f64).collect();
    sorted.sort_by(f64::total_cmp);

    let mut candidates = sorted.clone();
    candidates.dedup();
    let distinct = candidates.len();
    if distinct < 2 {
        return Err(FitError::TooFewDistinctValues(distinct));
    }
    // The largest value would leave a tail of identical points.
    candidates.pop();

    // Progress output is best effort; a broken sink never fails the fit.
    let _ = writeln!(progress, "Calculating best minimal value for power law fit");

    let mut best: Option<PowerLawFit> = None;
    let total = candidates.len();
    let mut last_percent = None;

    for (i, &xmin) in candidates.iter().enumerate() {
        if let Some(fit) = fit_with_cutoff(&sorted, xmin) {
            if best.map_or(true, |b| fit.ks_distance < b.ks_distance) {
                best = Some(fit);
            }
        }

        let percent = (i + 1) * 100 / total;
        if last_percent != Some(percent) {
            let _ = write!(progress, "xmin progress: {percent:02}%\r");
            last_percent = Some(percent);
        }
    }
    let _ = writeln!(progress);

    let fit = best.ok_or(FitError::NoValidFit)?;
    log::debug!(
        "Power-law fit: alpha={:.4} xmin={} n_tail={} D={:.4}",
        fit.alpha,
        fit.xmin,
        fit.n_tail,
        fit.ks_distance
    );
    Ok(fit)
}

/// Maximum-likelihood exponent and KS distance for one cutoff.
/// `sorted` must be ascending. Returns `None` when the cutoff leaves fewer
/// than two points or yields non-finite numbers.
fn fit_with_cutoff(sorted: &[f64], xmin: f64) -> Option<PowerLawFit> {
    let start = sorted.partition_point(|&x| x < xmin);
    let tail = &sorted[start..];
    let n = tail.len();
    if n < 2 {
        return None;
    }

    let log_sum: f64 = tail.iter().map(|&x| (x / xmin).ln()).sum();
    let alpha = 1.0 + n as f64 / log_sum;
    if !alpha.is_finite() || alpha <= 1.0 {
        return None;
    }

    let model = Pareto::new(xmin, alpha - 1.0).ok()?;
    let ks_distance = ks_distance(tail, &model);
    if !ks_distance.is_finite() {
        return None;
    }

    Some(PowerLawFit {
        alpha,
        xmin,
        sigma: (alpha - 1.0) / (n as f64).sqrt(),
        n_tail: n,
        ks_distance,
    })
}

/// Largest absolute gap between `model`'s CDF and the empirical CDF of
/// `tail` (ascending). The empirical CDF at `x` is the share of values
/// strictly below `x`, evaluated at each distinct value.
pub fn ks_distance(tail: &[f64], model: &impl ContinuousCDF<f64, f64>) -> f64 {
    let n = tail.len() as f64;
    let mut d: f64 = 0.0;
    let mut below = 0usize;

    while below < tail.len() {
        let x = tail[below];
        let empirical = below as f64 / n;
        d = d.max((model.cdf(x) - empirical).abs());
        while below < tail.len() && tail[below] == x {
            below += 1;
        }
    }
    d
}
