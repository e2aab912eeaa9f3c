//! Analysis pipeline: consume the count file, fit the positive values, and
//! summarise the whole sample.
//!
//! ```text
//!   path ──► loader::consume_counts ──► Sample ──────────────┐
//!                                          │                 │
//!                                          ▼                 ▼
//!                               filter_to_positive     Summary::from_sample
//!                                          │                 │
//!                                          ▼                 │
//!                        quiet::suppress_stdout(fit)         │
//!                                          │                 │
//!                                          └──────► Report ◄─┘
//! ```

pub mod fit;
pub mod quiet;
pub mod report;
pub mod summary;

use std::path::Path;

use crate::data::filter::filter_to_positive;
use crate::data::loader::consume_counts;
use crate::data::model::Sample;
use crate::error::{FitError, Result};

use fit::{fit_power_law, FitOptions, PowerLawFit};
use report::Report;
use summary::Summary;

/// Everything the program shows for one count file.
#[derive(Debug, Clone)]
pub struct Analysis {
    /// The full sample, in file order, for plotting.
    pub sample: Sample,
    pub fit: PowerLawFit,
    pub report: Report,
}

/// Run the pipeline on `path`. The file is deleted once it has been read,
/// before the fit runs, so a failing fit still consumes it.
pub fn analyze(path: &Path, options: FitOptions) -> Result<Analysis> {
    let sample = consume_counts(path)?;
    let positive = filter_to_positive(&sample);

    let fit = quiet::suppress_stdout(|| fit_power_law(&positive, options))
        .map_err(FitError::Suppression)??;
    log::info!(
        "Fitted alpha={:.4} above xmin={} ({} of {} values)",
        fit.alpha,
        fit.xmin,
        fit.n_tail,
        sample.len()
    );

    let summary = Summary::from_sample(&sample)?;
    let report = Report {
        ks_distance: fit.ks_distance,
        summary,
    };

    Ok(Analysis {
        sample,
        fit,
        report,
    })
}
