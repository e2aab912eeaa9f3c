use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Pipeline errors
// ---------------------------------------------------------------------------

/// Every way the read → filter → fit → report pipeline can fail.
/// All of them are terminal for the program.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("File not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{}:{line}: '{content}' is not an integer", path.display())]
    Parse {
        path: PathBuf,
        /// 1-based line number.
        line: usize,
        content: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Power-law fit failed")]
    Fit(#[from] FitError),

    #[error("Cannot summarise an empty sample")]
    EmptySample,

    #[error("Could not open plot window: {0}")]
    Display(String),
}

impl AnalysisError {
    pub(crate) fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        AnalysisError::Io {
            context: context.into(),
            source,
        }
    }
}

// ---------------------------------------------------------------------------
// Fit errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum FitError {
    #[error("no positive values to fit")]
    EmptySample,

    #[error("need at least two distinct values, got {0}")]
    TooFewDistinctValues(usize),

    #[error("no candidate cutoff produced a finite exponent and distance")]
    NoValidFit,

    #[error("could not silence stdout: {0}")]
    Suppression(#[source] std::io::Error),
}

pub type Result<T> = core::result::Result<T, AnalysisError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_reason_appears_once_in_error_chain() {
        let err = anyhow::Error::from(AnalysisError::from(FitError::TooFewDistinctValues(1)));
        let text = format!("{err:#}");
        assert_eq!(
            text,
            "Power-law fit failed: need at least two distinct values, got 1"
        );
    }
}
