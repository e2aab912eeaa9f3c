//! Headless core of `powerlaw-scope`: reading count files, the power-law
//! fit, descriptive statistics and the relationship-graph generator that
//! produces the count files in the first place.
//!
//! The interactive scatter view lives in the `powerlaw-scope` binary.

pub mod analysis;
pub mod data;
pub mod error;
pub mod graph;

pub use analysis::{analyze, Analysis};
pub use error::{AnalysisError, FitError};
