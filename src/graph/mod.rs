//! Company relationship graph and the degree distributions that feed the
//! count files analysed by `powerlaw-scope`.
//!
//! ```text
//!   links.csv ──► model::load_links ──► AdjacencyList
//!                                            │
//!                                            ▼
//!                          degree::degree_distribution(d)
//!                                            │
//!                                            ▼
//!                              Distance_<d>_Distribution.txt
//! ```

pub mod degree;
pub mod model;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = core::result::Result<T, GraphError>;
