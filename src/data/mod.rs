/// Data layer: the sample type, reading count files, and the positivity filter.
///
/// Architecture:
/// ```text
///   counts.txt  (one integer per line)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse lines → Sample, then delete the file
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Sample   │  Vec<i64>, index = position in the file
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  keep strictly positive values → fit input
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
