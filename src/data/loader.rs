use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

use crate::error::{AnalysisError, Result};

use super::model::Sample;

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Read a count file: one integer per line, surrounding whitespace allowed.
///
/// Fails on the first line that does not parse; no partial sample is
/// returned. The file handle is closed before this returns.
pub fn read_counts(path: &Path) -> Result<Sample> {
    let file = File::open(path).map_err(|e| open_error(path, e))?;
    let reader = BufReader::new(file);

    let mut values = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line
            .map_err(|e| AnalysisError::io(format!("reading {}", path.display()), e))?;
        let trimmed = line.trim();
        let value = trimmed.parse::<i64>().map_err(|source| AnalysisError::Parse {
            path: path.to_path_buf(),
            line: i + 1,
            content: trimmed.to_string(),
            source,
        })?;
        values.push(value);
    }

    log::info!("Read {} values from {}", values.len(), path.display());
    Ok(Sample::new(values))
}

/// Read a count file and delete it once it has been read in full.
///
/// Count files are one-shot: a second call on the same path fails with
/// [`AnalysisError::NotFound`]. A file that fails to parse is left in place.
pub fn consume_counts(path: &Path) -> Result<Sample> {
    let sample = read_counts(path)?;
    std::fs::remove_file(path)
        .map_err(|e| AnalysisError::io(format!("deleting {}", path.display()), e))?;
    log::debug!("Deleted {}", path.display());
    Ok(sample)
}

fn open_error(path: &Path, e: std::io::Error) -> AnalysisError {
    match e.kind() {
        ErrorKind::NotFound => AnalysisError::NotFound {
            path: path.to_path_buf(),
        },
        _ => AnalysisError::io(format!("opening {}", path.display()), e),
    }
}
