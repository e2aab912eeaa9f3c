use std::io::{self, Write};

use gag::Gag;

// ---------------------------------------------------------------------------
// Scoped stdout suppression
// ---------------------------------------------------------------------------

/// While alive, the process's standard output goes to the null device.
///
/// Redirection happens at the file-descriptor level, so it also swallows
/// output that bypasses Rust's `stdout()` handle. Buffered output is flushed
/// on both sides of the redirection: what was printed before the guard still
/// reaches the terminal, and what was printed under it does not leak out
/// after it is dropped.
pub struct StdoutSilencer {
    _gag: Gag,
}

impl StdoutSilencer {
    pub fn new() -> io::Result<Self> {
        io::stdout().flush()?;
        let gag = Gag::stdout()?;
        Ok(StdoutSilencer { _gag: gag })
    }
}

impl Drop for StdoutSilencer {
    fn drop(&mut self) {
        // Runs before the gag field is dropped, i.e. while still redirected.
        let _ = io::stdout().flush();
    }
}

/// Run `f` with stdout silenced and return its result.
///
/// Stdout is restored when `f` returns, including when it returns an error
/// or panics.
pub fn suppress_stdout<T>(f: impl FnOnce() -> T) -> io::Result<T> {
    let _silencer = StdoutSilencer::new()?;
    Ok(f())
}

#[cfg(test)]
mod tests {
    use super::*;

    // The redirection is process-global, so everything that touches it
    // lives in this one test to keep parallel tests from colliding. What it
    // silences is checked end to end in tests/cli.rs, since the test
    // harness captures `println!` before it reaches the descriptor.
    #[test]
    fn restores_stdout_after_every_call() {
        let value = suppress_stdout(|| 42).unwrap();
        assert_eq!(value, 42);

        let failed: Result<(), &str> = suppress_stdout(|| Err("fit blew up")).unwrap();
        assert!(failed.is_err());

        let panicked = std::panic::catch_unwind(|| {
            let _ = suppress_stdout::<()>(|| panic!("inside"));
        });
        assert!(panicked.is_err());

        // A live redirect would make the next one fail with AlreadyExists.
        let again = suppress_stdout(|| "released").unwrap();
        assert_eq!(again, "released");
    }
}
