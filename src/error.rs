//! Error taxonomy for the wrapper pipeline.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can abort the wrapper pipeline.
///
/// Every variant is reported as a single stderr line and terminates the
/// process with exit code 0 (fail-soft, see `main`). Nothing is retried.
#[derive(Debug, Error)]
pub enum WrapperError {
    /// An argfile contained an empty line. There is no quoting defined
    /// for blank entries, so this is treated as malformed input.
    #[error("empty line in argfile")]
    EmptyArgfileLine,

    /// An `@argfile` could not be opened or read.
    #[error("failed to read argfile '{}': {source}", .path.display())]
    Argfile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A tool could not be launched at all (not found, not executable).
    #[error("failed to launch '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    /// A tool ran and returned a nonzero exit code.
    ///
    /// Reported as `failed (errorcode N) to run: <command>` instead of
    /// the generic `E: ` format; `command` is the exact argv, program
    /// name first.
    #[error("command returned nonzero error code")]
    CommandFailed { code: i32, command: Vec<String> },

    /// A staging-directory operation failed.
    #[error("{op} '{}': {source}", .path.display())]
    Fs {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A diagnostics source could not be read or replayed.
    #[error("failed to replay diagnostics from '{}': {source}", .path.display())]
    Diagnostics {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
