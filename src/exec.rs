//! Subprocess launcher with a first-class stream policy.

use std::fs::File;
use std::path::PathBuf;
use std::process::{Command, ExitStatus, Stdio};

use crate::error::WrapperError;

/// Where a tool's standard output and standard error go.
///
/// A subprocess writing to two separate unconsumed pipes can fill one
/// buffer and block forever while the wrapper waits on the other, so the
/// policy always covers both streams together: merged into one file,
/// inherited from the wrapper, or discarded. There is no variant that
/// captures one stream and leaves the other on a pipe.
#[derive(Debug, Clone)]
pub enum StreamPolicy {
    /// Merge stdout and stderr into one file at the given path.
    MergeTo(PathBuf),
    /// Forward both streams to the wrapper's own stdout/stderr, unbuffered.
    Inherit,
    /// Route both streams to the null device.
    Discard,
}

/// Launch `program` with `args`, block until it terminates, and return
/// its exit status verbatim. Exit codes are never interpreted here; the
/// pipeline controller decides fatality.
pub fn run_tool(
    program: &str,
    args: &[String],
    policy: &StreamPolicy,
) -> Result<ExitStatus, WrapperError> {
    let mut cmd = Command::new(program);
    cmd.args(args);

    match policy {
        StreamPolicy::MergeTo(path) => {
            let out = File::create(path).map_err(|e| WrapperError::Fs {
                op: "failed to create capture file",
                path: path.clone(),
                source: e,
            })?;
            // Both handles share one open file description, so the two
            // streams interleave at a single offset like a shell's 2>&1.
            let err = out.try_clone().map_err(|e| WrapperError::Fs {
                op: "failed to clone capture handle for",
                path: path.clone(),
                source: e,
            })?;
            cmd.stdout(Stdio::from(out)).stderr(Stdio::from(err));
        }
        StreamPolicy::Inherit => {
            cmd.stdout(Stdio::inherit()).stderr(Stdio::inherit());
        }
        StreamPolicy::Discard => {
            cmd.stdout(Stdio::null()).stderr(Stdio::null());
        }
    }

    tracing::debug!(program, ?args, ?policy, "launching tool");
    cmd.status().map_err(|e| WrapperError::Spawn {
        program: program.to_string(),
        source: e,
    })
}
