//! Pipeline controller — sequences the two tool stages.
//!
//! ```text
//! classify → run javac (capture merged) → relocate → run toplc (inherit)
//!          → flush diagnostics
//! ```
//!
//! Each stage is a function over the immutable [`ClassifiedArgs`] and
//! [`Staging`] values, so every transition is independently testable.
//! Any failure short-circuits the remaining stages; `main` turns the
//! error into the fail-soft stderr report.

mod staging;

pub use staging::Staging;

use std::io::{self, Write};
use std::path::Path;
use std::process::ExitStatus;

use crate::args::{self, ClassifiedArgs, OUTPUT_DIR_FLAG};
use crate::diagnostics;
use crate::error::WrapperError;
use crate::exec::{run_tool, StreamPolicy};

/// The compiler this wrapper stands in for.
pub const COMPILER: &str = "javac";
/// The instrumentation tool run over the compiled classes.
pub const INSTRUMENTOR: &str = "toplc";
/// Constant path, relative to the working directory, where toplc leaves
/// compiler-stage diagnostics for the wrapper to replay. Cross-tool
/// contract; must stay in sync with toplc.
pub const INSTRUMENTOR_DIAGNOSTICS: &str = "javac.err.topl";

/// Run the whole pipeline over the raw argument vector.
pub fn run(raw_args: &[String]) -> Result<(), WrapperError> {
    let classified = classify_args(raw_args)?;
    let staging = Staging::prepare(classified.out_dir.clone())?;
    run_javac(&classified, &staging)?;
    staging.relocate()?;
    run_toplc(&classified, &staging)?;
    flush_diagnostics(&staging)
}

/// Expand argfiles, then classify. Fails only on a malformed or
/// unreadable argfile.
fn classify_args(raw_args: &[String]) -> Result<ClassifiedArgs, WrapperError> {
    let expanded = args::expand(raw_args)?;
    Ok(args::classify(&expanded))
}

/// Invoke javac with the plain arguments plus an explicit `-d` pointing
/// at the resolved output directory. Both streams are merged into the
/// capture file during the run.
fn run_javac(classified: &ClassifiedArgs, staging: &Staging) -> Result<(), WrapperError> {
    let mut argv = classified.plain_args.clone();
    argv.push(OUTPUT_DIR_FLAG.to_string());
    argv.push(staging.out_dir().display().to_string());

    let policy = StreamPolicy::MergeTo(staging.capture().to_path_buf());
    let status = run_tool(COMPILER, &argv, &policy)?;
    check_exit(COMPILER, &argv, status)?;

    tracing::info!(out_dir = %staging.out_dir().display(), "javac finished successfully");
    Ok(())
}

/// Invoke toplc over the staged classes. Streams are inherited so its
/// diagnostics reach the user immediately, without capture.
fn run_toplc(classified: &ClassifiedArgs, staging: &Staging) -> Result<(), WrapperError> {
    let mut argv = Vec::new();
    for source in &classified.monitor_sources {
        argv.push("-e".to_string());
        argv.push(source.clone());
    }
    argv.push("-s".to_string());
    argv.push("-i".to_string());
    argv.push(staging.in_dir().display().to_string());
    argv.push("-o".to_string());
    argv.push(staging.out_dir().display().to_string());
    argv.extend(classified.property_specs.iter().cloned());

    let status = run_tool(INSTRUMENTOR, &argv, &StreamPolicy::Inherit)?;
    check_exit(INSTRUMENTOR, &argv, status)?;

    tracing::info!("toplc finished successfully");
    Ok(())
}

/// Replay the instrumentor's fixed-path diagnostics, then the captured
/// javac output, onto the wrapper's stderr. The fixed-path file is a
/// contract, not optional: its absence is fatal.
fn flush_diagnostics(staging: &Staging) -> Result<(), WrapperError> {
    let mut stderr = io::stderr().lock();
    diagnostics::replay_all(
        &[Path::new(INSTRUMENTOR_DIAGNOSTICS), staging.capture()],
        &mut stderr,
    )?;
    stderr.flush().map_err(|e| WrapperError::Diagnostics {
        path: Path::new(INSTRUMENTOR_DIAGNOSTICS).to_path_buf(),
        source: e,
    })
}

/// Turn a nonzero exit into the "failed subprocess" report carrying the
/// exact command line. The stage runner itself never interprets codes.
fn check_exit(program: &str, argv: &[String], status: ExitStatus) -> Result<(), WrapperError> {
    if status.success() {
        return Ok(());
    }
    let mut command = Vec::with_capacity(argv.len() + 1);
    command.push(program.to_string());
    command.extend(argv.iter().cloned());
    Err(WrapperError::CommandFailed {
        // Termination by signal has no code; report -1 rather than guess.
        code: status.code().unwrap_or(-1),
        command,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[cfg(unix)]
    fn exit_status(code: i32) -> ExitStatus {
        use std::process::Command;
        Command::new("sh")
            .arg("-c")
            .arg(format!("exit {code}"))
            .status()
            .unwrap()
    }

    #[cfg(unix)]
    #[test]
    fn check_exit_passes_success_through() {
        assert!(check_exit("javac", &[], exit_status(0)).is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn check_exit_reports_code_and_command() {
        let argv = strings(&["-d", "out", "Foo.java"]);
        match check_exit("javac", &argv, exit_status(2)) {
            Err(WrapperError::CommandFailed { code, command }) => {
                assert_eq!(code, 2);
                assert_eq!(command, strings(&["javac", "-d", "out", "Foo.java"]));
            }
            other => panic!("expected command failure, got {other:?}"),
        }
    }

    #[test]
    fn classify_args_expands_then_classifies() {
        let mut argfile = tempfile::NamedTempFile::new().unwrap();
        argfile.write_all(b"Prop.topl\nFoo.java\n").unwrap();

        let raw = strings(&["-g", &format!("@{}", argfile.path().display())]);
        let classified = classify_args(&raw).unwrap();
        assert_eq!(classified.plain_args, strings(&["-g", "Foo.java"]));
        assert_eq!(classified.property_specs, strings(&["Prop.topl"]));
    }
}
