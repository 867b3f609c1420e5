//! topljavac — a drop-in javac replacement that instruments compiled
//! classes with toplc.
//!
//! The wrapper is invoked exactly like javac. It expands `@argfile`
//! tokens, splits the argument vector into plain compiler arguments,
//! monitor-wrapper sources (`*.java.topl`) and property specifications
//! (`*.topl`), runs the real javac into an output directory, hands that
//! directory to toplc for instrumentation, and finally replays both
//! tools' diagnostics onto its own stderr.
//!
//! The process always exits 0, even on failure: a nonzero exit would
//! make the calling analysis driver silently fall back to plain javac
//! and skip instrumentation. Callers detect failure by scanning stderr
//! for lines starting with `E: ` or `failed (errorcode `.

pub mod args;
pub mod diagnostics;
pub mod error;
pub mod exec;
pub mod pipeline;
