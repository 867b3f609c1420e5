//! Argument handling pipeline for topljavac.
//!
//! ```text
//! Raw argv → Expand (@argfiles) → Classify → ClassifiedArgs
//! ```
//!
//! Each stage is a pure function that can be unit-tested independently.
//! Directory resolution happens later, in the pipeline controller, which
//! is the only component that touches the filesystem.

mod argfile;
mod classifier;

pub use argfile::expand;
pub use classifier::{
    classify, ClassifiedArgs, MONITOR_SOURCE_SUFFIX, OUTPUT_DIR_FLAG, PROPERTY_SPEC_SUFFIX,
};
