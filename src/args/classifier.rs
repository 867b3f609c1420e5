//! Argument classifier — expanded args → classified buckets.

use std::path::PathBuf;

/// Suffix marking a monitor-wrapper source (`Wrapper.java.topl`). Checked
/// before [`PROPERTY_SPEC_SUFFIX`], which it is a superset of.
pub const MONITOR_SOURCE_SUFFIX: &str = ".java.topl";
/// Suffix marking a property specification (`Prop.topl`).
pub const PROPERTY_SPEC_SUFFIX: &str = ".topl";
/// javac's output-directory flag. Consumed by the wrapper and re-injected
/// with the resolved directory, never forwarded from user input.
pub const OUTPUT_DIR_FLAG: &str = "-d";

/// Arguments partitioned by destination. Every input token lands in
/// exactly one bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifiedArgs {
    /// Arguments forwarded to javac unchanged (minus `-d` and its value).
    pub plain_args: Vec<String>,
    /// `*.java.topl` tokens with the trailing `.topl` stripped. Passed to
    /// toplc as `-e` references because they refer to the generated
    /// monitor and must be compiled after it.
    pub monitor_sources: Vec<String>,
    /// `*.topl` property specifications, passed to toplc positionally.
    pub property_specs: Vec<String>,
    /// Output directory declared via `-d`, if any.
    pub out_dir: Option<PathBuf>,
}

/// Classify the expanded argument list.
///
/// Two passes: a suffix pass that peels off monitor sources and property
/// specs, then a flag pass that captures the `-d` value. Bucket
/// membership is suffix-driven and order-independent; only the
/// `-d`/value pairing is positional. A trailing `-d` with no value is
/// dropped and leaves `out_dir` unset.
pub fn classify(args: &[String]) -> ClassifiedArgs {
    let mut monitor_sources = Vec::new();
    let mut property_specs = Vec::new();
    let mut rest = Vec::new();

    for arg in args {
        match arg.strip_suffix(PROPERTY_SPEC_SUFFIX) {
            Some(stem) if arg.ends_with(MONITOR_SOURCE_SUFFIX) => {
                monitor_sources.push(stem.to_string());
            }
            Some(_) => property_specs.push(arg.clone()),
            None => rest.push(arg.clone()),
        }
    }

    let mut plain_args = Vec::with_capacity(rest.len());
    let mut out_dir = None;
    let mut iter = rest.into_iter();
    while let Some(arg) = iter.next() {
        if arg == OUTPUT_DIR_FLAG {
            // Repeated -d: last one wins, every pair is consumed.
            if let Some(value) = iter.next() {
                out_dir = Some(PathBuf::from(value));
            }
        } else {
            plain_args.push(arg);
        }
    }

    ClassifiedArgs {
        plain_args,
        monitor_sources,
        property_specs,
        out_dir,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn no_suffix_tokens_means_empty_buckets() {
        let args = strings(&["-cp", "a.jar", "Foo.java"]);
        let c = classify(&args);
        assert!(c.monitor_sources.is_empty());
        assert!(c.property_specs.is_empty());
        assert_eq!(c.plain_args, args);
        assert!(c.out_dir.is_none());
    }

    #[test]
    fn monitor_source_loses_only_the_marker() {
        let c = classify(&strings(&["Wrapper.java.topl"]));
        assert_eq!(c.monitor_sources, strings(&["Wrapper.java"]));
        assert!(c.property_specs.is_empty());
        assert!(c.plain_args.is_empty());
    }

    #[test]
    fn property_spec_is_kept_verbatim() {
        let c = classify(&strings(&["Prop.topl"]));
        assert_eq!(c.property_specs, strings(&["Prop.topl"]));
        assert!(c.monitor_sources.is_empty());
    }

    #[test]
    fn mixed_buckets() {
        let c = classify(&strings(&[
            "-g",
            "Wrapper.java.topl",
            "Main.java",
            "Prop.topl",
        ]));
        assert_eq!(c.plain_args, strings(&["-g", "Main.java"]));
        assert_eq!(c.monitor_sources, strings(&["Wrapper.java"]));
        assert_eq!(c.property_specs, strings(&["Prop.topl"]));
    }

    #[test]
    fn output_dir_pair_is_consumed() {
        let c = classify(&strings(&["-cp", "a.jar", "-d", "out", "Foo.java"]));
        assert_eq!(c.plain_args, strings(&["-cp", "a.jar", "Foo.java"]));
        assert_eq!(c.out_dir, Some(PathBuf::from("out")));
    }

    #[test]
    fn repeated_output_dir_last_wins() {
        let c = classify(&strings(&["-d", "first", "-d", "second"]));
        assert!(c.plain_args.is_empty());
        assert_eq!(c.out_dir, Some(PathBuf::from("second")));
    }

    #[test]
    fn trailing_output_dir_flag_is_dropped() {
        let c = classify(&strings(&["Foo.java", "-d"]));
        assert_eq!(c.plain_args, strings(&["Foo.java"]));
        assert!(c.out_dir.is_none());
    }
}
