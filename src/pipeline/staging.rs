//! Staging state handed between the compiler and instrumentor stages.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::{Builder, NamedTempFile, TempDir};

use crate::error::WrapperError;

/// Filesystem state shared by the two tool stages.
///
/// `out_dir` receives javac's classes, is renamed onto `in_dir` for
/// toplc to read, and the original path then becomes toplc's fresh
/// output target. The temp guards make cleanup best-effort: the staged
/// input and the capture file disappear when the pipeline ends, while a
/// temp-created output directory is persisted because it holds the
/// product.
pub struct Staging {
    out_dir: PathBuf,
    in_guard: TempDir,
    capture_guard: NamedTempFile,
}

impl Staging {
    /// Resolve directories before the compiler stage.
    ///
    /// A declared output directory is created along with any missing
    /// ancestors; an absent one becomes a fresh uniquely-named temp
    /// directory. Either way the directory exists when javac runs.
    pub fn prepare(declared_out: Option<PathBuf>) -> Result<Self, WrapperError> {
        let out_dir = match declared_out {
            Some(dir) => {
                fs::create_dir_all(&dir).map_err(|e| WrapperError::Fs {
                    op: "failed to create output directory",
                    path: dir.clone(),
                    source: e,
                })?;
                dir
            }
            None => Builder::new()
                .prefix("topljavac-out")
                .tempdir()
                .map_err(|e| WrapperError::Fs {
                    op: "failed to create temp output directory under",
                    path: std::env::temp_dir(),
                    source: e,
                })?
                .keep(),
        };

        let in_guard = Builder::new()
            .prefix("topljavac-in")
            .tempdir()
            .map_err(|e| WrapperError::Fs {
                op: "failed to create staging directory under",
                path: std::env::temp_dir(),
                source: e,
            })?;

        let capture_guard = Builder::new()
            .prefix("topljavac")
            .suffix(".stderr")
            .tempfile()
            .map_err(|e| WrapperError::Fs {
                op: "failed to create capture file under",
                path: std::env::temp_dir(),
                source: e,
            })?;

        Ok(Self {
            out_dir,
            in_guard,
            capture_guard,
        })
    }

    /// Where javac writes and, after [`relocate`](Self::relocate), where
    /// toplc writes.
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// The instrumentor's input directory.
    pub fn in_dir(&self) -> &Path {
        self.in_guard.path()
    }

    /// The merged javac stdout+stderr capture file.
    pub fn capture(&self) -> &Path {
        self.capture_guard.path()
    }

    /// Hand the compiled classes to the instrumentor: drop the empty
    /// placeholder and rename the output directory onto it. The two
    /// paths never hold the same contents at once.
    pub fn relocate(&self) -> Result<(), WrapperError> {
        fs::remove_dir(self.in_dir()).map_err(|e| WrapperError::Fs {
            op: "failed to remove staging placeholder",
            path: self.in_dir().to_path_buf(),
            source: e,
        })?;
        fs::rename(&self.out_dir, self.in_dir()).map_err(|e| WrapperError::Fs {
            op: "failed to move compiled output to",
            path: self.in_dir().to_path_buf(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declared_out_dir_is_created_with_ancestors() {
        let root = tempfile::tempdir().unwrap();
        let declared = root.path().join("a/b/classes");
        let staging = Staging::prepare(Some(declared.clone())).unwrap();
        assert!(declared.is_dir());
        assert_eq!(staging.out_dir(), declared);
    }

    #[test]
    fn absent_out_dir_gets_a_fresh_temp_dir() {
        let staging = Staging::prepare(None).unwrap();
        assert!(staging.out_dir().is_dir());
        assert!(staging.in_dir().is_dir());
        assert_ne!(staging.out_dir(), staging.in_dir());
    }

    #[test]
    fn relocate_moves_output_onto_placeholder() {
        let root = tempfile::tempdir().unwrap();
        let declared = root.path().join("classes");
        let staging = Staging::prepare(Some(declared.clone())).unwrap();
        fs::write(staging.out_dir().join("Foo.class"), b"bytecode").unwrap();

        staging.relocate().unwrap();

        assert!(staging.in_dir().join("Foo.class").is_file());
        assert!(!declared.exists());
    }

    #[test]
    fn relocate_fails_when_placeholder_was_removed() {
        let root = tempfile::tempdir().unwrap();
        let staging = Staging::prepare(Some(root.path().join("classes"))).unwrap();
        fs::remove_dir(staging.in_dir()).unwrap();
        assert!(matches!(
            staging.relocate(),
            Err(WrapperError::Fs { .. })
        ));
    }
}
