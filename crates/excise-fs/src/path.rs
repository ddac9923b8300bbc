//! Output path derivation and guards

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Suffix appended to the input path when no output path is given.
pub const OUTPUT_SUFFIX: &str = ".new";

/// The default output path for `input`: the same path with `.new` appended.
///
/// ```
/// use excise_fs::path::default_output;
/// use std::path::Path;
///
/// assert_eq!(default_output(Path::new("src/page.tsx")), Path::new("src/page.tsx.new"));
/// ```
pub fn default_output(input: &Path) -> PathBuf {
    let mut name = OsString::from(input.as_os_str());
    name.push(OUTPUT_SUFFIX);
    PathBuf::from(name)
}

/// Fail with `OutputIsInput` if `output` refers to the same file as `input`.
///
/// Both paths are canonicalized when possible, so `./a/../page.tsx` and
/// `page.tsx` compare equal. An output that does not exist yet is compared
/// through its canonicalized parent directory.
pub fn ensure_distinct(input: &Path, output: &Path) -> Result<()> {
    if resolve(input) == resolve(output) {
        return Err(Error::OutputIsInput {
            path: output.to_path_buf(),
        });
    }
    Ok(())
}

/// Fail with `OutputExists` if something is already at `output`.
pub fn ensure_absent(output: &Path) -> Result<()> {
    if output.exists() {
        return Err(Error::OutputExists {
            path: output.to_path_buf(),
        });
    }
    Ok(())
}

/// Resolve `path` relative to `base` unless it is already absolute.
pub fn resolve_against(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

fn resolve(path: &Path) -> PathBuf {
    if let Ok(canonical) = dunce::canonicalize(path) {
        return canonical;
    }
    match (path.parent(), path.file_name()) {
        (Some(parent), Some(name)) => {
            let parent = if parent.as_os_str().is_empty() {
                Path::new(".")
            } else {
                parent
            };
            dunce::canonicalize(parent)
                .map(|p| p.join(name))
                .unwrap_or_else(|_| path.to_path_buf())
        }
        _ => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_output_appends_suffix() {
        assert_eq!(
            default_output(Path::new("page.tsx")),
            PathBuf::from("page.tsx.new")
        );
    }

    #[test]
    fn same_relative_path_is_rejected() {
        let err = ensure_distinct(Path::new("x/page.tsx"), Path::new("x/page.tsx")).unwrap_err();
        assert!(matches!(err, Error::OutputIsInput { .. }));
    }

    #[test]
    fn resolve_against_keeps_absolute() {
        let abs = std::env::temp_dir();
        assert_eq!(resolve_against(Path::new("base"), &abs), abs);
        assert_eq!(
            resolve_against(Path::new("base"), Path::new("a.txt")),
            PathBuf::from("base/a.txt")
        );
    }
}
