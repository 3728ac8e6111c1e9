//! Filesystem path helpers.

use std::path::{Path, PathBuf};

/// Absolute form of `path`.
///
/// Uses `canonicalize()` when the path exists; otherwise an absolute path is
/// returned as-is and a relative one is joined onto the working directory.
#[inline]
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
        }
    })
}

/// Resolve a command-line path.
///
/// Tried relative to the working directory first, then relative to
/// `fallback_dir` (the scan directory), so both `docs/button.mdx` and
/// `button.mdx` work from the project root.
#[inline]
pub fn resolve_path(path: &Path, fallback_dir: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    if path.exists() {
        return normalize_path(path);
    }
    normalize_path(&fallback_dir.join(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path_is_absolute() {
        assert!(normalize_path(Path::new("relative/doc.mdx")).is_absolute());
        assert_eq!(
            normalize_path(Path::new("/no/such/doc.mdx")),
            PathBuf::from("/no/such/doc.mdx")
        );
    }

    #[test]
    fn test_resolve_path_fallback() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(dir.path().join("button.mdx"), "").unwrap();

        assert_eq!(
            resolve_path(Path::new("button.mdx"), dir.path()),
            normalize_path(&dir.path().join("button.mdx"))
        );
        assert_eq!(
            resolve_path(Path::new("/abs/doc.mdx"), dir.path()),
            PathBuf::from("/abs/doc.mdx")
        );
    }
}
