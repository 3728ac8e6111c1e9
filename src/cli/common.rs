//! Common utilities shared across CLI commands.

use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use glob::Pattern;
use jwalk::WalkDir;

use crate::config::ScanConfig;
use crate::config::section::scan::MATCH_OPTIONS;
use crate::utils::path::resolve_path;

/// Collect documents based on CLI paths
///
/// With no paths the configured scan directory is walked. Explicit files are
/// taken as given; directories are walked with the scan pattern and excludes.
/// The result is sorted and free of duplicates.
pub fn collect_documents(paths: &[PathBuf], scan: &ScanConfig) -> Result<Vec<PathBuf>> {
    // Handle stdin case: read paths from stdin when `-` is passed
    let paths: Vec<PathBuf> = if paths.len() == 1 && paths[0].as_os_str() == "-" {
        read_paths_from_stdin()?
    } else {
        paths.to_vec()
    };

    let pattern = scan.matcher()?;

    let mut documents = if paths.is_empty() {
        walk_documents(&scan.directory, &pattern, scan)
    } else {
        Vec::new()
    };

    for path in &paths {
        let resolved = resolve_path(path, &scan.directory);

        if resolved.is_file() {
            documents.push(resolved);
        } else if resolved.is_dir() {
            documents.extend(walk_documents(&resolved, &pattern, scan));
        } else {
            let scan_relative = scan.directory.join(path);
            bail!(
                "Path not found: {}\n  Tried:\n    - {}\n    - {}",
                path.display(),
                path.display(),
                scan_relative.display()
            );
        }
    }

    documents.sort();
    documents.dedup();
    Ok(documents)
}

/// Walk `dir` for files matching `pattern` (relative to `dir`).
///
/// Hidden entries and excluded directory names are pruned before descending.
pub fn walk_documents(dir: &Path, pattern: &Pattern, scan: &ScanConfig) -> Vec<PathBuf> {
    let scan = scan.clone();

    WalkDir::new(dir)
        .sort(true)
        .skip_hidden(true)
        .process_read_dir(move |_depth, _path, _state, children| {
            children.retain(|entry| {
                entry.as_ref().map_or(true, |e| {
                    !(e.file_type().is_dir()
                        && e.file_name().to_str().is_some_and(|name| scan.is_excluded(name)))
                })
            });
        })
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path())
        .filter(|path| {
            path.strip_prefix(dir)
                .is_ok_and(|rel| pattern.matches_path_with(rel, MATCH_OPTIONS))
        })
        .collect()
}

/// Read file paths from stdin, one per line
pub fn read_paths_from_stdin() -> Result<Vec<PathBuf>> {
    let stdin = io::stdin();
    let mut paths = Vec::new();

    for line in stdin.lock().lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            paths.push(PathBuf::from(trimmed));
        }
    }

    Ok(paths)
}
