//! Sync report types and formatting.

use std::collections::BTreeMap;
use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use owo_colors::{OwoColorize, Stream};

use crate::figma::FrameReference;
use crate::utils::{plural_count, plural_s};

/// Delimiter of multi-line values in the GitHub Actions output file.
const OUTPUT_DELIMITER: &str = "FIGSYNC_EOF";

/// A frame written into a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncedFrame {
    /// Document path relative to the project root.
    pub document: String,
    /// Document file name, as listed in `updated_frames`.
    pub file_name: String,
    pub frame: FrameReference,
}

/// A frame or document that could not be synced.
#[derive(Debug, Clone)]
pub struct SyncFailure {
    /// Frame reference, file id, or document.
    pub target: String,
    /// Error chain.
    pub reason: String,
}

/// Outcome of one sync run.
#[derive(Debug, Default)]
pub struct SyncReport {
    /// Documents containing at least one frame reference.
    pub documents_with_frames: usize,
    /// Documents whose text changed (written unless dry run).
    pub documents_updated: Vec<String>,
    /// Frames synced, in processing order.
    pub synced: Vec<SyncedFrame>,
    /// Frames the API did not return, grouped by document.
    pub unresolved: BTreeMap<String, Vec<FrameReference>>,
    /// Failures, grouped by document.
    pub failed: BTreeMap<String, Vec<SyncFailure>>,
}

impl SyncReport {
    pub fn add_synced(&mut self, document: &str, file_name: &str, frame: FrameReference) {
        self.synced.push(SyncedFrame {
            document: document.to_string(),
            file_name: file_name.to_string(),
            frame,
        });
    }

    pub fn add_unresolved(&mut self, document: &str, frame: FrameReference) {
        self.unresolved
            .entry(document.to_string())
            .or_default()
            .push(frame);
    }

    pub fn add_failed(&mut self, document: &str, target: impl Into<String>, reason: String) {
        self.failed
            .entry(document.to_string())
            .or_default()
            .push(SyncFailure {
                target: target.into(),
                reason,
            });
    }

    pub fn unresolved_count(&self) -> usize {
        self.unresolved.values().map(Vec::len).sum()
    }

    pub fn failure_count(&self) -> usize {
        self.failed.values().map(Vec::len).sum()
    }

    /// True if any frame was synced.
    pub fn changes_detected(&self) -> bool {
        !self.synced.is_empty()
    }

    /// Print unresolved frames and failures (unresolved -> failed).
    pub fn print(&self) {
        if !self.unresolved.is_empty() {
            eprintln!();
            eprintln!(
                "{} ({})",
                "unresolved".if_supports_color(Stream::Stderr, |s| s.yellow()),
                plural_count(self.unresolved_count(), "frame")
            );
            for (path, frames) in &self.unresolved {
                eprintln!("[{}]", path.if_supports_color(Stream::Stderr, |s| s.cyan()));
                for frame in frames {
                    eprintln!("→ {frame}");
                }
            }
        }

        if !self.failed.is_empty() {
            eprintln!();
            eprintln!(
                "{} ({})",
                "failed".if_supports_color(Stream::Stderr, |s| s.red()),
                plural_count(self.failure_count(), "error")
            );
            for (path, failures) in &self.failed {
                eprintln!("[{}]", path.if_supports_color(Stream::Stderr, |s| s.cyan()));
                for failure in failures {
                    eprintln!("→ {}: {}", failure.target, failure.reason);
                }
            }
        }
    }

    /// `changes_detected` and `updated_frames` in GitHub Actions output format.
    pub fn github_output(&self) -> String {
        let mut out = format!("changes_detected={}\n", self.changes_detected());
        out.push_str(&format!("updated_frames<<{OUTPUT_DELIMITER}\n"));
        for synced in &self.synced {
            out.push_str(&format!("- {}: {}\n", synced.file_name, synced.frame.node_id));
        }
        out.push_str(OUTPUT_DELIMITER);
        out.push('\n');
        out
    }

    /// Append [`Self::github_output`] to the file at `path`.
    pub fn write_github_output(&self, path: &Path) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("failed to open {}", path.display()))?;
        file.write_all(self.github_output().as_bytes())
            .with_context(|| format!("failed to write {}", path.display()))
    }
}

impl fmt::Display for SyncReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let synced = self.synced.len();
        let updated = self.documents_updated.len();
        write!(
            f,
            "synced {} in {} document{}",
            plural_count(synced, "frame"),
            updated,
            plural_s(updated)
        )?;

        let unresolved = self.unresolved_count();
        if unresolved > 0 {
            write!(f, ", {unresolved} unresolved")?;
        }
        let failed = self.failure_count();
        if failed > 0 {
            write!(f, ", {failed} failed")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(node: &str) -> FrameReference {
        FrameReference::new("abc", node)
    }

    #[test]
    fn test_empty_report() {
        let report = SyncReport::default();
        assert!(!report.changes_detected());
        assert_eq!(report.to_string(), "synced 0 frames in 0 documents");
        assert_eq!(
            report.github_output(),
            "changes_detected=false\nupdated_frames<<FIGSYNC_EOF\nFIGSYNC_EOF\n"
        );
    }

    #[test]
    fn test_summary_counts() {
        let mut report = SyncReport::default();
        report.add_synced("docs/button.mdx", "button.mdx", frame("1:2"));
        report.documents_updated.push("docs/button.mdx".into());
        report.add_unresolved("docs/card.mdx", frame("9:9"));
        report.add_failed("docs/card.mdx", "abc/3:4", "HTTP 500".into());
        report.add_failed("docs/card.mdx", "abc/5:6", "HTTP 500".into());

        assert_eq!(report.unresolved_count(), 1);
        assert_eq!(report.failure_count(), 2);
        assert_eq!(
            report.to_string(),
            "synced 1 frame in 1 document, 1 unresolved, 2 failed"
        );
    }

    #[test]
    fn test_github_output_lists_frames() {
        let mut report = SyncReport::default();
        report.add_synced("docs/button.mdx", "button.mdx", frame("1:2"));
        report.add_synced("docs/button.mdx", "button.mdx", frame("1:3"));

        assert_eq!(
            report.github_output(),
            "changes_detected=true\n\
             updated_frames<<FIGSYNC_EOF\n\
             - button.mdx: 1:2\n\
             - button.mdx: 1:3\n\
             FIGSYNC_EOF\n"
        );
    }

    #[test]
    fn test_write_github_output_appends() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("output");
        std::fs::write(&path, "existing=1\n").unwrap();

        SyncReport::default().write_github_output(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("existing=1\nchanges_detected=false\n"));
    }
}
