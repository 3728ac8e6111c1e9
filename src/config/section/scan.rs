//! `[scan]` section configuration.
//!
//! Which documents are searched for frame references.
//!
//! # Example
//!
//! ```toml
//! [scan]
//! directory = "docs"          # relative to the project root
//! pattern = "**/*.mdx"        # glob, relative to `directory`
//! exclude = ["node_modules", ".git", "dist"]  # directory names to skip
//! ```
//!
//! Hidden files and directories are always skipped.

use std::path::PathBuf;

use glob::{MatchOptions, Pattern};
use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Directory to scan.
    pub directory: PathBuf,

    /// Glob matched against paths relative to `directory`.
    pub pattern: String,

    /// Directory names excluded from the walk.
    pub exclude: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            pattern: "**/*.mdx".to_string(),
            exclude: ["node_modules", ".git", ".github", "dist", "build"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

/// Options used for every document match.
pub const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

impl ScanConfig {
    pub const PATTERN: FieldPath = FieldPath::new("scan.pattern");
    pub const DIRECTORY: FieldPath = FieldPath::new("scan.directory");

    /// Compiled document pattern.
    pub fn matcher(&self) -> Result<Pattern, glob::PatternError> {
        Pattern::new(&self.pattern)
    }

    /// True if a directory with this name is skipped.
    pub fn is_excluded(&self, name: &str) -> bool {
        self.exclude.iter().any(|e| e == name)
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if let Err(err) = self.matcher() {
            diag.error(Self::PATTERN, format!("invalid glob `{}`: {}", self.pattern, err.msg));
        }
        if !self.directory.is_dir() {
            diag.error_with_hint(
                Self::DIRECTORY,
                format!("`{}` is not a directory", self.directory.display()),
                "paths are relative to the directory containing figsync.toml",
            );
        }
    }
}
