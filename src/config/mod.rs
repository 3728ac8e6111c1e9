//! Project configuration management for `figsync.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── api        # [api]
//! │   ├── export     # [export]
//! │   ├── scan       # [scan]
//! │   └── specs      # [specs]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # SyncConfig (this file)
//! ```
//!
//! The config file is optional. Without one every section takes its
//! defaults and the working directory is the project root.
//!
//! The loaded [`SyncConfig`] is passed down explicitly; nothing reads it
//! from global state.

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use section::{ApiConfig, ExportConfig, ScanConfig, SpecsConfig};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::{
    cli::{Cli, Commands, SyncArgs},
    debug, log,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Default config file name.
pub const CONFIG_FILE: &str = "figsync.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing figsync.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SyncConfig {
    /// Absolute path to the config file, if one was found (internal use only)
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// Project root directory - parent of config file or cwd (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Screenshot export settings
    #[serde(default)]
    pub export: ExportConfig,

    /// Generated specification categories
    #[serde(default)]
    pub specs: SpecsConfig,

    /// Document discovery
    #[serde(default)]
    pub scan: ScanConfig,

    /// Design API access
    #[serde(default)]
    pub api: ApiConfig,
}

impl SyncConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd for the config file. The project root is
    /// the config file's parent directory, or cwd when there is none.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let mut config = match find_config_file(&cli.config) {
            Some(path) => {
                debug!("config"; "using {}", path.display());
                let mut config = Self::from_path(&path)?;
                config.config_path = Some(path);
                config
            }
            None if cli.config != Path::new(CONFIG_FILE) => {
                return Err(ConfigError::Io(
                    cli.config.clone(),
                    std::io::Error::from(std::io::ErrorKind::NotFound),
                )
                .into());
            }
            None => {
                debug!("config"; "no {} found, using defaults", CONFIG_FILE);
                Self::default()
            }
        };

        config.finalize(cli, &cwd);
        config.validate()?;
        Ok(config)
    }

    /// Finalize configuration after loading.
    fn finalize(&mut self, cli: &Cli, cwd: &Path) {
        let root = self
            .config_path
            .as_deref()
            .and_then(Path::parent)
            .map_or_else(|| cwd.to_path_buf(), Path::to_path_buf);

        self.set_root(&root);
        self.normalize_paths();
        self.apply_command_options(cli);
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {field}");
        }
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.root = path.to_path_buf();
    }

    /// Get path relative to the project root
    pub fn root_relative(&self, path: impl AsRef<Path>) -> PathBuf {
        path.as_ref()
            .strip_prefix(&self.root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.as_ref().to_path_buf())
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply command-specific configuration options.
    fn apply_command_options(&mut self, cli: &Cli) {
        match &cli.command {
            Commands::Sync { args } => self.apply_sync_args(args),
            // Check is offline and reads nothing from the export section
            Commands::Check { .. } => {}
        }
    }

    /// CLI flags override config values.
    fn apply_sync_args(&mut self, args: &SyncArgs) {
        Self::update_option(&mut self.export.scale, args.scale.as_ref());
        Self::update_option(&mut self.export.format, args.format.as_ref());
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // path normalization
    // ========================================================================

    /// Normalize paths relative to the root directory.
    fn normalize_paths(&mut self) {
        let root = crate::utils::path::normalize_path(&self.root);
        self.scan.directory = crate::utils::path::normalize_path(&root.join(&self.scan.directory));
        self.set_root(&root);
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate every section.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.export.validate(&mut diag);
        self.specs.validate(&mut diag);
        self.scan.validate(&mut diag);
        self.api.validate(&mut diag);

        diag.print_warnings();

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config content.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> SyncConfig {
    let (parsed, ignored) = SyncConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ImageFormat;
    use clap::Parser;

    #[test]
    fn test_from_str_invalid_toml() {
        assert!(SyncConfig::from_str("[export\nscale = 2").is_err());
    }

    #[test]
    fn test_from_str_wrong_type() {
        let err = SyncConfig::from_str("[export]\nscale = \"big\"").unwrap_err();
        assert!(err.downcast_ref::<ConfigError>().is_some());
    }

    #[test]
    fn test_get_root_default() {
        let config = SyncConfig::default();
        assert_eq!(config.get_root(), Path::new(""));
        assert!(config.config_path.is_none());
    }

    #[test]
    fn test_root_relative() {
        let mut config = SyncConfig::default();
        config.set_root(Path::new("/project"));
        assert_eq!(
            config.root_relative("/project/docs/button.mdx"),
            PathBuf::from("docs/button.mdx")
        );
        assert_eq!(config.root_relative("/elsewhere/a.mdx"), PathBuf::from("/elsewhere/a.mdx"));
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[export]\nscale = 1\n[deploy]\ntarget = \"pages\"";
        let (config, ignored) = SyncConfig::parse_with_ignored(content).unwrap();

        assert_eq!(config.export.scale, 1.0);
        assert!(ignored.iter().any(|f| f.contains("deploy")));
    }

    #[test]
    fn test_no_unknown_fields() {
        let content = "[specs]\ncolors = false\n[scan]\npattern = \"**/*.md\"";
        let (_, ignored) = SyncConfig::parse_with_ignored(content).unwrap();
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_finalize_resolves_paths_and_cli_overrides() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("docs")).unwrap();

        let mut config = test_parse_config("[scan]\ndirectory = \"docs\"\n[export]\nscale = 1");
        config.config_path = Some(dir.path().join(CONFIG_FILE));

        let cli = Cli::parse_from(["figsync", "sync", "--scale", "3", "--format", "jpg"]);
        config.finalize(&cli, Path::new("/unused"));

        assert_eq!(config.get_root(), crate::utils::path::normalize_path(dir.path()));
        assert_eq!(config.scan.directory, config.get_root().join("docs"));
        assert_eq!(config.export.scale, 3.0);
        assert_eq!(config.export.format, ImageFormat::Jpg);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_finalize_without_config_uses_cwd() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut config = SyncConfig::default();

        let cli = Cli::parse_from(["figsync", "check"]);
        config.finalize(&cli, dir.path());

        assert_eq!(config.get_root(), crate::utils::path::normalize_path(dir.path()));
        assert_eq!(config.scan.directory, config.get_root());
        assert_eq!(config.export.scale, 2.0);
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let mut config = test_parse_config(
            "[export]\nscale = 0\nscreenshot_dir = \"\"\n[api]\nbase_url = \"nope\"",
        );
        config.scan.directory = std::env::temp_dir();

        let err = config.validate().unwrap_err();
        match err.downcast_ref::<ConfigError>() {
            Some(ConfigError::Diagnostics(diag)) => assert_eq!(diag.len(), 3),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
