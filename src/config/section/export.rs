//! `[export]` section configuration.
//!
//! How screenshots are rendered and where they are written.
//!
//! # Example
//!
//! ```toml
//! [export]
//! scale = 2                           # 0.01 to 4
//! format = "png"                      # png | jpg | svg | pdf
//! screenshot_dir = "figma-screenshots" # next to each document
//! embed_image = false                 # add ![node](path) after the placeholder
//! ```

use serde::{Deserialize, Serialize};

use crate::api::{ExportOptions, ImageFormat};
use crate::config::{ConfigDiagnostics, FieldPath};

const MIN_SCALE: f64 = 0.01;
const MAX_SCALE: f64 = 4.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Image scale factor.
    pub scale: f64,

    /// Rendered image format.
    pub format: ImageFormat,

    /// Directory name for screenshots, relative to each document.
    pub screenshot_dir: String,

    /// Insert a markdown image below the screenshot placeholder.
    pub embed_image: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            scale: 2.0,
            format: ImageFormat::Png,
            screenshot_dir: "figma-screenshots".to_string(),
            embed_image: false,
        }
    }
}

impl ExportConfig {
    pub const SCALE: FieldPath = FieldPath::new("export.scale");
    pub const SCREENSHOT_DIR: FieldPath = FieldPath::new("export.screenshot_dir");

    pub const fn options(&self) -> ExportOptions {
        ExportOptions {
            scale: self.scale,
            format: self.format,
        }
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !(MIN_SCALE..=MAX_SCALE).contains(&self.scale) {
            diag.error_with_hint(
                Self::SCALE,
                format!("scale {} is out of range", self.scale),
                format!("use a value between {MIN_SCALE} and {MAX_SCALE}"),
            );
        }

        let dir = self.screenshot_dir.as_str();
        if dir.is_empty() {
            diag.error(Self::SCREENSHOT_DIR, "must not be empty");
        } else if dir.contains(['/', '\\']) || dir == "." || dir == ".." {
            diag.error_with_hint(
                Self::SCREENSHOT_DIR,
                format!("`{dir}` is not a plain directory name"),
                "screenshots are always written next to the document, e.g. \"figma-screenshots\"",
            );
        }
    }
}
