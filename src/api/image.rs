//! Screenshot files next to the referencing document.

use std::io;
use std::path::{Path, PathBuf};

use super::ExportOptions;
use crate::figma::format_number;

/// File name of a node's screenshot: `<node>-@<scale>x.<ext>`.
///
/// Bytes outside `[A-Za-z0-9.-]` are written as `_XX` (uppercase hex), `_`
/// included, so distinct node ids never share a file: `1:2` becomes
/// `1_3A2`, `1-2` stays `1-2`. `%` is avoided since the name is also used
/// as a link target in the document.
pub fn screenshot_file_name(node_id: &str, export: &ExportOptions) -> String {
    let mut stem = String::with_capacity(node_id.len());
    for byte in node_id.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'.') {
            stem.push(char::from(byte));
        } else {
            stem.push_str(&format!("_{byte:02X}"));
        }
    }
    format!(
        "{stem}-@{}x.{}",
        format_number(export.scale),
        export.format.as_str()
    )
}

/// Where a screenshot lives, both on disk and as written in the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenshotTarget {
    /// Absolute (or cwd-relative) file path.
    pub path: PathBuf,
    /// Path relative to the document, with `/` separators.
    pub relative: String,
}

impl ScreenshotTarget {
    /// Target for `node_id` under `<document dir>/<screenshot_dir>/`.
    pub fn for_document(
        document: &Path,
        screenshot_dir: &str,
        node_id: &str,
        export: &ExportOptions,
    ) -> Self {
        let file_name = screenshot_file_name(node_id, export);
        let dir = document.parent().unwrap_or_else(|| Path::new(""));
        Self {
            path: dir.join(screenshot_dir).join(&file_name),
            relative: format!("{screenshot_dir}/{file_name}"),
        }
    }
}

/// Write image bytes, creating the screenshot directory when needed.
pub async fn save_image(bytes: &[u8], path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(path, bytes).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ImageFormat;

    #[test]
    fn test_screenshot_file_name() {
        let export = ExportOptions::default();
        assert_eq!(screenshot_file_name("1:23", &export), "1_3A23-@2x.png");

        let export = ExportOptions {
            scale: 1.5,
            format: ImageFormat::Svg,
        };
        assert_eq!(screenshot_file_name("12:3;4", &export), "12_3A3_3B4-@1.5x.svg");
    }

    #[test]
    fn test_screenshot_names_do_not_collide() {
        let export = ExportOptions::default();
        let ids = ["1:2", "1-2", "1_2", "1_3A2", "I1:2;3:4", "I1-2-3-4", "I1:2-3:4"];
        let names: std::collections::HashSet<_> = ids
            .iter()
            .map(|id| screenshot_file_name(id, &export))
            .collect();
        assert_eq!(names.len(), ids.len());
        assert_eq!(screenshot_file_name("1_2", &export), "1_5F2-@2x.png");
        assert_eq!(screenshot_file_name("é", &export), "_C3_A9-@2x.png");
    }

    #[test]
    fn test_target_for_document() {
        let target = ScreenshotTarget::for_document(
            Path::new("/docs/components/button.mdx"),
            "figma-screenshots",
            "1:2",
            &ExportOptions::default(),
        );
        assert_eq!(
            target.path,
            PathBuf::from("/docs/components/figma-screenshots/1_3A2-@2x.png")
        );
        assert_eq!(target.relative, "figma-screenshots/1_3A2-@2x.png");
    }

    #[test]
    fn test_save_image_creates_directory() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("figma-screenshots").join("1_3A2-@2x.png");

        let rt = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap();
        rt.block_on(save_image(b"\x89PNG", &path)).unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), b"\x89PNG");
    }
}
