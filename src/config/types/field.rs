//! Config field path.

use owo_colors::{OwoColorize, Stream};
use std::fmt;

/// Dotted path of a config field, e.g. `export.scale`.
///
/// Sections declare their paths as associated constants:
///
/// ```ignore
/// impl ExportConfig {
///     pub const SCALE: FieldPath = FieldPath::new("export.scale");
/// }
///
/// diag.error(ExportConfig::SCALE, "out of range");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let quoted = format!("`{}`", self.0);
        write!(
            f,
            "{}",
            quoted.if_supports_color(Stream::Stderr, |q| q.bright_blue())
        )
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_quotes_path() {
        owo_colors::set_override(false);
        assert_eq!(FieldPath::new("api.base_url").to_string(), "`api.base_url`");
    }
}
