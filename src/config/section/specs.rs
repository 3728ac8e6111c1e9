//! `[specs]` section configuration.
//!
//! Which sections of the specification block are generated.
//!
//! ```toml
//! [specs]
//! size = true
//! colors = true
//! typography = true
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::figma::SpecCategories;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpecsConfig {
    /// Frame width and height.
    pub size: bool,
    /// Solid fill and stroke colors.
    pub colors: bool,
    /// Font family, size, weight, line height, letter spacing.
    pub typography: bool,
}

impl Default for SpecsConfig {
    fn default() -> Self {
        Self {
            size: true,
            colors: true,
            typography: true,
        }
    }
}

impl SpecsConfig {
    pub const SECTION: FieldPath = FieldPath::new("specs");

    pub const fn categories(&self) -> SpecCategories {
        SpecCategories {
            size: self.size,
            colors: self.colors,
            typography: self.typography,
        }
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !self.size && !self.colors && !self.typography {
            diag.warn(
                Self::SECTION,
                "all categories are disabled, specification blocks will be empty",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults_enable_everything() {
        let config = test_parse_config("");
        assert_eq!(config.specs.categories(), SpecCategories::default());
    }

    #[test]
    fn test_disable_category() {
        let config = test_parse_config("[specs]\ncolors = false");
        let categories = config.specs.categories();
        assert!(categories.size);
        assert!(!categories.colors);
        assert!(categories.typography);
    }

    #[test]
    fn test_all_disabled_warns() {
        let mut diag = ConfigDiagnostics::new();
        let config = SpecsConfig {
            size: false,
            colors: false,
            typography: false,
        };
        config.validate(&mut diag);
        assert!(!diag.has_errors());
        assert_eq!(diag.warning_count(), 1);
    }
}
