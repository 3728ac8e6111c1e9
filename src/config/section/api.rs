//! `[api]` section configuration.
//!
//! ```toml
//! [api]
//! base_url = "https://api.figma.com/v1"
//! token_env = "FIGMA_API_TOKEN"   # environment variable holding the token
//! ```
//!
//! The token itself never lives in the config file.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::config::{ConfigDiagnostics, FieldPath};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// REST API root.
    pub base_url: String,

    /// Name of the environment variable with the personal access token.
    pub token_env: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.figma.com/v1".to_string(),
            token_env: "FIGMA_API_TOKEN".to_string(),
        }
    }
}

impl ApiConfig {
    pub const BASE_URL: FieldPath = FieldPath::new("api.base_url");
    pub const TOKEN_ENV: FieldPath = FieldPath::new("api.token_env");

    /// Token from the configured environment variable, if set and non-empty.
    pub fn read_token(&self) -> Option<String> {
        std::env::var(&self.token_env)
            .ok()
            .map(|token| token.trim().to_string())
            .filter(|token| !token.is_empty())
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        match Url::parse(&self.base_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            Ok(url) => diag.error(
                Self::BASE_URL,
                format!("unsupported scheme `{}`", url.scheme()),
            ),
            Err(err) => diag.error(Self::BASE_URL, format!("invalid url: {err}")),
        }

        if self.token_env.trim().is_empty() {
            diag.error(Self::TOKEN_ENV, "must name an environment variable");
        }
    }
}
