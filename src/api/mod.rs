//! Design API access: node data, rendered images, and screenshot files.
//!
//! | Module   | Purpose                                        |
//! |----------|------------------------------------------------|
//! | `client` | `FigmaClient`, the HTTP implementation         |
//! | `image`  | Screenshot naming and writing                  |
//! | `wire`   | JSON response shapes → typed node tree         |

mod client;
pub mod image;
pub mod wire;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::figma::DesignNode;

pub use client::FigmaClient;

/// Errors talking to the design API.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid API base url `{0}`")]
    InvalidBase(String),

    #[error("API token not set, export it as `{0}`")]
    MissingToken(String),

    #[error("request to `{url}` failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("`{url}` returned HTTP {status}{}", body_suffix(.body))]
    Status {
        url: String,
        status: u16,
        body: String,
    },

    #[error("unexpected response from `{url}`")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("design API error: {0}")]
    Remote(String),

    #[error("no image was rendered for node `{0}`")]
    MissingImage(String),
}

fn body_suffix(body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        String::new()
    } else {
        format!(": {body}")
    }
}

/// Rendered image format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    #[default]
    Png,
    Jpg,
    Svg,
    Pdf,
}

impl ImageFormat {
    /// Name used by the API and as file extension.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpg => "jpg",
            Self::Svg => "svg",
            Self::Pdf => "pdf",
        }
    }
}

/// How screenshots are rendered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExportOptions {
    pub scale: f64,
    pub format: ImageFormat,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            scale: 2.0,
            format: ImageFormat::Png,
        }
    }
}

/// Source of design data.
///
/// Implemented by [`FigmaClient`]; tests use an in-memory source.
#[allow(async_fn_in_trait)]
pub trait DesignSource {
    /// Fetch nodes of one file. Ids that cannot be resolved are absent from
    /// the result rather than an error.
    async fn fetch_nodes(
        &self,
        file_id: &str,
        node_ids: &[String],
    ) -> Result<HashMap<String, DesignNode>, ApiError>;

    /// URL of a freshly rendered image of one node.
    async fn fetch_image_url(
        &self,
        file_id: &str,
        node_id: &str,
        export: &ExportOptions,
    ) -> Result<String, ApiError>;

    /// Download a rendered image.
    async fn download(&self, url: &str) -> Result<Vec<u8>, ApiError>;
}
