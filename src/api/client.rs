//! HTTP client for the design API.

use std::collections::HashMap;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use url::Url;

use super::wire::{ImagesResponse, NodesResponse};
use super::{ApiError, DesignSource, ExportOptions};
use crate::debug;
use crate::figma::{DesignNode, format_number};

const TOKEN_HEADER: &str = "X-Figma-Token";

/// Client for the REST API, authenticated with a personal access token.
pub struct FigmaClient {
    http: reqwest::Client,
    base: Url,
    token: String,
}

impl FigmaClient {
    pub fn new(base_url: &str, token: impl Into<String>) -> Result<Self, ApiError> {
        let base = Url::parse(base_url).map_err(|_| ApiError::InvalidBase(base_url.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(ApiError::InvalidBase(base_url.to_string()));
        }

        let http = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|source| ApiError::Transport {
                url: base_url.to_string(),
                source,
            })?;

        Ok(Self {
            http,
            base,
            token: token.into(),
        })
    }

    /// `base` joined with `segments`, each percent-encoded as one segment.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        debug!("api"; "GET {}", url);

        let response = self
            .http
            .get(url.clone())
            .header(TOKEN_HEADER, &self.token)
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|source| ApiError::Transport {
            url: url.to_string(),
            source,
        })?;

        if !status.is_success() {
            return Err(ApiError::Status {
                url: url.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|source| ApiError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

impl DesignSource for FigmaClient {
    async fn fetch_nodes(
        &self,
        file_id: &str,
        node_ids: &[String],
    ) -> Result<HashMap<String, DesignNode>, ApiError> {
        let mut url = self.endpoint(&["files", file_id, "nodes"]);
        url.query_pairs_mut().append_pair("ids", &node_ids.join(","));

        let response: NodesResponse = self.get_json(url).await?;
        Ok(response.into_nodes())
    }

    async fn fetch_image_url(
        &self,
        file_id: &str,
        node_id: &str,
        export: &ExportOptions,
    ) -> Result<String, ApiError> {
        let mut url = self.endpoint(&["images", file_id]);
        url.query_pairs_mut()
            .append_pair("ids", node_id)
            .append_pair("format", export.format.as_str())
            .append_pair("scale", &format_number(export.scale));

        let response: ImagesResponse = self.get_json(url).await?;
        if let Some(err) = response.err {
            return Err(ApiError::Remote(err));
        }
        response
            .images
            .get(node_id)
            .cloned()
            .flatten()
            .ok_or_else(|| ApiError::MissingImage(node_id.to_string()))
    }

    async fn download(&self, url: &str) -> Result<Vec<u8>, ApiError> {
        debug!("api"; "download {}", url);

        // Rendered images live on a CDN; the API token is not sent there.
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                url: url.to_string(),
                source,
            })?;

        if response.status() != StatusCode::OK {
            return Err(ApiError::Status {
                url: url.to_string(),
                status: response.status().as_u16(),
                body: String::new(),
            });
        }

        let bytes = response.bytes().await.map_err(|source| ApiError::Transport {
            url: url.to_string(),
            source,
        })?;
        Ok(bytes.to_vec())
    }
}
