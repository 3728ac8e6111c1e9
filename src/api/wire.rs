//! JSON shapes of the design API and their conversion into [`DesignNode`].
//!
//! Every field is optional on the wire; defaults are applied here so the
//! extractor works on a fully typed tree.

use std::collections::HashMap;

use serde::Deserialize;

use crate::figma::{BoundingBox, DesignNode, NodeKind, Paint, Rgb, TextStyle};

const TEXT_TYPE: &str = "TEXT";
const SOLID_TYPE: &str = "SOLID";

/// `GET /files/:key/nodes?ids=...`
#[derive(Debug, Deserialize)]
pub struct NodesResponse {
    #[serde(default)]
    pub nodes: HashMap<String, Option<NodeEntry>>,
}

#[derive(Debug, Deserialize)]
pub struct NodeEntry {
    pub document: Option<RawNode>,
}

/// `GET /images/:key?ids=...`
#[derive(Debug, Deserialize)]
pub struct ImagesResponse {
    pub err: Option<String>,
    #[serde(default)]
    pub images: HashMap<String, Option<String>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawNode {
    #[serde(rename = "type", default)]
    pub node_type: String,
    pub absolute_bounding_box: Option<RawBox>,
    #[serde(default)]
    pub fills: Vec<RawPaint>,
    #[serde(default)]
    pub strokes: Vec<RawPaint>,
    pub style: Option<RawStyle>,
    #[serde(default)]
    pub children: Vec<RawNode>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawBox {
    pub width: Option<f64>,
    pub height: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawPaint {
    #[serde(rename = "type", default)]
    pub paint_type: String,
    pub color: Option<RawColor>,
    pub opacity: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawColor {
    pub r: Option<f64>,
    pub g: Option<f64>,
    pub b: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawStyle {
    pub font_family: Option<String>,
    pub font_size: Option<f64>,
    pub font_weight: Option<f64>,
    pub line_height_px: Option<f64>,
    pub letter_spacing: Option<f64>,
}

impl From<RawNode> for DesignNode {
    fn from(raw: RawNode) -> Self {
        let kind = if raw.node_type == TEXT_TYPE {
            NodeKind::Text(raw.style.map(TextStyle::from).unwrap_or_default())
        } else {
            NodeKind::Other(raw.node_type)
        };

        Self {
            kind,
            bounds: raw.absolute_bounding_box.map(|b| BoundingBox {
                width: b.width,
                height: b.height,
            }),
            fills: raw.fills.into_iter().map(Paint::from).collect(),
            strokes: raw.strokes.into_iter().map(Paint::from).collect(),
            children: raw.children.into_iter().map(DesignNode::from).collect(),
        }
    }
}

impl From<RawPaint> for Paint {
    fn from(raw: RawPaint) -> Self {
        match raw.color {
            Some(color) if raw.paint_type == SOLID_TYPE => Self::Solid {
                color: Rgb::new(
                    color.r.unwrap_or(0.0),
                    color.g.unwrap_or(0.0),
                    color.b.unwrap_or(0.0),
                ),
                // Only a missing opacity means 1. An explicit 0 is a fully
                // transparent paint and must stay 0, not fall back to 1.
                opacity: raw.opacity.unwrap_or(1.0),
            },
            _ => Self::Unsupported(raw.paint_type),
        }
    }
}

impl From<RawStyle> for TextStyle {
    fn from(raw: RawStyle) -> Self {
        Self {
            font_family: raw.font_family,
            font_size: raw.font_size,
            font_weight: raw.font_weight,
            line_height_px: raw.line_height_px,
            letter_spacing: raw.letter_spacing,
        }
    }
}

impl NodesResponse {
    /// Resolved nodes by id; ids the API could not resolve are absent.
    pub fn into_nodes(self) -> HashMap<String, DesignNode> {
        self.nodes
            .into_iter()
            .filter_map(|(id, entry)| Some((id, entry?.document?.into())))
            .collect()
    }
}
