//! Specification extraction from a design node.
//!
//! Only the root node's own paints become colors. Typography comes from the
//! root when it is a text node, otherwise from its first text child; nested
//! colors are never rolled up.

use std::fmt;

use super::node::{DesignNode, Paint, TextStyle};

/// Specification derived from one frame.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FrameSpec {
    pub size: Size,
    pub colors: Vec<ColorSpec>,
    pub typography: Option<Typography>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: Option<f64>,
    pub height: Option<f64>,
}

impl Size {
    pub fn is_empty(&self) -> bool {
        self.width.is_none() && self.height.is_none()
    }
}

/// Whether a color came from a fill or a stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintRole {
    Fill,
    Stroke,
}

impl fmt::Display for PaintRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fill => f.write_str("fill"),
            Self::Stroke => f.write_str("stroke"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColorSpec {
    pub role: PaintRole,
    /// Uppercase `#RRGGBB`.
    pub hex: String,
    /// In `[0, 1]`.
    pub opacity: f64,
}

/// Resolved typography with fallbacks applied.
///
/// `None` for `font_size` renders as `Unknownpx`, `None` for `line_height`
/// renders as `auto`.
#[derive(Debug, Clone, PartialEq)]
pub struct Typography {
    pub font_family: String,
    pub font_size: Option<f64>,
    pub font_weight: f64,
    pub line_height: Option<f64>,
    pub letter_spacing: f64,
}

pub const UNKNOWN_FONT_FAMILY: &str = "Unknown";
pub const UNKNOWN_FONT_SIZE: &str = "Unknown";
pub const DEFAULT_FONT_WEIGHT: f64 = 400.0;

impl Typography {
    /// Apply fallbacks to a raw style. Zero and empty values count as missing.
    pub fn from_style(style: &TextStyle) -> Self {
        Self {
            font_family: style
                .font_family
                .clone()
                .filter(|family| !family.is_empty())
                .unwrap_or_else(|| UNKNOWN_FONT_FAMILY.to_string()),
            font_size: present(style.font_size),
            font_weight: present(style.font_weight).unwrap_or(DEFAULT_FONT_WEIGHT),
            line_height: present(style.line_height_px),
            letter_spacing: present(style.letter_spacing).unwrap_or(0.0),
        }
    }
}

fn present(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0 && !v.is_nan())
}

/// Which sections of a spec to keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecCategories {
    pub size: bool,
    pub colors: bool,
    pub typography: bool,
}

impl Default for SpecCategories {
    fn default() -> Self {
        Self {
            size: true,
            colors: true,
            typography: true,
        }
    }
}

impl FrameSpec {
    /// True when there is nothing to render.
    pub fn is_empty(&self) -> bool {
        self.size.is_empty() && self.colors.is_empty() && self.typography.is_none()
    }

    /// Drop the sections disabled in `categories`.
    pub fn restrict(mut self, categories: SpecCategories) -> Self {
        if !categories.size {
            self.size = Size::default();
        }
        if !categories.colors {
            self.colors.clear();
        }
        if !categories.typography {
            self.typography = None;
        }
        self
    }
}

/// Derive the specification of `node`.
pub fn extract_spec(node: &DesignNode) -> FrameSpec {
    let size = node
        .bounds
        .map(|bounds| Size {
            width: bounds.width,
            height: bounds.height,
        })
        .unwrap_or_default();

    let mut colors = collect_colors(&node.fills, PaintRole::Fill);
    colors.extend(collect_colors(&node.strokes, PaintRole::Stroke));

    // Own style claims first; otherwise the first text child in order.
    let typography = own_typography(node).or_else(|| node.children.iter().find_map(own_typography));

    FrameSpec {
        size,
        colors,
        typography,
    }
}

fn own_typography(node: &DesignNode) -> Option<Typography> {
    node.text_style().map(Typography::from_style)
}

fn collect_colors(paints: &[Paint], role: PaintRole) -> Vec<ColorSpec> {
    paints
        .iter()
        .filter_map(|paint| match paint {
            Paint::Solid { color, opacity } => Some(ColorSpec {
                role,
                hex: color.to_hex(),
                opacity: *opacity,
            }),
            Paint::Unsupported(_) => None,
        })
        .collect()
}
