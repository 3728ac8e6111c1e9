//! Typed design node tree.
//!
//! Nodes arrive from the API as loosely shaped JSON; [`crate::api::wire`]
//! converts them into this closed model before the extractor sees them.

/// A node of the design document tree.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DesignNode {
    pub kind: NodeKind,
    pub bounds: Option<BoundingBox>,
    pub fills: Vec<Paint>,
    pub strokes: Vec<Paint>,
    pub children: Vec<DesignNode>,
}

/// Node kind: text nodes carry their style, everything else only its type name.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Text(TextStyle),
    Other(String),
}

impl Default for NodeKind {
    fn default() -> Self {
        Self::Other("FRAME".to_string())
    }
}

/// Absolute size of a node.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundingBox {
    pub width: Option<f64>,
    pub height: Option<f64>,
}

/// Raw text style as sent by the API; every field may be missing.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextStyle {
    pub font_family: Option<String>,
    pub font_size: Option<f64>,
    pub font_weight: Option<f64>,
    pub line_height_px: Option<f64>,
    pub letter_spacing: Option<f64>,
}

/// A fill or stroke paint.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid { color: Rgb, opacity: f64 },
    /// Gradients, images, or a solid paint without color.
    Unsupported(String),
}

impl Paint {
    /// Solid paint with full opacity.
    pub const fn solid(color: Rgb) -> Self {
        Self::Solid {
            color,
            opacity: 1.0,
        }
    }
}

/// Color with channels in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Uppercase `#RRGGBB`.
    pub fn to_hex(self) -> String {
        format!(
            "#{:02X}{:02X}{:02X}",
            channel(self.r),
            channel(self.g),
            channel(self.b)
        )
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn channel(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

impl DesignNode {
    /// Text node with the given style.
    pub fn text(style: TextStyle) -> Self {
        Self {
            kind: NodeKind::Text(style),
            ..Self::default()
        }
    }

    /// Non-text node of the given API type name.
    pub fn other(type_name: impl Into<String>) -> Self {
        Self {
            kind: NodeKind::Other(type_name.into()),
            ..Self::default()
        }
    }

    pub fn with_bounds(mut self, width: f64, height: f64) -> Self {
        self.bounds = Some(BoundingBox {
            width: Some(width),
            height: Some(height),
        });
        self
    }

    pub fn with_fill(mut self, paint: Paint) -> Self {
        self.fills.push(paint);
        self
    }

    pub fn with_stroke(mut self, paint: Paint) -> Self {
        self.strokes.push(paint);
        self
    }

    pub fn with_child(mut self, child: DesignNode) -> Self {
        self.children.push(child);
        self
    }

    /// Text style if this node is itself a text node.
    pub fn text_style(&self) -> Option<&TextStyle> {
        match &self.kind {
            NodeKind::Text(style) => Some(style),
            NodeKind::Other(_) => None,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self.kind, NodeKind::Text(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_rounding() {
        assert_eq!(Rgb::new(1.0, 0.0, 0.5).to_hex(), "#FF0080");
        assert_eq!(Rgb::new(0.0, 0.0, 0.0).to_hex(), "#000000");
        assert_eq!(Rgb::new(1.0, 1.0, 1.0).to_hex(), "#FFFFFF");
    }

    #[test]
    fn test_hex_uppercase() {
        // 0.8 * 255 = 204 = 0xCC
        assert_eq!(Rgb::new(0.8, 0.8, 0.8).to_hex(), "#CCCCCC");
    }

    #[test]
    fn test_hex_clamps_out_of_range() {
        assert_eq!(Rgb::new(1.5, -0.2, f64::NAN).to_hex(), "#FF0000");
    }

    #[test]
    fn test_text_style_only_for_text_nodes() {
        assert!(DesignNode::text(TextStyle::default()).text_style().is_some());
        assert!(DesignNode::other("FRAME").text_style().is_none());
    }
}
