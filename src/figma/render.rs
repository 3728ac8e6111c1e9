//! Markdown rendering of a [`FrameSpec`].

use std::fmt::Write;

use super::extract::{FrameSpec, Size, Typography, UNKNOWN_FONT_SIZE};

/// Render `spec` as markdown: Size, Colors, Typography.
///
/// Empty sections are omitted; an empty spec renders as an empty string.
/// Every section starts with a blank line so the result can follow a
/// marker directly.
pub fn render_spec(spec: &FrameSpec) -> String {
    let mut out = String::new();
    render_size(&mut out, &spec.size);
    render_colors(&mut out, spec);
    if let Some(typography) = &spec.typography {
        render_typography(&mut out, typography);
    }
    out
}

fn render_size(out: &mut String, size: &Size) {
    if size.is_empty() {
        return;
    }
    out.push_str("\n### Size\n\n");
    if let Some(width) = size.width {
        let _ = writeln!(out, "- **Width**: {}px", format_number(width));
    }
    if let Some(height) = size.height {
        let _ = writeln!(out, "- **Height**: {}px", format_number(height));
    }
}

fn render_colors(out: &mut String, spec: &FrameSpec) {
    if spec.colors.is_empty() {
        return;
    }
    out.push_str("\n### Colors\n\n");
    out.push_str("| Type | Color | Opacity |\n");
    out.push_str("|------|-------|----------|\n");
    for color in &spec.colors {
        let _ = writeln!(
            out,
            "| {} | {} | {}% |",
            color.role,
            color.hex,
            format_number((color.opacity * 100.0).round())
        );
    }
}

fn render_typography(out: &mut String, typography: &Typography) {
    out.push_str("\n### Typography\n\n");
    out.push_str("| Property | Value |\n");
    out.push_str("|----------|-------|\n");

    if !typography.font_family.is_empty() {
        let _ = writeln!(out, "| Font Family | {} |", typography.font_family);
    }
    let font_size = typography
        .font_size
        .map_or_else(|| UNKNOWN_FONT_SIZE.to_string(), format_number);
    let _ = writeln!(out, "| Font Size | {font_size}px |");
    if typography.font_weight != 0.0 {
        let _ = writeln!(out, "| Font Weight | {} |", format_number(typography.font_weight));
    }
    match typography.line_height {
        Some(height) => {
            let _ = writeln!(out, "| Line Height | {} |", format_number(height));
        }
        None => out.push_str("| Line Height | auto |\n"),
    }
    // Zero spacing is indistinguishable from "not set" and is left out.
    if typography.letter_spacing != 0.0 {
        let _ = writeln!(
            out,
            "| Letter Spacing | {} |",
            format_number(typography.letter_spacing)
        );
    }
}

/// Format a number the short way: integral values without a fraction,
/// others with the shortest round-trip representation.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        #[allow(clippy::cast_possible_truncation)]
        let integer = value as i64;
        integer.to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::figma::extract::{ColorSpec, PaintRole};
    use crate::figma::{DesignNode, TextStyle, extract_spec};

    fn typography() -> Typography {
        Typography {
            font_family: "Inter".to_string(),
            font_size: Some(16.0),
            font_weight: 600.0,
            line_height: Some(24.0),
            letter_spacing: 0.5,
        }
    }

    #[test]
    fn test_empty_spec_renders_nothing() {
        assert_eq!(render_spec(&FrameSpec::default()), "");
    }

    #[test]
    fn test_full_spec_layout() {
        let spec = FrameSpec {
            size: Size {
                width: Some(320.0),
                height: Some(48.0),
            },
            colors: vec![
                ColorSpec {
                    role: PaintRole::Fill,
                    hex: "#FF0080".into(),
                    opacity: 1.0,
                },
                ColorSpec {
                    role: PaintRole::Stroke,
                    hex: "#000000".into(),
                    opacity: 0.25,
                },
            ],
            typography: Some(typography()),
        };

        let expected = "\n### Size\n\n\
- **Width**: 320px\n\
- **Height**: 48px\n\
\n### Colors\n\n\
| Type | Color | Opacity |\n\
|------|-------|----------|\n\
| fill | #FF0080 | 100% |\n\
| stroke | #000000 | 25% |\n\
\n### Typography\n\n\
| Property | Value |\n\
|----------|-------|\n\
| Font Family | Inter |\n\
| Font Size | 16px |\n\
| Font Weight | 600 |\n\
| Line Height | 24 |\n\
| Letter Spacing | 0.5 |\n";
        assert_eq!(render_spec(&spec), expected);
    }

    #[test]
    fn test_size_with_one_dimension() {
        let spec = FrameSpec {
            size: Size {
                width: None,
                height: Some(12.5),
            },
            ..FrameSpec::default()
        };
        let md = render_spec(&spec);
        assert_eq!(md, "\n### Size\n\n- **Height**: 12.5px\n");
        assert!(!md.contains("undefined"));
        assert!(!md.contains("Width"));
    }

    #[test]
    fn test_empty_colors_omit_section() {
        let spec = FrameSpec {
            typography: Some(typography()),
            ..FrameSpec::default()
        };
        let md = render_spec(&spec);
        assert!(!md.contains("### Colors"));
        assert!(!md.contains("| Type |"));
    }

    #[test]
    fn test_zero_letter_spacing_omitted() {
        let spec = FrameSpec {
            typography: Some(Typography {
                letter_spacing: 0.0,
                ..typography()
            }),
            ..FrameSpec::default()
        };
        let md = render_spec(&spec);
        assert!(md.contains("| Font Family | Inter |"));
        assert!(!md.contains("Letter Spacing"));
    }

    #[test]
    fn test_fallback_typography_rows() {
        let spec = FrameSpec {
            typography: Some(Typography {
                font_family: "Unknown".into(),
                font_size: None,
                font_weight: 400.0,
                line_height: None,
                letter_spacing: 0.0,
            }),
            ..FrameSpec::default()
        };
        let expected = "\n### Typography\n\n\
| Property | Value |\n\
|----------|-------|\n\
| Font Family | Unknown |\n\
| Font Size | Unknownpx |\n\
| Font Weight | 400 |\n\
| Line Height | auto |\n";
        assert_eq!(render_spec(&spec), expected);
    }

    #[test]
    fn test_text_node_without_style_renders_fallbacks() {
        let md = render_spec(&extract_spec(&DesignNode::text(TextStyle::default())));
        assert!(md.contains("| Font Family | Unknown |\n| Font Size | Unknownpx |\n"));
        assert!(md.contains("| Line Height | auto |"));
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(320.0), "320");
        assert_eq!(format_number(14.5), "14.5");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(-1.25), "-1.25");
    }
}
