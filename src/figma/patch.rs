//! Document patching.
//!
//! Two regions are maintained in a document:
//!
//! - the screenshot placeholder, inserted once after a frame comment
//! - the specification block between `figma-specs-start` and `figma-specs-end`
//!
//! Everything outside those regions is preserved byte-for-byte, and patching
//! a patched document with the same input changes nothing.

use regex::Captures;
use thiserror::Error;

use super::markers::{SCREENSHOT, SPECS_END, SPECS_HEADING, SPECS_START};
use super::reference::FrameReference;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatchError {
    #[error("specs start marker at byte {offset} has no matching end marker")]
    MalformedDocument { offset: usize },
}

/// One frame's update to a document.
#[derive(Debug, Clone, Copy)]
pub struct Patch<'a> {
    pub frame: &'a FrameReference,
    /// Screenshot path relative to the document's directory.
    pub image_path: &'a str,
    pub spec_markdown: &'a str,
    /// Also insert a markdown image after the placeholder.
    pub embed_image: bool,
}

impl<'a> Patch<'a> {
    pub const fn new(frame: &'a FrameReference, image_path: &'a str, spec_markdown: &'a str) -> Self {
        Self {
            frame,
            image_path,
            spec_markdown,
            embed_image: false,
        }
    }

    pub const fn with_embed_image(mut self, embed_image: bool) -> Self {
        self.embed_image = embed_image;
        self
    }

    /// Apply to `text`, returning the new document.
    pub fn apply(&self, text: &str) -> Result<String, PatchError> {
        // Reject malformed input before anything is changed.
        find_specs_block(text)?;

        let text = self.insert_screenshot(text);
        let specs_span = find_specs_block(&text)?;

        Ok(self.write_specs(&text, specs_span))
    }

    fn insert_screenshot(&self, text: &str) -> String {
        if text.contains(SCREENSHOT) {
            return text.to_string();
        }

        let pattern = self.frame.comment_pattern();
        pattern
            .replacen(text, 1, |caps: &Captures<'_>| {
                let mut inserted = format!("{}\n{}", &caps[0], SCREENSHOT);
                if self.embed_image {
                    inserted.push_str(&format!("\n![{}]({})", self.frame.node_id, self.image_path));
                }
                inserted
            })
            .into_owned()
    }

    fn write_specs(&self, text: &str, span: Option<(usize, usize)>) -> String {
        let block = format!("{SPECS_START}{}\n{SPECS_END}", self.spec_markdown);

        match span {
            Some((start, end)) => {
                let mut out = String::with_capacity(text.len() + block.len());
                out.push_str(&text[..start]);
                out.push_str(&block);
                out.push_str(&text[end..]);
                out
            }
            None => format!("{text}\n\n{SPECS_HEADING}\n{block}"),
        }
    }
}

/// Byte span from the first start marker to the end of the first end
/// marker after it.
fn find_specs_block(text: &str) -> Result<Option<(usize, usize)>, PatchError> {
    let Some(start) = text.find(SPECS_START) else {
        return Ok(None);
    };
    let search_from = start + SPECS_START.len();
    match text[search_from..].find(SPECS_END) {
        Some(relative) => Ok(Some((start, search_from + relative + SPECS_END.len()))),
        None => Err(PatchError::MalformedDocument { offset: start }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPEC_MD: &str = "\n### Size\n\n- **Width**: 100px\n- **Height**: 40px\n";

    fn patch_document(
        text: &str,
        frame: &FrameReference,
        image_path: &str,
        spec_markdown: &str,
    ) -> Result<String, PatchError> {
        Patch::new(frame, image_path, spec_markdown).apply(text)
    }

    fn frame() -> FrameReference {
        FrameReference::new("abc", "1:2")
    }

    fn patch(text: &str) -> Result<String, PatchError> {
        patch_document(text, &frame(), "figma-screenshots/1_3A2-@2x.png", SPEC_MD)
    }

    #[test]
    fn test_inserts_placeholder_and_appends_specs() {
        let text = "# Button\n\n<!-- figma-frame: abc/1:2 -->\n\nBody text.";
        let expected = format!(
            "# Button\n\n<!-- figma-frame: abc/1:2 -->\n{SCREENSHOT}\n\nBody text.\
             \n\n## Figma Specifications\n{SPECS_START}{SPEC_MD}\n{SPECS_END}"
        );
        assert_eq!(patch(text).unwrap(), expected);
    }

    #[test]
    fn test_matched_comment_reemitted_unchanged() {
        let text = "<!--figma-frame:   abc/1:2-->";
        let patched = patch(text).unwrap();
        assert!(patched.starts_with(&format!("<!--figma-frame:   abc/1:2-->\n{SCREENSHOT}")));
    }

    #[test]
    fn test_replaces_existing_specs_block() {
        let text = format!(
            "<!-- figma-frame: abc/1:2 -->\n{SCREENSHOT}\nbefore\n{SPECS_START}\nold stuff\n{SPECS_END}\nafter"
        );
        let expected = format!(
            "<!-- figma-frame: abc/1:2 -->\n{SCREENSHOT}\nbefore\n{SPECS_START}{SPEC_MD}\n{SPECS_END}\nafter"
        );
        assert_eq!(patch(&text).unwrap(), expected);
    }

    #[test]
    fn test_replacement_is_non_greedy() {
        let text = format!("{SCREENSHOT}\n{SPECS_START}a{SPECS_END}\nkeep\n{SPECS_START}b{SPECS_END}");
        let patched = patch(&text).unwrap();
        assert!(patched.ends_with(&format!("\nkeep\n{SPECS_START}b{SPECS_END}")));
        assert_eq!(patched.matches(SPECS_START).count(), 2);
    }

    #[test]
    fn test_patch_is_idempotent() {
        let inputs = [
            "<!-- figma-frame: abc/1:2 -->".to_string(),
            "intro\n<!-- figma-frame: abc/1:2 -->\ntext\n".to_string(),
            format!("<!-- figma-frame: abc/1:2 -->\n{SPECS_START}\nstale\n{SPECS_END}\ntrailer"),
            "no reference here".to_string(),
        ];
        for input in inputs {
            let once = patch(&input).unwrap();
            let twice = patch(&once).unwrap();
            assert_eq!(once, twice, "input: {input:?}");
        }
    }

    #[test]
    fn test_placeholder_inserted_only_once_per_document() {
        let text = "<!-- figma-frame: abc/1:2 -->\n<!-- figma-frame: abc/3:4 -->";
        let first = patch(text).unwrap();
        let second = patch_document(&first, &FrameReference::new("abc", "3:4"), "x.png", SPEC_MD).unwrap();
        assert_eq!(second.matches(SCREENSHOT).count(), 1);
        assert!(second.starts_with(&format!("<!-- figma-frame: abc/1:2 -->\n{SCREENSHOT}\n")));
    }

    #[test]
    fn test_only_first_duplicate_reference_gets_placeholder() {
        let text = "<!-- figma-frame: abc/1:2 -->\nx\n<!-- figma-frame: abc/1:2 -->";
        let patched = patch(text).unwrap();
        assert_eq!(patched.matches(SCREENSHOT).count(), 1);
    }

    #[test]
    fn test_existing_placeholder_elsewhere_blocks_insertion() {
        let text = format!("{SCREENSHOT}\n<!-- figma-frame: abc/1:2 -->");
        let patched = patch(&text).unwrap();
        assert!(patched.starts_with(&format!("{SCREENSHOT}\n<!-- figma-frame: abc/1:2 -->\n\n## ")));
    }

    #[test]
    fn test_other_reference_not_touched() {
        let text = "<!-- figma-frame: abc/9:9 -->";
        let patched = patch(text).unwrap();
        assert!(!patched.contains(SCREENSHOT));
        assert!(patched.starts_with(text));
    }

    #[test]
    fn test_unrelated_content_preserved() {
        let text = "---\ntitle: Ünïcode ✓\n---\r\n\r\n<!-- figma-frame: abc/1:2 -->\r\n| a | b |\r\n";
        let patched = patch(text).unwrap();
        let (head, tail) = patched.split_once(SCREENSHOT).unwrap();
        assert_eq!(head, "---\ntitle: Ünïcode ✓\n---\r\n\r\n<!-- figma-frame: abc/1:2 -->\n");
        assert!(tail.starts_with("\r\n| a | b |\r\n\n\n## Figma Specifications\n"));
    }

    #[test]
    fn test_empty_spec_still_writes_block() {
        let patched = patch_document("<!-- figma-frame: abc/1:2 -->", &frame(), "x.png", "").unwrap();
        assert!(patched.ends_with(&format!("{SPECS_START}\n{SPECS_END}")));
    }

    #[test]
    fn test_missing_end_marker_is_malformed() {
        let err = patch(SPECS_START).unwrap_err();
        assert_eq!(err, PatchError::MalformedDocument { offset: 0 });
    }

    #[test]
    fn test_end_marker_before_start_is_malformed() {
        let text = format!("<!-- figma-frame: abc/1:2 -->\n{SPECS_END}\n{SPECS_START}\n");
        assert!(matches!(
            patch(&text),
            Err(PatchError::MalformedDocument { .. })
        ));
    }

    #[test]
    fn test_embed_image_after_placeholder() {
        let frame = frame();
        let patched = Patch::new(&frame, "figma-screenshots/1_3A2-@2x.png", SPEC_MD)
            .with_embed_image(true)
            .apply("<!-- figma-frame: abc/1:2 -->\n")
            .unwrap();
        assert!(patched.starts_with(&format!(
            "<!-- figma-frame: abc/1:2 -->\n{SCREENSHOT}\n![1:2](figma-screenshots/1_3A2-@2x.png)\n"
        )));

        let again = Patch::new(&frame, "figma-screenshots/1_3A2-@2x.png", SPEC_MD)
            .with_embed_image(true)
            .apply(&patched)
            .unwrap();
        assert_eq!(patched, again);
    }
}
