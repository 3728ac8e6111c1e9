//! Frame reference parsing.
//!
//! A document links a design frame with an HTML comment:
//!
//! ```text
//! <!-- figma-frame: FILE_ID/NODE_ID -->
//! ```
//!
//! The file id may not contain whitespace or `/`; the node id may not
//! contain whitespace. Nothing else is validated.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use super::markers::FRAME_TAG;

static RE_FRAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"<!--\s*{}\s*([^\s/]+)/(\S+)\s*-->",
        regex::escape(FRAME_TAG)
    ))
    .unwrap()
});

/// One design frame referenced from a document.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FrameReference {
    pub file_id: String,
    pub node_id: String,
}

impl FrameReference {
    pub fn new(file_id: impl Into<String>, node_id: impl Into<String>) -> Self {
        Self {
            file_id: file_id.into(),
            node_id: node_id.into(),
        }
    }

    /// Pattern matching exactly this reference's comment (whitespace inside
    /// the comment is free, ids are literal).
    pub fn comment_pattern(&self) -> Regex {
        let pattern = format!(
            r"<!--\s*{}\s*{}/{}\s*-->",
            regex::escape(FRAME_TAG),
            regex::escape(&self.file_id),
            regex::escape(&self.node_id)
        );
        // Escaped literals always form a valid pattern.
        Regex::new(&pattern).unwrap()
    }
}

impl fmt::Display for FrameReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.file_id, self.node_id)
    }
}

/// Extract all frame references in document order.
///
/// Duplicates are kept; an empty vector means the document has none.
pub fn parse_references(text: &str) -> Vec<FrameReference> {
    RE_FRAME
        .captures_iter(text)
        .map(|caps| FrameReference::new(&caps[1], &caps[2]))
        .collect()
}

/// Group references by file id, keeping first-appearance order of both
/// file ids and node ids. Repeated node ids collapse into one entry.
pub fn group_by_file(refs: &[FrameReference]) -> Vec<(String, Vec<String>)> {
    let mut groups: Vec<(String, Vec<String>)> = Vec::new();

    for frame in refs {
        let index = match groups.iter().position(|(file, _)| *file == frame.file_id) {
            Some(index) => index,
            None => {
                groups.push((frame.file_id.clone(), Vec::new()));
                groups.len() - 1
            }
        };
        let nodes = &mut groups[index].1;
        if !nodes.contains(&frame.node_id) {
            nodes.push(frame.node_id.clone());
        }
    }

    groups
}
