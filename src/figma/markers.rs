//! Marker comments delimiting generated regions in a document.
//!
//! These literals are matched byte-for-byte; changing any of them breaks
//! documents written by earlier runs.

/// Prefix tag of a frame reference: `<!-- figma-frame: FILE_ID/NODE_ID -->`
pub const FRAME_TAG: &str = "figma-frame:";

/// Placeholder inserted after the first synced frame reference.
pub const SCREENSHOT: &str = "<!-- figma-screenshot -->";

/// Opening marker of the generated specification block.
pub const SPECS_START: &str = "<!-- figma-specs-start -->";

/// Closing marker of the generated specification block.
pub const SPECS_END: &str = "<!-- figma-specs-end -->";

/// Heading written above a newly appended specification block.
pub const SPECS_HEADING: &str = "## Figma Specifications";
