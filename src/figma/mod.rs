//! Document and design-node transformations.
//!
//! | Module      | Purpose                                         |
//! |-------------|-------------------------------------------------|
//! | `reference` | Find `figma-frame` comments in a document       |
//! | `node`      | Typed design node tree                          |
//! | `extract`   | Node tree → size, colors, typography            |
//! | `render`    | Specification → markdown                        |
//! | `patch`     | Write screenshot placeholder and specs block    |
//! | `markers`   | Marker comment literals                         |
//!
//! Everything here is pure: no I/O, no logging.

pub mod extract;
pub mod markers;
pub mod node;
pub mod patch;
pub mod reference;
pub mod render;

pub use extract::{SpecCategories, extract_spec};
pub use node::{BoundingBox, DesignNode, NodeKind, Paint, Rgb, TextStyle};
pub use patch::{Patch, PatchError};
pub use reference::{FrameReference, group_by_file, parse_references};
pub use render::{format_number, render_spec};
