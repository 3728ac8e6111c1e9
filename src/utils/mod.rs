//! Small helpers shared by the commands.
//!
//! - [`path`]: filesystem path normalization
//! - [`plural`]: count/noun formatting for log lines

pub mod path;
mod plural;

pub use plural::{plural_count, plural_s};
