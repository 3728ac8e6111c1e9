//! Command-line interface module.
//!
//! | Module   | Purpose                                          |
//! |----------|--------------------------------------------------|
//! | `args`   | clap definitions                                 |
//! | `common` | Document collection shared by both commands      |
//! | `check`  | `figsync check`, offline reference listing       |
//! | `sync`   | `figsync sync`, the fetch and patch pipeline     |

mod args;
pub mod check;
pub mod common;
pub mod sync;

pub use args::{CheckArgs, Cli, Commands, SyncArgs};
