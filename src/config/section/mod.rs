//! Configuration section definitions.
//!
//! Each module corresponds to a section in `figsync.toml`:
//!
//! | Module   | TOML Section | Purpose                                  |
//! |----------|--------------|------------------------------------------|
//! | `api`    | `[api]`      | API root and token variable              |
//! | `export` | `[export]`   | Screenshot scale, format, directory      |
//! | `scan`   | `[scan]`     | Documents to search for references       |
//! | `specs`  | `[specs]`    | Generated specification categories       |

mod api;
mod export;
pub mod scan;
mod specs;

pub use api::ApiConfig;
pub use export::ExportConfig;
pub use scan::ScanConfig;
pub use specs::SpecsConfig;
