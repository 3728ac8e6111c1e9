//! Logging utilities with colored output.
//!
//! This module provides:
//! - `log!` macro for formatted terminal output with colored prefixes
//! - `debug!` macro, only printed with `--verbose`
//! - per-frame status lines (`✓`, `⚠`, `✗`) shown under a document
//!
//! # Example
//!
//! ```ignore
//! log!("sync"; "scanning {} documents", count);
//! status_success("synced frame 1:23");
//! ```

use owo_colors::{OwoColorize, Stream};
use std::{
    io::{Write, stdout},
    sync::atomic::{AtomicBool, Ordering},
};

/// Global verbose flag (set by --verbose CLI argument)
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set verbose mode globally
pub fn set_verbose(v: bool) {
    VERBOSE.store(v, Ordering::SeqCst);
}

/// Check if verbose mode is enabled
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

// ============================================================================
// Log Macro
// ============================================================================

/// Log a message with a colored module prefix
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Log a debug message (only shown when --verbose is enabled)
///
/// # Usage
/// ```ignore
/// debug!("module"; "debug info: {}", value);
/// ```
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log($module, &format!($($arg)*))
        }
    }};
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Log a message with a colored module prefix
#[inline]
pub fn log(module: &str, message: &str) {
    let module_lower = module.to_ascii_lowercase();
    let prefix = colorize_prefix(module, &module_lower);

    let mut stdout = stdout().lock();
    writeln!(stdout, "{prefix} {message}").ok();
    stdout.flush().ok();
}

/// Apply color to a module prefix based on module type
#[inline]
fn colorize_prefix(module: &str, module_lower: &str) -> String {
    let prefix = format!("[{module}]");
    let styled = prefix.if_supports_color(Stream::Stdout, |p| match module_lower {
        "sync" => p.bright_blue().bold().to_string(),
        "check" => p.bright_green().bold().to_string(),
        "error" => p.bright_red().bold().to_string(),
        _ => p.bright_yellow().bold().to_string(),
    });
    styled.to_string()
}

// ============================================================================
// Frame Status
// ============================================================================

/// Status of a single frame, printed indented under its document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Warning,
    Error,
}

impl Status {
    fn symbol(self) -> String {
        match self {
            Self::Success => "✓".if_supports_color(Stream::Stdout, |s| s.green()).to_string(),
            Self::Warning => "⚠".if_supports_color(Stream::Stdout, |s| s.yellow()).to_string(),
            Self::Error => "✗".if_supports_color(Stream::Stdout, |s| s.red()).to_string(),
        }
    }
}

/// Format one status line; `detail` goes on following lines, dimmed.
fn format_status(status: Status, summary: &str, detail: &str) -> String {
    let mut line = format!("  {} {}", status.symbol(), summary);
    for detail_line in detail.lines().filter(|l| !l.trim().is_empty()) {
        let dimmed = detail_line.if_supports_color(Stream::Stdout, |l| l.dimmed());
        line.push_str(&format!("\n    {dimmed}"));
    }
    line
}

fn print_status(status: Status, summary: &str, detail: &str) {
    let mut stdout = stdout().lock();
    writeln!(stdout, "{}", format_status(status, summary, detail)).ok();
    stdout.flush().ok();
}

/// Frame synced.
pub fn status_success(message: &str) {
    print_status(Status::Success, message, "");
}

/// Frame skipped.
pub fn status_warning(message: &str) {
    print_status(Status::Warning, message, "");
}

/// Frame or document failed, with the error chain as detail.
pub fn status_error(summary: &str, detail: &str) {
    print_status(Status::Error, summary, detail);
}

// ============================================================================
// Tests
// ============================================================================
