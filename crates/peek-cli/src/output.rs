//! Terminal output formatting utilities.

use std::sync::atomic::{AtomicBool, Ordering};

use colored::Colorize;

static QUIET_MODE: AtomicBool = AtomicBool::new(false);
static VERBOSE_MODE: AtomicBool = AtomicBool::new(false);

/// Set quiet mode globally. Call once at startup.
pub fn set_quiet(quiet: bool) {
    QUIET_MODE.store(quiet, Ordering::Relaxed);
}

/// Set verbose mode globally. Call once at startup.
pub fn set_verbose(verbose: bool) {
    VERBOSE_MODE.store(verbose, Ordering::Relaxed);
}

fn is_quiet() -> bool {
    QUIET_MODE.load(Ordering::Relaxed)
}

fn is_verbose() -> bool {
    VERBOSE_MODE.load(Ordering::Relaxed)
}

/// Print an error message (always prints to stderr).
pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

/// Print a warning message (always prints to stderr).
pub fn warn(msg: &str) {
    eprintln!("{} {}", "!".yellow(), msg);
}

/// Print an info message (suppressed in quiet mode).
pub fn info(msg: &str) {
    if !is_quiet() {
        println!("{} {}", "→".blue(), msg);
    }
}

/// Print essential output: documents, diffs, listings (always prints).
pub fn essential(msg: &str) {
    println!("{msg}");
}

/// Print the status indicator line (suppressed in quiet mode, to stderr so
/// piped documents stay clean).
pub fn status(msg: &str) {
    if !is_quiet() {
        eprintln!("{}", msg.dimmed());
    }
}

/// Print a diagnostic line (verbose mode only, to stderr).
pub fn debug(msg: &str) {
    if is_verbose() {
        eprintln!("{} {}", "·".dimmed(), msg.dimmed());
    }
}

/// Format a document title.
#[must_use]
pub fn title(name: &str) -> String {
    name.cyan().bold().to_string()
}

/// Print a horizontal line (suppressed in quiet mode).
pub fn hr() {
    if !is_quiet() {
        println!("{}", "─".repeat(50).dimmed());
    }
}
