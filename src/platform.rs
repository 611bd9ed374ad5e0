//! Platform-specific launching of external targets.
//!
//! The TUI and CLI both hand links to the desktop environment rather
//! than rendering them. Structure:
//! - Types: what can be launched (sum type)
//! - Pure functions: opener and argument construction
//! - Effect functions: process spawn

use std::io;
use std::process::Command;

use crate::content::{Link, LinkKind};

// ============================================================================
// TYPES
// ============================================================================

/// A target handed to the system opener.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Launch {
    /// Web URL, opened in the default browser.
    Url(&'static str),
    /// Mail address, opened in the default mail client.
    Email(&'static str),
    /// File shipped with the site, opened in its default viewer.
    Document(&'static str),
}

impl From<Link> for Launch {
    fn from(link: Link) -> Self {
        match link.kind {
            LinkKind::Url => Launch::Url(link.target),
            LinkKind::Email => Launch::Email(link.target),
            LinkKind::Document => Launch::Document(link.target),
        }
    }
}

// ============================================================================
// PURE FUNCTIONS
// ============================================================================

/// The opener program for this OS, plus its fixed leading arguments.
///
/// macOS ships `open`; other Unixes route through `xdg-open`; Windows
/// goes via the shell's `start` (the empty string is the window title
/// slot `start` expects before the target).
pub fn opener() -> (&'static str, &'static [&'static str]) {
    if cfg!(target_os = "macos") {
        ("open", &[])
    } else if cfg!(windows) {
        ("cmd", &["/C", "start", ""])
    } else {
        ("xdg-open", &[])
    }
}

/// The single trailing argument for the opener.
///
/// Mail addresses become `mailto:` URLs so the opener picks the mail
/// client; everything else passes through verbatim.
pub fn launch_argument(launch: Launch) -> String {
    match launch {
        Launch::Url(url) => url.to_string(),
        Launch::Email(addr) => format!("mailto:{addr}"),
        Launch::Document(path) => path.to_string(),
    }
}

/// Short human description, for notices and CLI output.
pub fn describe(launch: Launch) -> String {
    match launch {
        Launch::Url(url) => url.to_string(),
        Launch::Email(addr) => addr.to_string(),
        Launch::Document(path) => path.to_string(),
    }
}

// ============================================================================
// EFFECT FUNCTIONS
// ============================================================================

/// Hand the target to the system opener.
///
/// Fire-and-forget: the child is not waited on. Spawn failure (opener
/// missing, target unreadable) is reported to the caller.
pub fn launch(target: Launch) -> io::Result<()> {
    let (program, args) = opener();
    Command::new(program)
        .args(args)
        .arg(launch_argument(target))
        .spawn()
        .map(|_| ())
}

// ============================================================================
// TESTS
// ============================================================================
