//! Profile formatting for the non-interactive dump.
//!
//! Pure functions — (content, OutputFormat) → String.
//! No I/O, no side effects.

use serde::Serialize;

use crate::content::{self, ViewContent, BRAND, FOOTER_LINKS};
use crate::nav::View;

/// Output format for the profile dump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable pretty output.
    #[default]
    Human,
    /// Machine-readable JSON.
    Json,
}

/// The whole site as data: every view's content plus the global links.
#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    pub brand: &'static str,
    pub views: Vec<ViewContent>,
    pub footer_links: Vec<content::Link>,
}

impl Profile {
    /// Collect the full static content in display order.
    pub fn collect() -> Self {
        Profile {
            brand: BRAND,
            views: View::ALL.iter().map(|v| content::view_content(*v)).collect(),
            footer_links: FOOTER_LINKS.to_vec(),
        }
    }
}

/// Format the profile for output.
pub fn format_profile(format: OutputFormat) -> String {
    match format {
        OutputFormat::Human => format_human(&Profile::collect()),
        OutputFormat::Json => format_json(&Profile::collect()),
    }
}

// ============================================================================
// HUMAN FORMAT
// ============================================================================

fn format_human(profile: &Profile) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n\n", profile.brand));

    for view in &profile.views {
        out.push_str(&format_view(view));
    }

    out.push_str("=== Elsewhere ===\n");
    for link in &profile.footer_links {
        out.push_str(&format!("  {}: {}\n", link.label, link.target));
    }

    out
}

fn format_view(view: &ViewContent) -> String {
    let mut out = String::new();

    // The hub has no heading of its own; its body lines are the menu.
    if !view.heading.is_empty() {
        out.push_str(&format!("=== {} ===\n", view.heading));
    }

    for paragraph in view.body {
        out.push_str(&format!("{}\n\n", paragraph));
    }

    for link in view.links {
        out.push_str(&format!("  {} → {}\n", link.label, link.target));
    }

    out.push('\n');
    out
}

// ============================================================================
// JSON FORMAT
// ============================================================================

fn format_json(profile: &Profile) -> String {
    // serde_json::to_string_pretty for readable output
    serde_json::to_string_pretty(profile).unwrap_or_else(|e| {
        // This should never happen with our types, but fail explicitly
        panic!("Failed to serialize profile to JSON: {}", e)
    })
}

// ============================================================================
// TESTS
// ============================================================================
