//! View palette and style constants.
//!
//! Centralized theme definitions: the frame color each view recolors
//! the terminal with, plus the styles the rendering layer composes.
//! Pure data — consumed by the rendering layer for visual consistency.
//!
//! The palette is pastel on purpose: every frame color carries black
//! ink at high contrast, so the canvas styles never vary per view.

use ratatui::style::{Color, Modifier, Style};

use crate::nav::View;

// ============================================================================
// FRAME PALETTE
// ============================================================================

/// Peach — landing.
pub const FRAME_HOME: Color = Color::Rgb(0xFF, 0xE5, 0xE0);
/// Mint — navigation hub.
pub const FRAME_HUB: Color = Color::Rgb(0xE0, 0xEE, 0xE3);
/// Sky blue — biography.
pub const FRAME_BIO: Color = Color::Rgb(0xE0, 0xF7, 0xFF);
/// Lime — history.
pub const FRAME_HISTORY: Color = Color::Rgb(0xF5, 0xFF, 0xE0);
/// Lavender — goals.
pub const FRAME_GOALS: Color = Color::Rgb(0xFA, 0xE0, 0xFF);
/// Light grey — colophon.
pub const FRAME_ABOUT: Color = Color::Rgb(0xF0, 0xF0, 0xEF);
/// Cream — contact.
pub const FRAME_CONTACT: Color = Color::Rgb(0xFF, 0xF2, 0xE0);

/// The frame color for a view. Total; not injective by contract, it
/// just happens that all seven differ.
pub const fn frame_color(view: View) -> Color {
    match view {
        View::Home => FRAME_HOME,
        View::Hub => FRAME_HUB,
        View::Bio => FRAME_BIO,
        View::History => FRAME_HISTORY,
        View::Goals => FRAME_GOALS,
        View::About => FRAME_ABOUT,
        View::Contact => FRAME_CONTACT,
    }
}

// ============================================================================
// CANVAS STYLES
// ============================================================================

/// The centered white workspace.
pub const CANVAS_BG: Color = Color::Rgb(0xFF, 0xFF, 0xFF);

/// Black text on the canvas.
pub const INK: Color = Color::Rgb(0x11, 0x11, 0x11);

/// Portrait backing block on the colophon view.
pub const PORTRAIT: Color = Color::Rgb(0xFF, 0x91, 0x00);

/// Envelope icon backing in the footer.
pub const ENVELOPE: Color = Color::Rgb(0xD6, 0x3A, 0x3A);

/// Base canvas text.
pub const STYLE_BODY: Style = Style::new().fg(INK).bg(CANVAS_BG);

/// Brand anchor and footer labels.
pub const STYLE_BRAND: Style = Style::new()
    .fg(INK)
    .bg(CANVAS_BG)
    .add_modifier(Modifier::BOLD);

/// The big per-view headline.
pub const STYLE_HEADING: Style = Style::new()
    .fg(INK)
    .bg(CANVAS_BG)
    .add_modifier(Modifier::BOLD);

/// Serif-voiced headlines (hub first/third entry) lean italic.
pub const STYLE_HEADING_SERIF: Style = Style::new()
    .fg(INK)
    .bg(CANVAS_BG)
    .add_modifier(Modifier::BOLD)
    .add_modifier(Modifier::ITALIC);

/// Inline links.
pub const STYLE_LINK: Style = Style::new()
    .fg(INK)
    .bg(CANVAS_BG)
    .add_modifier(Modifier::ITALIC)
    .add_modifier(Modifier::UNDERLINED);

/// De-emphasized chrome (help line, alt text).
pub const STYLE_DIM: Style = Style::new().fg(Color::Rgb(0x88, 0x88, 0x88)).bg(CANVAS_BG);

/// Key hints take the current frame color — the original's trick of
/// tinting interactive text with the active theme.
pub fn accent(view: View) -> Style {
    Style::new()
        .fg(frame_color(view))
        .bg(INK)
        .add_modifier(Modifier::BOLD)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_colors_match_the_palette() {
        assert_eq!(frame_color(View::Home), Color::Rgb(0xFF, 0xE5, 0xE0));
        assert_eq!(frame_color(View::Hub), Color::Rgb(0xE0, 0xEE, 0xE3));
        assert_eq!(frame_color(View::Bio), Color::Rgb(0xE0, 0xF7, 0xFF));
        assert_eq!(frame_color(View::History), Color::Rgb(0xF5, 0xFF, 0xE0));
        assert_eq!(frame_color(View::Goals), Color::Rgb(0xFA, 0xE0, 0xFF));
        assert_eq!(frame_color(View::About), Color::Rgb(0xF0, 0xF0, 0xEF));
        assert_eq!(frame_color(View::Contact), Color::Rgb(0xFF, 0xF2, 0xE0));
    }

    #[test]
    fn frame_color_is_total() {
        for v in View::ALL {
            // Any RGB value is acceptable; the lookup just has to answer.
            let _ = frame_color(v);
        }
    }

    #[test]
    fn accent_uses_the_frame_color() {
        for v in View::ALL {
            assert_eq!(accent(v).fg, Some(frame_color(v)));
        }
    }

    #[test]
    fn headings_are_bold() {
        assert!(STYLE_HEADING.add_modifier.contains(Modifier::BOLD));
        assert!(STYLE_HEADING_SERIF.add_modifier.contains(Modifier::ITALIC));
    }

    #[test]
    fn links_are_underlined() {
        assert!(STYLE_LINK.add_modifier.contains(Modifier::UNDERLINED));
    }
}
