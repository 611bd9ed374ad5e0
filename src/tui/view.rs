//! Pure rendering: map App state to ratatui widget trees.
//!
//! The card-in-frame layout: the whole terminal is painted with the
//! current view's frame color, a white canvas sits centered inside it
//! with a fixed margin, and the content column is capped at a reading
//! width. Widget-building functions are pure (state in, widgets out);
//! the only effect is Frame::render_widget() writing to the buffer.

use ratatui::layout::{Constraint, Layout, Margin, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};
use ratatui::Frame;

use crate::content::{
    self, LinkKey, FOOTER_ABOUT, FOOTER_BACK, HEADING_HOME, HOME_ACTION, HUB_ENTRIES,
};
use crate::nav::View;

use super::state::App;
use super::theme;

/// Frame margin in cells: the original's fixed 64px padding, halved
/// vertically because terminal cells are roughly twice as tall as wide.
const FRAME_MARGIN_H: u16 = 8;
const FRAME_MARGIN_V: u16 = 3;

/// Canvas-internal padding.
const CANVAS_PAD_H: u16 = 4;
const CANVAS_PAD_V: u16 = 1;

/// Reading width cap for the content column.
const MAX_COLUMN_WIDTH: u16 = 84;

// ============================================================================
// DISPATCH
// ============================================================================

/// Render the current view to the terminal frame.
pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();
    let view = app.nav.current;

    // Outer frame: the view's theme color.
    frame.render_widget(
        Block::new().style(Style::new().bg(theme::frame_color(view))),
        area,
    );

    // Centered white canvas.
    let canvas = area.inner(Margin {
        horizontal: FRAME_MARGIN_H,
        vertical: FRAME_MARGIN_V,
    });
    frame.render_widget(Block::new().style(theme::STYLE_BODY), canvas);

    let column = text_column(canvas);
    let rows = Layout::vertical([
        Constraint::Length(1), // brand
        Constraint::Length(1), // spacer
        Constraint::Min(0),    // content
        Constraint::Length(1), // footer
        Constraint::Length(1), // help / notice
    ])
    .split(column);

    frame.render_widget(render_brand(view), rows[0]);
    render_content(app, frame, rows[2]);
    render_footer(view, frame, rows[3]);
    frame.render_widget(render_help(app), rows[4]);
}

/// The content column: padded and capped at reading width, centered.
fn text_column(canvas: Rect) -> Rect {
    let padded = canvas.inner(Margin {
        horizontal: CANVAS_PAD_H,
        vertical: CANVAS_PAD_V,
    });
    if padded.width > MAX_COLUMN_WIDTH {
        Rect {
            x: padded.x + (padded.width - MAX_COLUMN_WIDTH) / 2,
            width: MAX_COLUMN_WIDTH,
            ..padded
        }
    } else {
        padded
    }
}

// ============================================================================
// CHROME
// ============================================================================

/// Brand anchor. Reads ABOUT on the colophon, WILLIAM everywhere else.
fn render_brand(view: View) -> Paragraph<'static> {
    Paragraph::new(Line::from(Span::styled(
        content::brand(view),
        theme::STYLE_BRAND,
    )))
    .style(theme::STYLE_BODY)
}

/// Footer: left slot swaps between JEFFERSON (landing only) and BACK;
/// right slot carries the envelope and the two outbound icons.
fn render_footer(view: View, frame: &mut Frame, area: Rect) {
    let left_label = if view == View::Home {
        FOOTER_ABOUT
    } else {
        FOOTER_BACK
    };

    let right_spans = vec![
        Span::styled(" ✉ ", Style::new().fg(theme::CANVAS_BG).bg(theme::ENVELOPE)),
        Span::styled(" Contact   ", theme::STYLE_BODY),
        Span::styled("Handshake   ", theme::STYLE_BODY),
        Span::styled("LinkedIn", theme::STYLE_BODY),
    ];
    let right_width: u16 = right_spans
        .iter()
        .map(|s| s.content.chars().count() as u16)
        .sum();

    let slots = Layout::horizontal([Constraint::Min(0), Constraint::Length(right_width)])
        .split(area);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(left_label, theme::STYLE_BRAND)))
            .style(theme::STYLE_BODY),
        slots[0],
    );
    frame.render_widget(
        Paragraph::new(Line::from(right_spans)).style(theme::STYLE_BODY),
        slots[1],
    );
}

/// Help line showing available keys, or the latest launch notice.
fn render_help(app: &App) -> Paragraph<'static> {
    if let Some(notice) = &app.notice {
        return Paragraph::new(Span::styled(notice.clone(), theme::STYLE_DIM))
            .style(theme::STYLE_BODY);
    }

    let help_text = match app.nav.current {
        View::Home => "[Enter] learn  [a] jefferson  [c] contact  [n] handshake  [l] linkedin  [q] quit",
        View::Hub => "[1-3] open  [c] contact  [Esc] back  [q] quit",
        View::Bio | View::Goals => "[c] contact  [Esc] back  [q] quit",
        View::History => "[r] resume  [c] contact  [Esc] back  [q] quit",
        View::About => "[w] elsewhere  [c] contact  [Esc] back  [q] quit",
        View::Contact => "[e] email  [Esc] back  [q] quit",
    };

    Paragraph::new(Span::styled(help_text, theme::STYLE_DIM)).style(theme::STYLE_BODY)
}

// ============================================================================
// CONTENT
// ============================================================================

fn render_content(app: &App, frame: &mut Frame, area: Rect) {
    let view = app.nav.current;
    let lines = match view {
        View::Home => home_lines(view),
        View::Hub => hub_lines(view),
        View::About => about_lines(view),
        _ => prose_lines(view),
    };

    let paragraph = Paragraph::new(lines)
        .style(theme::STYLE_BODY)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

/// Landing: one big headline whose tail is the interactive part.
fn home_lines(view: View) -> Vec<Line<'static>> {
    let lead = HEADING_HOME
        .strip_suffix(HOME_ACTION)
        .unwrap_or(HEADING_HOME);

    vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(lead.to_string(), theme::STYLE_HEADING),
            Span::styled(HOME_ACTION, theme::STYLE_HEADING_SERIF),
            Span::raw("  "),
            Span::styled(" Enter ", theme::accent(view)),
        ]),
    ]
}

/// Hub: the three headlines, numbered.
fn hub_lines(view: View) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from("")];
    for (i, (leaf, label)) in HUB_ENTRIES.iter().enumerate() {
        let styled = match leaf {
            // The first and third headlines carry the serif voice; the
            // third is set in caps, as on the site.
            View::Bio => Span::styled(label.to_string(), theme::STYLE_HEADING_SERIF),
            View::Goals => {
                Span::styled(label.to_ascii_uppercase(), theme::STYLE_HEADING_SERIF)
            }
            _ => Span::styled(label.to_string(), theme::STYLE_HEADING),
        };
        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", i + 1), theme::accent(view)),
            Span::raw(" "),
            styled,
        ]));
        lines.push(Line::from(""));
    }
    lines
}

/// Colophon: copyright, portrait block, elsewhere link.
fn about_lines(view: View) -> Vec<Line<'static>> {
    let c = content::view_content(view);
    let portrait_style = Style::new().fg(theme::PORTRAIT).bg(theme::CANVAS_BG);

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(c.heading, theme::STYLE_BODY)),
        Line::from(""),
    ];
    for _ in 0..3 {
        lines.push(Line::from(Span::styled("████████████", portrait_style)));
    }
    lines.push(Line::from(Span::styled(
        c.body.first().copied().unwrap_or_default(),
        theme::STYLE_DIM,
    )));
    lines.push(Line::from(""));
    lines.extend(link_lines(view));
    lines
}

/// Leaf and contact views: heading, prose, inline links.
fn prose_lines(view: View) -> Vec<Line<'static>> {
    let c = content::view_content(view);

    let heading = if view == View::Goals {
        Span::styled(c.heading.to_ascii_uppercase(), theme::STYLE_HEADING_SERIF)
    } else if view == View::Bio {
        Span::styled(c.heading, theme::STYLE_HEADING_SERIF)
    } else {
        Span::styled(c.heading, theme::STYLE_HEADING)
    };

    let mut lines = vec![Line::from(""), Line::from(heading), Line::from("")];
    for paragraph in c.body {
        lines.push(Line::from(Span::styled(*paragraph, theme::STYLE_BODY)));
        lines.push(Line::from(""));
    }
    lines.extend(link_lines(view));
    lines
}

/// Inline link rows with their key hints.
fn link_lines(view: View) -> Vec<Line<'static>> {
    content::view_content(view)
        .links
        .iter()
        .map(|link| {
            Line::from(vec![
                Span::styled(format!(" {} ", key_hint(link.key)), theme::accent(view)),
                Span::raw(" "),
                Span::styled(link.label, theme::STYLE_LINK),
            ])
        })
        .collect()
}

/// The key bound to each link, mirrored in `run::map_key`.
fn key_hint(key: LinkKey) -> char {
    match key {
        LinkKey::Resume => 'r',
        LinkKey::Email => 'e',
        LinkKey::Elsewhere => 'w',
        LinkKey::Handshake => 'n',
        LinkKey::LinkedIn => 'l',
    }
}

// ============================================================================
// TESTS
// ============================================================================
