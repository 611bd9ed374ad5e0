//! TUI effects boundary: event loop, terminal lifecycle, key mapping.
//!
//! This is the only TUI module with side effects. It wires the pure
//! layers (state, update, view) to the real terminal via crossterm and
//! ratatui. Kept minimal — all intelligence lives in the pure layers.
//!
//! A key reader thread feeds a single mpsc channel; the event loop
//! consumes it, so every state mutation happens serially between
//! renders.

use std::io;
use std::sync::mpsc;
use std::thread;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::content::LinkKey;
use crate::platform::{self, Launch};

use super::state::{Action, App, AppEvent, Transition};
use super::update::update;
use super::view::render;

// ============================================================================
// KEY MAPPING
// ============================================================================

/// Map a crossterm key event to a semantic Action.
///
/// Context-free: the transition function decides what an action means
/// on the current view. Returns None for keys bound to nothing.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        // Chrome
        KeyCode::Char('h') => Some(Action::Home),
        KeyCode::Char('a') => Some(Action::About),
        KeyCode::Char('c') => Some(Action::Contact),
        KeyCode::Enter => Some(Action::Enter),
        KeyCode::Esc | KeyCode::Backspace => Some(Action::Back),

        // Hub entries
        KeyCode::Char(c @ '1'..='3') => Some(Action::NumberKey(c as u8 - b'0')),

        // Links
        KeyCode::Char('r') => Some(Action::OpenLink(LinkKey::Resume)),
        KeyCode::Char('e') => Some(Action::OpenLink(LinkKey::Email)),
        KeyCode::Char('w') => Some(Action::OpenLink(LinkKey::Elsewhere)),
        KeyCode::Char('n') => Some(Action::OpenLink(LinkKey::Handshake)),
        KeyCode::Char('l') => Some(Action::OpenLink(LinkKey::LinkedIn)),

        KeyCode::Char('q') => Some(Action::Quit),

        _ => None,
    }
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Set up the terminal for TUI mode.
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to normal mode.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

// ============================================================================
// KEY READER THREAD
// ============================================================================

/// Spawn a thread that reads crossterm events and forwards key events to the channel.
fn spawn_key_reader(tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(Event::Key(key)) => {
                    if tx.send(AppEvent::Key(key)).is_err() {
                        break; // receiver dropped, TUI is shutting down
                    }
                }
                Ok(_) => {} // ignore mouse, resize, etc.
                Err(_) => break,
            }
        }
    });
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Run the portfolio TUI until the visitor quits.
pub fn run() -> io::Result<()> {
    install_panic_hook();
    let mut terminal = setup_terminal()?;
    let mut app = App::new();

    let (tx, rx) = mpsc::channel::<AppEvent>();
    spawn_key_reader(tx);

    loop {
        // Render
        terminal.draw(|frame| render(&app, frame))?;

        // Check quit flag
        if app.should_quit {
            break;
        }

        // Block on the next key event
        let event = match rx.recv() {
            Ok(e) => e,
            Err(_) => break, // sender dropped
        };

        let AppEvent::Key(key) = event;
        if let Some(action) = map_key(key) {
            match update(app.nav, &action) {
                Transition::Nav(nav) => {
                    app.nav = nav;
                    app.notice = None;
                }
                Transition::Quit => {
                    app.should_quit = true;
                }
                Transition::Effect(launch) => {
                    handle_effect(launch, &mut app);
                }
            }
        }
    }

    restore_terminal()?;
    Ok(())
}

// ============================================================================
// EFFECT HANDLING
// ============================================================================

/// Execute a launch requested by a pure transition and record the
/// result as a notice. The view itself never changes on a launch.
fn handle_effect(launch: Launch, app: &mut App) {
    app.notice = Some(match platform::launch(launch) {
        Ok(()) => format!("Opened {}", platform::describe(launch)),
        Err(e) => format!("Could not open {}: {}", platform::describe(launch), e),
    });
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ctrl_c_maps_to_quit() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(key), Some(Action::Quit));
    }

    #[test]
    fn plain_c_maps_to_contact() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE);
        assert_eq!(map_key(key), Some(Action::Contact));
    }

    #[test]
    fn enter_and_escape_map_to_drill_and_back() {
        let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        let esc = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        let backspace = KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE);
        assert_eq!(map_key(enter), Some(Action::Enter));
        assert_eq!(map_key(esc), Some(Action::Back));
        assert_eq!(map_key(backspace), Some(Action::Back));
    }

    #[test]
    fn number_keys_map_to_hub_entries() {
        for n in 1..=3u8 {
            let key = KeyEvent::new(KeyCode::Char((b'0' + n) as char), KeyModifiers::NONE);
            assert_eq!(map_key(key), Some(Action::NumberKey(n)));
        }
    }

    #[test]
    fn link_keys_map_to_their_links() {
        let cases = [
            ('r', LinkKey::Resume),
            ('e', LinkKey::Email),
            ('w', LinkKey::Elsewhere),
            ('n', LinkKey::Handshake),
            ('l', LinkKey::LinkedIn),
        ];
        for (ch, link) in cases {
            let key = KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE);
            assert_eq!(map_key(key), Some(Action::OpenLink(link)));
        }
    }

    #[test]
    fn unmapped_key_returns_none() {
        let key = KeyEvent::new(KeyCode::Char('z'), KeyModifiers::NONE);
        assert_eq!(map_key(key), None);
    }

    #[test]
    fn home_and_about_keys() {
        let h = KeyEvent::new(KeyCode::Char('h'), KeyModifiers::NONE);
        let a = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        assert_eq!(map_key(h), Some(Action::Home));
        assert_eq!(map_key(a), Some(Action::About));
    }
}
