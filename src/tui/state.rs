//! TUI state algebra: pure types, zero effects.
//!
//! These types define the entire TUI state space. The transition
//! function and rendering layer both program against them.
//!
//! The real state is [`NavState`] — two enum fields. `App` only adds
//! the quit flag and a transient notice line, so illegal states stay
//! unrepresentable.

use crossterm::event::KeyEvent;

use crate::content::LinkKey;
use crate::nav::NavState;
use crate::platform::Launch;

// ============================================================================
// APP EVENTS
// ============================================================================

/// Everything the event loop can receive from its channel.
///
/// A single producer feeds it: the key reader thread. Kept as an enum
/// so the loop dispatches the same way the rest of the codebase does.
#[derive(Debug)]
pub enum AppEvent {
    /// A terminal key event from the crossterm reader thread.
    Key(KeyEvent),
}

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Top-level TUI model.
#[derive(Debug, PartialEq, Eq)]
pub struct App {
    /// Current and previous view.
    pub nav: NavState,

    /// One-line result of the last launch attempt, shown in the help
    /// row until the next navigation.
    pub notice: Option<String>,

    /// Set to true when the app should exit on the next tick.
    pub should_quit: bool,
}

impl App {
    /// Fresh session on the landing view.
    pub fn new() -> Self {
        App {
            nav: NavState::new(),
            notice: None,
            should_quit: false,
        }
    }
}

impl Default for App {
    fn default() -> Self {
        App::new()
    }
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic user action, decoupled from raw key events.
///
/// The effects layer maps key presses to Actions. The transition
/// function decides what each Action means on the current view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Brand anchor: go home. Always visible.
    Home,
    /// Drill into the landing headline (opens the hub).
    Enter,
    /// Hub entry by number (1-3).
    NumberKey(u8),
    /// Footer-left on the landing view: open the colophon.
    About,
    /// Envelope icon: open the contact view. Always visible.
    Contact,
    /// Footer-left everywhere else: back resolution.
    Back,
    /// Launch an outbound link.
    OpenLink(LinkKey),
    /// Quit the application.
    Quit,
}

// ============================================================================
// TRANSITIONS
// ============================================================================

/// Result of a pure state transition.
///
/// The update function returns this. The effects boundary inspects it
/// to decide what to render and which side effects to execute.
/// Pure code describes WHAT should happen, effectful code decides HOW.
#[derive(Debug, PartialEq, Eq)]
pub enum Transition {
    /// Render with this navigation state (possibly unchanged).
    Nav(NavState),
    /// Quit the application.
    Quit,
    /// Hand a target to the system opener; navigation is unchanged.
    Effect(Launch),
}

// ============================================================================
// TESTS
// ============================================================================
