//! View navigation: the portfolio's state machine.
//!
//! Pure functions — no I/O, easily testable. The whole site is seven
//! views and two fields; everything above this module is rendering.

use serde::Serialize;

/// The views the portfolio can display.
///
/// `Contact` is an overlay reachable from anywhere, not nested in the
/// hub→leaf hierarchy — backing out of it returns to wherever the
/// visitor came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    /// Landing headline.
    Home,
    /// Navigation hub: the three big headlines.
    Hub,
    /// "Here is where I am" — biography.
    Bio,
    /// "That is where I've been." — work history.
    History,
    /// "This is where I'm going." — goals.
    Goals,
    /// Colophon: copyright, portrait, elsewhere link.
    About,
    /// "Reach out to me".
    Contact,
}

impl View {
    /// Every view, in display order.
    pub const ALL: [View; 7] = [
        View::Home,
        View::Hub,
        View::Bio,
        View::History,
        View::Goals,
        View::About,
        View::Contact,
    ];

    /// The three leaf views reached from the hub.
    pub const LEAVES: [View; 3] = [View::Bio, View::History, View::Goals];
}

/// Current and previous view.
///
/// `previous` records the view active immediately before the most
/// recent forward transition. It is read only when backing out of
/// `Contact`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavState {
    pub current: View,
    pub previous: View,
}

impl NavState {
    /// Initial state: both fields on `Home`.
    pub fn new() -> Self {
        NavState {
            current: View::Home,
            previous: View::Home,
        }
    }

    /// Forward navigation.
    ///
    /// Re-selecting the current view is the identity. Otherwise the old
    /// view is recorded so backing out of `Contact` can return there.
    #[must_use]
    pub fn goto(self, target: View) -> Self {
        if target == self.current {
            self
        } else {
            NavState {
                current: target,
                previous: self.current,
            }
        }
    }

    /// Back resolution, in precedence order:
    ///
    /// 1. From `Contact`: return to `previous` (left unchanged).
    /// 2. From a leaf view: return to the hub.
    /// 3. From `Hub` or `About`: return home.
    /// 4. From `Home`: identity. The UI never offers Back on `Home`,
    ///    but direct invocation must leave the state untouched.
    ///
    /// `previous` is never written here — only rule 1 reads it.
    #[must_use]
    pub fn back(self) -> Self {
        match self.current {
            View::Contact => NavState {
                current: self.previous,
                ..self
            },
            View::Bio | View::History | View::Goals => NavState {
                current: View::Hub,
                ..self
            },
            View::Hub | View::About => NavState {
                current: View::Home,
                ..self
            },
            View::Home => self,
        }
    }
}

impl Default for NavState {
    fn default() -> Self {
        NavState::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn at(current: View, previous: View) -> NavState {
        NavState { current, previous }
    }

    #[test]
    fn starts_on_home() {
        let nav = NavState::new();
        assert_eq!(nav.current, View::Home);
        assert_eq!(nav.previous, View::Home);
    }

    #[test]
    fn goto_same_view_is_identity() {
        for v in View::ALL {
            for p in View::ALL {
                let nav = at(v, p);
                assert_eq!(nav.goto(v), nav);
            }
        }
    }

    #[test]
    fn goto_records_previous_for_all_distinct_pairs() {
        for from in View::ALL {
            for to in View::ALL {
                if from == to {
                    continue;
                }
                let nav = at(from, View::Goals).goto(to);
                assert_eq!(nav.current, to);
                assert_eq!(nav.previous, from);
            }
        }
    }

    #[test]
    fn back_from_contact_returns_to_previous() {
        for p in View::ALL {
            let nav = at(View::Contact, p).back();
            assert_eq!(nav.current, p);
            assert_eq!(nav.previous, p, "previous must not be rewritten");
        }
    }

    #[test]
    fn back_from_leaves_returns_to_hub_regardless_of_previous() {
        for leaf in View::LEAVES {
            for p in View::ALL {
                assert_eq!(at(leaf, p).back().current, View::Hub);
            }
        }
    }

    #[test]
    fn back_from_hub_and_about_returns_home() {
        for v in [View::Hub, View::About] {
            for p in View::ALL {
                assert_eq!(at(v, p).back().current, View::Home);
            }
        }
    }

    #[test]
    fn back_from_home_is_identity() {
        for p in View::ALL {
            let nav = at(View::Home, p);
            assert_eq!(nav.back(), nav);
        }
    }

    #[test]
    fn back_never_touches_previous() {
        for v in View::ALL {
            for p in View::ALL {
                assert_eq!(at(v, p).back().previous, p);
            }
        }
    }

    #[test]
    fn contact_entered_from_a_leaf_backs_out_to_that_leaf() {
        // Home → Hub → Bio → Contact → back lands on Bio, not the hub.
        let nav = NavState::new()
            .goto(View::Hub)
            .goto(View::Bio)
            .goto(View::Contact);
        assert_eq!(nav, at(View::Contact, View::Bio));

        let nav = nav.back();
        assert_eq!(nav, at(View::Bio, View::Bio));

        let nav = nav.back();
        assert_eq!(nav, at(View::Hub, View::Bio));
    }

    #[test]
    fn full_walkthrough() {
        let nav = NavState::new();
        let nav = nav.goto(View::Hub);
        assert_eq!(nav, at(View::Hub, View::Home));
        let nav = nav.goto(View::Bio);
        assert_eq!(nav, at(View::Bio, View::Hub));
        let nav = nav.goto(View::Contact);
        assert_eq!(nav, at(View::Contact, View::Bio));
        let nav = nav.back();
        assert_eq!(nav, at(View::Bio, View::Bio));
        let nav = nav.back();
        assert_eq!(nav, at(View::Hub, View::Bio));
    }
}
