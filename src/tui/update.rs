//! Pure state transitions: (NavState, Action) → Transition.
//!
//! This is where the per-view control surface lives. Fully testable
//! without a terminal. Globally visible controls (brand, envelope,
//! footer icons, quit) work on every view; view-local controls are
//! only honored where the view shows them. Unhandled actions return
//! the navigation state unchanged (no-op).

use crate::content::{self, LinkKey, HUB_ENTRIES};
use crate::nav::{NavState, View};
use crate::platform::Launch;

use super::state::{Action, Transition};

/// Pure state transition function.
pub fn update(nav: NavState, action: &Action) -> Transition {
    match action {
        Action::Quit => Transition::Quit,

        // Always-visible chrome.
        Action::Home => Transition::Nav(nav.goto(View::Home)),
        Action::Contact => Transition::Nav(nav.goto(View::Contact)),
        Action::Back => Transition::Nav(nav.back()),

        // The landing headline drills into the hub.
        Action::Enter => {
            if nav.current == View::Home {
                Transition::Nav(nav.goto(View::Hub))
            } else {
                Transition::Nav(nav)
            }
        }

        // Hub entries: 1-3 open the leaf views.
        Action::NumberKey(n) => {
            let entry = (*n as usize)
                .checked_sub(1)
                .and_then(|i| HUB_ENTRIES.get(i));
            match entry {
                Some((leaf, _)) if nav.current == View::Hub => {
                    Transition::Nav(nav.goto(*leaf))
                }
                _ => Transition::Nav(nav),
            }
        }

        // The footer-left slot only offers the colophon on the landing
        // view (elsewhere it reads BACK).
        Action::About => {
            if nav.current == View::Home {
                Transition::Nav(nav.goto(View::About))
            } else {
                Transition::Nav(nav)
            }
        }

        Action::OpenLink(key) => {
            if link_available(nav.current, *key) {
                Transition::Effect(Launch::from(content::link(*key)))
            } else {
                Transition::Nav(nav)
            }
        }
    }
}

/// Whether a link control is present on a view.
///
/// The two footer icons are global; the inline links belong to the
/// view whose prose carries them.
fn link_available(view: View, key: LinkKey) -> bool {
    match key {
        LinkKey::Handshake | LinkKey::LinkedIn => true,
        LinkKey::Resume => view == View::History,
        LinkKey::Email => view == View::Contact,
        LinkKey::Elsewhere => view == View::About,
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{LINK_ELSEWHERE, LINK_EMAIL, LINK_RESUME};

    fn at(current: View, previous: View) -> NavState {
        NavState { current, previous }
    }

    #[test]
    fn quit_from_anywhere() {
        for v in View::ALL {
            assert_eq!(update(at(v, View::Home), &Action::Quit), Transition::Quit);
        }
    }

    #[test]
    fn brand_goes_home_from_anywhere() {
        for v in View::ALL {
            let result = update(at(v, View::Goals), &Action::Home);
            match result {
                Transition::Nav(nav) => assert_eq!(nav.current, View::Home),
                other => panic!("Expected Nav, got {:?}", other),
            }
        }
    }

    #[test]
    fn envelope_opens_contact_and_records_origin() {
        let result = update(at(View::Bio, View::Hub), &Action::Contact);
        assert_eq!(result, Transition::Nav(at(View::Contact, View::Bio)));
    }

    #[test]
    fn enter_on_home_opens_hub() {
        let result = update(NavState::new(), &Action::Enter);
        assert_eq!(result, Transition::Nav(at(View::Hub, View::Home)));
    }

    #[test]
    fn enter_elsewhere_is_noop() {
        for v in View::ALL {
            if v == View::Home {
                continue;
            }
            let nav = at(v, View::Home);
            assert_eq!(update(nav, &Action::Enter), Transition::Nav(nav));
        }
    }

    #[test]
    fn hub_numbers_open_the_leaves() {
        let hub = at(View::Hub, View::Home);
        for (i, leaf) in View::LEAVES.iter().enumerate() {
            let result = update(hub, &Action::NumberKey(i as u8 + 1));
            assert_eq!(result, Transition::Nav(at(*leaf, View::Hub)));
        }
    }

    #[test]
    fn out_of_range_number_is_noop() {
        let hub = at(View::Hub, View::Home);
        assert_eq!(update(hub, &Action::NumberKey(4)), Transition::Nav(hub));
        assert_eq!(update(hub, &Action::NumberKey(0)), Transition::Nav(hub));
    }

    #[test]
    fn numbers_off_the_hub_are_noops() {
        let nav = at(View::Bio, View::Hub);
        assert_eq!(update(nav, &Action::NumberKey(1)), Transition::Nav(nav));
    }

    #[test]
    fn footer_about_only_works_on_home() {
        let result = update(NavState::new(), &Action::About);
        assert_eq!(result, Transition::Nav(at(View::About, View::Home)));

        let nav = at(View::Hub, View::Home);
        assert_eq!(update(nav, &Action::About), Transition::Nav(nav));
    }

    #[test]
    fn back_resolves_through_the_state_machine() {
        let result = update(at(View::Contact, View::Goals), &Action::Back);
        assert_eq!(result, Transition::Nav(at(View::Goals, View::Goals)));

        let result = update(at(View::Bio, View::Home), &Action::Back);
        assert_eq!(result, Transition::Nav(at(View::Hub, View::Home)));
    }

    #[test]
    fn back_on_home_preserves_state() {
        let nav = NavState::new();
        assert_eq!(update(nav, &Action::Back), Transition::Nav(nav));
    }

    #[test]
    fn footer_icons_launch_from_anywhere() {
        for v in View::ALL {
            let nav = at(v, View::Home);
            for key in [LinkKey::Handshake, LinkKey::LinkedIn] {
                match update(nav, &Action::OpenLink(key)) {
                    Transition::Effect(Launch::Url(_)) => {}
                    other => panic!("Expected Url effect on {v:?}, got {other:?}"),
                }
            }
        }
    }

    #[test]
    fn resume_only_launches_on_history() {
        let result = update(at(View::History, View::Hub), &Action::OpenLink(LinkKey::Resume));
        assert_eq!(result, Transition::Effect(Launch::Document(LINK_RESUME.target)));

        let nav = at(View::Bio, View::Hub);
        assert_eq!(
            update(nav, &Action::OpenLink(LinkKey::Resume)),
            Transition::Nav(nav)
        );
    }

    #[test]
    fn email_only_launches_on_contact() {
        let result = update(at(View::Contact, View::Bio), &Action::OpenLink(LinkKey::Email));
        assert_eq!(result, Transition::Effect(Launch::Email(LINK_EMAIL.target)));

        let nav = NavState::new();
        assert_eq!(
            update(nav, &Action::OpenLink(LinkKey::Email)),
            Transition::Nav(nav)
        );
    }

    #[test]
    fn elsewhere_only_launches_on_about() {
        let result = update(at(View::About, View::Home), &Action::OpenLink(LinkKey::Elsewhere));
        assert_eq!(result, Transition::Effect(Launch::Url(LINK_ELSEWHERE.target)));

        let nav = at(View::Goals, View::Hub);
        assert_eq!(
            update(nav, &Action::OpenLink(LinkKey::Elsewhere)),
            Transition::Nav(nav)
        );
    }

    #[test]
    fn effects_never_move_the_navigation() {
        // A launch leaves NavState untouched: the loop only rebinds nav
        // on Transition::Nav, so an Effect result is sufficient proof.
        let nav = at(View::History, View::Hub);
        match update(nav, &Action::OpenLink(LinkKey::Resume)) {
            Transition::Effect(_) => {}
            other => panic!("Expected effect, got {other:?}"),
        }
    }
}
