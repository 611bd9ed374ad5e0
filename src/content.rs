//! Static portfolio content: prose, headings, links, asset references.
//!
//! Pure data. The rendering layer and the profile dump both read it;
//! nothing here is mutated at runtime.

use serde::Serialize;

use crate::nav::View;

// ============================================================================
// BRAND & FOOTER LABELS
// ============================================================================

/// Top-bar brand anchor. Always navigates home.
pub const BRAND: &str = "WILLIAM";

/// Brand label swap on the colophon view.
pub const BRAND_ON_ABOUT: &str = "ABOUT";

/// Footer-left label on the landing view (opens the colophon).
pub const FOOTER_ABOUT: &str = "JEFFERSON";

/// Footer-left label everywhere else.
pub const FOOTER_BACK: &str = "BACK";

// ============================================================================
// LINKS
// ============================================================================

/// What kind of target a link launches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    /// A web URL, handed to the system opener.
    Url,
    /// A mail address, wrapped as `mailto:`.
    Email,
    /// A file shipped with the site (the resume).
    Document,
}

/// Stable identifiers for the launchable links.
///
/// Keys double as CLI names (`folio open resume`) and as the basis for
/// key hints in the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkKey {
    Resume,
    Email,
    Elsewhere,
    Handshake,
    LinkedIn,
}

impl LinkKey {
    pub const ALL: [LinkKey; 5] = [
        LinkKey::Resume,
        LinkKey::Email,
        LinkKey::Elsewhere,
        LinkKey::Handshake,
        LinkKey::LinkedIn,
    ];
}

/// An outbound link as shown in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Link {
    pub key: LinkKey,
    /// Display text.
    pub label: &'static str,
    pub kind: LinkKind,
    /// URL, mail address, or relative document path.
    pub target: &'static str,
}

/// Downloadable resume, linked from the history view.
pub const LINK_RESUME: Link = Link {
    key: LinkKey::Resume,
    label: "view my full resume here",
    kind: LinkKind::Document,
    target: "assets/docs/WmJefferson11a.pdf",
};

/// Direct mail address, linked from the contact view.
pub const LINK_EMAIL: Link = Link {
    key: LinkKey::Email,
    label: "wm@wmjefferson.com",
    kind: LinkKind::Email,
    target: "wm@wmjefferson.com",
};

/// External personal site, linked from the colophon.
pub const LINK_ELSEWHERE: Link = Link {
    key: LinkKey::Elsewhere,
    label: "Elsewhere",
    kind: LinkKind::Url,
    target: "https://www.jeffersonwm.com",
};

/// Handshake profile — footer icon, visible everywhere.
pub const LINK_HANDSHAKE: Link = Link {
    key: LinkKey::Handshake,
    label: "Handshake",
    kind: LinkKind::Url,
    target: "https://ccsf.joinhandshake.com/profiles/wmjefferson",
};

/// LinkedIn profile — footer icon, visible everywhere.
pub const LINK_LINKEDIN: Link = Link {
    key: LinkKey::LinkedIn,
    label: "LinkedIn",
    kind: LinkKind::Url,
    target: "https://www.linkedin.com/in/wmjefferson",
};

/// The two always-visible outbound icons in the footer.
pub const FOOTER_LINKS: [Link; 2] = [LINK_HANDSHAKE, LINK_LINKEDIN];

/// Look up a link by its key.
pub fn link(key: LinkKey) -> Link {
    match key {
        LinkKey::Resume => LINK_RESUME,
        LinkKey::Email => LINK_EMAIL,
        LinkKey::Elsewhere => LINK_ELSEWHERE,
        LinkKey::Handshake => LINK_HANDSHAKE,
        LinkKey::LinkedIn => LINK_LINKEDIN,
    }
}

// ============================================================================
// HEADINGS
// ============================================================================

pub const HEADING_HOME: &str =
    "I Am a College Sophomore Looking for an Opportunity to Learn.";

/// The tail of the landing headline is the interactive part — it opens
/// the hub. Rendered with the accent style.
pub const HOME_ACTION: &str = "Learn.";

const HEADING_BIO: &str = "Here is where I am";
const HEADING_HISTORY: &str = "That is where I've been.";
const HEADING_GOALS: &str = "This is where I'm going.";
const HEADING_CONTACT: &str = "Reach out to me";
const HEADING_ABOUT: &str = "© 2025 William Jefferson.";

/// The hub's three headlines, each opening its leaf view.
pub const HUB_ENTRIES: [(View, &str); 3] = [
    (View::Bio, HEADING_BIO),
    (View::History, HEADING_HISTORY),
    (View::Goals, HEADING_GOALS),
];

// ============================================================================
// BODY PROSE
// ============================================================================

static BODY_HUB: [&str; 3] = [HEADING_BIO, HEADING_HISTORY, HEADING_GOALS];

static BODY_BIO: [&str; 5] = [
    "I am William \"Bill\" Jefferson, a sophomore at City College of San \
     Francisco, a Studio Arts major expecting to transfer to a Cal State \
     school in Spring 2027.",
    "I am an INFP who has a beautiful dog that loves everyone. My top O*NET \
     codes are Artistic, Enterprising, and Conventional, and my VIA \
     Strengths include Zest, Curiosity, and Humor.",
    "I am an average photographer with lukewarm poetry writing skills, that \
     hopes to one day become a flawed painter. And my goals for playing the \
     piano are not based in reality.",
    "I am learning to combine the abilities of AI with my own insight and \
     capability, bringing design to this website and distinctiveness to the \
     sometimes uncomfortable process of looking for an internship.",
    "Though, having taken this first step I feel successful, and I'm more \
     confident in my potential to learn the professional world as well as \
     the technical one.",
];

static BODY_HISTORY: [&str; 3] = [
    "My professional journey is defined by a decade of dedication across \
     diverse sectors. In the hospitality industry, I served as a Shift \
     Manager and Inventory Manager, where I mastered the art of \
     high-pressure logistics and team leadership.",
    "Beyond management, I've contributed to the essential infrastructure of \
     my community through roles with the United States Postal Service and \
     San Francisco Clean City. These positions required a high degree of \
     accountability and organizational precision.",
    "For a detailed look at my professional history, you can view my full \
     resume.",
];

static BODY_GOALS: [&str; 1] = [
    "I am well-positioned for careers in Public Relations, Marketing, or \
     Nonprofit Administration. My educational focus on Studio Arts provides \
     the creativity and visual communication skills essential for designing \
     campaigns and managing public images.",
];

static BODY_CONTACT: [&str; 2] = [
    "I'm always open to new connections, professional opportunities, or \
     collaborative creative projects. Feel free to drop me a line.",
    "You can reach me directly via email.",
];

static BODY_ABOUT: [&str; 1] = ["Portrait of William Jefferson"];

// ============================================================================
// PER-VIEW CONTENT
// ============================================================================

/// Everything a view displays besides chrome: heading, prose, links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ViewContent {
    pub view: View,
    pub heading: &'static str,
    pub body: &'static [&'static str],
    pub links: &'static [Link],
}

/// Total content lookup. The hub carries its three headlines as body
/// lines so the profile dump reads coherently.
pub fn view_content(view: View) -> ViewContent {
    match view {
        View::Home => ViewContent {
            view,
            heading: HEADING_HOME,
            body: &[],
            links: &[],
        },
        View::Hub => ViewContent {
            view,
            heading: "",
            body: &BODY_HUB,
            links: &[],
        },
        View::Bio => ViewContent {
            view,
            heading: HEADING_BIO,
            body: &BODY_BIO,
            links: &[],
        },
        View::History => ViewContent {
            view,
            heading: HEADING_HISTORY,
            body: &BODY_HISTORY,
            links: &[LINK_RESUME],
        },
        View::Goals => ViewContent {
            view,
            heading: HEADING_GOALS,
            body: &BODY_GOALS,
            links: &[],
        },
        View::About => ViewContent {
            view,
            heading: HEADING_ABOUT,
            body: &BODY_ABOUT,
            links: &[LINK_ELSEWHERE],
        },
        View::Contact => ViewContent {
            view,
            heading: HEADING_CONTACT,
            body: &BODY_CONTACT,
            links: &[LINK_EMAIL],
        },
    }
}

/// Brand label for the top bar: swaps on the colophon view.
pub fn brand(view: View) -> &'static str {
    if view == View::About {
        BRAND_ON_ABOUT
    } else {
        BRAND
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_view_has_content() {
        for v in View::ALL {
            let c = view_content(v);
            assert_eq!(c.view, v);
            assert!(
                !c.heading.is_empty() || !c.body.is_empty(),
                "{v:?} must show something"
            );
        }
    }

    #[test]
    fn link_lookup_is_total_and_consistent() {
        for key in LinkKey::ALL {
            assert_eq!(link(key).key, key);
        }
    }

    #[test]
    fn footer_links_are_urls() {
        for l in FOOTER_LINKS {
            assert_eq!(l.kind, LinkKind::Url);
            assert!(l.target.starts_with("https://"));
        }
    }

    #[test]
    fn hub_entries_cover_the_leaves() {
        let targets: Vec<View> = HUB_ENTRIES.iter().map(|(v, _)| *v).collect();
        assert_eq!(targets, View::LEAVES.to_vec());
    }

    #[test]
    fn brand_swaps_only_on_about() {
        for v in View::ALL {
            if v == View::About {
                assert_eq!(brand(v), BRAND_ON_ABOUT);
            } else {
                assert_eq!(brand(v), BRAND);
            }
        }
    }

    #[test]
    fn home_headline_ends_with_its_action() {
        assert!(HEADING_HOME.ends_with(HOME_ACTION));
    }

    #[test]
    fn view_local_links_sit_on_their_views() {
        assert_eq!(view_content(View::History).links, &[LINK_RESUME]);
        assert_eq!(view_content(View::Contact).links, &[LINK_EMAIL]);
        assert_eq!(view_content(View::About).links, &[LINK_ELSEWHERE]);
    }
}
