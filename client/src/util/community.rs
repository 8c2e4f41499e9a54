//! Sidebar presentation for communities: icon glyph and accent colour.
//!
//! The backend only knows page names; the visual mapping lives here. Unknown
//! communities fall back to a neutral style.

#[cfg(test)]
#[path = "community_test.rs"]
mod community_test;

/// Icon + colour class for one sidebar entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CommunityStyle {
    pub icon: &'static str,
    pub color_class: &'static str,
}

const ALL: CommunityStyle = CommunityStyle { icon: "⌂", color_class: "text-neon-blue" };
const DEFAULT: CommunityStyle = CommunityStyle { icon: "#", color_class: "text-neon-blue" };

const KNOWN: &[(&str, CommunityStyle)] = &[
    ("CSE", CommunityStyle { icon: "</>", color_class: "text-neon-blue" }),
    ("ECE", CommunityStyle { icon: "⌁", color_class: "text-neon-magenta" }),
    ("Math", CommunityStyle { icon: "∑", color_class: "text-neon-violet" }),
    ("Physics", CommunityStyle { icon: "⚗", color_class: "text-electric-cyan" }),
    ("AI/ML", CommunityStyle { icon: "◎", color_class: "text-neon-blue" }),
    ("General", CommunityStyle { icon: "⚡", color_class: "text-neon-magenta" }),
];

/// Style for `name`; `"All"` gets the home glyph.
#[must_use]
pub fn style_for(name: &str) -> CommunityStyle {
    if name == peerpoint::forum::ALL_COMMUNITIES {
        return ALL;
    }
    KNOWN
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(name))
        .map_or(DEFAULT, |(_, style)| *style)
}

/// Route for a community page; the name is percent-encoded so `AI/ML`
/// stays one path segment.
#[must_use]
pub fn community_href(name: &str) -> String {
    format!("/page/{}", urlencoding::encode(name))
}

/// Static figures for the "Your Stats" panel.
pub const STATS: [(&str, &str); 3] = [("XP Points", "1,247"), ("Rank", "#42"), ("Solved", "23")];
