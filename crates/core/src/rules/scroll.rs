use folio_protocol::SectionBox;

/// Navbar shadow strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavbarShadow {
    Strong,
    Subtle,
}

impl NavbarShadow {
    pub fn css(self) -> &'static str {
        match self {
            NavbarShadow::Strong => "0 4px 12px rgba(0, 0, 0, 0.15)",
            NavbarShadow::Subtle => "0 2px 8px rgba(0, 0, 0, 0.08)",
        }
    }
}

pub fn navbar_shadow(offset: f64, threshold: f64) -> NavbarShadow {
    if offset > threshold {
        NavbarShadow::Strong
    } else {
        NavbarShadow::Subtle
    }
}

/// The section the reader is in: the last one, in document order, whose top
/// (less `lead`) has been scrolled past. Empty when none has.
pub fn current_section(offset: f64, sections: &[SectionBox], lead: f64) -> &str {
    sections
        .iter()
        .rfind(|s| offset >= s.offset_top - lead)
        .map_or("", |s| s.id.as_str())
}

/// Whether a nav link with `href` points at section `current`.
pub fn link_targets(href: &str, current: &str) -> bool {
    href.get(1..).unwrap_or("") == current
}

pub fn scroll_top_visible(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

/// Fragment of an in-page anchor `href`, without the `#`.
///
/// `None` for non-fragment links and for a bare `#`, which names no element.
pub fn anchor_fragment(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

pub const SCROLL_TOP_BUTTON_ID: &str = "scrollTopBtn";
pub const SCROLL_TOP_BUTTON_LABEL: &str = "\u{2191}";
pub const SCROLL_TOP_BUTTON_CSS: &str = "position: fixed; bottom: 30px; right: 30px; \
width: 50px; height: 50px; background-color: #000; color: white; border: none; \
border-radius: 50%; cursor: pointer; opacity: 0; visibility: hidden; \
transition: all 0.3s ease; z-index: 999; font-size: 1.2rem; font-weight: bold; \
display: flex; align-items: center; justify-content: center;";

/// `(opacity, visibility)` for the scroll-to-top button.
pub fn scroll_top_style(visible: bool) -> (&'static str, &'static str) {
    if visible {
        ("1", "visible")
    } else {
        ("0", "hidden")
    }
}

/// `(background-color, transform)` for the scroll-to-top button.
pub fn scroll_top_hover_style(hovered: bool) -> (&'static str, &'static str) {
    if hovered {
        ("#333", "scale(1.1)")
    } else {
        ("#000", "scale(1)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<SectionBox> {
        vec![
            SectionBox::new("home", 0.0),
            SectionBox::new("about", 800.0),
            SectionBox::new("projects", 1600.0),
        ]
    }

    #[test]
    fn shadow_is_strong_only_past_threshold() {
        assert_eq!(navbar_shadow(0.0, 100.0), NavbarShadow::Subtle);
        assert_eq!(navbar_shadow(100.0, 100.0), NavbarShadow::Subtle);
        assert_eq!(navbar_shadow(100.5, 100.0), NavbarShadow::Strong);
        assert_eq!(navbar_shadow(5000.0, 100.0), NavbarShadow::Strong);
    }

    #[test]
    fn current_section_uses_lead() {
        let s = sections();
        assert_eq!(current_section(0.0, &s, 200.0), "home");
        assert_eq!(current_section(599.0, &s, 200.0), "home");
        assert_eq!(current_section(600.0, &s, 200.0), "about");
        assert_eq!(current_section(1450.0, &s, 200.0), "projects");
    }

    #[test]
    fn last_match_wins_even_out_of_order() {
        // A later section with a smaller offset still wins when both match.
        let s = vec![
            SectionBox::new("late", 900.0),
            SectionBox::new("early", 100.0),
        ];
        assert_eq!(current_section(1000.0, &s, 200.0), "early");
    }

    #[test]
    fn no_section_reached() {
        let s = vec![SectionBox::new("far", 1000.0)];
        assert_eq!(current_section(0.0, &s, 200.0), "");
        assert!(link_targets("#", ""));
        assert!(!link_targets("#far", ""));
    }

    #[test]
    fn link_matching_strips_hash() {
        assert!(link_targets("#about", "about"));
        assert!(!link_targets("#about", "projects"));
        assert!(!link_targets("", "about"));
    }

    #[test]
    fn anchor_fragments() {
        assert_eq!(anchor_fragment("#contact"), Some("contact"));
        assert_eq!(anchor_fragment("#"), None);
        assert_eq!(anchor_fragment("https://example.com"), None);
    }

    #[test]
    fn scroll_top_visibility_boundary() {
        assert!(!scroll_top_visible(300.0, 300.0));
        assert!(scroll_top_visible(301.0, 300.0));
        assert_eq!(scroll_top_style(true), ("1", "visible"));
        assert_eq!(scroll_top_style(false), ("0", "hidden"));
    }
}
