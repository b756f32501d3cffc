//! Navigation view state derived from the scroll position.
//!
//! # Design
//! - Section geometry is read by the wasm layer and passed in as [`SectionExtent`]s,
//!   keeping the highlight rules testable without a DOM.
//! - Sections are checked in document order; the first containing extent wins and
//!   a miss keeps the previous highlight.

use crate::core::profile::{SCROLLED_THRESHOLD_PX, SECTION_LOOKAHEAD_PX};

/// Page sections that double as in-page anchors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    /// Biography.
    About,
    /// Work history.
    Experience,
    /// Project showcase.
    Portfolio,
    /// Blog teaser.
    Blog,
    /// Footer contact block.
    Contact,
}

impl Section {
    /// Sections eligible for the active highlight, in document order.
    pub const TRACKED: [Self; 4] = [Self::About, Self::Experience, Self::Portfolio, Self::Blog];

    /// Element id of the section.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Experience => "experience",
            Self::Portfolio => "portfolio",
            Self::Blog => "blog",
            Self::Contact => "contact",
        }
    }

    /// `href` for anchor links.
    #[must_use]
    pub const fn anchor(self) -> &'static str {
        match self {
            Self::About => "#about",
            Self::Experience => "#experience",
            Self::Portfolio => "#portfolio",
            Self::Blog => "#blog",
            Self::Contact => "#contact",
        }
    }

    /// Translation key of the navigation label.
    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::About => "nav.about",
            Self::Experience => "nav.experience",
            Self::Portfolio => "nav.portfolio",
            Self::Blog => "nav.blog",
            Self::Contact => "nav.contact",
        }
    }
}

/// Vertical extent of a rendered section.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionExtent {
    /// Section the extent belongs to.
    pub section: Section,
    /// Offset of the section's top edge from the document top.
    pub top: f64,
    /// Rendered height.
    pub height: f64,
}

impl SectionExtent {
    /// Whether `y` lies in `[top, top + height)`.
    #[must_use]
    pub const fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Whether the page is scrolled far enough for the compact navigation style.
#[must_use]
pub const fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_THRESHOLD_PX
}

/// First extent containing `scroll_y` plus the lookahead, in the order given.
#[must_use]
pub fn section_at(scroll_y: f64, extents: &[SectionExtent]) -> Option<Section> {
    let target = scroll_y + SECTION_LOOKAHEAD_PX;
    extents
        .iter()
        .find(|extent| extent.contains(target))
        .map(|extent| extent.section)
}

/// Scroll-derived navigation signals.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollState {
    /// Compact style flag.
    pub scrolled: bool,
    /// Highlighted section, sticky across misses.
    pub active: Option<Section>,
}

impl ScrollState {
    /// Recompute both signals for a new scroll offset.
    #[must_use]
    pub fn observe(self, scroll_y: f64, extents: &[SectionExtent]) -> Self {
        Self {
            scrolled: is_scrolled(scroll_y),
            active: section_at(scroll_y, extents).or(self.active),
        }
    }
}

/// Mobile menu open/closed state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    /// Whether the menu is showing.
    #[must_use]
    pub const fn is_open(self) -> bool {
        self.open
    }

    /// Hamburger press.
    #[must_use]
    pub const fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    /// Any link or action inside the menu closes it.
    #[must_use]
    pub const fn after_link_click(self) -> Self {
        Self { open: false }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extents() -> Vec<SectionExtent> {
        vec![
            SectionExtent {
                section: Section::About,
                top: 0.0,
                height: 300.0,
            },
            SectionExtent {
                section: Section::Experience,
                top: 300.0,
                height: 500.0,
            },
        ]
    }

    #[test]
    fn scroll_sequence_tracks_flag_and_section() {
        let extents = extents();
        let mut state = ScrollState::default();
        let mut seen = Vec::new();
        for y in [0.0, 40.0, 60.0, 500.0] {
            state = state.observe(y, &extents);
            seen.push((state.scrolled, state.active));
        }
        assert_eq!(
            seen,
            vec![
                (false, Some(Section::About)),
                (false, Some(Section::About)),
                (true, Some(Section::About)),
                (true, Some(Section::Experience)),
            ]
        );
    }

    #[test]
    fn threshold_is_exclusive() {
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
    }

    #[test]
    fn miss_keeps_previous_highlight() {
        let extents = extents();
        let state = ScrollState::default().observe(250.0, &extents);
        assert_eq!(state.active, Some(Section::Experience));
        let state = state.observe(5_000.0, &extents);
        assert_eq!(state.active, Some(Section::Experience));
        assert_eq!(ScrollState::default().observe(9_000.0, &extents).active, None);
    }

    #[test]
    fn overlapping_extents_resolve_in_document_order() {
        let overlapping = [
            SectionExtent {
                section: Section::Portfolio,
                top: 0.0,
                height: 1_000.0,
            },
            SectionExtent {
                section: Section::Blog,
                top: 100.0,
                height: 50.0,
            },
        ];
        assert_eq!(section_at(20.0, &overlapping), Some(Section::Portfolio));
    }

    #[test]
    fn extent_upper_bound_is_exclusive() {
        let extents = extents();
        assert_eq!(section_at(200.0, &extents), Some(Section::Experience));
        assert_eq!(section_at(199.0, &extents), Some(Section::About));
    }

    #[test]
    fn menu_link_click_closes_open_menu() {
        let menu = MobileMenu::default().toggled();
        assert!(menu.is_open());
        assert!(!menu.after_link_click().is_open());
        assert!(!menu.toggled().is_open());
    }

    #[test]
    fn tracked_sections_follow_document_order() {
        let ids: Vec<_> = Section::TRACKED.iter().map(|s| s.id()).collect();
        assert_eq!(ids, ["about", "experience", "portfolio", "blog"]);
        assert_eq!(Section::Contact.anchor(), "#contact");
    }
}
