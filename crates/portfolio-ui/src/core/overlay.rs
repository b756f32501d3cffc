//! Overlay and dropdown state machines.
//!
//! # Design
//! - An overlay is either closed or open with the payload captured when it opened.
//! - Dismissal rules are pure functions so the wasm listeners only translate events.
//! - Background scroll suppression is reference counted: the first holder locks,
//!   the last release restores.

/// Closed, or open with a payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Overlay<T> {
    /// Nothing shown.
    Closed,
    /// Shown with the captured payload.
    Open(T),
}

impl<T> Default for Overlay<T> {
    fn default() -> Self {
        Self::Closed
    }
}

impl<T> Overlay<T> {
    /// Open with `payload`, replacing any previous one.
    pub fn open(&mut self, payload: T) {
        *self = Self::Open(payload);
    }

    /// Close, returning what was showing and why it closed.
    ///
    /// Closing a closed overlay returns `None`.
    pub fn close(&mut self, reason: Dismiss) -> Option<Dismissed<T>> {
        match std::mem::replace(self, Self::Closed) {
            Self::Open(payload) => Some(Dismissed { payload, reason }),
            Self::Closed => None,
        }
    }

    /// Whether the overlay is showing.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    /// Payload currently shown.
    #[must_use]
    pub const fn payload(&self) -> Option<&T> {
        match self {
            Self::Open(payload) => Some(payload),
            Self::Closed => None,
        }
    }
}

impl Overlay<()> {
    /// Flip a payload-free overlay (dropdown trigger).
    pub fn toggle(&mut self) {
        if self.is_open() {
            self.close(Dismiss::Trigger);
        } else {
            self.open(());
        }
    }
}

/// Payload of an overlay that just closed, with the reason.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dismissed<T> {
    /// What was showing.
    pub payload: T,
    /// What closed it.
    pub reason: Dismiss,
}

/// Why an overlay closed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dismiss {
    /// Explicit close button.
    CloseButton,
    /// Click on the backdrop outside the content box.
    Backdrop,
    /// Escape key.
    EscapeKey,
    /// Pointer down outside a dropdown container.
    OutsideClick,
    /// An entry inside the overlay was chosen.
    Selection,
    /// The element that opened it was pressed again.
    Trigger,
}

impl Dismiss {
    /// Short tag for logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CloseButton => "close-button",
            Self::Backdrop => "backdrop",
            Self::EscapeKey => "escape",
            Self::OutsideClick => "outside-click",
            Self::Selection => "selection",
            Self::Trigger => "trigger",
        }
    }

    /// Whether the user picked something rather than backing out.
    #[must_use]
    pub const fn is_selection(self) -> bool {
        matches!(self, Self::Selection)
    }
}

/// Whether a keyboard `key` value dismisses an open overlay.
#[must_use]
pub fn dismiss_key(key: &str) -> Option<Dismiss> {
    (key == "Escape" || key == "Esc").then_some(Dismiss::EscapeKey)
}

/// Backdrop click rule: only clicks whose target lies outside the content box close.
#[must_use]
pub const fn backdrop_click(target_inside_content: bool) -> Option<Dismiss> {
    if target_inside_content {
        None
    } else {
        Some(Dismiss::Backdrop)
    }
}

/// Dropdown rule: pointer down outside the container closes.
#[must_use]
pub const fn outside_pointer(target_inside_container: bool) -> Option<Dismiss> {
    if target_inside_container {
        None
    } else {
        Some(Dismiss::OutsideClick)
    }
}

/// Transition reported by [`ScrollLockCount`] when the DOM must change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LockTransition {
    /// First holder: suppress scrolling.
    Engage,
    /// Last holder released: restore scrolling.
    Release,
}

/// Reference count of open full-screen overlays.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollLockCount {
    holders: usize,
}

impl ScrollLockCount {
    /// Count with no holders.
    #[must_use]
    pub const fn new() -> Self {
        Self { holders: 0 }
    }

    /// Register a holder.
    pub const fn acquire(&mut self) -> Option<LockTransition> {
        self.holders += 1;
        if self.holders == 1 {
            Some(LockTransition::Engage)
        } else {
            None
        }
    }

    /// Drop a holder; extra releases are ignored.
    pub const fn release(&mut self) -> Option<LockTransition> {
        match self.holders {
            0 => None,
            1 => {
                self.holders = 0;
                Some(LockTransition::Release)
            }
            _ => {
                self.holders -= 1;
                None
            }
        }
    }

    /// Current number of holders.
    #[must_use]
    pub const fn holders(self) -> usize {
        self.holders
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reopening_shows_the_new_payload_only() {
        let mut overlay = Overlay::Closed;
        overlay.open("tetra-pak");
        assert_eq!(
            overlay.close(Dismiss::CloseButton),
            Some(Dismissed {
                payload: "tetra-pak",
                reason: Dismiss::CloseButton
            })
        );
        assert!(!overlay.is_open());
        overlay.open("cemantica");
        assert_eq!(overlay.payload(), Some(&"cemantica"));
    }

    #[test]
    fn open_replaces_payload_without_closing() {
        let mut overlay = Overlay::Closed;
        overlay.open(1);
        overlay.open(2);
        assert_eq!(overlay, Overlay::Open(2));
    }

    #[test]
    fn closing_a_closed_overlay_is_a_no_op() {
        let mut overlay: Overlay<u8> = Overlay::Closed;
        assert_eq!(overlay.close(Dismiss::EscapeKey), None);
        assert_eq!(overlay, Overlay::Closed);
    }

    #[test]
    fn dropdown_toggles_and_closes_on_outside_pointer_only() {
        let mut dropdown: Overlay<()> = Overlay::Closed;
        dropdown.toggle();
        assert!(dropdown.is_open());

        assert_eq!(outside_pointer(true), None);
        assert!(dropdown.is_open());

        let reason = outside_pointer(false).unwrap();
        let closed = dropdown.close(reason).unwrap();
        assert_eq!(closed.reason, Dismiss::OutsideClick);
        assert!(!closed.reason.is_selection());
        assert!(!dropdown.is_open());

        dropdown.toggle();
        dropdown.toggle();
        assert!(!dropdown.is_open());
    }

    #[test]
    fn selection_close_reports_the_selection() {
        let mut menu = Overlay::Closed;
        menu.open(());
        let closed = menu.close(Dismiss::Selection).unwrap();
        assert!(closed.reason.is_selection());
        assert_eq!(closed.reason.as_str(), "selection");
        assert_eq!(Dismiss::EscapeKey.as_str(), "escape");
    }

    #[test]
    fn backdrop_ignores_clicks_inside_content() {
        assert_eq!(backdrop_click(true), None);
        assert_eq!(backdrop_click(false), Some(Dismiss::Backdrop));
    }

    #[test]
    fn only_escape_dismisses() {
        assert_eq!(dismiss_key("Escape"), Some(Dismiss::EscapeKey));
        assert_eq!(dismiss_key("Esc"), Some(Dismiss::EscapeKey));
        assert_eq!(dismiss_key("Enter"), None);
    }

    #[test]
    fn scroll_lock_engages_once_and_releases_last() {
        let mut lock = ScrollLockCount::default();
        assert_eq!(lock.acquire(), Some(LockTransition::Engage));
        assert_eq!(lock.acquire(), None);
        assert_eq!(lock.release(), None);
        assert_eq!(lock.holders(), 1);
        assert_eq!(lock.release(), Some(LockTransition::Release));
        assert_eq!(lock.release(), None);
        assert_eq!(lock, ScrollLockCount::new());
    }
}
