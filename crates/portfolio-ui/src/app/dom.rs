//! Window and document helpers shared by the components.
//!
//! # Design
//! - Geometry reads and navigation side effects live here so components stay declarative.
//! - The body scroll lock is a guard: holding it keeps scrolling suppressed, dropping the
//!   last one restores the previous `overflow` value.

use crate::core::nav::{Section, SectionExtent};
use crate::core::overlay::{LockTransition, ScrollLockCount};
use gloo::console;
use gloo::utils::{body, document, window};
use std::cell::{Cell, RefCell};
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlElement, Node, ScrollBehavior, ScrollIntoViewOptions};
use yew::NodeRef;

thread_local! {
    static LOCK_COUNT: Cell<ScrollLockCount> = const { Cell::new(ScrollLockCount::new()) };
    static SAVED_OVERFLOW: RefCell<String> = const { RefCell::new(String::new()) };
}

/// Suppresses body scrolling while alive.
#[derive(Debug)]
pub(crate) struct ScrollLock {
    _private: (),
}

impl ScrollLock {
    pub(crate) fn acquire() -> Self {
        let transition = LOCK_COUNT.with(|cell| {
            let mut count = cell.get();
            let transition = count.acquire();
            cell.set(count);
            transition
        });
        if transition == Some(LockTransition::Engage) {
            let style = body().style();
            let previous = style.get_property_value("overflow").unwrap_or_default();
            SAVED_OVERFLOW.with(|saved| *saved.borrow_mut() = previous);
            let _ = style.set_property("overflow", "hidden");
        }
        Self { _private: () }
    }
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        let transition = LOCK_COUNT.with(|cell| {
            let mut count = cell.get();
            let transition = count.release();
            cell.set(count);
            transition
        });
        if transition == Some(LockTransition::Release) {
            let previous = SAVED_OVERFLOW.with(RefCell::take);
            let style = body().style();
            let _ = if previous.is_empty() {
                style.remove_property("overflow").map(drop)
            } else {
                style.set_property("overflow", &previous)
            };
        }
    }
}

/// Current vertical scroll offset.
pub(crate) fn scroll_y() -> f64 {
    window().scroll_y().unwrap_or_default()
}

/// Extents of the tracked sections currently in the DOM, in document order.
pub(crate) fn section_extents() -> Vec<SectionExtent> {
    let document = document();
    Section::TRACKED
        .iter()
        .filter_map(|section| {
            let element = document
                .get_element_by_id(section.id())?
                .dyn_into::<HtmlElement>()
                .ok()?;
            Some(SectionExtent {
                section: *section,
                top: f64::from(element.offset_top()),
                height: f64::from(element.offset_height()),
            })
        })
        .collect()
}

/// Smooth-scroll the section's element into view, if rendered.
pub(crate) fn scroll_to(section: Section) {
    if let Some(element) = document().get_element_by_id(section.id()) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// Open `path` in a new browsing context.
pub(crate) fn open_in_new_tab(path: &str) {
    if let Err(err) = window().open_with_url_and_target(path, "_blank") {
        console::error!("open failed", path, err);
    }
}

/// Navigate the current context to `uri` (used for `mailto:`).
pub(crate) fn navigate(uri: &str) {
    if let Err(err) = window().location().set_href(uri) {
        console::error!("navigation failed", uri, err);
    }
}

/// Whether the event target lies inside the element behind `container`.
pub(crate) fn target_within(container: &NodeRef, event: &Event) -> bool {
    let Some(container) = container.get() else {
        return false;
    };
    event
        .target()
        .and_then(|target| target.dyn_into::<Node>().ok())
        .is_some_and(|node| container.contains(Some(&node)))
}
