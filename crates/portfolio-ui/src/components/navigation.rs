//! Fixed navigation bar: section links, mobile menu, language and theme controls.
//!
//! # Design
//! - A single window `scroll` listener feeds [`ScrollState`]; it runs once on mount so
//!   the first paint reflects a restored scroll position.
//! - The listener keeps its own copy of the state so a miss can keep the previous highlight.
//! - Every action inside the mobile menu closes it.

use crate::app::dom::{navigate, scroll_y, section_extents};
use crate::components::hooks::use_language;
use crate::components::language_menu::LanguageMenu;
use crate::core::nav::{MobileMenu, ScrollState, Section};
use crate::core::profile::{OWNER_INITIALS, OWNER_NAME, contact_uri};
use crate::core::theme::Theme;
use gloo::events::EventListener;
use gloo::utils::window;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct NavigationProps {
    pub(crate) theme: Theme,
    pub(crate) on_toggle_theme: Callback<()>,
}

#[function_component(Navigation)]
pub(crate) fn navigation(props: &NavigationProps) -> Html {
    let lang = use_language();
    let scroll = use_state_eq(ScrollState::default);
    let menu = use_state_eq(MobileMenu::default);

    {
        let scroll = scroll.clone();
        use_effect_with_deps(
            move |_| {
                let mut state = ScrollState::default();
                let mut observe = move || {
                    state = state.observe(scroll_y(), &section_extents());
                    scroll.set(state);
                };
                observe();
                let listener = EventListener::new(&window(), "scroll", move |_| observe());
                move || drop(listener)
            },
            (),
        );
    }

    let close_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| menu.set(menu.after_link_click()))
    };
    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| menu.set(menu.toggled()))
    };
    let on_contact = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            menu.set(menu.after_link_click());
            navigate(&contact_uri());
        })
    };
    let on_select_language = {
        let menu = menu.clone();
        let set_language = lang.set_language.clone();
        Callback::from(move |language| {
            menu.set(menu.after_link_click());
            set_language.emit(language);
        })
    };
    let on_toggle_theme = {
        let on_toggle_theme = props.on_toggle_theme.clone();
        Callback::from(move |_: MouseEvent| on_toggle_theme.emit(()))
    };

    let open = menu.is_open();
    let theme_icon = match props.theme {
        Theme::Light => "☀",
        Theme::Dark => "☾",
    };

    html! {
        <nav class={classes!("navbar", scroll.scrolled.then_some("scrolled"))}>
            <div class="navbar-inner">
                <a class="navbar-brand" href="#" aria-label={OWNER_NAME}>{OWNER_INITIALS}</a>
                <button
                    type="button"
                    class="menu-toggle"
                    aria-label={lang.t("nav.toggle_menu")}
                    aria-expanded={open.to_string()}
                    onclick={toggle_menu}>
                    {if open { "✕" } else { "☰" }}
                </button>
                <ul class={classes!("nav-links", open.then_some("open"))}>
                    {for Section::TRACKED.iter().map(|&section| {
                        section_link(section, scroll.active == Some(section), lang.t(section.label_key()), close_menu.clone())
                    })}
                    <li>
                        <button type="button" class="nav-contact" onclick={on_contact}>
                            <span class="desktop-only">{lang.t("nav.contact")}</span>
                            <span class="mobile-only">{lang.t("nav.contact_mobile")}</span>
                        </button>
                    </li>
                    <li class="nav-controls">
                        <LanguageMenu
                            language={lang.language}
                            label={lang.t("nav.language")}
                            on_select={on_select_language}
                        />
                        <button
                            type="button"
                            class="theme-toggle"
                            aria-label={lang.t("nav.toggle_theme")}
                            onclick={on_toggle_theme}>
                            <span aria-hidden="true">{theme_icon}</span>
                            <span>{lang.t(props.theme.label_key())}</span>
                        </button>
                    </li>
                </ul>
            </div>
        </nav>
    }
}

fn section_link(section: Section, active: bool, label: String, onclick: Callback<MouseEvent>) -> Html {
    html! {
        <li>
            <a
                href={section.anchor()}
                class={classes!("nav-link", active.then_some("active"))}
                aria-current={active.then_some("true")}
                {onclick}>
                {label}
            </a>
        </li>
    }
}
