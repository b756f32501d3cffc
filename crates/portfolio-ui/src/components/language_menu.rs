//! Language switcher used in the navigation bar.
//!
//! # Design
//! - Selection state is owned by the caller; the component only emits the choice.
//! - One button per supported language, the active one pressed.

use crate::i18n::Language;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct LanguageMenuProps {
    pub(crate) language: Language,
    pub(crate) label: AttrValue,
    pub(crate) on_select: Callback<Language>,
}

#[function_component(LanguageMenu)]
pub(crate) fn language_menu(props: &LanguageMenuProps) -> Html {
    html! {
        <div class="language-menu" role="group" aria-label={props.label.clone()}>
            {for Language::all().iter().map(|language| {
                let next = *language;
                let active = next == props.language;
                let on_select = props.on_select.clone();
                let onclick = Callback::from(move |_| on_select.emit(next));
                html! {
                    <button
                        type="button"
                        class={classes!("language-option", active.then_some("active"))}
                        aria-pressed={active.to_string()}
                        title={next.label()}
                        {onclick}>
                        {next.code().to_ascii_uppercase()}
                    </button>
                }
            })}
        </div>
    }
}
