//! Full-screen modal shell shared by the skill, project and legal overlays.
//!
//! # Design
//! - The caller renders the modal only while its overlay is open; mounting takes a
//!   scroll lock and unmounting releases it.
//! - The Escape listener lives on the document and is dropped with the modal.
//! - Backdrop clicks close only when the target lies outside the content box.

use crate::app::dom::{ScrollLock, target_within};
use crate::components::hooks::use_language;
use crate::core::overlay::{Dismiss, backdrop_click, dismiss_key};
use gloo::events::EventListener;
use gloo::utils::document;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ModalProps {
    pub(crate) title: AttrValue,
    pub(crate) on_close: Callback<Dismiss>,
    #[prop_or_default]
    pub(crate) subtitle: Option<AttrValue>,
    #[prop_or_default]
    pub(crate) class: Classes,
    #[prop_or_default]
    pub(crate) children: Children,
}

#[function_component(Modal)]
pub(crate) fn modal(props: &ModalProps) -> Html {
    let lang = use_language();
    let content_ref = use_node_ref();

    use_effect_with_deps(
        move |_| {
            let lock = ScrollLock::acquire();
            move || drop(lock)
        },
        (),
    );
    use_effect_with_deps(
        move |on_close: &Callback<Dismiss>| {
            let on_close = on_close.clone();
            let listener = EventListener::new(&document(), "keydown", move |event| {
                let reason = event
                    .dyn_ref::<KeyboardEvent>()
                    .and_then(|event| dismiss_key(&event.key()));
                if let Some(reason) = reason {
                    on_close.emit(reason);
                }
            });
            move || drop(listener)
        },
        props.on_close.clone(),
    );

    let on_backdrop = {
        let content_ref = content_ref.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |event: MouseEvent| {
            if let Some(reason) = backdrop_click(target_within(&content_ref, &event)) {
                on_close.emit(reason);
            }
        })
    };
    let on_close_button = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(Dismiss::CloseButton))
    };

    html! {
        <div
            class="modal-backdrop"
            role="dialog"
            aria-modal="true"
            aria-label={props.title.clone()}
            onclick={on_backdrop}>
            <div class={classes!("modal-content", props.class.clone())} ref={content_ref}>
                <header class="modal-header">
                    <div>
                        <h3 class="modal-title">{props.title.clone()}</h3>
                        if let Some(subtitle) = props.subtitle.clone() {
                            <p class="modal-subtitle">{subtitle}</p>
                        }
                    </div>
                    <button
                        type="button"
                        class="modal-close"
                        aria-label={lang.t("modal.close")}
                        onclick={on_close_button}>
                        {"✕"}
                    </button>
                </header>
                <div class="modal-body">
                    { for props.children.iter() }
                </div>
            </div>
        </div>
    }
}
