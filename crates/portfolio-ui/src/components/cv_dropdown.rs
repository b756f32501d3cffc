//! CV download dropdown in the hero.

use crate::app::dom::{open_in_new_tab, target_within};
use crate::components::hooks::{OverlayAction, use_language, use_overlay};
use crate::core::overlay::{Dismiss, outside_pointer};
use crate::core::profile::CvFormat;
use gloo::events::EventListener;
use gloo::utils::document;
use yew::prelude::*;

#[function_component(CvDropdown)]
pub(crate) fn cv_dropdown() -> Html {
    let lang = use_language();
    let menu = use_overlay::<()>();
    let container = use_node_ref();
    let open = menu.is_open();

    {
        let menu = menu.dispatcher();
        let container = container.clone();
        use_effect_with_deps(
            move |open| {
                let listener = open.then(|| {
                    EventListener::new(&document(), "mousedown", move |event| {
                        if let Some(reason) = outside_pointer(target_within(&container, event)) {
                            menu.dispatch(OverlayAction::Close(reason));
                        }
                    })
                });
                move || drop(listener)
            },
            open,
        );
    }

    let on_trigger = {
        let menu = menu.dispatcher();
        Callback::from(move |_| {
            menu.dispatch(if open {
                OverlayAction::Close(Dismiss::Trigger)
            } else {
                OverlayAction::Open(())
            });
        })
    };

    html! {
        <div class={classes!("cv-dropdown", open.then_some("open"))} ref={container}>
            <button
                type="button"
                class="btn btn-outline"
                aria-haspopup="menu"
                aria-expanded={open.to_string()}
                onclick={on_trigger}>
                {lang.t("hero.download_cv")}
                <span class="chevron" aria-hidden="true">{"▾"}</span>
            </button>
            if open {
                <ul class="cv-dropdown-menu" role="menu">
                    {for CvFormat::all().iter().map(|format| {
                        let format = *format;
                        let menu = menu.dispatcher();
                        let onclick = Callback::from(move |_| {
                            open_in_new_tab(format.path());
                            menu.dispatch(OverlayAction::Close(Dismiss::Selection));
                        });
                        html! {
                            <li role="none">
                                <button type="button" role="menuitem" {onclick}>
                                    {lang.t(format.label_key())}
                                </button>
                            </li>
                        }
                    })}
                </ul>
            }
        </div>
    }
}
