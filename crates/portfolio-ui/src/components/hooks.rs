//! Shared hooks: language access, deferred rendering, record loading and overlay reducers.

use crate::app::LanguageContext;
use crate::core::error::ContentError;
use crate::core::overlay::{Dismiss, Overlay};
use crate::i18n::{DEFAULT_LANGUAGE, TranslationBundle};
use gloo::console;
use gloo_timers::future::TimeoutFuture;
use std::rc::Rc;
use yew::prelude::*;
use yew::suspense::{Suspension, SuspensionResult};

/// Language context, or the default language when rendered outside the provider.
#[hook]
pub(crate) fn use_language() -> LanguageContext {
    use_context::<LanguageContext>().unwrap_or_else(|| LanguageContext {
        language: DEFAULT_LANGUAGE,
        bundle: TranslationBundle::for_language(DEFAULT_LANGUAGE),
        set_language: Callback::noop(),
    })
}

/// Suspend the calling component until the next macrotask.
#[hook]
pub(crate) fn use_deferred() -> SuspensionResult<()> {
    let ready = use_state(|| false);
    if *ready {
        return Ok(());
    }
    Err(Suspension::from_future(async move {
        TimeoutFuture::new(0).await;
        ready.set(true);
    }))
}

/// Merged records for the active language; failures are logged and render as empty.
#[hook]
pub(crate) fn use_records<T: 'static>(
    section: &'static str,
    load: fn(&TranslationBundle) -> Result<Vec<T>, ContentError>,
) -> Rc<Vec<T>> {
    let language = use_language().language;
    use_memo(
        move |language| {
            load(TranslationBundle::for_language(*language)).unwrap_or_else(|err| {
                console::error!("content unavailable", section, err.to_string());
                Vec::new()
            })
        },
        language,
    )
}

/// Transitions for an [`Overlay`] held in a reducer.
pub(crate) enum OverlayAction<T> {
    Open(T),
    Close(Dismiss),
}

impl<T: Clone + 'static> Reducible for Overlay<T> {
    type Action = OverlayAction<T>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            OverlayAction::Open(payload) => next.open(payload),
            OverlayAction::Close(reason) => {
                if let Some(closed) = next.close(reason) {
                    let kind = if closed.reason.is_selection() {
                        "selected"
                    } else {
                        "dismissed"
                    };
                    console::debug!("overlay closed", kind, closed.reason.as_str());
                }
            }
        }
        Rc::new(next)
    }
}

/// Overlay state owned by the calling component.
#[hook]
pub(crate) fn use_overlay<T: Clone + PartialEq + 'static>() -> UseReducerHandle<Overlay<T>> {
    use_reducer_eq(Overlay::default)
}
