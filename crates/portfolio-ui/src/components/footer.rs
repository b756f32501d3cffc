//! Contact footer with the legal notice overlay.

use crate::components::hooks::{OverlayAction, use_deferred, use_language, use_overlay};
use crate::components::modal::Modal;
use crate::components::social::SocialLinks;
use crate::core::nav::Section;
use crate::core::overlay::Dismiss;
use crate::core::profile::{CONTACT_EMAIL, contact_uri, copyright_line};
use chrono::Utc;
use yew::prelude::*;

#[function_component(Footer)]
pub(crate) fn footer() -> HtmlResult {
    use_deferred()?;
    let lang = use_language();
    let legal = use_overlay::<()>();

    let on_open_legal = {
        let legal = legal.dispatcher();
        Callback::from(move |_: MouseEvent| legal.dispatch(OverlayAction::Open(())))
    };
    let on_close = {
        let legal = legal.dispatcher();
        use_callback(
            move |reason: Dismiss, _| legal.dispatch(OverlayAction::Close(reason)),
            (),
        )
    };

    Ok(html! {
        <footer id={Section::Contact.id()} class="footer">
            <h2 class="section-heading">{lang.t("footer.heading")}</h2>
            <p class="footer-text">{lang.t("footer.text")}</p>
            <a class="footer-email" href={contact_uri()}>{CONTACT_EMAIL}</a>
            <SocialLinks class="footer-social" />
            <div class="footer-legal">
                <p>{copyright_line(Utc::now(), &lang.t("footer.rights"))}</p>
                <button type="button" class="btn btn-link" onclick={on_open_legal}>
                    {lang.t("footer.legal_link")}
                </button>
            </div>
            if legal.is_open() {
                <Modal title={lang.t("legal.title")} on_close={on_close} class="legal-modal">
                    {for lang.bundle.list("legal.paragraphs").into_iter().map(|paragraph| html! { <p>{paragraph}</p> })}
                </Modal>
            }
        </footer>
    })
}
