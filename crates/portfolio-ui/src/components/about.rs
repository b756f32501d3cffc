use crate::components::hooks::{use_deferred, use_language};
use crate::core::nav::Section;
use yew::prelude::*;

#[function_component(About)]
pub(crate) fn about() -> HtmlResult {
    use_deferred()?;
    let lang = use_language();
    let paragraphs = lang.bundle.list("about.paragraphs");

    Ok(html! {
        <section id={Section::About.id()} class="section about">
            <h2 class="section-heading">{lang.t("about.heading")}</h2>
            <div class="about-body">
                {for paragraphs.into_iter().map(|paragraph| html! { <p>{paragraph}</p> })}
            </div>
        </section>
    })
}
