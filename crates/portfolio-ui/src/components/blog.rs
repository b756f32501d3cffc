use crate::components::hooks::{use_deferred, use_language};
use crate::core::nav::Section;
use yew::prelude::*;

#[function_component(Blog)]
pub(crate) fn blog() -> HtmlResult {
    use_deferred()?;
    let lang = use_language();

    Ok(html! {
        <section id={Section::Blog.id()} class="section blog">
            <h2 class="section-heading">{lang.t("blog.heading")}</h2>
            <p class="coming-soon">{lang.t("blog.coming_soon")}</p>
        </section>
    })
}
