//! Project showcase with a markdown detail overlay.

use crate::components::hooks::{OverlayAction, use_deferred, use_language, use_overlay, use_records};
use crate::components::modal::Modal;
use crate::core::content::{self, Project};
use crate::core::markdown::render_markdown;
use crate::core::nav::Section;
use crate::core::overlay::Dismiss;
use gloo::console;
use gloo::utils::document;
use yew::prelude::*;

#[function_component(Portfolio)]
pub(crate) fn portfolio() -> HtmlResult {
    use_deferred()?;
    let lang = use_language();
    let projects = use_records("portfolio", content::projects);
    let detail = use_overlay::<Project>();
    let view_details = lang.t("portfolio.view_details");

    let on_close = {
        let detail = detail.dispatcher();
        use_callback(
            move |reason: Dismiss, _| detail.dispatch(OverlayAction::Close(reason)),
            (),
        )
    };

    Ok(html! {
        <section id={Section::Portfolio.id()} class="section portfolio">
            <h2 class="section-heading">{lang.t("portfolio.heading")}</h2>
            <div class="project-grid">
                {for projects.iter().map(|project| {
                    let dispatcher = detail.dispatcher();
                    let payload = project.clone();
                    let onclick = Callback::from(move |_| {
                        dispatcher.dispatch(OverlayAction::Open(payload.clone()));
                    });
                    html! {
                        <article key={project.id} class="project-card">
                            <p class="project-company">{project.company.clone()}</p>
                            <h3 class="project-title">{project.title.clone()}</h3>
                            <p class="project-description">{project.description.clone()}</p>
                            <ul class="tech-tags">
                                {for project.tech.iter().map(|tech| html! { <li class="tech-tag">{*tech}</li> })}
                            </ul>
                            <button type="button" class="btn btn-link" {onclick}>
                                {view_details.clone()}
                            </button>
                        </article>
                    }
                })}
            </div>
            if let Some(project) = detail.payload() {
                <Modal
                    title={project.title.clone()}
                    subtitle={AttrValue::from(project.company.clone())}
                    on_close={on_close}
                    class="project-modal">
                    {markdown_view(project.detail.as_deref().unwrap_or(&project.description))}
                    <ul class="tech-tags">
                        {for project.tech.iter().map(|tech| html! { <li class="tech-tag">{*tech}</li> })}
                    </ul>
                    if let Some(github) = project.github {
                        <a href={github} target="_blank" rel="noopener noreferrer">{"GitHub"}</a>
                    }
                </Modal>
            }
        </section>
    })
}

fn markdown_view(source: &str) -> Html {
    document().create_element("div").map_or_else(
        |err| {
            console::error!("markdown container failed", err);
            html! { <pre class="markdown-body">{source}</pre> }
        },
        |container| {
            container.set_class_name("markdown-body");
            container.set_inner_html(&render_markdown(source));
            Html::VRef(container.into())
        },
    )
}
