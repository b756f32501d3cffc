//! Work history timeline.

use crate::components::hooks::{use_deferred, use_language, use_records};
use crate::core::content::{self, ExperienceItem};
use crate::core::nav::Section;
use yew::prelude::*;

#[function_component(Experience)]
pub(crate) fn experience() -> HtmlResult {
    use_deferred()?;
    let lang = use_language();
    let jobs = use_records("experience", content::experience);

    Ok(html! {
        <section id={Section::Experience.id()} class="section experience">
            <h2 class="section-heading">{lang.t("experience.heading")}</h2>
            <div class="timeline">
                {for jobs.iter().map(job_card)}
            </div>
        </section>
    })
}

fn job_card(job: &ExperienceItem) -> Html {
    html! {
        <article key={job.id} class="job-card">
            if let Some(logo) = job.logo {
                <img class="job-logo" src={logo} alt={job.company.clone()} loading="lazy" />
            }
            <div class="job-body">
                <h3 class="job-role">{job.role.clone()}</h3>
                <p class="job-company">{job.company.clone()}</p>
                <p class="job-duration">{job.duration.clone()}</p>
                <ul class="job-points">
                    {for job.points().into_iter().map(|point| html! { <li>{point}</li> })}
                </ul>
            </div>
        </article>
    }
}
