//! Landing section: introduction, calls to action and the skill grid.

use crate::app::dom::{navigate, scroll_to};
use crate::components::cv_dropdown::CvDropdown;
use crate::components::hooks::{OverlayAction, use_language, use_overlay, use_records};
use crate::components::modal::Modal;
use crate::components::social::SocialLinks;
use crate::core::content::{self, Skill};
use crate::core::nav::Section;
use crate::core::overlay::Dismiss;
use crate::core::profile::{OWNER_NAME, PROFILE_IMAGE, contact_uri};
use yew::prelude::*;

#[function_component(Hero)]
pub(crate) fn hero() -> Html {
    let lang = use_language();
    let skills = use_records("skills", content::skills);
    let skill_modal = use_overlay::<Skill>();

    let on_contact = Callback::from(|_: MouseEvent| navigate(&contact_uri()));
    let on_view_work = Callback::from(|_: MouseEvent| scroll_to(Section::Portfolio));
    let on_close = {
        let skill_modal = skill_modal.dispatcher();
        use_callback(
            move |reason: Dismiss, _| skill_modal.dispatch(OverlayAction::Close(reason)),
            (),
        )
    };

    html! {
        <section id="home" class="hero">
            <div class="hero-intro">
                <img class="hero-avatar" src={PROFILE_IMAGE} alt={OWNER_NAME} />
                <h1 class="hero-name">{OWNER_NAME}</h1>
                <p class="hero-subtitle">{lang.t("hero.subtitle")}</p>
                <p class="hero-tagline">{lang.t("hero.tagline")}</p>
                <SocialLinks class="hero-social" />
                <div class="hero-actions">
                    <CvDropdown />
                    <button type="button" class="btn btn-primary" onclick={on_contact}>
                        {lang.t("hero.get_in_touch")}
                    </button>
                    <button type="button" class="btn btn-secondary" onclick={on_view_work}>
                        {lang.t("hero.view_work")}
                    </button>
                </div>
            </div>
            <div class="hero-skills">
                <h2>{lang.t("hero.skills_heading")}</h2>
                <ul class="skills-grid">
                    {for skills.iter().map(|skill| {
                        let dispatcher = skill_modal.dispatcher();
                        let payload = skill.clone();
                        let onclick = Callback::from(move |_| {
                            dispatcher.dispatch(OverlayAction::Open(payload.clone()));
                        });
                        html! {
                            <li key={skill.id}>
                                <button type="button" class="skill-chip" {onclick}>
                                    <span class="skill-icon" aria-hidden="true">{skill.icon}</span>
                                    <span>{skill.name.clone()}</span>
                                </button>
                            </li>
                        }
                    })}
                </ul>
            </div>
            if let Some(skill) = skill_modal.payload() {
                <Modal title={skill.name.clone()} on_close={on_close} class="skill-modal">
                    <p class="skill-modal-icon" aria-hidden="true">{skill.icon}</p>
                    <p>{skill.description.clone()}</p>
                </Modal>
            }
        </section>
    }
}
