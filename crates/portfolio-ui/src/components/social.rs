//! Outbound profile links shared by the hero and footer.

use crate::core::profile::{GITHUB_URL, LINKEDIN_URL};
use yew::prelude::*;

#[derive(Properties, PartialEq, Eq)]
pub(crate) struct SocialLinksProps {
    #[prop_or_default]
    pub(crate) class: Classes,
}

#[function_component(SocialLinks)]
pub(crate) fn social_links(props: &SocialLinksProps) -> Html {
    html! {
        <div class={classes!("social-links", props.class.clone())}>
            <a href={GITHUB_URL} target="_blank" rel="noopener noreferrer" aria-label="GitHub">
                {"GitHub"}
            </a>
            <a href={LINKEDIN_URL} target="_blank" rel="noopener noreferrer" aria-label="LinkedIn">
                {"LinkedIn"}
            </a>
        </div>
    }
}
