//! App root: preference state, the language context and page layout.
//!
//! # Design
//! - One reducer owns [`Preferences`]; theme and language only change through its actions.
//! - The document theme marker is written while the reducer initializes, before any
//!   section renders.
//! - Sections below the hero are deferred behind `Suspense` placeholders.

use crate::components::about::About;
use crate::components::blog::Blog;
use crate::components::experience::Experience;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::navigation::Navigation;
use crate::components::portfolio::Portfolio;
use crate::core::preferences::Preferences;
use crate::i18n::{Language, TranslationBundle};
use preferences::{BrowserStore, DocumentThemeMarker, log_preference_error};
use std::rc::Rc;
use yew::prelude::*;

pub(crate) mod dom;
mod preferences;

/// Language state handed to every section.
#[derive(Clone, PartialEq)]
pub(crate) struct LanguageContext {
    pub(crate) language: Language,
    pub(crate) bundle: &'static TranslationBundle,
    pub(crate) set_language: Callback<Language>,
}

impl LanguageContext {
    /// Text at `key` in the active bundle.
    pub(crate) fn t(&self, key: &str) -> String {
        self.bundle.text(key)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct PreferenceState(Preferences<BrowserStore>);

enum PreferenceAction {
    SetLanguage(Language),
    ToggleTheme,
}

impl PreferenceState {
    fn init() -> Self {
        let prefs = Preferences::load(BrowserStore);
        if let Some(err) = prefs.degraded() {
            log_preference_error("load", err);
        }
        prefs.apply_theme(&mut DocumentThemeMarker);
        Self(prefs)
    }
}

impl Reducible for PreferenceState {
    type Action = PreferenceAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut prefs = self.0.clone();
        let outcome = match action {
            PreferenceAction::SetLanguage(language) => prefs
                .set_language(language)
                .map_err(|err| ("set_language", err)),
            PreferenceAction::ToggleTheme => prefs
                .toggle_theme(&mut DocumentThemeMarker)
                .map(drop)
                .map_err(|err| ("toggle_theme", err)),
        };
        if let Err((operation, err)) = outcome {
            log_preference_error(operation, &err);
        }
        Rc::new(Self(prefs))
    }
}

/// Root component: navigation, eager hero and the deferred sections.
#[function_component(PortfolioApp)]
pub fn portfolio_app() -> Html {
    let prefs = use_reducer(PreferenceState::init);
    let language = prefs.0.language();
    let theme = prefs.0.theme();

    let set_language = {
        let prefs = prefs.dispatcher();
        use_callback(
            move |language, _| prefs.dispatch(PreferenceAction::SetLanguage(language)),
            (),
        )
    };
    let on_toggle_theme = {
        let prefs = prefs.dispatcher();
        use_callback(move |(), _| prefs.dispatch(PreferenceAction::ToggleTheme), ())
    };
    let context = use_memo(
        move |(language, set_language)| LanguageContext {
            language: *language,
            bundle: TranslationBundle::for_language(*language),
            set_language: set_language.clone(),
        },
        (language, set_language),
    );

    use_effect_with_deps(
        move |language| {
            if let Some(root) = gloo::utils::document().document_element() {
                let _ = root.set_attribute("lang", language.code());
            }
            || ()
        },
        language,
    );

    let placeholder = html! { <div class="section-placeholder" aria-busy="true"></div> };

    html! {
        <ContextProvider<LanguageContext> context={(*context).clone()}>
            <div class="portfolio">
                <Navigation {theme} {on_toggle_theme} />
                <main>
                    <Hero />
                    <Suspense fallback={placeholder.clone()}>
                        <About />
                        <Experience />
                        <Portfolio />
                        <Blog />
                    </Suspense>
                </main>
                <Suspense fallback={placeholder}>
                    <Footer />
                </Suspense>
            </div>
        </ContextProvider<LanguageContext>>
    }
}

/// Mount the portfolio on `#root`, or on the body when it is missing.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<PortfolioApp>::with_root(root).render();
    } else {
        yew::Renderer::<PortfolioApp>::new().render();
    }
}
