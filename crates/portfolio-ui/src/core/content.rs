//! Portfolio records: language-independent catalog data merged with translated text.
//!
//! # Design
//! - Catalog entries and translated entries share a stable `id`; merging is by id,
//!   never by position.
//! - Merging is strict: a catalog id without text, or text without a catalog id, is an error.
//! - Output follows catalog order so reordering a bundle cannot reorder the page.

use crate::core::error::ContentError;
use crate::i18n::TranslationBundle;
use serde::Deserialize;

/// Language-independent project data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectMeta {
    /// Stable identifier shared with the bundle.
    pub id: &'static str,
    /// Technology tags.
    pub tech: &'static [&'static str],
    /// Project or demo link.
    pub link: &'static str,
    /// Source repository, when public.
    pub github: Option<&'static str>,
}

/// Language-independent job data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct JobMeta {
    /// Stable identifier shared with the bundle.
    pub id: &'static str,
    /// Company logo path.
    pub logo: Option<&'static str>,
}

/// Language-independent skill data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillMeta {
    /// Stable identifier shared with the bundle.
    pub id: &'static str,
    /// Glyph shown next to the skill name.
    pub icon: &'static str,
}

/// Featured projects, most recent first.
pub const PROJECTS: [ProjectMeta; 3] = [
    ProjectMeta {
        id: "tetra-pak-vv",
        tech: &["Beckhoff PLC", "TwinCAT", "Azure DevOps", "Linux", "SQL", "Docker"],
        link: "#portfolio",
        github: None,
    },
    ProjectMeta {
        id: "cemantica-pipeline",
        tech: &["Playwright", "TypeScript", "Azure DevOps", "CI/CD", "JavaScript"],
        link: "#portfolio",
        github: None,
    },
    ProjectMeta {
        id: "tudip-suite",
        tech: &["Postman", "SoapUI", "TestRail", "Jira", "Jenkins", "SQL"],
        link: "#portfolio",
        github: None,
    },
];

/// Work history, most recent first.
pub const JOBS: [JobMeta; 4] = [
    JobMeta {
        id: "tetra-pak",
        logo: Some("logos/tetrapak.png"),
    },
    JobMeta {
        id: "cemantica",
        logo: Some("logos/cemantica.jpg"),
    },
    JobMeta {
        id: "tudip",
        logo: Some("logos/tudip.jpg"),
    },
    JobMeta {
        id: "utest",
        logo: Some("logos/utest.jpg"),
    },
];

/// Hero skill grid.
pub const SKILLS: [SkillMeta; 18] = [
    SkillMeta { id: "ai", icon: "🧠" },
    SkillMeta { id: "mcp", icon: "🕸" },
    SkillMeta { id: "test-automation", icon: "🧪" },
    SkillMeta { id: "pipeline-design", icon: "🔀" },
    SkillMeta { id: "agile", icon: "👥" },
    SkillMeta { id: "e2e", icon: "🎯" },
    SkillMeta { id: "regression", icon: "⚗" },
    SkillMeta { id: "api", icon: "⚙" },
    SkillMeta { id: "mobile", icon: "📱" },
    SkillMeta { id: "playwright", icon: "🎭" },
    SkillMeta { id: "selenium", icon: "📦" },
    SkillMeta { id: "typescript", icon: "⌨" },
    SkillMeta { id: "python", icon: "🐍" },
    SkillMeta { id: "docker", icon: "🐳" },
    SkillMeta { id: "azure-devops", icon: "☁" },
    SkillMeta { id: "github-actions", icon: "🔁" },
    SkillMeta { id: "jira", icon: "💼" },
    SkillMeta { id: "postman", icon: "📮" },
];

#[derive(Debug, Deserialize)]
struct ProjectText {
    id: String,
    title: String,
    company: String,
    description: String,
    #[serde(default)]
    detail: Option<String>,
}

#[derive(Debug, Deserialize)]
struct JobText {
    id: String,
    role: String,
    company: String,
    duration: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct SkillText {
    id: String,
    name: String,
    description: String,
}

/// Project card and detail payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Project {
    /// Stable identifier.
    pub id: &'static str,
    /// Project title.
    pub title: String,
    /// Company the work was done for.
    pub company: String,
    /// Card summary.
    pub description: String,
    /// Technology tags.
    pub tech: &'static [&'static str],
    /// Project or demo link.
    pub link: &'static str,
    /// Source repository.
    pub github: Option<&'static str>,
    /// Markdown shown in the detail overlay.
    pub detail: Option<String>,
}

/// Work history entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExperienceItem {
    /// Stable identifier.
    pub id: &'static str,
    /// Job title.
    pub role: String,
    /// Company and location.
    pub company: String,
    /// Employment period.
    pub duration: String,
    /// Responsibilities, sentences separated by `". "`.
    pub description: String,
    /// Company logo path.
    pub logo: Option<&'static str>,
}

impl ExperienceItem {
    /// Description split into bullet points.
    #[must_use]
    pub fn points(&self) -> Vec<String> {
        description_points(&self.description)
    }
}

/// Hero skill with its detail text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Skill {
    /// Stable identifier.
    pub id: &'static str,
    /// Glyph shown next to the name.
    pub icon: &'static str,
    /// Display name.
    pub name: String,
    /// Detail overlay text.
    pub description: String,
}

/// Projects for `bundle`, in catalog order.
///
/// # Errors
/// Returns [`ContentError`] when the bundle section is unreadable or ids do not pair up.
pub fn projects(bundle: &TranslationBundle) -> Result<Vec<Project>, ContentError> {
    let texts: Vec<ProjectText> = bundle.entries("portfolio.projects")?;
    merge("project", &PROJECTS, |meta| meta.id, texts, |text| &text.id, |meta, text| Project {
        id: meta.id,
        title: text.title,
        company: text.company,
        description: text.description,
        tech: meta.tech,
        link: meta.link,
        github: meta.github,
        detail: text.detail,
    })
}

/// Work history for `bundle`, in catalog order.
///
/// # Errors
/// Returns [`ContentError`] when the bundle section is unreadable or ids do not pair up.
pub fn experience(bundle: &TranslationBundle) -> Result<Vec<ExperienceItem>, ContentError> {
    let texts: Vec<JobText> = bundle.entries("experience.jobs")?;
    merge("job", &JOBS, |meta| meta.id, texts, |text| &text.id, |meta, text| ExperienceItem {
        id: meta.id,
        role: text.role,
        company: text.company,
        duration: text.duration,
        description: text.description,
        logo: meta.logo,
    })
}

/// Skill grid for `bundle`, in catalog order.
///
/// # Errors
/// Returns [`ContentError`] when the bundle section is unreadable or ids do not pair up.
pub fn skills(bundle: &TranslationBundle) -> Result<Vec<Skill>, ContentError> {
    let texts: Vec<SkillText> = bundle.entries("hero.skills")?;
    merge("skill", &SKILLS, |meta| meta.id, texts, |text| &text.id, |meta, text| Skill {
        id: meta.id,
        icon: meta.icon,
        name: text.name,
        description: text.description,
    })
}

fn merge<M, T, R>(
    kind: &'static str,
    catalog: &[M],
    meta_id: impl Fn(&M) -> &'static str,
    texts: Vec<T>,
    text_id: impl Fn(&T) -> &String,
    combine: impl Fn(&M, T) -> R,
) -> Result<Vec<R>, ContentError> {
    if let Some(stray) = texts
        .iter()
        .find(|&text| !catalog.iter().any(|meta| meta_id(meta) == text_id(text).as_str()))
    {
        return Err(ContentError::UnknownEntry {
            kind,
            id: text_id(stray).clone(),
        });
    }
    let mut texts: Vec<Option<T>> = texts.into_iter().map(Some).collect();
    catalog
        .iter()
        .map(|meta| {
            let id = meta_id(meta);
            texts
                .iter_mut()
                .find(|slot| slot.as_ref().is_some_and(|text| text_id(text) == id))
                .and_then(Option::take)
                .map(|text| combine(meta, text))
                .ok_or_else(|| ContentError::MissingTranslation {
                    kind,
                    id: id.to_string(),
                })
        })
        .collect()
}

/// Split a description on `". "` into sentences, each ending with a period.
#[must_use]
pub fn description_points(description: &str) -> Vec<String> {
    description
        .split(". ")
        .map(|sentence| sentence.trim().trim_end_matches('.'))
        .filter(|sentence| !sentence.is_empty())
        .map(|sentence| format!("{sentence}."))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;

    #[test]
    fn every_language_pairs_every_record() {
        for language in Language::all() {
            let bundle = TranslationBundle::for_language(language);
            assert_eq!(projects(bundle).unwrap().len(), PROJECTS.len());
            assert_eq!(experience(bundle).unwrap().len(), JOBS.len());
            assert_eq!(skills(bundle).unwrap().len(), SKILLS.len());
        }
    }

    #[test]
    fn merged_records_carry_catalog_and_translated_fields() {
        let es = TranslationBundle::for_language(Language::Es);
        let jobs = experience(es).unwrap();
        assert_eq!(jobs[0].id, "tetra-pak");
        assert_eq!(jobs[0].logo, Some("logos/tetrapak.png"));
        assert!(jobs[0].company.starts_with("Tetra Pak"));

        let projects = projects(es).unwrap();
        assert_eq!(projects[1].tech, PROJECTS[1].tech);
        assert_eq!(projects[1].company, "Cemantica");
        assert!(projects[1].detail.as_deref().unwrap_or_default().contains("Azure DevOps"));
    }

    #[derive(Debug)]
    struct Text {
        id: String,
    }

    fn text(id: &str) -> Text {
        Text { id: id.to_string() }
    }

    const CATALOG: [JobMeta; 2] = [
        JobMeta { id: "a", logo: None },
        JobMeta { id: "b", logo: None },
    ];

    fn run(texts: Vec<Text>) -> Result<Vec<&'static str>, ContentError> {
        merge("job", &CATALOG, |m| m.id, texts, |t| &t.id, |m, _| m.id)
    }

    #[test]
    fn merge_follows_catalog_order_not_bundle_order() {
        assert_eq!(run(vec![text("b"), text("a")]), Ok(vec!["a", "b"]));
    }

    #[test]
    fn merge_rejects_missing_and_unknown_ids() {
        assert_eq!(
            run(vec![text("a")]),
            Err(ContentError::MissingTranslation {
                kind: "job",
                id: "b".to_string()
            })
        );
        assert_eq!(
            run(vec![text("a"), text("b"), text("z")]),
            Err(ContentError::UnknownEntry {
                kind: "job",
                id: "z".to_string()
            })
        );
    }

    #[test]
    fn duplicate_text_ids_leave_one_catalog_entry_unpaired() {
        assert!(matches!(
            run(vec![text("a"), text("a")]),
            Err(ContentError::MissingTranslation { .. })
        ));
    }

    #[test]
    fn description_points_end_with_a_period() {
        assert_eq!(
            description_points("Owned QA. Built pipelines. Shipped."),
            vec!["Owned QA.", "Built pipelines.", "Shipped."]
        );
        assert!(description_points("").is_empty());
    }
}
