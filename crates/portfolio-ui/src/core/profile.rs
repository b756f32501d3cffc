//! Compile-time site configuration: owner details, outbound links, asset paths and
//! the scroll thresholds used by the navigation bar.

use chrono::{DateTime, Datelike, Utc};

/// Site owner's display name.
pub const OWNER_NAME: &str = "Francisco Perez Leiros";
/// Initials shown in the navigation badge.
pub const OWNER_INITIALS: &str = "FP";
/// Contact address used by every contact action.
pub const CONTACT_EMAIL: &str = "Fran.pl@icloud.com";
/// Subject line pre-filled by the contact action.
pub const CONTACT_SUBJECT: &str = "Portfolio Contact - Inquiry";
/// Code-hosting profile.
pub const GITHUB_URL: &str = "https://github.com/saicisco";
/// Professional-network profile.
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/francisco-leiros/";
/// Hero avatar.
pub const PROFILE_IMAGE: &str = "profile.jpg";

/// Storage key for the theme preference.
pub const THEME_KEY: &str = "theme";
/// Storage key for the language preference.
pub const LANGUAGE_KEY: &str = "language";

/// Vertical offset past which the navigation bar switches to its scrolled style.
pub const SCROLLED_THRESHOLD_PX: f64 = 50.0;
/// Lookahead added to the scroll offset when picking the active section.
pub const SECTION_LOOKAHEAD_PX: f64 = 100.0;

/// Downloadable CV formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CvFormat {
    /// Portable document.
    Pdf,
    /// Markdown source.
    Markdown,
}

impl CvFormat {
    /// Formats in dropdown order.
    #[must_use]
    pub const fn all() -> [Self; 2] {
        [Self::Pdf, Self::Markdown]
    }

    /// Relative path opened in a new browsing context.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Pdf => "/CV.pdf",
            Self::Markdown => "/CV.md",
        }
    }

    /// Translation key for the dropdown entry.
    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::Pdf => "hero.download_pdf",
            Self::Markdown => "hero.download_markdown",
        }
    }
}

/// `mailto:` URI with the percent-encoded contact subject.
#[must_use]
pub fn contact_uri() -> String {
    format!(
        "mailto:{CONTACT_EMAIL}?subject={}",
        urlencoding::encode(CONTACT_SUBJECT)
    )
}

/// Footer copyright line for the year of `now`.
#[must_use]
pub fn copyright_line(now: DateTime<Utc>, rights: &str) -> String {
    format!("© {} {OWNER_NAME}. {rights}", now.year())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn contact_uri_encodes_subject() {
        assert_eq!(
            contact_uri(),
            "mailto:Fran.pl@icloud.com?subject=Portfolio%20Contact%20-%20Inquiry"
        );
    }

    #[test]
    fn cv_formats_have_fixed_paths() {
        let paths: Vec<_> = CvFormat::all().iter().map(|f| f.path()).collect();
        assert_eq!(paths, ["/CV.pdf", "/CV.md"]);
    }

    #[test]
    fn copyright_uses_current_year() {
        let now = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
        assert_eq!(
            copyright_line(now, "All Rights Reserved."),
            "© 2026 Francisco Perez Leiros. All Rights Reserved."
        );
    }
}
