//! Light/dark theme preference and the document marker it drives.

/// Light or dark theme preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    /// Light theme mode.
    Light,
    /// Dark theme mode.
    #[default]
    Dark,
}

impl Theme {
    /// String identifier used in storage and the `data-theme` attribute.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The opposite theme.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Parse a stored value; unknown legacy values yield `None`.
    #[must_use]
    pub fn from_stored(value: &str) -> Option<Self> {
        match value.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// Translation key for the toggle button label.
    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::Light => "nav.theme_light",
            Self::Dark => "nav.theme_dark",
        }
    }
}

/// Document-level sink for the active theme (the `data-theme` attribute in the browser).
pub trait ThemeMarker {
    /// Reflect `theme` onto the document.
    fn mark(&mut self, theme: Theme);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_mode_to_str() {
        assert_eq!(Theme::Light.as_str(), "light");
        assert_eq!(Theme::Dark.as_str(), "dark");
    }

    #[test]
    fn toggling_twice_is_identity() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_ne!(theme.toggled(), theme);
            assert_eq!(theme.toggled().toggled(), theme);
        }
    }

    #[test]
    fn stored_values_parse_strictly() {
        assert_eq!(Theme::from_stored("light"), Some(Theme::Light));
        assert_eq!(Theme::from_stored(" dark "), Some(Theme::Dark));
        assert_eq!(Theme::from_stored("sepia"), None);
        assert_eq!(Theme::default(), Theme::Dark);
    }
}
