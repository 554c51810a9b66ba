//! Two-state display theme.

use std::fmt;

/// Display theme; `Light` until the user picks otherwise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Read a persisted value. Anything but `"dark"` is light.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    /// Read the theme currently set on the page root. Only an explicit
    /// `"light"` is light, so a toggle from anything else lands on light.
    pub fn from_applied(value: Option<&str>) -> Self {
        match value {
            Some("light") => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Glyph shown on the toggle button
    pub fn icon(&self) -> &'static str {
        match self {
            Theme::Light => "🌒",
            Theme::Dark => "🌖",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_stored() {
        assert_eq!(Theme::from_stored(None), Theme::Light);
        assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
        assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("Dark")), Theme::Light);
        assert_eq!(Theme::from_stored(Some("")), Theme::Light);
    }

    #[test]
    fn test_from_applied() {
        assert_eq!(Theme::from_applied(Some("light")), Theme::Light);
        assert_eq!(Theme::from_applied(Some("dark")), Theme::Dark);
        assert_eq!(Theme::from_applied(Some("auto")), Theme::Dark);
        assert_eq!(Theme::from_applied(None).toggled(), Theme::Light);
    }

    #[test]
    fn test_toggle_twice_is_identity() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }

    #[test]
    fn test_icons() {
        assert_eq!(Theme::Light.icon(), "🌒");
        assert_eq!(Theme::Dark.icon(), "🌖");
    }
}
