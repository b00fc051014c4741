//! Light/dark theme flag

use std::fmt;

use serde::{Deserialize, Serialize};

/// Page theme. Independent of the game state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Value for the `data-theme` attribute.
    pub fn id(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Caption of the toggle button, naming the theme it switches to.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Light => "🌙 Dark",
            Theme::Dark => "☀️ Light",
        }
    }

    pub fn toggle_aria_label(self) -> String {
        format!("Switch to {} mode", self.toggled().id())
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_light() {
        assert_eq!(Theme::default(), Theme::Light);
    }

    #[test]
    fn test_toggle_involution() {
        for t in [Theme::Light, Theme::Dark] {
            assert_ne!(t.toggled(), t);
            assert_eq!(t.toggled().toggled(), t);
        }
    }

    #[test]
    fn test_toggle_captions() {
        assert_eq!(Theme::Light.toggle_label(), "🌙 Dark");
        assert_eq!(Theme::Dark.toggle_label(), "☀️ Light");
        assert_eq!(Theme::Light.toggle_aria_label(), "Switch to dark mode");
        assert_eq!(Theme::Dark.toggle_aria_label(), "Switch to light mode");
    }

    #[test]
    fn test_serde_ids() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
        let t: Theme = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(t, Theme::Light);
        assert_eq!(Theme::Dark.to_string(), "dark");
    }
}
