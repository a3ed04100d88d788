use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Light,
    Dark,
}

impl ColorMode {
    /// A stored choice wins over the system preference.
    pub fn effective(stored: Option<ColorMode>, prefers_dark: bool) -> Self {
        stored.unwrap_or(if prefers_dark {
            ColorMode::Dark
        } else {
            ColorMode::Light
        })
    }

    pub fn toggled(self) -> Self {
        match self {
            ColorMode::Light => ColorMode::Dark,
            ColorMode::Dark => ColorMode::Light,
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            ColorMode::Light => "light",
            ColorMode::Dark => "dark",
        }
    }

    /// Accessible label for the toggle button, describing what a click does.
    pub fn toggle_label(self) -> &'static str {
        match self {
            ColorMode::Light => "Switch to dark mode",
            ColorMode::Dark => "Switch to light mode",
        }
    }
}
