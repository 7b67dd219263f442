//! Card colour themes and their closed palette.

use serde::{Deserialize, Serialize};

const INK: &str = "#101215";

/// Colour scheme requested for a card.
///
/// Any name other than `"dark"` resolves to [`Theme::Light`]; unknown themes
/// are never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Colours interpolated into the stylesheet for a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub foreground: &'static str,
    /// Colour of the dotted radial-gradient pattern behind the card.
    pub radial: &'static str,
}

const LIGHT_PALETTE: Palette = Palette {
    background: "white",
    foreground: INK,
    radial: "lightgray",
};

const DARK_PALETTE: Palette = Palette {
    background: INK,
    foreground: "white",
    radial: "dimgray",
};

impl Theme {
    pub fn from_name(name: &str) -> Self {
        match name {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Theme::Light => LIGHT_PALETTE,
            Theme::Dark => DARK_PALETTE,
        }
    }
}

impl From<String> for Theme {
    fn from(value: String) -> Self {
        Theme::from_name(&value)
    }
}

impl From<&str> for Theme {
    fn from(value: &str) -> Self {
        Theme::from_name(value)
    }
}
