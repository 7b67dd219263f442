use serde::{Deserialize, Serialize};

use super::theme::Theme;

/// Font size applied to the heading when the caller does not provide one.
pub const DEFAULT_FONT_SIZE: &str = "96px";

/// Parsed card request handed to the renderer.
///
/// The JSON shape mirrors the query model of the image endpoint
/// (`text`, `theme`, `md`, `fontSize`, `images`); every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CardRequest {
    /// Heading content; markdown when `md` is set, plain text otherwise.
    pub text: String,
    pub theme: Theme,
    pub md: bool,
    /// CSS length used verbatim (after escaping) for the heading.
    pub font_size: String,
    /// Icon identifiers rendered left to right. Empty entries are skipped.
    pub images: Vec<String>,
}

impl Default for CardRequest {
    fn default() -> Self {
        Self {
            text: String::new(),
            theme: Theme::default(),
            md: false,
            font_size: DEFAULT_FONT_SIZE.to_string(),
            images: Vec::new(),
        }
    }
}

impl CardRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_theme(mut self, theme: impl Into<Theme>) -> Self {
        self.theme = theme.into();
        self
    }

    pub fn with_markdown(mut self, md: bool) -> Self {
        self.md = md;
        self
    }

    pub fn with_font_size(mut self, font_size: impl Into<String>) -> Self {
        self.font_size = font_size.into();
        self
    }

    pub fn with_images<I, S>(mut self, images: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.images = images.into_iter().map(Into::into).collect();
        self
    }
}
