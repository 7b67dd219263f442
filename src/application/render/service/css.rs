use askama::Template;

use crate::application::render::types::RenderError;
use crate::domain::{assets::FontAssets, theme::Theme};

#[derive(Template)]
#[template(path = "card.css", escape = "none")]
struct StylesheetTemplate<'a> {
    regular: &'a str,
    bold: &'a str,
    heading: &'a str,
    mono: &'a str,
    background: &'static str,
    foreground: &'static str,
    radial: &'static str,
    font_size: &'a str,
}

/// Build the card stylesheet for `theme`.
///
/// `font_size` is caller-controlled, so the template HTML-escapes it (only
/// `& < > " '`); every other value comes from the fonts or the fixed palette.
pub fn build_stylesheet(
    fonts: &FontAssets,
    theme: Theme,
    font_size: &str,
) -> Result<String, RenderError> {
    let palette = theme.palette();

    StylesheetTemplate {
        regular: &fonts.regular,
        bold: &fonts.bold,
        heading: &fonts.heading,
        mono: &fonts.mono,
        background: palette.background,
        foreground: palette.foreground,
        radial: palette.radial,
        font_size,
    }
    .render()
    .map_err(|err| RenderError::template("card.css", err))
}
