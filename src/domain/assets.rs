//! Process-wide static assets shared by every render call.

use base64::{Engine as _, engine::general_purpose::STANDARD};

use super::icons::IconSet;

/// The four card fonts, base64-encoded for `data:` URIs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontAssets {
    /// Body sans, regular weight.
    pub regular: String,
    /// Body sans, bold weight.
    pub bold: String,
    /// Bold display face used by the heading.
    pub heading: String,
    /// Monospace face used by inline code and the footer.
    pub mono: String,
}

impl FontAssets {
    pub fn from_bytes(regular: &[u8], bold: &[u8], heading: &[u8], mono: &[u8]) -> Self {
        Self {
            regular: STANDARD.encode(regular),
            bold: STANDARD.encode(bold),
            heading: STANDARD.encode(heading),
            mono: STANDARD.encode(mono),
        }
    }
}

/// Fonts and icon dataset, loaded once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct CardAssets {
    pub fonts: FontAssets,
    pub icons: IconSet,
}

impl CardAssets {
    pub fn new(fonts: FontAssets, icons: IconSet) -> Self {
        Self { fonts, icons }
    }
}
