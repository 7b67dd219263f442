mod css;
mod document;
mod emoji;
mod icons;
mod text;

use std::sync::Arc;

use metrics::{counter, histogram};
use once_cell::sync::OnceCell;
use tracing::debug;

use crate::application::render::types::{CardRenderer, RenderConfigError, RenderError};
use crate::config::{DEFAULT_FOOTER_TEXT, TemplateSettings};
use crate::domain::{assets::CardAssets, request::CardRequest};

use document::{DocumentParts, assemble_document};

pub use css::build_stylesheet;
pub use emoji::{EmojiOptions, emojify};
pub use icons::{IconRow, render_icon_row};
pub use text::{escape_text, render_heading};

/// Template-level settings that do not vary per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardTemplateConfig {
    pub footer_text: String,
    pub emoji: EmojiOptions,
}

impl Default for CardTemplateConfig {
    fn default() -> Self {
        Self {
            footer_text: DEFAULT_FOOTER_TEXT.to_string(),
            emoji: EmojiOptions::default(),
        }
    }
}

impl From<&TemplateSettings> for CardTemplateConfig {
    fn from(settings: &TemplateSettings) -> Self {
        Self {
            footer_text: settings.footer_text.clone(),
            emoji: EmojiOptions::new(settings.emoji_base_url.clone()),
        }
    }
}

/// Askama-backed card renderer over a fixed set of assets.
pub struct TemplateCardRenderer {
    assets: Arc<CardAssets>,
    config: CardTemplateConfig,
    markdown: comrak::Options<'static>,
}

impl TemplateCardRenderer {
    pub fn new(assets: Arc<CardAssets>, config: CardTemplateConfig) -> Self {
        Self {
            assets,
            config,
            markdown: text::markdown_options(),
        }
    }

    pub fn assets(&self) -> &CardAssets {
        &self.assets
    }

    pub fn config(&self) -> &CardTemplateConfig {
        &self.config
    }
}

impl CardRenderer for TemplateCardRenderer {
    fn render(&self, request: &CardRequest) -> Result<String, RenderError> {
        let stylesheet = build_stylesheet(&self.assets.fonts, request.theme, &request.font_size)?;

        let row = render_icon_row(&self.assets.icons, request.images.as_slice());
        if !row.dropped.is_empty() {
            counter!("og_image_icon_dropped_total").increment(row.dropped.len() as u64);
            debug!(
                target = "og_image::render",
                dropped = ?row.dropped,
                "Unknown icons skipped"
            );
        }

        let heading = render_heading(&request.text, request.md, &self.markdown);
        let heading = emojify(&heading, &self.config.emoji);

        let document = assemble_document(DocumentParts {
            stylesheet: &stylesheet,
            icons: &row.html,
            heading: &heading,
            footer: &self.config.footer_text,
        })?;

        counter!("og_image_render_total", "theme" => request.theme.as_str()).increment(1);
        histogram!("og_image_document_bytes").record(document.len() as f64);
        debug!(
            target = "og_image::render",
            theme = request.theme.as_str(),
            markdown = request.md,
            icons = row.rendered,
            bytes = document.len(),
            "Card rendered"
        );

        Ok(document)
    }
}

static CARD_RENDERER: OnceCell<Arc<TemplateCardRenderer>> = OnceCell::new();

/// Install the process-wide renderer. Succeeds at most once.
pub fn install_card_renderer(renderer: TemplateCardRenderer) -> Result<(), RenderConfigError> {
    CARD_RENDERER
        .set(Arc::new(renderer))
        .map_err(|_| RenderConfigError::AlreadyConfigured)
}

/// Access the shared renderer installed at startup.
pub fn card_renderer() -> Result<Arc<TemplateCardRenderer>, RenderConfigError> {
    CARD_RENDERER
        .get()
        .cloned()
        .ok_or(RenderConfigError::NotConfigured)
}
