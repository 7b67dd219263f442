//! Card rendering pipeline.
//!
//! Rendering is pure: it takes a parsed [`CardRequest`](crate::domain::request::CardRequest)
//! plus the process-wide assets and returns a deterministic HTML document. No
//! I/O happens here; assets are loaded by the caller before the renderer is
//! constructed.

mod service;
mod types;

pub use service::{
    CardTemplateConfig, EmojiOptions, IconRow, TemplateCardRenderer, build_stylesheet,
    card_renderer, emojify, escape_text, install_card_renderer, render_heading,
    render_icon_row,
};
pub use types::{CardRenderer, RenderConfigError, RenderError};
