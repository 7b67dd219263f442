use thiserror::Error;

use crate::domain::request::CardRequest;

/// Errors surfaced while rendering a card.
///
/// Unknown themes and unresolvable icons are not errors; they degrade
/// silently.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("template `{template}` failed to render")]
    Template {
        template: &'static str,
        #[source]
        source: askama::Error,
    },
}

impl RenderError {
    pub(crate) fn template(template: &'static str, source: askama::Error) -> Self {
        Self::Template { template, source }
    }
}

#[derive(Debug, Error)]
pub enum RenderConfigError {
    #[error("card renderer already configured")]
    AlreadyConfigured,
    #[error("card renderer has not been configured")]
    NotConfigured,
}

/// Turns a card request into a complete HTML document.
pub trait CardRenderer: Send + Sync {
    fn render(&self, request: &CardRequest) -> Result<String, RenderError>;
}
