use askama::Template;

use crate::application::render::types::RenderError;

#[derive(Template)]
#[template(path = "card.html")]
struct DocumentTemplate<'a> {
    stylesheet: &'a str,
    icons: &'a str,
    heading: &'a str,
    footer: &'a str,
}

/// Pre-rendered pieces of a card document.
///
/// `stylesheet`, `icons` and `heading` are trusted HTML/CSS; `footer` is plain
/// text and escaped by the template.
pub(crate) struct DocumentParts<'a> {
    pub stylesheet: &'a str,
    pub icons: &'a str,
    pub heading: &'a str,
    pub footer: &'a str,
}

pub(crate) fn assemble_document(parts: DocumentParts<'_>) -> Result<String, RenderError> {
    let DocumentParts {
        stylesheet,
        icons,
        heading,
        footer,
    } = parts;

    DocumentTemplate {
        stylesheet,
        icons,
        heading,
        footer,
    }
    .render()
    .map_err(|err| RenderError::template("card.html", err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footer_is_escaped_but_fragments_are_not() {
        let html = assemble_document(DocumentParts {
            stylesheet: "body { color: red; }",
            icons: "<div class=\"svg-wrapper\"></div>",
            heading: "<p><strong>hi</strong></p>",
            footer: "<b>cards</b>",
        })
        .expect("document renders");

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("body { color: red; }"));
        assert!(html.contains("<div class=\"svg-wrapper\"></div>"));
        assert!(html.contains("<p><strong>hi</strong></p>"));
        assert!(html.contains("&lt;b&gt;cards"));
        assert!(!html.contains("<b>"));
    }
}
