use comrak::{Options, markdown_to_html};

pub(crate) fn markdown_options() -> Options<'static> {
    let mut options = Options::default();

    let ext = &mut options.extension;
    ext.strikethrough = true;
    ext.table = true;
    ext.autolink = true;
    ext.tasklist = true;

    // Raw HTML in the source is replaced by a placeholder comment, so the
    // converter output can be embedded without escaping it again.
    options.render.r#unsafe = false;

    options
}

/// Escape text so it can be embedded in HTML or a stylesheet without
/// introducing markup.
pub fn escape_text(text: &str) -> String {
    ammonia::clean_text(text)
}

/// Heading HTML before emoji substitution: converted markdown when `md` is
/// set, escaped text otherwise.
pub fn render_heading(text: &str, md: bool, options: &Options<'static>) -> String {
    if md {
        markdown_to_html(text, options)
    } else {
        escape_text(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_characters() {
        let escaped = escape_text("<script>alert(\"x\" & 'y')</script>");

        assert!(!escaped.contains('<'));
        assert!(!escaped.contains('>'));
        assert!(!escaped.contains('"'));
        assert!(escaped.starts_with("&lt;script&gt;"));
        assert!(escaped.contains("&amp;"));
    }

    #[test]
    fn ordinary_font_sizes_pass_through() {
        assert_eq!(escape_text("96px"), "96px");
        assert_eq!(escape_text("1.5em"), "1.5em");
    }

    #[test]
    fn markdown_emphasis_becomes_strong() {
        let html = render_heading("**bold**", true, &markdown_options());
        assert_eq!(html.trim_end(), "<p><strong>bold</strong></p>");
    }

    #[test]
    fn plain_text_keeps_literal_asterisks() {
        let html = render_heading("**bold**", false, &markdown_options());
        assert_eq!(html, "**bold**");
    }

    #[test]
    fn markdown_drops_raw_html() {
        let html = render_heading("<script>alert(1)</script>", true, &markdown_options());
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn markdown_inline_code_and_strikethrough() {
        let html = render_heading("`cargo` ~~npm~~", true, &markdown_options());
        assert!(html.contains("<code>cargo</code>"));
        assert!(html.contains("<del>npm</del>"));
    }
}
