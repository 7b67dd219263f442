use crate::domain::icons::IconSet;

/// Edge length, in CSS pixels, of the square each icon is drawn into.
pub const ICON_SIZE_PX: u32 = 200;

const PLUS_SIGN: &str = r#"<div class="plus">+</div>"#;

/// Rendered icon row plus bookkeeping for logs and metrics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IconRow {
    pub html: String,
    pub rendered: usize,
    /// Non-empty identifiers that did not resolve against the dataset.
    pub dropped: Vec<String>,
}

/// Render `ids` left to right, separated by a plus sign.
///
/// Empty identifiers and identifiers missing from `icons` contribute neither
/// an icon nor a separator, so separators only ever sit between two icons.
pub fn render_icon_row<S: AsRef<str>>(icons: &IconSet, ids: &[S]) -> IconRow {
    let mut row = IconRow::default();

    for id in ids.iter().map(AsRef::as_ref) {
        if id.trim().is_empty() {
            continue;
        }
        let Some(svg) = icons.get(id) else {
            row.dropped.push(id.to_string());
            continue;
        };

        if row.rendered > 0 {
            row.html.push_str(PLUS_SIGN);
        }
        row.html.push_str(&icon_container(svg));
        row.rendered += 1;
    }

    row
}

fn icon_container(svg: &str) -> String {
    format!(
        r#"<div class="svg-wrapper" style="width:{ICON_SIZE_PX}px;height:{ICON_SIZE_PX}px;">{svg}</div>"#
    )
}
