//! Rewrites emoji sequences into inline `<img>` references to vector assets.
//!
//! Sequences follow UTS #51: a base emoji with optional VS16 and skin tone,
//! ZWJ chains, regional-indicator flag pairs, keycaps and black-flag tag
//! sequences. Each sequence maps to one asset named after its codepoints in
//! lowercase hex joined by `-`; VS16 is dropped from the name unless the
//! sequence contains a ZWJ.

use std::cmp::Ordering;

use crate::config::DEFAULT_EMOJI_BASE_URL;

pub const EMOJI_FOLDER: &str = "svg";
pub const EMOJI_EXTENSION: &str = ".svg";

const ZWJ: char = '\u{200D}';
const VS15: char = '\u{FE0E}';
const VS16: char = '\u{FE0F}';
const KEYCAP: char = '\u{20E3}';
const BLACK_FLAG: char = '\u{1F3F4}';

/// Where emoji images are served from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmojiOptions {
    /// Base URL ending in `/`; the folder and extension are fixed.
    pub base_url: String,
}

impl Default for EmojiOptions {
    fn default() -> Self {
        Self::new(DEFAULT_EMOJI_BASE_URL)
    }
}

impl EmojiOptions {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn image_src(&self, icon_id: &str) -> String {
        format!(
            "{}{EMOJI_FOLDER}/{icon_id}{EMOJI_EXTENSION}",
            self.base_url
        )
    }
}

/// Replace every emoji sequence in the text content of `html` with an image.
///
/// Markup inside `<...>` is copied untouched, as is any input without emoji.
pub fn emojify(html: &str, options: &EmojiOptions) -> String {
    if html.is_ascii() {
        return html.to_string();
    }

    let chars: Vec<char> = html.chars().collect();
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    let mut offset = 0;
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];

        if in_tag {
            in_tag = ch != '>';
        } else if ch == '<' {
            in_tag = true;
        } else {
            let len = sequence_len(&chars[i..]);
            if len > 0 {
                let width: usize = chars[i..i + len].iter().map(|c| c.len_utf8()).sum();
                push_emoji_image(&mut out, &html[offset..offset + width], options);
                offset += width;
                i += len;
                continue;
            }
        }

        out.push(ch);
        offset += ch.len_utf8();
        i += 1;
    }

    out
}

fn push_emoji_image(out: &mut String, raw: &str, options: &EmojiOptions) {
    let src = options.image_src(&icon_id(raw));
    out.push_str("<img class=\"emoji\" draggable=\"false\" alt=\"");
    out.push_str(raw);
    out.push_str("\" src=\"");
    out.push_str(&src);
    out.push_str("\"/>");
}

fn icon_id(raw: &str) -> String {
    let keep_vs16 = raw.contains(ZWJ);
    raw.chars()
        .filter(|&c| keep_vs16 || c != VS16)
        .map(|c| format!("{:x}", c as u32))
        .collect::<Vec<_>>()
        .join("-")
}

/// Number of chars forming an emoji sequence at the start of `chars`, or 0.
fn sequence_len(chars: &[char]) -> usize {
    let Some(&first) = chars.first() else {
        return 0;
    };
    let next = chars.get(1).copied();

    if is_keycap_base(first) {
        return match (next, chars.get(2).copied()) {
            (Some(KEYCAP), _) => 2,
            (Some(VS16), Some(KEYCAP)) => 3,
            _ => 0,
        };
    }

    if is_regional_indicator(first) {
        return if next.is_some_and(is_regional_indicator) {
            2
        } else {
            1
        };
    }

    if requires_emoji_selector(first) {
        return if next == Some(VS16) { 2 } else { 0 };
    }

    if !is_emoji(first) || next == Some(VS15) {
        return 0;
    }

    let mut len = element_len(chars);

    if first == BLACK_FLAG {
        while chars.get(len).copied().is_some_and(is_tag_character) {
            len += 1;
        }
    }

    while chars.get(len) == Some(&ZWJ) {
        match chars.get(len + 1) {
            Some(&joined) if is_emoji(joined) => {
                len += 1;
                len += element_len(&chars[len..]);
            }
            _ => break,
        }
    }

    len
}

/// A single emoji plus its optional VS16 and skin tone modifier.
fn element_len(chars: &[char]) -> usize {
    let mut len = 1;
    if chars.get(len) == Some(&VS16) {
        len += 1;
    }
    if chars.get(len).copied().is_some_and(is_emoji_modifier) {
        len += 1;
    }
    len
}

fn is_keycap_base(c: char) -> bool {
    matches!(c, '0'..='9' | '*' | '#')
}

fn is_regional_indicator(c: char) -> bool {
    ('\u{1F1E6}'..='\u{1F1FF}').contains(&c)
}

fn is_emoji_modifier(c: char) -> bool {
    ('\u{1F3FB}'..='\u{1F3FF}').contains(&c)
}

fn is_tag_character(c: char) -> bool {
    ('\u{E0020}'..='\u{E007F}').contains(&c)
}

/// Characters rendered as text unless followed by VS16.
fn requires_emoji_selector(c: char) -> bool {
    matches!(c, '\u{A9}' | '\u{AE}' | '\u{2122}')
}

fn is_emoji(c: char) -> bool {
    let cp = c as u32;
    cp >= 0x203C
        && EMOJI_RANGES
            .binary_search_by(|&(lo, hi)| {
                if hi < cp {
                    Ordering::Less
                } else if lo > cp {
                    Ordering::Greater
                } else {
                    Ordering::Equal
                }
            })
            .is_ok()
}

// Emoji=Yes codepoints outside ASCII, regional indicators and the
// selector-only symbols above. Sorted and non-overlapping.
const EMOJI_RANGES: &[(u32, u32)] = &[
    (0x203C, 0x203C),
    (0x2049, 0x2049),
    (0x2139, 0x2139),
    (0x2194, 0x2199),
    (0x21A9, 0x21AA),
    (0x231A, 0x231B),
    (0x2328, 0x2328),
    (0x23CF, 0x23CF),
    (0x23E9, 0x23F3),
    (0x23F8, 0x23FA),
    (0x24C2, 0x24C2),
    (0x25AA, 0x25AB),
    (0x25B6, 0x25B6),
    (0x25C0, 0x25C0),
    (0x25FB, 0x25FE),
    (0x2600, 0x2604),
    (0x260E, 0x260E),
    (0x2611, 0x2611),
    (0x2614, 0x2615),
    (0x2618, 0x2618),
    (0x261D, 0x261D),
    (0x2620, 0x2620),
    (0x2622, 0x2623),
    (0x2626, 0x2626),
    (0x262A, 0x262A),
    (0x262E, 0x262F),
    (0x2638, 0x263A),
    (0x2640, 0x2640),
    (0x2642, 0x2642),
    (0x2648, 0x2653),
    (0x265F, 0x2660),
    (0x2663, 0x2663),
    (0x2665, 0x2666),
    (0x2668, 0x2668),
    (0x267B, 0x267B),
    (0x267E, 0x267F),
    (0x2692, 0x2697),
    (0x2699, 0x2699),
    (0x269B, 0x269C),
    (0x26A0, 0x26A1),
    (0x26A7, 0x26A7),
    (0x26AA, 0x26AB),
    (0x26B0, 0x26B1),
    (0x26BD, 0x26BE),
    (0x26C4, 0x26C5),
    (0x26C8, 0x26C8),
    (0x26CE, 0x26CF),
    (0x26D1, 0x26D1),
    (0x26D3, 0x26D4),
    (0x26E9, 0x26EA),
    (0x26F0, 0x26F5),
    (0x26F7, 0x26FA),
    (0x26FD, 0x26FD),
    (0x2702, 0x2702),
    (0x2705, 0x2705),
    (0x2708, 0x270D),
    (0x270F, 0x270F),
    (0x2712, 0x2712),
    (0x2714, 0x2714),
    (0x2716, 0x2716),
    (0x271D, 0x271D),
    (0x2721, 0x2721),
    (0x2728, 0x2728),
    (0x2733, 0x2734),
    (0x2744, 0x2744),
    (0x2747, 0x2747),
    (0x274C, 0x274C),
    (0x274E, 0x274E),
    (0x2753, 0x2755),
    (0x2757, 0x2757),
    (0x2763, 0x2764),
    (0x2795, 0x2797),
    (0x27A1, 0x27A1),
    (0x27B0, 0x27B0),
    (0x27BF, 0x27BF),
    (0x2934, 0x2935),
    (0x2B05, 0x2B07),
    (0x2B1B, 0x2B1C),
    (0x2B50, 0x2B50),
    (0x2B55, 0x2B55),
    (0x3030, 0x3030),
    (0x303D, 0x303D),
    (0x3297, 0x3297),
    (0x3299, 0x3299),
    (0x1F004, 0x1F004),
    (0x1F0CF, 0x1F0CF),
    (0x1F170, 0x1F171),
    (0x1F17E, 0x1F17F),
    (0x1F18E, 0x1F18E),
    (0x1F191, 0x1F19A),
    (0x1F201, 0x1F202),
    (0x1F21A, 0x1F21A),
    (0x1F22F, 0x1F22F),
    (0x1F232, 0x1F23A),
    (0x1F250, 0x1F251),
    (0x1F300, 0x1F321),
    (0x1F324, 0x1F393),
    (0x1F396, 0x1F397),
    (0x1F399, 0x1F39B),
    (0x1F39E, 0x1F3F0),
    (0x1F3F3, 0x1F3F5),
    (0x1F3F7, 0x1F4FD),
    (0x1F4FF, 0x1F53D),
    (0x1F549, 0x1F54E),
    (0x1F550, 0x1F567),
    (0x1F56F, 0x1F570),
    (0x1F573, 0x1F57A),
    (0x1F587, 0x1F587),
    (0x1F58A, 0x1F58D),
    (0x1F590, 0x1F590),
    (0x1F595, 0x1F596),
    (0x1F5A4, 0x1F5A5),
    (0x1F5A8, 0x1F5A8),
    (0x1F5B1, 0x1F5B2),
    (0x1F5BC, 0x1F5BC),
    (0x1F5C2, 0x1F5C4),
    (0x1F5D1, 0x1F5D3),
    (0x1F5DC, 0x1F5DE),
    (0x1F5E1, 0x1F5E1),
    (0x1F5E3, 0x1F5E3),
    (0x1F5E8, 0x1F5E8),
    (0x1F5EF, 0x1F5EF),
    (0x1F5F3, 0x1F5F3),
    (0x1F5FA, 0x1F64F),
    (0x1F680, 0x1F6C5),
    (0x1F6CB, 0x1F6D2),
    (0x1F6D5, 0x1F6D7),
    (0x1F6DC, 0x1F6E5),
    (0x1F6E9, 0x1F6E9),
    (0x1F6EB, 0x1F6EC),
    (0x1F6F0, 0x1F6F0),
    (0x1F6F3, 0x1F6FC),
    (0x1F7E0, 0x1F7EB),
    (0x1F7F0, 0x1F7F0),
    (0x1F90C, 0x1F93A),
    (0x1F93C, 0x1F945),
    (0x1F947, 0x1F9FF),
    (0x1FA70, 0x1FA7C),
    (0x1FA80, 0x1FA88),
    (0x1FA90, 0x1FABD),
    (0x1FABF, 0x1FAC5),
    (0x1FACE, 0x1FADB),
    (0x1FAE0, 0x1FAE8),
    (0x1FAF0, 0x1FAF8),
];

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;

    use super::*;

    fn src_of(html: &str) -> Vec<&str> {
        html.split("src=\"")
            .skip(1)
            .filter_map(|rest| rest.split('"').next())
            .collect()
    }

    #[test]
    fn ranges_are_sorted_and_disjoint() {
        for pair in EMOJI_RANGES.windows(2) {
            assert!(pair[0].0 <= pair[0].1);
            assert!(pair[0].1 < pair[1].0, "{:x?} overlaps {:x?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn text_without_emoji_is_unchanged() {
        let options = EmojiOptions::default();
        for input in ["", "Hello &amp; world", "naïve café — 1 * 2 # 3", "© 2024"] {
            assert_eq!(emojify(input, &options), input);
        }
    }

    #[test]
    fn single_emoji_becomes_image() {
        let options = EmojiOptions::default();
        assert_snapshot!(
            emojify("Ship it 🚀", &options),
            @r#"Ship it <img class="emoji" draggable="false" alt="🚀" src="https://twemoji.maxcdn.com/v/14.0.2/svg/1f680.svg"/>"#
        );
    }

    #[test]
    fn sequences_map_to_codepoint_names() {
        let options = EmojiOptions::new("/e/");
        let cases = [
            ("❤️", "/e/svg/2764.svg"),
            ("❤", "/e/svg/2764.svg"),
            ("👋🏽", "/e/svg/1f44b-1f3fd.svg"),
            ("🇺🇸", "/e/svg/1f1fa-1f1f8.svg"),
            ("1️⃣", "/e/svg/31-20e3.svg"),
            ("©️", "/e/svg/a9.svg"),
            (
                "👨\u{200D}👩\u{200D}👧",
                "/e/svg/1f468-200d-1f469-200d-1f467.svg",
            ),
            ("❤️\u{200D}🔥", "/e/svg/2764-fe0f-200d-1f525.svg"),
            (
                "🏴\u{E0067}\u{E0062}\u{E0065}\u{E006E}\u{E0067}\u{E007F}",
                "/e/svg/1f3f4-e0067-e0062-e0065-e006e-e0067-e007f.svg",
            ),
        ];

        for (input, expected) in cases {
            let html = emojify(input, &options);
            assert_eq!(src_of(&html), vec![expected], "input {input:?}");
        }
    }

    #[test]
    fn adjacent_emoji_are_separate_images() {
        let html = emojify("🎉🎉 done ✅", &EmojiOptions::new("/e/"));
        assert_eq!(
            src_of(&html),
            vec!["/e/svg/1f389.svg", "/e/svg/1f389.svg", "/e/svg/2705.svg"]
        );
        assert!(html.contains(" done "));
    }

    #[test]
    fn markup_and_text_presentation_are_left_alone() {
        let options = EmojiOptions::default();
        let tagged = r#"<img alt="🚀" src="x.png">"#;
        assert_eq!(emojify(tagged, &options), tagged);

        let text_style = "\u{263A}\u{FE0E}";
        assert_eq!(emojify(text_style, &options), text_style);
    }

    #[test]
    fn emoji_after_markup_is_rewritten() {
        let html = emojify("<p><strong>hi</strong> 👋</p>", &EmojiOptions::new("/e/"));
        assert!(html.starts_with("<p><strong>hi</strong> <img class=\"emoji\""));
        assert!(html.ends_with("/e/svg/1f44b.svg\"/></p>"));
    }
}
