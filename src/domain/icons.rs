//! Icon dataset: a string-keyed map from icon slugs to inline SVG markup.

use std::collections::BTreeMap;

use unicode_normalization::UnicodeNormalization;

/// Static mapping from icon names to raw SVG markup.
///
/// Keys are stored as slugs (see [`icon_slug`]) so `"GitHub"`, `"github"` and
/// `" github "` resolve to the same entry. Misses return `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IconSet {
    icons: BTreeMap<String, String>,
}

impl IconSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an icon. Names that slug to nothing are ignored.
    pub fn insert(&mut self, name: &str, svg: impl Into<String>) -> bool {
        let slug = icon_slug(name);
        if slug.is_empty() {
            return false;
        }
        let svg: String = svg.into();
        self.icons.insert(slug, svg.trim().to_string());
        true
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        let slug = icon_slug(name);
        if slug.is_empty() {
            return None;
        }
        self.icons.get(&slug).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Slugs in ascending order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.icons.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    /// Merge `other` into `self`; entries from `other` win on conflict.
    pub fn extend(&mut self, other: IconSet) {
        self.icons.extend(other.icons);
    }
}

/// Normalise a brand name into its dataset slug.
///
/// Lowercases, spells out `+`, `.` and `&` (so `Node.js` becomes
/// `nodedotjs`), folds letters with diacritics to their base letters and
/// drops every other non-alphanumeric character.
pub fn icon_slug(name: &str) -> String {
    let mut expanded = String::with_capacity(name.len());
    for ch in name.trim().chars().flat_map(char::to_lowercase) {
        match ch {
            '+' => expanded.push_str("plus"),
            '.' => expanded.push_str("dot"),
            '&' => expanded.push_str("and"),
            'ß' => expanded.push_str("ss"),
            // Letters NFD leaves undecomposed.
            'đ' => expanded.push('d'),
            'ħ' => expanded.push('h'),
            'ı' => expanded.push('i'),
            'ĸ' => expanded.push('k'),
            'ŀ' | 'ł' => expanded.push('l'),
            'ŧ' => expanded.push('t'),
            c => expanded.push(c),
        }
    }

    expanded
        .nfd()
        .filter(char::is_ascii_alphanumeric)
        .collect()
}
