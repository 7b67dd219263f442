//! Startup loading of the card fonts and icon dataset.
//!
//! Everything here runs once before the first render. A missing font is fatal;
//! the renderer never touches the filesystem afterwards.

use std::{
    fs,
    path::{Path, PathBuf},
};

use include_dir::{Dir, include_dir};
use tracing::{debug, info};

use crate::config::AssetSettings;
use crate::domain::{
    assets::{CardAssets, FontAssets},
    icons::IconSet,
};

use super::error::InfraError;

static BUILTIN_ICONS: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/assets/icons");

pub const REGULAR_FONT_FILE: &str = "Inter-Regular.woff2";
pub const BOLD_FONT_FILE: &str = "Inter-Bold.woff2";
pub const HEADING_FONT_FILE: &str = "LeagueSpartan-Bold.woff2";
pub const MONO_FONT_FILE: &str = "Vera-Mono.woff2";

/// Load fonts and icons according to the asset settings.
pub fn load_card_assets(settings: &AssetSettings) -> Result<CardAssets, InfraError> {
    let fonts = load_fonts(&settings.fonts_dir)?;

    let mut icons = builtin_icons();
    if let Some(dir) = settings.icons_dir.as_deref() {
        icons.extend(load_icon_dir(dir)?);
    }

    info!(
        target = "og_image::assets",
        fonts_dir = %settings.fonts_dir.display(),
        icons = icons.len(),
        "Card assets loaded"
    );

    Ok(CardAssets::new(fonts, icons))
}

/// Read the four card fonts from `dir`.
pub fn load_fonts(dir: &Path) -> Result<FontAssets, InfraError> {
    let regular = read_font(dir, REGULAR_FONT_FILE)?;
    let bold = read_font(dir, BOLD_FONT_FILE)?;
    let heading = read_font(dir, HEADING_FONT_FILE)?;
    let mono = read_font(dir, MONO_FONT_FILE)?;

    Ok(FontAssets::from_bytes(&regular, &bold, &heading, &mono))
}

fn read_font(dir: &Path, file_name: &str) -> Result<Vec<u8>, InfraError> {
    let path = dir.join(file_name);
    let bytes = fs::read(&path).map_err(|err| InfraError::asset(&path, err))?;
    debug!(
        target = "og_image::assets",
        path = %path.display(),
        bytes = bytes.len(),
        "Font loaded"
    );
    Ok(bytes)
}

/// Icons compiled into the binary.
pub fn builtin_icons() -> IconSet {
    let mut icons = IconSet::new();
    for file in BUILTIN_ICONS.files() {
        let Some(name) = svg_stem(file.path()) else {
            continue;
        };
        if let Some(svg) = file.contents_utf8() {
            icons.insert(name, svg);
        }
    }
    icons
}

/// Read every `*.svg` file directly inside `dir`, keyed by file stem.
pub fn load_icon_dir(dir: &Path) -> Result<IconSet, InfraError> {
    if !dir.is_dir() {
        return Err(InfraError::configuration(format!(
            "icon directory `{}` does not exist",
            dir.display()
        )));
    }

    let mut paths: Vec<PathBuf> = fs::read_dir(dir)
        .map_err(|err| InfraError::asset(dir, err))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_file() && svg_stem(path).is_some())
        .collect();
    paths.sort();

    let mut icons = IconSet::new();
    for path in paths {
        let Some(name) = svg_stem(&path) else {
            continue;
        };
        let svg = fs::read_to_string(&path).map_err(|err| InfraError::asset(&path, err))?;
        icons.insert(name, svg);
    }

    debug!(
        target = "og_image::assets",
        dir = %dir.display(),
        icons = icons.len(),
        "Icon directory loaded"
    );

    Ok(icons)
}

fn svg_stem(path: &Path) -> Option<&str> {
    let is_svg = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));
    if !is_svg {
        return None;
    }
    path.file_stem().and_then(|stem| stem.to_str())
}
