//! Configuration layer: typed settings with layered precedence (file → env → CLI).

mod cli;

use std::{path::PathBuf, str::FromStr};

use clap::Parser;
use config::{Config, Environment, File};
use serde::Deserialize;
use thiserror::Error;
use tracing::level_filters::LevelFilter;

pub use cli::{
    AssetOverrides, CardInputArgs, CliArgs, Command, IconsArgs, LoggingOverrides, RenderArgs,
    RenderOverrides,
};

const DEFAULT_CONFIG_BASENAME: &str = "config/default";
const LOCAL_CONFIG_BASENAME: &str = "og-image";
const ENV_PREFIX: &str = "OG_IMAGE";
/// Plain environment variable that sets the footer line, kept for existing deployments.
pub const FOOTER_TEXT_ENV: &str = "FOOTER_TEXT";
pub const DEFAULT_FOOTER_TEXT: &str = "dandiws.vercel.app";
pub const DEFAULT_FONTS_DIR: &str = "assets/fonts";
pub const DEFAULT_EMOJI_BASE_URL: &str = "https://twemoji.maxcdn.com/v/14.0.2/";

/// Fully-resolved settings after precedence resolution and validation.
#[derive(Debug, Clone)]
pub struct Settings {
    pub logging: LoggingSettings,
    pub assets: AssetSettings,
    pub template: TemplateSettings,
}

#[derive(Debug, Clone)]
pub struct LoggingSettings {
    pub level: LevelFilter,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy)]
pub enum LogFormat {
    Json,
    Compact,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetSettings {
    pub fonts_dir: PathBuf,
    pub icons_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSettings {
    pub footer_text: String,
    /// Always ends with `/`.
    pub emoji_base_url: String,
}

impl Default for TemplateSettings {
    fn default() -> Self {
        Self {
            footer_text: DEFAULT_FOOTER_TEXT.to_string(),
            emoji_base_url: DEFAULT_EMOJI_BASE_URL.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to build configuration: {0}")]
    Build(#[from] config::ConfigError),
    #[error("invalid configuration for `{key}`: {reason}")]
    Invalid { key: &'static str, reason: String },
}

impl LoadError {
    fn invalid(key: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            key,
            reason: reason.into(),
        }
    }
}

/// Load settings using the configured precedence (file → environment → CLI).
pub fn load(cli: &CliArgs) -> Result<Settings, LoadError> {
    let mut builder = Config::builder()
        .add_source(File::with_name(DEFAULT_CONFIG_BASENAME).required(false))
        .add_source(File::with_name(LOCAL_CONFIG_BASENAME).required(false));

    if let Some(path) = cli.config_file.as_ref() {
        builder = builder.add_source(File::from(path.as_path()).required(true));
    }

    builder = builder
        .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
        .set_override_option("template.footer_text", legacy_footer_text())?;

    let mut raw: RawSettings = builder.build()?.try_deserialize()?;

    match cli.command.as_ref() {
        Some(Command::Render(args)) => raw.apply_render_overrides(&args.overrides),
        Some(Command::Icons(args)) => {
            raw.apply_asset_overrides(&args.assets);
            raw.apply_logging_overrides(&args.logging);
        }
        None => raw.apply_render_overrides(&RenderOverrides::default()),
    }

    Settings::from_raw(raw)
}

pub fn load_with_cli() -> Result<(CliArgs, Settings), LoadError> {
    let args = CliArgs::parse();
    let settings = load(&args)?;
    Ok((args, settings))
}

fn legacy_footer_text() -> Option<String> {
    std::env::var(FOOTER_TEXT_ENV)
        .ok()
        .filter(|value| !value.trim().is_empty())
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawSettings {
    logging: RawLoggingSettings,
    assets: RawAssetSettings,
    template: RawTemplateSettings,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawLoggingSettings {
    level: Option<String>,
    json: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawAssetSettings {
    fonts_dir: Option<PathBuf>,
    icons_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawTemplateSettings {
    footer_text: Option<String>,
    emoji_base_url: Option<String>,
}

impl RawSettings {
    fn apply_render_overrides(&mut self, overrides: &RenderOverrides) {
        self.apply_asset_overrides(&overrides.assets);
        self.apply_logging_overrides(&overrides.logging);

        if let Some(text) = overrides.footer_text.as_ref() {
            self.template.footer_text = Some(text.clone());
        }
        if let Some(url) = overrides.emoji_base_url.as_ref() {
            self.template.emoji_base_url = Some(url.clone());
        }
    }

    fn apply_asset_overrides(&mut self, overrides: &AssetOverrides) {
        if let Some(dir) = overrides.fonts_dir.as_ref() {
            self.assets.fonts_dir = Some(dir.clone());
        }
        if let Some(dir) = overrides.icons_dir.as_ref() {
            self.assets.icons_dir = Some(dir.clone());
        }
    }

    fn apply_logging_overrides(&mut self, overrides: &LoggingOverrides) {
        if let Some(level) = overrides.log_level.as_ref() {
            self.logging.level = Some(level.clone());
        }
        if let Some(json) = overrides.log_json {
            self.logging.json = Some(json);
        }
    }
}

impl Settings {
    fn from_raw(raw: RawSettings) -> Result<Self, LoadError> {
        let RawSettings {
            logging,
            assets,
            template,
        } = raw;

        Ok(Self {
            logging: build_logging_settings(logging)?,
            assets: build_asset_settings(assets)?,
            template: build_template_settings(template)?,
        })
    }
}

fn build_logging_settings(logging: RawLoggingSettings) -> Result<LoggingSettings, LoadError> {
    let level = match logging.level {
        Some(level) => LevelFilter::from_str(level.as_str()).map_err(|err| {
            LoadError::invalid("logging.level", format!("failed to parse: {err}"))
        })?,
        None => LevelFilter::INFO,
    };

    let format = if logging.json.unwrap_or(false) {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };

    Ok(LoggingSettings { level, format })
}

fn build_asset_settings(assets: RawAssetSettings) -> Result<AssetSettings, LoadError> {
    let fonts_dir = assets
        .fonts_dir
        .unwrap_or_else(|| PathBuf::from(DEFAULT_FONTS_DIR));
    if fonts_dir.as_os_str().is_empty() {
        return Err(LoadError::invalid(
            "assets.fonts_dir",
            "path must not be empty",
        ));
    }

    let icons_dir = assets
        .icons_dir
        .filter(|dir| !dir.as_os_str().is_empty());

    Ok(AssetSettings {
        fonts_dir,
        icons_dir,
    })
}

fn build_template_settings(template: RawTemplateSettings) -> Result<TemplateSettings, LoadError> {
    let footer_text = template
        .footer_text
        .filter(|text| !text.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_FOOTER_TEXT.to_string());

    let emoji_base_url = match template.emoji_base_url {
        Some(url) => normalize_base_url(&url).ok_or_else(|| {
            LoadError::invalid("template.emoji_base_url", "base URL must not be empty")
        })?,
        None => DEFAULT_EMOJI_BASE_URL.to_string(),
    };

    Ok(TemplateSettings {
        footer_text,
        emoji_base_url,
    })
}

fn normalize_base_url(url: &str) -> Option<String> {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return None;
    }

    let without_trailing = trimmed.trim_end_matches('/');
    Some(format!("{without_trailing}/"))
}

#[cfg(test)]
mod tests;
