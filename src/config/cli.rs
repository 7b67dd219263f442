use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueHint, builder::BoolishValueParser};

/// Command-line arguments for the og-image binary.
#[derive(Debug, Parser)]
#[command(
    name = "og-image",
    version,
    about = "Render Open Graph card documents"
)]
pub struct CliArgs {
    /// Optional path to a configuration file.
    #[arg(long = "config-file", env = "OG_IMAGE_CONFIG_FILE", value_name = "PATH")]
    pub config_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Render a card document.
    Render(Box<RenderArgs>),
    /// List the available icon names.
    Icons(IconsArgs),
}

#[derive(Debug, Args, Default, Clone)]
pub struct RenderArgs {
    #[command(flatten)]
    pub overrides: RenderOverrides,

    #[command(flatten)]
    pub input: CardInputArgs,

    /// Write the document to FILE instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Args, Default, Clone)]
pub struct CardInputArgs {
    /// Read the card request as JSON from FILE (`-` for stdin).
    #[arg(
        long = "request",
        value_name = "FILE",
        value_hint = ValueHint::FilePath,
        conflicts_with_all = ["text", "theme", "font_size", "md", "images"]
    )]
    pub request: Option<PathBuf>,

    /// Heading text.
    #[arg(long, value_name = "TEXT")]
    pub text: Option<String>,

    /// Colour theme (`light` or `dark`).
    #[arg(long, value_name = "THEME")]
    pub theme: Option<String>,

    /// CSS font size of the heading.
    #[arg(long = "font-size", value_name = "LENGTH")]
    pub font_size: Option<String>,

    /// Interpret the heading text as markdown.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub md: bool,

    /// Icon to render above the heading; repeat for several.
    #[arg(long = "image", value_name = "NAME")]
    pub images: Vec<String>,
}

#[derive(Debug, Args, Default, Clone)]
pub struct IconsArgs {
    #[command(flatten)]
    pub assets: AssetOverrides,

    #[command(flatten)]
    pub logging: LoggingOverrides,
}

#[derive(Debug, Args, Default, Clone)]
pub struct RenderOverrides {
    #[command(flatten)]
    pub assets: AssetOverrides,

    #[command(flatten)]
    pub logging: LoggingOverrides,

    /// Override the footer line printed at the bottom of the card.
    #[arg(long = "footer-text", value_name = "TEXT")]
    pub footer_text: Option<String>,

    /// Override the base URL emoji images are served from.
    #[arg(long = "emoji-base-url", value_name = "URL")]
    pub emoji_base_url: Option<String>,
}

#[derive(Debug, Args, Default, Clone)]
pub struct AssetOverrides {
    /// Override the directory holding the card fonts.
    #[arg(long = "fonts-dir", value_name = "PATH", value_hint = ValueHint::DirPath)]
    pub fonts_dir: Option<PathBuf>,

    /// Extra directory of `*.svg` icons merged over the built-in set.
    #[arg(long = "icons-dir", value_name = "PATH", value_hint = ValueHint::DirPath)]
    pub icons_dir: Option<PathBuf>,
}

#[derive(Debug, Args, Default, Clone)]
pub struct LoggingOverrides {
    /// Override the base log level (trace|debug|info|warn|error).
    #[arg(long = "log-level", value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Toggle JSON logging.
    #[arg(
        long = "log-json",
        value_name = "BOOL",
        value_parser = BoolishValueParser::new()
    )]
    pub log_json: Option<bool>,
}
