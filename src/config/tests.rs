use std::path::Path;

use serial_test::serial;

use super::*;

#[test]
fn cli_overrides_take_highest_precedence() {
    let mut raw = RawSettings::default();
    raw.template.footer_text = Some("from-file.example".to_string());
    raw.logging.level = Some("info".to_string());

    let overrides = RenderOverrides {
        footer_text: Some("from-cli.example".to_string()),
        logging: LoggingOverrides {
            log_level: Some("debug".to_string()),
            ..Default::default()
        },
        ..Default::default()
    };

    raw.apply_render_overrides(&overrides);
    let settings = Settings::from_raw(raw).expect("valid settings");

    assert_eq!(settings.template.footer_text, "from-cli.example");
    assert_eq!(settings.logging.level, LevelFilter::DEBUG);
}

#[test]
fn defaults_apply_without_any_source() {
    let settings = Settings::from_raw(RawSettings::default()).expect("valid settings");

    assert_eq!(settings.template.footer_text, DEFAULT_FOOTER_TEXT);
    assert_eq!(settings.template.emoji_base_url, DEFAULT_EMOJI_BASE_URL);
    assert_eq!(settings.assets.fonts_dir, Path::new(DEFAULT_FONTS_DIR));
    assert_eq!(settings.assets.icons_dir, None);
    assert_eq!(settings.logging.level, LevelFilter::INFO);
    assert!(matches!(settings.logging.format, LogFormat::Compact));
}

#[test]
fn blank_footer_falls_back_to_default() {
    let mut raw = RawSettings::default();
    raw.template.footer_text = Some("   ".to_string());

    let settings = Settings::from_raw(raw).expect("valid settings");
    assert_eq!(settings.template.footer_text, DEFAULT_FOOTER_TEXT);
}

#[test]
fn emoji_base_url_gets_trailing_slash() {
    let mut raw = RawSettings::default();
    raw.template.emoji_base_url = Some("https://cdn.example.com/twemoji//".to_string());

    let settings = Settings::from_raw(raw).expect("valid settings");
    assert_eq!(
        settings.template.emoji_base_url,
        "https://cdn.example.com/twemoji/"
    );
}

#[test]
fn empty_emoji_base_url_is_rejected() {
    let mut raw = RawSettings::default();
    raw.template.emoji_base_url = Some(" ".to_string());

    let err = Settings::from_raw(raw).expect_err("empty base url");
    assert!(matches!(
        err,
        LoadError::Invalid {
            key: "template.emoji_base_url",
            ..
        }
    ));
}

#[test]
fn invalid_log_level_is_rejected() {
    let mut raw = RawSettings::default();
    raw.logging.level = Some("chatty".to_string());

    let err = Settings::from_raw(raw).expect_err("invalid level");
    assert!(matches!(
        err,
        LoadError::Invalid {
            key: "logging.level",
            ..
        }
    ));
}

#[test]
fn cli_json_logging_enforces_format() {
    let mut raw = RawSettings::default();
    let overrides = RenderOverrides {
        logging: LoggingOverrides {
            log_json: Some(true),
            ..Default::default()
        },
        ..Default::default()
    };

    raw.apply_render_overrides(&overrides);
    let settings = Settings::from_raw(raw).expect("valid settings");

    assert!(matches!(settings.logging.format, LogFormat::Json));
}

#[test]
fn default_to_render_command() {
    let args = CliArgs::parse_from(["og-image"]);
    let command = args
        .command
        .unwrap_or(Command::Render(Box::<RenderArgs>::default()));
    assert!(matches!(command, Command::Render(_)));
}

#[test]
fn parse_render_arguments() {
    let args = CliArgs::parse_from([
        "og-image",
        "render",
        "--text",
        "**Hello**",
        "--md",
        "--theme",
        "dark",
        "--font-size",
        "120px",
        "--image",
        "github",
        "--image",
        "rust",
        "--fonts-dir",
        "/srv/fonts",
        "-o",
        "/tmp/card.html",
    ]);

    match args.command.expect("render command") {
        Command::Render(render) => {
            assert_eq!(render.input.text.as_deref(), Some("**Hello**"));
            assert!(render.input.md);
            assert_eq!(render.input.theme.as_deref(), Some("dark"));
            assert_eq!(render.input.font_size.as_deref(), Some("120px"));
            assert_eq!(render.input.images, vec!["github", "rust"]);
            assert_eq!(
                render.overrides.assets.fonts_dir.as_deref(),
                Some(Path::new("/srv/fonts"))
            );
            assert_eq!(render.output.as_deref(), Some(Path::new("/tmp/card.html")));
        }
        _ => panic!("wrong command parsed"),
    }
}

#[test]
fn request_file_conflicts_with_inline_fields() {
    let result = CliArgs::try_parse_from([
        "og-image",
        "render",
        "--request",
        "card.json",
        "--text",
        "Hello",
    ]);
    assert!(result.is_err());
}

#[test]
fn parse_icons_arguments() {
    let args = CliArgs::parse_from(["og-image", "icons", "--icons-dir", "/srv/icons"]);

    match args.command.expect("icons command") {
        Command::Icons(icons) => {
            assert_eq!(
                icons.assets.icons_dir.as_deref(),
                Some(Path::new("/srv/icons"))
            );
        }
        _ => panic!("wrong command parsed"),
    }
}

#[test]
#[serial]
fn footer_text_environment_variable_is_honoured() {
    // SAFETY: serialised with every other test touching the process environment.
    unsafe { std::env::set_var(FOOTER_TEXT_ENV, "cards.example.com") };
    let settings = load(&CliArgs::parse_from(["og-image"]));
    unsafe { std::env::remove_var(FOOTER_TEXT_ENV) };

    let settings = settings.expect("settings load");
    assert_eq!(settings.template.footer_text, "cards.example.com");
}

#[test]
#[serial]
fn footer_cli_override_beats_environment() {
    // SAFETY: serialised with every other test touching the process environment.
    unsafe { std::env::set_var(FOOTER_TEXT_ENV, "cards.example.com") };
    let settings = load(&CliArgs::parse_from([
        "og-image",
        "render",
        "--footer-text",
        "cli.example.com",
    ]));
    unsafe { std::env::remove_var(FOOTER_TEXT_ENV) };

    let settings = settings.expect("settings load");
    assert_eq!(settings.template.footer_text, "cli.example.com");
}

#[test]
#[serial]
fn missing_footer_environment_uses_default() {
    // SAFETY: serialised with every other test touching the process environment.
    unsafe { std::env::remove_var(FOOTER_TEXT_ENV) };

    let settings = load(&CliArgs::parse_from(["og-image"])).expect("settings load");
    assert_eq!(settings.template.footer_text, DEFAULT_FOOTER_TEXT);
}
