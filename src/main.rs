use std::{
    fs,
    io::{self, Read, Write},
    path::Path,
    process,
    sync::Arc,
};

use og_image::{
    application::{
        error::AppError,
        render::{
            CardRenderer, CardTemplateConfig, TemplateCardRenderer, card_renderer,
            install_card_renderer,
        },
    },
    config,
    domain::request::CardRequest,
    infra::{
        assets::{builtin_icons, load_card_assets, load_icon_dir},
        error::InfraError,
        telemetry,
    },
};
use tracing::{Dispatch, Level, dispatcher, error, info};
use tracing_subscriber::fmt as tracing_fmt;

const STDIN_PATH: &str = "-";

fn main() {
    if let Err(error) = run() {
        report_application_error(&error);
        process::exit(1);
    }
}

fn report_application_error(error: &AppError) {
    let chain = error.messages().join(": ");

    if dispatcher::has_been_set() {
        error!(error = %chain, "application error");
        return;
    }

    let subscriber = tracing_fmt()
        .with_writer(io::stderr)
        .with_max_level(Level::ERROR)
        .finish();
    let dispatch = Dispatch::new(subscriber);
    dispatcher::with_default(&dispatch, || {
        error!(error = %chain, "application error");
    });
}

fn run() -> Result<(), AppError> {
    let (cli_args, settings) = config::load_with_cli()?;

    let command = cli_args
        .command
        .unwrap_or(config::Command::Render(Box::<config::RenderArgs>::default()));

    telemetry::init(&settings.logging)?;

    match command {
        config::Command::Render(args) => run_render(settings, *args),
        config::Command::Icons(_) => run_icons(settings),
    }
}

fn run_render(settings: config::Settings, args: config::RenderArgs) -> Result<(), AppError> {
    let assets = load_card_assets(&settings.assets)?;
    let renderer = TemplateCardRenderer::new(
        Arc::new(assets),
        CardTemplateConfig::from(&settings.template),
    );
    install_card_renderer(renderer)?;

    let request = card_request(&args.input)?;
    let document = card_renderer()?.render(&request)?;

    match args.output.as_deref() {
        Some(path) => {
            fs::write(path, &document).map_err(|err| InfraError::output(path, err))?;
            info!(
                target = "og_image::render",
                path = %path.display(),
                bytes = document.len(),
                "Card written"
            );
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(document.as_bytes())
                .and_then(|_| stdout.flush())
                .map_err(InfraError::from)?;
        }
    }

    Ok(())
}

fn run_icons(settings: config::Settings) -> Result<(), AppError> {
    let mut icons = builtin_icons();
    if let Some(dir) = settings.assets.icons_dir.as_deref() {
        icons.extend(load_icon_dir(dir)?);
    }

    let mut stdout = io::stdout().lock();
    for name in icons.names() {
        writeln!(stdout, "{name}").map_err(InfraError::from)?;
    }

    Ok(())
}

fn card_request(input: &config::CardInputArgs) -> Result<CardRequest, AppError> {
    if let Some(path) = input.request.as_deref() {
        return read_request(path);
    }

    let mut request = CardRequest::new(input.text.clone().unwrap_or_default())
        .with_markdown(input.md)
        .with_images(input.images.iter().cloned());
    if let Some(theme) = input.theme.as_deref() {
        request = request.with_theme(theme);
    }
    if let Some(font_size) = input.font_size.as_deref() {
        request = request.with_font_size(font_size);
    }

    Ok(request)
}

fn read_request(path: &Path) -> Result<CardRequest, AppError> {
    let raw = if path == Path::new(STDIN_PATH) {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(InfraError::from)?;
        buffer
    } else {
        fs::read_to_string(path).map_err(|err| InfraError::asset(path, err))?
    };

    serde_json::from_str(&raw).map_err(|err| {
        AppError::validation(format!(
            "invalid card request `{}`: {err}",
            path.display()
        ))
    })
}
