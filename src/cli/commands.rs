//! Subcommand handlers for rendering, list-fonts and config actions.

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use super::args::{Args, ConfigAction};
use banner_forge::banner::{Engine, FontSelector, RenderError};
use banner_forge::config::{default_path as get_config_path, Config, ConfigError, DEFAULT_CONFIG};

/// Errors surfaced by the command-line front end.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to read input from stdin: {0}")]
    Stdin(#[source] std::io::Error),

    #[error("Failed to write output: {0}")]
    Output(#[source] std::io::Error),

    #[error("Config file already exists: {}\nUse 'banner-forge config show' to view current settings.", .0.display())]
    ConfigExists(PathBuf),
}

impl CliError {
    /// Process exit code: 2 for bad input, 1 for everything else.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Render(e) if e.is_client_error() => 2,
            _ => 1,
        }
    }
}

/// Collect the text to render.
///
/// Positional words are joined by single spaces. Without any, all of
/// `stdin` is read and one trailing line break is dropped.
pub fn read_input(words: &[String], mut stdin: impl Read) -> Result<String, CliError> {
    if !words.is_empty() {
        return Ok(words.join(" "));
    }

    let mut text = String::new();
    stdin.read_to_string(&mut text).map_err(CliError::Stdin)?;
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    Ok(text)
}

/// Render `text` the way the form handler did: empty input is rejected.
pub fn render_text(args: &Args, config: &Config, text: &str) -> Result<String, CliError> {
    let engine = Engine::new(args.font_dir(config), args.engine_options(config));
    let banner = args.banner(config);
    log::info!("Rendering {} byte(s) with banner {:?}", text.len(), banner);
    log::debug!("Engine options: {:?}", engine.options());
    Ok(engine.render_request(text, &banner)?)
}

/// Write rendered art verbatim and flush it; it already ends with a newline.
pub fn write_art(mut out: impl Write, art: &str) -> Result<(), CliError> {
    out.write_all(art.as_bytes())
        .and_then(|()| out.flush())
        .map_err(CliError::Output)
}

/// List the font banks and print whether each file exists.
pub fn list_fonts(font_dir: &Path) {
    println!("Font banks in {}:", font_dir.display());
    for selector in FontSelector::ALL {
        let path = selector.path_in(font_dir);
        let status = if path.is_file() { "ok" } else { "missing" };
        println!("  {:<12} {:<16} {}", selector.name(), selector.file_name(), status);
    }
    println!();
    println!("Use --banner <name> to select a font bank.");
}

/// Handle config subcommand actions.
pub fn handle_config_action(action: ConfigAction, config: &Config) -> Result<(), CliError> {
    match action {
        ConfigAction::Show => {
            let options = config.engine_options();
            println!("Current configuration:");
            println!("  Font dir: {}", config.font_dir().display());
            println!(
                "  Banner: {}",
                config.render.banner.as_deref().unwrap_or("standard")
            );
            println!("  Expand escapes: {}", yes_no(options.normalize.expand_escapes));
            println!("  Split on spaces: {}", yes_no(options.normalize.split_on_spaces));
            match config.render.placeholder {
                Some(c) => println!("  Placeholder: {:?}", c),
                None => println!("  Placeholder: none (skip missing rows)"),
            }
            println!("  Strict fonts: {}", yes_no(options.strict_fonts));
            println!("  Validate banks: {}", yes_no(options.validate_banks));
            println!();

            let config_path = get_config_path();
            if config_path.exists() {
                println!("Config file: {} (exists)", config_path.display());
            } else {
                println!("Config file: {} (not found)", config_path.display());
            }
            Ok(())
        }
        ConfigAction::Init => {
            let config_path = get_config_path();
            if config_path.exists() {
                return Err(CliError::ConfigExists(config_path));
            }

            let io_error = |source: std::io::Error| ConfigError::Io {
                path: config_path.clone(),
                source,
            };

            if let Some(parent) = config_path.parent() {
                std::fs::create_dir_all(parent).map_err(io_error)?;
            }
            std::fs::write(&config_path, DEFAULT_CONFIG).map_err(io_error)?;

            println!("Created config file: {}", config_path.display());
            Ok(())
        }
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}
