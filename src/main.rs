mod cli;

use banner_forge::config::Config;
use clap::Parser;
use cli::{Args, CliError, Command};

fn main() {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(args.log_level())
        .init();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    // If --config is specified, require the file to exist
    let config = match args.config {
        Some(ref path) => Config::load_from_explicit(path)?,
        None => Config::load(None).unwrap_or_else(|e| {
            log::warn!("Failed to load config file: {}; using default settings", e);
            Config::default()
        }),
    };

    match args.command {
        Some(Command::ListFonts { ref font_dir }) => {
            let font_dir = font_dir.clone().unwrap_or_else(|| config.font_dir());
            cli::list_fonts(&font_dir);
            Ok(())
        }
        Some(Command::Config { ref action }) => cli::handle_config_action(action.clone(), &config),
        None => {
            let text = cli::read_input(&args.text, std::io::stdin().lock())?;
            let art = cli::render_text(args, &config, &text)?;
            cli::write_art(std::io::stdout().lock(), &art)
        }
    }
}
