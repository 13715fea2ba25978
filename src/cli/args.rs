//! CLI argument parsing with clap.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use banner_forge::banner::{EngineOptions, MissingGlyph};
use banner_forge::config::Config;

/// Render text as block-letter banner art
#[derive(Parser, Debug)]
#[command(name = "banner-forge")]
#[command(version, about = "Render text as block-letter banner art", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
#[command(after_help = "EXAMPLES:
    banner-forge Hello
    banner-forge --banner shadow 'Hello World'
    printf 'two\\nlines' | banner-forge -b thinkertoy
    banner-forge --expand-escapes 'typed\\nescape'
    banner-forge list-fonts")]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Text to render; words are joined by spaces (default: read stdin)
    pub text: Vec<String>,

    /// Font bank: shadow, standard or thinkertoy
    #[arg(short, long)]
    pub banner: Option<String>,

    /// Directory holding the font bank files [default: ./fonts, relative to the working directory]
    #[arg(long)]
    pub font_dir: Option<PathBuf>,

    /// Turn a typed backslash-n into a line break
    #[arg(long)]
    pub expand_escapes: bool,

    /// Render every space-separated word as its own block
    #[arg(long)]
    pub split_spaces: bool,

    /// Fail on unknown banners instead of printing nothing
    #[arg(long)]
    pub strict: bool,

    /// Reject font banks that do not cover all printable ASCII
    #[arg(long)]
    pub validate: bool,

    /// Draw this character where a glyph row is missing from the bank
    #[arg(long, value_name = "CHAR")]
    pub placeholder: Option<char>,

    /// Config file path
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List font banks and whether their files are present
    ListFonts {
        /// Directory holding the font bank files [default: ./fonts, relative to the working directory]
        #[arg(long)]
        font_dir: Option<PathBuf>,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Create default config file
    Init,
}

impl Args {
    /// Banner selector: CLI > config file > "standard".
    pub fn banner(&self, config: &Config) -> String {
        self.banner
            .clone()
            .or_else(|| config.render.banner.clone())
            .unwrap_or_else(|| "standard".to_string())
    }

    /// Font directory: CLI > config file > built-in default.
    pub fn font_dir(&self, config: &Config) -> PathBuf {
        self.font_dir.clone().unwrap_or_else(|| config.font_dir())
    }

    /// Engine options with CLI flags layered over the config file.
    pub fn engine_options(&self, config: &Config) -> EngineOptions {
        let mut options = config.engine_options();
        options.normalize.expand_escapes |= self.expand_escapes;
        options.normalize.split_on_spaces |= self.split_spaces;
        options.strict_fonts |= self.strict;
        options.validate_banks |= self.validate;
        if let Some(c) = self.placeholder {
            options.missing = MissingGlyph::Placeholder(c);
        }
        options
    }

    /// Log level implied by the verbosity flag.
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        }
    }
}
