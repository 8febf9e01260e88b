use std::path::PathBuf;

use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `herald` binary.
#[derive(Debug, Parser)]
#[command(name = "herald", version, about = "Herald - SEO meta tags and schema.org JSON-LD")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, raw, text
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Site settings file (JSON or TOML)
    #[arg(short, long, global = true, default_value = ".herald/settings.json")]
    pub settings: PathBuf,

    /// Directory holding persisted SEO records
    #[arg(long, global = true, default_value = ".herald/seo")]
    pub store: PathBuf,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            settings: self.settings.clone(),
            store: self.store.clone(),
        }
    }
}
