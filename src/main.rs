//! antdoc - documentation site tool for the Antlia project.

use antdoc::cli::{Cli, Commands, check, init};
use antdoc::config::SiteConfig;
use anyhow::Result;
use clap::{ColorChoice, Parser};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = SiteConfig::load(&cli)?;

    match &cli.command {
        Commands::Init { name, dry } => init::new_project(&config, name.is_some(), *dry),
        Commands::Check { args } => check::check_site(args, &config),
    }
}
