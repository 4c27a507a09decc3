//! Arcview - content listing and showcase toolkit for an arc-based story blog.

#![allow(dead_code)]

mod cli;
mod config;
mod entry;
mod logger;
mod showcase;
mod text;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    logger::set_verbose(cli.verbose);

    let config = SiteConfig::load(&cli)?;

    match &cli.command {
        Commands::List { args } => cli::list::run(args, &config),
        Commands::Categories { args } => cli::categories::run(args, &config),
        Commands::Showcase { args } => cli::showcase::run(args, &config),
    }
}
