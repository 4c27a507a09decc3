//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Arcview content toolkit CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Content directory path (relative to project root)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub content: Option<PathBuf>,

    /// Config file path (default: arcview.toml)
    #[arg(short = 'C', long, default_value = "arcview.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List entries sorted and filtered for display
    #[command(visible_alias = "l")]
    List {
        #[command(flatten)]
        args: ListArgs,
    },

    /// Show category tabs with localized display names
    #[command(visible_alias = "c")]
    Categories {
        #[command(flatten)]
        args: CategoriesArgs,
    },

    /// Pick the showcase image of the day
    #[command(visible_alias = "s")]
    Showcase {
        #[command(flatten)]
        args: ShowcaseArgs,
    },
}

/// Listing order.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Newest first by publication date
    Date,
    /// Alphabetical by title (locale-aware)
    Title,
    /// Uniformly shuffled
    Random,
}

/// List command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ListArgs {
    /// Sort order for the listing
    #[arg(short, long, value_enum, default_value = "date")]
    pub sort: SortOrder,

    /// Only include entries carrying this category code
    #[arg(short = 'g', long)]
    pub category: Option<String>,

    /// Include draft entries in results
    #[arg(short, long)]
    pub drafts: bool,

    /// Limit the number of entries shown
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Output entries as JSON
    #[arg(short, long)]
    pub json: bool,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,
}

/// Categories command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct CategoriesArgs {
    /// Include draft entries when counting
    #[arg(short, long)]
    pub drafts: bool,

    /// Output tabs as JSON
    #[arg(short, long)]
    pub json: bool,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,
}

/// Showcase command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ShowcaseArgs {
    /// Rotation date override (YYYY-MM-DD, default: today)
    #[arg(short = 'D', long)]
    pub date: Option<String>,

    /// Output the pick as JSON
    #[arg(short, long)]
    pub json: bool,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,
}

#[allow(unused)]
impl Cli {
    pub const fn is_list(&self) -> bool {
        matches!(self.command, Commands::List { .. })
    }
    pub const fn is_categories(&self) -> bool {
        matches!(self.command, Commands::Categories { .. })
    }
    pub const fn is_showcase(&self) -> bool {
        matches!(self.command, Commands::Showcase { .. })
    }
}
