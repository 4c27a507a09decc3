//! `categories` command: category tab listing.

use anyhow::Result;
use owo_colors::OwoColorize;

use super::CategoriesArgs;
use crate::config::SiteConfig;
use crate::entry::{category_tabs, scan_entries};
use crate::log;
use crate::utils::plural::plural_count;

/// Run the categories command.
pub fn run(args: &CategoriesArgs, config: &SiteConfig) -> Result<()> {
    let mut entries = scan_entries(config)?;
    if !args.drafts {
        entries.retain(|e| !e.is_draft());
    }

    let tabs = category_tabs(&entries, &config.categories);

    if args.json {
        let json = if args.pretty {
            serde_json::to_string_pretty(&tabs)?
        } else {
            serde_json::to_string(&tabs)?
        };
        println!("{json}");
        return Ok(());
    }

    for tab in &tabs {
        println!(
            "{}  {} ({})",
            tab.slug.cyan(),
            tab.display_name.bold(),
            plural_count(tab.count, "entry", "entries")
        );
    }
    log!("categories"; "{} present", plural_count(tabs.len(), "category", "categories"));

    Ok(())
}
