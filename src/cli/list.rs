//! `list` command: sorted, filtered entry listings.

use anyhow::Result;
use owo_colors::OwoColorize;

use super::{ListArgs, SortOrder};
use crate::config::SiteConfig;
use crate::entry::{Entry, scan_entries, sort_by_date, sort_by_random, sort_by_title};
use crate::log;
use crate::text::lower_humanize;
use crate::utils::plural::plural_count;

/// Run the list command.
pub fn run(args: &ListArgs, config: &SiteConfig) -> Result<()> {
    let mut entries = scan_entries(config)?;

    if !args.drafts {
        entries.retain(|e| !e.is_draft());
    }
    if let Some(category) = &args.category {
        entries.retain(|e| e.in_category(category));
    }

    match args.sort {
        SortOrder::Date => sort_by_date(&mut entries),
        SortOrder::Title => sort_by_title(&mut entries),
        SortOrder::Random => sort_by_random(&mut entries),
    }

    if let Some(limit) = args.limit {
        entries.truncate(limit);
    }

    if args.json {
        print_json(&entries, args.pretty)?;
    } else {
        print_text(&entries, config);
        log!("list"; "{} shown", plural_count(entries.len(), "entry", "entries"));
    }

    Ok(())
}

/// Serialize entries to stdout.
fn print_json(entries: &[Entry], pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(entries)?
    } else {
        serde_json::to_string(entries)?
    };
    println!("{json}");
    Ok(())
}

/// One line per entry: date, title, excerpt, categories.
fn print_text(entries: &[Entry], config: &SiteConfig) {
    for entry in entries {
        let date = entry.meta.date.as_deref().unwrap_or("          ");
        let excerpt = entry.summary_text(config.content.summary_length);

        let mut line = format!("{}  {}", date.dimmed(), entry.title().bold());
        if !excerpt.is_empty() {
            line.push_str(&format!("  {}", excerpt.dimmed()));
        }
        for code in &entry.meta.categories {
            line.push_str(&format!("  [{}]", lower_humanize(code).cyan()));
        }
        println!("{line}");
    }
}
