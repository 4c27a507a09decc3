//! `showcase` command: image-of-the-day pick.

use anyhow::{Result, bail};
use owo_colors::OwoColorize;
use serde_json::json;

use super::ShowcaseArgs;
use crate::config::SiteConfig;
use crate::log;
use crate::showcase::{Showcase, image_title};
use crate::utils::date::DateTimeUtc;

/// Run the showcase command.
pub fn run(args: &ShowcaseArgs, config: &SiteConfig) -> Result<()> {
    let date = match &args.date {
        Some(raw) => match DateTimeUtc::parse(raw) {
            Some(date) => date,
            None => bail!("invalid date '{raw}', expected YYYY-MM-DD"),
        },
        None => DateTimeUtc::now(),
    };

    let showcase = Showcase::load(config)?;
    let Some(index) = showcase.daily_index(date) else {
        log!("showcase"; "no images in '{}'", config.showcase_dir().display());
        return Ok(());
    };

    let image = &showcase.images()[index];
    let relative = config.root_relative(image);
    let title = image_title(image);

    if args.json {
        let value = json!({
            "image": relative,
            "title": title,
            "index": index,
            "total": showcase.len(),
            "notes": showcase.notes_html(),
        });
        let out = if args.pretty {
            serde_json::to_string_pretty(&value)?
        } else {
            serde_json::to_string(&value)?
        };
        println!("{out}");
        return Ok(());
    }

    println!(
        "{}  {} (slide {} of {})",
        relative.display().bold(),
        title.dimmed(),
        index + 1,
        showcase.len()
    );
    if let Some(notes) = showcase.notes_html() {
        println!("{notes}");
    }

    Ok(())
}
