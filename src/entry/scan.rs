//! Content directory scanning.

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use jwalk::WalkDir;
use rayon::prelude::*;

use super::{Entry, EntryMeta, extract_frontmatter};
use crate::config::SiteConfig;
use crate::text::slugify;
use crate::utils::plural::plural_count;
use crate::{debug, log};

/// Scan the configured content directory into entries.
///
/// Walks the directory for markdown files (sorted, so ids are assigned
/// deterministically), parses frontmatter in parallel, and returns every
/// entry including drafts; callers filter drafts as their listing needs.
/// Files that cannot be read or carry broken frontmatter are skipped
/// with a warning rather than failing the whole scan.
pub fn scan_entries(config: &SiteConfig) -> Result<Vec<Entry>> {
    let dir = config.content_dir();
    if !dir.is_dir() {
        bail!("content directory '{}' not found", dir.display());
    }

    let files = collect_markdown_files(&dir);
    let entries: Vec<Entry> = files
        .par_iter()
        .filter_map(|path| match load_entry(path) {
            Ok(entry) => Some(entry),
            Err(e) => {
                log!("scan"; "skipping {}: {}", config.root_relative(path).display(), e);
                None
            }
        })
        .collect();

    debug!("scan"; "collected {} from {}", plural_count(entries.len(), "entry", "entries"), dir.display());
    Ok(entries)
}

/// Collect markdown files under `dir`, sorted for deterministic ids.
fn collect_markdown_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<_> = WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path())
        .filter(|p| is_markdown(p))
        .collect();
    files.sort();
    files
}

/// Check for a markdown file extension.
fn is_markdown(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| matches!(ext.to_lowercase().as_str(), "md" | "markdown"))
}

/// Load a single entry from a markdown file.
fn load_entry(path: &Path) -> Result<Entry> {
    let source = std::fs::read_to_string(path)?;
    let (meta, body) = match extract_frontmatter(&source)? {
        Some((meta, body)) => (meta, body.to_string()),
        None => (EntryMeta::default(), source),
    };

    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default();
    Ok(Entry::new(slugify(stem), meta, body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_post(dir: &Path, name: &str, content: &str) {
        fs::write(dir.join(name), content).unwrap();
    }

    fn config_for(root: &Path) -> SiteConfig {
        let mut config = SiteConfig::default();
        config.set_root(root);
        config
    }

    #[test]
    fn test_scan_reads_frontmatter() {
        let temp = TempDir::new().unwrap();
        let content = temp.path().join("content");
        fs::create_dir(&content).unwrap();
        write_post(
            &content,
            "first-post.md",
            "---\ntitle: First\ndate: 2024-01-15\ncategories: arc-7\n---\nHello",
        );

        let entries = scan_entries(&config_for(temp.path())).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, "first-post");
        assert_eq!(entries[0].meta.title.as_deref(), Some("First"));
        assert_eq!(entries[0].meta.categories, vec!["arc-7"]);
        assert_eq!(entries[0].body, "Hello");
    }

    #[test]
    fn test_scan_without_frontmatter_uses_whole_body() {
        let temp = TempDir::new().unwrap();
        let content = temp.path().join("content");
        fs::create_dir(&content).unwrap();
        write_post(&content, "Plain Note.md", "Just text");

        let entries = scan_entries(&config_for(temp.path())).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, "plain-note");
        assert!(entries[0].meta.title.is_none());
        assert_eq!(entries[0].body, "Just text");
    }

    #[test]
    fn test_scan_skips_non_markdown_and_broken_files() {
        let temp = TempDir::new().unwrap();
        let content = temp.path().join("content");
        fs::create_dir(&content).unwrap();
        write_post(&content, "good.md", "---\ntitle: Good\n---\nok");
        write_post(&content, "broken.md", "+++\ntitle = unquoted\n+++\nbad");
        write_post(&content, "image.png", "not markdown");

        let entries = scan_entries(&config_for(temp.path())).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, "good");
    }

    #[test]
    fn test_scan_is_sorted_and_recursive() {
        let temp = TempDir::new().unwrap();
        let content = temp.path().join("content");
        fs::create_dir_all(content.join("arc-7")).unwrap();
        write_post(&content, "zeta.md", "z");
        write_post(&content.join("arc-7"), "alpha.md", "a");

        let entries = scan_entries(&config_for(temp.path())).unwrap();
        let ids: Vec<&str> = entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["alpha", "zeta"]);
    }

    #[test]
    fn test_scan_missing_directory_fails() {
        let temp = TempDir::new().unwrap();
        assert!(scan_entries(&config_for(temp.path())).is_err());
    }
}
