//! Image-of-the-day rotation for the home-page carousel.
//!
//! The carousel opens on a different slide each day: the ordinal day of
//! the year picks the slide, with a leap-year adjustment so a set keyed
//! to a fixed 366-day calendar stays aligned after February. The index
//! wraps around the image count, so short sets simply cycle.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use jwalk::WalkDir;

use crate::config::SiteConfig;
use crate::text::{humanize, markdownify};
use crate::utils::date::DateTimeUtc;

/// File extensions accepted as showcase images.
const IMAGE_EXTENSIONS: &[&str] = &["avif", "jpeg", "jpg", "png", "svg", "webp"];

/// The ordered showcase image set plus its optional companion document.
#[derive(Debug)]
pub struct Showcase {
    /// Image paths in stable name order.
    images: Vec<PathBuf>,
    /// Companion markdown source, when configured.
    notes: Option<String>,
}

impl Showcase {
    /// Load the showcase from the configured image directory.
    pub fn load(config: &SiteConfig) -> Result<Self> {
        let dir = config.showcase_dir();
        if !dir.is_dir() {
            bail!("showcase directory '{}' not found", dir.display());
        }

        let images = collect_images(&dir);
        let notes = match config.showcase_notes() {
            Some(path) => Some(
                std::fs::read_to_string(&path)
                    .with_context(|| format!("reading showcase notes '{}'", path.display()))?,
            ),
            None => None,
        };

        Ok(Self { images, notes })
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn images(&self) -> &[PathBuf] {
        &self.images
    }

    /// Slide index for the given date, `None` when the set is empty.
    pub fn daily_index(&self, date: DateTimeUtc) -> Option<usize> {
        rotation_index(date, self.images.len())
    }

    /// The image shown on the given date.
    pub fn pick(&self, date: DateTimeUtc) -> Option<&Path> {
        self.daily_index(date)
            .and_then(|idx| self.images.get(idx))
            .map(PathBuf::as_path)
    }

    /// Companion document rendered to block HTML.
    pub fn notes_html(&self) -> Option<String> {
        self.notes.as_deref().map(|notes| markdownify(notes, true))
    }
}

/// Slide index for a date over a rotation of `len` slides.
///
/// Day-of-year is shifted forward by one after February in leap years
/// (aligning post-February dates with a 366-day slide calendar), then
/// wrapped to the available count.
pub fn rotation_index(date: DateTimeUtc, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let day = usize::from(date.day_of_year());
    let leap_shift = usize::from(DateTimeUtc::is_leap_year(date.year) && day > 59);
    Some((day + leap_shift - 1) % len)
}

/// Display title for an image, derived from its file stem.
pub fn image_title(path: &Path) -> String {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default();
    humanize(stem)
}

/// Collect image files under `dir`, sorted so the rotation is stable.
fn collect_images(dir: &Path) -> Vec<PathBuf> {
    let mut images: Vec<_> = WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path())
        .filter(|p| is_image(p))
        .collect();
    images.sort();
    images
}

/// Check for an accepted image extension.
fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
}
