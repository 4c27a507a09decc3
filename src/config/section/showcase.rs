//! `[showcase]` configuration for the image-of-the-day carousel.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShowcaseConfig {
    /// Directory of showcase images (relative to project root).
    pub dir: PathBuf,
    /// Optional companion markdown document rendered beside the carousel.
    pub notes: Option<PathBuf>,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("images"),
            notes: None,
        }
    }
}
