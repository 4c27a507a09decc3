//! Text conversion utilities.
//!
//! Pure, stateless string transforms used across listing and showcase
//! output:
//!
//! - [`slug`]: URL slug derivation (`slugify`)
//! - [`humanize`]: hyphenated-code to display-text transforms
//! - [`markdown`]: markdown to HTML rendering (`markdownify`)
//! - [`plain`]: markdown to plain-text reduction (`plainify`)

pub mod humanize;
pub mod markdown;
pub mod plain;
pub mod slug;

pub use humanize::{humanize, lower_humanize, upper_humanize};
pub use markdown::{MarkdownOptions, markdownify};
pub use plain::{plainify, truncate_chars};
pub use slug::slugify;
