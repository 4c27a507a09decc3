//! Entry ordering for listings.
//!
//! Each function reorders the slice in place and never touches entry
//! contents. All orderings are stable except the shuffle.

use std::cmp::Reverse;

use icu_collator::{Collator, CollatorOptions, Strength};
use icu_locid::Locale;
use rand::seq::SliceRandom;

use super::Entry;
use crate::debug;

/// Order entries newest first by effective timestamp.
///
/// Entries without a usable date count as the epoch and land at the end.
/// Equal timestamps keep their relative order.
pub fn sort_by_date(entries: &mut [Entry]) {
    entries.sort_by_key(|e| Reverse(e.timestamp()));
}

/// Order entries ascending by effective title under locale-aware collation.
///
/// Titles compare through the ICU root collator so accented and non-Latin
/// titles land where a reader expects, not where their code points do.
/// If collation data is unavailable the ordering falls back to ordinal.
pub fn sort_by_title(entries: &mut [Entry]) {
    match collator() {
        Some(collator) => entries.sort_by(|a, b| collator.compare(a.title(), b.title())),
        None => {
            debug!("sort"; "collator unavailable, using ordinal title order");
            entries.sort_by(|a, b| a.title().cmp(b.title()));
        }
    }
}

/// Shuffle entries uniformly (Fisher-Yates).
pub fn sort_by_random(entries: &mut [Entry]) {
    entries.shuffle(&mut rand::thread_rng());
}

/// Root-locale collator at tertiary strength.
fn collator() -> Option<Collator> {
    let mut options = CollatorOptions::new();
    options.strength = Some(Strength::Tertiary);
    Collator::try_new(&Locale::UND.into(), options).ok()
}
