//! Title-based deduplication.

use crate::models::NewsItem;
use crate::utils::dedup_key;
use itertools::Itertools;

/// Drop items whose [`dedup_key`] was already seen.
///
/// The first occurrence of each key is kept regardless of source or category,
/// and kept items stay in their original relative order.
pub fn dedupe(items: Vec<NewsItem>) -> Vec<NewsItem> {
    items
        .into_iter()
        .unique_by(|item| dedup_key(&item.title))
        .collect()
}
