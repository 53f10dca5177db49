//! Relevance filtering and categorization.
//!
//! Both decisions are pure functions of the entry text and the static tables
//! in [`crate::keywords`]. Matching is plain substring search over the
//! lowercased `"<title> <description>"` text.

use crate::keywords::{CATEGORY_KEYWORDS, REJECT_KEYWORDS};
use crate::models::Category;

fn combined_text(title: &str, description: &str) -> String {
    format!("{title} {description}").to_lowercase()
}

fn first_category(text: &str) -> Option<Category> {
    CATEGORY_KEYWORDS
        .iter()
        .find(|(_, words)| words.iter().any(|w| text.contains(w)))
        .map(|(category, _)| *category)
}

/// Whether an entry is worth keeping.
///
/// Any reject keyword disqualifies the entry, even if it also matches a
/// category keyword. Otherwise the entry is relevant when it matches at least
/// one keyword of any category.
pub fn is_relevant(title: &str, description: &str) -> bool {
    let text = combined_text(title, description);
    if REJECT_KEYWORDS.iter().any(|w| text.contains(w)) {
        return false;
    }
    first_category(&text).is_some()
}

/// Assign the first matching category in [`Category::ALL`] order.
///
/// Does not consult the reject list; see [`classify`] for the combined check.
pub fn categorize(title: &str, description: &str) -> Option<Category> {
    first_category(&combined_text(title, description))
}

/// Relevance check and categorization in one step.
///
/// Returns `None` for entries that are not relevant.
pub fn classify(title: &str, description: &str) -> Option<Category> {
    if is_relevant(title, description) {
        categorize(title, description)
    } else {
        None
    }
}
