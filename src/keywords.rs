//! Static keyword and hint tables.
//!
//! All tables are read-only and built once on first use. Keywords are stored
//! lowercase and matched as plain substrings of the lowercased entry text, so
//! short keywords such as `"un"` or `"act"` match inside longer words.

use crate::models::Category;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Substrings that disqualify an entry regardless of any category match.
pub const REJECT_KEYWORDS: &[&str] = &[
    "murder",
    "rape",
    "crime",
    "arrest",
    "controversy",
    "scandal",
    "opinion:",
    "bollywood",
    "cricket",
    "entertainment",
    "horoscope",
];

/// Category keyword sets, in tie-break order.
pub static CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (
        Category::Polity,
        &[
            "supreme court",
            "constitution",
            "parliament",
            "bill",
            "act",
            "amendment",
            "judiciary",
            "legislation",
            "lok sabha",
            "rajya sabha",
            "article",
            "governor",
            "president",
        ],
    ),
    (
        Category::Economy,
        &[
            "rbi",
            "reserve bank",
            "gdp",
            "inflation",
            "fiscal",
            "monetary",
            "budget",
            "gst",
            "tax",
            "economy",
            "economic",
            "finance",
            "rupee",
            "repo rate",
            "bank",
            "sebi",
            "stock market",
        ],
    ),
    (
        Category::Schemes,
        &[
            "yojana",
            "scheme",
            "mission",
            "abhiyan",
            "portal",
            "programme",
            "initiative",
            "ministry launched",
        ],
    ),
    (
        Category::Defence,
        &[
            "army",
            "navy",
            "air force",
            "defence",
            "exercise",
            "missile",
            "drdo",
            "isro",
            "military",
            "security",
            "border",
        ],
    ),
    (
        Category::International,
        &[
            "treaty",
            "agreement",
            "bilateral",
            "summit",
            "united nations",
            "un",
            "world bank",
            "imf",
            "foreign policy",
            "external affairs",
            "g20",
            "brics",
            "saarc",
        ],
    ),
    (
        Category::Science,
        &[
            "isro",
            "space",
            "satellite",
            "rocket",
            "research",
            "technology",
            "innovation",
            "ai",
            "artificial intelligence",
            "cyber",
            "digital",
            "electronics",
        ],
    ),
    (
        Category::Reports,
        &[
            "index",
            "report",
            "ranking",
            "survey",
            "study",
            "data",
            "statistics",
            "released by",
        ],
    ),
    (
        Category::Environment,
        &[
            "environment",
            "climate",
            "pollution",
            "wildlife",
            "forest",
            "conservation",
            "renewable",
            "solar",
            "emission",
            "green",
            "sustainable",
        ],
    ),
];

/// Fallback exam angle for a category missing from [`EXAM_ANGLES`].
pub const DEFAULT_EXAM_ANGLE: &str = "Static GK ke liye relevant hai";

/// Fallback static link for a category missing from [`STATIC_LINKS`].
pub const DEFAULT_STATIC_LINK: &str = "Related government portal check karo";

static EXAM_ANGLES: Lazy<HashMap<Category, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (
            Category::Polity,
            "Constitutional provisions, judicial precedents, legislative procedures se related hai",
        ),
        (
            Category::Economy,
            "Economic indicators, monetary policy, fiscal measures ke liye important",
        ),
        (
            Category::Schemes,
            "Scheme objectives, beneficiaries, implementation ministry yaad rakhna",
        ),
        (
            Category::Defence,
            "Defence partnerships, exercises ka naam, equipment specifications note karna",
        ),
        (
            Category::International,
            "Bilateral/multilateral agreements, international organizations yaad rakhna",
        ),
        (
            Category::Science,
            "Applications, organizations (ISRO/DRDO), launches ki dates important hai",
        ),
        (
            Category::Reports,
            "India ki ranking, report publisher, key findings note karna",
        ),
        (
            Category::Environment,
            "International conventions, conservation efforts, targets yaad rakhna",
        ),
    ])
});

static STATIC_LINKS: Lazy<HashMap<Category, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (Category::Polity, "Constitution ki related articles check karo"),
        (Category::Economy, "Economic Survey aur Budget documents dekho"),
        (
            Category::Schemes,
            "Ministry website pe scheme details available hai",
        ),
        (Category::Defence, "Defence Ministry annual report useful hai"),
        (
            Category::International,
            "MEA website pe treaties aur agreements listed hai",
        ),
        (Category::Science, "ISRO/DRDO official websites check karo"),
        (Category::Reports, "Report publisher ki official website dekho"),
        (
            Category::Environment,
            "Ministry of Environment notifications track karo",
        ),
    ])
});

/// Why a category matters for exam preparation.
pub fn exam_angle(category: Category) -> &'static str {
    EXAM_ANGLES
        .get(&category)
        .copied()
        .unwrap_or(DEFAULT_EXAM_ANGLE)
}

/// Where to look for background material on a category.
pub fn static_link(category: Category) -> &'static str {
    STATIC_LINKS
        .get(&category)
        .copied()
        .unwrap_or(DEFAULT_STATIC_LINK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_table_follows_category_order() {
        let order: Vec<Category> = CATEGORY_KEYWORDS.iter().map(|(c, _)| *c).collect();
        assert_eq!(order, Category::ALL.to_vec());
    }

    #[test]
    fn test_keywords_are_lowercase() {
        for (_, words) in CATEGORY_KEYWORDS.iter() {
            for w in *words {
                assert_eq!(*w, w.to_lowercase());
            }
        }
        for w in REJECT_KEYWORDS {
            assert_eq!(*w, w.to_lowercase());
        }
    }

    #[test]
    fn test_every_category_has_hints() {
        for c in Category::ALL {
            assert_ne!(exam_angle(c), DEFAULT_EXAM_ANGLE);
            assert_ne!(static_link(c), DEFAULT_STATIC_LINK);
        }
    }

    #[test]
    fn test_polity_hints() {
        assert_eq!(
            exam_angle(Category::Polity),
            "Constitutional provisions, judicial precedents, legislative procedures se related hai"
        );
        assert_eq!(
            static_link(Category::Polity),
            "Constitution ki related articles check karo"
        );
    }
}
