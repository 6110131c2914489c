//! Catalog category filter.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Which products a catalog listing should include.
///
/// The word `all` (any case) is the sentinel for "no filter". Any other value
/// selects products whose category matches it exactly, case-sensitively.
///
/// ```
/// use shopfront_core::CategoryFilter;
///
/// assert_eq!(CategoryFilter::parse("All"), CategoryFilter::All);
///
/// let books = CategoryFilter::parse("books");
/// assert!(books.matches("books"));
/// assert!(!books.matches("Books"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategoryFilter {
    /// Every product.
    #[default]
    All,
    /// Only products in this exact category.
    Only(String),
}

impl CategoryFilter {
    /// The sentinel value meaning "no filter".
    pub const ALL: &'static str = "all";

    /// Parse a filter from user input. Empty input means [`Self::All`].
    #[must_use]
    pub fn parse(s: &str) -> Self {
        if s.is_empty() || s.eq_ignore_ascii_case(Self::ALL) {
            Self::All
        } else {
            Self::Only(s.to_string())
        }
    }

    /// Whether a product in `category` passes this filter.
    #[must_use]
    pub fn matches(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(Self::ALL),
            Self::Only(category) => f.write_str(category),
        }
    }
}

impl From<String> for CategoryFilter {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<CategoryFilter> for String {
    fn from(filter: CategoryFilter) -> Self {
        filter.to_string()
    }
}

impl From<Option<&str>> for CategoryFilter {
    fn from(value: Option<&str>) -> Self {
        value.map_or(Self::All, Self::parse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_sentinel_is_case_insensitive() {
        assert_eq!(CategoryFilter::parse("all"), CategoryFilter::All);
        assert_eq!(CategoryFilter::parse("ALL"), CategoryFilter::All);
        assert_eq!(CategoryFilter::parse(""), CategoryFilter::All);
    }

    #[test]
    fn test_only_matches_exact_case() {
        let filter = CategoryFilter::parse("electronics");
        assert!(filter.matches("electronics"));
        assert!(!filter.matches("Electronics"));
        assert!(!filter.matches("electronics "));
    }

    #[test]
    fn test_all_matches_everything() {
        assert!(CategoryFilter::All.matches("anything"));
        assert!(CategoryFilter::All.matches(""));
    }

    #[test]
    fn test_from_option() {
        assert_eq!(CategoryFilter::from(None), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::from(Some("jewelery")),
            CategoryFilter::Only("jewelery".to_string())
        );
    }
}
