//! Filter predicate evaluator.
//!
//! Every list page narrows its collection with the same building blocks: a
//! case-insensitive free-text query over a few designated fields, and any
//! number of categorical selections that either match everything (`all`)
//! or require exact equality. Criteria always combine with AND and the
//! source order is preserved.

use std::fmt;
use std::str::FromStr;

/// Sentinel accepted wherever a categorical selection is parsed.
pub const ALL: &str = "all";

/// Exposes the text fields a free-text search looks at.
pub trait Searchable {
    fn search_fields(&self) -> Vec<&str>;
}

/// A predicate over records of type `T`.
pub trait Filter<T> {
    fn matches(&self, item: &T) -> bool;
}

/// Lowercased free-text query. An empty query matches everything.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchQuery {
    needle: String,
}

impl SearchQuery {
    pub fn new(query: impl AsRef<str>) -> Self {
        Self {
            needle: query.as_ref().to_lowercase(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.needle
    }

    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    pub fn matches(&self, field: &str) -> bool {
        self.is_empty() || field.to_lowercase().contains(&self.needle)
    }

    /// True when any of `fields` contains the query.
    pub fn matches_any<'a, I>(&self, fields: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        if self.is_empty() {
            return true;
        }
        fields
            .into_iter()
            .any(|field| field.to_lowercase().contains(&self.needle))
    }

    pub fn matches_item<T: Searchable>(&self, item: &T) -> bool {
        self.is_empty() || self.matches_any(item.search_fields())
    }
}

impl From<&str> for SearchQuery {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for SearchQuery {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

/// Categorical criterion: everything, or exactly one value.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Selection<T> {
    All,
    Only(T),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Selection::All
    }
}

impl<T: PartialEq> Selection<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(expected) => expected == value,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }
}

impl<T> From<Option<T>> for Selection<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Selection::All, Selection::Only)
    }
}

impl<T: FromStr> FromStr for Selection<T> {
    type Err = T::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(ALL) {
            Ok(Selection::All)
        } else {
            trimmed.parse().map(Selection::Only)
        }
    }
}

impl<T: fmt::Display> fmt::Display for Selection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::All => f.write_str(ALL),
            Selection::Only(value) => value.fmt(f),
        }
    }
}

/// Returns the records accepted by `filter`, in source order.
pub fn apply_filter<T, F>(items: &[T], filter: &F) -> Vec<T>
where
    T: Clone,
    F: Filter<T> + ?Sized,
{
    items
        .iter()
        .filter(|item| filter.matches(item))
        .cloned()
        .collect()
}

/// Borrowing variant of [`apply_filter`].
pub fn filter_refs<'a, T, F>(items: &'a [T], filter: &F) -> Vec<&'a T>
where
    F: Filter<T> + ?Sized,
{
    items.iter().filter(|item| filter.matches(item)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Shirt {
        name: &'static str,
        sku: &'static str,
        size: &'static str,
    }

    impl Searchable for Shirt {
        fn search_fields(&self) -> Vec<&str> {
            vec![self.name, self.sku]
        }
    }

    struct SizeFilter {
        search: SearchQuery,
        size: Selection<String>,
    }

    impl Filter<Shirt> for SizeFilter {
        fn matches(&self, item: &Shirt) -> bool {
            self.size.matches(&item.size.to_string()) && self.search.matches_item(item)
        }
    }

    fn shirts() -> Vec<Shirt> {
        vec![
            Shirt {
                name: "Chemise Lin",
                sku: "CHE-LIN-H-002",
                size: "M",
            },
            Shirt {
                name: "T-shirt Coton",
                sku: "TSH-CB-H-001",
                size: "L",
            },
            Shirt {
                name: "Chemise Oxford",
                sku: "CHE-OXF-H-004",
                size: "L",
            },
        ]
    }

    #[test]
    fn search_is_case_insensitive_over_any_field() {
        let query = SearchQuery::new("tsh-cb");
        assert!(query.matches_any(["T-shirt", "TSH-CB-H-001"]));
        assert!(!query.matches_any(["Robe", "ROB-ETE-F-001"]));
    }

    #[test]
    fn empty_search_matches_everything() {
        let query = SearchQuery::default();
        assert!(query.matches_any(std::iter::empty()));
        assert!(query.matches(""));
    }

    #[test]
    fn selection_parses_all_sentinel() {
        assert_eq!("all".parse::<Selection<u8>>(), Ok(Selection::All));
        assert_eq!("ALL".parse::<Selection<u8>>(), Ok(Selection::All));
        assert_eq!("3".parse::<Selection<u8>>(), Ok(Selection::Only(3)));
        assert!("x".parse::<Selection<u8>>().is_err());
        assert_eq!(Selection::Only(3).to_string(), "3");
        assert_eq!(Selection::<u8>::All.to_string(), "all");
    }

    #[test]
    fn criteria_combine_with_and_and_keep_order() {
        let items = shirts();
        let filter = SizeFilter {
            search: SearchQuery::new("chemise"),
            size: Selection::Only("L".to_string()),
        };
        let hits = filter_refs(&items, &filter);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].sku, "CHE-OXF-H-004");

        let filter = SizeFilter {
            search: SearchQuery::new("h-00"),
            size: Selection::All,
        };
        let names: Vec<_> = filter_refs(&items, &filter)
            .iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, vec!["Chemise Lin", "T-shirt Coton", "Chemise Oxford"]);
    }
}
