//! Declarative sort/filter/search over collection items.
//!
//! The query engine is a pure function of a slice's items and its view
//! parameters. It never mutates the input and recomputes cheaply on every
//! parameter change; collection sizes are bounded, so no caching layer is
//! needed.

use rust_decimal::Decimal;
use std::cmp::Ordering;

/// A comparable projection of one row field.
///
/// Numbers compare numerically, text lexically, and [`SortValue::Missing`]
/// sorts after every present value regardless of sort direction.
#[derive(Debug, Clone, PartialEq)]
pub enum SortValue {
    Number(Decimal),
    Text(String),
    Missing,
}

impl SortValue {
    fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// Natural ascending order between two present values.
    fn cmp_present(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a.cmp(b),
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            // Mixed-type keys should not occur for a well-formed row type;
            // order numbers before text so the result stays deterministic.
            (Self::Number(_), Self::Text(_)) => Ordering::Less,
            (Self::Text(_), Self::Number(_)) => Ordering::Greater,
            (Self::Missing, _) | (_, Self::Missing) => Ordering::Equal,
        }
    }
}

/// One sort instruction: a key and a direction.
#[derive(Debug, Clone, PartialEq)]
pub struct SortSpec<K> {
    pub key: K,
    pub descending: bool,
}

impl<K> SortSpec<K> {
    /// Ascending sort on `key`.
    pub fn asc(key: K) -> Self {
        Self {
            key,
            descending: false,
        }
    }

    /// Descending sort on `key`.
    pub fn desc(key: K) -> Self {
        Self {
            key,
            descending: true,
        }
    }
}

/// Categorical row filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter<C> {
    /// Keep every row.
    All,
    /// Keep rows whose category matches.
    Only(C),
}

impl<C> Default for CategoryFilter<C> {
    fn default() -> Self {
        Self::All
    }
}

impl<C: PartialEq> CategoryFilter<C> {
    fn accepts(&self, category: &C) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == category,
        }
    }
}

/// A row type the query engine can filter, search, and sort.
pub trait TableRow {
    /// Typed sort key for this row type.
    type SortKey;
    /// Categorical tag used by the filter step.
    type Category: PartialEq;

    /// The row's categorical tag.
    fn category(&self) -> Self::Category;

    /// Fields included in the global text search.
    fn search_fields(&self) -> Vec<&str>;

    /// Project the row onto one sort key.
    fn sort_value(&self, key: &Self::SortKey) -> SortValue;
}

/// Compute the rows to display for the given view parameters.
///
/// Filter and search are AND-combined; an empty query matches everything.
/// Sorting applies the specs as successive tie-break keys and is stable:
/// rows with fully equal keys keep their post-filter relative order.
pub fn displayed_rows<'a, R: TableRow>(
    items: &'a [R],
    filter: &CategoryFilter<R::Category>,
    search_query: &str,
    sorting: &[SortSpec<R::SortKey>],
) -> Vec<&'a R> {
    let query = search_query.to_lowercase();
    let mut rows: Vec<&R> = items
        .iter()
        .filter(|row| filter.accepts(&row.category()))
        .filter(|row| {
            query.is_empty()
                || row
                    .search_fields()
                    .iter()
                    .any(|field| field.to_lowercase().contains(&query))
        })
        .collect();

    rows.sort_by(|a, b| {
        for spec in sorting {
            let ordering = compare(
                &a.sort_value(&spec.key),
                &b.sort_value(&spec.key),
                spec.descending,
            );
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        Ordering::Equal
    });

    rows
}

/// Directional comparison with missing-last semantics.
fn compare(a: &SortValue, b: &SortValue, descending: bool) -> Ordering {
    match (a.is_missing(), b.is_missing()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => {
            let ordering = a.cmp_present(b);
            if descending { ordering.reverse() } else { ordering }
        }
    }
}
