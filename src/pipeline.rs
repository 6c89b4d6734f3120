use serde::Serialize;

use crate::models::query::{ListQuery, ALL_CATEGORIES};
use crate::models::template::Template;

/// Why a page has the items it has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingStatus {
    /// The catalog itself is empty (nothing loaded, or the load failed).
    Unavailable,
    /// The catalog has items but the filter/search excluded all of them.
    NoMatch,
    /// At least one item survived filtering. The requested page may still
    /// be out of range and therefore empty.
    Found,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageSlice<'a> {
    pub items: Vec<&'a Template>,
    pub total_pages: usize,
    pub filtered_count: usize,
    pub status: ListingStatus,
}

/// Filter, sort and slice the catalog.
///
/// Steps, in order: exact category match (unless `"all"`), case-insensitive
/// substring search over name and category, popularity sort (only when
/// neither filter is active), then slicing. `page` is 1-based and is not
/// checked against `total_pages`; an out-of-range page yields no items.
/// A `page_size` of 0 is treated as 1 and a `page` of 0 as 1.
pub fn paginate<'a>(
    catalog: &'a [Template],
    category: &str,
    search: &str,
    page: usize,
    page_size: usize,
) -> PageSlice<'a> {
    let page_size = page_size.max(1);

    let mut filtered: Vec<&Template> = catalog
        .iter()
        .filter(|t| category == ALL_CATEGORIES || t.category == category)
        .collect();

    if !search.is_empty() {
        let needle = search.to_lowercase();
        filtered.retain(|t| {
            t.name.to_lowercase().contains(&needle) || t.category.to_lowercase().contains(&needle)
        });
    }

    if category == ALL_CATEGORIES && search.is_empty() {
        // sort_by is stable: equal popularity keeps catalog order
        filtered.sort_by(|a, b| b.popularity_or_zero().total_cmp(&a.popularity_or_zero()));
    }

    let filtered_count = filtered.len();
    let status = if catalog.is_empty() {
        ListingStatus::Unavailable
    } else if filtered_count == 0 {
        ListingStatus::NoMatch
    } else {
        ListingStatus::Found
    };

    let total_pages = filtered_count.div_ceil(page_size);
    let start = page.saturating_sub(1).saturating_mul(page_size);
    let items = filtered.into_iter().skip(start).take(page_size).collect();

    PageSlice {
        items,
        total_pages,
        filtered_count,
        status,
    }
}

/// Run the pipeline for a [`ListQuery`].
pub fn paginate_query<'a>(catalog: &'a [Template], query: &ListQuery, page_size: usize) -> PageSlice<'a> {
    paginate(catalog, &query.category, &query.search, query.page, page_size)
}

/// Pull a requested page back into `1..=total_pages` (or 1 when there are
/// no pages at all). The view layer calls this before rendering so a stale
/// `?page=` link lands on the last page rather than an empty grid.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}
