pub mod api;
pub mod public;

use crate::models::query::{normalize_category, ListQuery, ALL_CATEGORIES};
use crate::ui_state::KeyValueStore;
use crate::view::{ListView, RenderTicket, ViewEvent};

/// Map list-page query parameters onto view events.
///
/// `page` present means a pagination click: category and search come from
/// the link itself and nothing is persisted. Otherwise the view starts from
/// the persisted state and a `category` or `q` that differs from it counts
/// as a change (persisted, back to page 1).
pub(crate) fn open_list_view(
    page_size: usize,
    store: &dyn KeyValueStore,
    category: Option<String>,
    q: Option<String>,
    page: Option<usize>,
) -> (ListView, RenderTicket) {
    if let Some(page) = page {
        let query = ListQuery::new(
            category.as_deref().unwrap_or(ALL_CATEGORIES),
            q.as_deref().unwrap_or(""),
            1,
        );
        let mut view = ListView::with_query(query, page_size);
        let ticket = view.handle(ViewEvent::PageSelected(page), store);
        return (view, ticket);
    }

    let mut view = ListView::new(page_size);
    let mut ticket = view.handle(ViewEvent::Initial, store);

    if let Some(category) = category {
        if normalize_category(&category) != view.query().category {
            ticket = view.handle(ViewEvent::CategoryChanged(category), store);
        }
    }
    if let Some(search) = q {
        if search != view.query().search {
            ticket = view.handle(ViewEvent::SearchChanged(search), store);
        }
    }

    (view, ticket)
}
