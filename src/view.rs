use log::debug;
use serde::Serialize;

use crate::models::query::{normalize_category, ListQuery};
use crate::models::template::Template;
use crate::pipeline::{clamp_page, paginate_query, ListingStatus};
use crate::render;
use crate::ui_state::{self, KeyValueStore};

/// Where the list view writes its output.
pub trait Surface {
    fn replace_grid(&mut self, html: String);
    fn replace_pagination(&mut self, html: String);
}

/// Collects rendered fragments for embedding in a page or a JSON reply.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct HtmlSurface {
    pub grid: String,
    pub pagination: String,
}

impl Surface for HtmlSurface {
    fn replace_grid(&mut self, html: String) {
        self.grid = html;
    }

    fn replace_pagination(&mut self, html: String) {
        self.pagination = html;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    Initial,
    CategoryChanged(String),
    SearchChanged(String),
    PageSelected(usize),
}

/// Identifies one requested render. Only the newest ticket may complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderTicket(u64);

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderSummary {
    pub page: usize,
    pub total_pages: usize,
    pub filtered_count: usize,
    pub status: ListingStatus,
}

/// State of the template list: the current query and the render sequence
/// counter. Search keystrokes are debounced by the caller before they
/// arrive here as `SearchChanged`.
pub struct ListView {
    query: ListQuery,
    page_size: usize,
    issued: u64,
}

impl ListView {
    pub fn new(page_size: usize) -> Self {
        Self::with_query(ListQuery::default(), page_size)
    }

    pub fn with_query(query: ListQuery, page_size: usize) -> Self {
        ListView {
            query,
            page_size: page_size.max(1),
            issued: 0,
        }
    }

    pub fn query(&self) -> &ListQuery {
        &self.query
    }

    /// Apply a user event and return the ticket for the render it calls for.
    /// Category and search changes are written to `store` right away and
    /// send the list back to page 1. Page changes never touch `store`.
    pub fn handle(&mut self, event: ViewEvent, store: &dyn KeyValueStore) -> RenderTicket {
        match event {
            ViewEvent::Initial => {
                let saved = ui_state::load_state(store);
                self.query = ListQuery::new(&saved.category, &saved.search, 1);
            }
            ViewEvent::CategoryChanged(category) => {
                let category = normalize_category(&category);
                ui_state::save_category(store, &category);
                self.query.category = category;
                self.query.page = 1;
            }
            ViewEvent::SearchChanged(search) => {
                ui_state::save_search(store, &search);
                self.query.search = search;
                self.query.page = 1;
            }
            ViewEvent::PageSelected(page) => {
                self.query.page = page.max(1);
            }
        }
        self.next_ticket()
    }

    pub fn is_current(&self, ticket: RenderTicket) -> bool {
        ticket.0 == self.issued
    }

    /// Finish a render once the catalog has arrived. A ticket that has been
    /// overtaken by a newer event is dropped and the surface is left alone.
    pub fn complete(
        &mut self,
        ticket: RenderTicket,
        catalog: &[Template],
        surface: &mut dyn Surface,
    ) -> Option<RenderSummary> {
        if !self.is_current(ticket) {
            debug!("Dropping stale render {} (latest {})", ticket.0, self.issued);
            return None;
        }

        let mut slice = paginate_query(catalog, &self.query, self.page_size);
        let page = clamp_page(self.query.page, slice.total_pages);
        if page != self.query.page {
            self.query.page = page;
            slice = paginate_query(catalog, &self.query, self.page_size);
        }

        surface.replace_grid(render::render_grid(&slice));
        surface.replace_pagination(render::build_pagination(&self.query, slice.total_pages));

        Some(RenderSummary {
            page: self.query.page,
            total_pages: slice.total_pages,
            filtered_count: slice.filtered_count,
            status: slice.status,
        })
    }

    fn next_ticket(&mut self) -> RenderTicket {
        self.issued += 1;
        RenderTicket(self.issued)
    }
}
