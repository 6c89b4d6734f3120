use rocket::http::CookieJar;
use rocket::serde::json::Json;
use rocket::State;
use serde::Serialize;

use crate::catalog::CatalogLoader;
use crate::config::SiteConfig;
use crate::pipeline::ListingStatus;
use crate::view::{HtmlSurface, RenderSummary};

/// One rendered list page for the live search script.
#[derive(Debug, Serialize)]
pub struct TemplatePage {
    pub category: String,
    pub search: String,
    #[serde(flatten)]
    pub summary: RenderSummary,
    pub grid: String,
    pub pagination: String,
}

#[get("/templates?<category>&<q>&<page>")]
pub async fn templates(
    config: &State<SiteConfig>,
    loader: &State<CatalogLoader>,
    cookies: &CookieJar<'_>,
    category: Option<String>,
    q: Option<String>,
    page: Option<usize>,
) -> Json<TemplatePage> {
    let (mut view, ticket) = super::open_list_view(config.page_size, cookies, category, q, page);

    let catalog = loader.load_catalog().await;
    let mut surface = HtmlSurface::default();
    let summary = view
        .complete(ticket, &catalog, &mut surface)
        .unwrap_or(RenderSummary {
            page: 1,
            total_pages: 0,
            filtered_count: 0,
            status: ListingStatus::Unavailable,
        });

    Json(TemplatePage {
        category: view.query().category.clone(),
        search: view.query().search.clone(),
        summary,
        grid: surface.grid,
        pagination: surface.pagination,
    })
}

pub fn routes() -> Vec<rocket::Route> {
    routes![templates]
}
