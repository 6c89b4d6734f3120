use rocket::form::Form;
use rocket::http::{CookieJar, Status};
use rocket::response::content::{RawHtml, RawXml};
use rocket::response::Redirect;
use rocket::State;

use crate::catalog::CatalogLoader;
use crate::config::SiteConfig;
use crate::contact::{self, CheckoutRequest, ContactRequest};
use crate::detail;
use crate::models::template;
use crate::render;
use crate::seo;
use crate::view::HtmlSurface;

// ── Template list ──────────────────────────────────────

#[get("/?<category>&<q>&<page>")]
pub async fn template_list(
    config: &State<SiteConfig>,
    loader: &State<CatalogLoader>,
    cookies: &CookieJar<'_>,
    category: Option<String>,
    q: Option<String>,
    page: Option<usize>,
) -> RawHtml<String> {
    let (mut view, ticket) = super::open_list_view(config.page_size, cookies, category, q, page);

    let catalog = loader.load_catalog().await;
    let mut surface = HtmlSurface::default();
    view.complete(ticket, &catalog, &mut surface);

    let categories = template::categories(&catalog);
    RawHtml(render::render_list_page(config, view.query(), &categories, &surface))
}

// ── Template detail ────────────────────────────────────

#[get("/detail?<id>")]
pub async fn template_detail(
    config: &State<SiteConfig>,
    loader: &State<CatalogLoader>,
    id: Option<String>,
) -> (Status, RawHtml<String>) {
    let catalog = loader.load_catalog().await;
    let page = detail::build_detail(config, detail::lookup(&catalog, id.as_deref()));
    let status = if page.found { Status::Ok } else { Status::NotFound };
    (status, RawHtml(detail::render_detail_page(config, &page)))
}

#[post("/detail/checkout?<id>", data = "<form>")]
pub async fn checkout(
    config: &State<SiteConfig>,
    loader: &State<CatalogLoader>,
    id: Option<String>,
    form: Form<CheckoutRequest>,
) -> Option<Redirect> {
    let catalog = loader.load_catalog().await;
    detail::checkout_link(config, &catalog, id.as_deref(), &form).map(Redirect::to)
}

// ── Contact ────────────────────────────────────────────

#[get("/contact")]
pub fn contact_page(config: &State<SiteConfig>) -> RawHtml<String> {
    RawHtml(render::render_contact_page(config))
}

#[post("/contact", data = "<form>")]
pub fn contact_submit(config: &State<SiteConfig>, form: Form<ContactRequest>) -> Redirect {
    let message = contact::contact_message(&form);
    Redirect::to(contact::whatsapp_link(&config.whatsapp_number, &message))
}

// ── Sitemap ────────────────────────────────────────────

#[get("/sitemap.xml")]
pub async fn sitemap(config: &State<SiteConfig>, loader: &State<CatalogLoader>) -> RawXml<String> {
    let catalog = loader.load_catalog().await;
    RawXml(seo::generate_sitemap(config, &catalog))
}

// ── Robots.txt ─────────────────────────────────────────

#[get("/robots.txt")]
pub fn robots(config: &State<SiteConfig>) -> String {
    seo::generate_robots(config)
}

pub fn routes() -> Vec<rocket::Route> {
    routes![
        template_list,
        template_detail,
        checkout,
        contact_page,
        contact_submit,
        sitemap,
        robots,
    ]
}
