use crate::config::SiteConfig;
use crate::contact::{self, CheckoutRequest};
use crate::models::template::{find_by_id, Template};
use crate::render;
use crate::seo;
use crate::seo::meta::PageMeta;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DetailOutcome<'a> {
    NotFound,
    Found(&'a Template),
}

/// Resolve the `?id=` value. A missing parameter is simply not found.
pub fn lookup<'a>(catalog: &'a [Template], raw_id: Option<&str>) -> DetailOutcome<'a> {
    match raw_id.and_then(|id| find_by_id(catalog, id)) {
        Some(t) => DetailOutcome::Found(t),
        None => DetailOutcome::NotFound,
    }
}

/// Head and body for a detail request, kept apart so the metadata can be
/// inspected on its own.
#[derive(Debug, Clone)]
pub struct DetailPage {
    pub found: bool,
    pub head: String,
    pub body: String,
}

pub fn build_detail(config: &SiteConfig, outcome: DetailOutcome<'_>) -> DetailPage {
    let t = match outcome {
        DetailOutcome::Found(t) => t,
        // No per-template metadata, structured data or checkout form
        DetailOutcome::NotFound => {
            return DetailPage {
                found: false,
                head: render::default_head(config),
                body: render::render_not_found_body(),
            }
        }
    };

    let keywords = format!("template {}, buy template, {}", t.category, t.name);
    let path = t.detail_path();
    let mut head = seo::build_meta(
        config,
        &PageMeta {
            title: Some(&t.name),
            description: Some(&t.description),
            keywords: Some(&keywords),
            path: Some(&path),
        },
    );
    head.push('\n');
    head.push_str(&seo::build_template_jsonld(config, t));

    DetailPage {
        found: true,
        head,
        body: render::render_detail_body(t),
    }
}

pub fn render_detail_page(config: &SiteConfig, page: &DetailPage) -> String {
    render::render_layout(config, &page.head, &page.body, "")
}

/// Outbound WhatsApp link for a checkout submission, or `None` when the
/// template does not exist.
pub fn checkout_link(
    config: &SiteConfig,
    catalog: &[Template],
    raw_id: Option<&str>,
    req: &CheckoutRequest,
) -> Option<String> {
    match lookup(catalog, raw_id) {
        DetailOutcome::Found(t) => Some(contact::whatsapp_link(
            &config.whatsapp_number,
            &contact::checkout_message(t, req),
        )),
        DetailOutcome::NotFound => None,
    }
}
