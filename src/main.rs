#[macro_use]
extern crate rocket;

use std::path::Path;

use log::{info, warn};
use rocket::fs::FileServer;
use rocket::response::content::RawHtml;
use rocket::{Build, Request, Rocket};

mod boot;
mod catalog;
mod config;
mod contact;
mod debounce;
mod detail;
mod models;
mod pipeline;
mod render;
mod routes;
mod seo;
mod ui_state;
mod view;


use catalog::CatalogLoader;
use config::SiteConfig;

const STATIC_DIR: &str = "website/static";

fn error_page(req: &Request<'_>, code: u16, message: &str) -> RawHtml<String> {
    let fallback;
    let config = match req.rocket().state::<SiteConfig>() {
        Some(c) => c,
        None => {
            fallback = SiteConfig::default();
            &fallback
        }
    };
    RawHtml(render::render_error_page(config, code, message))
}

#[catch(404)]
fn not_found(req: &Request<'_>) -> RawHtml<String> {
    error_page(req, 404, "Page not found.")
}

#[catch(500)]
fn server_error(req: &Request<'_>) -> RawHtml<String> {
    error_page(req, 500, "Internal server error.")
}

/// Assemble the server around a given configuration.
pub fn build(config: SiteConfig) -> Rocket<Build> {
    let loader = CatalogLoader::new(&config);
    info!("Serving catalog from {}", loader.source());

    let mut rocket = rocket::build()
        .manage(loader)
        .manage(config)
        .mount("/", routes::public::routes())
        .mount("/api", routes::api::routes())
        .register("/", catchers![not_found, server_error]);

    if Path::new(STATIC_DIR).is_dir() {
        rocket = rocket.mount("/assets", FileServer::from(STATIC_DIR));
    } else {
        warn!("{} is missing; /assets is not served", STATIC_DIR);
    }

    rocket
}

#[launch]
fn rocket() -> _ {
    env_logger::init();

    let config = SiteConfig::load();

    // Boot check: create directories, look for the catalog
    boot::run(&config);

    build(config)
}
