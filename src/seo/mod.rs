pub mod jsonld;
pub mod meta;
pub mod sitemap;

// Re-export commonly used functions
pub use jsonld::build_template_jsonld;
pub use meta::build_meta;
pub use sitemap::{generate_robots, generate_sitemap};

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn xml_escape(s: &str) -> String {
    html_escape(s).replace('\'', "&apos;")
}
