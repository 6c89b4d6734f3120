use crate::config::SiteConfig;
use crate::models::template::Template;

use super::xml_escape;

/// Generate sitemap.xml content.
pub fn generate_sitemap(config: &SiteConfig, catalog: &[Template]) -> String {
    let mut xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
"#,
    );

    // Homepage
    xml.push_str(&format!(
        "  <url><loc>{}</loc><changefreq>daily</changefreq><priority>1.0</priority></url>\n",
        xml_escape(&config.canonical("/"))
    ));

    xml.push_str(&format!(
        "  <url><loc>{}</loc><changefreq>monthly</changefreq><priority>0.5</priority></url>\n",
        xml_escape(&config.canonical("/contact"))
    ));

    for t in catalog {
        xml.push_str(&format!(
            "  <url><loc>{}</loc><priority>0.8</priority></url>\n",
            xml_escape(&config.canonical(&t.detail_path()))
        ));
    }

    xml.push_str("</urlset>");
    xml
}

pub fn generate_robots(config: &SiteConfig) -> String {
    format!(
        "User-agent: *\nAllow: /\nSitemap: {}",
        config.canonical("/sitemap.xml")
    )
}
