use crate::config::SiteConfig;

use super::html_escape;

/// Page-specific head tags.
#[derive(Debug, Default, Clone)]
pub struct PageMeta<'a> {
    pub title: Option<&'a str>,
    pub description: Option<&'a str>,
    pub keywords: Option<&'a str>,
    /// Path plus query, e.g. `/detail?id=3`.
    pub path: Option<&'a str>,
}

/// Build meta tags HTML string for a page
pub fn build_meta(config: &SiteConfig, meta: &PageMeta<'_>) -> String {
    let page_title = match meta.title {
        Some(t) => format!("{} - {}", t, config.site_name),
        None => config.site_name.clone(),
    };

    let mut html = format!("    <title>{}</title>", html_escape(&page_title));

    if let Some(desc) = meta.description {
        html.push_str(&format!(
            "\n    <meta name=\"description\" content=\"{}\">",
            html_escape(desc)
        ));
    }

    if let Some(keywords) = meta.keywords {
        html.push_str(&format!(
            "\n    <meta name=\"keywords\" content=\"{}\">",
            html_escape(keywords)
        ));
    }

    if let Some(path) = meta.path {
        let canonical = config.canonical(path);
        html.push_str(&format!(
            "\n    <link rel=\"canonical\" href=\"{}\">",
            html_escape(&canonical)
        ));
        // Open Graph
        html.push_str(&format!(
            r#"
    <meta property="og:title" content="{}">
    <meta property="og:url" content="{}">
    <meta property="og:site_name" content="{}">
    <meta property="og:type" content="product">"#,
            html_escape(&page_title),
            html_escape(&canonical),
            html_escape(&config.site_name),
        ));
    }

    html
}
