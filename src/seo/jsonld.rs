use serde_json::json;

use crate::config::SiteConfig;
use crate::models::template::Template;

/// Numeric offer price from a display price: the currency prefix and every
/// thousands separator are removed, so `"Rp 1.250.000"` becomes `"1250000"`.
pub fn offer_price(display: &str, currency_prefix: &str, thousands_separator: &str) -> String {
    let trimmed = display.trim();
    let prefix = currency_prefix.trim();
    let without_prefix = if prefix.is_empty() {
        trimmed
    } else {
        trimmed.strip_prefix(prefix).unwrap_or(trimmed)
    };
    let amount = without_prefix.trim();
    if thousands_separator.is_empty() {
        amount.to_string()
    } else {
        amount.replace(thousands_separator, "")
    }
}

/// Build JSON-LD structured data for a template
pub fn build_template_jsonld(config: &SiteConfig, t: &Template) -> String {
    let ld = json!({
        "@context": "https://schema.org",
        "@type": "Product",
        "name": t.name,
        "image": config.canonical(&format!("/assets/{}", t.image)),
        "description": t.description,
        "category": t.category,
        "url": config.canonical(&t.detail_path()),
        "offers": {
            "@type": "Offer",
            "priceCurrency": config.currency_code,
            "price": offer_price(&t.price, &config.currency_prefix, &config.thousands_separator),
            "availability": "https://schema.org/InStock"
        }
    });

    // `</` would close the script element early
    let body = ld.to_string().replace("</", "<\\/");
    format!(
        "    <script type=\"application/ld+json\" id=\"structuredData\">{}</script>",
        body
    )
}
