use std::fmt;

use serde::{Deserialize, Serialize};

/// Catalog identifier. The JSON feed uses plain numbers, but hand-edited
/// catalogs sometimes quote them, so both shapes are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TemplateId {
    Number(i64),
    Text(String),
}

impl TemplateId {
    /// Compare against a raw query-string value.
    ///
    /// Both sides are reduced to their trimmed string form: a numeric id is
    /// written in canonical decimal, so `"7"`, `" 7 "` and `7` match each
    /// other while `"07"` does not.
    pub fn matches(&self, raw: &str) -> bool {
        match self {
            TemplateId::Number(n) => raw.trim() == n.to_string(),
            TemplateId::Text(s) => raw.trim() == s.trim(),
        }
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateId::Number(n) => write!(f, "{}", n),
            TemplateId::Text(s) => write!(f, "{}", s.trim()),
        }
    }
}

/// One sellable website template as it appears in `templates.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub id: TemplateId,
    pub name: String,
    pub category: String,
    /// Display price, e.g. `"Rp 150.000"`. Never used for arithmetic.
    pub price: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub popularity: Option<f64>,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub demo: String,
    #[serde(default)]
    pub description: String,
}

impl Template {
    pub fn popularity_or_zero(&self) -> f64 {
        self.popularity.unwrap_or(0.0)
    }

    pub fn detail_path(&self) -> String {
        let id: String = url::form_urlencoded::byte_serialize(self.id.to_string().as_bytes()).collect();
        format!("/detail?id={}", id)
    }
}

/// Distinct categories in first-seen order, used to build the filter select.
pub fn categories(catalog: &[Template]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for t in catalog {
        if !t.category.is_empty() && !seen.iter().any(|c| c == &t.category) {
            seen.push(t.category.clone());
        }
    }
    seen
}

/// Locate a template by raw `?id=` value.
pub fn find_by_id<'a>(catalog: &'a [Template], raw_id: &str) -> Option<&'a Template> {
    catalog.iter().find(|t| t.id.matches(raw_id))
}
