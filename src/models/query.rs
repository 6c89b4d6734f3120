use serde::{Deserialize, Serialize};

/// Category filter value meaning "no category filter".
pub const ALL_CATEGORIES: &str = "all";

/// Category + search + page the list view is currently showing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    pub category: String,
    pub search: String,
    pub page: usize,
}

impl Default for ListQuery {
    fn default() -> Self {
        ListQuery {
            category: ALL_CATEGORIES.to_string(),
            search: String::new(),
            page: 1,
        }
    }
}

impl ListQuery {
    pub fn new(category: &str, search: &str, page: usize) -> Self {
        ListQuery {
            category: normalize_category(category),
            search: search.to_string(),
            page: page.max(1),
        }
    }

    /// Query string for a list URL at `page`, keeping category and search.
    pub fn href_for_page(&self, page: usize) -> String {
        let mut href = String::from("/?");
        let mut pairs = url::form_urlencoded::Serializer::new(String::new());
        pairs.append_pair("category", &self.category);
        pairs.append_pair("q", &self.search);
        pairs.append_pair("page", &page.to_string());
        href.push_str(&pairs.finish());
        href
    }
}

/// An empty category select value falls back to "all".
pub fn normalize_category(raw: &str) -> String {
    if raw.is_empty() {
        ALL_CATEGORIES.to_string()
    } else {
        raw.to_string()
    }
}
