use rocket::http::{Cookie, CookieJar, SameSite};

use crate::models::query::{normalize_category, ALL_CATEGORIES};

pub const CATEGORY_KEY: &str = "categoryFilter";
pub const SEARCH_KEY: &str = "searchQuery";

/// Longest search text that is remembered, in characters. Browsers drop
/// cookies past roughly 4 KB.
pub const MAX_SEARCH_LEN: usize = 256;

/// Durable per-client string storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// Cookies are the browser-scoped store: one year, whole site.
impl KeyValueStore for CookieJar<'_> {
    fn get(&self, key: &str) -> Option<String> {
        CookieJar::get(self, key).map(|c| c.value().to_string())
    }

    fn set(&self, key: &str, value: &str) {
        let mut cookie = Cookie::new(key.to_string(), value.to_string());
        cookie.set_http_only(true);
        cookie.set_same_site(SameSite::Lax);
        cookie.set_path("/");
        cookie.set_max_age(rocket::time::Duration::days(365));
        self.add(cookie);
    }
}

/// In-process store. Records every write in order.
#[cfg(test)]
#[derive(Default)]
pub struct MemoryStore {
    values: std::sync::Mutex<std::collections::HashMap<String, String>>,
    writes: std::sync::Mutex<Vec<(String, String)>>,
}

#[cfg(test)]
impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn writes(&self) -> Vec<(String, String)> {
        self.writes.lock().map(|w| w.clone()).unwrap_or_default()
    }
}

#[cfg(test)]
impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut values) = self.values.lock() {
            values.insert(key.to_string(), value.to_string());
        }
        if let Ok(mut writes) = self.writes.lock() {
            writes.push((key.to_string(), value.to_string()));
        }
    }
}

/// The remembered half of the list query. Page numbers are never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedState {
    pub category: String,
    pub search: String,
}

impl Default for PersistedState {
    fn default() -> Self {
        PersistedState {
            category: ALL_CATEGORIES.to_string(),
            search: String::new(),
        }
    }
}

pub fn load_state(store: &dyn KeyValueStore) -> PersistedState {
    PersistedState {
        category: store
            .get(CATEGORY_KEY)
            .map(|c| normalize_category(&c))
            .unwrap_or_else(|| ALL_CATEGORIES.to_string()),
        search: store.get(SEARCH_KEY).unwrap_or_default(),
    }
}

pub fn save_category(store: &dyn KeyValueStore, value: &str) {
    store.set(CATEGORY_KEY, value);
}

/// Longer text is cut to `MAX_SEARCH_LEN` characters before it is stored.
pub fn save_search(store: &dyn KeyValueStore, value: &str) {
    match value.char_indices().nth(MAX_SEARCH_LEN) {
        Some((cut, _)) => store.set(SEARCH_KEY, &value[..cut]),
        None => store.set(SEARCH_KEY, value),
    }
}
