//! Ordered query-string mapping.
//!
//! DESIGN
//! ======
//! A query mapping never holds an empty value: setting a key to `None` or `""`
//! removes it. Keys keep their first-insertion position, so serialization order
//! is stable across updates. Encoding is `application/x-www-form-urlencoded`,
//! matching what the browser's `URLSearchParams` produces.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

/// Query parameters of one URL, in order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryMap {
    entries: Vec<(String, String)>,
}

impl QueryMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a location search string, with or without the leading `?`.
    ///
    /// Repeated keys keep the last value. Empty values are dropped.
    pub fn parse(search: &str) -> Self {
        let raw = search.strip_prefix('?').unwrap_or(search);
        let mut map = Self::new();
        for (key, value) in form_urlencoded::parse(raw.as_bytes()) {
            map.insert(key, value);
        }
        map
    }

    /// Set `key` to `value`, or remove it when `value` is empty.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        if value.is_empty() {
            self.remove(&key);
            return;
        }
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Set or delete `key`. `None` and `Some("")` both delete.
    pub fn set(&mut self, key: &str, value: Option<&str>) {
        match value {
            Some(value) => self.insert(key, value),
            None => {
                self.remove(key);
            }
        }
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        let idx = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(idx).1)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Encoded query without a leading `?`. Empty map yields `""`.
    pub fn to_query_string(&self) -> String {
        if self.entries.is_empty() {
            return String::new();
        }
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.iter())
            .finish()
    }

    /// Search form for navigation: `?` + query, or `""` when empty.
    pub fn to_search(&self) -> String {
        let query = self.to_query_string();
        if query.is_empty() {
            query
        } else {
            format!("?{query}")
        }
    }
}

impl<K, V> FromIterator<(K, V)> for QueryMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}
