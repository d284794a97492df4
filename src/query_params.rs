use crate::compat::{BTreeMap, String, ToString, Vec};
use crate::percent_encode::{decode_component, encode_component_into};

/// Ordered multi-map of query parameters.
///
/// Pairs live in an arena in insertion order; removed pairs leave a tombstone
/// until the next compaction. A key index maps each key to the arena slots of
/// its pairs (ascending), so key-scoped edits only touch matching pairs.
#[derive(Debug, Clone, Default)]
pub struct QueryParams {
    slots: Vec<Option<(String, String)>>,
    index: BTreeMap<String, Vec<usize>>,
    len: usize,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse from a query string (with or without leading `?`).
    /// `&` separates pairs, the first `=` separates key from value, and a
    /// pair without `=` gets an empty value. Empty pairs are skipped.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);

        query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| match pair.split_once('=') {
                Some((key, value)) => (decode_component(key), decode_component(value)),
                None => (decode_component(pair), String::new()),
            })
            .collect()
    }

    /// Add a pair at the end, regardless of existing pairs for `key`.
    pub fn append(&mut self, key: &str, value: &str) {
        self.push_owned(key.to_string(), value.to_string());
    }

    fn push_owned(&mut self, key: String, value: String) {
        let slot = self.slots.len();
        self.index.entry(key.clone()).or_default().push(slot);
        self.slots.push(Some((key, value)));
        self.len += 1;
    }

    /// Drop every pair for `key`; returns how many were removed.
    pub fn delete(&mut self, key: &str) -> usize {
        let Some(positions) = self.index.remove(key) else {
            return 0;
        };
        for &pos in &positions {
            self.slots[pos] = None;
        }
        self.len -= positions.len();
        self.maybe_compact();
        positions.len()
    }

    /// Replace every pair for `key` with a single `(key, value)` at the end.
    pub fn set(&mut self, key: &str, value: &str) {
        self.delete(key);
        self.append(key, value);
    }

    /// Remove the first pair equal to `(key, value)`. Returns false when no
    /// pair matched.
    pub fn remove_pair(&mut self, key: &str, value: &str) -> bool {
        let Some(positions) = self.index.get_mut(key) else {
            return false;
        };
        let slots = &mut self.slots;
        let Some(at) = positions
            .iter()
            .position(|&pos| matches!(&slots[pos], Some((_, v)) if v == value))
        else {
            return false;
        };

        let pos = positions.remove(at);
        if positions.is_empty() {
            self.index.remove(key);
        }
        slots[pos] = None;
        self.len -= 1;
        self.maybe_compact();
        true
    }

    /// Cut the first occurrence of `pattern` out of every value for `key`,
    /// then trim surrounding whitespace from the edited value. Values without
    /// the pattern keep their text. Returns how many values changed.
    pub fn remove_substring(&mut self, key: &str, pattern: &str) -> usize {
        if pattern.is_empty() {
            return 0;
        }
        let Some(positions) = self.index.get(key) else {
            return 0;
        };

        let mut edited = 0;
        for &pos in positions {
            let Some((_, value)) = &mut self.slots[pos] else {
                continue;
            };
            let Some(start) = value.find(pattern) else {
                continue;
            };
            value.replace_range(start..start + pattern.len(), "");
            let trimmed = value.trim();
            if trimmed.len() != value.len() {
                *value = trimmed.to_string();
            }
            edited += 1;
        }
        edited
    }

    /// Get the first value for a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.index
            .get(key)
            .and_then(|positions| positions.first())
            .and_then(|&pos| self.value_at(pos))
    }

    /// Get the most recently inserted value for a key.
    pub fn last(&self, key: &str) -> Option<&str> {
        self.index
            .get(key)
            .and_then(|positions| positions.last())
            .and_then(|&pos| self.value_at(pos))
    }

    /// Get all values for a key.
    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.index
            .get(key)
            .map(|positions| {
                positions
                    .iter()
                    .filter_map(|&pos| self.value_at(pos))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn value_at(&self, pos: usize) -> Option<&str> {
        self.slots
            .get(pos)
            .and_then(Option::as_ref)
            .map(|(_, v)| v.as_str())
    }

    /// Check if a key exists.
    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Number of live pairs.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.slots
            .iter()
            .flatten()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.iter().map(|(k, _)| k)
    }

    /// Rebuild the arena once tombstones outnumber live pairs.
    fn maybe_compact(&mut self) {
        let dead = self.slots.len() - self.len;
        if dead <= self.len || dead < 8 {
            return;
        }
        let slots = core::mem::take(&mut self.slots);
        self.index.clear();
        self.len = 0;
        for (key, value) in slots.into_iter().flatten() {
            self.push_owned(key, value);
        }
    }

    /// Write `k=v&k=v...` (no leading `?`) into buffer.
    pub fn serialize_into(&self, buffer: &mut String) {
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                buffer.push('&');
            }
            encode_component_into(buffer, key);
            buffer.push('=');
            encode_component_into(buffer, value);
        }
    }
}

impl PartialEq for QueryParams {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl Eq for QueryParams {}

impl core::fmt::Display for QueryParams {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut buffer = String::new();
        self.serialize_into(&mut buffer);
        f.write_str(&buffer)
    }
}

impl FromIterator<(String, String)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            params.push_owned(key, value);
        }
        params
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            params.append(key, value);
        }
        params
    }
}

impl From<&str> for QueryParams {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(feature = "std"))]
    use alloc::vec;

    fn pairs(params: &QueryParams) -> Vec<(&str, &str)> {
        params.iter().collect()
    }

    #[test]
    fn test_parse_empty() {
        assert!(QueryParams::parse("").is_empty());
        assert!(QueryParams::parse("?").is_empty());
        assert!(QueryParams::parse("&&&").is_empty());
    }

    #[test]
    fn test_parse_no_value() {
        let params = QueryParams::parse("key1&key2=value2");
        assert_eq!(pairs(&params), vec![("key1", ""), ("key2", "value2")]);
    }

    #[test]
    fn test_parse_first_equals_splits() {
        let params = QueryParams::parse("key=value=with=equals");
        assert_eq!(params.get("key"), Some("value=with=equals"));
    }

    #[test]
    fn test_parse_duplicate_keys() {
        let params = QueryParams::parse("a=1&b=2&a=3");
        assert_eq!(params.len(), 3);
        assert_eq!(params.get("a"), Some("1"));
        assert_eq!(params.last("a"), Some("3"));
        assert_eq!(params.get_all("a"), vec!["1", "3"]);
    }

    #[test]
    fn test_set_moves_key_to_end() {
        let mut params = QueryParams::parse("a=2&b=1");
        params.set("a", "3");
        assert_eq!(pairs(&params), vec![("b", "1"), ("a", "3")]);
    }

    #[test]
    fn test_set_collapses_duplicates() {
        let mut params = QueryParams::parse("a=1&b=2&a=3");
        params.set("a", "9");
        assert_eq!(pairs(&params), vec![("b", "2"), ("a", "9")]);
        assert_eq!(params.get_all("a"), vec!["9"]);
    }

    #[test]
    fn test_delete() {
        let mut params = QueryParams::parse("a=1&b=2&a=3");
        assert_eq!(params.delete("a"), 2);
        assert_eq!(params.delete("a"), 0);
        assert_eq!(pairs(&params), vec![("b", "2")]);
        assert!(!params.contains_key("a"));
    }

    #[test]
    fn test_remove_pair_first_match_only() {
        let mut params = QueryParams::parse("a=1&a=3&a=3");
        assert!(params.remove_pair("a", "3"));
        assert_eq!(pairs(&params), vec![("a", "1"), ("a", "3")]);
        assert!(!params.remove_pair("a", "7"));
        assert!(!params.remove_pair("zz", "1"));
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn test_remove_last_pair_drops_key() {
        let mut params = QueryParams::parse("a=1");
        assert!(params.remove_pair("a", "1"));
        assert!(params.is_empty());
        assert!(!params.contains_key("a"));
    }

    #[test]
    fn test_remove_substring() {
        let mut params = QueryParams::parse("q=some%2C+thing&q=other+thing&r=some");
        assert_eq!(params.remove_substring("q", "some"), 1);
        assert_eq!(
            pairs(&params),
            vec![("q", ", thing"), ("q", "other thing"), ("r", "some")]
        );
    }

    #[test]
    fn test_remove_substring_first_occurrence_and_trim() {
        let mut params = QueryParams::parse("q=ab+ab+ab");
        params.remove_substring("q", "ab");
        assert_eq!(params.get("q"), Some("ab ab"));

        let mut params = QueryParams::parse("q=+untouched+");
        assert_eq!(params.remove_substring("q", "missing"), 0);
        assert_eq!(params.get("q"), Some(" untouched "));
        assert_eq!(params.remove_substring("q", ""), 0);
    }

    #[test]
    fn test_serialize() {
        let params = QueryParams::parse("key1=value1&key2=value+2&k%26=%3D");
        assert_eq!(params.to_string(), "key1=value1&key2=value+2&k%26=%3D");
    }

    #[test]
    fn test_serialize_empty_value() {
        let params = QueryParams::parse("flag");
        assert_eq!(params.to_string(), "flag=");
    }

    #[test]
    fn test_compaction_keeps_order() {
        let mut params = QueryParams::new();
        for i in 0..20 {
            params.append(if i % 2 == 0 { "even" } else { "odd" }, &i.to_string());
        }
        params.append("tail", "x");
        params.delete("even");
        params.remove_pair("odd", "1");
        params.remove_pair("odd", "3");

        assert_eq!(params.len(), 9);
        assert_eq!(
            params.get_all("odd"),
            vec!["5", "7", "9", "11", "13", "15", "17", "19"]
        );
        assert_eq!(params.keys().last(), Some("tail"));
        params.set("odd", "0");
        assert_eq!(pairs(&params), vec![("tail", "x"), ("odd", "0")]);
    }

    #[test]
    fn test_eq_ignores_tombstones() {
        let mut a = QueryParams::parse("x=1&y=2");
        a.remove_pair("x", "1");
        let b = QueryParams::parse("y=2");
        assert_eq!(a, b);
    }
}
