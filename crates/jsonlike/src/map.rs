use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::{document::Document, error::Error, json::encode_indent};

/// A string-keyed mapping for building new JSON documents from scratch.
///
/// Construction convenience only; navigation happens through
/// [`Document`] and [`Json`](crate::Json). Key order is never
/// semantically meaningful.
///
/// ```
/// use jsonlike::Map;
///
/// let map = Map::new()
///     .with("name", "kira")
///     .with("age", 7);
/// let document = map.into_document();
/// assert_eq!(document.get("age").as_int().value, 7);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Map {
    entries: serde_json::Map<String, Value>,
}

impl Map {
    #[must_use]
    pub fn new() -> Map {
        Map::default()
    }

    /// Insert an entry, returning the previously stored value, if any.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Map {
        self.insert(key, value);
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Turn the mapping into an existing [`Document`].
    ///
    /// Infallible: the entries are already generic values.
    #[must_use]
    pub fn into_document(self) -> Document {
        Document::from(Value::Object(self.entries))
    }

    /// The underlying entry map.
    #[must_use]
    pub fn as_inner(&self) -> &serde_json::Map<String, Value> {
        &self.entries
    }

    #[must_use]
    pub fn into_inner(self) -> serde_json::Map<String, Value> {
        self.entries
    }

    /// Encode the mapping as compact JSON text.
    ///
    /// # Errors
    ///
    /// [`Error::Encode`] when the mapping cannot be written out.
    pub fn try_stringify(&self) -> Result<String, Error> {
        serde_json::to_string(&self.entries).map_err(Error::Encode)
    }

    /// Encode the mapping as compact JSON text, or `""` on failure.
    #[must_use]
    pub fn stringify(&self) -> String {
        self.try_stringify().unwrap_or_default()
    }

    /// Encode as indented JSON text. See
    /// [`Json::try_stringify_indent`](crate::Json::try_stringify_indent).
    ///
    /// # Errors
    ///
    /// [`Error::Encode`] when the mapping cannot be written out.
    pub fn try_stringify_indent(&self, prefix: &str, indent: &str) -> Result<String, Error> {
        encode_indent(&self.entries, prefix, indent)
    }

    /// Encode as indented JSON text, or `""` on failure.
    #[must_use]
    pub fn stringify_indent(&self, prefix: &str, indent: &str) -> String {
        self.try_stringify_indent(prefix, indent)
            .unwrap_or_default()
    }

    /// Encode as two-space indented JSON text, or `""` on failure.
    #[must_use]
    pub fn pretty(&self) -> String {
        self.stringify_indent("", "  ")
    }
}

impl From<serde_json::Map<String, Value>> for Map {
    fn from(entries: serde_json::Map<String, Value>) -> Map {
        Map { entries }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Map {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Map {
        Map {
            entries: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

impl<K: Into<String>, V: Into<Value>> Extend<(K, V)> for Map {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.entries
            .extend(iter.into_iter().map(|(key, value)| (key.into(), value.into())));
    }
}

impl Serialize for Map {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.entries.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::Map;
    use crate::Document;

    #[test]
    fn serialization_family() {
        let map = Map::new().with("key", "value");

        assert_eq!(map.stringify(), r#"{"key":"value"}"#);
        assert_eq!(map.pretty(), "{\n  \"key\": \"value\"\n}");
        assert_eq!(map.stringify_indent("", "   "), "{\n   \"key\": \"value\"\n}");

        assert_eq!(map.try_stringify().expect("encodable"), r#"{"key":"value"}"#);
        assert_eq!(
            map.try_stringify_indent("", "   ").expect("encodable"),
            "{\n   \"key\": \"value\"\n}"
        );
    }

    #[test]
    fn builds_navigable_documents() {
        let document = Map::new()
            .with("koko", "moko")
            .with("deep", json!({"lala": true}))
            .into_document();

        assert!(!document.is_undefined());
        assert_eq!(document.get("koko").as_str().value, "moko");
        assert!(document.get("deep").get("lala").as_bool().value);
    }

    #[test]
    fn matches_the_equivalent_decoded_document() {
        let built = Map::new()
            .with("a", 1)
            .with("b", json!([1, 2]))
            .into_document();
        let decoded: Document = r#"{"a": 1, "b": [1, 2]}"#.parse().expect("valid JSON");
        assert_eq!(built, decoded);
    }

    #[test]
    fn collects_from_iterators() {
        let map: Map = [("a", 1), ("b", 2)].into_iter().collect();
        assert_eq!(map.len(), 2);

        let mut extended = map.clone();
        extended.extend([("c", 3)]);
        assert_eq!(extended.len(), 3);
        assert!(!extended.is_empty());
        assert_eq!(extended.into_document().get("c").as_int().value, 3);
    }

    #[test]
    fn insert_replaces_and_reports_previous() {
        let mut map = Map::new();
        assert_eq!(map.insert("k", 1), None);
        assert_eq!(map.insert("k", 2), Some(json!(1)));
        assert_eq!(map.into_document().get("k").as_int().value, 2);
    }
}
