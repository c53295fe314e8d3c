use std::{io, str::FromStr};

use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::{error::Error, json::Json};

/// An owned JSON document: the decoded tree that [`Json`] views borrow from.
///
/// A document either holds a decoded generic value (possibly a top-level
/// JSON `null`, which still *exists*) or is the canonical absent document
/// ([`Document::undefined`], also its `Default`). Decoding failures never
/// produce a partially populated document; constructors return an error, and
/// callers preferring an absent document on failure can `unwrap_or_default()`.
///
/// ```
/// use jsonlike::Document;
///
/// let document: Document = r#"{"name": "kira", "tags": ["a", "b"]}"#.parse()?;
/// assert_eq!(document.get("name").as_str().value, "kira");
/// assert_eq!(document.get("tags").index(1).as_str().value, "b");
/// # Ok::<(), jsonlike::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    data: Option<Value>,
}

impl Document {
    /// The canonical absent document.
    #[must_use]
    pub const fn undefined() -> Document {
        Document { data: None }
    }

    /// Decode a document from JSON bytes.
    ///
    /// # Errors
    ///
    /// [`Error::Decode`] when the bytes are not valid JSON.
    pub fn from_slice(bytes: &[u8]) -> Result<Document, Error> {
        serde_json::from_slice::<Value>(bytes)
            .map(Document::from)
            .map_err(Error::Decode)
    }

    /// Decode a document by reading a stream to end-of-document.
    ///
    /// The reader is not held open once this returns.
    ///
    /// # Errors
    ///
    /// [`Error::Decode`] when the stream does not contain valid JSON.
    pub fn from_reader(reader: impl io::Read) -> Result<Document, Error> {
        serde_json::from_reader::<_, Value>(reader)
            .map(Document::from)
            .map_err(Error::Decode)
    }

    /// Build a document from any serializable in-memory value.
    ///
    /// Scalars wrap directly, without a text round trip, but behave exactly
    /// as if they had been decoded from their JSON rendition.
    ///
    /// # Errors
    ///
    /// [`Error::Encode`] when the value cannot be represented as JSON, e.g.
    /// a map with non-string keys.
    pub fn from_value<T: Serialize + ?Sized>(value: &T) -> Result<Document, Error> {
        serde_json::to_value(value)
            .map(Document::from)
            .map_err(Error::Encode)
    }

    /// View over the document root.
    #[must_use]
    pub fn root(&self) -> Json<'_> {
        Json::from_option(self.data.as_ref())
    }

    /// Navigate to the value under `key`. See [`Json::get`].
    #[must_use]
    pub fn get(&self, key: &str) -> Json<'_> {
        self.root().get(key)
    }

    /// Navigate to the array element at `index`. See [`Json::index`].
    #[must_use]
    pub fn index(&self, index: usize) -> Json<'_> {
        self.root().index(index)
    }

    /// Whether the root is an object containing `key`. See [`Json::exists`].
    #[must_use]
    pub fn exists(&self, key: &str) -> bool {
        self.root().exists(key)
    }

    #[must_use]
    pub const fn is_undefined(&self) -> bool {
        self.data.is_none()
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        self.root().is_null()
    }

    #[must_use]
    pub fn is_null_or_undefined(&self) -> bool {
        self.root().is_null_or_undefined()
    }

    /// The underlying generic value, if one is present.
    #[must_use]
    pub const fn raw(&self) -> Option<&Value> {
        self.data.as_ref()
    }

    /// Consume the document, returning the underlying generic value.
    #[must_use]
    pub fn into_inner(self) -> Option<Value> {
        self.data
    }

    /// Encode back to compact JSON text. See [`Json::try_stringify`].
    ///
    /// # Errors
    ///
    /// [`Error::Encode`] when the value cannot be written out.
    pub fn try_stringify(&self) -> Result<String, Error> {
        self.root().try_stringify()
    }

    /// Encode back to compact JSON text, or `""` on failure.
    #[must_use]
    pub fn stringify(&self) -> String {
        self.root().stringify()
    }

    /// Encode as indented JSON text. See [`Json::try_stringify_indent`].
    ///
    /// # Errors
    ///
    /// [`Error::Encode`] when the value cannot be written out.
    pub fn try_stringify_indent(&self, prefix: &str, indent: &str) -> Result<String, Error> {
        self.root().try_stringify_indent(prefix, indent)
    }

    /// Encode as indented JSON text, or `""` on failure.
    #[must_use]
    pub fn stringify_indent(&self, prefix: &str, indent: &str) -> String {
        self.root().stringify_indent(prefix, indent)
    }

    /// Encode as two-space indented JSON text, or `""` on failure.
    #[must_use]
    pub fn pretty(&self) -> String {
        self.root().pretty()
    }

    /// Decode the document into a typed shape. See [`Json::unmarshal`].
    ///
    /// # Errors
    ///
    /// [`Error::Decode`] when the shape does not match.
    pub fn unmarshal<T: DeserializeOwned>(&self) -> Result<T, Error> {
        self.root().unmarshal()
    }

    /// Storage intake: decode a raw column payload into a document.
    ///
    /// The entire database-column surface is this pair of byte-oriented
    /// operations; any richer driver value must be reduced to its raw bytes
    /// first.
    ///
    /// # Errors
    ///
    /// [`Error::Decode`] when the payload is not valid JSON.
    pub fn from_column_bytes(bytes: &[u8]) -> Result<Document, Error> {
        Document::from_slice(bytes)
    }

    /// Storage export: encode the document to a column-writable payload.
    ///
    /// An absent document encodes as `null`.
    ///
    /// # Errors
    ///
    /// [`Error::Encode`] when the value cannot be written out.
    pub fn to_column_bytes(&self) -> Result<Vec<u8>, Error> {
        serde_json::to_vec(&self.root()).map_err(Error::Encode)
    }

    /// The encoded document as an in-memory readable stream.
    ///
    /// Encoding failures degrade to an empty stream; use
    /// [`to_column_bytes`](Document::to_column_bytes) to observe them.
    #[must_use]
    pub fn reader(&self) -> io::Cursor<Vec<u8>> {
        io::Cursor::new(self.to_column_bytes().unwrap_or_default())
    }
}

impl FromStr for Document {
    type Err = Error;

    /// Decode a document from JSON text.
    fn from_str(text: &str) -> Result<Document, Error> {
        serde_json::from_str::<Value>(text)
            .map(Document::from)
            .map_err(Error::Decode)
    }
}

impl From<Value> for Document {
    fn from(value: Value) -> Document {
        Document { data: Some(value) }
    }
}

impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.root().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Document {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Document, D::Error> {
        Value::deserialize(deserializer).map(Document::from)
    }
}
