use serde::{Serialize, Serializer};
use serde_json::{ser::PrettyFormatter, Value};

use crate::{
    error::Error,
    typed::{Arr, Bool, Float64, Int, Int64, Str},
};

static NULL: Value = Value::Null;

/// A view over any JSON value, or the absence of one.
///
/// Navigation never fails: looking up a key that is not there, indexing past
/// the end of an array, or descending through a value of the wrong shape all
/// degrade to the canonical absent view instead of panicking, so chains of
/// arbitrary length are always well-defined:
///
/// ```
/// use jsonlike::Document;
///
/// let document: Document = r#"{"a": {"b": [1, 2]}}"#.parse()?;
/// assert_eq!(document.get("a").get("b").index(1).as_i64().value, 2);
/// assert!(document.get("a").get("x").get("y").index(9).is_undefined());
/// # Ok::<(), jsonlike::Error>(())
/// ```
///
/// A view distinguishes three states: absent ([`is_undefined`]), present
/// JSON null ([`is_null`]), and a present value. A key that is present with
/// a null value *exists* and is not undefined.
///
/// Views are `Copy` and borrow the decoded tree owned by a
/// [`Document`](crate::Document); nothing is ever written back through one.
///
/// [`is_undefined`]: Json::is_undefined
/// [`is_null`]: Json::is_null
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Json<'a> {
    data: Option<&'a Value>,
}

const _: () = const {
    assert!(std::mem::size_of::<Json<'static>>() <= 8);
};

impl Json<'static> {
    /// The canonical absent view.
    pub const UNDEFINED: Json<'static> = Json { data: None };
}

impl<'a> Json<'a> {
    /// Wrap a borrowed generic value as an existing view.
    #[must_use]
    pub const fn new(value: &'a Value) -> Json<'a> {
        Json { data: Some(value) }
    }

    pub(crate) const fn from_option(data: Option<&'a Value>) -> Json<'a> {
        Json { data }
    }

    /// The underlying generic value, if one is present.
    #[must_use]
    pub const fn raw(self) -> Option<&'a Value> {
        self.data
    }

    fn value(self) -> &'a Value {
        self.data.unwrap_or(&NULL)
    }

    /// Navigate to the value under `key`.
    ///
    /// Returns the absent view when this view is absent, is not an object,
    /// or the key is missing. A key that is present with a null value yields
    /// an existing view.
    #[must_use]
    pub fn get(self, key: &str) -> Json<'a> {
        match self.data {
            Some(Value::Object(map)) => match map.get(key) {
                Some(value) => Json::new(value),
                None => Json::UNDEFINED,
            },
            _ => Json::UNDEFINED,
        }
    }

    /// Navigate to the array element at `index`.
    ///
    /// Returns the absent view when this view is absent, is not an array, or
    /// the index is out of range.
    #[must_use]
    pub fn index(self, index: usize) -> Json<'a> {
        match self.data {
            Some(Value::Array(elements)) => match elements.get(index) {
                Some(value) => Json::new(value),
                None => Json::UNDEFINED,
            },
            _ => Json::UNDEFINED,
        }
    }

    /// Whether this view is an object containing `key`.
    ///
    /// `true` even when the key's value is null; `false` for non-objects.
    #[must_use]
    pub fn exists(self, key: &str) -> bool {
        matches!(self.data, Some(Value::Object(map)) if map.contains_key(key))
    }

    /// Whether no value is present here at all.
    #[must_use]
    pub const fn is_undefined(self) -> bool {
        self.data.is_none()
    }

    /// Whether a JSON null is present here.
    ///
    /// Distinct from [`is_undefined`](Json::is_undefined): a null is a value
    /// that exists.
    #[must_use]
    pub fn is_null(self) -> bool {
        matches!(self.data, Some(Value::Null))
    }

    #[must_use]
    pub fn is_null_or_undefined(self) -> bool {
        self.is_undefined() || self.is_null()
    }

    /// Visit every entry of an object.
    ///
    /// Does nothing and returns `0` when this view is not an object. The
    /// visitor may stop iteration early by returning `false`; the returned
    /// count is the number of entries actually visited, including the one
    /// that stopped iteration. Entry order is not guaranteed.
    ///
    /// ```
    /// use jsonlike::Document;
    ///
    /// let document: Document = r#"{"a": 1, "b": 2}"#.parse()?;
    /// let mut keys = Vec::new();
    /// let visited = document.root().iter_map(|key, _| {
    ///     keys.push(key);
    ///     true
    /// });
    /// assert_eq!(visited, 2);
    /// keys.sort_unstable();
    /// assert_eq!(keys, ["a", "b"]);
    /// # Ok::<(), jsonlike::Error>(())
    /// ```
    pub fn iter_map<F>(self, mut visitor: F) -> usize
    where
        F: FnMut(&'a str, Json<'a>) -> bool,
    {
        let Some(Value::Object(map)) = self.data else {
            return 0;
        };
        let mut count = 0;
        for (key, value) in map {
            count += 1;
            if !visitor(key.as_str(), Json::new(value)) {
                break;
            }
        }
        count
    }

    /// Extract a string; valid iff the present value is a JSON string.
    ///
    /// No coercion from other types, ever.
    #[must_use]
    pub fn as_str(self) -> Str<'a> {
        match self.data {
            Some(Value::String(value)) => Str {
                value,
                is_valid: true,
            },
            _ => Str::default(),
        }
    }

    /// Extract a boolean; valid iff the present value is a JSON boolean.
    #[must_use]
    pub fn as_bool(self) -> Bool {
        match self.data {
            Some(Value::Bool(value)) => Bool {
                value: *value,
                is_valid: true,
            },
            _ => Bool::default(),
        }
    }

    /// Extract a 64-bit integer; valid iff the present value is a number
    /// that fits.
    ///
    /// Float-backed numbers convert with `as` semantics: truncation toward
    /// zero, saturating at the i64 bounds, so `2.07` extracts as `2`. Integers
    /// only representable as `u64` do not fit and are invalid. With the
    /// `arbitrary_precision` feature, string-backed numbers must be exactly
    /// representable as i64; fractional or out-of-range decimals are
    /// invalid.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn as_i64(self) -> Int64 {
        let Some(Value::Number(number)) = self.data else {
            return Int64::default();
        };
        if let Some(value) = number.as_i64() {
            return Int64 {
                value,
                is_valid: true,
            };
        }
        #[cfg(not(feature = "arbitrary_precision"))]
        {
            if !number.is_u64() {
                if let Some(float) = number.as_f64() {
                    return Int64 {
                        value: float as i64,
                        is_valid: true,
                    };
                }
            }
        }
        Int64::default()
    }

    /// Extract a 32-bit integer.
    ///
    /// Delegates to [`as_i64`](Json::as_i64) and narrows; validity is
    /// inherited unchanged, and values outside the i32 range truncate to
    /// their low 32 bits rather than fail.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn as_int(self) -> Int {
        let Int64 { value, is_valid } = self.as_i64();
        Int {
            value: value as i32,
            is_valid,
        }
    }

    /// Extract a float; valid iff the present value is a number.
    #[must_use]
    pub fn as_f64(self) -> Float64 {
        match self.data {
            Some(Value::Number(number)) => match number.as_f64() {
                Some(value) => Float64 {
                    value,
                    is_valid: true,
                },
                None => Float64::default(),
            },
            _ => Float64::default(),
        }
    }

    /// Interpret this view as an array.
    ///
    /// The result is invalid, but still safely iterable, when the view is
    /// absent, null, or not an array:
    ///
    /// ```
    /// use jsonlike::Document;
    ///
    /// let document: Document = r#"{"b": 123}"#.parse()?;
    /// let array = document.get("b").as_array();
    /// assert!(!array.is_valid);
    /// assert!(array.values().is_empty());
    /// # Ok::<(), jsonlike::Error>(())
    /// ```
    #[must_use]
    pub fn as_array(self) -> Arr<'a> {
        match self.data {
            Some(Value::Array(elements)) => Arr::valid(elements),
            _ => Arr::default(),
        }
    }

    /// Encode this view back to compact JSON text.
    ///
    /// An absent view encodes as `null`.
    pub fn try_stringify(self) -> Result<String, Error> {
        serde_json::to_string(self.value()).map_err(Error::Encode)
    }

    /// Encode this view back to compact JSON text, or `""` on failure.
    #[must_use]
    pub fn stringify(self) -> String {
        self.try_stringify().unwrap_or_default()
    }

    /// Encode as indented JSON text.
    ///
    /// Every line after the first starts with `prefix`; nesting adds one
    /// copy of `indent` per level.
    pub fn try_stringify_indent(self, prefix: &str, indent: &str) -> Result<String, Error> {
        encode_indent(self.value(), prefix, indent)
    }

    /// Encode as indented JSON text, or `""` on failure.
    #[must_use]
    pub fn stringify_indent(self, prefix: &str, indent: &str) -> String {
        self.try_stringify_indent(prefix, indent).unwrap_or_default()
    }

    /// Encode as two-space indented JSON text, or `""` on failure.
    #[must_use]
    pub fn pretty(self) -> String {
        self.stringify_indent("", "  ")
    }

    /// Decode the current value into a typed shape.
    ///
    /// The one operation here that fails loudly: the caller opts into strict
    /// shape expectations, and a mismatch surfaces the underlying decode
    /// error. An absent view decodes as `null`.
    ///
    /// ```
    /// use jsonlike::Document;
    /// use serde::Deserialize;
    ///
    /// #[derive(Deserialize, Debug, PartialEq)]
    /// struct Pixel {
    ///     x: i32,
    ///     y: i32,
    /// }
    ///
    /// let document: Document = r#"{"pix": {"x": 123, "y": 456}}"#.parse()?;
    /// let pixel: Pixel = document.get("pix").unmarshal()?;
    /// assert_eq!(pixel, Pixel { x: 123, y: 456 });
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn unmarshal<T: serde::de::DeserializeOwned>(self) -> Result<T, Error> {
        T::deserialize(self.value()).map_err(Error::Decode)
    }
}

impl<'a> From<&'a Value> for Json<'a> {
    fn from(value: &'a Value) -> Json<'a> {
        Json::new(value)
    }
}

impl Serialize for Json<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value().serialize(serializer)
    }
}

pub(crate) fn encode_indent<T>(value: &T, prefix: &str, indent: &str) -> Result<String, Error>
where
    T: Serialize + ?Sized,
{
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    value.serialize(&mut serializer).map_err(Error::Encode)?;
    // The serializer writes valid UTF-8.
    let mut text = String::from_utf8_lossy(&buffer).into_owned();
    if !prefix.is_empty() {
        text = text.replace('\n', &format!("\n{prefix}"));
    }
    Ok(text)
}
