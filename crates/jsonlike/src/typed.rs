use serde_json::Value;

use crate::json::Json;

/// A string extraction result; `value` is `""` unless `is_valid`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Str<'a> {
    pub value: &'a str,
    pub is_valid: bool,
}

/// A boolean extraction result; `value` is `false` unless `is_valid`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bool {
    pub value: bool,
    pub is_valid: bool,
}

/// A 32-bit integer extraction result; `value` is `0` unless `is_valid`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Int {
    pub value: i32,
    pub is_valid: bool,
}

/// A 64-bit integer extraction result; `value` is `0` unless `is_valid`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Int64 {
    pub value: i64,
    pub is_valid: bool,
}

/// A floating point extraction result; `value` is `0.0` unless `is_valid`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Float64 {
    pub value: f64,
    pub is_valid: bool,
}

/// A view of a JSON array, or the lack of one.
///
/// Produced by [`Json::as_array`]. `is_valid` is `false` when the navigated
/// value is absent, null, or not an array; iteration over an invalid view
/// yields nothing, so callers never need to check before iterating.
#[derive(Debug, Clone, Copy, Default)]
pub struct Arr<'a> {
    elements: Option<&'a [Value]>,
    pub is_valid: bool,
}

impl<'a> Arr<'a> {
    pub(crate) const fn valid(elements: &'a [Value]) -> Arr<'a> {
        Arr {
            elements: Some(elements),
            is_valid: true,
        }
    }

    /// The number of elements; `0` for an invalid view.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.map_or(0, <[Value]>::len)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over the elements as existing [`Json`] views.
    ///
    /// Null elements are *present* views (`is_null`, not `is_undefined`).
    pub fn iter(&self) -> impl Iterator<Item = Json<'a>> + 'a {
        self.elements.unwrap_or_default().iter().map(Json::new)
    }

    /// The elements as existing [`Json`] views.
    ///
    /// Always returns a sequence; empty for an invalid or empty view.
    #[must_use]
    pub fn values(&self) -> Vec<Json<'a>> {
        self.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{Bool, Float64, Int, Int64, Str};

    #[test]
    fn invalid_results_carry_zero_defaults() {
        assert_eq!(
            Str::default(),
            Str {
                value: "",
                is_valid: false
            }
        );
        assert_eq!(
            Bool::default(),
            Bool {
                value: false,
                is_valid: false
            }
        );
        assert_eq!(
            Int::default(),
            Int {
                value: 0,
                is_valid: false
            }
        );
        assert_eq!(
            Int64::default(),
            Int64 {
                value: 0,
                is_valid: false
            }
        );
        let float = Float64::default();
        assert!(!float.is_valid);
        assert!(float.value == 0.0);
    }
}
