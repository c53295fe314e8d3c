use std::fmt;

/// An error raised at one of the crate's boundary crossings.
///
/// Structural absence (a missing key, an out-of-range index, a lookup
/// through a non-container value) is never an error. Only decoding
/// malformed input, encoding a non-serializable in-memory value, and a
/// strict [`unmarshal`](crate::Json::unmarshal) can fail.
#[derive(Debug)]
pub enum Error {
    /// Input could not be decoded as JSON.
    Decode(serde_json::Error),
    /// A value could not be encoded as JSON.
    Encode(serde_json::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Decode(error) => write!(f, "failed to decode JSON: {error}"),
            Error::Encode(error) => write!(f, "failed to encode JSON: {error}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Decode(error) | Error::Encode(error) => Some(error),
        }
    }
}
