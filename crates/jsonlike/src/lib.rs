//! # jsonlike
//!
//! Safe, panic-free navigation and typed extraction of values from
//! dynamically-shaped JSON.
//!
//! Decode once into a [`Document`], then chain [`Json`] views through any
//! shape without checking intermediate steps: every navigation degrades to
//! a well-defined absent view instead of failing, and every typed getter
//! reports validity alongside a zero default.
//!
//! ```
//! use jsonlike::Document;
//!
//! let document: Document = r#"{
//!     "user": {"name": "kira", "score": 4.5, "email": null},
//!     "tags": ["a", "b"]
//! }"#
//! .parse()?;
//!
//! assert_eq!(document.get("user").get("name").as_str().value, "kira");
//! assert_eq!(document.get("user").get("score").as_int().value, 4);
//!
//! // Absent, null, and present are three distinct states.
//! assert!(document.get("user").get("email").is_null());
//! assert!(document.get("user").get("phone").is_undefined());
//!
//! // Wrong shapes degrade instead of panicking.
//! assert!(document.get("tags").get("nope").index(9).is_undefined());
//! for tag in document.get("tags").as_array().iter() {
//!     assert!(tag.as_str().is_valid);
//! }
//! # Ok::<(), jsonlike::Error>(())
//! ```
mod document;
mod error;
mod json;
mod map;
mod typed;

pub use document::Document;
pub use error::Error;
pub use json::Json;
pub use map::Map;
pub use typed::{Arr, Bool, Float64, Int, Int64, Str};
