//! Location — an opaque JSON document supplied by a client.
//!
//! No field is required and nothing inside the document is interpreted. The
//! only invariant is that the bytes form exactly one syntactically valid JSON
//! value; those bytes are kept verbatim from intake to listing.

use std::fmt;

use serde::{Serialize, Serializer};
use serde_json::value::RawValue;

use crate::error::ValidationError;

/// A stored location document.
#[derive(Clone)]
pub struct Location(Box<RawValue>);

impl Location {
    /// Accept a client payload if it is a single valid JSON value.
    ///
    /// Whitespace around the value is dropped; the value itself is kept
    /// byte-for-byte.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidJson`] for empty input, malformed
    /// JSON, or trailing data after the value.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, ValidationError> {
        let raw: Box<RawValue> = serde_json::from_slice(bytes)?;
        Ok(Self(raw))
    }

    /// The document text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.get()
    }

    /// The document bytes, as written to the store.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.as_str().as_bytes()
    }
}

impl PartialEq for Location {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for Location {}

impl fmt::Debug for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Location").field(&self.as_str()).finish()
    }
}

impl Serialize for Location {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_keep_document_bytes_verbatim() {
        let body = br#"{"lng": 2,   "lat":1.50}"#;
        let location = Location::from_slice(body).unwrap();
        assert_eq!(location.as_bytes(), body);
    }

    #[test]
    fn should_drop_surrounding_whitespace() {
        let location = Location::from_slice(b"\n  {\"lat\":1}  \r\n").unwrap();
        assert_eq!(location.as_str(), r#"{"lat":1}"#);
    }

    #[test]
    fn should_accept_any_json_shape() {
        for body in ["42", "\"north\"", "null", "[1,2,3]", "{}"] {
            assert!(Location::from_slice(body.as_bytes()).is_ok(), "{body}");
        }
    }

    #[test]
    fn should_reject_non_json() {
        let result = Location::from_slice(b"not json");
        assert!(matches!(result, Err(ValidationError::InvalidJson(_))));
    }

    #[test]
    fn should_reject_empty_body() {
        assert!(Location::from_slice(b"").is_err());
    }

    #[test]
    fn should_reject_trailing_data() {
        assert!(Location::from_slice(br#"{"lat":1} {"lat":2}"#).is_err());
    }

    #[test]
    fn should_serialize_as_raw_json_inside_array() {
        let locations = vec![
            Location::from_slice(br#"{"lat":1,"lng":2}"#).unwrap(),
            Location::from_slice(b"[true, null]").unwrap(),
        ];
        let json = serde_json::to_string(&locations).unwrap();
        assert_eq!(json, r#"[{"lat":1,"lng":2},[true, null]]"#);
    }

    #[test]
    fn should_compare_by_document_text() {
        let a = Location::from_slice(b"{\"a\":1}").unwrap();
        let b = Location::from_slice(b" {\"a\":1}").unwrap();
        let c = Location::from_slice(b"{\"a\": 1}").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
