//! Marker identifiers - tag the synthetic elements injected during learning

use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of the attribute that carries a [`MarkerId`] on a marker element
pub const MARKER_ATTRIBUTE: &str = "data-schemee-id";

/// Unique identifier for an annotation's marker element, based on UUIDv7
///
/// Rendered as 32 lowercase hex digits so it can be dropped into an
/// attribute value without escaping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct MarkerId(u128);

impl MarkerId {
    /// Generate a new UUIDv7-based MarkerId
    ///
    /// # Examples
    ///
    /// ```
    /// use schemee_domain::MarkerId;
    ///
    /// let id = MarkerId::new();
    /// assert!(id.value() > 0);
    /// ```
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7().as_u128())
    }

    /// Create a MarkerId from a raw u128 value
    pub fn from_value(value: u128) -> Self {
        Self(value)
    }

    /// Parse a MarkerId from its hex or hyphenated UUID form
    ///
    /// # Examples
    ///
    /// ```
    /// use schemee_domain::MarkerId;
    ///
    /// let id = MarkerId::new();
    /// let parsed = MarkerId::from_string(&id.to_string()).unwrap();
    /// assert_eq!(id, parsed);
    /// ```
    pub fn from_string(s: &str) -> Result<Self, String> {
        uuid::Uuid::parse_str(s)
            .map(|u| Self(u.as_u128()))
            .map_err(|e| format!("Invalid marker id: {}", e))
    }

    /// Get the raw u128 value
    pub fn value(&self) -> u128 {
        self.0
    }
}

impl Default for MarkerId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MarkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", uuid::Uuid::from_u128(self.0).simple())
    }
}

impl From<MarkerId> for String {
    fn from(id: MarkerId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for MarkerId {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_string(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_ids_are_unique() {
        let a = MarkerId::new();
        let b = MarkerId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn test_display_is_attribute_safe() {
        let id = MarkerId::new();
        let s = id.to_string();

        assert_eq!(s.len(), 32);
        assert!(s.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_invalid_string() {
        assert!(MarkerId::from_string("not-a-marker").is_err());
        assert!(MarkerId::from_string("").is_err());
    }

    #[test]
    fn test_serde_uses_string_form() {
        let id = MarkerId::from_value(0xabc);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"00000000000000000000000000000abc\"");

        let back: MarkerId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
