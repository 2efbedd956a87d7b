//! Newtype IDs for type-safe identifiers.
//!
//! Catalog entries are keyed by small integers; wrapping them keeps a
//! product id from being confused with a quantity or an index.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unique identifier of a catalog product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u32);

impl ProductId {
    /// Create a new ID.
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw value.
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Parse the id segment of a `/product/:id` route.
    ///
    /// Anything that is not a plain decimal number yields `None`, which the
    /// detail view renders as "not found".
    pub fn from_route(segment: &str) -> Option<Self> {
        segment.trim().parse().ok()
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl FromStr for ProductId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u32>().map(Self)
    }
}

/// Identifier of a shopping session, used to correlate log entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(String);

impl SessionId {
    /// Create a new session ID from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a new random session ID.
    pub fn generate() -> Self {
        use rand::Rng;

        let bytes: [u8; 8] = rand::thread_rng().gen();
        let hex: String = bytes.iter().map(|b| format!("{:02x}", b)).collect();
        Self(format!("sess_{}", hex))
    }

    /// Get the session ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_from_route() {
        assert_eq!(ProductId::from_route("7"), Some(ProductId::new(7)));
        assert_eq!(ProductId::from_route(" 12 "), Some(ProductId::new(12)));
        assert_eq!(ProductId::from_route("abc"), None);
        assert_eq!(ProductId::from_route(""), None);
        assert_eq!(ProductId::from_route("-1"), None);
    }

    #[test]
    fn test_id_display() {
        assert_eq!(format!("{}", ProductId::new(42)), "42");
    }

    #[test]
    fn test_id_serde_transparent() {
        let id: ProductId = serde_json::from_str("3").unwrap();
        assert_eq!(id.get(), 3);
        assert_eq!(serde_json::to_string(&id).unwrap(), "3");
    }

    #[test]
    fn test_session_id_generation() {
        let a = SessionId::generate();
        let b = SessionId::generate();
        assert!(a.as_str().starts_with("sess_"));
        assert_eq!(a.as_str().len(), "sess_".len() + 16);
        assert_ne!(a, b);
    }
}
