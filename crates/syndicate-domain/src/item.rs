//! Item module - the opaque identifier mined by the engine

use std::borrow::Borrow;
use std::fmt;

/// An opaque item identifier
///
/// Items carry no payload beyond identity. Equality and ordering are by
/// identifier value, which gives the miner a stable total order to enumerate
/// candidates in.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Item(String);

impl Item {
    /// Create an item from an already-canonical identifier
    ///
    /// Returns `None` when the identifier is blank after trimming.
    ///
    /// # Examples
    ///
    /// ```
    /// use syndicate_domain::Item;
    ///
    /// let item = Item::parse("Sequoia").unwrap();
    /// assert_eq!(item.as_str(), "Sequoia");
    /// assert!(Item::parse("   ").is_none());
    /// ```
    pub fn parse(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return None;
        }
        Some(Self(value))
    }

    /// Get the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the item and return the identifier
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for Item {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Item {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rejects_blank() {
        assert!(Item::parse("").is_none());
        assert!(Item::parse(" \t ").is_none());
    }

    #[test]
    fn test_ordering_by_value() {
        let a = Item::parse("Accel").unwrap();
        let b = Item::parse("Blume").unwrap();
        assert!(a < b);
        assert_eq!(a, Item::parse("Accel").unwrap());
    }

    #[test]
    fn test_display() {
        let item = Item::parse("Kalaari Capital").unwrap();
        assert_eq!(item.to_string(), "Kalaari Capital");
    }
}
