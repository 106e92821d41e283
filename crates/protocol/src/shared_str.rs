use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A reference-counted, immutable string.
///
/// Technician names and work-order labels are cloned into every render
/// pass; wrapping `Arc<str>` keeps those clones to a refcount bump.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SharedStr(Arc<str>);

impl SharedStr {
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for SharedStr {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for SharedStr {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

impl std::ops::Deref for SharedStr {
    type Target = str;

    #[inline]
    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for SharedStr {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SharedStr {
    #[inline]
    fn from(s: &str) -> Self {
        SharedStr(Arc::from(s))
    }
}

impl From<String> for SharedStr {
    #[inline]
    fn from(s: String) -> Self {
        SharedStr(Arc::from(s))
    }
}

impl std::fmt::Display for SharedStr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

// Hand-rolled so serde's `rc` feature stays off.

impl Serialize for SharedStr {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for SharedStr {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(SharedStr::from(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_compare_equal() {
        let a = SharedStr::from("Dana Whitfield");
        let b = a.clone();
        assert_eq!(a, b);
        assert_eq!(a, "Dana Whitfield");
    }

    #[test]
    fn serde_as_plain_string() {
        let s = SharedStr::from("Furnace inspection");
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(json, "\"Furnace inspection\"");
        let back: SharedStr =
            serde_json::from_str(&json).unwrap();
        assert_eq!(back, "Furnace inspection");
    }

    #[test]
    fn deserializes_escaped_strings() {
        // Escapes force an owned buffer; a borrowed `&str` would fail here.
        let back: SharedStr =
            serde_json::from_str("\"Replace \\\"A\\\" filter\"").unwrap();
        assert_eq!(back, "Replace \"A\" filter");
    }

    #[test]
    fn display() {
        let s = SharedStr::from("Bay 3");
        assert_eq!(format!("[{s}]"), "[Bay 3]");
    }
}
