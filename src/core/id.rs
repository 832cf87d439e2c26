//! # CandidateId
//!
//! Opaque, stable key for a candidate location.
//!
//! Upstream APIs hand out numeric ids (`"id": 7`) or string ids
//! (`"id": "pharma-7"`). Both kinds are kept as given, so equality is
//! exact and the value serializes back unchanged.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Identifier of a candidate
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct CandidateId(IdRepr);

#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
enum IdRepr {
    Number(i64),
    Text(String),
}

impl CandidateId {
    /// Build an id from any string-like key
    pub fn new(key: impl Into<String>) -> Self {
        Self(IdRepr::Text(key.into()))
    }
}

impl From<i64> for CandidateId {
    fn from(n: i64) -> Self {
        Self(IdRepr::Number(n))
    }
}

impl From<&str> for CandidateId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for CandidateId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl std::fmt::Display for CandidateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.0 {
            IdRepr::Number(n) => write!(f, "{n}"),
            IdRepr::Text(s) => f.write_str(s),
        }
    }
}

impl Serialize for CandidateId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &self.0 {
            IdRepr::Number(n) => serializer.serialize_i64(*n),
            IdRepr::Text(s) => serializer.serialize_str(s),
        }
    }
}

impl<'de> Deserialize<'de> for CandidateId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(i64),
            Text(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Self::from(n),
            Raw::Text(s) => Self::new(s),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_and_text_differ() {
        assert_ne!(CandidateId::from(1), CandidateId::from("1"));
        assert_eq!(CandidateId::from(1).to_string(), "1");
        assert_eq!(CandidateId::from("1").to_string(), "1");
    }

    #[test]
    fn test_deserialize_number() {
        let id: CandidateId = serde_json::from_str("42").unwrap();
        assert_eq!(id, CandidateId::from(42));
    }

    #[test]
    fn test_deserialize_string() {
        let id: CandidateId = serde_json::from_str(r#""pharma-7""#).unwrap();
        assert_eq!(id, CandidateId::new("pharma-7"));
    }

    #[test]
    fn test_serialize_keeps_kind() {
        assert_eq!(serde_json::to_string(&CandidateId::from(3)).unwrap(), "3");
        assert_eq!(
            serde_json::to_string(&CandidateId::from("x")).unwrap(),
            r#""x""#
        );
    }
}
