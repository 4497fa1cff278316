//! Lead record types
//!
//! A lead is a typed identifier plus an open set of payload fields.
//! Records are stored flat, e.g. `{"id": 1, "name": "Acme", "stage": "new"}`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Identifier of a lead.
///
/// Integers and strings are distinct: `1` never equals `"1"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LeadId {
    Number(i64),
    Text(String),
}

impl fmt::Display for LeadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LeadId::Number(n) => write!(f, "{}", n),
            LeadId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl LeadId {
    /// Interpret user or URL input: integers become `Number`, anything
    /// else `Text`.
    pub fn from_input(s: &str) -> Self {
        match s.parse::<i64>() {
            Ok(n) => LeadId::Number(n),
            Err(_) => LeadId::Text(s.to_string()),
        }
    }
}

impl FromStr for LeadId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_input(s))
    }
}

impl From<i64> for LeadId {
    fn from(n: i64) -> Self {
        LeadId::Number(n)
    }
}

impl From<i32> for LeadId {
    fn from(n: i32) -> Self {
        LeadId::Number(n as i64)
    }
}

impl From<u32> for LeadId {
    fn from(n: u32) -> Self {
        LeadId::Number(n as i64)
    }
}

impl From<String> for LeadId {
    fn from(s: String) -> Self {
        LeadId::Text(s)
    }
}

impl From<&str> for LeadId {
    fn from(s: &str) -> Self {
        LeadId::Text(s.to_string())
    }
}

/// A customer-prospect record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    /// Identifying field, required at the serialization boundary
    pub id: LeadId,
    /// Opaque payload; never contains an `id` key
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Lead {
    /// Create a lead with no payload fields
    pub fn new(id: impl Into<LeadId>) -> Self {
        Self {
            id: id.into(),
            fields: Map::new(),
        }
    }

    /// Builder-style field setter
    pub fn field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    /// Set a payload field. Setting `id` is ignored; the identifier is
    /// only changed through [`Lead::id`].
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        if key == "id" {
            return;
        }
        self.fields.insert(key, value.into());
    }

    /// Get a payload field
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Get a payload field as a string slice
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// Shallow merge: every field present in `update` overwrites the
    /// field of the same name here; other fields are preserved.
    pub fn merge(&mut self, update: Lead) {
        for (key, value) in update.fields {
            self.fields.insert(key, value);
        }
    }

    /// Validate and convert an arbitrary JSON value into a lead
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    /// Convert into the flat JSON object form
    pub fn to_value(&self) -> Value {
        let mut object = self.fields.clone();
        let id = match &self.id {
            LeadId::Number(n) => Value::from(*n),
            LeadId::Text(s) => Value::from(s.as_str()),
        };
        object.insert("id".to_string(), id);
        Value::Object(object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_lead_builder() {
        let lead = Lead::new(1).field("name", "Acme").field("score", 42);

        assert_eq!(lead.id, LeadId::Number(1));
        assert_eq!(lead.get_str("name"), Some("Acme"));
        assert_eq!(lead.get("score"), Some(&json!(42)));
        assert_eq!(lead.get("missing"), None);
    }

    #[test]
    fn test_set_id_is_ignored() {
        let lead = Lead::new(1).field("id", 99);
        assert_eq!(lead.id, LeadId::Number(1));
        assert!(lead.fields.is_empty());
    }

    #[test]
    fn test_lead_serializes_flat() {
        let lead = Lead::new(7).field("name", "B");
        let value = serde_json::to_value(&lead).unwrap();
        assert_eq!(value, json!({"id": 7, "name": "B"}));
        assert_eq!(lead.to_value(), value);
    }

    #[test]
    fn test_lead_from_value() {
        let lead = Lead::from_value(json!({"id": "abc", "email": "a@b.c", "tags": ["x"]})).unwrap();
        assert_eq!(lead.id, LeadId::Text("abc".to_string()));
        assert_eq!(lead.get_str("email"), Some("a@b.c"));
        assert_eq!(lead.get("tags"), Some(&json!(["x"])));
        assert!(lead.get("id").is_none());
    }

    #[test]
    fn test_lead_requires_id() {
        assert!(Lead::from_value(json!({"name": "no id"})).is_err());
        assert!(Lead::from_value(json!({"id": 1.5})).is_err());
        assert!(Lead::from_value(json!({"id": null})).is_err());
    }

    #[test]
    fn test_merge_overwrites_and_preserves() {
        let mut lead = Lead::new(1).field("name", "A").field("city", "Oslo");
        lead.merge(Lead::new(1).field("name", "A2").field("phone", "555"));

        assert_eq!(lead.get_str("name"), Some("A2"));
        assert_eq!(lead.get_str("city"), Some("Oslo"));
        assert_eq!(lead.get_str("phone"), Some("555"));
    }

    #[test]
    fn test_lead_id_strict_equality() {
        assert_ne!(LeadId::from(1), LeadId::from("1"));
        assert_eq!("1".parse::<LeadId>().unwrap(), LeadId::Number(1));
        assert_eq!(LeadId::from_input("c-1"), LeadId::Text("c-1".to_string()));
        assert_eq!(LeadId::from_input("-3"), LeadId::Number(-3));
        assert_eq!(LeadId::from("c-1").to_string(), "c-1");
    }
}
