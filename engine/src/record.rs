//! Record types for storing data.

use crate::{Fields, RecordId};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A data record in the store.
///
/// Serializes as a flat JSON object, with `id` alongside the domain fields:
/// `{"id": 1, "name": "Buy milk"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Store-assigned identifier, immutable once assigned
    pub id: RecordId,
    /// Domain fields (everything except `id`)
    #[serde(flatten)]
    pub fields: Fields,
}

impl Record {
    /// Create a new record.
    pub fn new(id: RecordId, fields: Fields) -> Self {
        Self { id, fields }
    }

    /// Get a field value by name.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Get a string field.
    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(Value::as_str)
    }

    /// Get a numeric field as `f64`.
    pub fn get_f64(&self, field: &str) -> Option<f64> {
        self.get(field).and_then(Value::as_f64)
    }

    /// Replace every domain field. The id is untouched.
    pub fn replace_fields(&mut self, fields: Fields) {
        self.fields = fields;
    }

    /// Overlay `fields` onto the existing ones. A `null` clears the field.
    pub fn merge_fields(&mut self, fields: Fields) {
        for (name, value) in fields {
            if value.is_null() {
                self.fields.remove(&name);
            } else {
                self.fields.insert(name, value);
            }
        }
    }
}
