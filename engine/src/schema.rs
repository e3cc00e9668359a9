//! Schema definition and validation.
//!
//! A [`CollectionSchema`] is the explicit field contract of one collection.
//! Payloads are checked against it before they reach the store, so unknown
//! fields, missing required fields and wrong types never get stored.

use crate::{error::Result, Error, Fields};
use serde_json::Value;

/// Name reserved for the store-assigned identifier.
pub const ID_FIELD: &str = "id";

/// JSON type a field must hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    String,
    /// Any JSON number; integers are accepted
    Float,
    Bool,
}

impl FieldType {
    fn accepts(self, value: &Value) -> bool {
        match self {
            FieldType::String => value.is_string(),
            FieldType::Float => value.is_number(),
            FieldType::Bool => value.is_boolean(),
        }
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            FieldType::String => "string",
            FieldType::Float => "number",
            FieldType::Bool => "boolean",
        };
        f.write_str(name)
    }
}

/// One named field of a collection and whether it must be present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDef {
    pub name: String,
    pub field_type: FieldType,
    pub required: bool,
}

impl FieldDef {
    pub fn required(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            required: true,
        }
    }

    pub fn optional(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            required: false,
        }
    }

    /// Check the value supplied for this field, if any.
    ///
    /// `null` counts as absent.
    pub fn validate(&self, value: Option<&Value>) -> Result<()> {
        let value = match value {
            Some(Value::Null) | None if self.required => {
                return Err(Error::MissingRequiredField(self.name.clone()))
            }
            Some(Value::Null) | None => return Ok(()),
            Some(value) => value,
        };

        if self.field_type.accepts(value) {
            return Ok(());
        }

        Err(Error::TypeMismatch {
            field: self.name.clone(),
            expected: self.field_type.to_string(),
            got: json_kind(value).to_string(),
        })
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Schema for a collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionSchema {
    /// Collection name
    pub name: String,
    /// Field definitions
    pub fields: Vec<FieldDef>,
}

impl CollectionSchema {
    /// Create a new collection schema.
    pub fn new(name: impl Into<String>, fields: Vec<FieldDef>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    /// The to-do list: a required `name` and an optional `done` flag.
    pub fn tasks() -> Self {
        Self::new(
            "tasks",
            vec![
                FieldDef::required("name", FieldType::String),
                FieldDef::optional("done", FieldType::Bool),
            ],
        )
    }

    /// The product catalog: `name` and `price` are required, `category` is not.
    pub fn products() -> Self {
        Self::new(
            "products",
            vec![
                FieldDef::required("name", FieldType::String),
                FieldDef::required("price", FieldType::Float),
                FieldDef::optional("category", FieldType::String),
            ],
        )
    }

    /// Get a field definition by name.
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Validate a complete payload, as sent to create or a full update.
    ///
    /// Returns the payload as a field map ready to be stored.
    pub fn validate_payload(&self, payload: Value) -> Result<Fields> {
        let fields = self.check_shape(payload)?;

        for field in &self.fields {
            field.validate(fields.get(&field.name))?;
        }

        Ok(strip_nulls(fields))
    }

    /// Validate a partial payload, as sent to a patch.
    ///
    /// Omitted fields are fine; supplied ones must be well-typed, and a
    /// required field cannot be cleared with `null`. Nulls on optional
    /// fields are kept so the merge can clear them.
    pub fn validate_patch(&self, payload: Value) -> Result<Fields> {
        let fields = self.check_shape(payload)?;

        for (name, value) in &fields {
            // check_shape guarantees the definition exists
            if let Some(def) = self.field(name) {
                def.validate(Some(value))?;
            }
        }

        Ok(fields)
    }

    /// Common structural checks: object, non-empty, no `id`, no unknown fields.
    fn check_shape(&self, payload: Value) -> Result<Fields> {
        let fields = match payload {
            Value::Object(map) => map,
            other => {
                return Err(Error::InvalidPayload(format!(
                    "payload must be an object, got {}",
                    json_kind(&other)
                )))
            }
        };

        if fields.is_empty() {
            return Err(Error::InvalidPayload("payload must not be empty".into()));
        }

        if fields.contains_key(ID_FIELD) {
            return Err(Error::InvalidPayload(
                "'id' is assigned by the store and cannot be set".into(),
            ));
        }

        if let Some(unknown) = fields.keys().find(|name| self.field(name).is_none()) {
            return Err(Error::UnknownField(unknown.clone()));
        }

        Ok(fields)
    }
}

fn strip_nulls(mut fields: Fields) -> Fields {
    fields.retain(|_, value| !value.is_null());
    fields
}
