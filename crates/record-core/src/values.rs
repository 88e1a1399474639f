//! Field values and their JSON representation.

use crate::schema::SchemaError;
use crate::types::FieldType;
use serde_json::Value as JsonValue;

/// A single field value.
///
/// `Null` is valid for every type. The remaining variants correspond
/// one-to-one with [`FieldType`] variants.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Null,
    Bool(bool),
    Int32(i32),
    Int64(i64),
    Float32(f32),
    Float64(f64),
    Text(String),
    /// Canonical enum value name
    Enum(String),
    /// Asset path of the referenced asset
    AssetRef(String),
}

impl FieldValue {
    /// Value a freshly created record holds for a field of this type.
    ///
    /// Value types get their zero value (the first variant for enums);
    /// text and asset references start out null.
    pub fn default_for(field_type: &FieldType) -> Self {
        match field_type {
            FieldType::Bool => FieldValue::Bool(false),
            FieldType::Int32 => FieldValue::Int32(0),
            FieldType::Int64 => FieldValue::Int64(0),
            FieldType::Float32 => FieldValue::Float32(0.0),
            FieldType::Float64 => FieldValue::Float64(0.0),
            FieldType::Enum { values } => values
                .first()
                .map(|v| FieldValue::Enum(v.clone()))
                .unwrap_or(FieldValue::Null),
            FieldType::Text | FieldType::AssetRef { .. } => FieldValue::Null,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Whether this value may be stored in a field of the given type.
    pub fn matches_type(&self, field_type: &FieldType) -> bool {
        match (self, field_type) {
            (FieldValue::Null, _) => true,
            (FieldValue::Bool(_), FieldType::Bool) => true,
            (FieldValue::Int32(_), FieldType::Int32) => true,
            (FieldValue::Int64(_), FieldType::Int64) => true,
            (FieldValue::Float32(_), FieldType::Float32) => true,
            (FieldValue::Float64(_), FieldType::Float64) => true,
            (FieldValue::Text(_), FieldType::Text) => true,
            (FieldValue::Enum(v), FieldType::Enum { values }) => values.contains(v),
            (FieldValue::AssetRef(_), FieldType::AssetRef { .. }) => true,
            _ => false,
        }
    }

    /// Name of the variant, for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            FieldValue::Null => "null",
            FieldValue::Bool(_) => "bool",
            FieldValue::Int32(_) => "int",
            FieldValue::Int64(_) => "big_int",
            FieldValue::Float32(_) => "float",
            FieldValue::Float64(_) => "double",
            FieldValue::Text(_) => "text",
            FieldValue::Enum(_) => "enum",
            FieldValue::AssetRef(_) => "asset_ref",
        }
    }

    /// Convert to the JSON form used in asset files.
    pub fn to_json(&self) -> JsonValue {
        match self {
            FieldValue::Null => JsonValue::Null,
            FieldValue::Bool(b) => JsonValue::Bool(*b),
            FieldValue::Int32(i) => serde_json::json!(*i),
            FieldValue::Int64(i) => serde_json::json!(*i),
            FieldValue::Float32(f) => serde_json::json!(*f),
            FieldValue::Float64(f) => serde_json::json!(*f),
            FieldValue::Text(s) | FieldValue::Enum(s) | FieldValue::AssetRef(s) => {
                JsonValue::String(s.clone())
            }
        }
    }

    /// Read a JSON value back according to the declared field type.
    pub fn from_json(
        field: &str,
        value: &JsonValue,
        field_type: &FieldType,
    ) -> Result<Self, SchemaError> {
        if value.is_null() {
            return Ok(FieldValue::Null);
        }

        let mismatch = || SchemaError::TypeMismatch {
            field: field.to_string(),
            expected: field_type.to_string(),
            found: value.to_string(),
        };

        let converted = match field_type {
            FieldType::Bool => value.as_bool().map(FieldValue::Bool),
            FieldType::Int32 => value
                .as_i64()
                .and_then(|i| i32::try_from(i).ok())
                .map(FieldValue::Int32),
            FieldType::Int64 => value.as_i64().map(FieldValue::Int64),
            FieldType::Float32 => value.as_f64().map(|f| FieldValue::Float32(f as f32)),
            FieldType::Float64 => value.as_f64().map(FieldValue::Float64),
            FieldType::Text => value.as_str().map(|s| FieldValue::Text(s.to_string())),
            FieldType::Enum { values } => value
                .as_str()
                .filter(|s| values.iter().any(|v| v == s))
                .map(|s| FieldValue::Enum(s.to_string())),
            FieldType::AssetRef { .. } => {
                value.as_str().map(|s| FieldValue::AssetRef(s.to_string()))
            }
        };

        converted.ok_or_else(mismatch)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Int32(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Int64(value)
    }
}

impl From<f32> for FieldValue {
    fn from(value: f32) -> Self {
        FieldValue::Float32(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float64(value)
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(FieldValue::Null)
    }
}
