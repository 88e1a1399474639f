//! The field accessor trait and its schema-driven implementation.

use crate::schema::{RecordSchema, SchemaError};
use crate::values::FieldValue;
use serde_json::{Map, Value as JsonValue};
use std::sync::Arc;

/// Named field access for a record.
///
/// Export reads every schema field through [`Record::get_field`]; import
/// writes each matching CSV column through [`Record::set_field`].
pub trait Record {
    /// Schema describing this record's fields.
    fn schema(&self) -> &RecordSchema;

    /// Current value of a field, or `None` if the schema has no such field.
    fn get_field(&self, name: &str) -> Option<FieldValue>;

    /// Assign a field. Fails if the field is unknown or the value does not
    /// fit its declared type.
    fn set_field(&mut self, name: &str, value: FieldValue) -> Result<(), SchemaError>;
}

/// A record whose layout is entirely described by a [`RecordSchema`].
#[derive(Debug, Clone, PartialEq)]
pub struct DynamicRecord {
    schema: Arc<RecordSchema>,
    values: Vec<FieldValue>,
}

impl DynamicRecord {
    /// Create a record holding every field's default value.
    pub fn new(schema: Arc<RecordSchema>) -> Self {
        let values = schema
            .fields
            .iter()
            .map(|f| FieldValue::default_for(&f.field_type))
            .collect();
        Self { schema, values }
    }

    /// Build a record from the JSON field map of a stored asset.
    ///
    /// Fields missing from the map keep their default; keys that the schema
    /// does not declare are ignored.
    pub fn from_json_fields(
        schema: Arc<RecordSchema>,
        fields: &Map<String, JsonValue>,
    ) -> Result<Self, SchemaError> {
        let mut record = Self::new(schema);
        for (idx, field) in record.schema.fields.iter().enumerate() {
            if let Some(json) = fields.get(&field.name) {
                record.values[idx] = FieldValue::from_json(&field.name, json, &field.field_type)?;
            }
        }
        Ok(record)
    }

    /// JSON field map for storing this record as an asset.
    pub fn to_json_fields(&self) -> Map<String, JsonValue> {
        self.schema
            .fields
            .iter()
            .zip(&self.values)
            .map(|(field, value)| (field.name.clone(), value.to_json()))
            .collect()
    }
}

impl Record for DynamicRecord {
    fn schema(&self) -> &RecordSchema {
        &self.schema
    }

    fn get_field(&self, name: &str) -> Option<FieldValue> {
        self.schema
            .field_index(name)
            .map(|idx| self.values[idx].clone())
    }

    fn set_field(&mut self, name: &str, value: FieldValue) -> Result<(), SchemaError> {
        let idx = self
            .schema
            .field_index(name)
            .ok_or_else(|| SchemaError::FieldNotFound {
                record_type: self.schema.name.clone(),
                field: name.to_string(),
            })?;

        let field_type = &self.schema.fields[idx].field_type;
        if !value.matches_type(field_type) {
            return Err(SchemaError::TypeMismatch {
                field: name.to_string(),
                expected: field_type.to_string(),
                found: value.kind().to_string(),
            });
        }

        self.values[idx] = value;
        Ok(())
    }
}
