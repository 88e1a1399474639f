//! Record schema definitions.
//!
//! A [`RecordSchema`] replaces runtime reflection: it lists, in order, the
//! fields a record type exposes and the type each one is parsed into.
//! Several schemas can be declared together in a YAML file and loaded as a
//! [`SchemaSet`].
//!
//! ```yaml
//! records:
//!   - name: Item
//!     fields:
//!       - name: name
//!         type: text
//!       - name: damage
//!         type: int
//!       - name: rarity
//!         type:
//!           type: enum
//!           values: [common, rare, epic]
//! ```

use crate::types::FieldType;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

// ============================================================================
// Error Types
// ============================================================================

/// Error type for schema operations.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// Error reading schema file
    #[error("Failed to read schema file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// Record type not found in schema set
    #[error("Record type not found: {0}")]
    RecordTypeNotFound(String),

    /// Field not found in record schema
    #[error("Field '{field}' not found in record type '{record_type}'")]
    FieldNotFound { record_type: String, field: String },

    /// Two fields share a name
    #[error("Field '{field}' is declared more than once in record type '{record_type}'")]
    DuplicateField { record_type: String, field: String },

    /// Value does not fit the declared field type
    #[error("Field '{field}' expects {expected}, found {found}")]
    TypeMismatch {
        field: String,
        expected: String,
        found: String,
    },
}

// ============================================================================
// Record Schemas
// ============================================================================

/// A single field of a record type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldDefinition {
    /// Field name, matched against CSV header cells
    pub name: String,

    /// Declared type
    #[serde(rename = "type")]
    pub field_type: FieldType,
}

impl FieldDefinition {
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
        }
    }
}

/// Ordered field list of one record type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecordSchema {
    /// Record type name (used to find assets of this type)
    pub name: String,

    /// Fields in export order
    pub fields: Vec<FieldDefinition>,
}

impl RecordSchema {
    /// Create a schema, rejecting duplicate field names.
    pub fn new(
        name: impl Into<String>,
        fields: Vec<FieldDefinition>,
    ) -> Result<Self, SchemaError> {
        let schema = Self {
            name: name.into(),
            fields,
        };
        schema.validate()?;
        Ok(schema)
    }

    fn validate(&self) -> Result<(), SchemaError> {
        let mut seen = HashSet::new();
        for field in &self.fields {
            if !seen.insert(field.name.as_str()) {
                return Err(SchemaError::DuplicateField {
                    record_type: self.name.clone(),
                    field: field.name.clone(),
                });
            }
        }
        Ok(())
    }

    /// Position of a field in the schema.
    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    /// Get a field by name.
    pub fn get_field(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Get the declared type of a field by name.
    pub fn get_field_type(&self, name: &str) -> Option<&FieldType> {
        self.get_field(name).map(|f| &f.field_type)
    }

    /// All field names, in order.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }
}

// ============================================================================
// Schema Sets (YAML)
// ============================================================================

/// A collection of record schemas loaded from YAML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SchemaSet {
    /// Record type definitions
    pub records: Vec<RecordSchema>,

    /// Cached lookup (not serialized)
    #[serde(skip)]
    record_map: HashMap<String, usize>,
}

impl SchemaSet {
    /// Load a schema set from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SchemaError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse a schema set from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, SchemaError> {
        let mut set: SchemaSet = serde_yaml::from_str(yaml)?;
        set.build_record_map()?;
        Ok(set)
    }

    fn build_record_map(&mut self) -> Result<(), SchemaError> {
        for record in &self.records {
            record.validate()?;
        }
        self.record_map = self
            .records
            .iter()
            .enumerate()
            .map(|(idx, record)| (record.name.clone(), idx))
            .collect();
        Ok(())
    }

    /// Get a record schema by type name.
    pub fn get(&self, name: &str) -> Option<&RecordSchema> {
        self.record_map
            .get(name)
            .and_then(|&idx| self.records.get(idx))
    }

    /// Get a record schema by type name, failing if it is not declared.
    pub fn require(&self, name: &str) -> Result<&RecordSchema, SchemaError> {
        self.get(name)
            .ok_or_else(|| SchemaError::RecordTypeNotFound(name.to_string()))
    }

    /// All declared record type names.
    pub fn record_names(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.name.as_str()).collect()
    }
}
