//! Core types for csv-utility records.
//!
//! A record type is described by an explicit [`RecordSchema`]: an ordered
//! list of field names and [`FieldType`]s. Values travel as [`FieldValue`]s,
//! and anything that can hand out and accept field values by name implements
//! [`Record`].
//!
//! ```text
//! record-core (this crate)
//!    │
//!    ├─── csv-types     (FieldValue <-> CSV string)
//!    ├─── editor-host   (stores records as JSON assets)
//!    └─── asset-csv     (export/import between assets and CSV)
//! ```
//!
//! # Example
//!
//! ```rust
//! use record_core::{DynamicRecord, FieldValue, Record, SchemaSet};
//! use std::sync::Arc;
//!
//! let schemas = SchemaSet::from_yaml(r#"
//! records:
//!   - name: Item
//!     fields:
//!       - name: name
//!         type: text
//!       - name: damage
//!         type: int
//! "#).unwrap();
//!
//! let schema = Arc::new(schemas.get("Item").unwrap().clone());
//! let mut item = DynamicRecord::new(schema);
//! item.set_field("damage", FieldValue::Int32(12)).unwrap();
//! assert_eq!(item.get_field("damage"), Some(FieldValue::Int32(12)));
//! ```

pub mod record;
pub mod schema;
pub mod types;
pub mod values;

pub use record::{DynamicRecord, Record};
pub use schema::{FieldDefinition, RecordSchema, SchemaError, SchemaSet};
pub use types::FieldType;
pub use values::FieldValue;
