//! CSV type conversions for record-core field values.
//!
//! This crate provides bidirectional conversions between record-core's
//! `FieldValue` and the strings stored in CSV cells.
//!
//! # Modules
//!
//! - [`forward`] - FieldValue → CSV string conversion
//! - [`reverse`] - CSV string → FieldValue conversion
//!
//! # Example
//!
//! ```
//! use csv_types::{csv_string_to_field_value, CsvValue};
//! use record_core::{FieldType, FieldValue};
//!
//! // Forward: FieldValue → CSV string
//! let csv_val: CsvValue = FieldValue::Int32(42).into();
//! assert_eq!(csv_val.as_str(), "42");
//!
//! // Reverse: CSV string → FieldValue
//! let parsed = csv_string_to_field_value("42", &FieldType::Int32).unwrap();
//! assert_eq!(parsed, FieldValue::Int32(42));
//! ```

pub mod forward;
pub mod reverse;

pub use forward::{field_values_to_csv_row, CsvValue};
pub use reverse::{csv_string_to_field_value, CsvParseError};
