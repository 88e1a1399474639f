//! Reverse conversion: CSV string → FieldValue.
//!
//! Empty cells become the field type's default value (see
//! [`FieldValue::default_for`]), so an empty numeric cell reads as `0` and an
//! empty text cell reads as null.

use record_core::{FieldType, FieldValue};

/// Error type for CSV parsing failures.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Failed to parse '{value}' as {expected_type}: {message}")]
pub struct CsvParseError {
    pub message: String,
    pub value: String,
    pub expected_type: String,
}

impl CsvParseError {
    fn new(message: impl Into<String>, value: &str, field_type: &FieldType) -> Self {
        Self {
            message: message.into(),
            value: value.to_string(),
            expected_type: field_type.to_string(),
        }
    }
}

/// Parse a CSV string value according to the declared field type.
///
/// This is the reverse of `CsvValue::from(FieldValue)`.
pub fn csv_string_to_field_value(
    value: &str,
    field_type: &FieldType,
) -> Result<FieldValue, CsvParseError> {
    if value.is_empty() {
        return Ok(FieldValue::default_for(field_type));
    }

    match field_type {
        // Boolean - lenient parsing
        FieldType::Bool => match value.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "t" | "y" => Ok(FieldValue::Bool(true)),
            "false" | "0" | "no" | "f" | "n" => Ok(FieldValue::Bool(false)),
            _ => Err(CsvParseError::new("Invalid boolean value", value, field_type)),
        },

        FieldType::Int32 => value
            .trim()
            .parse::<i32>()
            .map(FieldValue::Int32)
            .map_err(|e| CsvParseError::new(format!("Invalid integer: {e}"), value, field_type)),

        FieldType::Int64 => value
            .trim()
            .parse::<i64>()
            .map(FieldValue::Int64)
            .map_err(|e| CsvParseError::new(format!("Invalid big_int: {e}"), value, field_type)),

        // NaN and infinities have no JSON form, so they are rejected here
        FieldType::Float32 => match value.trim().parse::<f32>() {
            Ok(f) if f.is_finite() => Ok(FieldValue::Float32(f)),
            Ok(_) => Err(CsvParseError::new("Value is not a finite number", value, field_type)),
            Err(e) => Err(CsvParseError::new(format!("Invalid float: {e}"), value, field_type)),
        },

        FieldType::Float64 => match value.trim().parse::<f64>() {
            Ok(f) if f.is_finite() => Ok(FieldValue::Float64(f)),
            Ok(_) => Err(CsvParseError::new("Value is not a finite number", value, field_type)),
            Err(e) => Err(CsvParseError::new(format!("Invalid double: {e}"), value, field_type)),
        },

        FieldType::Text => Ok(FieldValue::Text(value.to_string())),

        // Enum - by name, case-insensitive, or by declaration index
        FieldType::Enum { values } => {
            let wanted = value.trim();
            if let Some(name) = values.iter().find(|v| v.eq_ignore_ascii_case(wanted)) {
                return Ok(FieldValue::Enum(name.clone()));
            }
            if let Some(name) = wanted.parse::<usize>().ok().and_then(|i| values.get(i)) {
                return Ok(FieldValue::Enum(name.clone()));
            }
            Err(CsvParseError::new(
                format!("Expected one of: {}", values.join(", ")),
                value,
                field_type,
            ))
        }

        // Asset reference - the cell holds the asset path; resolution is the caller's job
        FieldType::AssetRef { .. } => Ok(FieldValue::AssetRef(value.trim().to_string())),
    }
}
