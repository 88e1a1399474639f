//! Forward conversion: FieldValue → CSV string.

use record_core::FieldValue;

/// Wrapper for CSV string values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvValue(pub String);

impl CsvValue {
    /// Get the inner CSV string.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Get a reference to the inner CSV string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<FieldValue> for CsvValue {
    fn from(value: FieldValue) -> Self {
        CsvValue::from(&value)
    }
}

impl From<&FieldValue> for CsvValue {
    fn from(value: &FieldValue) -> Self {
        match value {
            // Null - empty string
            FieldValue::Null => CsvValue(String::new()),

            FieldValue::Bool(b) => CsvValue(b.to_string()),

            FieldValue::Int32(i) => CsvValue(i.to_string()),
            FieldValue::Int64(i) => CsvValue(i.to_string()),

            // Display gives the shortest string that parses back to the same float
            FieldValue::Float32(f) => CsvValue(f.to_string()),
            FieldValue::Float64(f) => CsvValue(f.to_string()),

            FieldValue::Text(s) => CsvValue(s.clone()),
            FieldValue::Enum(name) => CsvValue(name.clone()),

            // Asset references are written as the referenced asset's path
            FieldValue::AssetRef(path) => CsvValue(path.clone()),
        }
    }
}

/// Convert field values to unescaped CSV cells.
pub fn field_values_to_csv_row<'a, I>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a FieldValue>,
{
    values
        .into_iter()
        .map(|v| CsvValue::from(v).into_inner())
        .collect()
}
