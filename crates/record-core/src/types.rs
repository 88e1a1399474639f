//! Field types a record schema can declare.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

/// Declared type of a record field.
///
/// # YAML Format
///
/// Simple types can be specified as strings:
/// ```yaml
/// type: int
/// type: text
/// type: asset_ref
/// ```
///
/// Types with parameters use object format:
/// ```yaml
/// type:
///   type: enum
///   values: [common, rare, epic]
/// type:
///   type: asset_ref
///   asset_type: Prefab
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum FieldType {
    /// Boolean value
    Bool,

    /// 32-bit signed integer
    Int32,

    /// 64-bit signed integer
    Int64,

    /// 32-bit IEEE 754 floating point
    Float32,

    /// 64-bit IEEE 754 floating point
    Float64,

    /// Unlimited text
    Text,

    /// One of a fixed set of names
    Enum {
        /// Allowed values, in declaration order
        values: Vec<String>,
    },

    /// Reference to another asset, stored by its asset path
    AssetRef {
        /// Expected type of the referenced asset, if constrained
        asset_type: Option<String>,
    },
}

impl FieldType {
    /// Short name used in messages and in the YAML format.
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldType::Bool => "bool",
            FieldType::Int32 => "int",
            FieldType::Int64 => "big_int",
            FieldType::Float32 => "float",
            FieldType::Float64 => "double",
            FieldType::Text => "text",
            FieldType::Enum { .. } => "enum",
            FieldType::AssetRef { .. } => "asset_ref",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::Enum { values } => write!(f, "enum({})", values.join("|")),
            FieldType::AssetRef {
                asset_type: Some(asset_type),
            } => write!(f, "asset_ref({asset_type})"),
            other => f.write_str(other.type_name()),
        }
    }
}

// Simple types serialize as a bare string, parameterized ones as a map.

impl Serialize for FieldType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeMap;

        match self {
            Self::Enum { values } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("type", "enum")?;
                map.serialize_entry("values", values)?;
                map.end()
            }
            Self::AssetRef {
                asset_type: Some(asset_type),
            } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("type", "asset_ref")?;
                map.serialize_entry("asset_type", asset_type)?;
                map.end()
            }
            other => serializer.serialize_str(other.type_name()),
        }
    }
}

fn simple_type<E: serde::de::Error>(name: &str) -> Result<FieldType, E> {
    match name {
        "bool" | "boolean" => Ok(FieldType::Bool),
        "int" | "int32" => Ok(FieldType::Int32),
        "big_int" | "bigint" | "int64" | "long" => Ok(FieldType::Int64),
        "float" | "float32" => Ok(FieldType::Float32),
        "double" | "float64" => Ok(FieldType::Float64),
        "text" | "string" => Ok(FieldType::Text),
        "asset_ref" => Ok(FieldType::AssetRef { asset_type: None }),
        _ => Err(E::custom(format!("unknown simple type: {name}"))),
    }
}

impl<'de> Deserialize<'de> for FieldType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{Error, MapAccess, Visitor};

        struct FieldTypeVisitor;

        impl<'de> Visitor<'de> for FieldTypeVisitor {
            type Value = FieldType;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string or map representing a FieldType")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: Error,
            {
                simple_type(value)
            }

            fn visit_map<M>(self, mut map: M) -> Result<Self::Value, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut type_name: Option<String> = None;
                let mut fields: HashMap<String, serde_yaml::Value> = HashMap::new();

                while let Some(key) = map.next_key::<String>()? {
                    if key == "type" {
                        type_name = Some(map.next_value()?);
                    } else {
                        fields.insert(key, map.next_value()?);
                    }
                }

                let type_name = type_name.ok_or_else(|| M::Error::missing_field("type"))?;

                match type_name.as_str() {
                    "enum" => {
                        let values: Vec<String> = get_field_required(&fields, "values")?;
                        if values.is_empty() {
                            return Err(M::Error::custom("enum type needs at least one value"));
                        }
                        Ok(FieldType::Enum { values })
                    }
                    "asset_ref" => Ok(FieldType::AssetRef {
                        asset_type: get_field(&fields, "asset_type"),
                    }),
                    other => simple_type(other),
                }
            }
        }

        deserializer.deserialize_any(FieldTypeVisitor)
    }
}

fn get_field<T: for<'de> Deserialize<'de>>(
    fields: &HashMap<String, serde_yaml::Value>,
    key: &str,
) -> Option<T> {
    fields
        .get(key)
        .and_then(|v| serde_yaml::from_value(v.clone()).ok())
}

fn get_field_required<T: for<'de> Deserialize<'de>, E: serde::de::Error>(
    fields: &HashMap<String, serde_yaml::Value>,
    key: &'static str,
) -> Result<T, E> {
    let value = fields.get(key).ok_or_else(|| E::missing_field(key))?;
    serde_yaml::from_value(value.clone())
        .map_err(|e| E::custom(format!("invalid field '{key}': {e}")))
}
