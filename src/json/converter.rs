//! JSON <-> Value conversion
//!
//! JSON objects become [`ObjectValue`]s. The class name travels in the
//! reserved `$class` member and defaults to `stdClass` when absent.

use crate::core::{DEFAULT_CLASS, MatrixError, ObjectValue, Result, Row, Value};
use crate::calculator::PotentialScores;
use crate::storage::ValidatedTable;
use serde_json::{Map, Number, Value as JsonValue, json};

/// Member carrying the class name of an object
pub const CLASS_MEMBER: &str = "$class";

/// Converts JSON values to the matrix [`Value`] enum
pub struct JsonToValueConverter;

impl JsonToValueConverter {
    pub fn convert(json_value: &JsonValue) -> Value {
        match json_value {
            JsonValue::Null => Value::Null,
            JsonValue::Bool(b) => Value::Boolean(*b),
            JsonValue::Number(n) => match n.as_i64() {
                Some(i) => Value::Integer(i),
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            JsonValue::String(s) => Value::Text(s.clone()),
            JsonValue::Array(items) => Value::Array(items.iter().map(Self::convert).collect()),
            JsonValue::Object(members) => Value::Object(Self::convert_object(members)),
        }
    }

    fn convert_object(members: &Map<String, JsonValue>) -> ObjectValue {
        let class = members
            .get(CLASS_MEMBER)
            .and_then(JsonValue::as_str)
            .unwrap_or(DEFAULT_CLASS);

        members
            .iter()
            .filter(|(name, _)| name.as_str() != CLASS_MEMBER)
            .fold(ObjectValue::new(class), |obj, (name, value)| {
                obj.with_attribute(name.clone(), Self::convert(value))
            })
    }

    /// Converts a JSON object into a [`Row`], one entry per member
    pub fn json_to_row(json_value: &JsonValue) -> Result<Row> {
        let members = json_value
            .as_object()
            .ok_or_else(|| MatrixError::Json(format!("Expected JSON object for a row, got {}", json_value)))?;

        Ok(Self::members_to_row(members))
    }

    pub fn members_to_row(members: &Map<String, JsonValue>) -> Row {
        members
            .iter()
            .map(|(key, value)| (key.clone(), Self::convert(value)))
            .collect()
    }
}

/// Converts matrix values back to JSON
pub struct ValueToJsonConverter;

impl ValueToJsonConverter {
    pub fn convert(value: &Value) -> JsonValue {
        match value {
            Value::Null => JsonValue::Null,
            Value::Integer(i) => JsonValue::from(*i),
            // Non-finite floats have no JSON representation
            Value::Float(f) => Number::from_f64(*f).map_or(JsonValue::Null, JsonValue::Number),
            Value::Text(s) => JsonValue::String(s.clone()),
            Value::Boolean(b) => JsonValue::Bool(*b),
            Value::Array(items) => JsonValue::Array(items.iter().map(Self::convert).collect()),
            Value::Object(obj) => {
                let mut members = Map::new();
                members.insert(CLASS_MEMBER.to_string(), JsonValue::String(obj.class().to_string()));
                for (name, attribute) in obj.attributes() {
                    members.insert(name.clone(), Self::convert(attribute));
                }
                JsonValue::Object(members)
            }
        }
    }

    pub fn row_to_json(row: &Row) -> JsonValue {
        JsonValue::Object(
            row.iter()
                .map(|(key, value)| (key.clone(), Self::convert(value)))
                .collect(),
        )
    }
}

impl ValidatedTable {
    /// Snapshot of `lines()` as a JSON array of `{name, values}` objects
    pub fn to_json(&self) -> JsonValue {
        JsonValue::Array(
            self.lines()
                .map(|(key, row)| {
                    json!({
                        "name": key,
                        "values": ValueToJsonConverter::row_to_json(row),
                    })
                })
                .collect(),
        )
    }
}

impl PotentialScores {
    /// JSON object mapping each row name to its score
    pub fn to_json(&self) -> JsonValue {
        JsonValue::Object(
            self.iter()
                .map(|(key, score)| (key.to_string(), ValueToJsonConverter::convert(&Value::Float(score))))
                .collect(),
        )
    }
}
