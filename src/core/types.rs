use super::{DataType, MatrixError, Result, Value};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// A row maps column keys to values
pub type Row = BTreeMap<String, Value>;

/// Builds a [`Row`] from `(key, value)` pairs.
pub fn row<K, V, I>(entries: I) -> Row
where
    K: Into<String>,
    V: Into<Value>,
    I: IntoIterator<Item = (K, V)>,
{
    entries
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

/// Name of a row: an explicit label or an auto-assigned index
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RowKey {
    Index(usize),
    Label(String),
}

impl RowKey {
    pub fn label(name: impl Into<String>) -> Self {
        Self::Label(name.into())
    }

    pub fn as_index(&self) -> Option<usize> {
        match self {
            Self::Index(i) => Some(*i),
            Self::Label(_) => None,
        }
    }
}

impl fmt::Display for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(i) => write!(f, "{}", i),
            Self::Label(name) => f.write_str(name),
        }
    }
}

impl From<usize> for RowKey {
    fn from(i: usize) -> Self {
        Self::Index(i)
    }
}

impl From<&str> for RowKey {
    fn from(name: &str) -> Self {
        Self::Label(name.to_string())
    }
}

impl From<String> for RowKey {
    fn from(name: String) -> Self {
        Self::Label(name)
    }
}

impl From<&RowKey> for RowKey {
    fn from(key: &RowKey) -> Self {
        key.clone()
    }
}

/// Declared row shape: entry count, value kind, allowed keys and strictness
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSchema {
    count: usize,
    data_type: DataType,
    allowed_keys: BTreeSet<String>,
    strict: bool,
}

impl ColumnSchema {
    /// Strict schema with no key restriction
    pub fn new(count: usize, data_type: DataType) -> Self {
        Self {
            count,
            data_type,
            allowed_keys: BTreeSet::new(),
            strict: true,
        }
    }

    pub fn allowed_keys<K, I>(mut self, keys: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = K>,
    {
        self.allowed_keys = keys.into_iter().map(Into::into).collect();
        self
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn lenient(self) -> Self {
        self.strict(false)
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn data_type(&self) -> &DataType {
        &self.data_type
    }

    pub fn keys(&self) -> &BTreeSet<String> {
        &self.allowed_keys
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    pub fn validate_shape(&self, row: &Row) -> Result<()> {
        if row.len() != self.count {
            return Err(MatrixError::Shape {
                expected: self.count,
                actual: row.len(),
            });
        }
        Ok(())
    }

    /// Checks one entry: kind, then class, then key membership.
    pub fn validate_entry(&self, key: &str, value: &Value) -> Result<()> {
        if !self.data_type.is_compatible(value) {
            let expected = self.data_type.kind();
            return Err(match (self.data_type.class(), value.class_name()) {
                (Some(class), Some(actual)) => MatrixError::Class {
                    expected: class.to_string(),
                    actual: actual.to_string(),
                },
                _ => MatrixError::Type {
                    expected,
                    actual: value.kind(),
                },
            });
        }

        if !self.allowed_keys.is_empty() && !self.allowed_keys.contains(key) {
            return Err(MatrixError::Key {
                allowed: self.allowed_keys.iter().cloned().collect(),
                actual: key.to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ObjectValue, ValueKind};

    #[test]
    fn test_shape_mismatch() {
        let schema = ColumnSchema::new(3, DataType::Integer);
        let err = schema
            .validate_shape(&row([("a", 1), ("b", 2), ("c", 3), ("d", 4)]))
            .unwrap_err();
        assert!(matches!(err, MatrixError::Shape { expected: 3, actual: 4 }));
    }

    #[test]
    fn test_entry_checks_kind_before_key() {
        let schema = ColumnSchema::new(1, DataType::Integer).allowed_keys(["red"]);
        let err = schema.validate_entry("blue", &Value::from("x")).unwrap_err();
        assert!(matches!(
            err,
            MatrixError::Type {
                expected: ValueKind::Integer,
                actual: ValueKind::Text
            }
        ));

        let err = schema.validate_entry("blue", &Value::from(1)).unwrap_err();
        assert!(matches!(err, MatrixError::Key { .. }));
        assert!(schema.validate_entry("red", &Value::from(1)).is_ok());
    }

    #[test]
    fn test_entry_class_mismatch() {
        let schema = ColumnSchema::new(1, DataType::object("Point"));
        let value = Value::from(ObjectValue::new("Vector"));
        let err = schema.validate_entry("p", &value).unwrap_err();
        assert_eq!(
            err.to_string(),
            "this value does not match the class expected (expected: Point, actual: Vector)"
        );
    }

    #[test]
    fn test_empty_allowed_keys_means_unrestricted() {
        let schema = ColumnSchema::new(1, DataType::Boolean);
        assert!(schema.validate_entry("anything", &Value::from(true)).is_ok());
    }
}
