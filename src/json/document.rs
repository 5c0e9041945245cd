//! JSON input documents
//!
//! A document carries a schema, the rows to replay through
//! [`ValidatedTable::add_row`] and optional potential coefficients.

use super::converter::JsonToValueConverter;
use crate::calculator::Coefficients;
use crate::core::{ColumnSchema, DataType, MatrixError, Result, RowKey};
use crate::storage::ValidatedTable;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};
use std::fs;
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaSpec {
    pub count: usize,
    pub kind: String,
    #[serde(default)]
    pub class: Option<String>,
    #[serde(default)]
    pub allowed_keys: Vec<String>,
    #[serde(default = "default_strict")]
    pub strict: bool,
}

fn default_strict() -> bool {
    true
}

impl SchemaSpec {
    pub fn to_schema(&self) -> Result<ColumnSchema> {
        if self.class.is_some() && !self.kind.eq_ignore_ascii_case("object") {
            return Err(MatrixError::Config(format!(
                "class is only valid with kind 'object', got kind '{}'",
                self.kind
            )));
        }

        let data_type = DataType::parse(&self.kind, self.class.as_deref()).ok_or_else(|| {
            MatrixError::Config(match self.class {
                None if self.kind.eq_ignore_ascii_case("object") => {
                    "kind 'object' requires a class".to_string()
                }
                _ => format!("unknown kind '{}'", self.kind),
            })
        })?;

        Ok(ColumnSchema::new(self.count, data_type)
            .allowed_keys(self.allowed_keys.iter().cloned())
            .strict(self.strict))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RowSpec {
    #[serde(default)]
    pub name: Option<RowKey>,
    pub values: Map<String, JsonValue>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatrixDocument {
    pub schema: SchemaSpec,
    #[serde(default)]
    pub rows: Vec<RowSpec>,
    #[serde(default)]
    pub coefficients: Coefficients,
}

impl MatrixDocument {
    pub fn from_json_str(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&contents)
    }

    /// Builds a table and replays every row in document order
    pub fn build_table(&self) -> Result<ValidatedTable> {
        let mut table = ValidatedTable::new(self.schema.to_schema()?);
        for spec in &self.rows {
            let row = JsonToValueConverter::members_to_row(&spec.values);
            table.add_row(row, spec.name.clone())?;
        }
        Ok(table)
    }
}

impl FromStr for MatrixDocument {
    type Err = MatrixError;

    fn from_str(input: &str) -> Result<Self> {
        Self::from_json_str(input)
    }
}
