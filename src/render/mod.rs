//! Text rendering of a [`ValidatedTable`]
//!
//! One header line with the column keys of the first row, then one line per
//! row prefixed by its key. Cells are padded to a fixed width and separated
//! by ` | `. Array and object cells are expanded below their row, one
//! indentation level per nesting depth.

use crate::core::Value;
use crate::storage::ValidatedTable;
use std::fmt::{self, Write};

const INDENT: &str = "    ";

#[derive(Debug, Clone)]
pub struct TableRenderer {
    cell_width: usize,
}

impl TableRenderer {
    pub const DEFAULT_CELL_WIDTH: usize = 12;

    pub fn new(cell_width: usize) -> Self {
        Self { cell_width }
    }

    pub fn cell_width(&self) -> usize {
        self.cell_width
    }

    pub fn render(&self, table: &ValidatedTable) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail
        let _ = self.write_table(&mut out, table);
        out
    }

    fn write_table(&self, out: &mut impl Write, table: &ValidatedTable) -> fmt::Result {
        let keys = table.column_keys();
        if keys.is_empty() {
            return Ok(());
        }

        let header: Vec<String> = std::iter::once(self.pad(""))
            .chain(keys.iter().map(|key| self.pad(key)))
            .collect();
        writeln!(out, "{}", header.join(" | ").trim_end())?;

        let separator = vec!["-".repeat(self.cell_width); keys.len() + 1].join("-+-");
        writeln!(out, "{}", separator)?;

        for (row_key, row) in table.lines() {
            let cells: Vec<String> = std::iter::once(self.pad(&row_key.to_string()))
                .chain(keys.iter().map(|key| {
                    row.get(key)
                        .map(|value| self.pad(&value.to_string()))
                        .unwrap_or_else(|| self.pad(""))
                }))
                .collect();
            writeln!(out, "{}", cells.join(" | ").trim_end())?;

            for key in &keys {
                if let Some(value) = row.get(key)
                    && is_container(value)
                {
                    writeln!(out, "{}{}:", INDENT, key)?;
                    write_nested(out, value, 2)?;
                }
            }
        }

        Ok(())
    }

    fn pad(&self, text: &str) -> String {
        format!("{:<width$}", text, width = self.cell_width)
    }
}

impl Default for TableRenderer {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CELL_WIDTH)
    }
}

fn is_container(value: &Value) -> bool {
    matches!(value, Value::Array(_) | Value::Object(_))
}

fn write_nested(out: &mut impl Write, value: &Value, depth: usize) -> fmt::Result {
    let indent = INDENT.repeat(depth);
    match value {
        Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                writeln!(out, "{}[{}] => {}", indent, i, item)?;
                write_nested(out, item, depth + 1)?;
            }
        }
        Value::Object(obj) => {
            for (name, attribute) in obj.attributes() {
                writeln!(out, "{}[{}] => {}", indent, name, attribute)?;
                write_nested(out, attribute, depth + 1)?;
            }
        }
        _ => {}
    }
    Ok(())
}

impl fmt::Display for ValidatedTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        TableRenderer::default().write_table(f, self)
    }
}
