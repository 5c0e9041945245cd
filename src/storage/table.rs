use crate::core::{ColumnSchema, MatrixError, Result, Row, RowKey, Value};
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, trace, warn};

#[derive(Debug, Clone)]
struct StoredRow {
    key: RowKey,
    row: Row,
}

/// Append-only table of named rows, validated against a [`ColumnSchema`].
///
/// Rows iterate in first-insertion order. Writing to an existing key merges
/// the new entries into the stored row and keeps its position.
#[derive(Debug, Clone)]
pub struct ValidatedTable {
    name: String,
    schema: ColumnSchema,
    rows: BTreeMap<usize, StoredRow>,
    positions: HashMap<RowKey, usize>,
    next_position: usize,
    /// `None` once an `Index(usize::MAX)` row is stored
    next_index: Option<usize>,
}

impl ValidatedTable {
    pub fn new(schema: ColumnSchema) -> Self {
        Self::named("matrix", schema)
    }

    pub fn named(name: impl Into<String>, schema: ColumnSchema) -> Self {
        Self {
            name: name.into(),
            schema,
            rows: BTreeMap::new(),
            positions: HashMap::new(),
            next_position: 0,
            next_index: Some(0),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn schema(&self) -> &ColumnSchema {
        &self.schema
    }

    /// Replaces the schema. Rows already stored are not revalidated.
    pub fn set_schema(&mut self, schema: ColumnSchema) {
        if !self.rows.is_empty() {
            warn!(
                table = %self.name,
                rows = self.rows.len(),
                "schema replaced on a non-empty table; stored rows are not revalidated"
            );
        }
        self.schema = schema;
    }

    /// Validates `row` and stores it under `name`, or under the next free
    /// index when `name` is `None`.
    ///
    /// Auto names always exceed every stored `Index` key. After a row named
    /// `Index(usize::MAX)` is stored, unnamed rows fail with `IndexExhausted`.
    ///
    /// Strict mode is all-or-nothing: the first failing check is returned and
    /// the table is left untouched. Lenient mode drops a wrongly sized row
    /// entirely and otherwise drops only the offending entries.
    pub fn add_row(&mut self, row: Row, name: Option<RowKey>) -> Result<()> {
        if let Err(err) = self.schema.validate_shape(&row) {
            if self.schema.is_strict() {
                return Err(err);
            }
            debug!(table = %self.name, reason = %err, "row dropped");
            return Ok(());
        }

        let key = match name {
            Some(key) => key,
            None => RowKey::Index(
                self.next_index
                    .ok_or(MatrixError::IndexExhausted(usize::MAX))?,
            ),
        };
        let mut accepted = Row::new();
        for (column, value) in row {
            match self.schema.validate_entry(&column, &value) {
                Ok(()) => {
                    accepted.insert(column, value);
                }
                Err(err) if self.schema.is_strict() => return Err(err),
                Err(err) => {
                    debug!(table = %self.name, row = %key, column = %column, reason = %err, "entry dropped");
                }
            }
        }

        self.commit(key, accepted);
        Ok(())
    }

    /// Keyed write: same validation as [`add_row`](Self::add_row) with an explicit name
    pub fn insert(&mut self, key: impl Into<RowKey>, row: Row) -> Result<()> {
        self.add_row(row, Some(key.into()))
    }

    fn commit(&mut self, key: RowKey, entries: Row) {
        if let Some(position) = self.positions.get(&key) {
            if let Some(stored) = self.rows.get_mut(position) {
                stored.row.extend(entries);
            }
            return;
        }

        if entries.is_empty() {
            return;
        }

        if let (Some(index), Some(next)) = (key.as_index(), self.next_index) {
            self.next_index = index.checked_add(1).map(|after| after.max(next));
        }

        trace!(table = %self.name, row = %key, entries = entries.len(), "row committed");
        let position = self.next_position;
        self.next_position += 1;
        self.positions.insert(key.clone(), position);
        self.rows.insert(position, StoredRow { key, row: entries });
    }

    /// Values stored under `key`, in row order. Rows without the key are skipped.
    pub fn column(&self, key: &str) -> Vec<&Value> {
        self.rows
            .values()
            .filter_map(|stored| stored.row.get(key))
            .collect()
    }

    /// One projection per key of the first row.
    ///
    /// Keys that only appear in later rows are not reported.
    pub fn columns(&self) -> Vec<(String, Vec<&Value>)> {
        self.column_keys()
            .into_iter()
            .map(|key| {
                let values = self.column(&key);
                (key, values)
            })
            .collect()
    }

    /// Keys of the first row in iteration order
    pub fn column_keys(&self) -> Vec<String> {
        self.rows
            .values()
            .next()
            .map(|first| first.row.keys().cloned().collect())
            .unwrap_or_default()
    }

    pub fn line(&self, key: &RowKey) -> Result<&Row> {
        self.get(key)
            .ok_or_else(|| MatrixError::RowNotFound(key.clone()))
    }

    pub fn lines(&self) -> impl Iterator<Item = (&RowKey, &Row)> {
        self.rows.values().map(|stored| (&stored.key, &stored.row))
    }

    pub fn get(&self, key: &RowKey) -> Option<&Row> {
        self.positions
            .get(key)
            .and_then(|position| self.rows.get(position))
            .map(|stored| &stored.row)
    }

    pub fn contains_key(&self, key: &RowKey) -> bool {
        self.positions.contains_key(key)
    }

    /// Removes the row at `key`. Absent keys are a no-op.
    pub fn remove(&mut self, key: &RowKey) -> Option<Row> {
        let position = self.positions.remove(key)?;
        self.rows.remove(&position).map(|stored| stored.row)
    }

    pub fn keys(&self) -> impl Iterator<Item = &RowKey> {
        self.rows.values().map(|stored| &stored.key)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
