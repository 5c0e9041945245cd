use crate::core::{MatrixError, Result, RowKey, Value};
use crate::storage::ValidatedTable;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Weight per column key
pub type Coefficients = BTreeMap<String, f64>;

/// Potential score per row, in row iteration order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PotentialScores {
    scores: Vec<(RowKey, f64)>,
}

impl PotentialScores {
    pub fn get(&self, key: &RowKey) -> Option<f64> {
        self.scores
            .iter()
            .find(|(candidate, _)| candidate == key)
            .map(|(_, score)| *score)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&RowKey, f64)> {
        self.scores.iter().map(|(key, score)| (key, *score))
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

/// One `name: score` line per row
impl fmt::Display for PotentialScores {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, score) in &self.scores {
            writeln!(f, "{}: {}", key, score)?;
        }
        Ok(())
    }
}

impl IntoIterator for PotentialScores {
    type Item = (RowKey, f64);
    type IntoIter = std::vec::IntoIter<(RowKey, f64)>;

    fn into_iter(self) -> Self::IntoIter {
        self.scores.into_iter()
    }
}

/// Weighted sum of every value normalised by its column maximum.
///
/// For each row: `sum(value / max(column) * coefficient[column])` over the
/// row's entries.
#[derive(Debug, Clone, Default)]
pub struct PotentialCalculator {
    coefficients: Coefficients,
}

impl PotentialCalculator {
    pub fn new(coefficients: Coefficients) -> Self {
        Self { coefficients }
    }

    pub fn with_coefficient(mut self, column: impl Into<String>, coefficient: f64) -> Self {
        self.coefficients.insert(column.into(), coefficient);
        self
    }

    pub fn coefficients(&self) -> &Coefficients {
        &self.coefficients
    }

    pub fn compute(&self, table: &ValidatedTable) -> Result<PotentialScores> {
        reduce(table, &self.coefficients)
    }
}

impl ValidatedTable {
    pub fn compute_potential(&self, coefficients: &Coefficients) -> Result<PotentialScores> {
        reduce(self, coefficients)
    }
}

fn reduce(table: &ValidatedTable, coefficients: &Coefficients) -> Result<PotentialScores> {
    // column maxima are computed on first use and reused across rows
    let mut maxima: HashMap<&str, f64> = HashMap::new();
    let mut scores = Vec::with_capacity(table.row_count());

    for (key, row) in table.lines() {
        let mut potential = 0.0;
        for (column, value) in row {
            let value = numeric(column, value)?;

            let max = match maxima.get(column.as_str()) {
                Some(max) => *max,
                None => {
                    let max = column_max(table, column)?;
                    maxima.insert(column.as_str(), max);
                    max
                }
            };
            if max == 0.0 {
                return Err(MatrixError::DivisionByZero {
                    column: column.clone(),
                });
            }

            let coefficient = coefficients
                .get(column)
                .ok_or_else(|| MatrixError::MissingCoefficient(column.clone()))?;

            potential += value / max * coefficient;
        }
        scores.push((key.clone(), potential));
    }

    Ok(PotentialScores { scores })
}

fn numeric(column: &str, value: &Value) -> Result<f64> {
    value.as_f64().ok_or_else(|| MatrixError::NonNumeric {
        column: column.to_string(),
        kind: value.kind(),
    })
}

fn column_max(table: &ValidatedTable, column: &str) -> Result<f64> {
    table
        .column(column)
        .into_iter()
        .try_fold(f64::NEG_INFINITY, |max, value| -> Result<f64> {
            Ok(max.max(numeric(column, value)?))
        })
}
