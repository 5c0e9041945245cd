use super::{Coefficients, PotentialScores};
use crate::core::{ColumnSchema, DataType, Result, Row, RowKey};
use crate::storage::ValidatedTable;

/// Notes of students on the red/blue/green subjects
#[derive(Debug, Clone)]
pub struct StudentPotential {
    table: ValidatedTable,
}

impl StudentPotential {
    pub const SUBJECTS: [&'static str; 3] = ["red", "blue", "green"];

    pub fn new() -> Self {
        let schema = ColumnSchema::new(Self::SUBJECTS.len(), DataType::Integer)
            .allowed_keys(Self::SUBJECTS)
            .strict(true);
        Self {
            table: ValidatedTable::named("students", schema),
        }
    }

    pub fn add_student_notes(&mut self, name: impl Into<String>, notes: Row) -> Result<()> {
        self.table.add_row(notes, Some(RowKey::Label(name.into())))
    }

    pub fn compute(&self, coefficients: &Coefficients) -> Result<PotentialScores> {
        self.table.compute_potential(coefficients)
    }

    pub fn table(&self) -> &ValidatedTable {
        &self.table
    }
}

impl Default for StudentPotential {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{MatrixError, row};

    #[test]
    fn test_identical_students_share_the_maximum() {
        let mut students = StudentPotential::new();
        let notes = row([("red", 5), ("blue", 10), ("green", 15)]);
        students.add_student_notes("student1", notes.clone()).unwrap();
        students.add_student_notes("student2", notes).unwrap();

        let coefficients = Coefficients::from([
            ("red".to_string(), 0.5),
            ("blue".to_string(), 0.5),
            ("green".to_string(), 1.0),
        ]);
        let scores = students.compute(&coefficients).unwrap();
        assert_eq!(scores.len(), 2);
        for (_, score) in scores.iter() {
            assert!((score - 2.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_unknown_subject_is_rejected() {
        let mut students = StudentPotential::new();
        let err = students
            .add_student_notes("student1", row([("red", 5), ("blue", 10), ("yellow", 15)]))
            .unwrap_err();
        assert!(matches!(err, MatrixError::Key { actual, .. } if actual == "yellow"));
        assert!(students.table().is_empty());
    }
}
