use super::{RowKey, ValueKind};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatrixError {
    #[error("this row does not match the size expected (expected: {expected}, actual: {actual})")]
    Shape { expected: usize, actual: usize },

    #[error("this value does not match the type expected (expected: {expected}, actual: {actual})")]
    Type { expected: ValueKind, actual: ValueKind },

    #[error("this value does not match the class expected (expected: {expected}, actual: {actual})")]
    Class { expected: String, actual: String },

    #[error("this key is not allowed (allowed: {}, actual: {actual})", .allowed.join(", "))]
    Key { allowed: Vec<String>, actual: String },

    #[error("Row '{0}' not found")]
    RowNotFound(RowKey),

    #[error("No automatic row index left after {0}")]
    IndexExhausted(usize),

    #[error("Column '{column}' has a maximum of zero")]
    DivisionByZero { column: String },

    #[error("Missing coefficient for column '{0}'")]
    MissingCoefficient(String),

    #[error("Column '{column}' holds a non-numeric {kind} value")]
    NonNumeric { column: String, kind: ValueKind },

    #[error("JSON error: {0}")]
    Json(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(String),
}

pub type Result<T> = std::result::Result<T, MatrixError>;

impl From<serde_json::Error> for MatrixError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<std::io::Error> for MatrixError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
