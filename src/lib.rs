// ============================================================================
// RustMatrix Library
// ============================================================================

pub mod calculator;
pub mod config;
pub mod core;
pub mod json;
pub mod render;
pub mod storage;

// Re-export main types for convenience
pub use calculator::{Coefficients, PotentialCalculator, PotentialScores, StudentPotential};
pub use config::AppConfig;
pub use crate::core::{
    ColumnSchema, DataType, MatrixError, ObjectValue, Result, Row, RowKey, Value, ValueKind, row,
};
pub use json::MatrixDocument;
pub use render::TableRenderer;
pub use storage::ValidatedTable;
