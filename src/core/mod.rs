pub mod error;
pub mod types;
pub mod value;

pub use error::{MatrixError, Result};
pub use types::{ColumnSchema, Row, RowKey, row};
pub use value::{DEFAULT_CLASS, DataType, ObjectValue, Value, ValueKind};
