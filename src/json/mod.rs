//! JSON support
//!
//! - `converter.rs` - JSON <-> [`Value`](crate::core::Value) conversion and table snapshots
//! - `document.rs` - input documents (schema, rows, coefficients)

mod converter;
mod document;

pub use converter::{CLASS_MEMBER, JsonToValueConverter, ValueToJsonConverter};
pub use document::{MatrixDocument, RowSpec, SchemaSpec};
