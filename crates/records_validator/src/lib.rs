//! # Records Validator
//!
//! Validation engine for schema-described records. This crate provides:
//!
//! - The recursive field pipeline (`RecordValidator`, `validate`)
//! - Schema definition checks (`SchemaLinter`)
//! - Dataset-level reports (`DataValidator`)
//!
//! ## Example
//!
//! ```rust
//! use records_core::DataValue;
//! use records_parser::parse_schema_yaml;
//! use records_validator::validate;
//! use serde_json::json;
//!
//! let schema = parse_schema_yaml(r#"
//! name: { type: string, minLength: 1 }
//! age: { type: number }
//! address:
//!   schema:
//!     city: { type: string, minLength: 1 }
//! "#).unwrap();
//!
//! let data = DataValue::from(json!({
//!     "name": "John Doe",
//!     "age": 25,
//!     "address": { "city": "New York" }
//! }))
//! .into_record()
//! .unwrap();
//!
//! assert!(validate(&data, &schema).is_empty());
//! ```

mod engine;
mod error;
mod lint;
mod record;

pub use engine::*;
pub use error::*;
pub use lint::*;
pub use record::*;
