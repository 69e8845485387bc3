//! # Records Core
//!
//! Core data structures and types for the record validator.
//!
//! A schema describes the expected shape of a record field by field: its
//! type, whether it may be missing, length bounds, a pattern, equality with
//! a sibling field, and a nested schema for object fields. This crate holds
//! the types; validation itself lives in `records_validator`.
//!
//! ## Key Concepts
//!
//! - **Schema**: ordered mapping from field name to [`FieldRules`]
//! - **DataValue / Record**: tagged runtime values and the records built from them
//! - **RuleViolation**: one failed rule, rendered as a human-readable message
//! - **ValidationReport**: outcome of validating a whole dataset
//!
//! ## Example
//!
//! ```rust
//! use records_core::{DataValue, FieldRulesBuilder, FieldType, SchemaBuilder};
//! use serde_json::json;
//!
//! let schema = SchemaBuilder::new()
//!     .field("name", FieldRulesBuilder::new().field_type(FieldType::String).min_length(1).build())
//!     .build();
//!
//! let record = DataValue::from(json!({ "name": "John Doe" }))
//!     .into_record()
//!     .unwrap();
//!
//! assert!(schema.contains("name"));
//! assert_eq!(record.len(), 1);
//! ```

pub mod builder;
pub mod dataset;
pub mod error;
pub mod pattern;
pub mod report;
pub mod schema;
pub mod value;

pub use builder::*;
pub use dataset::*;
pub use error::*;
pub use pattern::*;
pub use report::*;
pub use schema::*;
pub use value::*;
