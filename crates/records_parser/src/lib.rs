//! Parser for record schemas and data documents (YAML/TOML/JSON formats).
//!
//! Schemas are documents mapping each field name to its rule set. Data
//! documents hold either a single record (a mapping) or a list of records.
//!
//! # Example
//!
//! ```rust
//! use records_parser::{parse_data_json, parse_schema_yaml};
//!
//! let yaml = r#"
//! name:
//!   type: string
//!   minLength: 1
//! age:
//!   type: number
//! address:
//!   schema:
//!     city:
//!       type: string
//! "#;
//!
//! let schema = parse_schema_yaml(yaml).expect("Failed to parse schema");
//! assert_eq!(schema.len(), 3);
//!
//! let data = parse_data_json(r#"{"name": "John Doe", "age": 25}"#).unwrap();
//! assert_eq!(data.len(), 1);
//! ```

use records_core::{DataSet, DataValue, Schema};
use serde::de::DeserializeOwned;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while parsing schemas or data.
#[derive(Debug, Error)]
pub enum ParserError {
    /// YAML parsing or deserialization failed
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml_ng::Error),

    /// TOML parsing or deserialization failed
    #[error("Failed to parse TOML: {0}")]
    TomlError(String),

    /// JSON parsing or deserialization failed
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    /// File I/O error
    #[error("File I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Unsupported file format
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// Invalid file extension
    #[error("Invalid or missing file extension")]
    InvalidExtension,

    /// Data document is neither a mapping nor a list
    #[error("Data document must be a mapping or a list of mappings, found {0}")]
    NotARecord(String),

    /// An element of a data list is not a mapping
    #[error("Element {index} of the data document must be a mapping, found {found}")]
    NotARecordElement { index: usize, found: String },
}

/// Result type alias for parser operations.
pub type Result<T> = std::result::Result<T, ParserError>;

/// Supported document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// YAML format (.yml, .yaml)
    Yaml,
    /// TOML format (.toml)
    Toml,
    /// JSON format (.json)
    Json,
}

/// Detect the document format from a file path based on its extension.
///
/// # Supported Extensions
///
/// * `.yaml`, `.yml` → `DocumentFormat::Yaml`
/// * `.toml` → `DocumentFormat::Toml`
/// * `.json` → `DocumentFormat::Json`
///
/// # Errors
///
/// Returns `ParserError::InvalidExtension` if the file has no extension.
/// Returns `ParserError::UnsupportedFormat` if the extension is not recognized.
pub fn detect_format(path: &Path) -> Result<DocumentFormat> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .ok_or(ParserError::InvalidExtension)?;

    match extension.to_lowercase().as_str() {
        "yaml" | "yml" => Ok(DocumentFormat::Yaml),
        "toml" => Ok(DocumentFormat::Toml),
        "json" => Ok(DocumentFormat::Json),
        other => Err(ParserError::UnsupportedFormat(other.to_string())),
    }
}

fn from_document<T: DeserializeOwned>(content: &str, format: DocumentFormat) -> Result<T> {
    match format {
        DocumentFormat::Yaml => Ok(serde_yaml_ng::from_str(content)?),
        DocumentFormat::Toml => {
            toml::from_str(content).map_err(|e| ParserError::TomlError(e.to_string()))
        }
        DocumentFormat::Json => Ok(serde_json::from_str(content)?),
    }
}

/// Parse a schema from a string in the given format.
///
/// Patterns are compiled here; an invalid pattern or an unknown type name
/// is reported as a parse error of the underlying format.
pub fn parse_schema(content: &str, format: DocumentFormat) -> Result<Schema> {
    from_document(content, format)
}

/// Parse a schema from a YAML string.
///
/// # Example
///
/// ```rust
/// use records_parser::parse_schema_yaml;
///
/// let yaml = r#"
/// email:
///   type: string
///   maxLength: 50
///   pattern: '^[^\s@]+@[^\s@]+\.[^\s@]+$'
/// "#;
///
/// let schema = parse_schema_yaml(yaml).unwrap();
/// assert_eq!(schema.get("email").unwrap().max_length, Some(50));
/// ```
pub fn parse_schema_yaml(content: &str) -> Result<Schema> {
    parse_schema(content, DocumentFormat::Yaml)
}

/// Parse a schema from a TOML string.
///
/// # Example
///
/// ```rust
/// use records_parser::parse_schema_toml;
///
/// let toml = r#"
/// [name]
/// type = "string"
/// minLength = 1
///
/// [address.schema.city]
/// type = "string"
/// "#;
///
/// let schema = parse_schema_toml(toml).unwrap();
/// assert!(schema.get("address").unwrap().schema.is_some());
/// ```
pub fn parse_schema_toml(content: &str) -> Result<Schema> {
    parse_schema(content, DocumentFormat::Toml)
}

/// Parse a schema from a JSON string.
pub fn parse_schema_json(content: &str) -> Result<Schema> {
    parse_schema(content, DocumentFormat::Json)
}

/// Parse a schema from a file with automatic format detection.
///
/// ```no_run
/// use records_parser::parse_schema_file;
/// use std::path::Path;
///
/// let schema = parse_schema_file(Path::new("schemas/user.yml")).unwrap();
/// println!("Loaded schema with {} fields", schema.len());
/// ```
pub fn parse_schema_file(path: &Path) -> Result<Schema> {
    let format = detect_format(path)?;
    let content = std::fs::read_to_string(path)?;
    parse_schema(&content, format)
}

/// Parse data records from a string in the given format.
///
/// A mapping yields one record; a list yields one record per element.
pub fn parse_data(content: &str, format: DocumentFormat) -> Result<DataSet> {
    let document: DataValue = from_document(content, format)?;
    into_dataset(document)
}

/// Parse data records from a YAML string.
pub fn parse_data_yaml(content: &str) -> Result<DataSet> {
    parse_data(content, DocumentFormat::Yaml)
}

/// Parse data records from a TOML string. TOML documents always hold a
/// single record.
pub fn parse_data_toml(content: &str) -> Result<DataSet> {
    parse_data(content, DocumentFormat::Toml)
}

/// Parse data records from a JSON string.
pub fn parse_data_json(content: &str) -> Result<DataSet> {
    parse_data(content, DocumentFormat::Json)
}

/// Parse data records from a file with automatic format detection.
pub fn parse_data_file(path: &Path) -> Result<DataSet> {
    let format = detect_format(path)?;
    let content = std::fs::read_to_string(path)?;
    parse_data(&content, format)
}

fn into_dataset(document: DataValue) -> Result<DataSet> {
    match document {
        DataValue::Object(record) => Ok(DataSet::from(record)),
        DataValue::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                let found = item.type_name();
                item.into_record().ok_or(ParserError::NotARecordElement {
                    index,
                    found: found.to_string(),
                })
            })
            .collect(),
        other => Err(ParserError::NotARecord(other.type_name().to_string())),
    }
}
