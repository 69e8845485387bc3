//! Integration tests for the validation pipeline.
//!
//! These tests run complete schemas, loaded the same way callers load them,
//! against realistic registration records.

use pretty_assertions::assert_eq;
use records_core::{DataValue, Record, Schema};
use records_parser::{parse_schema_json, parse_schema_toml, parse_schema_yaml};
use records_validator::{DataValidator, RecordValidator, SchemaLinter, validate};
use serde_json::json;

const REGISTRATION_SCHEMA: &str = r#"
name:
  type: string
  minLength: 1
age:
  type: number
  min: 18
address:
  type: object
  schema:
    street:
      schema:
        house: { type: string, minLength: 1 }
        floor: { type: number, minLength: 1 }
        apartment: { type: number, minLength: 1, optional: true }
    city: { type: string, minLength: 1 }
email:
  type: string
  maxLength: 50
  pattern: '^[^\s@]+@[^\s@]+\.[^\s@]+$'
password:
  type: string
  minLength: 8
  pattern: '^(?=.*[A-Z])(?=.*\d).+$'
passwordConfirmation:
  equal: password
"#;

fn registration_schema() -> Schema {
    parse_schema_yaml(REGISTRATION_SCHEMA).expect("registration schema must parse")
}

fn record(value: serde_json::Value) -> Record {
    DataValue::from(value).into_record().expect("test data must be an object")
}

fn valid_registration() -> serde_json::Value {
    json!({
        "name": "John Doe",
        "age": 25,
        "address": {
            "street": { "house": "Test name", "floor": 12 },
            "city": "New York"
        },
        "email": "tsaryk2004@gmail.com",
        "password": "Password123",
        "passwordConfirmation": "Password123"
    })
}

#[test]
fn test_valid_registration_passes() {
    let errors = validate(&record(valid_registration()), &registration_schema());
    assert!(errors.is_empty(), "unexpected errors: {:?}", errors);
}

#[test]
fn test_invalid_registration_reports_every_field_in_order() {
    let data = record(json!({
        "name": "",
        "age": "25",
        "address": {
            "street": { "floor": "twelve" },
            "city": 42
        },
        "email": format!("{}@example.com", "a".repeat(45)),
        "password": "short",
        "passwordConfirmation": "Password123"
    }));

    assert_eq!(
        validate(&data, &registration_schema()),
        vec![
            "name should have a minimum length of 1.",
            "age should be of type number.",
            "address.street.house is required.",
            "address.street.floor should be of type number.",
            "address.city should be of type string.",
            "email should have a maximum length of 50.",
            "password does not match the required pattern.",
            "password should have a minimum length of 8.",
            "passwordConfirmation should be equal to password.",
        ]
    );
}

#[test]
fn test_address_must_be_object() {
    let mut data = valid_registration();
    data["address"] = json!("221B Baker Street");

    assert_eq!(
        validate(&record(data), &registration_schema()),
        vec![
            "address should be of type object.",
            "address should be of type object."
        ]
    );
}

#[test]
fn test_round_trip_scenario() {
    let schema = parse_schema_json(
        r#"{
            "name": { "type": "string", "minLength": 1 },
            "age": { "type": "number" },
            "address": { "schema": { "city": { "type": "string", "minLength": 1 } } }
        }"#,
    )
    .unwrap();

    let mut data = json!({
        "name": "John Doe",
        "age": 25,
        "address": { "city": "New York" }
    });
    assert!(validate(&record(data.clone()), &schema).is_empty());

    data["age"] = json!("25");
    assert_eq!(
        validate(&record(data), &schema),
        vec!["age should be of type number."]
    );
}

#[test]
fn test_formats_agree() {
    let yaml = parse_schema_yaml(
        r#"
username: { type: string, minLength: 3, maxLength: 12 }
profile:
  schema:
    bio: { type: string, maxLength: 10, optional: true }
"#,
    )
    .unwrap();
    let toml = parse_schema_toml(
        r#"
[username]
type = "string"
minLength = 3
maxLength = 12

[profile.schema.bio]
type = "string"
maxLength = 10
optional = true
"#,
    )
    .unwrap();
    let json = parse_schema_json(
        r#"{
            "username": { "type": "string", "minLength": 3, "maxLength": 12 },
            "profile": { "schema": { "bio": { "type": "string", "maxLength": 10, "optional": true } } }
        }"#,
    )
    .unwrap();

    let data = record(json!({ "username": "xy", "profile": { "bio": "far too long a bio" } }));
    let expected = vec![
        "username should have a minimum length of 3.",
        "profile.bio should have a maximum length of 10.",
    ];

    assert_eq!(validate(&data, &yaml), expected);
    assert_eq!(validate(&data, &toml), expected);
    assert_eq!(validate(&data, &json), expected);
}

#[test]
fn test_typed_violations_expose_paths() {
    let data = record(json!({
        "name": "John Doe",
        "age": 25,
        "address": { "street": { "house": "" }, "city": "New York" },
        "email": "tsaryk2004@gmail.com",
        "password": "Password123",
        "passwordConfirmation": "Password123"
    }));

    let violations = RecordValidator::new().validate(&data, &registration_schema());
    let paths: Vec<String> = violations.iter().map(|v| v.path()).collect();
    assert_eq!(
        paths,
        vec!["address.street.house", "address.street.floor"]
    );
}

#[test]
fn test_registration_schema_lint() {
    let warnings: Vec<String> = SchemaLinter::new()
        .lint(&registration_schema())
        .iter()
        .map(ToString::to_string)
        .collect();

    assert_eq!(
        warnings,
        vec![
            "Field 'age' uses 'min', which is not enforced",
            "Field 'address.street.floor' has length bounds but values of type number have no length",
            "Field 'address.street.apartment' has length bounds but values of type number have no length",
        ]
    );
}

#[test]
fn test_concurrent_validation_shares_schema() {
    let schema = registration_schema();
    let validator = DataValidator::new();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| validate(&record(valid_registration()), &schema)))
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap().is_empty());
        }
    });

    let report = validator.validate_definition(&schema, &Default::default());
    assert!(report.passed);
}
