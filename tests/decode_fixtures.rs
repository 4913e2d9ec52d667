#![expect(
    clippy::unwrap_used,
    clippy::panic,
    reason = "test code uses unwrap/panic for concise assertions"
)]

use serial_errors::{
    DecoderConfig, Descriptor, Error, ErrorKind, SerializationError, decode_indexed, decode_object,
};

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct Case {
    case: String,
    input: serde_json::Value,
    expected_kind: Option<String>,
    expected_message: Option<String>,
}

fn load_fixture<T: serde::de::DeserializeOwned>(filename: &str) -> T {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let path = format!("{manifest_dir}/tests/fixtures/{filename}");
    let data =
        std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("failed to read {path}: {e}"));
    serde_json::from_str(&data).unwrap_or_else(|e| panic!("failed to parse {path}: {e}"))
}

fn person() -> Descriptor {
    load_fixture("person_descriptor.json")
}

#[test]
fn person_cases_from_fixture() {
    let descriptor = person();
    let cases: Vec<Case> = load_fixture("person_cases.json");
    assert!(!cases.is_empty());

    for case in &cases {
        let result = decode_object(&descriptor, &case.input, &DecoderConfig::default());
        match (&case.expected_kind, result) {
            (None, Ok(record)) => {
                assert_eq!(record.serial_name(), "Person", "case {}", case.case);
            }
            (Some(kind), Err(err)) => {
                assert_eq!(err.kind().as_ref(), kind, "wrong kind for {}", case.case);
                assert_eq!(
                    Some(err.to_string()),
                    case.expected_message,
                    "wrong message for {}",
                    case.case
                );
            }
            (None, Err(err)) => panic!("case {} failed unexpectedly: {err}", case.case),
            (Some(kind), Ok(_)) => panic!("case {} decoded, expected {kind}", case.case),
        }
    }
}

#[test]
fn lenient_config_from_json_skips_unknown_keys() {
    let descriptor = person();
    let config = DecoderConfig::from_json(r#"{"ignoreUnknownKeys": true}"#).unwrap();
    let input = serde_json::json!({"name": "Ann", "age": 41, "nickname": "A"});
    let record = decode_object(&descriptor, &input, &config).unwrap();
    assert_eq!(record.to_json(), serde_json::json!({"name": "Ann", "age": 41}));
}

#[test]
fn positional_decode_reports_unknown_index() {
    let descriptor = person();
    let entries = vec![(0, serde_json::json!("Ann")), (3, serde_json::json!(1))];
    let err = decode_indexed(&descriptor, &entries).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownField);
    assert_eq!(err.to_string(), "An unknown field for index 3");
}

#[test]
fn one_broad_handler_covers_decode_and_validation() {
    fn load_adult(descriptor: &Descriptor, input: &serde_json::Value) -> Result<i64, Error> {
        let record = decode_object(descriptor, input, &DecoderConfig::default())?;
        let age = record
            .get("age")
            .and_then(serde_json::Value::as_i64)
            .unwrap_or_default();
        Error::require(age >= 18, || format!("age {age} is below 18"))?;
        Ok(age)
    }

    let descriptor = person();
    let outcomes: Vec<String> = [
        serde_json::json!({"name": "Ann", "age": 41}),
        serde_json::json!({"name": "Bo", "age": 9}),
        serde_json::json!({"name": "Cy"}),
    ]
    .iter()
    .map(|input| match load_adult(&descriptor, input) {
        Ok(age) => format!("ok {age}"),
        Err(Error::Serialization(err)) => format!("{}: {err}", err.kind()),
        Err(err) => err.to_string(),
    })
    .collect();

    assert_eq!(
        outcomes,
        vec![
            "ok 41".to_string(),
            "invalid argument: age 9 is below 18".to_string(),
            "missing_field: Field 'age' is required for type with serial name 'Person', but it was missing"
                .to_string(),
        ]
    );
}

#[test]
fn recovered_error_matches_original() {
    let descriptor = person();
    let err = decode_object(
        &descriptor,
        &serde_json::json!({}),
        &DecoderConfig::default(),
    )
    .unwrap_err();
    let recovered = std::thread::spawn({
        let err = err.clone();
        move || err.recover()
    })
    .join()
    .unwrap();
    assert_eq!(recovered.kind(), err.kind());
    assert_eq!(recovered.to_string(), err.to_string());
}

#[test]
fn public_generic_constructors() {
    let err = SerializationError::with_message("unsupported schema");
    assert_eq!(err.kind(), ErrorKind::Generic);
    assert_eq!(err.message(), Some("unsupported schema"));
    assert_eq!(SerializationError::default().message(), None);
}
