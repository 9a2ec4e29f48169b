//! Tests for the statement and predicate JSON shape

use fritoto::core::models::{
    DigestAlgorithm, FRIDAY_PREDICATE_TYPE, FridayPredicate, ResourceDescriptor,
    STATEMENT_TYPE_V1, Statement, rfc3339,
};
use fritoto::core::services::is_it_friday;
use serde_json::Value;
use test_case::test_case;

use crate::common::{SHA256_ABC, ts};

fn sample(time: &str, notes: Option<&str>) -> Statement {
    Statement::new(
        vec![ResourceDescriptor::new("dist/app").with_digest(DigestAlgorithm::Sha256, SHA256_ABC)],
        FridayPredicate::new(ts(time), notes.map(String::from)),
    )
}

#[test]
fn statement_has_in_toto_shape() {
    let json: Value = serde_json::to_value(sample("2025-09-26T10:30:00Z", Some("hi"))).unwrap();

    assert_eq!(json["_type"], STATEMENT_TYPE_V1);
    assert_eq!(json["predicateType"], FRIDAY_PREDICATE_TYPE);
    assert_eq!(json["subject"][0]["name"], "dist/app");
    assert_eq!(json["subject"][0]["digest"]["sha256"], SHA256_ABC);
    assert_eq!(json["predicate"]["builtOnFriday"], true);
    assert_eq!(json["predicate"]["buildTime"], "2025-09-26T10:30:00Z");
    assert_eq!(json["predicate"]["notes"], "hi");
}

#[test]
fn notes_omitted_when_absent() {
    let json: Value = serde_json::to_value(sample("2025-09-24T10:30:00Z", None)).unwrap();
    let predicate = json["predicate"].as_object().unwrap();

    assert!(!predicate.contains_key("notes"));
    assert_eq!(predicate["builtOnFriday"], false);
}

#[test]
fn pretty_json_uses_two_space_indent_and_newline() {
    let text = sample("2025-09-26T10:30:00Z", None).to_json_pretty().unwrap();

    assert!(text.starts_with("{\n  \"_type\""));
    assert!(text.ends_with("}\n"));
    assert!(text.contains("\n    \"builtOnFriday\": true"));
}

#[test_case("2025-09-26T10:30:00Z", "2025-09-26T10:30:00Z" ; "utc renders as Z")]
#[test_case("2025-09-26T10:30:00+00:00", "2025-09-26T10:30:00Z" ; "zero offset renders as Z")]
#[test_case("2025-09-26T23:30:00-05:00", "2025-09-26T23:30:00-05:00" ; "negative offset kept")]
#[test_case("2025-09-26T10:30:00.250+02:00", "2025-09-26T10:30:00.250+02:00" ; "millis kept")]
fn build_time_format(input: &str, expected: &str) {
    assert_eq!(rfc3339::format(&ts(input)), expected);
}

#[test]
fn parsed_statement_agrees_with_evaluator() {
    let text = sample("2025-09-26T23:30:00-05:00", None).to_json_pretty().unwrap();
    let parsed: Statement = serde_json::from_str(&text).unwrap();

    assert_eq!(parsed.predicate.built_on_friday, is_it_friday(&parsed.predicate.build_time));
    assert!(parsed.predicate.built_on_friday);
    assert_eq!(parsed, sample("2025-09-26T23:30:00-05:00", None));
}

#[test]
fn tampered_flag_is_detected() {
    let mut predicate = FridayPredicate::new(ts("2025-09-24T10:30:00Z"), None);
    assert!(predicate.is_consistent());

    predicate.built_on_friday = true;
    assert!(!predicate.is_consistent());
}

#[test]
fn digest_algorithm_names() {
    assert_eq!(DigestAlgorithm::Sha256.to_string(), "sha256");
    assert_eq!("SHA-512".parse::<DigestAlgorithm>().unwrap(), DigestAlgorithm::Sha512);
    assert!("md5".parse::<DigestAlgorithm>().is_err());
}
