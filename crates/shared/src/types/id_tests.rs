//! Tests for typed ID wrappers.

use std::str::FromStr;

use rstest::rstest;
use uuid::Uuid;

use super::id::{CompanyId, CustomerId};

#[test]
fn test_new_ids_are_unique() {
    let a = CustomerId::new();
    let b = CustomerId::new();
    assert_ne!(a, b);
}

#[test]
fn test_from_uuid_roundtrip() {
    let uuid = Uuid::new_v4();
    let id = CustomerId::from_uuid(uuid);
    assert_eq!(id.into_inner(), uuid);
}

#[rstest]
#[case("00000000-0000-0000-0000-000000000000")]
#[case("0192d5a0-1b2c-7def-8123-456789abcdef")]
fn test_parse_valid(#[case] input: &str) {
    assert!(CompanyId::from_str(input).is_ok());
}

#[rstest]
#[case("")]
#[case("not-a-uuid")]
#[case("0192d5a0-1b2c-7def-8123")]
fn test_parse_invalid(#[case] input: &str) {
    assert!(CompanyId::from_str(input).is_err());
}

#[test]
fn test_display_matches_uuid() {
    let uuid = Uuid::new_v4();
    let id = CompanyId::from_uuid(uuid);
    assert_eq!(id.to_string(), uuid.to_string());
}

#[test]
fn test_serde_transparent() {
    let id = CustomerId::new();
    let json = serde_json::to_string(&id).unwrap();
    assert_eq!(json, format!("\"{id}\""));

    let back: CustomerId = serde_json::from_str(&json).unwrap();
    assert_eq!(back, id);
}
