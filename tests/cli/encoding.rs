//! Tests for secret encodings.

use crate::support::*;

fn generated(t: &Test, key: &str) -> String {
    env_value(&t.read_env(), key)
        .unwrap_or_else(|| panic!("{} missing", key))
        .to_string()
}

#[test]
fn test_hex_encoding() {
    let t = Test::new();

    assert_success(&t.run(&["S", "--encoding", "hex", "--length", "10"]));

    assert_hex_value(&t.read_env(), "S", 20);
}

#[test]
fn test_base64_encoding() {
    let t = Test::new();

    assert_success(&t.run(&["S", "-e", "base64", "-l", "32"]));

    let value = generated(&t, "S");
    assert_eq!(value.len(), 44);
    assert!(value.ends_with('='));
    assert!(value
        .trim_end_matches('=')
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '/'));
}

#[test]
fn test_base64url_encoding() {
    let t = Test::new();

    assert_success(&t.run(&["S", "--encoding", "base64url", "--length", "16"]));

    let value = generated(&t, "S");
    assert_eq!(value.len(), 22);
    assert!(!value.contains('='));
    assert!(value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
}

#[test]
fn test_encoding_is_case_insensitive() {
    let t = Test::new();

    assert_success(&t.run(&["S", "--encoding", "HEX", "-l", "2"]));

    assert_hex_value(&t.read_env(), "S", 4);
}

#[test]
fn test_encoding_from_environment_variable() {
    let t = Test::new();

    let output = t
        .cmd()
        .env("ADD_ENV_VAR_ENCODING", "base64url")
        .env("ADD_ENV_VAR_LENGTH", "16")
        .arg("S")
        .output()
        .unwrap();

    assert_success(&output);
    assert_eq!(generated(&t, "S").len(), 22);
}

#[test]
fn test_explicit_values_ignore_encoding() {
    let t = Test::new();

    assert_success(&t.run(&["PLAIN=abc", "-e", "base64"]));

    assert_eq!(t.read_env(), "PLAIN=abc");
}

#[test]
fn test_each_generated_secret_differs() {
    let t = Test::new();

    assert_success(&t.run(&["ONE", "TWO"]));

    assert_ne!(generated(&t, "ONE"), generated(&t, "TWO"));
}
