//! Tests for adding variables.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_add_to_missing_file_creates_it() {
    let t = Test::new();

    let output = t.run(&["FOO=bar", "BAZ", "--length", "4"]);

    assert_success(&output);
    let env = t.read_env();
    assert_eq!(env_value(&env, "FOO"), Some("bar"));
    assert_hex_value(&env, "BAZ", 8);
    assert!(env.starts_with("FOO=bar\nBAZ="));
    assert!(!env.ends_with('\n'));
}

#[test]
fn test_prints_confirmation_with_absolute_path() {
    let t = Test::new();

    let output = t.run(&["FOO=bar"]);

    assert_success(&output);
    assert_stdout_contains(&output, "Updated ");
    assert_stdout_contains(&output, "successfully.");
    let canonical = t.dir.path().canonicalize().unwrap();
    let out = stdout(&output);
    assert!(
        out.contains(&t.path(".env").display().to_string())
            || out.contains(&canonical.join(".env").display().to_string()),
        "path missing from: {}",
        out
    );
}

#[test]
fn test_confirmation_is_single_plain_line() {
    let t = Test::new();

    t.cmd()
        .arg("FOO=bar")
        .assert()
        .success()
        .stdout(
            predicate::str::starts_with("Updated ")
                .and(predicate::str::ends_with(".env successfully.\n"))
                .and(predicate::str::contains("✓").not())
                .and(predicate::str::contains("\n").count(1)),
        );
}

#[test]
fn test_default_secret_is_32_bytes_hex() {
    let t = Test::new();

    assert_success(&t.run(&["JWT_SECRET"]));

    assert_hex_value(&t.read_env(), "JWT_SECRET", 64);
}

#[test]
fn test_new_variables_are_appended() {
    let t = Test::with_env(WELL_FORMED_ENV);

    assert_success(&t.run(&["NEW_ONE=1", "NEW_TWO=2"]));

    assert_eq!(
        t.read_env(),
        format!("{}\nNEW_ONE=1\nNEW_TWO=2", WELL_FORMED_ENV)
    );
}

#[test]
fn test_value_may_contain_equals() {
    let t = Test::new();

    assert_success(&t.run(&["URL=postgres://h/db?sslmode=require"]));

    assert_eq!(t.read_env(), "URL=postgres://h/db?sslmode=require");
}

#[test]
fn test_empty_value_generates_secret() {
    let t = Test::new();

    assert_success(&t.run(&["TOKEN=", "-l", "8"]));

    assert_hex_value(&t.read_env(), "TOKEN", 16);
}

#[test]
fn test_messy_file_is_normalized() {
    let t = Test::with_env(MESSY_ENV);

    assert_success(&t.run(&["C=3"]));

    assert_eq!(t.read_env(), "A=1\nB=2\nFLAG=\nC=3");
}

#[test]
fn test_custom_file() {
    let t = Test::new();

    let output = t.run(&["KEY=value", "--file", ".env.local"]);

    assert_success(&output);
    assert_eq!(t.read(".env.local"), "KEY=value");
    assert!(!t.path(".env").exists());
    assert_stdout_contains(&output, ".env.local");
}

#[test]
fn test_file_from_environment_variable() {
    let t = Test::new();

    let output = t
        .cmd()
        .env("ADD_ENV_VAR_FILE", ".env.test")
        .arg("KEY=value")
        .output()
        .unwrap();

    assert_success(&output);
    assert_eq!(t.read(".env.test"), "KEY=value");
}

#[test]
fn test_absolute_file_path() {
    let t = Test::new();
    let target = t.path("abs.env");

    assert_success(&t.run(&["KEY=value", "-f", target.to_str().unwrap()]));

    assert_eq!(t.read("abs.env"), "KEY=value");
}

#[cfg(unix)]
#[test]
fn test_created_file_is_private() {
    use std::os::unix::fs::PermissionsExt;

    let t = Test::new();
    assert_success(&t.run(&["KEY=value"]));

    let mode = std::fs::metadata(t.path(".env")).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode, 0o600);
}
