use serde_json::json;
use userkit_model::{is_valid_username, validate_request};

// ── validate_request: body shape ─────────────────────────────────

#[test]
fn null_body_fails_even_with_no_required_fields() {
    assert!(!validate_request(&json!(null), &[]));
}

#[test]
fn array_body_fails_the_type_test() {
    assert!(!validate_request(&json!([{"a": "x"}]), &["a"]));
    assert!(!validate_request(&json!([]), &[]));
}

#[test]
fn scalar_bodies_fail() {
    assert!(!validate_request(&json!("body"), &[]));
    assert!(!validate_request(&json!(42), &[]));
    assert!(!validate_request(&json!(true), &[]));
}

#[test]
fn empty_object_with_no_required_fields_passes() {
    assert!(validate_request(&json!({}), &[]));
}

// ── validate_request: required fields ────────────────────────────

#[test]
fn missing_field_fails() {
    assert!(!validate_request(&json!({}), &["a"]));
}

#[test]
fn present_non_empty_field_passes() {
    assert!(validate_request(&json!({"a": "x"}), &["a"]));
}

#[test]
fn empty_string_fails() {
    assert!(!validate_request(&json!({"a": ""}), &["a"]));
}

#[test]
fn whitespace_only_string_fails() {
    assert!(!validate_request(&json!({"a": "   \t "}), &["a"]));
}

#[test]
fn null_value_counts_as_absent() {
    assert!(!validate_request(&json!({"a": null}), &["a"]));
}

#[test]
fn zero_and_false_render_non_empty() {
    assert!(validate_request(&json!({"a": 0}), &["a"]));
    assert!(validate_request(&json!({"a": false}), &["a"]));
}

#[test]
fn every_required_field_must_pass() {
    let body = json!({"username": "ada", "email": "", "role": "admin"});
    assert!(!validate_request(&body, &["username", "email"]));
    assert!(validate_request(&body, &["username", "role"]));
}

#[test]
fn extra_fields_are_ignored() {
    assert!(validate_request(&json!({"a": "x", "b": ""}), &["a"]));
}

// ── is_valid_username ────────────────────────────────────────────

#[test]
fn accepts_typical_usernames() {
    assert!(is_valid_username(&json!("valid_user1")));
    assert!(is_valid_username(&json!("abc")));
    assert!(is_valid_username(&json!("ABC_123")));
    assert!(is_valid_username(&json!("___")));
}

#[test]
fn enforces_length_bounds_inclusively() {
    assert!(!is_valid_username(&json!("ab")));
    assert!(is_valid_username(&json!("a".repeat(3))));
    assert!(is_valid_username(&json!("a".repeat(20))));
    assert!(!is_valid_username(&json!("a".repeat(21))));
}

#[test]
fn rejects_disallowed_characters() {
    assert!(!is_valid_username(&json!("bad name!")));
    assert!(!is_valid_username(&json!("dash-ed")));
    assert!(!is_valid_username(&json!("dotted.name")));
    assert!(!is_valid_username(&json!("héllo")));
}

#[test]
fn the_whole_string_must_match() {
    assert!(!is_valid_username(&json!("good_part bad part")));
    assert!(!is_valid_username(&json!(" padded ")));
}

#[test]
fn rejects_non_string_input() {
    assert!(!is_valid_username(&json!(123456)));
    assert!(!is_valid_username(&json!(null)));
    assert!(!is_valid_username(&json!(["name"])));
    assert!(!is_valid_username(&json!({"username": "ada"})));
}
