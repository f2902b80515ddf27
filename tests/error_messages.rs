//! Tests to ensure validation messages are fixed and consistent
//!
//! The boundary layer surfaces these messages verbatim to callers, so every
//! rule violation must keep its exact text. These tests pin the full message
//! table through the public API.

use reqline::{validate, ValidationErrorKind};

fn message_for(reqline: &str) -> &'static str {
    validate(reqline)
        .expect_err("input should be rejected")
        .as_str()
}

#[test]
fn test_empty_input_message() {
    assert_eq!(message_for(""), "Reqline cannot be empty");
    assert_eq!(message_for("   "), "Reqline cannot be empty");
}

#[test]
fn test_missing_keyword_messages() {
    assert_eq!(
        message_for("GET https://example.com"),
        "Missing required HTTP keyword"
    );
    assert_eq!(message_for("HTTP GET"), "Missing required URL keyword");
    assert_eq!(
        message_for("HTTP GET URL https://example.com"),
        "Missing pipe delimiter"
    );
}

#[test]
fn test_spacing_messages() {
    assert_eq!(
        message_for("HTTP GET |URL https://example.com"),
        "Invalid spacing around pipe delimiter"
    );
    assert_eq!(
        message_for("HTTP GET| URL https://example.com"),
        "Invalid spacing around pipe delimiter"
    );
    assert_eq!(
        message_for("HTTP GET | URL  https://example.com"),
        "Multiple spaces found where single space expected"
    );
    assert_eq!(
        message_for("HTTP GET | URL:https://example.com"),
        "Missing space after keyword"
    );
}

#[test]
fn test_case_messages() {
    assert_eq!(
        message_for("http GET | URL https://example.com"),
        "Keywords must be uppercase"
    );
    assert_eq!(
        message_for("HTTP get | URL https://example.com"),
        "HTTP method must be uppercase"
    );
}

#[test]
fn test_ordering_messages() {
    assert_eq!(
        message_for(r#"HEADERS {"a": "1"} | HTTP GET | URL https://example.com"#),
        "HTTP keyword must be first"
    );
    assert_eq!(
        message_for(r#"HTTP GET | HEADERS {"a": "1"} | URL https://example.com"#),
        "URL keyword must be second"
    );
    assert_eq!(
        message_for("HTTP GET | URL https://example.com | HTTP GET"),
        "Duplicate HTTP keyword"
    );
    assert_eq!(
        message_for("HTTP GET | URL https://example.com | URL https://other.com"),
        "Duplicate URL keyword"
    );
}

#[test]
fn test_value_messages() {
    assert_eq!(
        message_for("HTTP PUT | URL https://example.com"),
        "Invalid HTTP method. Only GET and POST are supported"
    );
    assert_eq!(
        message_for("HTTP GET | URL example.com"),
        "Invalid URL format"
    );
    assert_eq!(
        message_for("HTTP GET | URL https://example.com | HEADERS {bad}"),
        "Invalid JSON format in HEADERS section"
    );
    assert_eq!(
        message_for("HTTP GET | URL https://example.com | QUERY {bad}"),
        "Invalid JSON format in QUERY section"
    );
    assert_eq!(
        message_for("HTTP GET | URL https://example.com | BODY {bad}"),
        "Invalid JSON format in BODY section"
    );
    assert_eq!(
        message_for("HTTP GET | URL https://example.com | COOKIES {}"),
        "Unknown keyword found"
    );
}

#[test]
fn test_first_violation_wins() {
    // Two problems (lowercase keyword, bad JSON): the scan reports the
    // earlier segment's violation only.
    assert_eq!(
        message_for("http GET | URL https://example.com | HEADERS {bad}"),
        "Keywords must be uppercase"
    );
}

#[test]
fn test_kind_equality_is_exposed() {
    assert_eq!(
        validate("HTTP PUT | URL https://example.com").unwrap_err(),
        ValidationErrorKind::InvalidHttpMethod
    );
}
