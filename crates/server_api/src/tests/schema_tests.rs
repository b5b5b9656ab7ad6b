use super::*;
use serde_json::json;
use shared::protocol::ContactFormData;

fn valid_contact() -> Value {
    json!({
        "name": "Al",
        "email": "a@b.com",
        "subject": "hi",
        "message": "0123456789"
    })
}

#[test]
fn accepts_minimal_contact_payload() {
    let form: ContactFormData = CONTACT_SCHEMA.parse(&valid_contact()).expect("valid");
    assert_eq!(form.name, "Al");
    assert_eq!(form.message, "0123456789");
}

#[test]
fn drops_keys_outside_the_schema() {
    let mut payload = valid_contact();
    payload["phone"] = json!("555-0100");
    let fields = CONTACT_SCHEMA.validate(&payload).expect("valid");
    assert!(!fields.contains_key("phone"));
    assert_eq!(fields.len(), 4);
}

#[test]
fn short_name_is_too_small() {
    let mut payload = valid_contact();
    payload["name"] = json!("A");
    let violations = CONTACT_SCHEMA.validate(&payload).expect_err("invalid");
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].field, "name");
    assert_eq!(violations[0].code, ViolationCode::TooSmall);
    assert_eq!(violations[0].message, "Name must be at least 2 characters.");
}

#[test]
fn reports_every_violated_field_in_schema_order() {
    let payload = json!({
        "name": "x".repeat(101),
        "email": 42,
        "message": "too short"
    });
    let violations = CONTACT_SCHEMA.validate(&payload).expect_err("invalid");
    let summary: Vec<(&str, ViolationCode)> = violations
        .iter()
        .map(|violation| (violation.field.as_str(), violation.code))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("name", ViolationCode::TooBig),
            ("email", ViolationCode::InvalidType),
            ("subject", ViolationCode::Required),
            ("message", ViolationCode::TooSmall),
        ]
    );
}

#[test]
fn empty_subject_is_rejected() {
    let mut payload = valid_contact();
    payload["subject"] = json!("");
    let violations = CONTACT_SCHEMA.validate(&payload).expect_err("invalid");
    assert_eq!(violations[0].field, "subject");
    assert_eq!(violations[0].message, "Subject must be at least 1 character.");
}

#[test]
fn null_counts_as_missing() {
    let mut payload = valid_contact();
    payload["email"] = Value::Null;
    let violations = CONTACT_SCHEMA.validate(&payload).expect_err("invalid");
    assert_eq!(violations[0].code, ViolationCode::Required);
}

#[test]
fn lengths_count_characters_not_bytes() {
    let mut payload = valid_contact();
    payload["name"] = json!("Zoë");
    payload["message"] = json!("é".repeat(2000));
    CONTACT_SCHEMA.validate(&payload).expect("valid");

    payload["message"] = json!("é".repeat(2001));
    let violations = CONTACT_SCHEMA.validate(&payload).expect_err("invalid");
    assert_eq!(violations[0].code, ViolationCode::TooBig);
}

#[test]
fn overlong_email_is_too_big_before_format_is_checked() {
    let mut payload = valid_contact();
    payload["email"] = json!(format!("{}@example.com", "a".repeat(250)));
    let violations = CONTACT_SCHEMA.validate(&payload).expect_err("invalid");
    assert_eq!(violations[0].field, "email");
    assert_eq!(violations[0].code, ViolationCode::TooBig);
}

#[test]
fn non_object_body_is_a_single_body_violation() {
    for payload in [Value::Null, json!([]), json!("email")] {
        let violations = NEWSLETTER_SCHEMA.validate(&payload).expect_err("invalid");
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, BODY_FIELD);
        assert_eq!(violations[0].code, ViolationCode::InvalidType);
    }
}

#[test]
fn newsletter_rejects_malformed_email() {
    let violations = NEWSLETTER_SCHEMA
        .validate(&json!({ "email": "not-an-email" }))
        .expect_err("invalid");
    assert_eq!(violations[0].code, ViolationCode::InvalidEmail);
}

#[test]
fn email_format_rules() {
    for valid in [
        "a@b.com",
        "first.last+tag@sub.example.co",
        "under_score@x-y.org",
    ] {
        assert!(is_valid_email(valid), "{valid} should be valid");
    }
    for invalid in [
        "not-an-email",
        ".leading@example.com",
        "trailing.@example.com",
        "double..dot@example.com",
        "user@example",
        "user@-example.com",
        "user@example.c",
        "user name@example.com",
        "@example.com",
    ] {
        assert!(!is_valid_email(invalid), "{invalid} should be invalid");
    }
}
