//! Declarative field constraints for the storefront forms.
//!
//! A [`Schema`] checks a JSON payload field by field and reports every
//! violated field at once, in schema order. Only the first failing rule of a
//! field is reported. Keys outside the schema are dropped from the parsed
//! value.

use std::sync::LazyLock;

use regex::Regex;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use shared::protocol::{FieldViolation, ViolationCode};
use thiserror::Error;

/// Local part of `[A-Za-z0-9_+.-]` that neither starts nor ends with a dot,
/// then dot-separated domain labels ending in an alphabetic TLD.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9_+-](?:[A-Za-z0-9_+.-]*[A-Za-z0-9_+-])?@(?:[A-Za-z0-9][A-Za-z0-9-]*\.)+[A-Za-z]{2,}$",
    )
    .expect("email pattern compiles")
});

pub const BODY_FIELD: &str = "body";

#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub name: &'static str,
    pub label: &'static str,
    pub min_chars: usize,
    pub max_chars: Option<usize>,
    pub email: bool,
}

impl FieldRule {
    const fn text(name: &'static str, label: &'static str, min_chars: usize) -> Self {
        Self {
            name,
            label,
            min_chars,
            max_chars: None,
            email: false,
        }
    }

    const fn email(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            min_chars: 0,
            max_chars: None,
            email: true,
        }
    }

    const fn at_most(mut self, max_chars: usize) -> Self {
        self.max_chars = Some(max_chars);
        self
    }

    fn check(&self, value: Option<&Value>) -> Result<(), FieldViolation> {
        let value = match value {
            None | Some(Value::Null) => {
                return Err(self.violation(
                    ViolationCode::Required,
                    format!("{} is required.", self.label),
                ))
            }
            Some(Value::String(value)) => value,
            Some(_) => {
                return Err(self.violation(
                    ViolationCode::InvalidType,
                    format!("{} must be a string.", self.label),
                ))
            }
        };

        let chars = value.chars().count();
        if chars < self.min_chars {
            return Err(self.violation(
                ViolationCode::TooSmall,
                format!(
                    "{} must be at least {}.",
                    self.label,
                    characters(self.min_chars)
                ),
            ));
        }
        if let Some(max_chars) = self.max_chars {
            if chars > max_chars {
                return Err(self.violation(
                    ViolationCode::TooBig,
                    format!("{} must be at most {}.", self.label, characters(max_chars)),
                ));
            }
        }
        if self.email && !is_valid_email(value) {
            return Err(self.violation(
                ViolationCode::InvalidEmail,
                "Please enter a valid email address.",
            ));
        }
        Ok(())
    }

    fn violation(&self, code: ViolationCode, message: impl Into<String>) -> FieldViolation {
        FieldViolation::new(self.name, code, message)
    }
}

fn characters(count: usize) -> String {
    if count == 1 {
        "1 character".to_string()
    } else {
        format!("{count} characters")
    }
}

pub fn is_valid_email(value: &str) -> bool {
    !value.contains("..") && EMAIL_PATTERN.is_match(value)
}

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("{} field violation(s)", .0.len())]
    Invalid(Vec<FieldViolation>),
    #[error("validated payload did not decode: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy)]
pub struct Schema {
    pub fields: &'static [FieldRule],
}

impl Schema {
    /// Validates `payload` and returns only the schema's fields.
    pub fn validate(&self, payload: &Value) -> Result<Map<String, Value>, Vec<FieldViolation>> {
        let Value::Object(object) = payload else {
            return Err(vec![FieldViolation::new(
                BODY_FIELD,
                ViolationCode::InvalidType,
                "Request body must be a JSON object.",
            )]);
        };

        let violations: Vec<FieldViolation> = self
            .fields
            .iter()
            .filter_map(|rule| rule.check(object.get(rule.name)).err())
            .collect();
        if !violations.is_empty() {
            return Err(violations);
        }

        Ok(self
            .fields
            .iter()
            .filter_map(|rule| {
                object
                    .get(rule.name)
                    .map(|value| (rule.name.to_string(), value.clone()))
            })
            .collect())
    }

    pub fn parse<T: DeserializeOwned>(&self, payload: &Value) -> Result<T, SchemaError> {
        let fields = self.validate(payload).map_err(SchemaError::Invalid)?;
        Ok(serde_json::from_value(Value::Object(fields))?)
    }
}

pub const CONTACT_SCHEMA: Schema = Schema {
    fields: &[
        FieldRule::text("name", "Name", 2).at_most(100),
        FieldRule::email("email", "Email").at_most(255),
        FieldRule::text("subject", "Subject", 1).at_most(200),
        FieldRule::text("message", "Message", 10).at_most(2000),
    ],
};

pub const NEWSLETTER_SCHEMA: Schema = Schema {
    fields: &[FieldRule::email("email", "Email")],
};

#[cfg(test)]
#[path = "tests/schema_tests.rs"]
mod tests;
