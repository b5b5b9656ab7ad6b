use std::sync::Arc;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use serde_json::Value;
use shared::protocol::{
    ContactFormData, FieldViolation, HealthResponse, NewsletterFormData, SubmissionResponse,
};
use thiserror::Error;
use tracing::debug;

pub mod schema;
mod sink;

pub use schema::{Schema, SchemaError, CONTACT_SCHEMA, NEWSLETTER_SCHEMA};
pub use sink::{LogSink, SubmissionSink};

pub const CONTACT_ACCEPTED: &str = "Contact form submitted successfully";
pub const CONTACT_REJECTED: &str = "Invalid form data";
pub const NEWSLETTER_ACCEPTED: &str = "Newsletter subscription successful";
pub const NEWSLETTER_REJECTED: &str = "Invalid email address";
pub const GENERIC_FAILURE: &str = "Server error processing your request";

#[derive(Clone)]
pub struct ApiContext {
    pub sink: Arc<dyn SubmissionSink>,
}

impl ApiContext {
    pub fn new(sink: Arc<dyn SubmissionSink>) -> Self {
        Self { sink }
    }
}

impl Default for ApiContext {
    fn default() -> Self {
        Self::new(Arc::new(LogSink))
    }
}

#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("{message}")]
    Invalid {
        message: &'static str,
        errors: Vec<FieldViolation>,
    },
    #[error("{context}: {source}")]
    Internal {
        context: &'static str,
        source: anyhow::Error,
    },
}

impl SubmissionError {
    /// Body sent to the caller; internal detail never leaves the server.
    pub fn response(&self) -> SubmissionResponse {
        match self {
            Self::Invalid { message, errors } => {
                SubmissionResponse::rejected(*message, errors.clone())
            }
            Self::Internal { .. } => SubmissionResponse::failed(GENERIC_FAILURE),
        }
    }

    fn from_schema(error: SchemaError, rejected: &'static str, context: &'static str) -> Self {
        match error {
            SchemaError::Invalid(errors) => Self::Invalid {
                message: rejected,
                errors,
            },
            SchemaError::Decode(source) => Self::Internal {
                context,
                source: source.into(),
            },
        }
    }
}

pub async fn submit_contact(
    ctx: &ApiContext,
    payload: &Value,
) -> Result<SubmissionResponse, SubmissionError> {
    const CONTEXT: &str = "error processing contact form";

    let form: ContactFormData = CONTACT_SCHEMA
        .parse(payload)
        .map_err(|error| SubmissionError::from_schema(error, CONTACT_REJECTED, CONTEXT))?;
    ctx.sink
        .record_contact(&form)
        .await
        .map_err(|source| SubmissionError::Internal {
            context: CONTEXT,
            source,
        })?;
    debug!("contact form accepted");
    accepted(CONTACT_ACCEPTED, &form, CONTEXT)
}

pub async fn subscribe_newsletter(
    ctx: &ApiContext,
    payload: &Value,
) -> Result<SubmissionResponse, SubmissionError> {
    const CONTEXT: &str = "error processing newsletter subscription";

    let form: NewsletterFormData = NEWSLETTER_SCHEMA
        .parse(payload)
        .map_err(|error| SubmissionError::from_schema(error, NEWSLETTER_REJECTED, CONTEXT))?;
    ctx.sink
        .record_newsletter(&form)
        .await
        .map_err(|source| SubmissionError::Internal {
            context: CONTEXT,
            source,
        })?;
    debug!("newsletter subscription accepted");
    accepted(NEWSLETTER_ACCEPTED, &form, CONTEXT)
}

fn accepted<T: Serialize>(
    message: &'static str,
    form: &T,
    context: &'static str,
) -> Result<SubmissionResponse, SubmissionError> {
    let data = serde_json::to_value(form).map_err(|source| SubmissionError::Internal {
        context,
        source: source.into(),
    })?;
    Ok(SubmissionResponse::accepted(message, data))
}

pub fn health_report() -> HealthResponse {
    health_report_at(Utc::now())
}

/// `timestamp` uses millisecond precision with a `Z` suffix.
pub fn health_report_at(now: DateTime<Utc>) -> HealthResponse {
    HealthResponse {
        status: "OK".to_string(),
        timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
