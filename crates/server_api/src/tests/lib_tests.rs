use super::*;
use anyhow::anyhow;
use async_trait::async_trait;
use chrono::TimeZone;
use serde_json::json;
use shared::protocol::ViolationCode;
use tokio::sync::Mutex;

#[derive(Default)]
struct RecordingSink {
    contacts: Mutex<Vec<ContactFormData>>,
    subscribers: Mutex<Vec<String>>,
}

#[async_trait]
impl SubmissionSink for RecordingSink {
    async fn record_contact(&self, form: &ContactFormData) -> anyhow::Result<()> {
        self.contacts.lock().await.push(form.clone());
        Ok(())
    }

    async fn record_newsletter(&self, form: &NewsletterFormData) -> anyhow::Result<()> {
        self.subscribers.lock().await.push(form.email.clone());
        Ok(())
    }
}

struct FailingSink;

#[async_trait]
impl SubmissionSink for FailingSink {
    async fn record_contact(&self, _form: &ContactFormData) -> anyhow::Result<()> {
        Err(anyhow!("smtp relay refused connection"))
    }

    async fn record_newsletter(&self, _form: &NewsletterFormData) -> anyhow::Result<()> {
        Err(anyhow!("mailing list unavailable"))
    }
}

fn contact_payload() -> Value {
    json!({
        "name": "Al",
        "email": "a@b.com",
        "subject": "hi",
        "message": "0123456789"
    })
}

#[tokio::test]
async fn accepted_contact_reaches_the_sink_and_echoes_fields() {
    let sink = Arc::new(RecordingSink::default());
    let ctx = ApiContext::new(sink.clone());

    let response = submit_contact(&ctx, &contact_payload())
        .await
        .expect("accepted");
    assert!(response.success);
    assert_eq!(response.message, CONTACT_ACCEPTED);
    assert_eq!(response.data.expect("data")["subject"], "hi");
    assert!(response.errors.is_none());

    let contacts = sink.contacts.lock().await;
    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0].email, "a@b.com");
}

#[tokio::test]
async fn invalid_contact_never_reaches_the_sink() {
    let sink = Arc::new(RecordingSink::default());
    let ctx = ApiContext::new(sink.clone());
    let mut payload = contact_payload();
    payload["name"] = json!("A");

    let err = submit_contact(&ctx, &payload).await.expect_err("invalid");
    let body = err.response();
    assert!(!body.success);
    assert_eq!(body.message, CONTACT_REJECTED);
    let errors = body.errors.expect("errors");
    assert_eq!(errors[0].field, "name");
    assert!(sink.contacts.lock().await.is_empty());
}

#[tokio::test]
async fn newsletter_rejection_uses_its_own_message() {
    let ctx = ApiContext::default();
    let err = subscribe_newsletter(&ctx, &json!({ "email": "not-an-email" }))
        .await
        .expect_err("invalid");
    let SubmissionError::Invalid { message, errors } = &err else {
        panic!("expected validation failure");
    };
    assert_eq!(*message, NEWSLETTER_REJECTED);
    assert_eq!(errors[0].code, ViolationCode::InvalidEmail);
}

#[tokio::test]
async fn newsletter_subscription_is_recorded() {
    let sink = Arc::new(RecordingSink::default());
    let ctx = ApiContext::new(sink.clone());
    let response = subscribe_newsletter(&ctx, &json!({ "email": "reader@aroma.cafe" }))
        .await
        .expect("accepted");
    assert_eq!(response.message, NEWSLETTER_ACCEPTED);
    assert_eq!(
        sink.subscribers.lock().await.as_slice(),
        ["reader@aroma.cafe".to_string()]
    );
}

#[tokio::test]
async fn sink_failure_hides_detail_from_the_caller() {
    let ctx = ApiContext::new(Arc::new(FailingSink));
    let err = submit_contact(&ctx, &contact_payload())
        .await
        .expect_err("sink failure");
    assert!(err.to_string().contains("smtp relay refused connection"));

    let body = err.response();
    assert!(!body.success);
    assert_eq!(body.message, GENERIC_FAILURE);
    assert!(body.errors.is_none());
    assert!(body.data.is_none());
}

#[test]
fn health_timestamp_is_millisecond_utc() {
    let now = Utc
        .with_ymd_and_hms(2026, 10, 14, 9, 30, 5)
        .single()
        .expect("timestamp");
    let report = health_report_at(now);
    assert_eq!(report.status, "OK");
    assert_eq!(report.timestamp, "2026-10-14T09:30:05.000Z");
}

#[test]
fn live_health_timestamp_parses_as_rfc3339() {
    let report = health_report();
    DateTime::parse_from_rfc3339(&report.timestamp).expect("rfc3339");
}
