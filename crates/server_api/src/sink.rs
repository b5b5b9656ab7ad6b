use anyhow::Result;
use async_trait::async_trait;
use shared::protocol::{ContactFormData, NewsletterFormData};
use tracing::info;

/// Where accepted submissions go once validated: a mailer, a CRM, a table.
#[async_trait]
pub trait SubmissionSink: Send + Sync {
    async fn record_contact(&self, form: &ContactFormData) -> Result<()>;
    async fn record_newsletter(&self, form: &NewsletterFormData) -> Result<()>;
}

/// Acknowledges without storing or sending anything.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

#[async_trait]
impl SubmissionSink for LogSink {
    async fn record_contact(&self, form: &ContactFormData) -> Result<()> {
        info!(
            subject = %form.subject,
            message_chars = form.message.chars().count(),
            "contact form received"
        );
        Ok(())
    }

    async fn record_newsletter(&self, _form: &NewsletterFormData) -> Result<()> {
        info!("newsletter subscription received");
        Ok(())
    }
}
