use reqwest::{Client, StatusCode};
use serde::Serialize;
use shared::protocol::{
    ContactFormData, FieldViolation, HealthResponse, NewsletterFormData, SubmissionResponse,
};
use tracing::debug;
use url::Url;

use crate::error::ClientError;

pub const CONTACT_ROUTE: &str = "api/contact";
pub const NEWSLETTER_ROUTE: &str = "api/newsletter";
pub const HEALTH_ROUTE: &str = "api/health";

#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    Accepted {
        message: String,
        data: Option<serde_json::Value>,
    },
    Rejected {
        message: String,
        errors: Vec<FieldViolation>,
    },
}

/// HTTP client for the storefront's form endpoints.
#[derive(Debug, Clone)]
pub struct CafeClient {
    http: Client,
    base_url: Url,
}

impl CafeClient {
    pub fn new(server_url: &str) -> Result<Self, ClientError> {
        // A trailing slash keeps any path prefix when joining routes.
        let normalized = format!("{}/", server_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalized).map_err(|source| ClientError::InvalidUrl {
            url: server_url.to_string(),
            source,
        })?;
        Ok(Self {
            http: Client::new(),
            base_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub async fn submit_contact(
        &self,
        form: &ContactFormData,
    ) -> Result<SubmissionOutcome, ClientError> {
        self.submit(CONTACT_ROUTE, form).await
    }

    pub async fn subscribe_newsletter(
        &self,
        form: &NewsletterFormData,
    ) -> Result<SubmissionOutcome, ClientError> {
        self.submit(NEWSLETTER_ROUTE, form).await
    }

    pub async fn health(&self) -> Result<HealthResponse, ClientError> {
        let endpoint = self.endpoint(HEALTH_ROUTE)?;
        let response = self
            .http
            .get(endpoint.clone())
            .send()
            .await
            .map_err(|source| transport(&endpoint, source))?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Server {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
                message: "health check failed".to_string(),
            });
        }
        response
            .json()
            .await
            .map_err(|source| transport(&endpoint, source))
    }

    async fn submit<T: Serialize>(
        &self,
        route: &str,
        form: &T,
    ) -> Result<SubmissionOutcome, ClientError> {
        let endpoint = self.endpoint(route)?;
        let response = self
            .http
            .post(endpoint.clone())
            .json(form)
            .send()
            .await
            .map_err(|source| transport(&endpoint, source))?;
        let status = response.status();
        debug!(%endpoint, %status, "form submitted");

        if status != StatusCode::OK && status != StatusCode::BAD_REQUEST {
            let message = match response.json::<SubmissionResponse>().await {
                Ok(body) => body.message,
                Err(_) => status
                    .canonical_reason()
                    .unwrap_or("unexpected status")
                    .to_string(),
            };
            return Err(ClientError::Server {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
                message,
            });
        }

        let body: SubmissionResponse = response
            .json()
            .await
            .map_err(|source| transport(&endpoint, source))?;
        if body.success {
            Ok(SubmissionOutcome::Accepted {
                message: body.message,
                data: body.data,
            })
        } else {
            Ok(SubmissionOutcome::Rejected {
                message: body.message,
                errors: body.errors.unwrap_or_default(),
            })
        }
    }

    fn endpoint(&self, route: &str) -> Result<Url, ClientError> {
        self.base_url
            .join(route)
            .map_err(|source| ClientError::InvalidUrl {
                url: format!("{}{route}", self.base_url),
                source,
            })
    }
}

fn transport(endpoint: &Url, source: reqwest::Error) -> ClientError {
    ClientError::Transport {
        endpoint: endpoint.to_string(),
        source,
    }
}

#[cfg(test)]
#[path = "tests/client_tests.rs"]
mod tests;
