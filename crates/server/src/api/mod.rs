use std::{any::Any, path::Path, sync::Arc};

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, DefaultBodyLimit, State},
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::{any, get, post},
    Json, Router,
};
use serde_json::Value;
use server_api::{
    health_report, submit_contact, subscribe_newsletter, SubmissionError, GENERIC_FAILURE,
};
use shared::{
    error::{ApiError, ErrorCode},
    protocol::{HealthResponse, SubmissionResponse},
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing::error;

use crate::app_state::AppState;

pub(crate) const MAX_FORM_BODY_BYTES: usize = 64 * 1024;

pub(crate) fn build_router(state: Arc<AppState>, static_dir: Option<&Path>) -> Router {
    let api = Router::new()
        .route("/api/health", get(health))
        .route("/api/contact", post(contact))
        .route("/api/newsletter", post(newsletter))
        .route("/api/*rest", any(not_found));

    let router = match static_dir {
        // Client-side routes fall back to the app shell.
        Some(dir) => api.fallback_service(
            ServeDir::new(dir).fallback(ServeFile::new(dir.join("index.html"))),
        ),
        None => api.fallback(not_found),
    };

    router
        .layer(DefaultBodyLimit::max(MAX_FORM_BODY_BYTES))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> Json<HealthResponse> {
    Json(health_report())
}

async fn contact(
    State(state): State<Arc<AppState>>,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    match read_payload(body) {
        Ok(payload) => respond(submit_contact(&state.api, &payload).await),
        Err(rejection) => rejection,
    }
}

async fn newsletter(
    State(state): State<Arc<AppState>>,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    match read_payload(body) {
        Ok(payload) => respond(subscribe_newsletter(&state.api, &payload).await),
        Err(rejection) => rejection,
    }
}

async fn not_found(uri: Uri) -> (StatusCode, Json<ApiError>) {
    (
        StatusCode::NOT_FOUND,
        Json(ApiError::new(
            ErrorCode::NotFound,
            format!("no route for {}", uri.path()),
        )),
    )
}

/// Bodies that are not JSON become `null` so the schema reports them as a
/// field violation instead of a transport error.
fn read_payload(body: Result<Bytes, BytesRejection>) -> Result<Value, Response> {
    let body = body.map_err(|rejection| {
        let status = rejection.status();
        let code = if status == StatusCode::PAYLOAD_TOO_LARGE {
            ErrorCode::PayloadTooLarge
        } else {
            ErrorCode::Validation
        };
        (status, Json(ApiError::new(code, rejection.body_text()))).into_response()
    })?;
    Ok(serde_json::from_slice(&body).unwrap_or(Value::Null))
}

fn respond(result: Result<SubmissionResponse, SubmissionError>) -> Response {
    match result {
        Ok(body) => (StatusCode::OK, Json(body)).into_response(),
        Err(error @ SubmissionError::Invalid { .. }) => {
            (StatusCode::BAD_REQUEST, Json(error.response())).into_response()
        }
        Err(error) => {
            error!(%error, "form submission failed");
            (StatusCode::INTERNAL_SERVER_ERROR, Json(error.response())).into_response()
        }
    }
}

fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("non-string panic payload");
    error!(detail, "request handler panicked");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(SubmissionResponse::failed(GENERIC_FAILURE)),
    )
        .into_response()
}

#[cfg(test)]
#[path = "tests/mod_tests.rs"]
mod tests;
