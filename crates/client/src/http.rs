//! Shared request/response plumbing.
//!
//! All backend services answer JSON on success and (usually) a JSON body
//! with a `message` field on failure. [`decode_body`] is the single place
//! that turns a raw response into either a JSON value or a
//! [`BookingError`], so every endpoint reports failures the same way.

use barberbook_core::errors::{BookingError, BookingResult};
use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

/// Dispatch a request and decode the JSON response into `T`.
pub(crate) async fn send<T: DeserializeOwned>(request: RequestBuilder) -> BookingResult<T> {
    let value = send_raw(request).await?;
    serde_json::from_value(value).map_err(|err| BookingError::Internal(Box::new(err)))
}

/// Dispatch a request where the response body is irrelevant (deletes,
/// cancels). Success status is still checked and failures still mapped.
pub(crate) async fn send_unit(request: RequestBuilder) -> BookingResult<()> {
    send_raw(request).await.map(|_| ())
}

async fn send_raw(request: RequestBuilder) -> BookingResult<Value> {
    let response = request.send().await.map_err(map_transport_error)?;

    let status = response.status();
    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    let body = response.text().await.map_err(map_transport_error)?;

    decode_body(status, content_type.as_deref(), &body)
}

/// Interpret a raw response.
///
/// JSON bodies are parsed; anything else is wrapped as `{"message": body}`
/// so downstream code can treat every response uniformly. Non-success
/// statuses become [`BookingError::Api`] with the server-provided `message`
/// when present, else a generic `HTTP <status>` message.
pub fn decode_body(
    status: StatusCode,
    content_type: Option<&str>,
    body: &str,
) -> BookingResult<Value> {
    let data = if content_type.is_some_and(|ct| ct.contains("application/json")) {
        serde_json::from_str(body).unwrap_or_else(|_| json!({ "message": body }))
    } else {
        json!({ "message": body })
    };

    if !status.is_success() {
        let message = data
            .get("message")
            .and_then(Value::as_str)
            .filter(|message| !message.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| {
                format!(
                    "HTTP {}: {}",
                    status.as_u16(),
                    status.canonical_reason().unwrap_or("request failed")
                )
            });
        return Err(BookingError::Api {
            status: status.as_u16(),
            message,
        });
    }

    Ok(data)
}

fn map_transport_error(err: reqwest::Error) -> BookingError {
    if err.is_connect() || err.is_timeout() {
        BookingError::Network(
            "Please check that the backend services are running.".to_string(),
        )
    } else {
        BookingError::Network(err.to_string())
    }
}
