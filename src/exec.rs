//! Common execution utilities for async and blocking clients.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::error::{IamError, MAX_ERROR_BODY_CHARS, Result, ServiceError, truncate_str};
use crate::response::{ApiErrorResponse, Response, from_xml};

/// Parses a successful response body into the action's envelope.
///
/// Success bodies may carry secrets (`CreateAccessKey`), so only their length
/// is logged on failure.
pub(crate) fn parse_success_response<T: DeserializeOwned>(
    action: &str,
    text: &str,
) -> Result<Response<T>> {
    from_xml::<Response<T>>(text).map_err(|e| {
        tracing::debug!(
            action,
            error = %e,
            body_len = text.len(),
            "failed to decode IAM response"
        );
        IamError::from(e)
    })
}

/// Builds a [`ServiceError`] from an error response.
///
/// The first `<Error>` entry supplies code and message. A body that is not an
/// `<ErrorResponse>`, or one without entries, leaves the code empty and uses
/// the status line as the message.
pub(crate) fn parse_error_response(status: StatusCode, text: &str) -> ServiceError {
    let envelope = from_xml::<ApiErrorResponse>(text).unwrap_or_else(|e| {
        tracing::debug!(
            status = status.as_u16(),
            error = %e,
            body = truncate_str(text, MAX_ERROR_BODY_CHARS),
            "unrecognized IAM error body"
        );
        ApiErrorResponse::default()
    });
    let first = envelope.errors.into_iter().next().unwrap_or_default();

    let message = if first.message.is_empty() {
        status.to_string()
    } else {
        first.message
    };

    ServiceError {
        status_code: status.as_u16(),
        code: first.code,
        message,
        request_id: envelope.request_id,
    }
}

/// Handles response parsing for both success and error cases.
///
/// Only `200 OK` is a success; every other status, other 2xx included,
/// goes through the error envelope.
pub(crate) fn handle_response<T: DeserializeOwned>(
    action: &str,
    status: StatusCode,
    text: String,
) -> Result<Response<T>> {
    if status == StatusCode::OK {
        let response: Response<T> = parse_success_response(action, &text)?;
        tracing::debug!(
            action,
            status = status.as_u16(),
            request_id = response.request_id(),
            "IAM request succeeded"
        );
        Ok(response)
    } else {
        let err = parse_error_response(status, &text);
        tracing::debug!(
            action,
            status = status.as_u16(),
            code = %err.code,
            request_id = %err.request_id,
            "IAM request failed"
        );
        Err(err.into())
    }
}
