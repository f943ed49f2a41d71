//! REST error mapping for the product sum module.

use axum::Json;
use axum::response::{IntoResponse, Response};
use http::StatusCode;

use super::dto::ErrorDto;
use crate::domain::error::{DomainError, ErrorKind};

pub const INVALID_INPUT_MESSAGE: &str = "Invalid JSON input.";
pub const NOT_FOUND_MESSAGE: &str = "File not found.";
pub const MALFORMED_INPUT_MESSAGE: &str = "Input file not in CSV format.";
pub const PROCESSING_FAILURE_MESSAGE: &str = "Error processing the file.";

/// Error reply: a status code plus the `{file, error}` payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    status: StatusCode,
    body: ErrorDto,
}

impl ApiError {
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    #[must_use]
    pub const fn body(&self) -> &ErrorDto {
        &self.body
    }
}

const fn status_and_message(kind: ErrorKind) -> (StatusCode, &'static str) {
    match kind {
        ErrorKind::InvalidInput => (StatusCode::BAD_REQUEST, INVALID_INPUT_MESSAGE),
        ErrorKind::NotFound => (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE),
        ErrorKind::MalformedInput => (StatusCode::BAD_REQUEST, MALFORMED_INPUT_MESSAGE),
        ErrorKind::ProcessingFailure => (
            StatusCode::INTERNAL_SERVER_ERROR,
            PROCESSING_FAILURE_MESSAGE,
        ),
    }
}

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        let (status, message) = status_and_message(e.kind());
        Self {
            status,
            body: ErrorDto {
                file: e.file().map(ToOwned::to_owned),
                error: message.to_owned(),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}
