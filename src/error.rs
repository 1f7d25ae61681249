use crate::{dto::output, repository};
use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

pub const TICKET_NOT_FOUND_DETAIL: &str = "Ticket not found";
pub const INTERNAL_SERVER_ERROR_DETAIL: &str = "Internal server error";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("ticket not exist")]
    TicketNotExist,

    #[error("validation error: {0:?}")]
    Validation(Vec<output::ValidationDetail>),

    #[error("payload too large")]
    PayloadTooLarge,

    #[error("database error: {0}")]
    Database(#[from] repository::Error),
}

impl Error {
    pub fn validation(loc: &[&str], msg: impl Into<String>) -> Self {
        Self::Validation(vec![output::ValidationDetail::new(loc, msg)])
    }
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            return Error::PayloadTooLarge;
        }

        Error::validation(&["body"], rejection.body_text())
    }
}

impl From<PathRejection> for Error {
    fn from(rejection: PathRejection) -> Self {
        Error::validation(&["path"], rejection.body_text())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::TicketNotExist => {
                tracing::warn!(err = %self);
                let body = output::ErrorDetail {
                    detail: TICKET_NOT_FOUND_DETAIL,
                };
                (StatusCode::NOT_FOUND, Json(body)).into_response()
            }
            Error::Validation(details) => {
                tracing::warn!(?details, "validation error");
                let body = output::ErrorDetail { detail: details };
                (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
            }
            Error::PayloadTooLarge => {
                tracing::warn!(err = %self);
                StatusCode::PAYLOAD_TOO_LARGE.into_response()
            }
            Error::Database(err) => {
                tracing::error!(%err, "internal error");
                let body = output::ErrorDetail {
                    detail: INTERNAL_SERVER_ERROR_DETAIL,
                };
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
        }
    }
}
