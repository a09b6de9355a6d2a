use crate::store::StoreError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::{debug, error};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{message}")]
    BadRequest {
        message: &'static str,
        debug: Option<String>,
    },

    #[error("{message}: {source}")]
    Store {
        message: &'static str,
        #[source]
        source: StoreError,
    },
}

impl AppError {
    pub fn bad_request(message: &'static str) -> Self {
        AppError::BadRequest {
            message,
            debug: None,
        }
    }

    /// Detail that is logged but never returned to the caller.
    pub fn with_debug(self, detail: impl Into<String>) -> Self {
        match self {
            AppError::BadRequest { message, .. } => AppError::BadRequest {
                message,
                debug: Some(detail.into()),
            },
            other => other,
        }
    }

    /// Replaces the client-facing message of a store failure.
    pub fn with_message(self, message: &'static str) -> Self {
        match self {
            AppError::Store { source, .. } => AppError::Store { message, source },
            other => other,
        }
    }
}

impl From<StoreError> for AppError {
    fn from(source: StoreError) -> Self {
        AppError::Store {
            message: "Something went wrong",
            source,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::BadRequest { message, ref debug } => {
                if let Some(detail) = debug {
                    debug!(detail = %detail, "Rejected request: {message}");
                }
                (StatusCode::BAD_REQUEST, message)
            }
            AppError::Store { message, ref source } => {
                error!(error = ?source, "{message}");
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}
