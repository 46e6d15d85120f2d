use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::responses::ErrorResponse;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Upstream(_) => StatusCode::BAD_GATEWAY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<redpacket_sdk::Error> for AppError {
    fn from(e: redpacket_sdk::Error) -> Self {
        use redpacket_sdk::Error;

        match e {
            Error::InvalidAddress(_) | Error::InvalidAmount(_) | Error::InvalidArgument(_) => {
                AppError::BadRequest(e.to_string())
            }
            Error::WalletNotConnected | Error::WalletRejected(_) => AppError::BadRequest(e.to_string()),
            Error::TransactionFailed { .. } | Error::TransactionMismatch { .. } => {
                AppError::BadRequest(e.to_string())
            }
            Error::Node { status: 404, .. } | Error::TransactionNotFound(_) => {
                AppError::NotFound(e.to_string())
            }
            Error::Node { status, .. } if (400..500).contains(&status) => {
                AppError::BadRequest(e.to_string())
            }
            Error::Node { .. } | Error::Network(_) | Error::Decode(_) => {
                AppError::Upstream(e.to_string())
            }
            Error::Config(_) => AppError::Internal(e.to_string()),
        }
    }
}

impl From<base64::DecodeError> for AppError {
    fn from(e: base64::DecodeError) -> Self {
        AppError::BadRequest(format!("Signed transaction is not valid base64: {e}"))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{self}");
        } else {
            tracing::warn!("{self}");
        }
        let body = ErrorResponse {
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
