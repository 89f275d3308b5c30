use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Error body shared by every non-2xx response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

#[derive(Debug)]
pub enum ApiError {
    Domain(DomainError),
    NotFound,
    InvalidBody { status: StatusCode, detail: String },
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Domain(e) => {
                StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::InvalidBody { status, .. } => *status,
        }
    }

    fn detail(&self) -> String {
        match self {
            Self::Domain(e) => e.to_string(),
            Self::NotFound => "Not Found".to_string(),
            Self::InvalidBody { detail, .. } => detail.clone(),
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        Self::Domain(e)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidBody {
            status: rejection.status(),
            detail: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            detail: self.detail(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}
