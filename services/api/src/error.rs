use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// API service domain error variants.
///
/// Unknown-email and wrong-password login failures both map to
/// `InvalidCredentials` with an identical body — the two cases must not be
/// distinguishable to callers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("unauthenticated")]
    Unauthenticated,
    #[error("invalid email or password")]
    InvalidCredentials,
    #[error("email already registered")]
    DuplicateEmail,
    #[error("pet not found")]
    PetNotFound,
    #[error("unknown owner")]
    UnknownOwner,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION",
            Self::Unauthenticated => "UNAUTHENTICATED",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::DuplicateEmail => "DUPLICATE_EMAIL",
            Self::PetNotFound => "PET_NOT_FOUND",
            Self::UnknownOwner => "UNKNOWN_OWNER",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Unauthenticated | Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::DuplicateEmail => StatusCode::CONFLICT,
            Self::PetNotFound | Self::UnknownOwner => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // Log 500s only — tower-http TraceLayer already records method/uri/status
        // for all requests. Internal errors need the anyhow chain logged so the
        // root cause is traceable; the client body stays generic.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
