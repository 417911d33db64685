//! Bearer-token header extractor.

use axum::extract::FromRequestParts;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use http::request::Parts;

/// Raw token pulled from the `Authorization: Bearer <token>` header.
///
/// Rejects with 401 if the header is absent or not a bearer scheme. Token
/// validation itself (signature, expiry, user lookup) happens in handlers
/// where the signing secret is available.
#[derive(Debug, Clone)]
pub struct Bearer(pub String);

/// Rejection for a missing/malformed bearer header. Serializes to the same
/// `{kind, message}` body shape the API uses for every error.
#[derive(Debug)]
pub struct BearerRejection;

impl IntoResponse for BearerRejection {
    fn into_response(self) -> Response {
        let body = serde_json::json!({
            "kind": "UNAUTHENTICATED",
            "message": "unauthenticated",
        });
        (StatusCode::UNAUTHORIZED, axum::Json(body)).into_response()
    }
}

impl<S> FromRequestParts<S> for Bearer
where
    S: Send + Sync,
{
    type Rejection = BearerRejection;

    // axum-core 0.5 defines this as `fn -> impl Future + Send` (not `async fn`).
    // Extract synchronously, then return a 'static async move block to avoid
    // E0195 lifetime-capture mismatches.
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        // RFC 7235: auth scheme names are case-insensitive.
        let token = parts
            .headers
            .get(http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.split_once(' '))
            .filter(|(scheme, _)| scheme.eq_ignore_ascii_case("bearer"))
            .map(|(_, token)| token.trim().to_owned());

        async move {
            let token = token.filter(|t| !t.is_empty());
            token.map(Self).ok_or(BearerRejection)
        }
    }
}
