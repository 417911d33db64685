//! Request extractors that reject with the service's error body.
//!
//! The stock axum extractors reject with plain-text bodies (and 422 for JSON
//! deserialization), which clients cannot parse. These wrappers map every
//! extraction failure to [`ApiError::Validation`] so a missing field, a bad
//! content type, or a malformed UUID all come back as a 400 with the same
//! `{kind, message}` shape as every other error.

use axum::Json;
use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// JSON body extractor rejecting with `VALIDATION`.
#[derive(Debug)]
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    fn from_request(
        req: Request,
        state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            match Json::<T>::from_request(req, state).await {
                Ok(Json(value)) => Ok(Self(value)),
                Err(rejection) => Err(ApiError::Validation(rejection.body_text())),
            }
        }
    }
}

/// Query-string extractor rejecting with `VALIDATION`.
#[derive(Debug)]
pub struct ApiQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    // Query extraction only needs the URI; extract synchronously and return a
    // 'static future, as the bearer extractor does.
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let result = Query::<T>::try_from_uri(&parts.uri)
            .map(|Query(value)| Self(value))
            .map_err(|rejection| ApiError::Validation(rejection.body_text()));
        async move { result }
    }
}

/// Path-segment extractor rejecting with `VALIDATION`.
pub struct ApiPath<T>(pub T);

impl<S, T> FromRequestParts<S> for ApiPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            match Path::<T>::from_request_parts(parts, state).await {
                Ok(Path(value)) => Ok(Self(value)),
                Err(rejection) => Err(ApiError::Validation(rejection.body_text())),
            }
        }
    }
}
