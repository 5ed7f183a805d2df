//! Bearer-token extraction.
//!
//! The API does not validate tokens itself. It extracts the caller's bearer
//! token once and hands it to the backend, which authorizes every read.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use drivn_backend::CallerContext;
use drivn_common::error::AppError;

/// Caller extracted from the `Authorization: Bearer <token>` header.
///
/// Use as an Axum extractor on protected routes:
/// ```ignore
/// async fn handler(auth: AuthCaller) -> impl IntoResponse {
///     // auth.caller carries the token forwarded to the backend
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthCaller {
    pub caller: CallerContext,
}

impl AuthCaller {
    /// Extract the caller from request parts.
    pub fn from_parts(parts: &Parts) -> Result<Self, AppError> {
        parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(CallerContext::from_authorization)
            .map(|caller| AuthCaller { caller })
            .ok_or_else(|| {
                AppError::Auth(
                    "Missing or invalid Authorization header. Use 'Bearer <token>'".to_string(),
                )
            })
    }
}

impl<S> FromRequestParts<S> for AuthCaller
where
    S: Send + Sync,
{
    type Rejection = AppError;

    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let result = Self::from_parts(parts);
        async move { result }
    }
}
