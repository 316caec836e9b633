//! Request identity.
//!
//! Authentication lives upstream of this service; an authenticated request
//! arrives with the caller's user id in the `x-user-id` header. Handlers that
//! need identity take a [`CurrentUser`] extractor and reject its absence.

use axum::{
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
};

pub const USER_ID_HEADER: &str = "x-user-id";

/// The authenticated caller's user id.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub String);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, String);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(|value| CurrentUser(value.to_string()))
            .ok_or((
                StatusCode::UNAUTHORIZED,
                "Missing authenticated user".to_string(),
            ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::FromRequestParts;
    use axum::http::Request;

    async fn extract(request: Request<()>) -> Result<CurrentUser, (StatusCode, String)> {
        let (mut parts, _) = request.into_parts();
        CurrentUser::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn test_extracts_user_id() {
        let request = Request::builder()
            .header(USER_ID_HEADER, "user-123")
            .body(())
            .unwrap();

        let current = extract(request).await.unwrap();
        assert_eq!(current.0, "user-123");
    }

    #[tokio::test]
    async fn test_missing_header_is_unauthorized() {
        let request = Request::builder().body(()).unwrap();

        let result = extract(request).await;
        assert_eq!(result.unwrap_err().0, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_blank_header_is_unauthorized() {
        let request = Request::builder()
            .header(USER_ID_HEADER, "   ")
            .body(())
            .unwrap();

        let result = extract(request).await;
        assert_eq!(result.unwrap_err().0, StatusCode::UNAUTHORIZED);
    }
}
