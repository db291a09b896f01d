//! Axum extractors for authentication.

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};
use axum_extra::extract::CookieJar;
use chrono::Utc;

use todotable_core::auth::{is_session_expired, AuthError as CoreAuthError, SessionId};
use todotable_core::user::User;

use crate::{AuthError, AuthState};

/// Session id carried by a request.
///
/// The `Authorization: Bearer` header wins over the session cookie.
pub fn session_id_from_headers(headers: &HeaderMap, cookie_name: &str) -> Option<SessionId> {
    let bearer = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty());

    if let Some(token) = bearer {
        return Some(SessionId::new(token.to_string()));
    }

    CookieJar::from_headers(headers)
        .get(cookie_name)
        .map(|cookie| SessionId::new(cookie.value().to_string()))
}

/// Extractor for authenticated user. Returns 401 if not authenticated.
pub struct CurrentUser(pub User);

impl<S> FromRequestParts<S> for CurrentUser
where
    AuthState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let auth_state = AuthState::from_ref(state);

        let session_id = session_id_from_headers(&parts.headers, &auth_state.config.cookie_name)
            .ok_or(CoreAuthError::SessionNotFound)?;

        let session = auth_state
            .sessions
            .get_session(&session_id)
            .await?
            .ok_or(CoreAuthError::SessionNotFound)?;

        if is_session_expired(&session, Utc::now()) {
            auth_state.sessions.delete_session(&session.id).await?;
            tracing::debug!(user_id = %session.user_id, "Removed expired session");
            return Err(CoreAuthError::SessionExpired.into());
        }

        // A session can outlive its account when the account is deleted elsewhere.
        let user = auth_state
            .users
            .get_user_by_id(&session.user_id)
            .await?
            .ok_or(CoreAuthError::SessionNotFound)?;

        Ok(CurrentUser(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_bearer_header_wins_over_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer from-header"));
        headers.insert("cookie", HeaderValue::from_static("session=from-cookie"));

        let id = session_id_from_headers(&headers, "session").unwrap();
        assert_eq!(id.as_str(), "from-header");
    }

    #[test]
    fn test_falls_back_to_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert("cookie", HeaderValue::from_static("other=x; session=abc"));

        let id = session_id_from_headers(&headers, "session").unwrap();
        assert_eq!(id.as_str(), "abc");
    }

    #[test]
    fn test_non_bearer_authorization_falls_back_to_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic dXNlcjpwdw=="));

        assert!(session_id_from_headers(&headers, "session").is_none());
    }
}
