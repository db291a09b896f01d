//! HTTP handlers for auth routes.

use axum::{
    extract::{FromRef, State},
    http::{HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use axum_extra::extract::cookie::{Cookie, SameSite};
use axum_extra::extract::CookieJar;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use todotable_core::auth::{
    calculate_expiry, generate_session_id, validate_credentials, validate_redirect_to,
    AuthError as CoreAuthError, Session,
};
use todotable_core::serde::{deserialize_flag, deserialize_optional_string};
use todotable_core::user::User;

use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::extractors::{session_id_from_headers, CurrentUser};
use crate::AuthState;

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub redirect_to: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    /// Keep the cookie across browser restarts.
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub remember: bool,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub redirect_to: Option<String>,
}

/// Body returned by signup and login.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub user: User,
    pub redirect_to: String,
    /// Session id, usable as a bearer token by non-browser clients.
    pub token: String,
}

/// Creates the auth router with all authentication routes.
///
/// Routes:
/// - `POST /auth/signup` - Create an account and start a session
/// - `POST /auth/login` - Check credentials and start a session
/// - `POST /auth/logout` - End current session
/// - `POST /auth/logout-all` - End all sessions for current user
/// - `GET /auth/me` - Get current authenticated user
/// - `DELETE /auth/me` - Delete the current user with all their todos
pub fn auth_routes<S>() -> Router<S>
where
    AuthState: FromRef<S>,
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/auth/signup", post(signup))
        .route("/auth/login", post(login))
        .route("/auth/logout", post(logout))
        .route("/auth/logout-all", post(logout_all))
        .route("/auth/me", get(me).delete(delete_me))
}

async fn signup(
    State(state): State<AuthState>,
    jar: CookieJar,
    Json(req): Json<SignupRequest>,
) -> Result<(StatusCode, CookieJar, Json<AuthResponse>), AuthError> {
    validate_credentials(&req.email, &req.password)?;
    let redirect_to = validate_redirect_to(req.redirect_to.as_deref()).to_string();

    // An interrupted account deletion can leave the identity row behind.
    state.users.remove_orphaned_identity(&req.email).await?;

    if state.users.get_user_by_email(&req.email).await?.is_some() {
        return Err(AuthError::UserExists);
    }

    let user = state.users.create_user(&req.email, &req.password).await?;
    let session = start_session(&state, &user).await?;
    let jar = jar.add(session_cookie(&state.config, &session, false));

    Ok((
        StatusCode::CREATED,
        jar,
        Json(AuthResponse {
            user,
            redirect_to,
            token: session.id.to_string(),
        }),
    ))
}

async fn login(
    State(state): State<AuthState>,
    jar: CookieJar,
    Json(req): Json<LoginRequest>,
) -> Result<(CookieJar, Json<AuthResponse>), AuthError> {
    validate_credentials(&req.email, &req.password)?;
    let redirect_to = validate_redirect_to(req.redirect_to.as_deref()).to_string();

    let user = state
        .users
        .verify_login(&req.email, &req.password)
        .await?
        .ok_or(AuthError::Core(CoreAuthError::InvalidCredentials))?;

    let session = start_session(&state, &user).await?;
    let jar = jar.add(session_cookie(&state.config, &session, req.remember));

    tracing::info!(user_id = %user.id, remember = req.remember, "User logged in");
    Ok((
        jar,
        Json(AuthResponse {
            user,
            redirect_to,
            token: session.id.to_string(),
        }),
    ))
}

async fn logout(
    State(state): State<AuthState>,
    headers: HeaderMap,
    jar: CookieJar,
) -> Result<(StatusCode, CookieJar), AuthError> {
    if let Some(session_id) = session_id_from_headers(&headers, &state.config.cookie_name) {
        state.sessions.delete_session(&session_id).await?;
    }

    Ok((StatusCode::NO_CONTENT, clear_cookie(&state.config, jar)))
}

async fn logout_all(
    State(state): State<AuthState>,
    CurrentUser(user): CurrentUser,
    jar: CookieJar,
) -> Result<(StatusCode, CookieJar), AuthError> {
    state.sessions.delete_user_sessions(&user.id).await?;

    Ok((StatusCode::NO_CONTENT, clear_cookie(&state.config, jar)))
}

async fn me(CurrentUser(user): CurrentUser) -> Json<User> {
    Json(user)
}

async fn delete_me(
    State(state): State<AuthState>,
    CurrentUser(user): CurrentUser,
    jar: CookieJar,
) -> Result<(StatusCode, CookieJar), AuthError> {
    let todos = state.todos.list_todos(&user.id).await?;
    for todo in &todos {
        state.todos.delete_todo(&user.id, &todo.id).await?;
    }

    state.users.delete_user(&user.email).await?;
    state.sessions.delete_user_sessions(&user.id).await?;

    tracing::info!(user_id = %user.id, todos = todos.len(), "Deleted account");
    Ok((StatusCode::NO_CONTENT, clear_cookie(&state.config, jar)))
}

async fn start_session(state: &AuthState, user: &User) -> Result<Session, AuthError> {
    let now = Utc::now();
    let session = Session {
        id: generate_session_id(),
        user_id: user.id.clone(),
        created_at: now,
        expires_at: calculate_expiry(now, state.config.session_ttl_chrono()),
    };
    state.sessions.create_session(&session).await?;
    Ok(session)
}

/// Without `persistent` the cookie has no max-age and ends with the browser
/// session; the server-side session still expires after the TTL.
fn session_cookie(config: &AuthConfig, session: &Session, persistent: bool) -> Cookie<'static> {
    let builder = Cookie::build((config.cookie_name.clone(), session.id.to_string()))
        .path("/")
        .http_only(true)
        .secure(config.cookie_secure)
        .same_site(SameSite::Lax);

    if persistent {
        builder
            .max_age(time::Duration::seconds(
                i64::try_from(config.session_ttl.as_secs()).unwrap_or(i64::MAX),
            ))
            .build()
    } else {
        builder.build()
    }
}

fn clear_cookie(config: &AuthConfig, jar: CookieJar) -> CookieJar {
    jar.remove(Cookie::build(config.cookie_name.clone()).path("/"))
}
