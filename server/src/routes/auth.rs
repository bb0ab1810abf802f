//! Auth routes: demo login, session lookup, logout.

use axum::extract::{FromRef, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Redirect};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::{Deserialize, Serialize};
use views::auth::root_redirect;
use views::{Filter, Role};

use crate::routes::error::ApiError;
use crate::services::session::{self, Session, SessionUser};
use crate::state::AppState;

const COOKIE_NAME: &str = "session_token";

fn session_cookie(token: String, secure: bool, ttl: std::time::Duration) -> Cookie<'static> {
    let max_age = time::Duration::try_from(ttl).unwrap_or(time::Duration::MAX);
    Cookie::build((COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(max_age)
        .build()
}

fn cleared_cookie(secure: bool) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(time::Duration::ZERO)
        .build()
}

/// Resolve the session named by the request's cookie, if it is still live.
async fn session_from_jar(state: &AppState, jar: &CookieJar) -> Option<(Session, String)> {
    let token = jar.get(COOKIE_NAME).map(Cookie::value).unwrap_or_default();
    if token.is_empty() {
        return None;
    }
    let session = session::validate_session(&state.sessions, token).await?;
    Some((session, token.to_owned()))
}

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Authenticated user extracted from the session cookie.
/// Use as a handler parameter to require authentication.
pub struct AuthUser {
    pub session: Session,
    pub token: String,
}

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let app_state = AppState::from_ref(state);
        let (session, token) = session_from_jar(&app_state, &jar).await.ok_or(ApiError::Unauthenticated)?;
        Ok(Self { session, token })
    }
}

impl AuthUser {
    #[must_use]
    pub fn role(&self) -> &Role {
        &self.session.role
    }

    /// Reject restaurant admins from console-wide endpoints.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Forbidden`] for a restaurant-admin session.
    pub fn require_super_admin(&self) -> Result<(), ApiError> {
        if self.role().is_super_admin() { Ok(()) } else { Err(ApiError::Forbidden) }
    }

    /// Reject access to another tenant's data.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Forbidden`] when a restaurant admin names a
    /// restaurant other than their own.
    pub fn require_tenant(&self, restaurant_id: &str) -> Result<(), ApiError> {
        match self.role().tenant() {
            Some(own) if own != restaurant_id => Err(ApiError::Forbidden),
            _ => Ok(()),
        }
    }

    /// Restaurant filter to apply: restaurant admins are pinned to their tenant.
    #[must_use]
    pub fn scope(&self, requested: Filter<String>) -> Filter<String> {
        match self.role().tenant() {
            Some(own) => Filter::Only(own.to_owned()),
            None => requested,
        }
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

#[derive(Deserialize)]
pub struct LoginBody {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    #[serde(flatten)]
    pub user: SessionUser,
    /// Path the client navigates to after login.
    pub redirect: &'static str,
}

/// `POST /api/auth/login`: check demo credentials after the simulated delay.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<LoginBody>,
) -> Result<(CookieJar, Json<LoginResponse>), ApiError> {
    tokio::time::sleep(state.config.login_delay).await;

    let role = views::authenticate(&body.email, &body.password).inspect_err(|_| {
        tracing::warn!(email = %body.email, "login rejected");
    })?;

    if let Some(previous) = jar.get(COOKIE_NAME) {
        session::delete_session(&state.sessions, previous.value()).await;
    }

    let user = SessionUser::new(&body.email, &role);
    let redirect = user.home;
    let token = session::create_session(&state.sessions, &body.email, role, state.config.session_ttl).await;
    tracing::info!(email = %body.email, %redirect, "login succeeded");

    let cookie = session_cookie(token, state.config.cookie_secure, state.config.session_ttl);
    Ok((jar.add(cookie), Json(LoginResponse { user, redirect })))
}

/// `GET /api/auth/me`: return current user.
pub async fn me(auth: AuthUser) -> Json<SessionUser> {
    Json(SessionUser::from(&auth.session))
}

/// `POST /api/auth/logout`: delete session, clear cookie.
pub async fn logout(State(state): State<AppState>, auth: AuthUser) -> impl IntoResponse {
    session::delete_session(&state.sessions, &auth.token).await;
    tracing::info!(email = %auth.session.email, "logout");

    let jar = CookieJar::new().add(cleared_cookie(state.config.cookie_secure));
    (jar, StatusCode::NO_CONTENT)
}

/// `GET /`: send visitors to login or to their landing page.
pub async fn root(State(state): State<AppState>, jar: CookieJar) -> Redirect {
    let session = session_from_jar(&state, &jar).await;
    let target = root_redirect(session.as_ref().map(|(s, _)| &s.role));
    Redirect::temporary(target.path())
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
