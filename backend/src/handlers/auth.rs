use axum::{
    extract::State,
    http::{header, HeaderMap},
    response::{AppendHeaders, IntoResponse, Redirect, Response},
    Form,
};
use chrono::Utc;
use std::time::Duration;
use validator::Validate;

use crate::{
    error::AppError,
    models::session::Session,
    models::system_user::LoginForm,
    repositories::{session as session_repo, user as user_repo},
    state::AppState,
    utils::{
        cookies::{
            build_clear_session_cookie, build_session_cookie, extract_cookie_value,
            SESSION_COOKIE_NAME,
        },
        password::verify_password,
        token::{generate_session_token, hash_session_token},
    },
};

/// Form login. Success establishes a session and lands on the panel; any
/// credential failure bounces back to the login page with a transient flag.
pub async fn login(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    if form.validate().is_err() {
        return Ok(Redirect::to("/login").into_response());
    }

    let Some(user) = user_repo::find_by_username(&state.pool, form.username.trim()).await? else {
        tracing::info!(username = %form.username, "Rejected login attempt");
        return Ok(Redirect::to("/login?error=credenciales").into_response());
    };
    if !verify_password(&form.password, &user.password_hash)? {
        tracing::info!(username = %user.username, "Rejected login attempt");
        return Ok(Redirect::to("/login?error=credenciales").into_response());
    }

    let now = Utc::now();
    let reaped = session_repo::reap_expired_sessions(&state.pool, now).await?;
    if reaped > 0 {
        tracing::debug!(reaped, "Removed expired sessions");
    }

    let token = generate_session_token();
    let session = Session::new(
        user.id,
        hash_session_token(&token),
        state.config.session_ttl_hours,
        now,
    );
    session_repo::create_session(&state.pool, &session).await?;
    tracing::info!(username = %user.username, "Session established");

    let cookie = build_session_cookie(
        &token,
        Duration::from_secs(state.config.session_ttl_hours * 3600),
    );
    Ok((
        AppendHeaders([(header::SET_COOKIE, cookie)]),
        Redirect::to("/panel"),
    )
        .into_response())
}

/// Drops the caller's session row and clears the cookie.
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> Result<Response, AppError> {
    if let Some(token) = headers
        .get(header::COOKIE)
        .and_then(|value| value.to_str().ok())
        .and_then(|raw| extract_cookie_value(raw, SESSION_COOKIE_NAME))
    {
        session_repo::delete_session(&state.pool, &hash_session_token(&token)).await?;
    }

    Ok((
        AppendHeaders([(header::SET_COOKIE, build_clear_session_cookie())]),
        Redirect::to("/login"),
    )
        .into_response())
}
