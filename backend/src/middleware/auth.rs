use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use chrono::Utc;

use crate::{
    error::AppError,
    models::system_user::SystemUser,
    repositories::session as session_repo,
    state::AppState,
    utils::{
        cookies::{extract_cookie_value, SESSION_COOKIE_NAME},
        token::hash_session_token,
    },
};

/// Session gate for JSON endpoints: no valid session means 401 with a
/// structured error body.
pub async fn session_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let user = authenticate_request(&state, request.headers()).await?;
    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}

/// Session gate for the panel surface: no valid session redirects to the
/// login page instead of returning JSON.
pub async fn session_auth_or_login(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    match authenticate_request(&state, request.headers()).await {
        Ok(user) => {
            request.extensions_mut().insert(user);
            next.run(request).await
        }
        Err(err @ AppError::Unauthorized(_)) => {
            tracing::debug!("Unauthenticated panel request: {:?}", err);
            Redirect::to("/login").into_response()
        }
        Err(err) => err.into_response(),
    }
}

async fn authenticate_request(
    state: &AppState,
    headers: &axum::http::HeaderMap,
) -> Result<SystemUser, AppError> {
    let token = headers
        .get(header::COOKIE)
        .and_then(|value| value.to_str().ok())
        .and_then(|raw| extract_cookie_value(raw, SESSION_COOKIE_NAME))
        .ok_or_else(|| AppError::Unauthorized("No autorizado".to_string()))?;

    let token_hash = hash_session_token(&token);
    session_repo::resolve_session_user(&state.pool, &token_hash, Utc::now())
        .await?
        .ok_or_else(|| AppError::Unauthorized("No autorizado".to_string()))
}
