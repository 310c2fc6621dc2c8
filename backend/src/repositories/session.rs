use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::models::session::Session;
use crate::models::system_user::SystemUser;

pub async fn create_session(pool: &PgPool, session: &Session) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO sesiones (id, id_usuario, token_hash, creada_en, expira_en) \
         VALUES ($1, $2, $3, $4, $5)",
    )
    .bind(session.id)
    .bind(session.user_id)
    .bind(&session.token_hash)
    .bind(session.created_at)
    .bind(session.expires_at)
    .execute(pool)
    .await?;

    Ok(())
}

/// Resolves a token digest to its user, provided the session has not
/// expired. Unknown and expired digests are indistinguishable to callers.
pub async fn resolve_session_user(
    pool: &PgPool,
    token_hash: &str,
    now: DateTime<Utc>,
) -> Result<Option<SystemUser>, sqlx::Error> {
    sqlx::query_as(
        "SELECT u.id, u.usuario AS username, u.password_hash, u.nombre AS display_name \
         FROM sesiones s \
         JOIN usuarios_sistema u ON u.id = s.id_usuario \
         WHERE s.token_hash = $1 AND s.expira_en > $2",
    )
    .bind(token_hash)
    .bind(now)
    .fetch_optional(pool)
    .await
}

pub async fn delete_session(pool: &PgPool, token_hash: &str) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM sesiones WHERE token_hash = $1")
        .bind(token_hash)
        .execute(pool)
        .await?;

    Ok(())
}

/// Removes expired rows. Called opportunistically at login so the table does
/// not grow without bound.
pub async fn reap_expired_sessions(pool: &PgPool, now: DateTime<Utc>) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM sesiones WHERE expira_en <= $1")
        .bind(now)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}
