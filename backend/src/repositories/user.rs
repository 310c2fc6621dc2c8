use sqlx::PgPool;

use crate::models::system_user::SystemUser;

pub async fn find_by_username(
    pool: &PgPool,
    username: &str,
) -> Result<Option<SystemUser>, sqlx::Error> {
    sqlx::query_as(
        "SELECT id, usuario AS username, password_hash, nombre AS display_name \
         FROM usuarios_sistema WHERE usuario = $1",
    )
    .bind(username)
    .fetch_optional(pool)
    .await
}

/// Provisioning insert used by the seeding binary.
pub async fn insert_system_user(
    pool: &PgPool,
    username: &str,
    password_hash: &str,
    display_name: Option<&str>,
) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar(
        "INSERT INTO usuarios_sistema (usuario, password_hash, nombre) \
         VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(username)
    .bind(password_hash)
    .bind(display_name)
    .fetch_one(pool)
    .await
}
