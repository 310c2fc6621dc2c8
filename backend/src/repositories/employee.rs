use sqlx::PgPool;

use crate::models::employee::Employee;

const EMPLOYEE_COLUMNS: &str =
    "id, nombre AS full_name, documento AS document_id, cargo AS role_title, telefono AS phone";

/// Case-insensitive substring search over name and document, ordered by
/// name. Callers must guard against empty terms; an empty string would match
/// every row.
pub async fn search_employees(pool: &PgPool, term: &str) -> Result<Vec<Employee>, sqlx::Error> {
    let sql = format!(
        "SELECT {EMPLOYEE_COLUMNS} FROM empleados \
         WHERE nombre ILIKE $1 OR documento ILIKE $1 \
         ORDER BY nombre"
    );
    let pattern = format!("%{}%", term);
    sqlx::query_as(&sql).bind(pattern).fetch_all(pool).await
}

pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<Employee>, sqlx::Error> {
    let sql = format!("SELECT {EMPLOYEE_COLUMNS} FROM empleados WHERE id = $1");
    sqlx::query_as(&sql).bind(id).fetch_optional(pool).await
}

/// Inserts one directory entry. Seeding-path only, like
/// [`super::attendance::insert_record`].
pub async fn insert_employee(
    pool: &PgPool,
    full_name: &str,
    document_id: &str,
    role_title: &str,
    phone: Option<&str>,
) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar(
        "INSERT INTO empleados (nombre, documento, cargo, telefono) \
         VALUES ($1, $2, $3, $4) RETURNING id",
    )
    .bind(full_name)
    .bind(document_id)
    .bind(role_title)
    .bind(phone)
    .fetch_one(pool)
    .await
}
