//! Reference data for the employee directory.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// One employee as seeded by the ingestion side. Immutable reference data;
/// the panel only ever reads it.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Employee {
    pub id: i64,
    /// Full display name (`nombre`).
    pub full_name: String,
    /// National document id (`documento`), unique per employee.
    pub document_id: String,
    /// Role or job title (`cargo`).
    pub role_title: String,
    /// Optional contact phone (`telefono`).
    pub phone: Option<String>,
}
