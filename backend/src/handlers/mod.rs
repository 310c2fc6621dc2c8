pub mod auth;
pub mod chat;
pub mod dashboard;
pub mod health;

use crate::error::AppError;

/// Router-level fallback for wrong-verb hits on registered paths.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed("Método no permitido".to_string())
}
