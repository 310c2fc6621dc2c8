use axum::{
    extract::{Extension, State},
    Json,
};
use std::sync::Arc;

use crate::{
    error::AppError,
    models::chat::{ChatMessage, ChatReply},
    models::system_user::SystemUser,
    repositories::attendance as attendance_repo,
    services::assistant::AssistantClient,
    state::AppState,
    utils::time::now_in_timezone,
};

/// How many recent punches the assistant sees as context.
const CHAT_CONTEXT_LIMIT: i64 = 100;

/// Relays a question to the external assistant with a snapshot of recent
/// punches. One outbound attempt; failures surface immediately as a generic
/// unavailable message.
pub async fn chat(
    State(state): State<AppState>,
    Extension(_user): Extension<SystemUser>,
    Extension(assistant): Extension<Arc<dyn AssistantClient>>,
    Json(payload): Json<ChatMessage>,
) -> Result<Json<ChatReply>, AppError> {
    let mensaje = payload.mensaje.trim();
    if mensaje.is_empty() {
        return Err(AppError::BadRequest("Mensaje vacío".to_string()));
    }

    let records = attendance_repo::recent_records(&state.pool, CHAT_CONTEXT_LIMIT).await?;
    let datos = serde_json::to_string_pretty(&records)
        .map_err(|e| AppError::InternalServerError(e.into()))?;

    let respuesta = assistant.ask(mensaje, &datos).await?;

    let timestamp = now_in_timezone(&state.config.time_zone)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string();

    Ok(Json(ChatReply {
        respuesta,
        timestamp,
    }))
}
