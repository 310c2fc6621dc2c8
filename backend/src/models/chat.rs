//! Payloads for the chat relay endpoint and its assistant context.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize, Serializer};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::attendance::EventKind;

/// Inbound chat question. A missing `mensaje` field is treated the same as
/// an empty one so the handler can reject both with one message.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ChatMessage {
    #[serde(default)]
    pub mensaje: String,
}

/// Successful relay response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ChatReply {
    pub respuesta: String,
    /// Local time the reply was relayed, `Y-m-d H:M:S`.
    pub timestamp: String,
}

/// One recent punch joined with its employee, serialized into the `datos`
/// context blob. Field names are the wire contract the assistant service
/// was prompted with; do not rename them.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct ContextRecord {
    pub nombre: String,
    pub documento: String,
    pub cargo: String,
    pub tipo_evento: EventKind,
    #[serde(serialize_with = "serialize_fecha_hora")]
    pub fecha_hora: NaiveDateTime,
    pub validado_biometricamente: bool,
}

fn serialize_fecha_hora<S: Serializer>(value: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&value.format("%Y-%m-%d %H:%M:%S").to_string())
}
