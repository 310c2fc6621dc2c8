//! Client for the external conversational assistant. One request, one
//! reply, no retries; a failure is reported to the caller of the current
//! request and nowhere else.

use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;

use crate::config::Config;
use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum AssistantError {
    #[error("assistant request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("assistant returned status {0}")]
    Status(reqwest::StatusCode),
    #[error("assistant reply did not contain a 'respuesta' string")]
    MalformedReply,
}

impl From<AssistantError> for AppError {
    fn from(err: AssistantError) -> Self {
        let message = match err {
            AssistantError::MalformedReply => "Respuesta inesperada de la IA",
            _ => "Error al comunicarse con la IA",
        };
        AppError::Upstream(message.to_string(), anyhow::Error::new(err))
    }
}

/// Outbound request body. `datos` is the serialized snapshot of recent
/// punches the assistant answers from.
#[derive(Debug, Serialize)]
struct AssistantRequest<'a> {
    mensaje: &'a str,
    datos: &'a str,
}

#[async_trait]
pub trait AssistantClient: Send + Sync {
    async fn ask(&self, mensaje: &str, datos: &str) -> Result<String, AssistantError>;
}

pub struct HttpAssistantClient {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpAssistantClient {
    pub fn new(endpoint: String, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("asistencia-backend/1.0")
            .timeout(timeout)
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to initialize HTTP client: {}", e))?;

        Ok(Self { client, endpoint })
    }

    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        Self::new(
            config.assistant_url.clone(),
            Duration::from_secs(config.assistant_timeout_secs),
        )
    }
}

#[async_trait]
impl AssistantClient for HttpAssistantClient {
    async fn ask(&self, mensaje: &str, datos: &str) -> Result<String, AssistantError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&AssistantRequest { mensaje, datos })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AssistantError::Status(status));
        }

        let text = response.text().await?;
        let value: serde_json::Value =
            serde_json::from_str(&text).map_err(|_| AssistantError::MalformedReply)?;
        value
            .get("respuesta")
            .and_then(|v| v.as_str())
            .map(str::to_owned)
            .ok_or(AssistantError::MalformedReply)
    }
}
