//! Cliente para el endpoint de chat-completions compatible con OpenAI (Groq)
//! y gestor de alto nivel para llamadas de chat y de visión.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};

use crate::{config::AppConfig, error::LlmError};

/// Texto devuelto cuando el modelo responde sin contenido.
pub const EMPTY_REPLY_FALLBACK: &str = "Unable to generate response.";

const CHAT_TEMPERATURE: f32 = 0.2;
const VISION_TEMPERATURE: f32 = 0.1;
const VISION_MAX_TOKENS: u32 = 2048;

// --- Estructuras del protocolo chat-completions ---

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChatMessage {
    pub role: String,
    pub content: MessageContent,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ImageUrl {
    pub url: String,
}

impl ChatMessage {
    pub fn system(text: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: MessageContent::Text(text.into()),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: MessageContent::Text(text.into()),
        }
    }

    /// Mensaje de usuario con texto + imagen (data URL).
    pub fn user_with_image(text: impl Into<String>, data_url: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: MessageContent::Parts(vec![
                ContentPart::Text { text: text.into() },
                ContentPart::ImageUrl {
                    image_url: ImageUrl { url: data_url.into() },
                },
            ]),
        }
    }
}

/// Tipo de llamada; decide el mensaje de error ante respuestas no-2xx.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionKind {
    Chat,
    Vision,
}

impl CompletionKind {
    pub fn error_label(self) -> &'static str {
        match self {
            CompletionKind::Chat => "AI service error",
            CompletionKind::Vision => "AI vision service error",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip)]
    pub kind: CompletionKind,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    message: Option<CompletionMessage>,
}

#[derive(Debug, Deserialize)]
struct CompletionMessage {
    content: Option<String>,
}

/// Costura entre el orquestador y el proveedor. El servidor usa
/// `GroqClient`; los tests sustituyen un backend guionizado.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    async fn complete(&self, request: CompletionRequest) -> Result<String, LlmError>;
}

// --- Cliente HTTP real ---

pub struct GroqClient {
    http: Client,
    endpoint: String,
    api_key: Option<String>,
}

impl GroqClient {
    pub fn from_config(cfg: &AppConfig) -> Result<Self, LlmError> {
        let http = Client::builder().timeout(cfg.llm_timeout).build()?;
        let endpoint = format!(
            "{}/chat/completions",
            cfg.llm_api_base.as_str().trim_end_matches('/')
        );
        debug!("Cliente LLM configurado: endpoint={}", endpoint);

        Ok(Self {
            http,
            endpoint,
            api_key: cfg.groq_api_key.clone(),
        })
    }
}

#[async_trait]
impl ChatBackend for GroqClient {
    async fn complete(&self, request: CompletionRequest) -> Result<String, LlmError> {
        let api_key = self.api_key.as_deref().ok_or(LlmError::MissingApiKey)?;

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(
                status = status.as_u16(),
                "{} ({}): {}",
                request.kind.error_label(),
                request.model,
                body
            );
            if status == StatusCode::TOO_MANY_REQUESTS {
                return Err(LlmError::RateLimited);
            }
            return Err(LlmError::Upstream {
                status: status.as_u16(),
                service: request.kind.error_label(),
            });
        }

        let reply: CompletionResponse = response.json().await.map_err(|e| {
            warn!("Respuesta del LLM ilegible: {}", e);
            LlmError::MalformedReply
        })?;

        Ok(reply
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .filter(|content| !content.trim().is_empty())
            .unwrap_or_else(|| EMPTY_REPLY_FALLBACK.to_string()))
    }
}

/// Gestor de llamadas al LLM: fija modelo y parámetros de decodificación
/// según el tipo de llamada.
#[derive(Clone)]
pub struct LlmManager {
    backend: Arc<dyn ChatBackend>,
    pub chat_model: String,
    pub vision_model: String,
}

impl LlmManager {
    /// Construye el manager a partir de la configuración.
    pub fn from_config(cfg: &AppConfig) -> Result<Self, LlmError> {
        let client = GroqClient::from_config(cfg)?;
        Ok(Self::with_backend(
            Arc::new(client),
            &cfg.llm_chat_model,
            &cfg.llm_vision_model,
        ))
    }

    pub fn with_backend(backend: Arc<dyn ChatBackend>, chat_model: &str, vision_model: &str) -> Self {
        Self {
            backend,
            chat_model: chat_model.to_string(),
            vision_model: vision_model.to_string(),
        }
    }

    /// Chat de texto con el modelo conversacional.
    pub async fn chat(&self, messages: Vec<ChatMessage>) -> Result<String, LlmError> {
        self.backend
            .complete(CompletionRequest {
                model: self.chat_model.clone(),
                messages,
                temperature: CHAT_TEMPERATURE,
                max_tokens: None,
                kind: CompletionKind::Chat,
            })
            .await
    }

    /// Llamada multimodal (texto + imagen) con el modelo de visión.
    pub async fn vision(&self, messages: Vec<ChatMessage>) -> Result<String, LlmError> {
        self.backend
            .complete(CompletionRequest {
                model: self.vision_model.clone(),
                messages,
                temperature: VISION_TEMPERATURE,
                max_tokens: Some(VISION_MAX_TOKENS),
                kind: CompletionKind::Vision,
            })
            .await
    }
}

/// Extrae el objeto JSON de una respuesta del modelo: desde la primera `{`
/// hasta la última `}`, ignorando prosa o vallas de código alrededor.
pub fn extract_json<T: DeserializeOwned>(text: &str) -> Option<T> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    match serde_json::from_str(&text[start..=end]) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("JSON inválido en la respuesta del modelo: {}", e);
            None
        }
    }
}
