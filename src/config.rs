//! Carga y gestión de configuración de la aplicación (servidor + backend LLM).

use std::env;
use std::time::Duration;
use anyhow::{anyhow, Result};
use url::Url;

pub const DEFAULT_API_BASE: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_CHAT_MODEL: &str = "llama-3.3-70b-versatile";
pub const DEFAULT_VISION_MODEL: &str = "llama-3.2-90b-vision-preview";

/// Configuración completa de la aplicación.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub server_addr: String,
    pub frontend_dir: String,
    pub max_body_bytes: usize,

    /// Sin clave el servidor arranca igual; las llamadas al LLM fallan
    /// por petición con `LlmError::MissingApiKey`.
    pub groq_api_key: Option<String>,
    pub llm_api_base: Url,
    pub llm_chat_model: String,
    pub llm_vision_model: String,
    pub llm_timeout: Duration,
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno (usando .env si existe).
    pub fn from_env() -> Result<Self> {
        let server_addr =
            env::var("SERVER_ADDR").unwrap_or_else(|_| "127.0.0.1:3322".to_string());
        let frontend_dir =
            env::var("FRONTEND_DIR").unwrap_or_else(|_| "frontend".to_string());
        let max_body_bytes = parse_var("MAX_BODY_BYTES", 10 * 1024 * 1024)?;

        let groq_api_key = env::var("GROQ_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());

        let api_base_str =
            env::var("GROQ_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
        let llm_api_base = Url::parse(&api_base_str)
            .map_err(|e| anyhow!("GROQ_API_BASE no es una URL válida ({api_base_str}): {e}"))?;

        let llm_chat_model =
            env::var("LLM_CHAT_MODEL").unwrap_or_else(|_| DEFAULT_CHAT_MODEL.to_string());
        let llm_vision_model =
            env::var("LLM_VISION_MODEL").unwrap_or_else(|_| DEFAULT_VISION_MODEL.to_string());
        let llm_timeout = Duration::from_secs(parse_var("LLM_TIMEOUT_SECS", 120)?);

        Ok(Self {
            server_addr,
            frontend_dir,
            max_body_bytes,
            groq_api_key,
            llm_api_base,
            llm_chat_model,
            llm_vision_model,
            llm_timeout,
        })
    }

    /// Configuración apuntando a un backend concreto; útil en tests.
    pub fn for_backend(api_base: &str, api_key: Option<&str>) -> Result<Self> {
        Ok(Self {
            server_addr: "127.0.0.1:0".to_string(),
            frontend_dir: "frontend".to_string(),
            max_body_bytes: 10 * 1024 * 1024,
            groq_api_key: api_key.map(str::to_string),
            llm_api_base: Url::parse(api_base)?,
            llm_chat_model: DEFAULT_CHAT_MODEL.to_string(),
            llm_vision_model: DEFAULT_VISION_MODEL.to_string(),
            llm_timeout: Duration::from_secs(5),
        })
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, default: T) -> Result<T> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| anyhow!("Valor inválido para {name}: {raw}")),
        Err(_) => Ok(default),
    }
}
