use crate::{config::AppConfig, llm::LlmManager};

/// Estado compartido de sólo lectura: cada análisis es independiente.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub llm_manager: LlmManager,
}

impl AppState {
    pub fn new(config: AppConfig, llm_manager: LlmManager) -> Self {
        Self { config, llm_manager }
    }

    pub fn llm_configured(&self) -> bool {
        self.config.groq_api_key.is_some()
    }
}
