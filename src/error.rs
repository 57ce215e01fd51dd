//! Errores tipados del servicio (backend LLM y orquestador de diagnóstico).

use thiserror::Error;

/// Fallos al hablar con el endpoint de chat-completions.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("GROQ_API_KEY is not configured")]
    MissingApiKey,

    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,

    /// Respuesta no-2xx del backend. `service` distingue chat de visión.
    #[error("{service}")]
    Upstream { status: u16, service: &'static str },

    #[error("AI service unreachable: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("AI service returned an unreadable reply")]
    MalformedReply,
}

/// Fallos del pipeline identificar → diagnosticar.
///
/// La identificación con baja confianza NO es un error: es un
/// resultado `Uncertain` que corta el pipeline antes de la etapa 2.
#[derive(Debug, Error)]
pub enum DiagnosisError {
    #[error(transparent)]
    Llm(#[from] LlmError),

    #[error("Failed to process image for identification. Please try again.")]
    IdentificationParse,

    #[error("Failed to diagnose disease. Please try again.")]
    DiagnosisParse,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_limit_message_is_user_facing() {
        assert_eq!(
            LlmError::RateLimited.to_string(),
            "Rate limit exceeded. Please try again later."
        );
    }

    #[test]
    fn llm_errors_pass_through_diagnosis_error() {
        let err: DiagnosisError = LlmError::Upstream {
            status: 503,
            service: "AI vision service error",
        }
        .into();
        assert_eq!(err.to_string(), "AI vision service error");
    }
}
