//! Modo conversación del asistente: chat de texto y chat con imagen.

use tracing::info;

use crate::{
    error::LlmError,
    image::ImagePayload,
    languages::Language,
    llm::{ChatMessage, LlmManager},
};

const DEFAULT_IMAGE_QUESTION: &str = "Please analyze this image";

fn text_system_prompt(language: Language) -> String {
    format!(
        "You are KisanMitra, an AI farming assistant specializing in Indian agriculture. \
         Respond in {} language. Provide helpful, practical advice about farming, crops, \
         weather, pest control, fertilizers, and agricultural practices. Keep responses \
         concise and farmer-friendly.",
        language.prompt_name()
    )
}

fn image_system_prompt(language: Language) -> String {
    format!(
        "You are KisanMitra, an AI farming assistant for Indian farmers. Respond in {} \
         language. Analyze any plant/crop images shared and provide helpful, practical \
         farming advice. If disease is detected, provide cause, prevention, and treatment. \
         Always add: \"Consult a local agriculture officer before heavy chemical use.\"",
        language.prompt_name()
    )
}

/// Pregunta de texto al modelo conversacional.
pub async fn chat_with_ai(
    llm: &LlmManager,
    message: &str,
    language: Language,
) -> Result<String, LlmError> {
    info!(language = language.value(), "Chat de texto");
    llm.chat(vec![
        ChatMessage::system(text_system_prompt(language)),
        ChatMessage::user(message),
    ])
    .await
}

/// Pregunta acompañada de una imagen, enviada al modelo de visión.
pub async fn chat_with_image(
    llm: &LlmManager,
    image: &ImagePayload,
    message: Option<&str>,
    language: Language,
) -> Result<String, LlmError> {
    info!(language = language.value(), "Chat con imagen");
    let question = message
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .unwrap_or(DEFAULT_IMAGE_QUESTION);

    llm.vision(vec![
        ChatMessage::system(image_system_prompt(language)),
        ChatMessage::user_with_image(question, image.data_url()),
    ])
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::{ChatBackend, CompletionKind, CompletionRequest, MessageContent};
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct Recorder {
        requests: Mutex<Vec<CompletionRequest>>,
    }

    #[async_trait]
    impl ChatBackend for Recorder {
        async fn complete(&self, request: CompletionRequest) -> Result<String, LlmError> {
            self.requests.lock().unwrap().push(request);
            Ok("ok".to_string())
        }
    }

    fn manager(recorder: Arc<Recorder>) -> LlmManager {
        LlmManager::with_backend(recorder, "chat-model", "vision-model")
    }

    #[tokio::test]
    async fn text_chat_uses_chat_model_and_language() {
        let recorder = Arc::new(Recorder::default());
        let reply = chat_with_ai(&manager(recorder.clone()), "When to sow wheat?", Language::Punjabi).await;
        assert_eq!(reply.unwrap(), "ok");

        let requests = recorder.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].model, "chat-model");
        assert_eq!(requests[0].kind, CompletionKind::Chat);
        match &requests[0].messages[0].content {
            MessageContent::Text(prompt) => assert!(prompt.contains("Respond in Punjabi")),
            other => panic!("unexpected system content: {other:?}"),
        }
    }

    #[tokio::test]
    async fn image_chat_defaults_question() {
        let recorder = Arc::new(Recorder::default());
        let image = ImagePayload::parse("aGVsbG8=").unwrap();
        chat_with_image(&manager(recorder.clone()), &image, Some("  "), Language::English)
            .await
            .unwrap();

        let requests = recorder.requests.lock().unwrap();
        assert_eq!(requests[0].model, "vision-model");
        assert_eq!(requests[0].max_tokens, Some(2048));
        assert_eq!(
            requests[0].messages[1],
            ChatMessage::user_with_image(DEFAULT_IMAGE_QUESTION, "data:image/jpeg;base64,aGVsbG8=")
        );
    }
}
