//! Conversational bridge to the AI service

use std::sync::Arc;

use crate::error::AppResult;
use crate::external::TextGenerator;

/// Stateless wrapper that forwards prompts to the configured model
#[derive(Clone)]
pub struct AssistantService {
    generator: Arc<dyn TextGenerator>,
}

impl AssistantService {
    /// Create a new AssistantService instance
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Send a prompt and return the reply exactly as the service produced it
    ///
    /// Failures are passed through unchanged; there is no retry or fallback.
    pub async fn ask(&self, prompt: &str) -> AppResult<String> {
        let reply = self.generator.generate(prompt).await;

        match &reply {
            Ok(text) => tracing::debug!(reply_len = text.len(), "AI reply received"),
            Err(e) => tracing::warn!("AI request failed: {}", e),
        }

        reply
    }

    pub fn model_name(&self) -> &str {
        self.generator.model_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::external::testing::MockGenerator;

    #[tokio::test]
    async fn test_ask_returns_reply_verbatim() {
        let mock = Arc::new(MockGenerator::replying("X"));
        let assistant = AssistantService::new(mock.clone());

        let reply = assistant.ask("What fertilizer suits potatoes?").await.unwrap();
        assert_eq!(reply, "X");
        assert_eq!(mock.prompts(), vec!["What fertilizer suits potatoes?".to_string()]);
    }

    #[tokio::test]
    async fn test_ask_propagates_service_errors() {
        let assistant = AssistantService::new(Arc::new(MockGenerator::failing()));

        let result = assistant.ask("anything").await;
        assert!(matches!(result, Err(AppError::AiServiceError(_))));
    }

    #[test]
    fn test_model_name_comes_from_generator() {
        let assistant = AssistantService::new(Arc::new(MockGenerator::replying("ok")));
        assert_eq!(assistant.model_name(), "mock-model");
    }
}
