//! External API integrations

pub mod gemini;

pub use gemini::GeminiClient;

use async_trait::async_trait;

use crate::error::AppResult;

/// A remote model that turns one text prompt into one text reply
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Send the prompt and wait for the complete reply
    async fn generate(&self, prompt: &str) -> AppResult<String>;

    /// Name of the model answering the prompts
    fn model_name(&self) -> &str;
}

#[cfg(test)]
pub mod testing {
    //! In-process stand-ins for the AI service

    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::TextGenerator;
    use crate::error::{AppError, AppResult};

    /// Replies with a fixed text, or fails, and records every prompt
    pub struct MockGenerator {
        reply: Option<String>,
        prompts: Mutex<Vec<String>>,
    }

    impl MockGenerator {
        pub fn replying(reply: &str) -> Self {
            Self {
                reply: Some(reply.to_string()),
                prompts: Mutex::new(Vec::new()),
            }
        }

        pub fn failing() -> Self {
            Self {
                reply: None,
                prompts: Mutex::new(Vec::new()),
            }
        }

        pub fn prompts(&self) -> Vec<String> {
            self.prompts.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl TextGenerator for MockGenerator {
        async fn generate(&self, prompt: &str) -> AppResult<String> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            match &self.reply {
                Some(reply) => Ok(reply.clone()),
                None => Err(AppError::AiServiceError("API returned 403: invalid key".to_string())),
            }
        }

        fn model_name(&self) -> &str {
            "mock-model"
        }
    }
}
