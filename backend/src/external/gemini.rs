//! Gemini API client
//!
//! Client for the Google generative language `generateContent` endpoint.
//! One prompt in, one complete text reply out; no streaming, no retries.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::TextGenerator;
use crate::config::GeminiConfig;
use crate::error::{AppError, AppResult};

/// Client for the Gemini generative language API
#[derive(Clone)]
pub struct GeminiClient {
    endpoint: String,
    api_key: String,
    model: String,
    timeout: Duration,
    http_client: Client,
}

/// Request body for `models/{model}:generateContent`
#[derive(Debug, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

impl GenerateContentRequest {
    /// A single user turn containing the prompt
    pub fn from_prompt(prompt: &str) -> Self {
        Self {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: Some(prompt.to_string()),
                }],
            }],
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Response from `generateContent`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<Content>,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    pub block_reason: Option<String>,
}

impl GenerateContentResponse {
    /// Text of the first candidate, parts joined in order
    pub fn into_text(self) -> AppResult<String> {
        if let Some(reason) = self.prompt_feedback.and_then(|f| f.block_reason) {
            return Err(AppError::AiServiceError(format!("Prompt blocked: {}", reason)));
        }

        let candidate = self
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| AppError::AiServiceError("Response contained no candidates".to_string()))?;

        let parts: Vec<String> = candidate
            .content
            .map(|c| c.parts)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|p| p.text)
            .collect();

        if parts.is_empty() {
            let reason = candidate.finish_reason.unwrap_or_else(|| "unknown".to_string());
            return Err(AppError::AiServiceError(format!(
                "Response contained no text (finish reason: {})",
                reason
            )));
        }

        Ok(parts.concat())
    }
}

impl GeminiClient {
    /// Create a new Gemini client
    pub fn new(
        endpoint: String,
        api_key: String,
        model: String,
        timeout: Duration,
    ) -> AppResult<Self> {
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            endpoint,
            api_key,
            model,
            timeout,
            http_client,
        })
    }

    /// Create a client from the loaded configuration
    pub fn from_config(config: &GeminiConfig) -> AppResult<Self> {
        if config.api_key.trim().is_empty() {
            return Err(AppError::Configuration("gemini.api_key is empty".to_string()));
        }

        Self::new(
            config.endpoint.clone(),
            config.api_key.clone(),
            config.model.clone(),
            config.timeout(),
        )
    }

    fn generate_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        )
    }

    /// Send a prompt and return the reply text verbatim
    pub async fn generate_content(&self, prompt: &str) -> AppResult<String> {
        tracing::debug!(model = %self.model, prompt_len = prompt.len(), "Sending prompt to Gemini");

        let response = self
            .http_client
            .post(self.generate_url())
            .header("x-goog-api-key", &self.api_key)
            .json(&GenerateContentRequest::from_prompt(prompt))
            .send()
            .await
            .map_err(|e| self.request_error(e))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::AiServiceError(format!(
                "API returned {}: {}",
                status, body
            )));
        }

        let result: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| self.request_error(e))?;

        result.into_text()
    }

    fn request_error(&self, e: reqwest::Error) -> AppError {
        if e.is_timeout() {
            AppError::AiServiceTimeout(self.timeout)
        } else if e.is_decode() {
            AppError::AiServiceError(format!("Failed to parse response: {}", e))
        } else {
            AppError::AiServiceError(format!("Request failed: {}", e))
        }
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> AppResult<String> {
        self.generate_content(prompt).await
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{extract::Path, http::HeaderMap, routing::post, Json, Router};
    use serde_json::{json, Value};

    fn parse(body: Value) -> AppResult<String> {
        serde_json::from_value::<GenerateContentResponse>(body)
            .unwrap()
            .into_text()
    }

    /// Serve `router` on an ephemeral local port and return its base URL
    async fn spawn_mock(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[test]
    fn test_request_body_shape() {
        let body = serde_json::to_value(GenerateContentRequest::from_prompt("hello")).unwrap();
        assert_eq!(
            body,
            json!({ "contents": [{ "role": "user", "parts": [{ "text": "hello" }] }] })
        );
    }

    #[test]
    fn test_reply_joins_parts_of_first_candidate() {
        let text = parse(json!({
            "candidates": [
                { "content": { "role": "model", "parts": [{ "text": "Water " }, { "text": "twice a week." }] } },
                { "content": { "parts": [{ "text": "ignored" }] } }
            ]
        }))
        .unwrap();
        assert_eq!(text, "Water twice a week.");
    }

    #[test]
    fn test_reply_text_is_not_trimmed() {
        let text = parse(json!({
            "candidates": [{ "content": { "parts": [{ "text": "  **Irrigate** at dawn\n" }] } }]
        }))
        .unwrap();
        assert_eq!(text, "  **Irrigate** at dawn\n");
    }

    #[test]
    fn test_missing_candidates_is_an_error() {
        assert!(matches!(parse(json!({})), Err(AppError::AiServiceError(_))));
        assert!(matches!(
            parse(json!({ "candidates": [{ "finishReason": "SAFETY" }] })),
            Err(AppError::AiServiceError(msg)) if msg.contains("SAFETY")
        ));
    }

    #[test]
    fn test_blocked_prompt_is_an_error() {
        let result = parse(json!({ "promptFeedback": { "blockReason": "OTHER" } }));
        assert!(matches!(result, Err(AppError::AiServiceError(msg)) if msg.contains("OTHER")));
    }

    #[test]
    fn test_empty_api_key_rejected() {
        let config = GeminiConfig {
            endpoint: "http://localhost".to_string(),
            api_key: "  ".to_string(),
            model: "gemini-1.5-pro".to_string(),
            timeout_secs: 5,
        };
        assert!(matches!(
            GeminiClient::from_config(&config),
            Err(AppError::Configuration(_))
        ));
    }

    #[tokio::test]
    async fn test_generate_content_against_mock_service() {
        let router = Router::new().route(
            "/models/:target",
            post(|Path(target): Path<String>, headers: HeaderMap, Json(body): Json<Value>| async move {
                assert_eq!(target, "gemini-test:generateContent");
                assert_eq!(headers.get("x-goog-api-key").unwrap(), "secret");
                let prompt = body["contents"][0]["parts"][0]["text"].as_str().unwrap().to_string();
                Json(json!({
                    "candidates": [{ "content": { "parts": [{ "text": format!("echo: {}", prompt) }] } }]
                }))
            }),
        );
        let base = spawn_mock(router).await;

        let client = GeminiClient::new(
            format!("{}/", base),
            "secret".to_string(),
            "gemini-test".to_string(),
            Duration::from_secs(5),
        )
        .unwrap();

        let reply = client.generate("How much water for rice?").await.unwrap();
        assert_eq!(reply, "echo: How much water for rice?");
        assert_eq!(client.model_name(), "gemini-test");
    }

    #[tokio::test]
    async fn test_error_status_is_propagated() {
        let router = Router::new().route(
            "/models/:target",
            post(|| async { (axum::http::StatusCode::FORBIDDEN, "API key not valid") }),
        );
        let base = spawn_mock(router).await;

        let client = GeminiClient::new(
            base,
            "bad-key".to_string(),
            "gemini-test".to_string(),
            Duration::from_secs(5),
        )
        .unwrap();

        match client.generate("hi").await {
            Err(AppError::AiServiceError(msg)) => {
                assert!(msg.contains("403"));
                assert!(msg.contains("API key not valid"));
            }
            other => panic!("expected AI service error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_slow_service_times_out() {
        let router = Router::new().route(
            "/models/:target",
            post(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Json(json!({}))
            }),
        );
        let base = spawn_mock(router).await;

        let client = GeminiClient::new(
            base,
            "secret".to_string(),
            "gemini-test".to_string(),
            Duration::from_millis(200),
        )
        .unwrap();

        let err = client.generate("hi").await.unwrap_err();
        assert!(matches!(err, AppError::AiServiceTimeout(t) if t == Duration::from_millis(200)));
        assert_eq!(err.to_string(), "AI service timed out after 200ms");
    }
}
