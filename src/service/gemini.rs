use serde_json::json;
use thiserror::Error;

use crate::dtos::chatdtos::ChatMessageDto;

const GEMINI_ENDPOINT: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent";

#[derive(Error, Debug)]
pub enum GeminiError {
    #[error("GEMINI_API_KEY is not configured")]
    MissingApiKey,

    #[error("Request to Gemini failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Gemini returned status {0}")]
    UpstreamStatus(reqwest::StatusCode),

    #[error("Gemini response had no generated text")]
    EmptyResponse,
}

/// Thin client for the generative-language upstream. No retries and no
/// timeout override; a hung upstream hangs the request.
#[derive(Debug, Clone)]
pub struct GeminiService {
    api_key: String,
    client: reqwest::Client,
}

impl GeminiService {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            client: reqwest::Client::new(),
        }
    }

    pub async fn generate_reply(
        &self,
        messages: &[ChatMessageDto],
    ) -> Result<String, GeminiError> {
        if self.api_key.is_empty() {
            return Err(GeminiError::MissingApiKey);
        }

        let contents: Vec<serde_json::Value> = messages
            .iter()
            .map(|m| {
                json!({
                    "role": map_role(&m.role),
                    "parts": [{ "text": m.content }]
                })
            })
            .collect();

        let payload = json!({ "contents": contents });

        let response = self
            .client
            .post(format!("{}?key={}", GEMINI_ENDPOINT, self.api_key))
            .header("Content-Type", "application/json")
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(GeminiError::UpstreamStatus(response.status()));
        }

        let body: serde_json::Value = response.json().await?;

        body["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .map(|s| s.to_string())
            .ok_or(GeminiError::EmptyResponse)
    }
}

fn map_role(role: &str) -> &'static str {
    match role {
        "assistant" | "model" => "model",
        _ => "user",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assistant_roles_map_to_model() {
        assert_eq!(map_role("assistant"), "model");
        assert_eq!(map_role("model"), "model");
        assert_eq!(map_role("user"), "user");
        assert_eq!(map_role("system"), "user");
    }

    #[tokio::test]
    async fn missing_api_key_fails_without_network() {
        let svc = GeminiService::new(String::new());
        let err = svc
            .generate_reply(&[ChatMessageDto {
                role: "user".to_string(),
                content: "hello".to_string(),
            }])
            .await
            .unwrap_err();
        assert!(matches!(err, GeminiError::MissingApiKey));
    }
}
