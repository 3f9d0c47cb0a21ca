/**
 * Answer Suggestions
 *
 * Asks the Gemini `generateContent` endpoint for a suggested answer to a
 * question and returns the trimmed text of the first candidate.
 */
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SuggestionError {
    #[error("suggestion service is not configured")]
    Unconfigured,

    #[error("suggestion request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("suggestion service returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("suggestion service returned no text")]
    EmptyResponse,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

/// Build the prompt sent for a question
pub fn build_prompt(question: &str) -> String {
    format!(
        "You are a helpful assistant that provides suggestions for answering questions in a forum.\n\
         The user has asked: \"{question}\"\n\n\
         Provide a helpful and concise suggestion for answering this question.\n\
         Focus on the key points and be specific.\n\n\
         Suggestion:"
    )
}

#[derive(Debug, Clone)]
pub struct SuggestionClient {
    client: Client,
    api_key: Option<String>,
    model: String,
    api_base: String,
}

impl SuggestionClient {
    pub fn new(client: Client, api_key: Option<String>, model: impl Into<String>, api_base: impl Into<String>) -> Self {
        Self {
            client,
            api_key: api_key.filter(|k| !k.is_empty()),
            model: model.into(),
            api_base: api_base.into(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Generate a suggested answer for a question
    pub async fn suggest(&self, question: &str) -> Result<String, SuggestionError> {
        let api_key = self.api_key.as_deref().ok_or(SuggestionError::Unconfigured)?;
        let url = format!("{}/models/{}:generateContent", self.api_base, self.model);
        let body = json!({
            "contents": [{"parts": [{"text": build_prompt(question)}]}]
        });

        let response = self
            .client
            .post(&url)
            .query(&[("key", api_key)])
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SuggestionError::Status { status, body });
        }

        let parsed: GenerateResponse = response.json().await?;
        let text: String = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|content| content.parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap_or_default();

        let text = text.trim();
        if text.is_empty() {
            return Err(SuggestionError::EmptyResponse);
        }
        Ok(text.to_string())
    }
}
