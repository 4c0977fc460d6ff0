use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::constants::exam_prompt::OPTIONS_PER_QUESTION;
use crate::errors::{AppError, AppResult};
use crate::models::domain::RawQuestion;
use crate::services::question_source::{empty_response, parse_questions, QuestionSource};

const PROVIDER: &str = "gemini";

/// Question source backed by the Gemini `generateContent` REST endpoint.
pub struct GeminiQuestionSource {
    client: reqwest::Client,
    api_base: String,
    model: String,
    api_key: SecretString,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
    response_schema: Value,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

impl GenerateContentResponse {
    fn first_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .filter_map(|c| c.content)
            .flat_map(|c| c.parts)
            .find_map(|p| p.text)
    }
}

/// Response schema in the OpenAPI subset Gemini accepts.
pub fn response_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "topic": { "type": "STRING" },
                "statement": { "type": "STRING" },
                "options": {
                    "type": "ARRAY",
                    "items": { "type": "STRING" },
                    "minItems": OPTIONS_PER_QUESTION,
                    "maxItems": OPTIONS_PER_QUESTION
                },
                "correctAnswerIndex": { "type": "INTEGER" },
                "explanation": { "type": "STRING" }
            },
            "required": ["topic", "statement", "options", "correctAnswerIndex", "explanation"]
        }
    })
}

impl GeminiQuestionSource {
    pub fn new(
        client: reqwest::Client,
        api_base: impl Into<String>,
        model: impl Into<String>,
        api_key: SecretString,
    ) -> Self {
        Self {
            client,
            api_base: api_base.into(),
            model: model.into(),
            api_key,
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.api_base.trim_end_matches('/'),
            self.model
        )
    }

    fn build_request(prompt: &str) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(prompt.to_string()),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: response_schema(),
            },
        }
    }
}

#[async_trait]
impl QuestionSource for GeminiQuestionSource {
    async fn generate_questions(&self, prompt: &str) -> AppResult<Vec<RawQuestion>> {
        log::info!("Requesting questions from Gemini model {}", self.model);

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", self.api_key.expose_secret())
            .json(&Self::build_request(prompt))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::QuestionGeneration(format!(
                "Gemini responded with {}: {}",
                status, body
            )));
        }

        let payload: GenerateContentResponse = response.json().await?;
        let text = payload.first_text().ok_or_else(|| empty_response(PROVIDER))?;
        parse_questions(&text)
    }

    fn provider_name(&self) -> &'static str {
        PROVIDER
    }
}
