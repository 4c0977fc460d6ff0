use async_openai::{config::OpenAIConfig, Client};
use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::errors::AppResult;
use crate::models::domain::question::{QuestionBatch, RawQuestion};
use crate::services::question_source::{empty_response, parse_questions, QuestionSource};

const PROVIDER: &str = "openai";
const SCHEMA_NAME: &str = "exam_questions";

/// Question source backed by an OpenAI-compatible chat completions API.
pub struct OpenAiQuestionSource {
    client: Client<OpenAIConfig>,
    model: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletion {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

/// JSON schema of the structured output, with the question list under `questions`.
pub fn response_schema() -> AppResult<Value> {
    let schema = schemars::schema_for!(QuestionBatch);
    Ok(serde_json::to_value(&schema)?)
}

impl OpenAiQuestionSource {
    pub fn new(api_base: &str, api_key: &SecretString, model: impl Into<String>) -> Self {
        let config = OpenAIConfig::new()
            .with_api_base(api_base)
            .with_api_key(api_key.expose_secret());

        Self {
            client: Client::with_config(config),
            model: model.into(),
        }
    }

    fn build_request(&self, prompt: &str) -> AppResult<Value> {
        Ok(json!({
            "model": self.model,
            "messages": [
                { "role": "user", "content": prompt }
            ],
            "response_format": {
                "type": "json_schema",
                "json_schema": {
                    "name": SCHEMA_NAME,
                    "schema": response_schema()?,
                    "strict": false
                }
            }
        }))
    }
}

#[async_trait]
impl QuestionSource for OpenAiQuestionSource {
    async fn generate_questions(&self, prompt: &str) -> AppResult<Vec<RawQuestion>> {
        log::info!("Requesting questions from OpenAI model {}", self.model);

        let request = self.build_request(prompt)?;
        let completion: ChatCompletion = self.client.chat().create_byot(request).await?;

        let text = completion
            .choices
            .into_iter()
            .find_map(|choice| choice.message.content)
            .ok_or_else(|| empty_response(PROVIDER))?;

        parse_questions(&text)
    }

    fn provider_name(&self) -> &'static str {
        PROVIDER
    }
}
