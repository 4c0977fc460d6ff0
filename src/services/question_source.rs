use async_trait::async_trait;

use crate::errors::{AppError, AppResult};
use crate::models::domain::question::{validate_batch, QuestionBatch, RawQuestion};

/// A generative text service that can write a question set for a prompt.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionSource: Send + Sync {
    async fn generate_questions(&self, prompt: &str) -> AppResult<Vec<RawQuestion>>;

    fn provider_name(&self) -> &'static str;
}

/// Parses provider text into raw questions.
///
/// Accepts a bare JSON array or an object with a `questions` array, optionally
/// wrapped in a Markdown code fence. The batch is rejected as a whole if any
/// item does not match the question shape.
pub fn parse_questions(text: &str) -> AppResult<Vec<RawQuestion>> {
    let body = strip_code_fence(text.trim());

    let questions = if body.starts_with('{') {
        serde_json::from_str::<QuestionBatch>(body)?.questions
    } else {
        serde_json::from_str::<Vec<RawQuestion>>(body)?
    };

    validate_batch(&questions)?;
    Ok(questions)
}

fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    let rest = rest.trim_start_matches(|c: char| c.is_ascii_alphanumeric());
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

/// Builds the error for a response that carried no usable text.
pub fn empty_response(provider: &str) -> AppError {
    AppError::QuestionGeneration(format!("{} returned an empty response", provider))
}
