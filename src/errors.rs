use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use async_graphql::ErrorExtensions;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Question generation failed: {0}")]
    QuestionGeneration(String),

    #[error("Invalid action: {0}")]
    InvalidAction(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl AppError {
    fn error_code(&self) -> &'static str {
        match self {
            AppError::QuestionGeneration(_) => "QUESTION_GENERATION_FAILED",
            AppError::InvalidAction(_) => "INVALID_ACTION",
            AppError::ValidationError(_) => "VALIDATION_ERROR",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::QuestionGeneration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InvalidAction(_) => StatusCode::CONFLICT,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
            code: self.status_code().as_u16(),
        })
    }
}
impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::QuestionGeneration(format!("HTTP error: {}", err))
    }
}
impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::QuestionGeneration(format!("JSON error: {}", err))
    }
}
impl From<async_openai::error::OpenAIError> for AppError {
    fn from(err: async_openai::error::OpenAIError) -> Self {
        AppError::QuestionGeneration(format!("OpenAI error: {}", err))
    }
}
impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}
impl ErrorExtensions for AppError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string()).extend_with(|_err, e| {
            e.set("code", self.error_code());
        })
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(
            AppError::InvalidAction("test".into()).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::ValidationError("test".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::QuestionGeneration("test".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_messages() {
        let err = AppError::InvalidAction("finish is not allowed in Lobby".into());
        assert_eq!(err.to_string(), "Invalid action: finish is not allowed in Lobby");
    }

    #[test]
    fn test_json_error_maps_to_generation_failure() {
        let err: AppError = serde_json::from_str::<Vec<u8>>("not json").unwrap_err().into();
        assert!(matches!(err, AppError::QuestionGeneration(_)));
    }

    #[test]
    fn test_graphql_extension_carries_code() {
        let err = AppError::ValidationError("bad option".into()).extend();
        let extensions = serde_json::to_value(&err.extensions).expect("extensions serialize");
        assert_eq!(extensions["code"], "VALIDATION_ERROR");
    }
}
