use std::env;
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use crate::constants::exam_prompt::DEFAULT_QUESTION_COUNT;
use crate::models::domain::ExamProfile;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuestionProvider {
    Gemini,
    OpenAi,
}

impl QuestionProvider {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "gemini" | "google" => Some(QuestionProvider::Gemini),
            "openai" => Some(QuestionProvider::OpenAi),
            _ => None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub web_server_host: String,
    pub web_server_port: u16,
    pub exam_profile: ExamProfile,
    pub question_count: usize,
    pub question_provider: QuestionProvider,
    pub gemini_api_key: SecretString,
    pub gemini_model: String,
    pub gemini_api_base: String,
    pub openai_api_key: SecretString,
    pub openai_model: String,
    pub openai_api_base: String,
    pub generation_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            exam_profile: env::var("EXAM_PROFILE")
                .ok()
                .and_then(|p| ExamProfile::from_code(&p))
                .unwrap_or_default(),
            question_count: env::var("QUESTION_COUNT")
                .ok()
                .and_then(|c| c.parse().ok())
                .filter(|c| *c > 0)
                .unwrap_or(DEFAULT_QUESTION_COUNT),
            question_provider: env::var("QUESTION_PROVIDER")
                .ok()
                .and_then(|p| QuestionProvider::from_name(&p))
                .unwrap_or(QuestionProvider::Gemini),
            gemini_api_key: SecretString::from(
                env::var("GEMINI_API_KEY")
                    .or_else(|_| env::var("API_KEY"))
                    .unwrap_or_default(),
            ),
            gemini_model: env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| "gemini-3-flash-preview".to_string()),
            gemini_api_base: env::var("GEMINI_API_BASE")
                .unwrap_or_else(|_| "https://generativelanguage.googleapis.com".to_string()),
            openai_api_key: SecretString::from(env::var("OPENAI_API_KEY").unwrap_or_default()),
            openai_model: env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string()),
            openai_api_base: env::var("OPENAI_API_BASE")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
            generation_timeout_secs: env::var("GENERATION_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(120),
        }
    }

    pub fn generation_timeout(&self) -> Duration {
        Duration::from_secs(self.generation_timeout_secs)
    }

    /// Warns about settings that will make every generation fail.
    /// Returns `false` if any such setting was found.
    pub fn validate(&self) -> bool {
        let key = match self.question_provider {
            QuestionProvider::Gemini => &self.gemini_api_key,
            QuestionProvider::OpenAi => &self.openai_api_key,
        };

        if key.expose_secret().trim().is_empty() {
            log::warn!(
                "No API key configured for {:?}; question generation will fail",
                self.question_provider
            );
            return false;
        }
        true
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            exam_profile: ExamProfile::Ec0217,
            question_count: 2,
            question_provider: QuestionProvider::Gemini,
            gemini_api_key: SecretString::from("test_gemini_key".to_string()),
            gemini_model: "gemini-test".to_string(),
            gemini_api_base: "http://127.0.0.1:9".to_string(),
            openai_api_key: SecretString::from(String::new()),
            openai_model: "gpt-test".to_string(),
            openai_api_base: "http://127.0.0.1:9/v1".to_string(),
            generation_timeout_secs: 1,
        }
    }
}
