use std::sync::Arc;

use crate::{
    config::{Config, QuestionProvider},
    services::{
        exam_service::ExamService, gemini_question_source::GeminiQuestionSource,
        openai_question_source::OpenAiQuestionSource, question_source::QuestionSource,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub exam_service: Arc<ExamService>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        config.validate();

        let source: Arc<dyn QuestionSource> = match config.question_provider {
            QuestionProvider::Gemini => Arc::new(GeminiQuestionSource::new(
                reqwest::Client::new(),
                config.gemini_api_base.clone(),
                config.gemini_model.clone(),
                config.gemini_api_key.clone(),
            )),
            QuestionProvider::OpenAi => Arc::new(OpenAiQuestionSource::new(
                &config.openai_api_base,
                &config.openai_api_key,
                config.openai_model.clone(),
            )),
        };
        log::info!(
            "Using {} question source for {}",
            source.provider_name(),
            config.exam_profile
        );

        Self::with_source(config, source)
    }

    /// Builds the state around an already constructed question source.
    pub fn with_source(config: Config, source: Arc<dyn QuestionSource>) -> Self {
        let exam_service = Arc::new(ExamService::new(
            source,
            config.exam_profile,
            config.question_count,
            config.generation_timeout(),
        ));

        Self { exam_service }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::ExamStep;

    #[test]
    fn test_app_state_is_cloneable() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[tokio::test]
    async fn test_new_state_starts_in_lobby() {
        let state = AppState::new(Config::test_config());

        let view = state.exam_service.view().await;
        assert_eq!(view.step, ExamStep::Lobby);
        assert_eq!(view.exam_code, "EC0217.01");
    }
}
