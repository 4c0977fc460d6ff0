use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use crate::errors::{AppError, AppResult};
use crate::models::domain::question::validate_batch;
use crate::models::domain::{assign_ids, ExamProfile, ExamStep, Question};
use crate::models::dto::exam_view::ExamView;
use crate::services::exam_session::{Completion, ExamSession, GenerationTicket};
use crate::services::question_source::QuestionSource;

/// Owns the exam session and the one outstanding question request.
pub struct ExamService {
    session: RwLock<ExamSession>,
    generation_handle: RwLock<Option<JoinHandle<()>>>,
    source: Arc<dyn QuestionSource>,
    profile: ExamProfile,
    question_count: usize,
    generation_timeout: Duration,
}

impl ExamService {
    pub fn new(
        source: Arc<dyn QuestionSource>,
        profile: ExamProfile,
        question_count: usize,
        generation_timeout: Duration,
    ) -> Self {
        Self {
            session: RwLock::new(ExamSession::new(profile)),
            generation_handle: RwLock::new(None),
            source,
            profile,
            question_count,
            generation_timeout,
        }
    }

    pub async fn view(&self) -> ExamView {
        let session = self.session.read().await;
        ExamView::from_session(&session, self.profile)
    }

    /// Lobby -> Generating, fetching in the background.
    pub async fn start_exam(self: &Arc<Self>) -> AppResult<ExamView> {
        let mut session = self.session.write().await;
        let ticket = session.start()?;
        self.spawn_generation(ticket).await;
        Ok(ExamView::from_session(&session, self.profile))
    }

    /// Results -> Generating, fetching in the background.
    pub async fn retry_exam(self: &Arc<Self>) -> AppResult<ExamView> {
        let mut session = self.session.write().await;
        let ticket = session.retry()?;
        self.spawn_generation(ticket).await;
        Ok(ExamView::from_session(&session, self.profile))
    }

    pub async fn start(&self) -> AppResult<GenerationTicket> {
        self.session.write().await.start()
    }

    pub async fn retry(&self) -> AppResult<GenerationTicket> {
        self.session.write().await.retry()
    }

    /// Replaces any running fetch with one for `ticket`, so at most one
    /// provider request is in flight.
    async fn spawn_generation(self: &Arc<Self>, ticket: GenerationTicket) {
        let mut handle = self.generation_handle.write().await;
        if let Some(previous) = handle.take() {
            abort_generation(previous).await;
        }

        let service = Arc::clone(self);
        *handle = Some(tokio::spawn(async move {
            service.generate(ticket).await;
        }));
    }

    async fn cancel_generation(&self) {
        if let Some(handle) = self.generation_handle.write().await.take() {
            abort_generation(handle).await;
        }
    }

    /// Fetches a question set and hands the outcome to the session. The lock
    /// is not held while the provider is working.
    pub async fn generate(&self, ticket: GenerationTicket) -> Completion {
        let outcome = self.fetch_questions().await;
        self.session.write().await.complete_generation(ticket, outcome)
    }

    pub async fn fetch_questions(&self) -> AppResult<Vec<Question>> {
        let prompt = self.profile.prompt(self.question_count);
        log::info!(
            "Generating {} questions for {} via {}",
            self.question_count,
            self.profile,
            self.source.provider_name()
        );

        let raw = tokio::time::timeout(
            self.generation_timeout,
            self.source.generate_questions(&prompt),
        )
        .await
        .map_err(|_| {
            AppError::QuestionGeneration(format!(
                "no response within {} seconds",
                self.generation_timeout.as_secs()
            ))
        })??;
        validate_batch(&raw)?;

        if raw.len() != self.question_count {
            log::warn!(
                "Requested {} questions but {} returned {}",
                self.question_count,
                self.source.provider_name(),
                raw.len()
            );
        }

        Ok(assign_ids(raw, self.profile.id_base()))
    }

    pub async fn select_answer(
        &self,
        question_index: Option<usize>,
        option: usize,
    ) -> AppResult<ExamView> {
        let mut session = self.session.write().await;
        match question_index {
            Some(index) => session.record_answer(index, option)?,
            None => session.select_answer(option)?,
        }
        Ok(ExamView::from_session(&session, self.profile))
    }

    pub async fn next_question(&self) -> AppResult<ExamView> {
        let mut session = self.session.write().await;
        session.next()?;
        Ok(ExamView::from_session(&session, self.profile))
    }

    pub async fn previous_question(&self) -> AppResult<ExamView> {
        let mut session = self.session.write().await;
        session.previous()?;
        Ok(ExamView::from_session(&session, self.profile))
    }

    pub async fn finish_exam(&self) -> AppResult<ExamView> {
        let mut session = self.session.write().await;
        session.finish()?;
        Ok(ExamView::from_session(&session, self.profile))
    }

    /// Back to the lobby. Leaving `Generating` also aborts the fetch.
    pub async fn go_home(&self) -> AppResult<ExamView> {
        let mut session = self.session.write().await;
        let was_generating = session.step() == ExamStep::Generating;
        session.home()?;
        if was_generating {
            self.cancel_generation().await;
        }
        Ok(ExamView::from_session(&session, self.profile))
    }
}

/// Aborts a fetch task and waits until its provider future has been dropped.
async fn abort_generation(handle: JoinHandle<()>) {
    if handle.is_finished() {
        return;
    }
    handle.abort();
    match handle.await {
        Err(err) if err.is_cancelled() => log::info!("Aborted outstanding question request"),
        Err(err) => log::error!("Question request task failed: {}", err),
        Ok(()) => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::constants::exam_prompt::GENERATION_FAILED_MESSAGE;
    use crate::models::domain::RawQuestion;
    use crate::services::question_source::MockQuestionSource;
    use crate::test_utils::fixtures::{raw_question, raw_question_set};
    use async_trait::async_trait;

    fn service_with(source: MockQuestionSource, profile: ExamProfile, count: usize) -> ExamService {
        ExamService::new(Arc::new(source), profile, count, Duration::from_secs(5))
    }

    fn mock_returning(questions: Vec<RawQuestion>) -> MockQuestionSource {
        let mut source = MockQuestionSource::new();
        source.expect_provider_name().return_const("mock");
        source
            .expect_generate_questions()
            .times(1)
            .returning(move |_| Ok(questions.clone()));
        source
    }

    #[tokio::test]
    async fn two_question_attempt_scores_one() {
        let service = service_with(
            mock_returning(vec![raw_question(1), raw_question(0)]),
            ExamProfile::Ec0217,
            2,
        );

        let ticket = service.start().await.unwrap();
        assert_eq!(service.view().await.step, ExamStep::Generating);
        assert_eq!(service.generate(ticket).await, Completion::Applied(ExamStep::Exam));

        service.select_answer(None, 1).await.unwrap();
        service.next_question().await.unwrap();
        service.select_answer(None, 2).await.unwrap();
        let view = service.finish_exam().await.unwrap();

        let result = view.result.expect("result after finish");
        assert_eq!(view.step, ExamStep::Results);
        assert_eq!(result.score, 1);
        assert_eq!(result.review[0].question_id, 1);
        assert!(result.review[0].is_correct);
        assert_eq!(result.review[1].question_id, 2);
        assert_eq!(result.review[1].selected_option, Some(2));
        assert!(!result.review[1].is_correct);
    }

    #[tokio::test]
    async fn failed_fetch_returns_to_lobby_with_fixed_message() {
        let mut source = MockQuestionSource::new();
        source.expect_provider_name().return_const("mock");
        source
            .expect_generate_questions()
            .returning(|_| Err(AppError::QuestionGeneration("network down".into())));
        let service = service_with(source, ExamProfile::Ec0217, 20);

        let ticket = service.start().await.unwrap();
        service.generate(ticket).await;

        let view = service.view().await;
        assert_eq!(view.step, ExamStep::Lobby);
        assert_eq!(view.error.as_deref(), Some(GENERATION_FAILED_MESSAGE));
        assert_eq!(view.total_questions, 0);
    }

    #[tokio::test]
    async fn prompt_names_configured_standard_and_count() {
        let mut source = MockQuestionSource::new();
        source.expect_provider_name().return_const("mock");
        source
            .expect_generate_questions()
            .withf(|prompt: &str| prompt.contains("EC0201.01") && prompt.contains("20 preguntas"))
            .times(1)
            .returning(|_| Ok(raw_question_set(20)));
        let service = service_with(source, ExamProfile::Ec0201, 20);

        let questions = service.fetch_questions().await.unwrap();

        assert_eq!(questions.len(), 20);
        assert_eq!(questions[0].id, 0);
        assert_eq!(questions[19].id, 19);
    }

    #[tokio::test]
    async fn start_exam_spawns_generation_in_background() {
        let service = Arc::new(service_with(
            mock_returning(raw_question_set(3)),
            ExamProfile::Ec0217,
            3,
        ));

        let view = service.start_exam().await.unwrap();
        assert_eq!(view.step, ExamStep::Generating);
        assert!(!view.actions.can_start);

        let mut step = ExamStep::Generating;
        for _ in 0..100 {
            step = service.view().await.step;
            if step != ExamStep::Generating {
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        assert_eq!(step, ExamStep::Exam);
    }

    #[tokio::test]
    async fn home_from_results_clears_attempt() {
        let service = service_with(mock_returning(raw_question_set(2)), ExamProfile::Ec0217, 2);
        let ticket = service.start().await.unwrap();
        service.generate(ticket).await;
        service.select_answer(Some(1), 3).await.unwrap();
        service.next_question().await.unwrap();
        service.finish_exam().await.unwrap();

        let view = service.go_home().await.unwrap();

        assert_eq!(view.step, ExamStep::Lobby);
        assert_eq!(view.total_questions, 0);
        assert_eq!(view.answered_count, 0);
        assert!(view.result.is_none());
    }

    #[tokio::test]
    async fn out_of_range_selection_is_rejected() {
        let service = service_with(mock_returning(raw_question_set(2)), ExamProfile::Ec0217, 2);
        let ticket = service.start().await.unwrap();
        service.generate(ticket).await;

        let err = service.select_answer(Some(5), 0).await.unwrap_err();

        assert!(matches!(err, AppError::ValidationError(_)));
        assert_eq!(service.view().await.answered_count, 0);
    }

    struct SlowSource;

    #[async_trait]
    impl QuestionSource for SlowSource {
        async fn generate_questions(&self, _prompt: &str) -> AppResult<Vec<RawQuestion>> {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(raw_question_set(2))
        }

        fn provider_name(&self) -> &'static str {
            "slow"
        }
    }

    #[tokio::test]
    async fn slow_provider_times_out_as_generation_failure() {
        let service = ExamService::new(
            Arc::new(SlowSource),
            ExamProfile::Ec0217,
            2,
            Duration::from_millis(20),
        );

        let ticket = service.start().await.unwrap();
        service.generate(ticket).await;

        let view = service.view().await;
        assert_eq!(view.step, ExamStep::Lobby);
        assert!(view.error.is_some());
    }

    #[tokio::test]
    async fn response_after_cancel_does_not_reopen_exam() {
        let service = service_with(mock_returning(raw_question_set(2)), ExamProfile::Ec0217, 2);
        let ticket = service.start().await.unwrap();
        service.go_home().await.unwrap();

        assert_eq!(service.generate(ticket).await, Completion::Stale);
        assert_eq!(service.view().await.step, ExamStep::Lobby);
    }

    #[tokio::test]
    async fn empty_question_set_is_a_generation_failure() {
        let service = service_with(mock_returning(Vec::new()), ExamProfile::Ec0217, 2);

        let ticket = service.start().await.unwrap();
        assert_eq!(service.generate(ticket).await, Completion::Applied(ExamStep::Lobby));

        let view = service.view().await;
        assert_eq!(view.error.as_deref(), Some(GENERATION_FAILED_MESSAGE));
        assert!(view.question.is_none());
        assert!(!view.actions.can_next);
        assert!(service.next_question().await.is_err());
    }

    /// Tracks how many provider calls overlap.
    #[derive(Default)]
    struct CountingSource {
        calls: AtomicUsize,
        in_flight: AtomicUsize,
        max_in_flight: AtomicUsize,
    }

    struct InFlight<'a>(&'a AtomicUsize);

    impl Drop for InFlight<'_> {
        fn drop(&mut self) {
            self.0.fetch_sub(1, Ordering::SeqCst);
        }
    }

    #[async_trait]
    impl QuestionSource for CountingSource {
        async fn generate_questions(&self, _prompt: &str) -> AppResult<Vec<RawQuestion>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.max_in_flight.fetch_max(current, Ordering::SeqCst);
            let _guard = InFlight(&self.in_flight);

            tokio::time::sleep(Duration::from_millis(200)).await;
            Ok(raw_question_set(2))
        }

        fn provider_name(&self) -> &'static str {
            "counting"
        }
    }

    #[tokio::test]
    async fn cancel_then_start_keeps_one_request_in_flight() {
        let source = Arc::new(CountingSource::default());
        let service = Arc::new(ExamService::new(
            source.clone(),
            ExamProfile::Ec0217,
            2,
            Duration::from_secs(5),
        ));

        service.start_exam().await.unwrap();
        tokio::time::sleep(Duration::from_millis(20)).await;
        service.go_home().await.unwrap();
        assert_eq!(source.in_flight.load(Ordering::SeqCst), 0);

        service.start_exam().await.unwrap();
        tokio::time::sleep(Duration::from_millis(20)).await;

        assert_eq!(source.calls.load(Ordering::SeqCst), 2);
        assert_eq!(source.max_in_flight.load(Ordering::SeqCst), 1);

        let mut step = ExamStep::Generating;
        for _ in 0..100 {
            step = service.view().await.step;
            if step != ExamStep::Generating {
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        assert_eq!(step, ExamStep::Exam);
        assert_eq!(source.max_in_flight.load(Ordering::SeqCst), 1);
    }
}
