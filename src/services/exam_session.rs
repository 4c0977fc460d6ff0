use uuid::Uuid;

use crate::errors::{AppError, AppResult};
use crate::models::domain::{ExamAction, ExamProfile, ExamResult, ExamStep, Question};
use crate::services::answer_tracker::AnswerTracker;

/// Identifies one generation request. Only the ticket issued by the latest
/// start or retry may move the session out of `Generating`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GenerationTicket(Uuid);

impl GenerationTicket {
    fn issue() -> Self {
        GenerationTicket(Uuid::new_v4())
    }
}

impl std::fmt::Display for GenerationTicket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What happened to a generation outcome handed to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied(ExamStep),
    Stale,
}

/// The single exam attempt: current screen plus all data the screens show.
#[derive(Debug, Clone, Default)]
pub struct ExamSession {
    profile: ExamProfile,
    step: ExamStep,
    questions: Vec<Question>,
    current_index: usize,
    answers: AnswerTracker,
    result: Option<ExamResult>,
    error: Option<String>,
    active_ticket: Option<GenerationTicket>,
}

impl ExamSession {
    pub fn new(profile: ExamProfile) -> Self {
        Self {
            profile,
            ..Self::default()
        }
    }

    pub fn step(&self) -> ExamStep {
        self.step
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_question(&self) -> Option<&Question> {
        match self.step {
            ExamStep::Exam | ExamStep::Results => self.questions.get(self.current_index),
            _ => None,
        }
    }

    pub fn answers(&self) -> &AnswerTracker {
        &self.answers
    }

    pub fn result(&self) -> Option<&ExamResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn active_ticket(&self) -> Option<GenerationTicket> {
        self.active_ticket
    }

    fn is_last_question(&self) -> bool {
        !self.questions.is_empty() && self.current_index + 1 == self.questions.len()
    }

    fn has_next_question(&self) -> bool {
        self.current_index + 1 < self.questions.len()
    }

    /// Whether `action` would be accepted right now.
    pub fn can(&self, action: ExamAction) -> bool {
        match (self.step, action) {
            (ExamStep::Lobby, ExamAction::Start) => true,
            (ExamStep::Exam, ExamAction::Select) => true,
            (ExamStep::Exam, ExamAction::Next) => self.has_next_question(),
            (ExamStep::Exam, ExamAction::Previous) => self.current_index > 0,
            (ExamStep::Exam, ExamAction::Finish) => {
                self.is_last_question() || self.answers.all_answered(self.questions.len())
            }
            (ExamStep::Results, ExamAction::Retry) => true,
            (ExamStep::Generating | ExamStep::Exam | ExamStep::Results, ExamAction::Home) => true,
            _ => false,
        }
    }

    fn ensure(&self, action: ExamAction) -> AppResult<()> {
        if self.can(action) {
            Ok(())
        } else {
            log::warn!("Rejected {} action while in {}", action, self.step);
            Err(AppError::InvalidAction(format!(
                "{} is not allowed in {}",
                action, self.step
            )))
        }
    }

    /// Lobby -> Generating.
    pub fn start(&mut self) -> AppResult<GenerationTicket> {
        self.ensure(ExamAction::Start)?;
        Ok(self.begin_generation())
    }

    /// Results -> Generating.
    pub fn retry(&mut self) -> AppResult<GenerationTicket> {
        self.ensure(ExamAction::Retry)?;
        Ok(self.begin_generation())
    }

    fn begin_generation(&mut self) -> GenerationTicket {
        let ticket = GenerationTicket::issue();
        log::info!("Exam {} -> generating (ticket {})", self.step, ticket);

        self.step = ExamStep::Generating;
        self.error = None;
        self.questions.clear();
        self.current_index = 0;
        self.answers.clear();
        self.result = None;
        self.active_ticket = Some(ticket);
        ticket
    }

    /// Applies a generation outcome if `ticket` is still the one being waited on.
    /// An empty question set counts as a failure.
    pub fn complete_generation(
        &mut self,
        ticket: GenerationTicket,
        outcome: AppResult<Vec<Question>>,
    ) -> Completion {
        if self.step != ExamStep::Generating || self.active_ticket != Some(ticket) {
            log::warn!(
                "Discarding stale generation result for ticket {} (session is in {})",
                ticket,
                self.step
            );
            return Completion::Stale;
        }

        self.active_ticket = None;
        let outcome = outcome.and_then(|questions| {
            if questions.is_empty() {
                Err(AppError::QuestionGeneration(
                    "question set is empty".to_string(),
                ))
            } else {
                Ok(questions)
            }
        });
        match outcome {
            Ok(questions) => {
                log::info!("Exam generating -> exam with {} questions", questions.len());
                self.questions = questions;
                self.current_index = 0;
                self.answers.clear();
                self.step = ExamStep::Exam;
            }
            Err(err) => {
                log::error!("Question generation failed: {}", err);
                self.questions.clear();
                self.error = Some(self.profile.generation_failed_message().to_string());
                self.step = ExamStep::Lobby;
            }
        }
        Completion::Applied(self.step)
    }

    /// Selects an option for the question currently shown.
    pub fn select_answer(&mut self, option_index: usize) -> AppResult<()> {
        self.record_answer(self.current_index, option_index)
    }

    pub fn record_answer(&mut self, question_index: usize, option_index: usize) -> AppResult<()> {
        self.ensure(ExamAction::Select)?;
        self.answers
            .record_answer(question_index, option_index, self.questions.len())
    }

    pub fn next(&mut self) -> AppResult<()> {
        self.ensure(ExamAction::Next)?;
        self.current_index += 1;
        Ok(())
    }

    pub fn previous(&mut self) -> AppResult<()> {
        self.ensure(ExamAction::Previous)?;
        self.current_index -= 1;
        Ok(())
    }

    /// Exam -> Results.
    pub fn finish(&mut self) -> AppResult<&ExamResult> {
        self.ensure(ExamAction::Finish)?;

        let result = self.answers.finalize(&self.questions);
        log::info!(
            "Exam exam -> results, score {}/{}",
            result.score,
            result.total_questions
        );
        self.step = ExamStep::Results;
        Ok(&*self.result.insert(result))
    }

    /// Exam, Results or Generating -> Lobby. Leaving `Generating` abandons the
    /// outstanding request.
    pub fn home(&mut self) -> AppResult<()> {
        self.ensure(ExamAction::Home)?;
        log::info!("Exam {} -> lobby", self.step);

        self.step = ExamStep::Lobby;
        self.questions.clear();
        self.current_index = 0;
        self.answers.clear();
        self.result = None;
        self.active_ticket = None;
        Ok(())
    }
}
