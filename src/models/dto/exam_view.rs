use async_graphql::SimpleObject;
use serde::Serialize;

use crate::models::domain::{ExamAction, ExamProfile, ExamResult, ExamStep, Question};
use crate::services::exam_session::ExamSession;

/// Everything the page needs to draw the current screen.
#[derive(Debug, Clone, Serialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct ExamView {
    pub step: ExamStep,
    pub error: Option<String>,
    pub exam_code: String,
    pub exam_title: String,
    pub current_index: u32,
    pub total_questions: u32,
    pub answered_count: u32,
    pub question: Option<QuestionView>,
    pub selected_option: Option<u8>,
    pub actions: ActionFlags,
    pub result: Option<ResultView>,
}

#[derive(Debug, Clone, Serialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct OptionView {
    pub index: u8,
    pub letter: String,
    pub text: String,
}

/// The question being asked, without its answer key.
#[derive(Debug, Clone, Serialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct QuestionView {
    pub id: u32,
    pub number: u32,
    pub topic: String,
    pub statement: String,
    pub options: Vec<OptionView>,
}

#[derive(Debug, Clone, Serialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct ActionFlags {
    pub can_start: bool,
    pub can_select: bool,
    pub can_previous: bool,
    pub can_next: bool,
    pub can_finish: bool,
    pub can_retry: bool,
    pub can_home: bool,
}

#[derive(Debug, Clone, Serialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct ReviewItem {
    pub question_id: u32,
    pub topic: String,
    pub statement: String,
    pub options: Vec<OptionView>,
    pub correct_option: u8,
    pub selected_option: Option<u8>,
    pub is_correct: bool,
    pub explanation: String,
}

#[derive(Debug, Clone, Serialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct ResultView {
    pub score: u32,
    pub total_questions: u32,
    pub percentage: u32,
    /// Only set for standards that define a pass threshold.
    pub passed: Option<bool>,
    pub pass_threshold: Option<u32>,
    pub date: String,
    pub review: Vec<ReviewItem>,
}

/// `0 -> "A"`, `1 -> "B"`, ...
pub fn option_letter(index: usize) -> String {
    char::from(b'A' + index as u8).to_string()
}

fn option_views(question: &Question) -> Vec<OptionView> {
    question
        .options
        .iter()
        .enumerate()
        .map(|(index, text)| OptionView {
            index: index as u8,
            letter: option_letter(index),
            text: text.clone(),
        })
        .collect()
}

impl QuestionView {
    fn new(question: &Question, index: usize) -> Self {
        QuestionView {
            id: question.id,
            number: index as u32 + 1,
            topic: question.topic.clone(),
            statement: question.statement.clone(),
            options: option_views(question),
        }
    }
}

impl ResultView {
    pub fn new(result: &ExamResult, questions: &[Question], profile: ExamProfile) -> Self {
        let review = questions
            .iter()
            .zip(&result.answers)
            .map(|(question, answer)| ReviewItem {
                question_id: question.id,
                topic: question.topic.clone(),
                statement: question.statement.clone(),
                options: option_views(question),
                correct_option: question.correct_answer_index,
                selected_option: answer.selected_option,
                is_correct: answer.is_correct,
                explanation: question.explanation.clone(),
            })
            .collect();

        ResultView {
            score: result.score,
            total_questions: result.total_questions,
            percentage: result.percentage(),
            passed: result.passed(profile.pass_threshold()),
            pass_threshold: profile.pass_threshold(),
            date: result.date.clone(),
            review,
        }
    }
}

impl ExamView {
    pub fn from_session(session: &ExamSession, profile: ExamProfile) -> Self {
        let in_exam = session.step() == ExamStep::Exam;
        let current_index = session.current_index();

        ExamView {
            step: session.step(),
            error: session.error().map(str::to_string),
            exam_code: profile.code().to_string(),
            exam_title: profile.title().to_string(),
            current_index: current_index as u32,
            total_questions: session.questions().len() as u32,
            answered_count: session.answers().answered_count() as u32,
            question: session
                .current_question()
                .filter(|_| in_exam)
                .map(|q| QuestionView::new(q, current_index)),
            selected_option: if in_exam {
                session.answers().selection(current_index)
            } else {
                None
            },
            actions: ActionFlags {
                can_start: session.can(ExamAction::Start),
                can_select: session.can(ExamAction::Select),
                can_previous: session.can(ExamAction::Previous),
                can_next: session.can(ExamAction::Next),
                can_finish: session.can(ExamAction::Finish),
                can_retry: session.can(ExamAction::Retry),
                can_home: session.can(ExamAction::Home),
            },
            result: session
                .result()
                .map(|r| ResultView::new(r, session.questions(), profile)),
        }
    }
}
