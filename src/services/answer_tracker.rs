use std::collections::BTreeMap;

use crate::constants::exam_prompt::OPTIONS_PER_QUESTION;
use crate::errors::{AppError, AppResult};
use crate::models::domain::{AnswerRecord, ExamResult, Question};

/// Live selections for the attempt in progress, keyed by question index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerTracker {
    selections: BTreeMap<usize, u8>,
}

impl AnswerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records (or replaces) the selection for one question.
    pub fn record_answer(
        &mut self,
        question_index: usize,
        option_index: usize,
        total_questions: usize,
    ) -> AppResult<()> {
        if question_index >= total_questions {
            return Err(AppError::ValidationError(format!(
                "question index {} is out of range for {} questions",
                question_index, total_questions
            )));
        }
        if option_index >= OPTIONS_PER_QUESTION {
            return Err(AppError::ValidationError(format!(
                "option index {} is out of range for {} options",
                option_index, OPTIONS_PER_QUESTION
            )));
        }

        self.selections.insert(question_index, option_index as u8);
        Ok(())
    }

    pub fn selection(&self, question_index: usize) -> Option<u8> {
        self.selections.get(&question_index).copied()
    }

    pub fn answered_count(&self) -> usize {
        self.selections.len()
    }

    pub fn all_answered(&self, total_questions: usize) -> bool {
        total_questions > 0 && (0..total_questions).all(|i| self.selections.contains_key(&i))
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    pub fn clear(&mut self) {
        self.selections.clear();
    }

    /// One record per question in order; unanswered questions count as wrong.
    pub fn answer_records(&self, questions: &[Question]) -> Vec<AnswerRecord> {
        questions
            .iter()
            .enumerate()
            .map(|(index, question)| {
                let selected_option = self.selection(index);
                AnswerRecord {
                    question_id: question.id,
                    selected_option,
                    is_correct: question.is_correct(selected_option),
                }
            })
            .collect()
    }

    pub fn finalize(&self, questions: &[Question]) -> ExamResult {
        ExamResult::new(self.answer_records(questions))
    }
}
