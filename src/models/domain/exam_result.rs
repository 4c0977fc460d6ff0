use chrono::Utc;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerRecord {
    pub question_id: u32,
    /// `None` when the question was left unanswered.
    pub selected_option: Option<u8>,
    pub is_correct: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamResult {
    pub score: u32,
    pub total_questions: u32,
    pub answers: Vec<AnswerRecord>,
    pub date: String,
}

impl ExamResult {
    /// Builds a result stamped with the current time; the score is derived
    /// from the records so the two can never disagree.
    pub fn new(answers: Vec<AnswerRecord>) -> Self {
        let score = answers.iter().filter(|a| a.is_correct).count() as u32;
        ExamResult {
            score,
            total_questions: answers.len() as u32,
            answers,
            date: Utc::now().to_rfc3339(),
        }
    }

    pub fn percentage(&self) -> u32 {
        percentage(self.score, self.total_questions)
    }

    pub fn passed(&self, threshold: Option<u32>) -> Option<bool> {
        threshold.map(|t| self.percentage() >= t)
    }
}

/// `round(100 * score / total)`, and 0 for an empty exam.
pub fn percentage(score: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    ((f64::from(score) * 100.0) / f64::from(total)).round() as u32
}
