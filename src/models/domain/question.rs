use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::constants::exam_prompt::OPTIONS_PER_QUESTION;
use crate::errors::{AppError, AppResult};

/// A question exactly as the question source returns it, before ids exist.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Validate, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RawQuestion {
    pub topic: String,
    pub statement: String,
    pub options: [String; OPTIONS_PER_QUESTION],
    #[validate(range(max = 3))]
    pub correct_answer_index: u8,
    pub explanation: String,
}

/// Object root for providers that only accept object-typed structured output.
#[derive(Clone, Debug, Deserialize, Serialize, JsonSchema)]
pub struct QuestionBatch {
    pub questions: Vec<RawQuestion>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: u32,
    pub topic: String,
    pub statement: String,
    pub options: [String; OPTIONS_PER_QUESTION],
    pub correct_answer_index: u8,
    pub explanation: String,
}

impl Question {
    pub fn is_correct(&self, selected: Option<u8>) -> bool {
        selected == Some(self.correct_answer_index)
    }
}

/// Where sequential question ids start.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub enum IdBase {
    Zero,
    One,
}

impl IdBase {
    fn offset(self) -> u32 {
        match self {
            IdBase::Zero => 0,
            IdBase::One => 1,
        }
    }
}

/// Turns a provider payload into questions with sequential ids, preserving order.
pub fn assign_ids(raw_questions: Vec<RawQuestion>, base: IdBase) -> Vec<Question> {
    raw_questions
        .into_iter()
        .zip(base.offset()..)
        .map(|(raw, id)| Question {
            id,
            topic: raw.topic,
            statement: raw.statement,
            options: raw.options,
            correct_answer_index: raw.correct_answer_index,
            explanation: raw.explanation,
        })
        .collect()
}

/// Checks every raw question, failing the whole batch on the first bad item.
pub fn validate_batch(raw_questions: &[RawQuestion]) -> AppResult<()> {
    if raw_questions.is_empty() {
        return Err(AppError::QuestionGeneration(
            "question source returned no questions".to_string(),
        ));
    }

    for (index, question) in raw_questions.iter().enumerate() {
        question.validate().map_err(|e| {
            AppError::QuestionGeneration(format!("question {} is malformed: {}", index, e))
        })?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::raw_question;

    #[test]
    fn raw_question_parses_camel_case_payload() {
        let json = r#"{
            "topic": "Evaluación",
            "statement": "¿Qué instrumento registra la presencia de un producto?",
            "options": ["Lista de cotejo", "Cuestionario", "Guía de observación", "Rúbrica"],
            "correctAnswerIndex": 0,
            "explanation": "La lista de cotejo verifica productos."
        }"#;

        let parsed: RawQuestion = serde_json::from_str(json).expect("payload should parse");
        assert_eq!(parsed.correct_answer_index, 0);
        assert_eq!(parsed.options[2], "Guía de observación");
    }

    #[test]
    fn raw_question_rejects_three_options() {
        let json = r#"{
            "topic": "t", "statement": "s",
            "options": ["a", "b", "c"],
            "correctAnswerIndex": 0, "explanation": "e"
        }"#;

        assert!(serde_json::from_str::<RawQuestion>(json).is_err());
    }

    #[test]
    fn raw_question_rejects_missing_explanation() {
        let json = r#"{
            "topic": "t", "statement": "s",
            "options": ["a", "b", "c", "d"],
            "correctAnswerIndex": 0
        }"#;

        assert!(serde_json::from_str::<RawQuestion>(json).is_err());
    }

    #[test]
    fn assign_ids_is_one_based_when_requested() {
        let questions = assign_ids(vec![raw_question(1), raw_question(0)], IdBase::One);

        let ids: Vec<u32> = questions.iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(questions[0].correct_answer_index, 1);
    }

    #[test]
    fn assign_ids_is_zero_based_when_requested() {
        let questions = assign_ids(vec![raw_question(1), raw_question(0)], IdBase::Zero);

        let ids: Vec<u32> = questions.iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![0, 1]);
    }

    #[test]
    fn validate_batch_rejects_out_of_range_answer_index() {
        let mut bad = raw_question(0);
        bad.correct_answer_index = 4;

        let result = validate_batch(&[raw_question(1), bad]);
        assert!(matches!(result, Err(AppError::QuestionGeneration(_))));
    }

    #[test]
    fn validate_batch_rejects_empty_payload() {
        assert!(validate_batch(&[]).is_err());
    }

    #[test]
    fn is_correct_treats_unanswered_as_wrong() {
        let question = assign_ids(vec![raw_question(2)], IdBase::One).remove(0);

        assert!(question.is_correct(Some(2)));
        assert!(!question.is_correct(Some(1)));
        assert!(!question.is_correct(None));
    }
}
