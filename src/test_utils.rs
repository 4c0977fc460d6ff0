use crate::models::domain::{assign_ids, IdBase, Question, RawQuestion};

#[cfg(test)]
pub mod fixtures {
    use super::*;

    /// Creates a raw question whose answer key is `correct`
    pub fn raw_question(correct: u8) -> RawQuestion {
        RawQuestion {
            topic: "Técnicas Instruccionales".to_string(),
            statement: format!("Reactivo con clave {}", correct),
            options: [
                "Expositiva".to_string(),
                "Demostrativa".to_string(),
                "Diálogo-Discusión".to_string(),
                "Lluvia de ideas".to_string(),
            ],
            correct_answer_index: correct,
            explanation: "Fundamento del reactivo.".to_string(),
        }
    }

    /// Creates `count` raw questions cycling through every answer key
    pub fn raw_question_set(count: usize) -> Vec<RawQuestion> {
        (0..count).map(|i| raw_question((i % 4) as u8)).collect()
    }

    /// Creates `count` questions with one-based ids
    pub fn question_set(count: usize) -> Vec<Question> {
        assign_ids(raw_question_set(count), IdBase::One)
    }

    /// Question A keyed to option 1, question B keyed to option 0
    pub fn two_question_exam() -> Vec<Question> {
        assign_ids(vec![raw_question(1), raw_question(0)], IdBase::One)
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixtures_two_question_exam() {
        let questions = two_question_exam();
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].correct_answer_index, 1);
        assert_eq!(questions[1].correct_answer_index, 0);
    }

    #[test]
    fn test_fixtures_question_set_cycles_answer_keys() {
        let questions = question_set(6);
        let keys: Vec<u8> = questions.iter().map(|q| q.correct_answer_index).collect();
        assert_eq!(keys, vec![0, 1, 2, 3, 0, 1]);
        assert!(questions.iter().all(|q| q.options.len() == 4));
    }
}
